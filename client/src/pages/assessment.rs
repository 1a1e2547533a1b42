//! Voice interview assessment page.
//!
//! ARCHITECTURE
//! ============
//! The page owns the `AssessmentState` signal and maps it onto the status
//! badge, the orb and the center icon. The camera tile is mounted alongside
//! and shares nothing with the page. Dev controls force each state
//! transition until a live voice session drives them.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::hooks::use_query_map;

use crate::components::circle_animation::{CircleAnimation, DEFAULT_SIZE};
use crate::components::floating_camera::FloatingCamera;
use crate::components::icons::{HeroIcon, Icon};
use crate::state::assessment::{AssessmentState, CenterIcon, ConnectionStatus};

#[cfg(test)]
#[path = "assessment_test.rs"]
mod assessment_test;

/// Query parameter that reveals dev controls in release builds.
pub const DEV_QUERY_PARAM: &str = "dev";

#[component]
pub fn AssessmentPage() -> impl IntoView {
    let state = RwSignal::new(AssessmentState::default());
    let query = use_query_map();
    let show_dev_controls =
        move || dev_controls_visible(cfg!(debug_assertions), query.with(|q| q.get(DEV_QUERY_PARAM)).as_deref());

    let color = Signal::derive(move || state.with(|s| s.animation_color().to_owned()));
    let active = Signal::derive(move || state.with(AssessmentState::animation_active));
    let speaking = Signal::derive(move || state.with(|s| s.is_speaking));

    let badge_class = move || state.with(|s| s.badge_tone().class());
    let dot_class = move || badge_dot_class(state.with(AssessmentState::badge_pulses));
    let status_message = move || state.with(AssessmentState::status_message);

    view! {
        <div class="assessment">
            <header class="assessment__header">
                <h1 class="assessment__title">"Hirewise Interview"</h1>
                <p class="assessment__subtitle">
                    "Experience a professional interview with our intelligent assessment system"
                </p>
            </header>

            <div class="assessment__info">
                <span class="assessment__info-item">
                    <HeroIcon icon=Icon::Microphone class="assessment__info-icon"/>
                    "Speak naturally"
                </span>
                <span class="assessment__info-sep"></span>
                <span>"15-20 min"</span>
            </div>

            <main class="assessment__main">
                <div class=badge_class>
                    <span class=dot_class></span>
                    {status_message}
                </div>

                <div class="assessment__stage">
                    <div class="assessment__glow"></div>
                    <div class="assessment__layer">
                        <CircleAnimation active=active color=color speaking=speaking size=DEFAULT_SIZE/>
                    </div>
                    <div class="assessment__layer">{move || center_icon_view(state.with(AssessmentState::center_icon))}</div>
                </div>
            </main>

            <Show when=show_dev_controls>
                <DevControls state=state/>
            </Show>

            <FloatingCamera/>
        </div>
    }
}

/// Buttons forcing each status, speaking and error transition.
#[component]
fn DevControls(state: RwSignal<AssessmentState>) -> impl IntoView {
    view! {
        <section class="dev-controls">
            <p class="dev-controls__title">"Dev Controls"</p>
            <div class="dev-controls__grid">
                {ConnectionStatus::ALL
                    .into_iter()
                    .map(|status| {
                        view! {
                            <button
                                class="dev-controls__button"
                                on:click=move |_| state.update(|s| s.set_status(status))
                            >
                                {status.label()}
                            </button>
                        }
                    })
                    .collect_view()}
                <button
                    class="dev-controls__button dev-controls__button--wide"
                    on:click=move |_| state.update(AssessmentState::toggle_speaking)
                >
                    "Toggle Speaking"
                </button>
                <button
                    class="dev-controls__button dev-controls__button--wide"
                    on:click=move |_| state.update(AssessmentState::toggle_error)
                >
                    "Toggle Error"
                </button>
            </div>
        </section>
    }
}

fn center_icon_view(icon: CenterIcon) -> AnyView {
    match icon {
        CenterIcon::Warning(message) => view! {
            <div class="assessment__warning">
                <HeroIcon icon=Icon::ExclamationTriangle class="assessment__warning-icon"/>
                <p class="assessment__warning-text">{message}</p>
            </div>
        }
        .into_any(),
        CenterIcon::Speaker => view! {
            <div class="assessment__center">
                <HeroIcon icon=Icon::SpeakerWave class="assessment__center-icon assessment__center-icon--speaking"/>
            </div>
        }
        .into_any(),
        CenterIcon::Microphone => view! {
            <div class="assessment__center">
                <HeroIcon icon=Icon::Microphone class="assessment__center-icon assessment__center-icon--listening"/>
            </div>
        }
        .into_any(),
        CenterIcon::None => ().into_any(),
    }
}

/// Dev controls show in debug builds, or when `?dev=1` is present.
fn dev_controls_visible(debug_build: bool, dev_param: Option<&str>) -> bool {
    debug_build || dev_param.is_some_and(|value| value.trim() == "1")
}

fn badge_dot_class(pulses: bool) -> &'static str {
    if pulses {
        "status-badge__dot status-badge__dot--pulse"
    } else {
        "status-badge__dot"
    }
}
