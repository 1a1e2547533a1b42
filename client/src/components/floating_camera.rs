//! Draggable camera preview tile with enable and minimize controls.
//!
//! SYSTEM CONTEXT
//! ==============
//! Independent of the assessment state: the page mounts it and passes
//! nothing. `CameraState` holds the phase machine and drag math; this
//! component performs the browser side effects the state asks for and owns
//! the live stream inside a `StreamSlot`, which stops every track when the
//! camera is disabled or the tile unmounts.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::icons::{HeroIcon, Icon};
use crate::state::camera::{CameraCommand, CameraState, Offset};

#[component]
pub fn FloatingCamera() -> impl IntoView {
    let camera = RwSignal::new(CameraState::default());
    let video_ref = NodeRef::<leptos::html::Video>::new();

    #[cfg(feature = "hydrate")]
    let media = CameraMedia::new(camera, video_ref);

    let on_toggle_camera = move |_| {
        let mut command = CameraCommand::Release;
        camera.update(|c| command = c.toggle_enabled());
        #[cfg(feature = "hydrate")]
        media.clone().run(command);
        #[cfg(not(feature = "hydrate"))]
        let _ = command;
    };
    let on_toggle_minimize = move |_| camera.update(CameraState::toggle_minimized);

    let on_pointer_down = move |ev: leptos::ev::PointerEvent| {
        camera.update(|c| c.begin_drag(pointer_offset(&ev)));
        #[cfg(feature = "hydrate")]
        capture_pointer(&ev);
    };
    let on_pointer_move = move |ev: leptos::ev::PointerEvent| {
        if camera.with_untracked(CameraState::is_dragging) {
            camera.update(|c| c.drag_to(pointer_offset(&ev)));
        }
    };
    let on_pointer_up = move |_ev: leptos::ev::PointerEvent| {
        camera.update(CameraState::end_drag);
    };
    // Buttons must not start a drag.
    let on_button_pointer_down = move |ev: leptos::ev::PointerEvent| ev.stop_propagation();

    let container_class = move || tile_container_class(&camera.get());
    let frame_class = move || tile_frame_class(&camera.get());
    let transform = move || camera.get().offset.css_transform();
    let enabled = move || camera.get().is_enabled();
    let error = move || camera.get().error;
    let toggle_icon_class = move || camera_toggle_icon_class(camera.get().is_enabled());

    view! {
        <div
            class=container_class
            style:transform=transform
            on:pointerdown=on_pointer_down
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_up
            on:pointercancel=on_pointer_up
        >
            <div class=frame_class>
                <Show
                    when=enabled
                    fallback=move || {
                        view! {
                            <div class="floating-camera__placeholder">
                                {move || match error() {
                                    Some(message) => {
                                        view! {
                                            <div class="floating-camera__error">
                                                <HeroIcon icon=Icon::NoSymbol class="floating-camera__error-icon"/>
                                                <p class="floating-camera__error-text">{message}</p>
                                            </div>
                                        }
                                            .into_any()
                                    }
                                    None => {
                                        view! { <HeroIcon icon=Icon::Camera class="floating-camera__idle-icon"/> }
                                            .into_any()
                                    }
                                }}
                            </div>
                        }
                    }
                >
                    <video
                        node_ref=video_ref
                        class="floating-camera__video"
                        class:floating-camera__video--zoomed=move || camera.get().is_minimized
                        autoplay=true
                        playsinline=true
                        muted=true
                    ></video>
                </Show>

                <div class="floating-camera__controls">
                    <div class="floating-camera__buttons">
                        <button
                            class="floating-camera__button"
                            title="Toggle camera"
                            on:pointerdown=on_button_pointer_down
                            on:click=on_toggle_camera
                        >
                            <span class=toggle_icon_class>
                                <HeroIcon icon=Icon::VideoCamera class="floating-camera__button-icon"/>
                            </span>
                        </button>
                        <button
                            class="floating-camera__button"
                            title="Minimize or maximize"
                            on:pointerdown=on_button_pointer_down
                            on:click=on_toggle_minimize
                        >
                            {move || {
                                let icon = minimize_icon(camera.get().is_minimized);
                                view! { <HeroIcon icon=icon class="floating-camera__button-icon"/> }
                            }}
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}

fn pointer_offset(ev: &leptos::ev::PointerEvent) -> Offset {
    Offset::new(f64::from(ev.client_x()), f64::from(ev.client_y()))
}

fn tile_container_class(state: &CameraState) -> &'static str {
    match (state.is_minimized, state.is_dragging()) {
        (true, false) => "floating-camera floating-camera--docked-low",
        (true, true) => "floating-camera floating-camera--docked-low floating-camera--dragging",
        (false, false) => "floating-camera floating-camera--docked-high",
        (false, true) => "floating-camera floating-camera--docked-high floating-camera--dragging",
    }
}

fn tile_frame_class(state: &CameraState) -> &'static str {
    if state.is_minimized {
        "floating-camera__frame floating-camera__frame--minimized"
    } else {
        "floating-camera__frame floating-camera__frame--expanded"
    }
}

fn camera_toggle_icon_class(enabled: bool) -> &'static str {
    if enabled {
        "floating-camera__toggle"
    } else {
        "floating-camera__toggle floating-camera__toggle--off"
    }
}

fn minimize_icon(is_minimized: bool) -> Icon {
    if is_minimized {
        Icon::ArrowsPointingOut
    } else {
        Icon::ArrowsPointingIn
    }
}

#[cfg(feature = "hydrate")]
fn capture_pointer(ev: &leptos::ev::PointerEvent) {
    use wasm_bindgen::JsCast;

    let Some(target) = ev.current_target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) else {
        return;
    };
    if let Err(e) = target.set_pointer_capture(ev.pointer_id()) {
        log::debug!("pointer capture failed: {e:?}");
    }
}

/// Browser half of the widget: the stream slot and the `<video>` element.
#[cfg(feature = "hydrate")]
#[derive(Clone)]
struct CameraMedia {
    camera: RwSignal<CameraState>,
    video_ref: NodeRef<leptos::html::Video>,
    slot: StoredValue<crate::util::media::StreamSlot<web_sys::MediaStream>, leptos::reactive::owner::LocalStorage>,
    mounted: std::sync::Arc<std::sync::atomic::AtomicBool>,
}

#[cfg(feature = "hydrate")]
impl CameraMedia {
    fn new(camera: RwSignal<CameraState>, video_ref: NodeRef<leptos::html::Video>) -> Self {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};

        use crate::util::media::StreamSlot;

        let media = Self {
            camera,
            video_ref,
            slot: StoredValue::new_local(StreamSlot::empty()),
            mounted: Arc::new(AtomicBool::new(true)),
        };
        let slot = media.slot;
        let mounted = Arc::clone(&media.mounted);
        on_cleanup(move || {
            mounted.store(false, Ordering::Relaxed);
            let _ = camera.try_update(CameraState::cancel_pending);
            slot.update_value(|held| {
                held.release();
            });
        });
        media
    }

    fn run(self, command: CameraCommand) {
        match command {
            CameraCommand::Acquire(ticket) => {
                leptos::task::spawn_local(async move {
                    let outcome = crate::util::media::acquire_camera().await;
                    self.finish_request(ticket, outcome).await;
                });
            }
            CameraCommand::Release => self.release(),
        }
    }

    fn release(&self) {
        self.slot.update_value(|held| {
            held.release();
        });
        if let Some(video) = self.video_ref.get_untracked() {
            video.set_src_object(None);
        }
    }

    async fn finish_request(
        self,
        ticket: crate::state::camera::RequestTicket,
        outcome: Result<web_sys::MediaStream, crate::state::camera::CameraFailure>,
    ) {
        use std::sync::atomic::Ordering;

        use crate::util::media::TrackSet;

        // The tile is gone; its signals are disposed.
        if !self.mounted.load(Ordering::Relaxed) {
            if let Ok(stream) = outcome {
                stream.stop_all();
            }
            return;
        }

        let stream = match outcome {
            Ok(stream) => stream,
            Err(failure) => {
                self.camera.update(|c| {
                    c.deny(ticket, failure);
                });
                return;
            }
        };

        let mut attached = false;
        self.camera.update(|c| attached = c.grant(ticket));
        if !attached {
            // Disabled while the permission prompt was open.
            stream.stop_all();
            return;
        }

        // Into the slot before awaiting playback so a toggle-off during
        // `play()` still finds and stops the stream.
        let video = self.video_ref.get_untracked();
        if let Some(video) = &video {
            video.set_src_object(Some(&stream));
        }
        self.slot.update_value(|held| held.install(stream));

        if let Some(video) = video {
            let played = match video.play() {
                Ok(promise) => wasm_bindgen_futures::JsFuture::from(promise).await.map(|_| ()),
                Err(e) => Err(e),
            };
            if let Err(e) = played {
                log::warn!("camera preview play failed: {e:?}");
            }
        }
    }
}

#[cfg(test)]
#[path = "floating_camera_test.rs"]
mod floating_camera_test;
