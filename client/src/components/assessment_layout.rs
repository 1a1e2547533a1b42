//! Full-viewport dark frame wrapping every `/assessment` route.

use leptos::prelude::*;
use leptos_router::components::Outlet;

#[component]
pub fn AssessmentLayout() -> impl IntoView {
    view! {
        <div class="assessment-layout">
            <Outlet/>
        </div>
    }
}
