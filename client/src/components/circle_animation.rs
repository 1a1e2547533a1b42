//! Bridge component between page state and the imperative `orb::engine::Orb`.
//!
//! ARCHITECTURE
//! ============
//! The orb crate owns simulation and painting; this host sizes the canvas for
//! the device pixel ratio, forwards prop changes, and owns the frame loop.
//! Any prop change cancels the running loop before the next one starts, and
//! unmounting cancels it for good.

use leptos::prelude::*;

/// Canvas edge length in CSS pixels.
pub const DEFAULT_SIZE: f64 = 288.0;

#[component]
pub fn CircleAnimation(
    #[prop(into)] active: Signal<bool>,
    #[prop(into)] color: Signal<String>,
    #[prop(into)] speaking: Signal<bool>,
    #[prop(default = DEFAULT_SIZE)] size: f64,
) -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    #[cfg(feature = "hydrate")]
    run_orb(canvas_ref, active, color, speaking, size);
    #[cfg(not(feature = "hydrate"))]
    let _ = (active, color, speaking);

    let edge = size.to_string();
    let edge_px = format!("{size}px");

    view! {
        <canvas
            node_ref=canvas_ref
            class="circle-animation"
            width=edge.clone()
            height=edge
            style:width=edge_px.clone()
            style:height=edge_px
        ></canvas>
    }
}

#[cfg(feature = "hydrate")]
fn run_orb(
    canvas_ref: NodeRef<leptos::html::Canvas>,
    active: Signal<bool>,
    color: Signal<String>,
    speaking: Signal<bool>,
    size: f64,
) {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    use orb::color::Rgb;
    use orb::engine::{Orb, OrbProps};

    use crate::util::frame_loop::FrameLoop;

    let engine: Rc<RefCell<Option<Orb>>> = Rc::new(RefCell::new(None));
    let frame_loop = StoredValue::new_local(None::<FrameLoop>);
    let mounted = Arc::new(AtomicBool::new(true));
    let mounted_for_cleanup = Arc::clone(&mounted);

    Effect::new(move || {
        let props = OrbProps {
            size,
            color: Rgb::parse_or_fallback(&color.get()),
            active: active.get(),
            speaking: speaking.get(),
        };
        let Some(canvas) = canvas_ref.get() else {
            return;
        };

        // Stop the current loop before the props change underneath it.
        frame_loop.set_value(None);

        {
            let mut slot = engine.borrow_mut();
            if let Some(orb) = slot.as_mut() {
                orb.set_props(props);
            } else {
                let dpr = web_sys::window().map_or(1.0, |w| w.device_pixel_ratio()).max(1.0);
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                let backing = (size * dpr).round() as u32;
                canvas.set_width(backing);
                canvas.set_height(backing);
                match Orb::new(&canvas, props, dpr) {
                    Ok(orb) => *slot = Some(orb),
                    Err(e) => {
                        log::warn!("orb init failed: {e:?}");
                        return;
                    }
                }
            }
        }

        let engine_for_frame = Rc::clone(&engine);
        let mounted_for_frame = Arc::clone(&mounted);
        let next = FrameLoop::start(move || {
            if !mounted_for_frame.load(Ordering::Relaxed) {
                return false;
            }
            let mut slot = engine_for_frame.borrow_mut();
            let Some(orb) = slot.as_mut() else {
                return false;
            };
            match orb.frame() {
                Ok(()) => true,
                Err(e) => {
                    log::warn!("orb frame failed: {e:?}");
                    false
                }
            }
        });
        frame_loop.set_value(next);
    });

    on_cleanup(move || {
        mounted_for_cleanup.store(false, Ordering::Relaxed);
        frame_loop.update_value(|running| {
            running.take();
        });
    });
}
