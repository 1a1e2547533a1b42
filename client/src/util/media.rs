//! Camera stream ownership and `navigator.mediaDevices` glue.
//!
//! SYSTEM CONTEXT
//! ==============
//! `StreamSlot` is the only owner of a live camera stream. Replacing,
//! releasing or dropping the slot stops every device track, so the camera
//! light goes off on every exit path: toggle off, error, unmount. The slot is
//! generic over `TrackSet` so that contract is tested without a browser.

#[cfg(test)]
#[path = "media_test.rs"]
mod media_test;

#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, JsValue};
#[cfg(feature = "hydrate")]
use wasm_bindgen_futures::JsFuture;

#[cfg(feature = "hydrate")]
use crate::state::camera::CameraFailure;

/// Ideal capture size requested from the camera.
pub const IDEAL_WIDTH: u32 = 1280;
pub const IDEAL_HEIGHT: u32 = 720;

/// A bundle of device tracks that can be stopped.
pub trait TrackSet {
    fn stop_all(&self);
}

/// Scoped owner of at most one stream.
pub struct StreamSlot<S: TrackSet> {
    stream: Option<S>,
}

impl<S: TrackSet> StreamSlot<S> {
    pub const fn empty() -> Self {
        Self { stream: None }
    }

    /// Take ownership of `stream`, stopping whatever was held before.
    pub fn install(&mut self, stream: S) {
        self.release();
        self.stream = Some(stream);
    }

    /// Stop and drop the held stream. Returns whether one was held.
    pub fn release(&mut self) -> bool {
        match self.stream.take() {
            Some(stream) => {
                stream.stop_all();
                true
            }
            None => false,
        }
    }

    pub fn is_held(&self) -> bool {
        self.stream.is_some()
    }

    pub fn get(&self) -> Option<&S> {
        self.stream.as_ref()
    }
}

impl<S: TrackSet> Default for StreamSlot<S> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<S: TrackSet> Drop for StreamSlot<S> {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(feature = "hydrate")]
impl TrackSet for web_sys::MediaStream {
    fn stop_all(&self) {
        for track in self.get_tracks().iter() {
            if let Ok(track) = track.dyn_into::<web_sys::MediaStreamTrack>() {
                track.stop();
            }
        }
    }
}

#[cfg(feature = "hydrate")]
fn media_devices() -> Result<web_sys::MediaDevices, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    window.navigator().media_devices()
}

/// Number of `videoinput` devices the browser reports.
#[cfg(feature = "hydrate")]
pub async fn count_video_inputs() -> Result<usize, JsValue> {
    let devices = JsFuture::from(media_devices()?.enumerate_devices()?).await?;
    let count = js_sys::Array::from(&devices)
        .iter()
        .filter_map(|device| device.dyn_into::<web_sys::MediaDeviceInfo>().ok())
        .filter(|device| device.kind() == web_sys::MediaDeviceKind::Videoinput)
        .count();
    Ok(count)
}

#[cfg(feature = "hydrate")]
fn ideal(value: u32) -> Result<JsValue, JsValue> {
    let constraint = js_sys::Object::new();
    js_sys::Reflect::set(&constraint, &"ideal".into(), &JsValue::from(value))?;
    Ok(constraint.into())
}

/// `getUserMedia` for the front camera at the ideal preview size, no audio.
#[cfg(feature = "hydrate")]
pub async fn request_camera_stream() -> Result<web_sys::MediaStream, JsValue> {
    let video = js_sys::Object::new();
    js_sys::Reflect::set(&video, &"width".into(), &ideal(IDEAL_WIDTH)?)?;
    js_sys::Reflect::set(&video, &"height".into(), &ideal(IDEAL_HEIGHT)?)?;
    js_sys::Reflect::set(&video, &"facingMode".into(), &"user".into())?;

    let constraints = web_sys::MediaStreamConstraints::new();
    constraints.set_video(&video.into());
    constraints.set_audio(&JsValue::FALSE);

    let stream = JsFuture::from(media_devices()?.get_user_media_with_constraints(&constraints)?).await?;
    stream.dyn_into::<web_sys::MediaStream>()
}

/// DOM error name (`NotAllowedError`, ...) of a rejected media promise.
#[cfg(feature = "hydrate")]
pub fn error_name(err: &JsValue) -> String {
    if let Some(dom) = err.dyn_ref::<web_sys::DomException>() {
        return dom.name();
    }
    if let Some(error) = err.dyn_ref::<js_sys::Error>() {
        return String::from(error.name());
    }
    String::new()
}

/// Enumerate, then request the stream, classifying any failure.
#[cfg(feature = "hydrate")]
pub async fn acquire_camera() -> Result<web_sys::MediaStream, CameraFailure> {
    match count_video_inputs().await {
        Ok(0) => return Err(CameraFailure::NoDevice),
        Ok(_) => {}
        Err(e) => {
            log::warn!("camera enumeration failed: {e:?}");
            return Err(CameraFailure::from_error_name(&error_name(&e)));
        }
    }
    request_camera_stream().await.map_err(|e| {
        log::warn!("camera request failed: {e:?}");
        CameraFailure::from_error_name(&error_name(&e))
    })
}
