//! Floating camera widget state: enable phase, minimize, errors, drag offset.
//!
//! DESIGN
//! ======
//! Stream acquisition is asynchronous, so every request carries a
//! `RequestTicket`. Disabling the camera or unmounting the widget bumps the
//! sequence, and a stream that resolves for a stale ticket is refused by
//! `grant` so the caller stops it instead of attaching it.

#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

/// Acquisition phase of the camera stream.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CameraPhase {
    #[default]
    Disabled,
    /// Enumeration or `getUserMedia` is in flight.
    Requesting,
    /// A live stream is attached to the preview.
    Granted,
}

/// Why a camera request failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CameraFailure {
    /// The user or browser policy refused access.
    PermissionDenied,
    /// Enumeration reported no video input device.
    NoDevice,
    /// Anything else: device busy, constraints unsatisfiable, API missing.
    Unavailable,
}

impl CameraFailure {
    /// Classify a DOM error name from `getUserMedia`.
    pub fn from_error_name(name: &str) -> Self {
        match name {
            "NotAllowedError" | "PermissionDeniedError" | "SecurityError" => Self::PermissionDenied,
            _ => Self::Unavailable,
        }
    }

    /// Message shown inside the tile.
    pub fn message(self) -> &'static str {
        match self {
            Self::PermissionDenied => "Camera permission denied",
            Self::NoDevice => "No camera found",
            Self::Unavailable => "Unable to access camera",
        }
    }
}

/// Identifies one acquisition attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestTicket(u64);

/// What the widget must do after a toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CameraCommand {
    /// Start enumeration and `getUserMedia` for this ticket.
    Acquire(RequestTicket),
    /// Stop every track of the held stream.
    Release,
}

/// Tile displacement from its docked corner, in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

impl Offset {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// `translate(..)` value for the tile's `style:transform`.
    pub fn css_transform(self) -> String {
        format!("translate({}px, {}px)", self.x, self.y)
    }
}

/// Pointer-drag bookkeeping: where the pointer and tile were at grab time.
#[derive(Clone, Copy, Debug, PartialEq)]
struct DragSession {
    pointer_start: Offset,
    offset_start: Offset,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CameraState {
    pub is_minimized: bool,
    pub phase: CameraPhase,
    /// Result of the last completed request; `false` until one is granted.
    pub has_permission: bool,
    pub error: Option<String>,
    pub offset: Offset,
    drag: Option<DragSession>,
    request_seq: u64,
}

impl Default for CameraState {
    fn default() -> Self {
        Self {
            is_minimized: true,
            phase: CameraPhase::Disabled,
            has_permission: false,
            error: None,
            offset: Offset::ORIGIN,
            drag: None,
            request_seq: 0,
        }
    }
}

impl CameraState {
    pub fn is_enabled(&self) -> bool {
        self.phase != CameraPhase::Disabled
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Enable/disable button. Clears any previous error either way.
    pub fn toggle_enabled(&mut self) -> CameraCommand {
        self.error = None;
        self.request_seq += 1;
        if self.is_enabled() {
            self.phase = CameraPhase::Disabled;
            CameraCommand::Release
        } else {
            self.phase = CameraPhase::Requesting;
            CameraCommand::Acquire(RequestTicket(self.request_seq))
        }
    }

    fn is_current(&self, ticket: RequestTicket) -> bool {
        self.phase == CameraPhase::Requesting && ticket.0 == self.request_seq
    }

    /// Record a stream for `ticket`. Returns `false` when the request is
    /// stale and the stream must be stopped instead of attached.
    pub fn grant(&mut self, ticket: RequestTicket) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.phase = CameraPhase::Granted;
        self.has_permission = true;
        self.error = None;
        true
    }

    /// Record a failed request and fall back to disabled. Stale failures are
    /// ignored so they cannot clobber a newer attempt.
    pub fn deny(&mut self, ticket: RequestTicket, failure: CameraFailure) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.phase = CameraPhase::Disabled;
        self.has_permission = false;
        self.error = Some(failure.message().to_owned());
        true
    }

    /// Invalidate any in-flight request. The tile calls this when it unmounts.
    pub fn cancel_pending(&mut self) {
        self.request_seq += 1;
        if self.phase == CameraPhase::Requesting {
            self.phase = CameraPhase::Disabled;
        }
    }

    /// Minimize/maximize. The tile snaps back to its docked corner.
    pub fn toggle_minimized(&mut self) {
        self.is_minimized = !self.is_minimized;
        self.offset = Offset::ORIGIN;
        self.drag = None;
    }

    pub fn begin_drag(&mut self, pointer: Offset) {
        self.drag = Some(DragSession {
            pointer_start: pointer,
            offset_start: self.offset,
        });
    }

    /// Move the tile with the pointer. No-op outside a drag.
    pub fn drag_to(&mut self, pointer: Offset) {
        if let Some(session) = self.drag {
            self.offset = Offset::new(
                session.offset_start.x + pointer.x - session.pointer_start.x,
                session.offset_start.y + pointer.y - session.pointer_start.y,
            );
        }
    }

    pub fn end_drag(&mut self) {
        self.drag = None;
    }
}
