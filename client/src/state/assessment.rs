//! Assessment page state: connection status, speaking flag and error text.
//!
//! DESIGN
//! ======
//! The page owns one `RwSignal<AssessmentState>`; every piece of presentation
//! (orb color, status line, badge, center icon) is derived from it here so
//! the view code stays a thin mapping and the rules are testable natively.

#[cfg(test)]
#[path = "assessment_test.rs"]
mod assessment_test;

/// Message injected by the "Toggle Error" dev control.
pub const TEST_ERROR_MESSAGE: &str = "Test error message";

/// Orb color while the interviewer is speaking.
pub const SPEAKING_COLOR: &str = "#3b82f6";
/// Orb color while connected and listening.
pub const LISTENING_COLOR: &str = "#22c55e";
/// Orb color for the error status.
pub const ERROR_COLOR: &str = "#ef4444";
/// Orb color for idle and connecting.
pub const NEUTRAL_COLOR: &str = "#94a3b8";

/// Voice session connection status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionStatus {
    Idle,
    Connecting,
    /// The page opens in this state until a voice session drives it.
    #[default]
    Connected,
    Error,
}

impl ConnectionStatus {
    /// Every status, in dev-control button order.
    pub const ALL: [Self; 4] = [Self::Idle, Self::Connecting, Self::Connected, Self::Error];

    /// Human-readable badge label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Connecting => "Connecting",
            Self::Connected => "Connected",
            Self::Error => "Error",
        }
    }
}

/// Color family of the status badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BadgeTone {
    Success,
    Danger,
    Info,
}

impl BadgeTone {
    /// BEM modifier class for the badge.
    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "status-badge status-badge--success",
            Self::Danger => "status-badge status-badge--danger",
            Self::Info => "status-badge status-badge--info",
        }
    }
}

/// Glyph overlaid on the center of the orb.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CenterIcon {
    /// Warning glyph with the error text beneath it.
    Warning(String),
    Speaker,
    Microphone,
    None,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AssessmentState {
    pub status: ConnectionStatus,
    pub is_speaking: bool,
    pub error: Option<String>,
}

impl AssessmentState {
    /// Orb color for the current status.
    pub fn animation_color(&self) -> &'static str {
        if self.status == ConnectionStatus::Error {
            ERROR_COLOR
        } else if self.is_speaking {
            SPEAKING_COLOR
        } else if self.status == ConnectionStatus::Connected {
            LISTENING_COLOR
        } else {
            NEUTRAL_COLOR
        }
    }

    /// Whether the orb orbits and draws trails.
    pub fn animation_active(&self) -> bool {
        self.status == ConnectionStatus::Connected
    }

    /// Line shown under the page title. An error message wins over status.
    pub fn status_message(&self) -> String {
        if let Some(error) = &self.error {
            return error.clone();
        }
        let message = match self.status {
            ConnectionStatus::Connecting => "Preparing your interview...",
            ConnectionStatus::Connected if self.is_speaking => "Interviewer is speaking...",
            ConnectionStatus::Connected => "Interview in progress",
            ConnectionStatus::Error => "Connection interrupted",
            ConnectionStatus::Idle => "Setting up your interview...",
        };
        message.to_owned()
    }

    pub fn badge_tone(&self) -> BadgeTone {
        match self.status {
            ConnectionStatus::Connected => BadgeTone::Success,
            ConnectionStatus::Error => BadgeTone::Danger,
            ConnectionStatus::Idle | ConnectionStatus::Connecting => BadgeTone::Info,
        }
    }

    /// The badge dot pulses only while a session is being established.
    pub fn badge_pulses(&self) -> bool {
        self.status == ConnectionStatus::Connecting
    }

    pub fn center_icon(&self) -> CenterIcon {
        if let Some(error) = &self.error {
            return CenterIcon::Warning(error.clone());
        }
        match self.status {
            ConnectionStatus::Connected if self.is_speaking => CenterIcon::Speaker,
            ConnectionStatus::Connected => CenterIcon::Microphone,
            _ => CenterIcon::None,
        }
    }

    // ---- dev control transitions ----

    pub fn set_status(&mut self, status: ConnectionStatus) {
        self.status = status;
    }

    pub fn toggle_speaking(&mut self) {
        self.is_speaking = !self.is_speaking;
    }

    /// Inject the test error, or clear whatever error is present.
    pub fn toggle_error(&mut self) {
        self.error = match self.error {
            Some(_) => None,
            None => Some(TEST_ERROR_MESSAGE.to_owned()),
        };
    }
}
