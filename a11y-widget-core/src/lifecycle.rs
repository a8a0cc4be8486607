//! Startup sequencing: when to start, and waiting for the page body.

/// Fixed delay between checks for the page body.
pub const BODY_POLL_INTERVAL_MS: u32 = 50;

/// `document.readyState`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentReadiness {
    Loading,
    Interactive,
    Complete,
}

impl DocumentReadiness {
    /// Unknown states are treated as still loading.
    #[must_use]
    pub fn parse(state: &str) -> Self {
        match state {
            "complete" => Self::Complete,
            "interactive" => Self::Interactive,
            _ => Self::Loading,
        }
    }

    #[must_use]
    pub const fn start_trigger(self) -> StartTrigger {
        match self {
            Self::Complete => StartTrigger::Immediate,
            Self::Loading | Self::Interactive => StartTrigger::OnLoad,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartTrigger {
    /// The page already finished loading.
    Immediate,
    /// Wait for the window `load` event.
    OnLoad,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BootPhase {
    #[default]
    NotStarted,
    WaitingForBody {
        attempts: u32,
    },
    Ready,
}

/// What the driver should do after a poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootStep {
    RetryAfter(u32),
    Ready,
}

/// Body-wait state machine. Retries forever on a fixed interval; once
/// ready it stays ready.
#[derive(Debug, Clone, Copy, Default)]
pub struct Bootstrap {
    phase: BootPhase,
}

impl Bootstrap {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            phase: BootPhase::NotStarted,
        }
    }

    #[must_use]
    pub const fn phase(&self) -> BootPhase {
        self.phase
    }

    pub const fn poll(&mut self, body_present: bool) -> BootStep {
        if body_present {
            self.phase = BootPhase::Ready;
            return BootStep::Ready;
        }
        match self.phase {
            BootPhase::Ready => BootStep::Ready,
            BootPhase::NotStarted => {
                self.phase = BootPhase::WaitingForBody { attempts: 1 };
                BootStep::RetryAfter(BODY_POLL_INTERVAL_MS)
            }
            BootPhase::WaitingForBody { attempts } => {
                self.phase = BootPhase::WaitingForBody {
                    attempts: attempts.saturating_add(1),
                };
                BootStep::RetryAfter(BODY_POLL_INTERVAL_MS)
            }
        }
    }
}
