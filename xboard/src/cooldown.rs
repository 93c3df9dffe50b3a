//! Verification-code send button state machine.
//!
//! The register and password-recovery forms share a "send code" button that
//! simulates a short network round trip, then locks itself for a cooldown
//! period. The machine is advanced by an external tick so it can be driven
//! by the dashboard loop or by tests without sleeping.
//!
//! ```
//! use std::time::Duration;
//! use xboard::cooldown::{CodeEvent, CodeSender};
//!
//! let mut sender = CodeSender::new(3);
//! assert!(sender.request());
//! assert_eq!(sender.tick(Duration::from_millis(500)), Some(CodeEvent::Sent));
//! assert_eq!(sender.button_label(), "3s");
//! ```

use std::time::Duration;
use tracing::debug;

/// Simulated latency of the send request.
pub const SEND_DELAY: Duration = Duration::from_millis(500);

/// Label shown while the button is idle.
pub const LABEL_IDLE: &str = "发送验证码";

/// Label shown while the simulated request is in flight.
pub const LABEL_SENDING: &str = "发送中...";

/// Notice shown once the code has been "sent".
pub const SENT_NOTICE: &str = "验证码已发送";

/// Current state of the send button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeState {
    Idle,
    /// Request in flight; `elapsed` counts towards [`SEND_DELAY`].
    Sending { elapsed: Duration },
    /// Locked; `remaining_secs` is what the button shows. `carry` holds the
    /// part of the current second already elapsed.
    Cooldown { remaining_secs: u32, carry: Duration },
}

/// Transitions reported by [`CodeSender::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeEvent {
    /// The simulated send completed and the cooldown started.
    Sent,
    /// The cooldown expired; the button is usable again.
    Ready,
}

#[derive(Debug, Clone)]
pub struct CodeSender {
    state: CodeState,
    cooldown_secs: u32,
}

impl CodeSender {
    pub fn new(cooldown_secs: u32) -> Self {
        Self {
            state: CodeState::Idle,
            cooldown_secs,
        }
    }

    pub fn state(&self) -> CodeState {
        self.state
    }

    pub fn can_request(&self) -> bool {
        self.state == CodeState::Idle
    }

    /// Start sending. Returns `false` if the button is not idle.
    pub fn request(&mut self) -> bool {
        if !self.can_request() {
            debug!(state = ?self.state, "Verification code request ignored");
            return false;
        }
        self.state = CodeState::Sending {
            elapsed: Duration::ZERO,
        };
        true
    }

    /// Advance the machine by `dt`.
    ///
    /// Only one event is reported per tick. A tick long enough to cover both
    /// the send delay and the whole cooldown still stops at `Sent`; leftover
    /// time is carried into the cooldown.
    pub fn tick(&mut self, dt: Duration) -> Option<CodeEvent> {
        match self.state {
            CodeState::Idle => None,
            CodeState::Sending { elapsed } => {
                let elapsed = elapsed + dt;
                if elapsed < SEND_DELAY {
                    self.state = CodeState::Sending { elapsed };
                    return None;
                }
                if self.cooldown_secs == 0 {
                    self.state = CodeState::Idle;
                } else {
                    self.state = CodeState::Cooldown {
                        remaining_secs: self.cooldown_secs,
                        carry: elapsed - SEND_DELAY,
                    };
                }
                debug!(cooldown_secs = self.cooldown_secs, "Verification code sent");
                Some(CodeEvent::Sent)
            }
            CodeState::Cooldown {
                remaining_secs,
                carry,
            } => {
                let total = carry + dt;
                let whole = u32::try_from(total.as_secs()).unwrap_or(u32::MAX);
                if whole >= remaining_secs {
                    self.state = CodeState::Idle;
                    return Some(CodeEvent::Ready);
                }
                self.state = CodeState::Cooldown {
                    remaining_secs: remaining_secs - whole,
                    carry: total - Duration::from_secs(u64::from(whole)),
                };
                None
            }
        }
    }

    pub fn button_label(&self) -> String {
        match self.state {
            CodeState::Idle => LABEL_IDLE.to_string(),
            CodeState::Sending { .. } => LABEL_SENDING.to_string(),
            CodeState::Cooldown { remaining_secs, .. } => format!("{}s", remaining_secs),
        }
    }

    /// Seconds left on the cooldown, if any.
    pub fn remaining_secs(&self) -> Option<u32> {
        match self.state {
            CodeState::Cooldown { remaining_secs, .. } => Some(remaining_secs),
            _ => None,
        }
    }
}
