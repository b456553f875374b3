use std::time::Duration;

use crate::services::chat_service::ChatResponse;

pub const FAULT_MESSAGE: &str =
    "I'm sorry, I'm having trouble processing your request right now. Please try again.";

/// Simulated network behaviour applied after a reply has been computed.
///
/// The classification is already final by the time this runs; delivery only
/// decides how long to wait and whether to swap the reply for a fault.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChatDelivery {
    pub base_delay: Duration,
    pub max_jitter: Duration,
    pub failure_rate: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Delivered {
    Reply(ChatResponse),
    Fault,
}

impl ChatDelivery {
    pub fn new(base_delay: Duration, max_jitter: Duration, failure_rate: f64) -> Self {
        Self {
            base_delay,
            max_jitter,
            failure_rate: failure_rate.clamp(0.0, 1.0),
        }
    }

    /// No delay and no faults.
    pub fn immediate() -> Self {
        Self::new(Duration::ZERO, Duration::ZERO, 0.0)
    }

    pub async fn deliver(&self, response: ChatResponse) -> Delivered {
        let (delay, fail) = self.roll();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        if fail {
            tracing::warn!(intent = ?response.intent, "injected chat fault");
            Delivered::Fault
        } else {
            Delivered::Reply(response)
        }
    }

    fn roll(&self) -> (Duration, bool) {
        let jitter_ms = self.max_jitter.as_millis() as u64;
        let jitter = if jitter_ms == 0 {
            Duration::ZERO
        } else {
            Duration::from_millis(rand::random_range(0..=jitter_ms))
        };
        let fail = self.failure_rate > 0.0 && rand::random_bool(self.failure_rate);
        (self.base_delay + jitter, fail)
    }
}

impl Default for ChatDelivery {
    fn default() -> Self {
        Self::new(Duration::from_millis(500), Duration::from_millis(1000), 0.0)
    }
}
