//! # Simulated Authentication
//!
//! Stand-in for a real login endpoint: waits a fixed delay, then accepts.

use gloo_timers::future::TimeoutFuture;
use tracker_domain::{AuthOutcome, Authenticator, Credentials};

/// Authenticator that accepts any complete credentials after a delay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedAuthenticator {
    delay_ms: u32,
}

impl SimulatedAuthenticator {
    pub fn new(delay_ms: u32) -> Self {
        Self { delay_ms }
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }
}

impl Authenticator for SimulatedAuthenticator {
    async fn authenticate(&self, credentials: Credentials) -> AuthOutcome {
        log::debug!(
            "Simulating login for {} ({} ms)",
            credentials.email,
            self.delay_ms
        );
        TimeoutFuture::new(self.delay_ms).await;
        AuthOutcome::Accepted
    }
}
