//! Provider configuration.

use std::time::Duration;

/// Configuration handed to a provider at construction time.
#[derive(Clone, Debug)]
pub struct ProviderConfig {
    /// Timeout applied to every HTTP request made by the provider.
    pub request_timeout: Duration,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(30),
        }
    }
}
