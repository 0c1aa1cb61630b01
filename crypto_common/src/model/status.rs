//! The `status` envelope attached to every provider response.
use serde::Deserialize;

/// Call status reported by the provider. `error_code == 0` means success.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ApiStatus {
    /// Provider error code.
    #[serde(default)]
    pub error_code: i64,
    /// Human-readable reason, present on failures.
    #[serde(default)]
    pub error_message: Option<String>,
}

impl ApiStatus {
    /// `true` when the provider reported a failure.
    pub fn is_error(&self) -> bool {
        self.error_code != 0
    }
}
