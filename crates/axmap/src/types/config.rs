/*! Resolver retry configuration. */

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Retry budgets and pacing for the resolver.
///
/// Budgets count match attempts: each failed attempt after the first forces
/// a full rebuild of the relevant registry. Hosts that load configuration
/// from a file can deserialize this directly; missing fields fall back to
/// the defaults.
///
/// # Example
///
/// ```
/// use axmap::ResolverConfig;
///
/// let config: ResolverConfig = serde_json::from_str(r#"{"window_retries": 2}"#).unwrap();
/// assert_eq!(config.window_retries, 2);
/// assert_eq!(config.object_retries, ResolverConfig::default().object_retries);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
  /// Match attempts for window resolution.
  pub window_retries: u32,
  /// Match attempts for object resolution when waiting is enabled.
  pub object_retries: u32,
  /// Pause between attempts, in milliseconds.
  pub retry_interval_ms: u64,
}

impl Default for ResolverConfig {
  fn default() -> Self {
    Self {
      window_retries: 5,
      object_retries: 5,
      retry_interval_ms: 1000,
    }
  }
}

impl ResolverConfig {
  /// Pause between attempts as a [`Duration`].
  pub const fn retry_interval(&self) -> Duration {
    Duration::from_millis(self.retry_interval_ms)
  }
}
