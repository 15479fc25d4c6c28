//! Card error taxonomy.

use thiserror::Error;

/// Errors surfaced to the host.
///
/// Missing or malformed sensor data is deliberately not an error: during
/// selection it degrades to slot omission or default substitution.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CardError {
    /// No configuration object was supplied at setup. Fatal to
    /// initialization and never raised per render.
    #[error("invalid configuration: no configuration supplied")]
    InvalidConfiguration,
}
