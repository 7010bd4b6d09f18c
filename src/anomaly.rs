//! Anomaly reporting for conversions that degrade instead of failing.
//!
//! Record conversion never returns errors: malformed metadata and unknown
//! identities fall back to zero values, and each degradation is surfaced
//! through an injected [`AnomalyReporter`]. The service installs
//! [`LogReporter`]; tests install a capturing one.

use tracing::error;

/// A conversion degradation. Collected by a reporter, never raised as an
/// error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Anomaly {
    /// The general metadata stream of record `token` failed the strict
    /// decode. Means a bug in this service or a foreign writer on the
    /// stream.
    MetadataDecode {
        token: String,
        payload: String,
        error: String,
    },
    /// No account is known for the key that signed record `token`.
    UnknownPublicKey { token: String, public_key: String },
}

/// Sink for conversion anomalies.
pub trait AnomalyReporter: Send + Sync {
    fn report(&self, anomaly: Anomaly);
}

/// Production reporter: routes anomalies to the tracing subscriber at
/// error level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogReporter;

impl AnomalyReporter for LogReporter {
    fn report(&self, anomaly: Anomaly) {
        match anomaly {
            Anomaly::MetadataDecode {
                token,
                payload,
                error,
            } => {
                error!(%token, %payload, %error, "could not decode invoice metadata");
            }
            Anomaly::UnknownPublicKey { token, public_key } => {
                error!(%token, %public_key, "no user found for invoice public key");
            }
        }
    }
}
