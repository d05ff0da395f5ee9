//! Redaction of personal data in log output.
//!
//! Emails, phone numbers and names only reach the logs when the front end
//! opted in at startup.

use std::sync::atomic::{AtomicBool, Ordering};

static LOG_PII_ENABLED: AtomicBool = AtomicBool::new(false);

/// Placeholder logged instead of personal data.
pub const REDACTED_VALUE: &str = "[REDACTED]";

pub fn set_pii_logging(enabled: bool) {
    LOG_PII_ENABLED.store(enabled, Ordering::Release);
}

pub fn pii_logging_enabled() -> bool {
    LOG_PII_ENABLED.load(Ordering::Relaxed)
}

/// Returns `value` when PII logging is enabled, otherwise [`REDACTED_VALUE`].
pub fn redact(value: &str) -> &str {
    if pii_logging_enabled() {
        value
    } else {
        REDACTED_VALUE
    }
}
