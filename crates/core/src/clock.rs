//! Time source used by the note store.
//!
//! Production code uses [`SystemClock`]; tests substitute a controllable
//! clock to exercise retention boundaries without sleeping.

use crate::types::Timestamp;

/// Something that can tell the current UTC time.
pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;
}

/// Wall-clock time via [`chrono::Utc::now`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        chrono::Utc::now()
    }
}
