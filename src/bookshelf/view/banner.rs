use chrono::{DateTime, Duration, Utc};

/// Default banner lifetime in seconds.
pub const DEFAULT_NOTICE_SECS: u64 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Danger,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BannerId(pub(crate) u64);

/// A transient notification shown above the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub id: BannerId,
    pub message: String,
    pub severity: Severity,
    pub expires_at: DateTime<Utc>,
}

impl Banner {
    pub(crate) fn new(
        id: BannerId,
        message: String,
        severity: Severity,
        now: DateTime<Utc>,
        ttl: Duration,
    ) -> Self {
        Self {
            id,
            message,
            severity,
            expires_at: now
                .checked_add_signed(ttl)
                .unwrap_or(DateTime::<Utc>::MAX_UTC),
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}
