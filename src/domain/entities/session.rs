//! Session entity holding the authentication state of a client.

/// Authentication state stored for one client, keyed by its session token.
///
/// Both fields are written together by the login handler. `expires_at` is a
/// Unix timestamp in seconds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionRecord {
    pub identity: Option<String>,
    pub expires_at: Option<i64>,
}

/// Classification of a session record at a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// No identity is attached to the session.
    Anonymous,
    /// An identity is attached but its expiry lies in the past.
    Expired,
    /// An identity is attached and has not expired.
    Active,
}

impl SessionRecord {
    /// Creates a record for a logged-in identity.
    pub fn authenticated(identity: impl Into<String>, expires_at: i64) -> Self {
        Self {
            identity: Some(identity.into()),
            expires_at: Some(expires_at),
        }
    }

    /// Creates a record with no identity attached.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Classifies the record against `now` (seconds since the Unix epoch).
    ///
    /// An identity without an expiry never expires. A session expiring
    /// exactly at `now` is still active.
    pub fn status_at(&self, now: i64) -> SessionStatus {
        if self.identity.is_none() {
            return SessionStatus::Anonymous;
        }

        match self.expires_at {
            Some(expires_at) if expires_at < now => SessionStatus::Expired,
            Some(_) => SessionStatus::Active,
            None => SessionStatus::Active,
        }
    }

    /// Removes the identity and its expiry, leaving an anonymous record.
    pub fn clear(&mut self) {
        self.identity = None;
        self.expires_at = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 1_700_000_000;

    #[test]
    fn test_anonymous_record() {
        assert_eq!(
            SessionRecord::anonymous().status_at(NOW),
            SessionStatus::Anonymous
        );
    }

    #[test]
    fn test_expiry_without_identity_is_anonymous() {
        let record = SessionRecord {
            identity: None,
            expires_at: Some(NOW - 10),
        };

        assert_eq!(record.status_at(NOW), SessionStatus::Anonymous);
    }

    #[test]
    fn test_expired_record() {
        let record = SessionRecord::authenticated("alice", NOW - 1);
        assert_eq!(record.status_at(NOW), SessionStatus::Expired);
    }

    #[test]
    fn test_active_record() {
        let record = SessionRecord::authenticated("alice", NOW + 3600);
        assert_eq!(record.status_at(NOW), SessionStatus::Active);
    }

    #[test]
    fn test_expiry_boundary_is_active() {
        let record = SessionRecord::authenticated("alice", NOW);
        assert_eq!(record.status_at(NOW), SessionStatus::Active);
    }

    #[test]
    fn test_missing_expiry_never_expires() {
        let record = SessionRecord {
            identity: Some("alice".to_string()),
            expires_at: None,
        };

        assert_eq!(record.status_at(NOW), SessionStatus::Active);
        assert_eq!(record.status_at(i64::MAX), SessionStatus::Active);
    }

    #[test]
    fn test_clear() {
        let mut record = SessionRecord::authenticated("alice", NOW);
        record.clear();

        assert_eq!(record, SessionRecord::anonymous());
    }
}
