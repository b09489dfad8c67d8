//! Caller identity.

/// The authenticated caller of a request.
///
/// Services only ever ask a principal for its username and resolve the
/// account from that, so sessions, bearer tokens and test stubs are
/// interchangeable.
pub trait Principal: Send + Sync {
    fn username(&self) -> &str;
}

impl Principal for String {
    fn username(&self) -> &str {
        self
    }
}
