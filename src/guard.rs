use std::sync::atomic::{AtomicU64, Ordering};

/// Which logical operation a token belongs to.
///
/// The two kinds are tracked independently and never interact: starting a
/// search does not disturb an in-flight resolve, and vice versa.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpKind {
    Search,
    Resolve,
}

/// Token identifying one logical operation instance.
///
/// Opaque to callers; only [`StalenessGuard::is_current`] can interpret it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpToken(u64);

/// Tracks the most recently started operation of each kind so the response
/// to any earlier call can be recognized as stale and dropped.
///
/// Backend calls are asynchronous and complete in arbitrary order; the
/// guard is the sole ordering mechanism. [`begin`](Self::begin) supersedes
/// the previous token implicitly and permanently — there is no way to end
/// an operation or make an old token current again. Tokens are random
/// `u64`s: uniqueness only has to hold within an operation's lifetime, and
/// 64 random bits are plenty.
pub struct StalenessGuard {
    search: AtomicU64,
    resolve: AtomicU64,
}

impl StalenessGuard {
    pub fn new() -> Self {
        Self {
            search: AtomicU64::new(0),
            resolve: AtomicU64::new(0),
        }
    }

    fn slot(&self, kind: OpKind) -> &AtomicU64 {
        match kind {
            OpKind::Search => &self.search,
            OpKind::Resolve => &self.resolve,
        }
    }

    /// Mint a fresh token and make it the current one for `kind`.
    pub fn begin(&self, kind: OpKind) -> OpToken {
        let token = rand::random::<u64>();
        self.slot(kind).store(token, Ordering::Relaxed);
        OpToken(token)
    }

    /// Whether `token` is still the most recently minted one for `kind`.
    pub fn is_current(&self, kind: OpKind, token: OpToken) -> bool {
        self.slot(kind).load(Ordering::Relaxed) == token.0
    }
}

impl Default for StalenessGuard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_token_is_current() {
        let guard = StalenessGuard::new();
        let token = guard.begin(OpKind::Search);
        assert!(guard.is_current(OpKind::Search, token));
    }

    #[test]
    fn test_newer_begin_supersedes_older_token() {
        let guard = StalenessGuard::new();
        let first = guard.begin(OpKind::Search);
        let second = guard.begin(OpKind::Search);

        assert!(!guard.is_current(OpKind::Search, first));
        assert!(guard.is_current(OpKind::Search, second));
    }

    #[test]
    fn test_superseded_token_never_becomes_current_again() {
        let guard = StalenessGuard::new();
        let first = guard.begin(OpKind::Resolve);

        for _ in 0..10 {
            guard.begin(OpKind::Resolve);
            assert!(!guard.is_current(OpKind::Resolve, first));
        }
    }

    #[test]
    fn test_kinds_are_independent() {
        let guard = StalenessGuard::new();
        let search = guard.begin(OpKind::Search);
        let resolve = guard.begin(OpKind::Resolve);

        assert!(guard.is_current(OpKind::Search, search));
        assert!(guard.is_current(OpKind::Resolve, resolve));

        guard.begin(OpKind::Resolve);
        assert!(guard.is_current(OpKind::Search, search));
        assert!(!guard.is_current(OpKind::Resolve, resolve));
    }
}
