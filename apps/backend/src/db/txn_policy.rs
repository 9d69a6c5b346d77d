use std::sync::OnceLock;

/// What `with_txn` does with a transaction whose closure returned Ok.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxnPolicy {
    /// Commit on success (default)
    CommitOnOk,
    /// Roll back on success, used by tests that must not persist writes
    RollbackOnOk,
}

static POLICY: OnceLock<TxnPolicy> = OnceLock::new();

/// Current policy; `CommitOnOk` when none has been set.
pub fn current() -> TxnPolicy {
    POLICY.get().copied().unwrap_or(TxnPolicy::CommitOnOk)
}

/// Set the process-wide policy. Idempotent: only the first call wins.
pub fn set_txn_policy(policy: TxnPolicy) {
    let _ = POLICY.set(policy);
}

#[cfg(test)]
mod tests {
    use super::{current, TxnPolicy};

    #[test]
    fn test_default_policy_is_commit() {
        assert_eq!(current(), TxnPolicy::CommitOnOk);
    }
}
