//! Owner-only authorization.

use super::UserId;

/// Decides whether a caller may run a privileged command.
pub trait Guard: Send + Sync {
    /// `caller` is `None` when the platform delivered no sender identity.
    fn check(&self, caller: Option<UserId>) -> bool;
}

/// Admits exactly one configured identity.
///
/// An owner of `0` means no owner was configured and every caller is
/// denied. An absent caller never matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OwnerGuard {
    owner: UserId,
}

impl OwnerGuard {
    pub fn new(owner: UserId) -> Self {
        Self { owner }
    }

    pub fn owner(&self) -> UserId {
        self.owner
    }
}

impl Guard for OwnerGuard {
    fn check(&self, caller: Option<UserId>) -> bool {
        self.owner != UserId::UNSET && caller == Some(self.owner)
    }
}
