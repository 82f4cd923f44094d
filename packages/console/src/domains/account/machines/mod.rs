//! Account status machine - pure transition logic
//!
//! The moderation engine consults this table and commits the result through
//! the directory store. Nothing here touches state.

use crate::common::{DirectoryError, EntityKind};
use crate::domains::account::models::AccountStatus;

/// Warnings at which the next warn escalates to a ban.
pub const BAN_THRESHOLD: u32 = 3;

/// Moderation actions an admin can take on an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountAction {
    Warn,
    Ban,
    Restore,
}

impl AccountAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountAction::Warn => "warn",
            AccountAction::Ban => "ban",
            AccountAction::Restore => "restore",
        }
    }
}

/// Outcome of a legal transition: the new status and warning count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub status: AccountStatus,
    pub warning_count: u32,
}

/// Apply a moderation action to an account's current standing.
///
/// Transition table:
/// - active --warn--> warning; warning --warn(count reaches 3)--> banned
/// - active|warning --ban--> banned (direct escalation for severe violations)
/// - banned --ban--> banned (idempotent no-op)
/// - banned --restore--> active, warning count reset to 0
///
/// Anything else is an `InvalidTransition`.
pub fn apply(
    status: AccountStatus,
    warning_count: u32,
    action: AccountAction,
) -> Result<Transition, DirectoryError> {
    use AccountStatus::*;

    match (status, action) {
        (Active | Warning, AccountAction::Warn) => {
            let count = warning_count + 1;
            let status = if count >= BAN_THRESHOLD { Banned } else { Warning };
            Ok(Transition {
                status,
                warning_count: count,
            })
        }
        // Banning is always legal and idempotent; the count is kept for audit
        (_, AccountAction::Ban) => Ok(Transition {
            status: Banned,
            warning_count,
        }),
        (Banned, AccountAction::Restore) => Ok(Transition {
            status: Active,
            warning_count: 0,
        }),
        (from, action) => Err(DirectoryError::InvalidTransition {
            kind: EntityKind::Account,
            from: from.to_string(),
            action: action.as_str().to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_warns_from_active_ban() {
        let t1 = apply(AccountStatus::Active, 0, AccountAction::Warn).unwrap();
        assert_eq!(t1.status, AccountStatus::Warning);
        assert_eq!(t1.warning_count, 1);

        let t2 = apply(t1.status, t1.warning_count, AccountAction::Warn).unwrap();
        assert_eq!(t2.status, AccountStatus::Warning);

        let t3 = apply(t2.status, t2.warning_count, AccountAction::Warn).unwrap();
        assert_eq!(t3.status, AccountStatus::Banned);
        assert_eq!(t3.warning_count, 3);
    }

    #[test]
    fn test_warn_on_banned_is_invalid() {
        let err = apply(AccountStatus::Banned, 3, AccountAction::Warn).unwrap_err();
        assert!(matches!(err, DirectoryError::InvalidTransition { .. }));
    }

    #[test]
    fn test_direct_ban_skips_warnings() {
        let t = apply(AccountStatus::Active, 0, AccountAction::Ban).unwrap();
        assert_eq!(t.status, AccountStatus::Banned);
        assert_eq!(t.warning_count, 0);
    }

    #[test]
    fn test_ban_is_idempotent() {
        let once = apply(AccountStatus::Active, 1, AccountAction::Ban).unwrap();
        let twice = apply(once.status, once.warning_count, AccountAction::Ban).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_restore_resets_warning_count() {
        let t = apply(AccountStatus::Banned, 3, AccountAction::Restore).unwrap();
        assert_eq!(t.status, AccountStatus::Active);
        assert_eq!(t.warning_count, 0);
    }

    #[test]
    fn test_restore_only_from_banned() {
        assert!(apply(AccountStatus::Active, 0, AccountAction::Restore).is_err());
        assert!(apply(AccountStatus::Warning, 1, AccountAction::Restore).is_err());
    }
}
