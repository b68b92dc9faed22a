use std::collections::HashSet;

use portlog_types::{AccountId, Role};

use crate::error::TrackerError;

/// Role membership gate consulted before every mutation.
///
/// Initialization is decoupled from construction so the tracker can be
/// built empty and bootstrapped by its first caller; `initialize` grants
/// both roles to that caller and is callable exactly once.
#[derive(Debug, Default)]
pub struct AccessControl {
    initialized: bool,
    admins: HashSet<AccountId>,
    authorizers: HashSet<AccountId>,
}

impl AccessControl {
    pub fn new() -> Self {
        Self::default()
    }

    /// One-time bootstrap: grant Admin and Authorizer to `account`.
    pub fn initialize(&mut self, account: AccountId) -> Result<(), TrackerError> {
        if self.initialized {
            return Err(TrackerError::AlreadyInitialized);
        }
        self.initialized = true;
        self.admins.insert(account);
        self.authorizers.insert(account);
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Pure membership lookup; never fails.
    pub fn has_role(&self, role: Role, account: &AccountId) -> bool {
        match role {
            Role::Admin => self.admins.contains(account),
            Role::Authorizer => self.authorizers.contains(account),
        }
    }

    /// Gate for every write path. Checked before any state is touched.
    pub fn require_authorizer(&self, caller: &AccountId) -> Result<(), TrackerError> {
        if self.authorizers.contains(caller) {
            Ok(())
        } else {
            Err(TrackerError::NoAuthority)
        }
    }
}
