//! In-memory user store

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::user::{User, UserId};

#[derive(Debug)]
struct Table {
    users: HashMap<UserId, User>,
    next_id: UserId,
}

impl Default for Table {
    fn default() -> Self {
        Self {
            users: HashMap::new(),
            next_id: UserId::FIRST,
        }
    }
}

/// Concurrent in-memory store of users, keyed by an allocated [`UserId`].
///
/// The table and the identifier allocator sit behind a single
/// readers-writer lock: lookups share it, while creates and deletes take
/// it exclusively. No operation performs I/O or awaits, so callers never
/// hold the lock for longer than one map operation.
///
/// Cloning the store yields another handle to the same table.
#[derive(Debug, Clone, Default)]
pub struct UserStore {
    table: Arc<RwLock<Table>>,
}

impl UserStore {
    /// Create a new, empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a user, returning the identifier assigned to it.
    ///
    /// Callers are expected to have validated the user already.
    pub fn create(&self, user: User) -> UserId {
        let id = {
            let mut table = self.table.write();
            let id = table.next_id;
            table.users.insert(id, user);
            table.next_id = id.next();
            id
        };

        tracing::debug!(%id, "Created user");
        id
    }

    /// Look up a user by identifier
    pub fn get(&self, id: UserId) -> Option<User> {
        let user = self.table.read().users.get(&id).cloned();
        tracing::trace!(%id, found = user.is_some(), "Looked up user");
        user
    }

    /// Remove a user. Removing an identifier that is not present is a no-op.
    pub fn delete(&self, id: UserId) {
        let removed = self.table.write().users.remove(&id).is_some();
        tracing::debug!(%id, removed, "Deleted user");
    }

    /// Number of users currently stored
    pub fn len(&self) -> usize {
        self.table.read().users.len()
    }

    /// Whether the store holds no users
    pub fn is_empty(&self) -> bool {
        self.table.read().users.is_empty()
    }

    /// The identifier the next create will be assigned
    pub fn next_id(&self) -> UserId {
        self.table.read().next_id
    }
}
