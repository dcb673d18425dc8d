//! User records and identifiers

use std::fmt;
use std::str::FromStr;

/// Identifier assigned to a user by the [`UserStore`](crate::UserStore).
///
/// Identifiers handed out by the store are always positive. Any integer can
/// be used for lookups, which is how requests for never-issued, zero or
/// negative identifiers simply come back empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UserId(i64);

impl UserId {
    /// The first identifier a fresh store assigns
    pub const FIRST: UserId = UserId(1);

    /// Wrap a raw integer identifier
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// The raw integer value
    pub const fn get(self) -> i64 {
        self.0
    }

    pub(crate) fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl FromStr for UserId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

/// A user record held by the store.
///
/// This is the internal representation; the wire format lives in the api
/// module so the two can evolve separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    name: String,
}

impl User {
    /// Create a user with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The user's name
    pub fn name(&self) -> &str {
        &self.name
    }
}
