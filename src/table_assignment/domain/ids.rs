//! Identifier and validated scalar types for the table assignment domain.

use super::TableAssignmentDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a dining table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TableId(Uuid);

impl TableId {
    /// Creates a new random table identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a table identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the wrapped UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for TableId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a reservation record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReservationId(Uuid);

impl ReservationId {
    /// Creates a new random reservation identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a reservation identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the wrapped UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for ReservationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ReservationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Owning restaurant (tenant) of tables and reservations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RestaurantScope(String);

impl RestaurantScope {
    /// Creates a validated restaurant scope.
    ///
    /// # Errors
    ///
    /// Returns [`TableAssignmentDomainError::EmptyScope`] when the value is
    /// blank.
    pub fn new(value: impl Into<String>) -> Result<Self, TableAssignmentDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(TableAssignmentDomainError::EmptyScope);
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Returns the scope as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for RestaurantScope {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for RestaurantScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Number of guests to seat together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PartySize(u32);

impl PartySize {
    /// Creates a validated party size.
    ///
    /// Accepts a signed value so that malformed caller input (zero or
    /// negative counts) can be rejected instead of wrapping.
    ///
    /// # Errors
    ///
    /// Returns [`TableAssignmentDomainError::InvalidPartySize`] when the
    /// value is not positive or does not fit in `u32`.
    pub fn new(value: i64) -> Result<Self, TableAssignmentDomainError> {
        match u32::try_from(value) {
            Ok(size) if size > 0 => Ok(Self(size)),
            _ => Err(TableAssignmentDomainError::InvalidPartySize(value)),
        }
    }

    /// Returns the underlying guest count.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for PartySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
