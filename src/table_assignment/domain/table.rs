//! Dining table entity and its occupancy status.

use super::{ParseTableStatusError, PartySize, RestaurantScope, TableAssignmentDomainError, TableId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Occupancy status of a dining table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableStatus {
    /// The table is free and may be offered to new parties.
    Available,
    /// Guests are currently seated.
    Occupied,
    /// The table is held for a reservation.
    Reserved,
    /// The table is being cleared.
    Cleaning,
    /// The table cannot be used.
    OutOfOrder,
}

impl TableStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Occupied => "occupied",
            Self::Reserved => "reserved",
            Self::Cleaning => "cleaning",
            Self::OutOfOrder => "out_of_order",
        }
    }
}

impl fmt::Display for TableStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TableStatus {
    type Error = ParseTableStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "available" => Ok(Self::Available),
            "occupied" => Ok(Self::Occupied),
            "reserved" => Ok(Self::Reserved),
            "cleaning" => Ok(Self::Cleaning),
            "out_of_order" => Ok(Self::OutOfOrder),
            _ => Err(ParseTableStatusError(value.to_owned())),
        }
    }
}

/// Dining table as seen by the recommendation engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    id: TableId,
    scope: RestaurantScope,
    name: String,
    capacity: u32,
    status: TableStatus,
    zone: Option<String>,
    features: BTreeSet<String>,
    assignment_priority: Option<u32>,
    is_active: bool,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTableData {
    /// Persisted table identifier.
    pub id: TableId,
    /// Owning restaurant.
    pub scope: RestaurantScope,
    /// Display name shown to staff.
    pub name: String,
    /// Seat count.
    pub capacity: u32,
    /// Current occupancy status.
    pub status: TableStatus,
    /// Location tag, if any.
    pub zone: Option<String>,
    /// Capability tags.
    pub features: BTreeSet<String>,
    /// Operator-assigned tiebreaker weight.
    pub assignment_priority: Option<u32>,
    /// Whether the table is in service.
    pub is_active: bool,
    /// Latest status change timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Table {
    /// Creates an active, available table with no zone or features.
    ///
    /// # Errors
    ///
    /// Returns [`TableAssignmentDomainError::EmptyTableName`] for a blank name
    /// or [`TableAssignmentDomainError::InvalidCapacity`] for zero seats.
    pub fn new(
        scope: RestaurantScope,
        name: impl Into<String>,
        capacity: u32,
        clock: &impl Clock,
    ) -> Result<Self, TableAssignmentDomainError> {
        let raw_name: String = name.into();
        let validated_name = validate_name(&raw_name)?;
        let validated_capacity = validate_capacity(capacity)?;

        Ok(Self {
            id: TableId::new(),
            scope,
            name: validated_name,
            capacity: validated_capacity,
            status: TableStatus::Available,
            zone: None,
            features: BTreeSet::new(),
            assignment_priority: None,
            is_active: true,
            updated_at: clock.utc(),
        })
    }

    /// Reconstructs a table from persisted storage.
    ///
    /// Stored rows pass the same checks as [`Table::new`], and the zone and
    /// features are trimmed with blanks dropped, as the builders do.
    ///
    /// # Errors
    ///
    /// Returns [`TableAssignmentDomainError::EmptyTableName`] or
    /// [`TableAssignmentDomainError::InvalidCapacity`] when the stored row
    /// could not have been created through [`Table::new`].
    pub fn from_persisted(data: PersistedTableData) -> Result<Self, TableAssignmentDomainError> {
        Ok(Self {
            id: data.id,
            scope: data.scope,
            name: validate_name(&data.name)?,
            capacity: validate_capacity(data.capacity)?,
            status: data.status,
            zone: data.zone.as_deref().and_then(normalize_tag),
            features: data
                .features
                .iter()
                .map(String::as_str)
                .filter_map(normalize_tag)
                .collect(),
            assignment_priority: data.assignment_priority,
            is_active: data.is_active,
            updated_at: data.updated_at,
        })
    }

    /// Sets the location tag. Blank values clear it.
    #[must_use]
    pub fn with_zone(mut self, zone: impl Into<String>) -> Self {
        let raw_zone: String = zone.into();
        self.zone = normalize_tag(&raw_zone);
        self
    }

    /// Sets the capability tags, discarding blanks.
    #[must_use]
    pub fn with_features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.features = features
            .into_iter()
            .map(Into::<String>::into)
            .filter_map(|feature| normalize_tag(&feature))
            .collect();
        self
    }

    /// Sets the operator tiebreaker weight.
    #[must_use]
    pub const fn with_assignment_priority(mut self, priority: u32) -> Self {
        self.assignment_priority = Some(priority);
        self
    }

    /// Sets the occupancy status.
    #[must_use]
    pub const fn with_status(mut self, status: TableStatus) -> Self {
        self.status = status;
        self
    }

    /// Marks the table as out of service.
    #[must_use]
    pub const fn deactivated(mut self) -> Self {
        self.is_active = false;
        self
    }

    /// Returns the table identifier.
    #[must_use]
    pub const fn id(&self) -> TableId {
        self.id
    }

    /// Returns the owning restaurant.
    #[must_use]
    pub const fn scope(&self) -> &RestaurantScope {
        &self.scope
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the seat count.
    #[must_use]
    pub const fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Returns the occupancy status.
    #[must_use]
    pub const fn status(&self) -> TableStatus {
        self.status
    }

    /// Returns the location tag, if any.
    #[must_use]
    pub fn zone(&self) -> Option<&str> {
        self.zone.as_deref()
    }

    /// Returns the capability tags in sorted order.
    #[must_use]
    pub const fn features(&self) -> &BTreeSet<String> {
        &self.features
    }

    /// Returns `true` when the table carries the given capability tag.
    #[must_use]
    pub fn has_feature(&self, feature: &str) -> bool {
        self.features.contains(feature)
    }

    /// Returns the operator tiebreaker weight, if set.
    #[must_use]
    pub const fn assignment_priority(&self) -> Option<u32> {
        self.assignment_priority
    }

    /// Returns whether the table is in service.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.is_active
    }

    /// Returns the latest status change timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns `true` when the table may be offered to the party: active,
    /// available and seating at least `party_size` guests.
    #[must_use]
    pub fn is_eligible_for(&self, party_size: PartySize) -> bool {
        self.is_active
            && self.status == TableStatus::Available
            && self.capacity >= party_size.value()
    }

    /// Records a status change.
    pub const fn set_status(&mut self, status: TableStatus, at: DateTime<Utc>) {
        self.status = status;
        self.updated_at = at;
    }
}

fn validate_name(raw: &str) -> Result<String, TableAssignmentDomainError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(TableAssignmentDomainError::EmptyTableName);
    }
    Ok(trimmed.to_owned())
}

const fn validate_capacity(capacity: u32) -> Result<u32, TableAssignmentDomainError> {
    if capacity == 0 {
        return Err(TableAssignmentDomainError::InvalidCapacity(capacity));
    }
    Ok(capacity)
}

fn normalize_tag(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}
