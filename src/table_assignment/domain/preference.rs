//! Caller-supplied soft seating constraints.

use serde::{Deserialize, Serialize};

/// Soft preferences that influence ranking but never exclude a table.
///
/// Every field is optional; absence means "no preference".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeatingPreference {
    zone: Option<String>,
    features: Vec<String>,
    child_friendly: bool,
    wheelchair: bool,
}

impl SeatingPreference {
    /// Creates an empty preference set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the desired zone. Blank values clear it.
    #[must_use]
    pub fn with_zone(mut self, zone: impl Into<String>) -> Self {
        let raw = zone.into();
        let trimmed = raw.trim();
        self.zone = (!trimmed.is_empty()).then(|| trimmed.to_owned());
        self
    }

    /// Sets the desired feature tags.
    ///
    /// Blank tags are dropped and duplicates collapse onto their first
    /// occurrence so matched features are reported once, in request order.
    #[must_use]
    pub fn with_features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for feature in features {
            let raw = feature.into();
            let trimmed = raw.trim();
            if !trimmed.is_empty() && !unique.iter().any(|seen| seen == trimmed) {
                unique.push(trimmed.to_owned());
            }
        }
        self.features = unique;
        self
    }

    /// Requests child-friendly amenities.
    #[must_use]
    pub const fn with_child_friendly(mut self, child_friendly: bool) -> Self {
        self.child_friendly = child_friendly;
        self
    }

    /// Requests wheelchair access.
    #[must_use]
    pub const fn with_wheelchair(mut self, wheelchair: bool) -> Self {
        self.wheelchair = wheelchair;
        self
    }

    /// Returns the desired zone, if any.
    #[must_use]
    pub fn zone(&self) -> Option<&str> {
        self.zone.as_deref()
    }

    /// Returns the desired feature tags in request order.
    #[must_use]
    pub fn features(&self) -> &[String] {
        &self.features
    }

    /// Returns whether child-friendly amenities were requested.
    #[must_use]
    pub const fn child_friendly(&self) -> bool {
        self.child_friendly
    }

    /// Returns whether wheelchair access was requested.
    #[must_use]
    pub const fn wheelchair(&self) -> bool {
        self.wheelchair
    }
}
