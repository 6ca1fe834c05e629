//! Expense identifiers
//!
//! Identifiers are generated fresh per record, so the ledger never has to
//! check for duplicates on insert.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

const DISPLAY_PREFIX: &str = "exp-";

/// Unique identifier of an expense record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(Uuid);

impl ExpenseId {
    /// Create a new random ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Short form shown in listings (`exp-` plus the first 8 hex digits)
    pub fn short(&self) -> String {
        format!("{}{}", DISPLAY_PREFIX, &self.0.simple().to_string()[..8])
    }

    /// Check whether a user-typed reference (`exp-1a2b3c4d`, a bare prefix,
    /// or a full UUID) points at this ID
    pub fn matches(&self, reference: &str) -> bool {
        let reference = reference.trim().to_ascii_lowercase();
        if let Ok(uuid) = Uuid::parse_str(&reference) {
            return uuid == self.0;
        }
        let prefix = reference.strip_prefix(DISPLAY_PREFIX).unwrap_or(&reference);
        prefix.len() >= 4 && self.0.simple().to_string().starts_with(prefix)
    }
}

impl Default for ExpenseId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short())
    }
}

impl From<Uuid> for ExpenseId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

/// Parses a full UUID, with or without the `exp-` prefix
///
/// The 8-digit short form is not enough to rebuild an ID; resolve it against
/// known records with [`ExpenseId::matches`].
impl FromStr for ExpenseId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix(DISPLAY_PREFIX).unwrap_or(s);
        Ok(Self(Uuid::parse_str(s)?))
    }
}
