//! Member record
//!
//! Natural key: name + email.

use serde::{Deserialize, Serialize};

use crate::collection::UniqueEntity;
use crate::error::{EntityKind, RmsError, RmsResult};

/// Non-negative points balance
///
/// Serialized as a bare integer; a negative value is rejected on both
/// construction and deserialization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "i64", try_from = "i64")]
pub struct Points(i64);

impl Points {
    pub const ZERO: Points = Points(0);

    /// Validates the given balance; negative fails with `IllegalValue`
    pub fn new(value: i64) -> RmsResult<Self> {
        if value < 0 {
            return Err(RmsError::illegal(format!(
                "points balance cannot be negative: {}",
                value
            )));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl From<Points> for i64 {
    fn from(points: Points) -> i64 {
        points.0
    }
}

impl TryFrom<i64> for Points {
    type Error = RmsError;

    fn try_from(value: i64) -> RmsResult<Self> {
        Points::new(value)
    }
}

impl std::fmt::Display for Points {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Read-only view of a member: getters only
pub trait ReadOnlyMember {
    fn name(&self) -> &str;
    fn email(&self) -> &str;
    fn tier(&self) -> &str;
    fn points(&self) -> Points;
}

/// Member entity (loyalty program)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub name: String,
    pub email: String,
    pub tier: String,
    pub points: Points,
}

impl Member {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        tier: impl Into<String>,
        points: Points,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            tier: tier.into(),
            points,
        }
    }
}

impl ReadOnlyMember for Member {
    fn name(&self) -> &str {
        &self.name
    }

    fn email(&self) -> &str {
        &self.email
    }

    fn tier(&self) -> &str {
        &self.tier
    }

    fn points(&self) -> Points {
        self.points
    }
}

impl UniqueEntity for Member {
    const KIND: EntityKind = EntityKind::Member;

    fn same_key(&self, other: &Self) -> bool {
        self.name == other.name && self.email == other.email
    }
}
