//! Adapted member

use serde::{Deserialize, Serialize};

use rms_core::RmsResult;
use rms_core::models::{Member, Points, ReadOnlyMember};

use super::required;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdaptedMember {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<i64>,
}

impl AdaptedMember {
    /// Adapt from a read-only view; the result shares no state with it
    pub fn from_model(source: &impl ReadOnlyMember) -> Self {
        Self {
            name: Some(source.name().to_string()),
            email: Some(source.email().to_string()),
            tier: Some(source.tier().to_string()),
            points: Some(source.points().value()),
        }
    }

    /// Convert back into the entity; the points balance re-validates
    pub fn to_model(&self) -> RmsResult<Member> {
        Ok(Member::new(
            required(&self.name, "member name")?,
            required(&self.email, "member email")?,
            required(&self.tier, "member tier")?,
            Points::new(required(&self.points, "member points")?)?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rms_core::RmsError;

    #[test]
    fn test_round_trip() {
        let member = Member::new("Mia", "mia@rms.test", "gold", Points::new(250).unwrap());
        let adapted = AdaptedMember::from_model(&member);
        assert_eq!(adapted.to_model().unwrap(), member);
    }

    #[test]
    fn test_negative_points_rejected_on_load() {
        let adapted = AdaptedMember {
            name: Some("Mia".into()),
            email: Some("mia@rms.test".into()),
            tier: Some("gold".into()),
            points: Some(-10),
        };
        assert!(matches!(
            adapted.to_model(),
            Err(RmsError::IllegalValue(_))
        ));
    }
}
