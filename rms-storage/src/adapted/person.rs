//! Adapted person

use serde::{Deserialize, Serialize};

use rms_core::RmsResult;
use rms_core::models::{Person, ReadOnlyPerson};

use super::required;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdaptedPerson {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, rename = "tag", skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl AdaptedPerson {
    /// Adapt from a read-only view; the result shares no state with it
    pub fn from_model(source: &impl ReadOnlyPerson) -> Self {
        Self {
            name: Some(source.name().to_string()),
            phone: Some(source.phone().to_string()),
            email: Some(source.email().to_string()),
            address: Some(source.address().to_string()),
            tags: source.tags().iter().cloned().collect(),
        }
    }

    /// Convert back into the entity, validating required fields
    pub fn to_model(&self) -> RmsResult<Person> {
        Ok(Person::new(
            required(&self.name, "person name")?,
            required(&self.phone, "person phone")?,
            required(&self.email, "person email")?,
            required(&self.address, "person address")?,
        )
        .with_tags(self.tags.iter().cloned()))
    }
}
