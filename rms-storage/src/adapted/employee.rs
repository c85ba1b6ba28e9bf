//! Adapted employee

use serde::{Deserialize, Serialize};

use rms_core::RmsResult;
use rms_core::models::{Employee, ReadOnlyEmployee};

use super::required;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdaptedEmployee {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
}

impl AdaptedEmployee {
    /// Adapt from a read-only view; the result shares no state with it
    pub fn from_model(source: &impl ReadOnlyEmployee) -> Self {
        Self {
            name: Some(source.name().to_string()),
            phone: Some(source.phone().to_string()),
            email: Some(source.email().to_string()),
            address: Some(source.address().to_string()),
            position: Some(source.position().to_string()),
        }
    }

    /// Convert back into the entity, validating required fields
    pub fn to_model(&self) -> RmsResult<Employee> {
        Ok(Employee::new(
            required(&self.name, "employee name")?,
            required(&self.phone, "employee phone")?,
            required(&self.email, "employee email")?,
            required(&self.address, "employee address")?,
            required(&self.position, "employee position")?,
        ))
    }
}
