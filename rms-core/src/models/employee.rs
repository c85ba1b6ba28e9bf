//! Employee record
//!
//! Natural key: name + phone.

use serde::{Deserialize, Serialize};

use crate::collection::UniqueEntity;
use crate::error::EntityKind;

/// Read-only view of an employee: getters only
pub trait ReadOnlyEmployee {
    fn name(&self) -> &str;
    fn phone(&self) -> &str;
    fn email(&self) -> &str;
    fn address(&self) -> &str;
    fn position(&self) -> &str;
}

/// Employee entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub position: String,
}

impl Employee {
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
        address: impl Into<String>,
        position: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
            address: address.into(),
            position: position.into(),
        }
    }
}

impl ReadOnlyEmployee for Employee {
    fn name(&self) -> &str {
        &self.name
    }

    fn phone(&self) -> &str {
        &self.phone
    }

    fn email(&self) -> &str {
        &self.email
    }

    fn address(&self) -> &str {
        &self.address
    }

    fn position(&self) -> &str {
        &self.position
    }
}

impl UniqueEntity for Employee {
    const KIND: EntityKind = EntityKind::Employee;

    fn same_key(&self, other: &Self) -> bool {
        self.name == other.name && self.phone == other.phone
    }
}
