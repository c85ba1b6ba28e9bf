//! Person record
//!
//! Natural key: name + phone.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::collection::UniqueEntity;
use crate::error::EntityKind;

/// Read-only view of a person: getters only
pub trait ReadOnlyPerson {
    fn name(&self) -> &str;
    fn phone(&self) -> &str;
    fn email(&self) -> &str;
    fn address(&self) -> &str;
    fn tags(&self) -> &BTreeSet<String>;
}

/// Person entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub tags: BTreeSet<String>,
}

impl Person {
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
            address: address.into(),
            tags: BTreeSet::new(),
        }
    }

    pub fn with_tags(mut self, tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }
}

impl ReadOnlyPerson for Person {
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

    fn tags(&self) -> &BTreeSet<String> {
        &self.tags
    }
}

impl UniqueEntity for Person {
    const KIND: EntityKind = EntityKind::Person;

    fn same_key(&self, other: &Self) -> bool {
        self.name == other.name && self.phone == other.phone
    }
}
