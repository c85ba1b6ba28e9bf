//! Adapted store document
//!
//! The top-level serialized form: one repeated element per collection.
//! Members are rebuilt before orders so that order customers can be
//! rehydrated against the live member list.

use serde::{Deserialize, Serialize};

use rms_core::{Rms, RmsResult, UniqueCollection};

use super::{
    AdaptedAttendance, AdaptedEmployee, AdaptedMember, AdaptedMenuItem, AdaptedOrder,
    AdaptedPerson,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename = "rms")]
pub struct AdaptedRms {
    #[serde(default, rename = "person", skip_serializing_if = "Vec::is_empty")]
    pub persons: Vec<AdaptedPerson>,
    #[serde(default, rename = "menu_item", skip_serializing_if = "Vec::is_empty")]
    pub menu_items: Vec<AdaptedMenuItem>,
    #[serde(default, rename = "employee", skip_serializing_if = "Vec::is_empty")]
    pub employees: Vec<AdaptedEmployee>,
    #[serde(default, rename = "order", skip_serializing_if = "Vec::is_empty")]
    pub orders: Vec<AdaptedOrder>,
    #[serde(default, rename = "member", skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<AdaptedMember>,
    #[serde(default, rename = "attendance", skip_serializing_if = "Vec::is_empty")]
    pub attendances: Vec<AdaptedAttendance>,
}

impl AdaptedRms {
    /// Adapt a whole store; works on snapshots, so the result shares no
    /// state with the source.
    pub fn from_model(source: &Rms) -> Self {
        Self {
            persons: source
                .get_all_persons()
                .into_iter()
                .map(|p| AdaptedPerson::from_model(&p))
                .collect(),
            menu_items: source
                .get_all_menu_items()
                .into_iter()
                .map(|m| AdaptedMenuItem::from_model(&m))
                .collect(),
            employees: source
                .get_all_employees()
                .into_iter()
                .map(|e| AdaptedEmployee::from_model(&e))
                .collect(),
            orders: source
                .get_all_orders()
                .into_iter()
                .map(|o| AdaptedOrder::from_model(&o))
                .collect(),
            members: source
                .get_all_members()
                .into_iter()
                .map(|m| AdaptedMember::from_model(&m))
                .collect(),
            attendances: source
                .get_all_attendances()
                .into_iter()
                .map(|a| AdaptedAttendance::from_model(&a))
                .collect(),
        }
    }

    /// Rebuild the store, validating every element.
    ///
    /// Fails with the usual typed conditions: `IllegalValue` for missing or
    /// rejected fields, `Duplicate` when the document holds two elements
    /// with the same natural key.
    pub fn to_model(&self) -> RmsResult<Rms> {
        let persons = collect(self.persons.iter().map(AdaptedPerson::to_model))?;
        let menu_items = collect(self.menu_items.iter().map(AdaptedMenuItem::to_model))?;
        let employees = collect(self.employees.iter().map(AdaptedEmployee::to_model))?;
        let members = collect(self.members.iter().map(AdaptedMember::to_model))?;
        let attendances = collect(self.attendances.iter().map(AdaptedAttendance::to_model))?;
        let orders = collect(self.orders.iter().map(|o| o.to_model(&members)))?;
        Ok(Rms::with_collections(
            persons,
            menu_items,
            employees,
            orders,
            members,
            attendances,
        ))
    }
}

fn collect<E: rms_core::UniqueEntity>(
    items: impl Iterator<Item = RmsResult<E>>,
) -> RmsResult<UniqueCollection<E>> {
    UniqueCollection::from_items(items.collect::<RmsResult<Vec<_>>>()?)
}
