//! Adapted order
//!
//! The customer is embedded in full. On reconstruction it is rehydrated:
//! matched by state against the provided member list, reusing the live
//! member when one matches and fabricating a fresh one otherwise. No
//! referential integrity is enforced.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use rms_core::models::{DishItems, Member, Order, Price, ReadOnlyOrder};
use rms_core::util::Timestamp;
use rms_core::{RmsError, RmsResult, UniqueCollection};

use super::{AdaptedMember, AdaptedMenuItem, required};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdaptedDishLine {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dish: Option<AdaptedMenuItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdaptedOrder {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<AdaptedMember>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(default, rename = "dish_item", skip_serializing_if = "Vec::is_empty")]
    pub dish_items: Vec<AdaptedDishLine>,
}

impl AdaptedOrder {
    /// Adapt from a read-only view; the result shares no state with it
    pub fn from_model(source: &impl ReadOnlyOrder) -> Self {
        Self {
            customer: Some(AdaptedMember::from_model(source.customer())),
            timestamp: Some(source.timestamp()),
            price: Some(source.price().value().to_string()),
            dish_items: source
                .dish_items()
                .lines()
                .iter()
                .map(|line| AdaptedDishLine {
                    dish: Some(AdaptedMenuItem::from_model(&line.dish)),
                    quantity: Some(line.quantity as i32),
                })
                .collect(),
        }
    }

    /// Convert back into an [`Order`], rehydrating the customer against
    /// `members`.
    pub fn to_model(&self, members: &UniqueCollection<Member>) -> RmsResult<Order> {
        let embedded = required(&self.customer, "order customer")?.to_model()?;
        let customer = retrieve_member(embedded, members);

        let raw_price = required(&self.price, "order price")?;
        let amount = Decimal::from_str(&raw_price)
            .map_err(|_| RmsError::illegal(format!("malformed price: {}", raw_price)))?;

        let mut dish_items = DishItems::new();
        for line in &self.dish_items {
            let dish = required(&line.dish, "order dish")?.to_model()?;
            let quantity = required(&line.quantity, "dish quantity")?;
            if quantity <= 0 {
                return Err(RmsError::illegal(format!(
                    "dish quantity must be positive: {}",
                    quantity
                )));
            }
            dish_items.set_quantity(&dish, quantity)?;
        }

        Ok(Order::new(
            customer,
            required(&self.timestamp, "order timestamp")?,
            Price::new(amount)?,
            dish_items,
        ))
    }
}

/// Reuse the state-equal live member when the list holds one, otherwise
/// fabricate a fresh member from the embedded data
fn retrieve_member(target: Member, members: &UniqueCollection<Member>) -> Member {
    members
        .iter()
        .find(|member| **member == target)
        .cloned()
        .unwrap_or(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rms_core::models::{ItemType, MenuItem, Points};
    use rust_decimal::dec;

    fn mia() -> Member {
        Member::new("Mia", "mia@rms.test", "gold", Points::new(120).unwrap())
    }

    fn sample_order() -> Order {
        let fries = MenuItem::new("Fries", Price::new(dec!(3.0)).unwrap(), ItemType::Sides);
        let mut dish_items = DishItems::new();
        dish_items.set_quantity(&fries, 2).unwrap();
        Order::new(mia(), 1_700_000_000_000, Price::new(dec!(6.0)).unwrap(), dish_items)
    }

    #[test]
    fn test_round_trip_rehydrates_from_member_list() {
        let members = UniqueCollection::from_items([mia()]).unwrap();
        let adapted = AdaptedOrder::from_model(&sample_order());
        let rebuilt = adapted.to_model(&members).unwrap();
        assert_eq!(rebuilt, sample_order());
        assert_eq!(&rebuilt.customer, members.get_at(0).unwrap());
    }

    #[test]
    fn test_fabricates_member_when_list_is_empty() {
        let members = UniqueCollection::new();
        let adapted = AdaptedOrder::from_model(&sample_order());
        let rebuilt = adapted.to_model(&members).unwrap();
        assert_eq!(rebuilt.customer, mia());
    }

    #[test]
    fn test_non_positive_quantity_rejected() {
        let mut adapted = AdaptedOrder::from_model(&sample_order());
        adapted.dish_items[0].quantity = Some(0);
        assert!(matches!(
            adapted.to_model(&UniqueCollection::new()),
            Err(RmsError::IllegalValue(_))
        ));
    }

    #[test]
    fn test_missing_customer_rejected() {
        let mut adapted = AdaptedOrder::from_model(&sample_order());
        adapted.customer = None;
        assert!(adapted.to_model(&UniqueCollection::new()).is_err());
    }
}
