//! Adapted menu item
//!
//! Price and category are stored in their raw string forms and go back
//! through the validating constructors on reconstruction.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use rms_core::models::{ItemType, MenuItem, Price, ReadOnlyMenuItem};
use rms_core::{RmsError, RmsResult};

use super::required;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdaptedMenuItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub item_type: Option<String>,
    #[serde(default, rename = "tag", skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl AdaptedMenuItem {
    /// Adapt from a read-only view; the result shares no state with it
    pub fn from_model(source: &impl ReadOnlyMenuItem) -> Self {
        Self {
            name: Some(source.name().to_string()),
            price: Some(source.price().value().to_string()),
            item_type: Some(source.item_type().as_str().to_string()),
            tags: source.tags().iter().cloned().collect(),
        }
    }

    /// Convert back into the entity, re-validating price and category
    pub fn to_model(&self) -> RmsResult<MenuItem> {
        let raw_price = required(&self.price, "menu item price")?;
        let amount = Decimal::from_str(&raw_price)
            .map_err(|_| RmsError::illegal(format!("malformed price: {}", raw_price)))?;
        let item_type: ItemType = required(&self.item_type, "menu item type")?.parse()?;
        Ok(MenuItem::new(
            required(&self.name, "menu item name")?,
            Price::new(amount)?,
            item_type,
        )
        .with_tags(self.tags.iter().cloned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::dec;

    fn fries() -> MenuItem {
        MenuItem::new("Fries", Price::new(dec!(3.50)).unwrap(), ItemType::Sides)
            .with_tags(["fried"])
    }

    #[test]
    fn test_round_trip() {
        let adapted = AdaptedMenuItem::from_model(&fries());
        assert_eq!(adapted.to_model().unwrap(), fries());
    }

    #[test]
    fn test_unknown_category_rejected() {
        let mut adapted = AdaptedMenuItem::from_model(&fries());
        adapted.item_type = Some("drinks".into());
        assert!(matches!(
            adapted.to_model(),
            Err(RmsError::IllegalValue(_))
        ));
    }

    #[test]
    fn test_malformed_price_rejected() {
        let mut adapted = AdaptedMenuItem::from_model(&fries());
        adapted.price = Some("three fifty".into());
        assert!(matches!(
            adapted.to_model(),
            Err(RmsError::IllegalValue(_))
        ));
    }

    #[test]
    fn test_negative_price_rejected() {
        let mut adapted = AdaptedMenuItem::from_model(&fries());
        adapted.price = Some("-1.00".into());
        assert!(matches!(
            adapted.to_model(),
            Err(RmsError::IllegalValue(_))
        ));
    }
}
