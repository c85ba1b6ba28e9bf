//! Menu item and its value types
//!
//! `ItemType` is the closed menu-category vocabulary; `Price` is a
//! non-negative decimal amount. Both validate at construction and keep the
//! same string forms on the wire and in display. Natural key of a menu
//! item: name.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::str::FromStr;

use crate::collection::UniqueEntity;
use crate::error::{EntityKind, RmsError, RmsResult};

/// Constraint message for a rejected menu category
pub const ITEM_TYPE_CONSTRAINTS: &str =
    "item type should be one of: main, sides, beverage, dessert, others, set meal";

/// Menu category (closed vocabulary)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Main,
    Sides,
    Beverage,
    Dessert,
    Others,
    #[serde(rename = "set meal")]
    SetMeal,
}

impl ItemType {
    pub const ALL: [ItemType; 6] = [
        ItemType::Main,
        ItemType::Sides,
        ItemType::Beverage,
        ItemType::Dessert,
        ItemType::Others,
        ItemType::SetMeal,
    ];

    /// The exact accepted/serialized string form
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::Main => "main",
            ItemType::Sides => "sides",
            ItemType::Beverage => "beverage",
            ItemType::Dessert => "dessert",
            ItemType::Others => "others",
            ItemType::SetMeal => "set meal",
        }
    }
}

impl std::fmt::Display for ItemType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ItemType {
    type Err = RmsError;

    /// Parses the trimmed input, case-sensitive
    fn from_str(s: &str) -> RmsResult<Self> {
        match s.trim() {
            "main" => Ok(ItemType::Main),
            "sides" => Ok(ItemType::Sides),
            "beverage" => Ok(ItemType::Beverage),
            "dessert" => Ok(ItemType::Dessert),
            "others" => Ok(ItemType::Others),
            "set meal" => Ok(ItemType::SetMeal),
            _ => Err(RmsError::illegal(ITEM_TYPE_CONSTRAINTS)),
        }
    }
}

/// Non-negative decimal price
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "Decimal", try_from = "Decimal")]
pub struct Price(Decimal);

impl Price {
    pub const ZERO: Price = Price(Decimal::ZERO);

    /// Validates the given amount; negative fails with `IllegalValue`
    pub fn new(value: Decimal) -> RmsResult<Self> {
        if value < Decimal::ZERO {
            return Err(RmsError::illegal(format!(
                "price cannot be negative: {}",
                value
            )));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Line total for `quantity` units
    pub fn times(&self, quantity: u32) -> Decimal {
        self.0 * Decimal::from(quantity)
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Decimal {
        price.0
    }
}

impl TryFrom<Decimal> for Price {
    type Error = RmsError;

    fn try_from(value: Decimal) -> RmsResult<Self> {
        Price::new(value)
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Read-only view of a menu item: getters only
pub trait ReadOnlyMenuItem {
    fn name(&self) -> &str;
    fn price(&self) -> Price;
    fn item_type(&self) -> ItemType;
    fn tags(&self) -> &BTreeSet<String>;
}

/// Menu item entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    pub price: Price,
    pub item_type: ItemType,
    pub tags: BTreeSet<String>,
}

impl MenuItem {
    pub fn new(name: impl Into<String>, price: Price, item_type: ItemType) -> Self {
        Self {
            name: name.into(),
            price,
            item_type,
            tags: BTreeSet::new(),
        }
    }

    pub fn with_tags(mut self, tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }
}

impl ReadOnlyMenuItem for MenuItem {
    fn name(&self) -> &str {
        &self.name
    }

    fn price(&self) -> Price {
        self.price
    }

    fn item_type(&self) -> ItemType {
        self.item_type
    }

    fn tags(&self) -> &BTreeSet<String> {
        &self.tags
    }
}

impl UniqueEntity for MenuItem {
    const KIND: EntityKind = EntityKind::MenuItem;

    fn same_key(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::dec;

    #[test]
    fn test_item_type_parse_trims() {
        assert_eq!(" main ".parse::<ItemType>().unwrap(), ItemType::Main);
        assert_eq!("set meal".parse::<ItemType>().unwrap(), ItemType::SetMeal);
    }

    #[test]
    fn test_item_type_parse_is_case_sensitive() {
        let err = "Main".parse::<ItemType>().unwrap_err();
        assert_eq!(err, RmsError::illegal(ITEM_TYPE_CONSTRAINTS));
        assert!("drinks".parse::<ItemType>().is_err());
    }

    #[test]
    fn test_item_type_round_trips_through_strings() {
        for t in ItemType::ALL {
            assert_eq!(t.as_str().parse::<ItemType>().unwrap(), t);
            let json = serde_json::to_string(&t).unwrap();
            assert_eq!(json, format!("\"{}\"", t.as_str()));
            assert_eq!(serde_json::from_str::<ItemType>(&json).unwrap(), t);
        }
    }

    #[test]
    fn test_negative_price_rejected() {
        assert!(matches!(
            Price::new(dec!(-0.01)),
            Err(RmsError::IllegalValue(_))
        ));
        assert_eq!(Price::new(Decimal::ZERO).unwrap(), Price::ZERO);
    }

    #[test]
    fn test_price_line_total() {
        let fries = Price::new(dec!(3.0)).unwrap();
        assert_eq!(fries.times(2), dec!(6.0));
        assert_eq!(fries.times(0), Decimal::ZERO);
    }

    #[test]
    fn test_menu_item_key_is_name() {
        let a = MenuItem::new("Fries", Price::new(dec!(3.0)).unwrap(), ItemType::Sides);
        let repriced = MenuItem::new("Fries", Price::new(dec!(3.5)).unwrap(), ItemType::Sides);
        assert!(a.same_key(&repriced));
    }
}
