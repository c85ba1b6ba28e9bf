//! Committed orders and the draft-order builder
//!
//! `DishItems` is the insertion-ordered dish → quantity mapping shared by
//! both. An `Order` is an immutable commit of a `DraftOrder` snapshot.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::collection::UniqueEntity;
use crate::error::{EntityKind, RmsError, RmsResult};
use crate::models::member::Member;
use crate::models::menu::{MenuItem, Price};
use crate::util::{self, Timestamp};

/// One line of an order: the dish and how many were ordered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DishLine {
    pub dish: MenuItem,
    pub quantity: u32,
}

/// Insertion-ordered dish → quantity mapping
///
/// Never holds a non-positive quantity; lines are keyed by the dish's
/// natural key (its name).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DishItems {
    lines: Vec<DishLine>,
}

impl DishItems {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the quantity for `dish`.
    ///
    /// Negative fails with `IllegalValue`; zero removes the line (a no-op
    /// when absent); positive sets the absolute quantity, inserting a new
    /// line at the end when the dish is not yet present.
    pub fn set_quantity(&mut self, dish: &MenuItem, quantity: i32) -> RmsResult<()> {
        if quantity < 0 {
            return Err(RmsError::illegal(format!(
                "dish quantity cannot be negative: {}",
                quantity
            )));
        }
        let position = self.lines.iter().position(|line| line.dish.same_key(dish));
        match (position, quantity) {
            (Some(index), 0) => {
                self.lines.remove(index);
            }
            (Some(index), q) => {
                self.lines[index].quantity = q as u32;
            }
            (None, 0) => {}
            (None, q) => self.lines.push(DishLine {
                dish: dish.clone(),
                quantity: q as u32,
            }),
        }
        Ok(())
    }

    /// Quantity currently recorded for `dish`, or `None`
    pub fn quantity_of(&self, dish: &MenuItem) -> Option<u32> {
        self.lines
            .iter()
            .find(|line| line.dish.same_key(dish))
            .map(|line| line.quantity)
    }

    /// Lines in insertion order
    pub fn lines(&self) -> &[DishLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Σ dish.price × quantity
    pub fn total(&self) -> Decimal {
        self.lines
            .iter()
            .map(|line| line.dish.price.times(line.quantity))
            .sum()
    }
}

/// Read-only view of an order: getters only
pub trait ReadOnlyOrder {
    fn customer(&self) -> &Member;
    fn timestamp(&self) -> Timestamp;
    fn price(&self) -> Price;
    fn dish_items(&self) -> &DishItems;
}

/// Committed order
///
/// Orders are never deduplicated by a partial key: equality is full state,
/// and distinct commits differ at least in timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub customer: Member,
    pub timestamp: Timestamp,
    pub price: Price,
    pub dish_items: DishItems,
}

impl Order {
    pub fn new(customer: Member, timestamp: Timestamp, price: Price, dish_items: DishItems) -> Self {
        Self {
            customer,
            timestamp,
            price,
            dish_items,
        }
    }
}

impl ReadOnlyOrder for Order {
    fn customer(&self) -> &Member {
        &self.customer
    }

    fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    fn price(&self) -> Price {
        self.price
    }

    fn dish_items(&self) -> &DishItems {
        &self.dish_items
    }
}

impl UniqueEntity for Order {
    const KIND: EntityKind = EntityKind::Order;

    // Full state: orders are never deduplicated by a partial key.
    fn same_key(&self, other: &Self) -> bool {
        self == other
    }
}

/// Mutable order-in-progress
///
/// Holds an optional customer and a dish map, and commits by producing an
/// immutable [`Order`] snapshot. Clearing resets by replacement, so clones
/// taken earlier keep the old content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftOrder {
    customer: Option<Member>,
    dish_items: DishItems,
}

impl DraftOrder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn customer(&self) -> Option<&Member> {
        self.customer.as_ref()
    }

    pub fn dish_items(&self) -> &DishItems {
        &self.dish_items
    }

    /// Replace the customer (idempotent)
    pub fn set_customer(&mut self, customer: Member) {
        self.customer = Some(customer);
    }

    /// Adjust a dish quantity; semantics of [`DishItems::set_quantity`]
    pub fn set_dish_quantity(&mut self, dish: &MenuItem, quantity: i32) -> RmsResult<()> {
        self.dish_items.set_quantity(dish, quantity)
    }

    /// Reset to empty customer and empty dish map
    pub fn clear(&mut self) {
        *self = DraftOrder::new();
    }

    pub fn is_empty(&self) -> bool {
        self.customer.is_none() && self.dish_items.is_empty()
    }

    /// Commit into an [`Order`]: timestamp is the current wall-clock
    /// instant, price is the dish-map total.
    ///
    /// Fails with `IllegalValue` when no customer is set or the dish map
    /// is empty.
    pub fn snapshot(&self) -> RmsResult<Order> {
        let customer = self
            .customer
            .clone()
            .ok_or_else(|| RmsError::illegal("draft order has no customer"))?;
        if self.dish_items.is_empty() {
            return Err(RmsError::illegal("draft order has no dishes"));
        }
        let price = Price::new(self.dish_items.total())?;
        Ok(Order::new(
            customer,
            util::now_millis(),
            price,
            self.dish_items.clone(),
        ))
    }
}
