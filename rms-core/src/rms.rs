//! Aggregate repository
//!
//! Owns one [`UniqueCollection`] per entity kind plus the draft order, and
//! is the only mutation/query surface command handlers talk to. Every
//! operation either succeeds and mutates or fails typed and leaves the
//! store unchanged; queries hand out defensively copied snapshots.
//!
//! Mutations are traced: `debug!` when applied, `warn!` when rejected. No
//! subscriber is installed here; that is the embedding application's call.
//!
//! Single-threaded cooperative use only: there is no internal locking, and
//! callers that introduce threads must serialize access externally.

use tracing::{debug, warn};

use crate::collection::UniqueCollection;
use crate::error::RmsResult;
use crate::models::{
    Attendance, DraftOrder, Employee, Member, MenuItem, Order, Person,
};

/// Forward a mutation outcome to the log
fn traced(op: &'static str, result: RmsResult<()>) -> RmsResult<()> {
    match &result {
        Ok(()) => debug!(op, "mutation applied"),
        Err(err) => warn!(op, error = %err, "mutation rejected"),
    }
    result
}

/// The in-memory restaurant management store
#[derive(Debug, Clone, Default)]
pub struct Rms {
    persons: UniqueCollection<Person>,
    employees: UniqueCollection<Employee>,
    members: UniqueCollection<Member>,
    menu: UniqueCollection<MenuItem>,
    orders: UniqueCollection<Order>,
    attendances: UniqueCollection<Attendance>,
    draft_order: DraftOrder,
}

impl Rms {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a store from already-populated collections.
    ///
    /// The store takes ownership, so later external mutation cannot reach
    /// it. The draft order starts empty.
    pub fn with_collections(
        persons: UniqueCollection<Person>,
        menu: UniqueCollection<MenuItem>,
        employees: UniqueCollection<Employee>,
        orders: UniqueCollection<Order>,
        members: UniqueCollection<Member>,
        attendances: UniqueCollection<Attendance>,
    ) -> Self {
        Self {
            persons,
            employees,
            members,
            menu,
            orders,
            attendances,
            draft_order: DraftOrder::new(),
        }
    }

    // ==================== Persons ====================

    pub fn add_person(&mut self, person: Person) -> RmsResult<()> {
        traced("add_person", self.persons.add(person))
    }

    pub fn contains_person(&self, key: &Person) -> bool {
        self.persons.contains(key)
    }

    pub fn remove_person(&mut self, key: &Person) -> RmsResult<()> {
        traced("remove_person", self.persons.remove(key))
    }

    pub fn clear_persons(&mut self) {
        self.persons.clear();
        debug!("persons cleared");
    }

    /// Defensively copied snapshot of all persons at the time of the call
    pub fn get_all_persons(&self) -> UniqueCollection<Person> {
        self.persons.clone()
    }

    // ==================== Employees ====================

    pub fn add_employee(&mut self, employee: Employee) -> RmsResult<()> {
        traced("add_employee", self.employees.add(employee))
    }

    pub fn contains_employee(&self, key: &Employee) -> bool {
        self.employees.contains(key)
    }

    pub fn remove_employee(&mut self, key: &Employee) -> RmsResult<()> {
        traced("remove_employee", self.employees.remove(key))
    }

    /// Replace the employee equal to `old` with `new`, keeping its position
    pub fn edit_employee(&mut self, old: &Employee, new: Employee) -> RmsResult<()> {
        traced("edit_employee", self.employees.edit(old, new))
    }

    pub fn clear_employees(&mut self) {
        self.employees.clear();
        debug!("employees cleared");
    }

    /// Defensively copied snapshot of all employees at the time of the call
    pub fn get_all_employees(&self) -> UniqueCollection<Employee> {
        self.employees.clone()
    }

    // ==================== Members ====================

    pub fn add_member(&mut self, member: Member) -> RmsResult<()> {
        traced("add_member", self.members.add(member))
    }

    pub fn contains_member(&self, key: &Member) -> bool {
        self.members.contains(key)
    }

    pub fn remove_member(&mut self, key: &Member) -> RmsResult<()> {
        traced("remove_member", self.members.remove(key))
    }

    pub fn clear_members(&mut self) {
        self.members.clear();
        debug!("members cleared");
    }

    /// Defensively copied snapshot of all members at the time of the call
    pub fn get_all_members(&self) -> UniqueCollection<Member> {
        self.members.clone()
    }

    // ==================== Menu ====================

    pub fn add_menu_item(&mut self, item: MenuItem) -> RmsResult<()> {
        traced("add_menu_item", self.menu.add(item))
    }

    pub fn contains_menu_item(&self, key: &MenuItem) -> bool {
        self.menu.contains(key)
    }

    pub fn remove_menu_item(&mut self, key: &MenuItem) -> RmsResult<()> {
        traced("remove_menu_item", self.menu.remove(key))
    }

    pub fn clear_menu(&mut self) {
        self.menu.clear();
        debug!("menu cleared");
    }

    /// Defensively copied snapshot of the menu at the time of the call
    pub fn get_all_menu_items(&self) -> UniqueCollection<MenuItem> {
        self.menu.clone()
    }

    // ==================== Orders ====================

    /// Append a committed order.
    ///
    /// The store does not verify that the order's dishes exist in the menu;
    /// referential integrity is a command-layer concern.
    pub fn add_order(&mut self, order: Order) -> RmsResult<()> {
        traced("add_order", self.orders.add(order))
    }

    pub fn contains_order(&self, key: &Order) -> bool {
        self.orders.contains(key)
    }

    pub fn remove_order(&mut self, key: &Order) -> RmsResult<()> {
        traced("remove_order", self.orders.remove(key))
    }

    pub fn clear_orders(&mut self) {
        self.orders.clear();
        debug!("orders cleared");
    }

    /// Defensively copied snapshot of all orders at the time of the call
    pub fn get_all_orders(&self) -> UniqueCollection<Order> {
        self.orders.clone()
    }

    // ==================== Attendance ====================

    pub fn add_attendance(&mut self, attendance: Attendance) -> RmsResult<()> {
        traced("add_attendance", self.attendances.add(attendance))
    }

    pub fn remove_attendance(&mut self, key: &Attendance) -> RmsResult<()> {
        traced("remove_attendance", self.attendances.remove(key))
    }

    /// Position of the record for `employee_name`, or `None` when absent
    pub fn find_attendance_index(&self, employee_name: &str) -> Option<usize> {
        self.attendances.index_of(employee_name)
    }

    /// Record at `index`; fails with `NotFound` when out of range
    pub fn find_attendance(&self, index: usize) -> RmsResult<&Attendance> {
        self.attendances.get_at(index)
    }

    /// Replace the record equal to `old` with `new`, keeping its position
    pub fn update_attendance(&mut self, old: &Attendance, new: Attendance) -> RmsResult<()> {
        traced("update_attendance", self.attendances.edit(old, new))
    }

    /// Defensively copied snapshot of all attendance records
    pub fn get_all_attendances(&self) -> UniqueCollection<Attendance> {
        self.attendances.clone()
    }

    // ==================== Draft order ====================

    /// Read-only view of the in-progress order
    pub fn draft_order(&self) -> &DraftOrder {
        &self.draft_order
    }

    /// Replace the draft's customer
    pub fn edit_draft_order_customer(&mut self, customer: Member) {
        self.draft_order.set_customer(customer);
        debug!("draft order customer set");
    }

    /// Adjust a dish quantity in the draft: negative is rejected, zero
    /// removes the line, positive sets the absolute quantity.
    pub fn edit_draft_order_dish_item(&mut self, dish: &MenuItem, quantity: i32) -> RmsResult<()> {
        traced(
            "edit_draft_order_dish_item",
            self.draft_order.set_dish_quantity(dish, quantity),
        )
    }

    /// Replace the draft with a fresh empty one.
    ///
    /// Replacement, not in-place mutation: snapshots taken earlier keep
    /// observing the old content.
    pub fn clear_draft_order(&mut self) {
        self.draft_order = DraftOrder::new();
        debug!("draft order cleared");
    }

    /// Commit the draft: snapshot it into an [`Order`], append it to the
    /// order list, and replace the draft with a fresh one.
    pub fn commit_draft_order(&mut self) -> RmsResult<Order> {
        let order = self
            .draft_order
            .snapshot()
            .inspect_err(|err| warn!(error = %err, "draft order commit rejected"))?;
        traced("commit_draft_order", self.orders.add(order.clone()))?;
        self.draft_order = DraftOrder::new();
        debug!(
            customer = %order.customer.name,
            price = %order.price,
            dishes = order.dish_items.len(),
            "draft order committed"
        );
        Ok(order)
    }
}

/// Two stores compare equal iff their person collections compare equal.
/// Kept exactly as the historical behavior; see DESIGN.md.
impl PartialEq for Rms {
    fn eq(&self, other: &Self) -> bool {
        self.persons == other.persons
    }
}
