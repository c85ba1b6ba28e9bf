//! Insertion-ordered collection with natural-key uniqueness
//!
//! One generic implementation backs every entity kind in the store. The
//! backing store is a plain `Vec`; duplicate checks are linear scans, which
//! is fine at restaurant-roster cardinalities. No hashing acceleration.

use crate::error::{EntityKind, RmsError, RmsResult};

/// An entity whose natural key defines uniqueness within a collection.
///
/// `same_key` compares only the natural key; full-state equality stays on
/// `PartialEq`. The two must agree in the sense that a read-only key built
/// from an entity's getters locates that entity.
pub trait UniqueEntity: Clone {
    /// Kind tag carried by duplicate/not-found failures.
    const KIND: EntityKind;

    /// Natural-key equality.
    fn same_key(&self, other: &Self) -> bool;
}

/// An entity whose whole natural key has a string form, making it
/// addressable by [`UniqueCollection::index_of`]. Entities with compound
/// or full-state keys deliberately do not implement this.
pub trait KeyIndexed: UniqueEntity {
    /// The string form of the natural key.
    fn key_string(&self) -> &str;
}

/// Insertion-ordered collection rejecting natural-key duplicates.
///
/// `Clone` is the defensive copy: entities own all their data, so a clone
/// shares no mutable state with the source. Persistence goes through the
/// adapted forms, never through the collection itself, so it has no
/// serialized representation that could bypass the uniqueness invariant.
#[derive(Debug, Clone, PartialEq)]
pub struct UniqueCollection<E> {
    items: Vec<E>,
}

impl<E: UniqueEntity> UniqueCollection<E> {
    /// Create an empty collection
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Build a collection from the given items, rejecting duplicates
    pub fn from_items(items: impl IntoIterator<Item = E>) -> RmsResult<Self> {
        let mut collection = Self::new();
        for item in items {
            collection.add(item)?;
        }
        Ok(collection)
    }

    /// Append `item`; fails with [`RmsError::Duplicate`] when an element
    /// with the same natural key already exists.
    pub fn add(&mut self, item: E) -> RmsResult<()> {
        if self.contains(&item) {
            return Err(RmsError::Duplicate(E::KIND));
        }
        self.items.push(item);
        Ok(())
    }

    /// True iff some element has the same natural key as `key`
    pub fn contains(&self, key: &E) -> bool {
        self.position(key).is_some()
    }

    /// Remove the element with the same natural key as `key`; fails with
    /// [`RmsError::NotFound`] when absent.
    pub fn remove(&mut self, key: &E) -> RmsResult<()> {
        match self.position(key) {
            Some(index) => {
                self.items.remove(index);
                Ok(())
            }
            None => Err(RmsError::NotFound(E::KIND)),
        }
    }

    /// Replace the element equal to `old` with `new` at the same position.
    ///
    /// Fails with [`RmsError::NotFound`] when `old` is absent, and with
    /// [`RmsError::Duplicate`] when `new` collides with a *different*
    /// existing element. Replacing an element with a same-key variant of
    /// itself is allowed.
    pub fn edit(&mut self, old: &E, new: E) -> RmsResult<()> {
        let index = self.position(old).ok_or(RmsError::NotFound(E::KIND))?;
        let collision = self
            .items
            .iter()
            .enumerate()
            .any(|(i, item)| i != index && item.same_key(&new));
        if collision {
            return Err(RmsError::Duplicate(E::KIND));
        }
        self.items[index] = new;
        Ok(())
    }

    /// Remove every element
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Element at `index`; fails with [`RmsError::NotFound`] when out of range
    pub fn get_at(&self, index: usize) -> RmsResult<&E> {
        self.items.get(index).ok_or(RmsError::NotFound(E::KIND))
    }

    /// Iterate in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn position(&self, key: &E) -> Option<usize> {
        self.items.iter().position(|item| item.same_key(key))
    }
}

impl<E: KeyIndexed> UniqueCollection<E> {
    /// Position of the element whose key string matches `key`, or `None`
    pub fn index_of(&self, key: &str) -> Option<usize> {
        self.items.iter().position(|item| item.key_string() == key)
    }
}

impl<E: UniqueEntity> Default for UniqueCollection<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> IntoIterator for UniqueCollection<E> {
    type Item = E;
    type IntoIter = std::vec::IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, E> IntoIterator for &'a UniqueCollection<E> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Employee;

    fn employee(name: &str, phone: &str) -> Employee {
        Employee::new(name, phone, "e@rms.test", "1 Main St", "cook")
    }

    #[test]
    fn test_add_then_contains() {
        let mut list = UniqueCollection::new();
        let alice = employee("Alice", "91234567");
        list.add(alice.clone()).unwrap();
        assert!(list.contains(&alice));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_duplicate_add_rejected() {
        let mut list = UniqueCollection::new();
        list.add(employee("Alice", "91234567")).unwrap();
        // Same natural key, different position field.
        let mut twin = employee("Alice", "91234567");
        twin.position = "manager".to_string();
        let err = list.add(twin).unwrap_err();
        assert_eq!(err, RmsError::Duplicate(EntityKind::Employee));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_remove_absent_fails() {
        let mut list = UniqueCollection::new();
        list.add(employee("Alice", "91234567")).unwrap();
        let err = list.remove(&employee("Bob", "98765432")).unwrap_err();
        assert_eq!(err, RmsError::NotFound(EntityKind::Employee));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_iteration_order_is_insertion_order() {
        let mut list = UniqueCollection::new();
        for name in ["Alice", "Bob", "Carol", "Dave"] {
            list.add(employee(name, name)).unwrap();
        }
        list.remove(&employee("Bob", "Bob")).unwrap();
        let names: Vec<&str> = list.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Carol", "Dave"]);
    }

    #[test]
    fn test_edit_preserves_position() {
        let mut list = UniqueCollection::new();
        let a = employee("Alice", "1");
        let b = employee("Bob", "2");
        let c = employee("Carol", "3");
        for e in [&a, &b, &c] {
            list.add(e.clone()).unwrap();
        }
        let b2 = employee("Bob2", "2");
        list.edit(&b, b2.clone()).unwrap();
        let names: Vec<&str> = list.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Bob2", "Carol"]);
    }

    #[test]
    fn test_edit_to_existing_key_rejected() {
        let mut list = UniqueCollection::new();
        let a = employee("Alice", "1");
        let b = employee("Bob", "2");
        list.add(a.clone()).unwrap();
        list.add(b.clone()).unwrap();
        let err = list.edit(&a, employee("Bob", "2")).unwrap_err();
        assert_eq!(err, RmsError::Duplicate(EntityKind::Employee));
        // State unchanged.
        let names: Vec<&str> = list.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Bob"]);
    }

    #[test]
    fn test_edit_same_key_in_place_allowed() {
        let mut list = UniqueCollection::new();
        let a = employee("Alice", "1");
        list.add(a.clone()).unwrap();
        let mut promoted = a.clone();
        promoted.position = "manager".to_string();
        list.edit(&a, promoted).unwrap();
        assert_eq!(list.get_at(0).unwrap().position, "manager");
    }

    #[test]
    fn test_edit_absent_fails() {
        let mut list: UniqueCollection<Employee> = UniqueCollection::new();
        let err = list
            .edit(&employee("Ghost", "0"), employee("Ghost", "0"))
            .unwrap_err();
        assert_eq!(err, RmsError::NotFound(EntityKind::Employee));
    }

    #[test]
    fn test_index_of_matches_key_string() {
        use crate::models::Attendance;

        let mut list = UniqueCollection::new();
        list.add(Attendance::new("Alice")).unwrap();
        list.add(Attendance::new("Bob")).unwrap();
        assert_eq!(list.index_of("Bob"), Some(1));
        assert_eq!(list.index_of("Ghost"), None);
    }

    #[test]
    fn test_get_at() {
        let mut list = UniqueCollection::new();
        list.add(employee("Alice", "1")).unwrap();
        list.add(employee("Bob", "2")).unwrap();
        assert_eq!(list.get_at(1).unwrap().name, "Bob");
        assert_eq!(
            list.get_at(2).unwrap_err(),
            RmsError::NotFound(EntityKind::Employee)
        );
    }

    #[test]
    fn test_clone_is_defensive() {
        let mut list = UniqueCollection::new();
        list.add(employee("Alice", "1")).unwrap();
        let mut snapshot = list.clone();
        snapshot.add(employee("Bob", "2")).unwrap();
        assert_eq!(list.len(), 1);
        list.clear();
        assert_eq!(snapshot.len(), 2);
    }

    #[test]
    fn test_from_items_rejects_duplicates() {
        let items = vec![employee("Alice", "1"), employee("Alice", "1")];
        let err = UniqueCollection::from_items(items).unwrap_err();
        assert_eq!(err, RmsError::Duplicate(EntityKind::Employee));
    }
}
