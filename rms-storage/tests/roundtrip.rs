//! Storage contract tests
//!
//! Round-trips a committed store through adapt → serialize → parse →
//! rebuild and checks the rehydration behavior of order customers.

use rms_core::Rms;
use rms_core::models::{
    Attendance, Employee, ItemType, Member, MenuItem, Person, Points, Price,
};
use rms_storage::{AdaptedRms, load_rms, save_rms};
use rust_decimal::dec;

fn fries() -> MenuItem {
    MenuItem::new("Fries", Price::new(dec!(3.0)).unwrap(), ItemType::Sides)
}

fn cola() -> MenuItem {
    MenuItem::new("Cola", Price::new(dec!(2.0)).unwrap(), ItemType::Beverage)
}

fn mia() -> Member {
    Member::new("Mia", "mia@rms.test", "gold", Points::new(120).unwrap())
}

fn populated_store() -> Rms {
    let mut rms = Rms::new();
    rms.add_person(
        Person::new("Pat", "90000000", "pat@rms.test", "2 Side St").with_tags(["regular"]),
    )
    .unwrap();
    rms.add_employee(Employee::new(
        "Alice", "91234567", "alice@rms.test", "1 Main St", "cook",
    ))
    .unwrap();
    rms.add_member(mia()).unwrap();
    rms.add_menu_item(fries()).unwrap();
    rms.add_menu_item(cola()).unwrap();

    let mut attendance = Attendance::new("Alice");
    attendance.clock_in(1_000).unwrap();
    attendance.clock_out(2_000).unwrap();
    rms.add_attendance(attendance).unwrap();

    rms.edit_draft_order_customer(mia());
    rms.edit_draft_order_dish_item(&fries(), 2).unwrap();
    rms.edit_draft_order_dish_item(&cola(), 1).unwrap();
    rms.commit_draft_order().unwrap();
    rms
}

#[test]
fn xml_round_trip_yields_equal_store() {
    let rms = populated_store();
    let xml = save_rms(&rms).unwrap();
    let rebuilt = load_rms(&xml).unwrap();

    // Store equality is defined over persons; the rest is checked per
    // collection so a regression in any adapter shows up here.
    assert_eq!(rebuilt, rms);
    assert_eq!(rebuilt.get_all_employees(), rms.get_all_employees());
    assert_eq!(rebuilt.get_all_members(), rms.get_all_members());
    assert_eq!(rebuilt.get_all_menu_items(), rms.get_all_menu_items());
    assert_eq!(rebuilt.get_all_orders(), rms.get_all_orders());
    assert_eq!(rebuilt.get_all_attendances(), rms.get_all_attendances());
}

#[test]
fn order_customer_is_rehydrated_from_member_list() {
    let rms = populated_store();
    let xml = save_rms(&rms).unwrap();
    let rebuilt = load_rms(&xml).unwrap();

    let orders = rebuilt.get_all_orders();
    let order = orders.get_at(0).unwrap();
    let members = rebuilt.get_all_members();
    assert_eq!(&order.customer, members.get_at(0).unwrap());
}

#[test]
fn order_customer_is_fabricated_without_member_list() {
    let rms = populated_store();
    let mut adapted = AdaptedRms::from_model(&rms);
    adapted.members.clear();

    let rebuilt = adapted.to_model().unwrap();
    assert!(rebuilt.get_all_members().is_empty());
    let orders = rebuilt.get_all_orders();
    assert_eq!(orders.get_at(0).unwrap().customer, mia());
}

#[test]
fn empty_store_round_trips() {
    let xml = save_rms(&Rms::new()).unwrap();
    let rebuilt = load_rms(&xml).unwrap();
    assert_eq!(rebuilt, Rms::new());
    assert!(rebuilt.get_all_orders().is_empty());
}

#[test]
fn malformed_document_is_a_parse_error() {
    assert!(load_rms("<rms><person><name>").is_err());
}

#[test]
fn bad_category_in_document_is_an_illegal_value() {
    let xml = "<rms><menu_item><name>Fries</name><price>3.0</price>\
               <type>drinks</type></menu_item></rms>";
    let err = load_rms(xml).unwrap_err();
    assert!(matches!(
        err,
        rms_storage::StorageError::Data(rms_core::RmsError::IllegalValue(_))
    ));
}
