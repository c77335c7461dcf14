//! `PostgreSQL` tests for eligible listing and the conditional status write.

use crate::postgres::helpers::{
    SeatingDb, now, party, scope, seating_db, table, test_runtime,
};
use maitre::table_assignment::{
    domain::{PartySize, RestaurantScope, Table, TableId, TableStatus},
    ports::{TableStore, TableStoreError},
};
use mockable::DefaultClock;
use rstest::rstest;

#[rstest]
fn status_write_moves_available_table_to_reserved(seating_db: SeatingDb) {
    let id = seating_db.insert_table(&table("T4", 4));
    let rt = test_runtime();

    rt.block_on(seating_db.tables.set_table_status(
        id,
        TableStatus::Available,
        TableStatus::Reserved,
        now(),
    ))
    .expect("status write should succeed");

    assert_eq!(seating_db.stored_status(id), "reserved");
    let stored = rt
        .block_on(seating_db.tables.find_by_id(id))
        .expect("lookup should succeed")
        .expect("table should exist");
    assert_eq!(stored.status(), TableStatus::Reserved);
}

#[rstest]
fn second_status_write_reports_conflict_with_actual_status(seating_db: SeatingDb) {
    let id = seating_db.insert_table(&table("T4", 4));
    let rt = test_runtime();
    rt.block_on(seating_db.tables.set_table_status(
        id,
        TableStatus::Available,
        TableStatus::Reserved,
        now(),
    ))
    .expect("first write should succeed");

    let second = rt.block_on(seating_db.tables.set_table_status(
        id,
        TableStatus::Available,
        TableStatus::Reserved,
        now(),
    ));

    assert!(matches!(
        second,
        Err(TableStoreError::Conflict {
            table_id,
            expected: TableStatus::Available,
            actual: TableStatus::Reserved,
        }) if table_id == id
    ));
}

#[rstest]
fn status_write_from_wrong_status_leaves_row_untouched(seating_db: SeatingDb) {
    let id = seating_db.insert_table(&table("T4", 4).with_status(TableStatus::Occupied));
    let rt = test_runtime();

    let result = rt.block_on(seating_db.tables.set_table_status(
        id,
        TableStatus::Available,
        TableStatus::Reserved,
        now(),
    ));

    assert!(matches!(
        result,
        Err(TableStoreError::Conflict {
            actual: TableStatus::Occupied,
            ..
        })
    ));
    assert_eq!(seating_db.stored_status(id), "occupied");
}

#[rstest]
fn status_write_on_unknown_table_is_not_found(seating_db: SeatingDb) {
    let missing = TableId::new();
    let rt = test_runtime();

    let result = rt.block_on(seating_db.tables.set_table_status(
        missing,
        TableStatus::Available,
        TableStatus::Reserved,
        now(),
    ));

    assert!(matches!(result, Err(TableStoreError::NotFound(id)) if id == missing));
}

#[rstest]
fn racing_status_writes_let_exactly_one_win(seating_db: SeatingDb) {
    let id = seating_db.insert_table(&table("T4", 4));
    let rt = test_runtime();

    let (first, second) = rt.block_on(async {
        tokio::join!(
            seating_db.tables.set_table_status(
                id,
                TableStatus::Available,
                TableStatus::Reserved,
                now(),
            ),
            seating_db.tables.set_table_status(
                id,
                TableStatus::Available,
                TableStatus::Reserved,
                now(),
            ),
        )
    });

    let winners = [&first, &second].iter().filter(|result| result.is_ok()).count();
    assert_eq!(winners, 1);
    assert!(
        [first, second]
            .into_iter()
            .any(|result| matches!(result, Err(TableStoreError::Conflict { .. })))
    );
    assert_eq!(seating_db.stored_status(id), "reserved");
}

#[rstest]
fn eligible_listing_filters_and_orders_by_capacity(seating_db: SeatingDb) {
    seating_db.insert_table(&table("T8", 8));
    seating_db.insert_table(&table("T4", 4));
    seating_db.insert_table(&table("T6", 6));
    seating_db.insert_table(&table("small", 2));
    seating_db.insert_table(&table("busy", 5).with_status(TableStatus::Occupied));
    seating_db.insert_table(&table("closed", 5).deactivated());
    let elsewhere = RestaurantScope::new("diner-7").expect("valid scope");
    seating_db.insert_table(&Table::new(elsewhere, "X4", 4, &DefaultClock).expect("valid table"));
    let rt = test_runtime();

    let listed = rt
        .block_on(seating_db.tables.list_eligible_tables(&scope(), party(4)))
        .expect("listing should succeed");

    let names: Vec<&str> = listed.iter().map(|t| t.name()).collect();
    assert_eq!(names, vec!["T4", "T6", "T8"]);
}

#[rstest]
fn party_beyond_stored_range_lists_nothing(seating_db: SeatingDb) {
    seating_db.insert_table(&table("T4", 4));
    let huge = PartySize::new(i64::from(u32::MAX)).expect("valid party size");
    let rt = test_runtime();

    let listed = rt
        .block_on(seating_db.tables.list_eligible_tables(&scope(), huge))
        .expect("listing should succeed");

    assert!(listed.is_empty());
}

#[rstest]
fn padded_zone_is_trimmed_on_load(seating_db: SeatingDb) {
    let id = seating_db.insert_table(&table("T4", 4));
    seating_db.store_raw_zone(id, "VIP ");
    let rt = test_runtime();

    let stored = rt
        .block_on(seating_db.tables.find_by_id(id))
        .expect("lookup should succeed")
        .expect("table should exist");

    assert_eq!(stored.zone(), Some("VIP"));
}

#[rstest]
fn zero_capacity_row_is_invalid_persisted_data(seating_db: SeatingDb) {
    let id = seating_db.insert_table(&table("T4", 4));
    seating_db.store_raw_capacity(id, 0);
    let rt = test_runtime();

    let result = rt.block_on(seating_db.tables.find_by_id(id));

    assert!(matches!(result, Err(TableStoreError::InvalidPersistedData(_))));
}
