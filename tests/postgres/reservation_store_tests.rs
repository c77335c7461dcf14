//! `PostgreSQL` tests for reservation lookup, table linking and the
//! assignment saga running on both stores.

use crate::postgres::helpers::{SeatingDb, now, seating_db, table, test_runtime};
use maitre::table_assignment::{
    domain::{ReservationId, TableStatus},
    ports::{ReservationStore, ReservationStoreError},
    services::TableAssignmentService,
};
use mockable::DefaultClock;
use rstest::rstest;
use std::sync::Arc;

#[rstest]
fn attach_then_detach_round_trips_the_link(seating_db: SeatingDb) {
    let table_id = seating_db.insert_table(&table("T4", 4));
    let reservation_id = seating_db.insert_reservation(4);
    let rt = test_runtime();

    rt.block_on(
        seating_db
            .reservations
            .attach_table(reservation_id, table_id, now()),
    )
    .expect("attach should succeed");
    let linked = rt
        .block_on(seating_db.reservations.find_by_id(reservation_id))
        .expect("lookup should succeed")
        .expect("reservation should exist");
    assert_eq!(linked.table_id(), Some(table_id));
    assert_eq!(linked.party_size().value(), 4);

    rt.block_on(seating_db.reservations.detach_table(reservation_id, now()))
        .expect("detach should succeed");
    assert_eq!(seating_db.stored_link(reservation_id), None);
}

#[rstest]
fn linking_a_missing_reservation_is_not_found(seating_db: SeatingDb) {
    let table_id = seating_db.insert_table(&table("T4", 4));
    let missing = ReservationId::new();
    let rt = test_runtime();

    let attached = rt.block_on(seating_db.reservations.attach_table(missing, table_id, now()));
    let detached = rt.block_on(seating_db.reservations.detach_table(missing, now()));

    assert!(matches!(attached, Err(ReservationStoreError::NotFound(id)) if id == missing));
    assert!(matches!(detached, Err(ReservationStoreError::NotFound(id)) if id == missing));
}

#[rstest]
fn unknown_reservation_lookup_returns_none(seating_db: SeatingDb) {
    let rt = test_runtime();

    let found = rt
        .block_on(seating_db.reservations.find_by_id(ReservationId::new()))
        .expect("lookup should succeed");

    assert!(found.is_none());
}

#[rstest]
fn second_assignment_of_a_table_is_partial_and_compensated(seating_db: SeatingDb) {
    let table_id = seating_db.insert_table(&table("T4", 4));
    let early = seating_db.insert_reservation(4);
    let late = seating_db.insert_reservation(4);
    let service = TableAssignmentService::new(
        Arc::new(seating_db.tables.clone()),
        Arc::new(seating_db.reservations.clone()),
        Arc::new(DefaultClock),
    );
    let rt = test_runtime();

    rt.block_on(service.assign(early, table_id))
        .expect("first assignment should succeed");
    let lost = rt.block_on(service.assign(late, table_id));

    assert!(matches!(&lost, Err(err) if err.is_conflict()));
    assert_eq!(seating_db.stored_link(late), Some(table_id.into_inner()));

    rt.block_on(service.compensate(late))
        .expect("compensation should succeed");

    assert_eq!(seating_db.stored_link(late), None);
    assert_eq!(seating_db.stored_link(early), Some(table_id.into_inner()));
    assert_eq!(
        seating_db.stored_status(table_id),
        TableStatus::Reserved.as_str()
    );
}
