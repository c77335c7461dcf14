//! Given steps for table assignment BDD scenarios.

use super::world::{SeatingWorld, build_reservation, build_table};
use eyre::WrapErr;
use maitre::table_assignment::domain::TableStatus;
use rstest_bdd_macros::given;

#[given(r#"an available table "{name}" seating {capacity:u32} guests"#)]
fn an_available_table(
    world: &mut SeatingWorld,
    name: String,
    capacity: u32,
) -> Result<(), eyre::Report> {
    let table = build_table(&name, capacity).wrap_err("build available table")?;
    world.pending_tables.push(table);
    Ok(())
}

#[given(r#"an occupied table "{name}" seating {capacity:u32} guests"#)]
fn an_occupied_table(
    world: &mut SeatingWorld,
    name: String,
    capacity: u32,
) -> Result<(), eyre::Report> {
    let table = build_table(&name, capacity)
        .wrap_err("build occupied table")?
        .with_status(TableStatus::Occupied);
    world.pending_tables.push(table);
    Ok(())
}

#[given(r#"table "{name}" is in zone "{zone}""#)]
fn table_in_zone(world: &mut SeatingWorld, name: String, zone: String) -> Result<(), eyre::Report> {
    let table = world.pending_table_mut(&name)?;
    *table = table.clone().with_zone(zone);
    Ok(())
}

#[given(r#"table "{name}" has feature "{feature}""#)]
fn table_has_feature(
    world: &mut SeatingWorld,
    name: String,
    feature: String,
) -> Result<(), eyre::Report> {
    let table = world.pending_table_mut(&name)?;
    let mut features: Vec<String> = table.features().iter().cloned().collect();
    features.push(feature);
    *table = table.clone().with_features(features);
    Ok(())
}

#[given("two reservations for {size:i64} guests")]
fn two_reservations(world: &mut SeatingWorld, size: i64) -> Result<(), eyre::Report> {
    for _ in 0..2 {
        let reservation = build_reservation(size).wrap_err("build reservation")?;
        world.reservation_ids.push(reservation.id());
        world
            .reservations
            .insert(reservation)
            .map_err(|err| eyre::eyre!("insert reservation failed: {err}"))?;
    }
    Ok(())
}
