//! Then steps for table assignment BDD scenarios.

use super::world::{SeatingWorld, run_async};
use maitre::table_assignment::{domain::TableStatus, ports::TableStore};
use rstest_bdd_macros::then;

#[then(r#"table "{name}" is recommended with score {score:u32}"#)]
fn table_recommended(world: &SeatingWorld, name: String, score: u32) -> Result<(), eyre::Report> {
    let recommendation = world.recommendation()?;
    let recommended = recommendation
        .recommended()
        .ok_or_else(|| eyre::eyre!("expected '{name}' to be recommended, got no table"))?;
    if recommended.table().name() != name || recommended.score() != score {
        return Err(eyre::eyre!(
            "expected '{name}' with score {score}, got '{}' with score {}",
            recommended.table().name(),
            recommended.score()
        ));
    }
    Ok(())
}

#[then(r#"table "{name}" is an alternative with score {score:u32}"#)]
fn table_is_alternative(
    world: &SeatingWorld,
    name: String,
    score: u32,
) -> Result<(), eyre::Report> {
    let recommendation = world.recommendation()?;
    let found = recommendation
        .alternatives()
        .iter()
        .any(|candidate| candidate.table().name() == name && candidate.score() == score);
    if !found {
        return Err(eyre::eyre!(
            "expected alternative '{name}' with score {score}"
        ));
    }
    Ok(())
}

#[then("no table is available")]
fn no_table_available(world: &SeatingWorld) -> Result<(), eyre::Report> {
    let recommendation = world.recommendation()?;
    if !recommendation.is_empty() {
        return Err(eyre::eyre!(
            "expected no table, got {:?}",
            recommendation.recommended()
        ));
    }
    Ok(())
}

#[then("exactly one assignment succeeds")]
fn exactly_one_succeeds(world: &SeatingWorld) -> Result<(), eyre::Report> {
    let successes = world
        .assignment_results
        .iter()
        .filter(|result| result.is_ok())
        .count();
    if successes != 1 {
        return Err(eyre::eyre!("expected one success, found {successes}"));
    }
    Ok(())
}

#[then("the other assignment reports a conflict")]
fn other_conflicts(world: &SeatingWorld) -> Result<(), eyre::Report> {
    let conflicts = world
        .assignment_results
        .iter()
        .filter(|result| matches!(result, Err(err) if err.is_conflict()))
        .count();
    if conflicts != 1 {
        return Err(eyre::eyre!(
            "expected one conflict, got {:?}",
            world.assignment_results
        ));
    }
    Ok(())
}

#[then(r#"table "{name}" is reserved"#)]
fn table_is_reserved(world: &mut SeatingWorld, name: String) -> Result<(), eyre::Report> {
    let table_id = world.pending_table_mut(&name)?.id();
    let stored = run_async(world.tables.find_by_id(table_id))
        .map_err(|err| eyre::eyre!("table lookup failed: {err}"))?
        .ok_or_else(|| eyre::eyre!("table '{name}' missing from store"))?;
    if stored.status() != TableStatus::Reserved {
        return Err(eyre::eyre!(
            "expected '{name}' to be reserved, found {}",
            stored.status()
        ));
    }
    Ok(())
}
