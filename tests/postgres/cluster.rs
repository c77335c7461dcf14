//! Database lifecycle helpers on the shared embedded `PostgreSQL` cluster.
//!
//! Each test clones a fresh database from a template that already carries
//! the seating relations, and drops it again when its guard goes out of
//! scope.

use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use pg_embedded_setup_unpriv::TestCluster;

pub use pg_embedded_setup_unpriv::test_support::shared_test_cluster;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// SQL creating the `dining_tables` and `reservations` relations.
pub const SEATING_SCHEMA_SQL: &str = include_str!("seating_schema.sql");

/// Template database name for the pre-built schema.
pub const TEMPLATE_DB: &str = "maitre_test_template";

/// Ensures the template database exists with the seating schema applied.
///
/// # Errors
///
/// Returns an error if template creation or schema setup fails.
pub fn ensure_template(cluster: &TestCluster) -> Result<(), BoxError> {
    cluster
        .ensure_template_exists(TEMPLATE_DB, |db_name| {
            let url = cluster.connection().database_url(db_name);
            let mut conn = PgConnection::establish(&url).map_err(|e| eyre::eyre!("{e}"))?;
            conn.batch_execute(SEATING_SCHEMA_SQL)
                .map_err(|e| eyre::eyre!("SQL error: {e}"))?;
            Ok(())
        })
        .map_err(|e| Box::new(e) as BoxError)?;
    Ok(())
}

/// Opens a direct connection to one test database.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub fn connect(cluster: &TestCluster, db_name: &str) -> Result<PgConnection, BoxError> {
    let url = cluster.connection().database_url(db_name);
    PgConnection::establish(&url).map_err(|e| Box::new(e) as BoxError)
}

/// Guard that drops a test database even if the test panics.
pub struct CleanupGuard<'a> {
    cluster: &'a TestCluster,
    db_name: String,
}

impl<'a> CleanupGuard<'a> {
    /// Clones the template into `db_name` and guards the new database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be created.
    pub fn create(cluster: &'a TestCluster, db_name: String) -> Result<Self, BoxError> {
        cluster
            .create_database_from_template(db_name.as_str(), TEMPLATE_DB)
            .map_err(|e| Box::new(e) as BoxError)?;
        Ok(Self { cluster, db_name })
    }

    /// Returns the guarded database name.
    pub fn db_name(&self) -> &str {
        &self.db_name
    }
}

impl Drop for CleanupGuard<'_> {
    #[expect(
        clippy::print_stderr,
        reason = "Test cleanup warnings are informational"
    )]
    fn drop(&mut self) {
        if let Err(e) = self.cluster.drop_database(self.db_name.as_str()) {
            eprintln!(
                "Warning: failed to drop test database {}: {e}",
                self.db_name
            );
        }
    }
}
