// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Opening `SQLite` connections and the few things Diesel has no DSL for.

use diesel::dsl::sql;
use diesel::prelude::*;
use diesel::sql_types::{BigInt, Integer};
use diesel::{Connection, RunQueryDsl, SqliteConnection};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tracing::{debug, info};

use crate::error::PersistenceError;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Milliseconds a writer waits on a locked file database before failing.
const BUSY_TIMEOUT_MS: u32 = 5_000;

/// Where a store keeps its data.
#[derive(Debug, Clone, Copy)]
pub enum Location<'a> {
    /// A private shared-cache memory database, distinguished by number.
    Memory(u64),
    /// A database file on disk.
    File(&'a str),
}

impl Location<'_> {
    fn url(&self) -> String {
        match self {
            Self::Memory(id) => format!("file:memdb_platemart_{id}?mode=memory&cache=shared"),
            Self::File(path) => (*path).to_string(),
        }
    }

    /// Connection settings; journal and lock settings only matter for files.
    fn pragmas(&self) -> Vec<String> {
        let mut pragmas: Vec<String> = vec![String::from("PRAGMA foreign_keys = ON")];
        if matches!(self, Self::File(_)) {
            pragmas.push(String::from("PRAGMA journal_mode = WAL"));
            pragmas.push(format!("PRAGMA busy_timeout = {BUSY_TIMEOUT_MS}"));
        }
        pragmas
    }
}

#[derive(QueryableByName)]
struct ForeignKeysPragma {
    #[diesel(sql_type = Integer)]
    foreign_keys: i32,
}

/// Opens `location`, applies connection settings and runs pending migrations.
///
/// # Errors
///
/// Returns an error if the connection, a setting or a migration fails, or if
/// `SQLite` refuses to enforce foreign keys. Lots reference sellers, so a
/// connection without enforcement is rejected.
pub fn open(location: Location<'_>) -> Result<SqliteConnection, PersistenceError> {
    let url: String = location.url();
    info!(database_url = %url, "Opening SQLite database");

    let mut conn: SqliteConnection = SqliteConnection::establish(&url)?;

    for pragma in location.pragmas() {
        debug!(%pragma, "Applying connection setting");
        diesel::sql_query(&pragma)
            .execute(&mut conn)
            .map_err(|e| PersistenceError::QueryFailed(format!("{pragma}: {e}")))?;
    }

    let applied: Vec<String> = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| PersistenceError::MigrationFailed(e.to_string()))?
        .iter()
        .map(ToString::to_string)
        .collect();
    if !applied.is_empty() {
        info!(migrations = ?applied, "Applied migrations");
    }

    let enforced: ForeignKeysPragma =
        diesel::sql_query("PRAGMA foreign_keys").get_result(&mut conn)?;
    if enforced.foreign_keys == 0 {
        return Err(PersistenceError::ForeignKeyEnforcementNotEnabled);
    }

    Ok(conn)
}

/// Returns the row ID assigned by the last `INSERT` on this connection.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn last_insert_rowid(conn: &mut SqliteConnection) -> Result<i64, PersistenceError> {
    Ok(diesel::select(sql::<BigInt>("last_insert_rowid()")).get_result(conn)?)
}

/// Timestamps are stored as RFC 3339 text.
///
/// # Errors
///
/// Returns an error if the timestamp cannot be represented.
pub fn format_timestamp(timestamp: OffsetDateTime) -> Result<String, PersistenceError> {
    timestamp
        .format(&Rfc3339)
        .map_err(|e| PersistenceError::SerializationError(e.to_string()))
}

/// Parses a timestamp written by [`format_timestamp`].
///
/// # Errors
///
/// Returns an error if the stored text is not RFC 3339.
pub fn parse_timestamp(text: &str) -> Result<OffsetDateTime, PersistenceError> {
    OffsetDateTime::parse(text, &Rfc3339).map_err(|e| {
        PersistenceError::SerializationError(format!("invalid timestamp '{text}': {e}"))
    })
}
