//! SQLite-backed profile service
//!
//! One row per user in `profiles`; the full profile is a JSON document.
//! Updates read the row, merge the diff and write it back inside a single
//! transaction.

#![allow(clippy::result_large_err)]

use std::path::Path;
use std::sync::{Mutex, MutexGuard};
use std::time::Instant;

use rusqlite::{Connection, OptionalExtension, Transaction};
use u25match_core::errors::{ExError, ExErrorKind, ProfileError};
use u25match_core::{log_op_end, log_op_error, log_op_start};
use u25match_core::{ProfileData, ProfileDiff, ProfileService};

use crate::db;
use crate::errors::{from_rusqlite, serialization, Result};
use crate::migrations::apply_migrations;

/// Profile service persisting to a local SQLite file
pub struct SqliteProfileService {
    conn: Mutex<Connection>,
}

impl SqliteProfileService {
    /// Open (or create) the database at `path` and bring its schema up to date.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_connection(db::open(path)?)
    }

    /// In-memory database, used by tests
    pub fn open_in_memory() -> Result<Self> {
        Self::from_connection(db::open_in_memory()?)
    }

    fn from_connection(mut conn: Connection) -> Result<Self> {
        db::configure(&conn)?;
        apply_migrations(&mut conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn lock(&self, op: &str) -> Result<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| {
            ExError::new(ExErrorKind::Concurrency)
                .with_op(op)
                .with_message("sqlite connection lock poisoned")
        })
    }

    /// Insert or replace the stored profile for `uid`.
    ///
    /// This is the seeding path; edits go through `update_profile`.
    pub fn insert_profile(&self, uid: &str, profile: &ProfileData) -> Result<()> {
        profile
            .validate_tags()
            .map_err(|e| ExError::from(e).with_op("insert_profile").with_uid(uid))?;
        let payload =
            serde_json::to_string(profile).map_err(|e| serialization("insert_profile", e))?;
        let now = chrono::Utc::now().timestamp_millis();

        let conn = self.lock("insert_profile")?;
        conn.execute(
            "INSERT INTO profiles (uid, payload_json, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?3)
             ON CONFLICT(uid) DO UPDATE SET
                payload_json = excluded.payload_json,
                updated_at = excluded.updated_at",
            rusqlite::params![uid, payload, now],
        )
        .map_err(from_rusqlite)?;
        Ok(())
    }

    fn update_in_tx(&self, uid: &str, diff: &ProfileDiff) -> Result<ProfileData> {
        let mut conn = self.lock("update_profile")?;
        let tx = conn.transaction().map_err(from_rusqlite)?;
        let mut profile = load_payload(&tx, uid, "update_profile")?;
        profile.apply_diff(diff);
        write_payload(&tx, uid, &profile)?;
        tx.commit().map_err(from_rusqlite)?;
        Ok(profile)
    }

    /// Milliseconds since epoch of the last write to `uid`, if stored
    pub fn updated_at(&self, uid: &str) -> Result<Option<i64>> {
        let conn = self.lock("updated_at")?;
        conn.query_row(
            "SELECT updated_at FROM profiles WHERE uid = ?1",
            [uid],
            |row| row.get(0),
        )
        .optional()
        .map_err(from_rusqlite)
    }

    /// Stored uids in ascending order
    pub fn list_uids(&self) -> Result<Vec<String>> {
        let conn = self.lock("list_uids")?;
        let mut stmt = conn
            .prepare("SELECT uid FROM profiles ORDER BY uid")
            .map_err(from_rusqlite)?;
        let uids = stmt
            .query_map([], |row| row.get(0))
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<String>, _>>()
            .map_err(from_rusqlite)?;
        Ok(uids)
    }
}

fn load_payload(conn: &Connection, uid: &str, op: &str) -> Result<ProfileData> {
    let payload: Option<String> = conn
        .query_row(
            "SELECT payload_json FROM profiles WHERE uid = ?1",
            [uid],
            |row| row.get(0),
        )
        .optional()
        .map_err(|e| from_rusqlite(e).with_op(op))?;

    let payload = payload.ok_or_else(|| {
        ExError::from(ProfileError::ProfileNotFound {
            uid: uid.to_string(),
        })
        .with_op(op)
    })?;

    serde_json::from_str(&payload).map_err(|e| serialization(op, e).with_uid(uid))
}

fn write_payload(tx: &Transaction, uid: &str, profile: &ProfileData) -> Result<()> {
    let payload =
        serde_json::to_string(profile).map_err(|e| serialization("update_profile", e))?;
    let now = chrono::Utc::now().timestamp_millis();
    tx.execute(
        "UPDATE profiles SET payload_json = ?1, updated_at = ?2 WHERE uid = ?3",
        rusqlite::params![payload, now, uid],
    )
    .map_err(from_rusqlite)?;
    Ok(())
}

impl ProfileService for SqliteProfileService {
    fn name(&self) -> &'static str {
        "sqlite"
    }

    fn fetch_profile(&self, uid: &str) -> Result<ProfileData> {
        let conn = self.lock("fetch_profile")?;
        load_payload(&conn, uid, "fetch_profile")
    }

    fn update_profile(&self, uid: &str, diff: &ProfileDiff) -> Result<ProfileData> {
        let started = Instant::now();
        log_op_start!("sqlite_update_profile", uid = uid);

        let result = self.update_in_tx(uid, diff);

        let duration_ms = started.elapsed().as_millis() as u64;
        match &result {
            Ok(_) => {
                log_op_end!("sqlite_update_profile", duration_ms = duration_ms, uid = uid);
            }
            Err(err) => {
                log_op_error!(
                    "sqlite_update_profile",
                    err.clone(),
                    duration_ms = duration_ms,
                    uid = uid
                );
            }
        }
        result
    }
}
