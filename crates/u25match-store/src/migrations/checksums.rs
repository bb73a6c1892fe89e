//! Migration checksums
//!
//! Recorded next to each applied migration so an edited migration file is
//! detected instead of silently skipped.

use sha2::{Digest, Sha256};

/// Hex-encoded SHA-256 of the migration SQL
pub fn compute_checksum(sql: &str) -> String {
    hex::encode(Sha256::digest(sql.as_bytes()))
}
