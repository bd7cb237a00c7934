//! Environment/runtime helpers

/// Whether database-backed tests should be skipped in this process.
pub fn skip_db_tests() -> bool {
    std::env::var("SKIP_DB_TESTS").is_ok() || std::env::var("DATABASE_URL").is_err()
}
