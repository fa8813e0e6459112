//! Range database schema.
//!
//! The service only reads these tables. `create_schema` exists for tooling and
//! tests that build fixture databases.

use sqlx::SqlitePool;

/// Tables the resolver reads.
pub const REQUIRED_TABLES: [&str; 5] = [
    "city_blocks",
    "city_locations",
    "country_blocks",
    "country_locations",
    "asn_blocks",
];

const SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS city_blocks (
        network TEXT NOT NULL,
        prefix_length INTEGER NOT NULL,
        ip_version INTEGER NOT NULL,
        network_start INTEGER NOT NULL,
        network_end INTEGER NOT NULL,
        geoname_id INTEGER,
        registered_country_geoname_id INTEGER,
        represented_country_geoname_id INTEGER,
        is_anonymous_proxy INTEGER,
        is_satellite_provider INTEGER,
        is_anycast INTEGER,
        postal_code TEXT,
        latitude REAL,
        longitude REAL,
        accuracy_radius INTEGER
    )",
    "CREATE INDEX IF NOT EXISTS idx_city_blocks_range
        ON city_blocks (ip_version, network_start, network_end)",
    "CREATE TABLE IF NOT EXISTS city_locations (
        geoname_id INTEGER NOT NULL,
        locale_code TEXT NOT NULL,
        continent_code TEXT,
        continent_name TEXT,
        country_iso_code TEXT,
        country_name TEXT,
        subdivision_1_iso_code TEXT,
        subdivision_1_name TEXT,
        subdivision_2_iso_code TEXT,
        subdivision_2_name TEXT,
        city_name TEXT,
        metro_code TEXT,
        time_zone TEXT,
        is_in_european_union INTEGER,
        PRIMARY KEY (geoname_id, locale_code)
    )",
    "CREATE TABLE IF NOT EXISTS country_blocks (
        network TEXT NOT NULL,
        prefix_length INTEGER NOT NULL,
        ip_version INTEGER NOT NULL,
        network_start INTEGER NOT NULL,
        network_end INTEGER NOT NULL,
        geoname_id INTEGER,
        registered_country_geoname_id INTEGER,
        represented_country_geoname_id INTEGER,
        is_anonymous_proxy INTEGER,
        is_satellite_provider INTEGER,
        is_anycast INTEGER
    )",
    "CREATE INDEX IF NOT EXISTS idx_country_blocks_range
        ON country_blocks (ip_version, network_start, network_end)",
    "CREATE TABLE IF NOT EXISTS country_locations (
        geoname_id INTEGER NOT NULL,
        locale_code TEXT NOT NULL,
        continent_code TEXT,
        continent_name TEXT,
        country_iso_code TEXT,
        country_name TEXT,
        is_in_european_union INTEGER,
        PRIMARY KEY (geoname_id, locale_code)
    )",
    "CREATE TABLE IF NOT EXISTS asn_blocks (
        network TEXT NOT NULL,
        prefix_length INTEGER NOT NULL,
        ip_version INTEGER NOT NULL,
        network_start INTEGER NOT NULL,
        network_end INTEGER NOT NULL,
        autonomous_system_number INTEGER,
        autonomous_system_organization TEXT
    )",
    "CREATE INDEX IF NOT EXISTS idx_asn_blocks_range
        ON asn_blocks (ip_version, network_start, network_end)",
];

/// Creates every table and range index. Idempotent.
pub async fn create_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for statement in SCHEMA {
        sqlx::query(statement).execute(pool).await?;
    }
    Ok(())
}

/// Returns the required tables absent from the database, in `REQUIRED_TABLES` order.
pub async fn missing_tables(pool: &SqlitePool) -> Result<Vec<&'static str>, sqlx::Error> {
    let existing: Vec<String> =
        sqlx::query_scalar("SELECT name FROM sqlite_master WHERE type = 'table'")
            .fetch_all(pool)
            .await?;
    Ok(REQUIRED_TABLES
        .into_iter()
        .filter(|table| !existing.iter().any(|name| name == table))
        .collect())
}
