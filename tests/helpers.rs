// Shared test helpers for building fixture range databases.
//
// Every fixture is a real SQLite file in a temporary directory, so the service
// opens it read-only exactly as it would in production.

use std::path::{Path, PathBuf};

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;
use tempfile::TempDir;

use geoip_resolver::storage::create_schema;

/// A fixture database. The file is removed when this is dropped.
pub struct Fixture {
    _dir: TempDir,
    pub path: PathBuf,
}

/// Creates an empty database with every range table.
#[allow(dead_code)] // Used by other test files
pub async fn create_empty_fixture() -> (Fixture, SqlitePool) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("geoip.db");
    let pool = open_writable(&path).await;
    create_schema(&pool).await.expect("Failed to create schema");
    (Fixture { _dir: dir, path }, pool)
}

/// Creates the standard fixture:
/// - `1.2.3.0/24` city block (Mountain View, US) inside a `1.2.0.0/16` ASN block
/// - `8.0.0.0/8` country block (US) with a `8.8.8.0/24` ASN block
/// - `2a00:1450::/32` IPv6 country block (GB)
/// - `2001:db8::/32` IPv6 ASN block with no location
///
/// Location text exists for `en`, and for `de` on the city only.
#[allow(dead_code)] // Used by other test files
pub async fn create_standard_fixture() -> Fixture {
    let (fixture, pool) = create_empty_fixture().await;

    exec(
        &pool,
        "INSERT INTO city_blocks (network, prefix_length, ip_version, network_start, network_end,
             geoname_id, registered_country_geoname_id, represented_country_geoname_id,
             is_anonymous_proxy, is_satellite_provider, is_anycast,
             postal_code, latitude, longitude, accuracy_radius)
         VALUES ('1.2.3.0/24', 24, 4, 16909056, 16909311,
             5375480, 6252001, NULL, 0, 0, NULL, '94043', 37.386, -122.0838, 1000)",
    )
    .await;
    exec(
        &pool,
        "INSERT INTO city_locations (geoname_id, locale_code, continent_code, continent_name,
             country_iso_code, country_name, subdivision_1_iso_code, subdivision_1_name,
             subdivision_2_iso_code, subdivision_2_name, city_name, metro_code, time_zone,
             is_in_european_union)
         VALUES (5375480, 'en', 'NA', 'North America', 'US', 'United States', 'CA', 'California',
             NULL, NULL, 'Mountain View', '807', 'America/Los_Angeles', 0),
                (5375480, 'de', 'NA', 'Nordamerika', 'US', 'Vereinigte Staaten', 'CA', 'Kalifornien',
             NULL, NULL, 'Mountain View', '807', 'America/Los_Angeles', 0)",
    )
    .await;
    exec(
        &pool,
        "INSERT INTO country_blocks (network, prefix_length, ip_version, network_start, network_end,
             geoname_id, registered_country_geoname_id, represented_country_geoname_id,
             is_anonymous_proxy, is_satellite_provider, is_anycast)
         VALUES ('8.0.0.0/8', 8, 4, 134217728, 150994943, 6252001, 6252001, NULL, 0, 0, NULL),
                ('2a00:1450::/32', 32, 6, 3026441283422912512, 3026441287717879807,
             2635167, 2635167, NULL, 0, 0, NULL)",
    )
    .await;
    exec(
        &pool,
        "INSERT INTO country_locations (geoname_id, locale_code, continent_code, continent_name,
             country_iso_code, country_name, is_in_european_union)
         VALUES (6252001, 'en', 'NA', 'North America', 'US', 'United States', 0),
                (2635167, 'en', 'EU', 'Europe', 'GB', 'United Kingdom', 0)",
    )
    .await;
    exec(
        &pool,
        "INSERT INTO asn_blocks (network, prefix_length, ip_version, network_start, network_end,
             autonomous_system_number, autonomous_system_organization)
         VALUES ('1.2.0.0/16', 16, 4, 16908288, 16973823, 13335, 'CLOUDFLARENET'),
                ('8.8.8.0/24', 24, 4, 134744064, 134744319, 15169, 'GOOGLE'),
                ('2001:db8::/32', 32, 6, 2306139568115548160, 2306139572410515455, 64496, 'DOCUMENTATION')",
    )
    .await;

    pool.close().await;
    fixture
}

/// Drops `table` from a closed fixture, simulating a damaged database.
#[allow(dead_code)] // Used by other test files
pub async fn drop_table(fixture: &Fixture, table: &str) {
    let pool = open_writable(&fixture.path).await;
    exec(&pool, &format!("DROP TABLE {}", table)).await;
    pool.close().await;
}

async fn open_writable(path: &Path) -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Delete);
    SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("Failed to create fixture database")
}

async fn exec(pool: &SqlitePool, sql: &str) {
    sqlx::query(sql)
        .execute(pool)
        .await
        .expect("Failed to insert fixture rows");
}
