//! Shared test helpers for storage module tests.
//!
//! This module provides common utilities for database setup and test data creation
//! used across storage and resolver tests.

#[cfg(test)]
use std::sync::Arc;

#[cfg(test)]
use sqlx::sqlite::SqlitePoolOptions;
#[cfg(test)]
use sqlx::SqlitePool;

#[cfg(test)]
use crate::address::normalize;
#[cfg(test)]
use crate::storage::{create_schema, SqliteStore};

/// Creates an in-memory database pool with no tables.
///
/// Limited to one connection that is never recycled: every in-memory connection
/// is a separate database.
#[cfg(test)]
pub async fn create_empty_pool() -> SqlitePool {
    SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create test database pool")
}

/// Creates an in-memory store with the schema applied.
#[cfg(test)]
pub async fn create_test_store() -> SqliteStore {
    let pool = create_empty_pool().await;
    create_schema(&pool)
        .await
        .expect("Failed to create schema");
    SqliteStore::new(Arc::new(pool))
}

/// A block row for `city_blocks` or `country_blocks`.
#[cfg(test)]
pub struct TestBlock {
    pub network: String,
    pub prefix_length: i64,
    pub ip_version: i64,
    pub network_start: i64,
    pub network_end: i64,
    pub geoname_id: Option<i64>,
}

#[cfg(test)]
impl TestBlock {
    /// Builds a block from a CIDR string and its first and last addresses.
    pub fn v4(cidr: &str, first: &str, last: &str, geoname_id: Option<i64>) -> Self {
        let prefix_length = cidr
            .rsplit('/')
            .next()
            .and_then(|p| p.parse().ok())
            .expect("CIDR should carry a prefix length");
        Self {
            network: cidr.to_string(),
            prefix_length,
            ip_version: 4,
            network_start: normalize(first).expect("valid first address").key,
            network_end: normalize(last).expect("valid last address").key,
            geoname_id,
        }
    }
}

/// Inserts a city block with fixed postal code, coordinates and traits.
#[cfg(test)]
pub async fn insert_city_block(pool: &SqlitePool, block: &TestBlock) {
    sqlx::query(
        "INSERT INTO city_blocks (
            network, prefix_length, ip_version, network_start, network_end, geoname_id,
            registered_country_geoname_id, represented_country_geoname_id,
            is_anonymous_proxy, is_satellite_provider, is_anycast,
            postal_code, latitude, longitude, accuracy_radius
        ) VALUES (?, ?, ?, ?, ?, ?, ?, NULL, 0, 0, 0, '00000', 37.386, -122.0838, 1000)",
    )
    .bind(&block.network)
    .bind(block.prefix_length)
    .bind(block.ip_version)
    .bind(block.network_start)
    .bind(block.network_end)
    .bind(block.geoname_id)
    .bind(block.geoname_id)
    .execute(pool)
    .await
    .expect("Failed to insert test city block");
}

/// Inserts a city location row with fixed continent, subdivision and time zone.
#[cfg(test)]
pub async fn insert_city_location(
    pool: &SqlitePool,
    geoname_id: i64,
    locale: &str,
    country_iso_code: Option<&str>,
    city_name: Option<&str>,
) {
    sqlx::query(
        "INSERT INTO city_locations (
            geoname_id, locale_code, continent_code, continent_name, country_iso_code,
            country_name, subdivision_1_iso_code, subdivision_1_name, city_name,
            metro_code, time_zone, is_in_european_union
        ) VALUES (?, ?, 'NA', 'North America', ?, 'Test Country', 'CA', 'California', ?,
                  '807', 'UTC', 0)",
    )
    .bind(geoname_id)
    .bind(locale)
    .bind(country_iso_code)
    .bind(city_name)
    .execute(pool)
    .await
    .expect("Failed to insert test city location");
}

#[cfg(test)]
pub async fn insert_country_block(pool: &SqlitePool, block: &TestBlock) {
    sqlx::query(
        "INSERT INTO country_blocks (
            network, prefix_length, ip_version, network_start, network_end, geoname_id,
            registered_country_geoname_id, represented_country_geoname_id,
            is_anonymous_proxy, is_satellite_provider, is_anycast
        ) VALUES (?, ?, ?, ?, ?, ?, ?, NULL, 0, 0, 0)",
    )
    .bind(&block.network)
    .bind(block.prefix_length)
    .bind(block.ip_version)
    .bind(block.network_start)
    .bind(block.network_end)
    .bind(block.geoname_id)
    .bind(block.geoname_id)
    .execute(pool)
    .await
    .expect("Failed to insert test country block");
}

#[cfg(test)]
pub async fn insert_country_location(
    pool: &SqlitePool,
    geoname_id: i64,
    locale: &str,
    country_iso_code: Option<&str>,
    country_name: Option<&str>,
) {
    sqlx::query(
        "INSERT INTO country_locations (
            geoname_id, locale_code, continent_code, continent_name, country_iso_code,
            country_name, is_in_european_union
        ) VALUES (?, ?, 'NA', 'North America', ?, ?, 0)",
    )
    .bind(geoname_id)
    .bind(locale)
    .bind(country_iso_code)
    .bind(country_name)
    .execute(pool)
    .await
    .expect("Failed to insert test country location");
}

#[cfg(test)]
#[allow(clippy::too_many_arguments)]
pub async fn insert_asn_block(
    pool: &SqlitePool,
    network: &str,
    prefix_length: i64,
    ip_version: i64,
    network_start: i64,
    network_end: i64,
    number: Option<i64>,
    organization: Option<&str>,
) {
    sqlx::query(
        "INSERT INTO asn_blocks (
            network, prefix_length, ip_version, network_start, network_end,
            autonomous_system_number, autonomous_system_organization
        ) VALUES (?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(network)
    .bind(prefix_length)
    .bind(ip_version)
    .bind(network_start)
    .bind(network_end)
    .bind(number)
    .bind(organization)
    .execute(pool)
    .await
    .expect("Failed to insert test ASN block");
}
