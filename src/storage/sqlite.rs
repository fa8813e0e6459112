//! SQLite-backed range store.
//!
//! Each lookup is one indexed query: filter by version and interval
//! containment, order by prefix length descending, take the first row. The
//! locale text is a LEFT JOIN so a missing translation never drops the block.

use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use super::pool::DbPool;
use super::store::RangeStore;
use crate::address::NormalizedAddress;
use crate::error_handling::DatabaseError;
use crate::geoip::{
    AsnRecord, BlockTraits, Coordinates, LocationBlock, LocationRecord, LocationText,
    NetworkRange, Tier,
};

// Ties on prefix_length go to the lowest rowid (first inserted).
const CITY_QUERY: &str = "SELECT
        b.network, b.prefix_length, b.network_start, b.network_end, b.geoname_id,
        b.registered_country_geoname_id, b.represented_country_geoname_id,
        b.is_anonymous_proxy, b.is_satellite_provider, b.is_anycast,
        b.postal_code, b.latitude, b.longitude, b.accuracy_radius,
        l.continent_code, l.continent_name, l.country_iso_code, l.country_name,
        l.subdivision_1_iso_code, l.subdivision_1_name, l.subdivision_2_iso_code,
        l.subdivision_2_name, l.city_name, l.metro_code, l.time_zone,
        l.is_in_european_union
     FROM city_blocks b
     LEFT JOIN city_locations l ON l.geoname_id = b.geoname_id AND l.locale_code = ?
     WHERE b.ip_version = ? AND b.network_start <= ? AND b.network_end >= ?
     ORDER BY b.prefix_length DESC, b.rowid ASC
     LIMIT 1";

const COUNTRY_QUERY: &str = "SELECT
        b.network, b.prefix_length, b.network_start, b.network_end, b.geoname_id,
        b.registered_country_geoname_id, b.represented_country_geoname_id,
        b.is_anonymous_proxy, b.is_satellite_provider, b.is_anycast,
        l.continent_code, l.continent_name, l.country_iso_code, l.country_name,
        l.is_in_european_union
     FROM country_blocks b
     LEFT JOIN country_locations l ON l.geoname_id = b.geoname_id AND l.locale_code = ?
     WHERE b.ip_version = ? AND b.network_start <= ? AND b.network_end >= ?
     ORDER BY b.prefix_length DESC, b.rowid ASC
     LIMIT 1";

const ASN_QUERY: &str = "SELECT
        network, prefix_length, network_start, network_end,
        autonomous_system_number, autonomous_system_organization
     FROM asn_blocks
     WHERE ip_version = ? AND network_start <= ? AND network_end >= ?
     ORDER BY prefix_length DESC, rowid ASC
     LIMIT 1";

/// [`RangeStore`] over a read-only SQLite pool.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: DbPool,
}

impl SqliteStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

fn decode_network(row: &SqliteRow, addr: NormalizedAddress) -> Result<NetworkRange, sqlx::Error> {
    Ok(NetworkRange {
        cidr: row.try_get("network")?,
        prefix_length: row.try_get("prefix_length")?,
        version: addr.version,
        start: row.try_get("network_start")?,
        end: row.try_get("network_end")?,
    })
}

fn decode_location(
    row: &SqliteRow,
    tier: Tier,
    addr: NormalizedAddress,
) -> Result<LocationRecord, sqlx::Error> {
    let mut block = LocationBlock {
        network: decode_network(row, addr)?,
        geoname_id: row.try_get("geoname_id")?,
        registered_country_geoname_id: row.try_get("registered_country_geoname_id")?,
        represented_country_geoname_id: row.try_get("represented_country_geoname_id")?,
        traits: BlockTraits {
            is_anonymous_proxy: row.try_get("is_anonymous_proxy")?,
            is_satellite_provider: row.try_get("is_satellite_provider")?,
            is_anycast: row.try_get("is_anycast")?,
        },
        postal_code: None,
        coordinates: Coordinates::default(),
    };
    let mut text = LocationText {
        continent_code: row.try_get("continent_code")?,
        continent_name: row.try_get("continent_name")?,
        country_iso_code: row.try_get("country_iso_code")?,
        country_name: row.try_get("country_name")?,
        is_in_european_union: row.try_get("is_in_european_union")?,
        ..Default::default()
    };

    if tier == Tier::City {
        block.postal_code = row.try_get("postal_code")?;
        block.coordinates = Coordinates {
            latitude: row.try_get("latitude")?,
            longitude: row.try_get("longitude")?,
            accuracy_radius: row.try_get("accuracy_radius")?,
        };
        text.subdivision_1_iso_code = row.try_get("subdivision_1_iso_code")?;
        text.subdivision_1_name = row.try_get("subdivision_1_name")?;
        text.subdivision_2_iso_code = row.try_get("subdivision_2_iso_code")?;
        text.subdivision_2_name = row.try_get("subdivision_2_name")?;
        text.city_name = row.try_get("city_name")?;
        text.metro_code = row.try_get("metro_code")?;
        text.time_zone = row.try_get("time_zone")?;
    }

    Ok(LocationRecord { tier, block, text })
}

impl RangeStore for SqliteStore {
    async fn find_location(
        &self,
        tier: Tier,
        addr: NormalizedAddress,
        locale: &str,
    ) -> Result<Option<LocationRecord>, DatabaseError> {
        let query = match tier {
            Tier::City => CITY_QUERY,
            Tier::Country => COUNTRY_QUERY,
        };
        let row = sqlx::query(query)
            .bind(locale)
            .bind(addr.version.as_i64())
            .bind(addr.key)
            .bind(addr.key)
            .fetch_optional(self.pool.as_ref())
            .await?;

        row.map(|r| decode_location(&r, tier, addr))
            .transpose()
            .map_err(DatabaseError::from)
    }

    async fn find_asn(&self, addr: NormalizedAddress) -> Result<Option<AsnRecord>, DatabaseError> {
        let row = sqlx::query(ASN_QUERY)
            .bind(addr.version.as_i64())
            .bind(addr.key)
            .bind(addr.key)
            .fetch_optional(self.pool.as_ref())
            .await?;

        row.map(|r| -> Result<AsnRecord, sqlx::Error> {
            Ok(AsnRecord {
                network: decode_network(&r, addr)?,
                number: r.try_get("autonomous_system_number")?,
                organization: r.try_get("autonomous_system_organization")?,
            })
        })
        .transpose()
        .map_err(DatabaseError::from)
    }
}
