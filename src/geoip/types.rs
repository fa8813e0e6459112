//! GeoIP data structures.
//!
//! Records read from the range tables. City and country matches share one
//! record type tagged with the [`Tier`] they came from; country-tier records
//! simply never carry the city-only fields.

use serde::Serialize;
use strum_macros::{AsRefStr, Display, EnumIter};

use crate::address::{IpVersion, NormalizedAddress};

/// Granularity of the block table a location came from.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, AsRefStr, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Tier {
    City,
    Country,
}

/// A CIDR block in lookup-key space.
///
/// `start..=end` is the closed interval of keys the block covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkRange {
    pub cidr: String,
    pub prefix_length: i64,
    pub version: IpVersion,
    pub start: i64,
    pub end: i64,
}

impl NetworkRange {
    /// Returns true if `addr` has the same version and its key lies in `start..=end`.
    pub fn contains(&self, addr: NormalizedAddress) -> bool {
        self.version == addr.version && self.start <= addr.key && addr.key <= self.end
    }
}

/// Flags carried by a block row. Stored as integers (0/1) and echoed as such.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockTraits {
    pub is_anonymous_proxy: Option<i64>,
    pub is_satellite_provider: Option<i64>,
    pub is_anycast: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Coordinates {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub accuracy_radius: Option<i64>,
}

/// One row of a `*_blocks` table, before the locale join.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationBlock {
    pub network: NetworkRange,
    pub geoname_id: Option<i64>,
    pub registered_country_geoname_id: Option<i64>,
    pub represented_country_geoname_id: Option<i64>,
    pub traits: BlockTraits,
    /// City tier only.
    pub postal_code: Option<String>,
    /// City tier only.
    pub coordinates: Coordinates,
}

impl LocationBlock {
    /// A block with every optional column absent.
    pub fn new(network: NetworkRange) -> Self {
        Self {
            network,
            geoname_id: None,
            registered_country_geoname_id: None,
            represented_country_geoname_id: None,
            traits: BlockTraits::default(),
            postal_code: None,
            coordinates: Coordinates::default(),
        }
    }
}

/// Locale-specific text for a geoname, keyed by `(geoname_id, locale_code)`.
///
/// Every field is independently optional. A missing row is represented by
/// `LocationText::default()`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationText {
    pub continent_code: Option<String>,
    pub continent_name: Option<String>,
    pub country_iso_code: Option<String>,
    pub country_name: Option<String>,
    pub is_in_european_union: Option<i64>,
    pub subdivision_1_iso_code: Option<String>,
    pub subdivision_1_name: Option<String>,
    pub subdivision_2_iso_code: Option<String>,
    pub subdivision_2_name: Option<String>,
    pub city_name: Option<String>,
    pub metro_code: Option<String>,
    pub time_zone: Option<String>,
}

/// A matched block joined with its locale text.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationRecord {
    pub tier: Tier,
    pub block: LocationBlock,
    pub text: LocationText,
}

impl LocationRecord {
    /// Clears every field the record's tier does not provide.
    ///
    /// A no-op for city records. For country records it guarantees postal
    /// code, coordinates, subdivisions, city, metro code and time zone are
    /// absent, whatever the backing store returned.
    pub fn restrict_to_tier(mut self) -> Self {
        if self.tier == Tier::Country {
            self.block.postal_code = None;
            self.block.coordinates = Coordinates::default();
            self.text.subdivision_1_iso_code = None;
            self.text.subdivision_1_name = None;
            self.text.subdivision_2_iso_code = None;
            self.text.subdivision_2_name = None;
            self.text.city_name = None;
            self.text.metro_code = None;
            self.text.time_zone = None;
        }
        self
    }
}

/// A matched row of `asn_blocks`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsnRecord {
    pub network: NetworkRange,
    pub number: Option<i64>,
    pub organization: Option<String>,
}

/// A decoded resolution request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    pub ip: String,
    pub locale: String,
}

impl LookupRequest {
    /// Builds a request, falling back to `default_locale` when `locale` is
    /// unset or empty.
    pub fn new(ip: impl Into<String>, locale: Option<&str>, default_locale: &str) -> Self {
        let locale = match locale {
            Some(l) if !l.is_empty() => l,
            _ => default_locale,
        };
        Self {
            ip: ip.into(),
            locale: locale.to_string(),
        }
    }
}
