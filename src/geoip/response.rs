//! JSON response shapes.
//!
//! External clients depend on this exact layout. Nullable leaves are always
//! serialized (as `null`), never skipped, so city and country answers share
//! one schema.

use serde::Serialize;

use super::flag::iso_to_flag;
use super::types::{AsnRecord, LocationRecord, NetworkRange, Tier};
use super::Resolution;
use crate::address::IpVersion;
use crate::error_handling::{FailureKind, ResolveError};

/// Body of a successful lookup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LookupResponse {
    pub status: u16,
    pub ip: String,
    pub ip_version: IpVersion,
    pub location: Location,
    pub asn: Option<Asn>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Location {
    pub source: Tier,
    pub network: Network,
    pub geo: Geo,
    pub coordinates: Coordinates,
    pub postal_code: Option<String>,
    pub traits: Traits,
    pub geoname_id: Option<i64>,
    pub registered_country_geoname_id: Option<i64>,
    pub represented_country_geoname_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Network {
    pub cidr: String,
    pub prefix_length: i64,
    pub ip_version: IpVersion,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Geo {
    pub continent: Continent,
    pub country: Country,
    pub subdivision_1: Subdivision,
    pub subdivision_2: Subdivision,
    pub city: City,
    pub time_zone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Continent {
    pub code: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Country {
    pub iso_code: Option<String>,
    pub name: Option<String>,
    pub flag_emoji: Option<String>,
    pub is_in_european_union: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Subdivision {
    pub iso_code: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct City {
    pub name: Option<String>,
    pub metro_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Coordinates {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub accuracy_radius: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Traits {
    pub is_anonymous_proxy: Option<i64>,
    pub is_satellite_provider: Option<i64>,
    pub is_anycast: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Asn {
    pub network: Network,
    pub number: Option<i64>,
    pub organization: Option<String>,
}

/// Body of any non-200 answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    pub status: u16,
    pub detail: String,
}

impl From<FailureKind> for ErrorResponse {
    fn from(kind: FailureKind) -> Self {
        Self {
            status: kind.status_code(),
            detail: kind.as_str().to_string(),
        }
    }
}

/// Either body, serialized without a wrapper.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LookupBody {
    Found(Box<LookupResponse>),
    Failed(ErrorResponse),
}

impl LookupBody {
    /// Maps a resolution outcome to the body the client receives.
    pub fn from_result(result: Result<Resolution, ResolveError>) -> Self {
        match result {
            Ok(Resolution::Found(response)) => LookupBody::Found(response),
            Ok(Resolution::NotFound) => LookupBody::Failed(FailureKind::NotFound.into()),
            Err(e) => LookupBody::Failed(e.kind().into()),
        }
    }

    pub fn status(&self) -> u16 {
        match self {
            LookupBody::Found(response) => response.status,
            LookupBody::Failed(error) => error.status,
        }
    }
}

impl From<&NetworkRange> for Network {
    fn from(range: &NetworkRange) -> Self {
        Self {
            cidr: range.cidr.clone(),
            prefix_length: range.prefix_length,
            ip_version: range.version,
        }
    }
}

impl From<LocationRecord> for Location {
    fn from(record: LocationRecord) -> Self {
        let LocationRecord { tier, block, text } = record;
        let flag_emoji = iso_to_flag(text.country_iso_code.as_deref());
        Self {
            source: tier,
            network: Network::from(&block.network),
            geo: Geo {
                continent: Continent {
                    code: text.continent_code,
                    name: text.continent_name,
                },
                country: Country {
                    iso_code: text.country_iso_code,
                    name: text.country_name,
                    flag_emoji,
                    is_in_european_union: text.is_in_european_union,
                },
                subdivision_1: Subdivision {
                    iso_code: text.subdivision_1_iso_code,
                    name: text.subdivision_1_name,
                },
                subdivision_2: Subdivision {
                    iso_code: text.subdivision_2_iso_code,
                    name: text.subdivision_2_name,
                },
                city: City {
                    name: text.city_name,
                    metro_code: text.metro_code,
                },
                time_zone: text.time_zone,
            },
            coordinates: Coordinates {
                latitude: block.coordinates.latitude,
                longitude: block.coordinates.longitude,
                accuracy_radius: block.coordinates.accuracy_radius,
            },
            postal_code: block.postal_code,
            traits: Traits {
                is_anonymous_proxy: block.traits.is_anonymous_proxy,
                is_satellite_provider: block.traits.is_satellite_provider,
                is_anycast: block.traits.is_anycast,
            },
            geoname_id: block.geoname_id,
            registered_country_geoname_id: block.registered_country_geoname_id,
            represented_country_geoname_id: block.represented_country_geoname_id,
        }
    }
}

impl From<AsnRecord> for Asn {
    fn from(record: AsnRecord) -> Self {
        Self {
            network: Network::from(&record.network),
            number: record.number,
            organization: record.organization,
        }
    }
}
