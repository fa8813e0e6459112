//! GeoIP resolution engine.
//!
//! Resolves a normalized address against the city, country and ASN range
//! tables of a [`RangeStore`](crate::storage::RangeStore):
//! - the most specific (longest prefix) containing range wins in every table
//! - city matches are authoritative, country matches are the fallback
//! - locale text and ASN data are optional enrichments that never turn a
//!   match into a miss

mod assemble;
mod flag;
mod lookup;
mod response;
mod types;

// Re-export public API
pub use assemble::ResponseAssembler;
pub use flag::iso_to_flag;
pub use lookup::{resolve_asn, resolve_range, Resolver};
pub use response::{
    Asn, City, Continent, Coordinates as CoordinatesBody, Country, ErrorResponse, Geo, Location,
    LookupBody, LookupResponse, Network, Subdivision, Traits,
};
pub use types::{
    AsnRecord, BlockTraits, Coordinates, LocationBlock, LocationRecord, LocationText,
    LookupRequest, NetworkRange, Tier,
};

/// Outcome of a resolution that did not fail.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// A city or country range matched. The response's `location.source`
    /// records which tier answered.
    Found(Box<LookupResponse>),
    /// The address is valid but no city or country range contains it.
    NotFound,
}

impl Resolution {
    /// Tier that answered, if any.
    pub fn source(&self) -> Option<Tier> {
        match self {
            Resolution::Found(response) => Some(response.location.source),
            Resolution::NotFound => None,
        }
    }
}
