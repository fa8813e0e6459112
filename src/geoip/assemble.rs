//! Response assembly.
//!
//! Merges the tier lookups and the ASN lookup into one [`Resolution`]:
//! a city match wins, a country match is the fallback, and no match in
//! either tier is `NotFound` whatever the ASN lookup returned.

use std::sync::Arc;

use super::response::{Asn, Location, LookupResponse};
use super::types::{AsnRecord, LocationRecord};
use super::Resolution;
use crate::address::NormalizedAddress;

/// Builds lookup responses around a fixed attribution message.
#[derive(Debug, Clone)]
pub struct ResponseAssembler {
    message: Arc<str>,
}

impl ResponseAssembler {
    pub fn new(message: impl Into<Arc<str>>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Combines tier and ASN results.
    ///
    /// `country` is ignored when `city` is present. The ASN result is only
    /// reported alongside a found location.
    pub fn assemble(
        &self,
        ip: &str,
        addr: NormalizedAddress,
        city: Option<LocationRecord>,
        country: Option<LocationRecord>,
        asn: Option<AsnRecord>,
    ) -> Resolution {
        let Some(record) = city.or(country) else {
            return Resolution::NotFound;
        };

        Resolution::Found(Box::new(LookupResponse {
            status: 200,
            ip: ip.to_string(),
            ip_version: addr.version,
            location: Location::from(record.restrict_to_tier()),
            asn: asn.map(Asn::from),
            message: self.message.to_string(),
        }))
    }
}
