//! Address resolution.
//!
//! Runs the normalizer once, then the city tier, the country tier (only when
//! the city tier misses) and, for a found location, the ASN lookup against a
//! caller-supplied store.
//! Nothing here logs or retries; failures are returned to the caller.

use super::assemble::ResponseAssembler;
use super::types::{AsnRecord, LocationRecord, LookupRequest, Tier};
use super::Resolution;
use crate::address::{normalize, NormalizedAddress};
use crate::error_handling::ResolveError;
use crate::storage::RangeStore;

/// Finds the most specific `tier` location for `addr`.
///
/// A miss is `Ok(None)`. The returned record is tagged with `tier`.
pub async fn resolve_range<S: RangeStore>(
    store: &S,
    tier: Tier,
    addr: NormalizedAddress,
    locale: &str,
) -> Result<Option<LocationRecord>, ResolveError> {
    let record = store.find_location(tier, addr, locale).await?;
    Ok(record.map(|mut r| {
        r.tier = tier;
        r
    }))
}

/// Finds the most specific ASN block for `addr`. A miss is `Ok(None)`.
pub async fn resolve_asn<S: RangeStore>(
    store: &S,
    addr: NormalizedAddress,
) -> Result<Option<AsnRecord>, ResolveError> {
    Ok(store.find_asn(addr).await?)
}

/// Stateless resolver holding only the response assembler.
///
/// Safe to share across tasks; every call reads fresh from the given store.
#[derive(Debug, Clone)]
pub struct Resolver {
    assembler: ResponseAssembler,
}

impl Resolver {
    /// Creates a resolver whose found responses carry `message`.
    pub fn new(message: impl Into<std::sync::Arc<str>>) -> Self {
        Self {
            assembler: ResponseAssembler::new(message),
        }
    }

    pub fn assembler(&self) -> &ResponseAssembler {
        &self.assembler
    }

    /// Resolves one request.
    ///
    /// # Errors
    ///
    /// - [`ResolveError::ParseFailure`] before any storage access if the
    ///   address does not normalize.
    /// - [`ResolveError::StorageUnavailable`] if a location read fails. ASN
    ///   read failures never fail the request.
    pub async fn resolve<S: RangeStore>(
        &self,
        store: &S,
        request: &LookupRequest,
    ) -> Result<Resolution, ResolveError> {
        let addr = normalize(&request.ip)?;

        let city = resolve_range(store, Tier::City, addr, &request.locale).await?;
        let country = match city {
            Some(_) => None,
            None => resolve_range(store, Tier::Country, addr, &request.locale).await?,
        };
        if city.is_none() && country.is_none() {
            return Ok(Resolution::NotFound);
        }
        // ASN data only enriches a found location; an unreadable ASN table
        // degrades to `asn: null`.
        let asn = resolve_asn(store, addr).await.ok().flatten();

        Ok(self
            .assembler
            .assemble(&request.ip, addr, city, country, asn))
    }
}
