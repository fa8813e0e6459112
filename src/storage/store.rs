//! Read interface over the range tables.

use std::future::Future;

use crate::address::NormalizedAddress;
use crate::error_handling::DatabaseError;
use crate::geoip::{AsnRecord, LocationRecord, Tier};

/// A readable handle to the block, locale-text and ASN tables.
///
/// Implementations must select, among the ranges of the address's version that
/// contain its key, the one with the largest prefix length. Ties on prefix
/// length go to the range that comes first in storage order.
pub trait RangeStore {
    /// Most specific `tier` block containing `addr`, joined with its text for
    /// `locale`. A missing text row yields `LocationText::default()`, not `None`.
    fn find_location(
        &self,
        tier: Tier,
        addr: NormalizedAddress,
        locale: &str,
    ) -> impl Future<Output = Result<Option<LocationRecord>, DatabaseError>> + Send;

    /// Most specific ASN block containing `addr`.
    fn find_asn(
        &self,
        addr: NormalizedAddress,
    ) -> impl Future<Output = Result<Option<AsnRecord>, DatabaseError>> + Send;
}
