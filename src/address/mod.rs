//! Address normalization.
//!
//! Turns an untrusted textual IP address into a version tag and a signed 64-bit
//! key that orders the same way as the address itself. Range tables store
//! `network_start`/`network_end` in this key space, so containment checks are
//! plain integer comparisons.
//!
//! IPv6 keys use only the high 64 bits of the address: every address in the
//! same /64 shares one key. Stored IPv6 ranges must therefore not be narrower
//! than /64. Addresses whose high half does not fit in an `i64` are rejected
//! rather than wrapped.

use std::fmt;
use std::net::IpAddr;

use serde::{Serialize, Serializer};

use crate::error_handling::ResolveError;

/// IP protocol version of an address or stored range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum IpVersion {
    V4,
    V6,
}

impl IpVersion {
    /// Numeric tag as stored in the `ip_version` columns (4 or 6).
    pub fn as_i64(self) -> i64 {
        match self {
            IpVersion::V4 => 4,
            IpVersion::V6 => 6,
        }
    }

    /// Inverse of [`IpVersion::as_i64`].
    pub fn from_i64(value: i64) -> Option<Self> {
        match value {
            4 => Some(IpVersion::V4),
            6 => Some(IpVersion::V6),
            _ => None,
        }
    }
}

impl fmt::Display for IpVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_i64())
    }
}

impl Serialize for IpVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.as_i64())
    }
}

/// A parsed address in lookup-key form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NormalizedAddress {
    pub version: IpVersion,
    pub key: i64,
}

/// Parses `input` as IPv4 or IPv6 and computes its lookup key.
///
/// No trimming is performed; surrounding whitespace makes the input invalid.
///
/// # Errors
///
/// Returns [`ResolveError::ParseFailure`] if the text is not an address, or if
/// it is an IPv6 address whose high 64 bits exceed `i64::MAX`.
pub fn normalize(input: &str) -> Result<NormalizedAddress, ResolveError> {
    let addr: IpAddr = input
        .parse()
        .map_err(|_| ResolveError::ParseFailure(input.to_string()))?;

    match addr {
        IpAddr::V4(v4) => Ok(NormalizedAddress {
            version: IpVersion::V4,
            key: i64::from(u32::from_be_bytes(v4.octets())),
        }),
        IpAddr::V6(v6) => {
            let octets = v6.octets();
            let mut high = [0u8; 8];
            high.copy_from_slice(&octets[..8]);
            let key = i64::try_from(u64::from_be_bytes(high))
                .map_err(|_| ResolveError::ParseFailure(input.to_string()))?;
            Ok(NormalizedAddress {
                version: IpVersion::V6,
                key,
            })
        }
    }
}
