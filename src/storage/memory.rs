//! In-memory range store.
//!
//! Holds rows in insertion order and scans them linearly. Selection follows
//! the same rule as the SQL queries: largest prefix length wins, and on equal
//! prefix lengths the earliest inserted row is kept.

use std::collections::HashMap;

use super::store::RangeStore;
use crate::address::NormalizedAddress;
use crate::error_handling::DatabaseError;
use crate::geoip::{AsnRecord, LocationBlock, LocationRecord, LocationText, NetworkRange, Tier};

#[derive(Debug, Default, Clone)]
struct TierTable {
    blocks: Vec<LocationBlock>,
    text: HashMap<(i64, String), LocationText>,
}

/// [`RangeStore`] backed by vectors, for embedding and tests.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    city: TierTable,
    country: TierTable,
    asn: Vec<AsnRecord>,
}

/// Returns the most specific item whose range contains `addr`.
fn most_specific<T>(
    items: &[T],
    addr: NormalizedAddress,
    range: impl Fn(&T) -> &NetworkRange,
) -> Option<&T> {
    items
        .iter()
        .filter(|item| range(*item).contains(addr))
        .fold(None, |best: Option<&T>, item| match best {
            Some(b) if range(b).prefix_length >= range(item).prefix_length => Some(b),
            _ => Some(item),
        })
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn table(&self, tier: Tier) -> &TierTable {
        match tier {
            Tier::City => &self.city,
            Tier::Country => &self.country,
        }
    }

    fn table_mut(&mut self, tier: Tier) -> &mut TierTable {
        match tier {
            Tier::City => &mut self.city,
            Tier::Country => &mut self.country,
        }
    }

    /// Appends a block row to `tier`'s block table.
    pub fn insert_block(&mut self, tier: Tier, block: LocationBlock) {
        self.table_mut(tier).blocks.push(block);
    }

    /// Sets the text for `(geoname_id, locale)` in `tier`'s locale table,
    /// replacing any previous row.
    pub fn insert_text(&mut self, tier: Tier, geoname_id: i64, locale: &str, text: LocationText) {
        self.table_mut(tier)
            .text
            .insert((geoname_id, locale.to_string()), text);
    }

    pub fn insert_asn(&mut self, record: AsnRecord) {
        self.asn.push(record);
    }

    fn location(&self, tier: Tier, addr: NormalizedAddress, locale: &str) -> Option<LocationRecord> {
        let table = self.table(tier);
        let block = most_specific(&table.blocks, addr, |b| &b.network)?;
        let text = block
            .geoname_id
            .and_then(|id| table.text.get(&(id, locale.to_string())))
            .cloned()
            .unwrap_or_default();
        Some(LocationRecord {
            tier,
            block: block.clone(),
            text,
        })
    }
}

impl RangeStore for MemoryStore {
    async fn find_location(
        &self,
        tier: Tier,
        addr: NormalizedAddress,
        locale: &str,
    ) -> Result<Option<LocationRecord>, DatabaseError> {
        Ok(self.location(tier, addr, locale))
    }

    async fn find_asn(&self, addr: NormalizedAddress) -> Result<Option<AsnRecord>, DatabaseError> {
        Ok(most_specific(&self.asn, addr, |r| &r.network).cloned())
    }
}
