//! Multi-asset value types

use std::collections::BTreeMap;

use dashu_int::UBig;

/// Opaque asset identifier as the node tool prints it
/// (`<policyId>.<assetName>` for native assets, or the reserved base-coin id)
pub type AssetId = String;

/// Non-negative asset quantity
///
/// Arbitrary precision: totals across a whole UTxO set can exceed u64.
pub type Quantity = UBig;

/// Lovelace amount for single-transaction scalars (fees, rewards)
pub type Lovelace = u64;

/// Reserved asset id for the chain's base coin
pub const LOVELACE: &str = "lovelace";

/// Mapping from asset id to non-negative quantity, keys unique
///
/// Quantities for the same id are summed on insertion, so a repeated id can
/// never shadow an earlier one. Negative quantities are unrepresentable;
/// burns are modelled by `MintActionTag::Burn`, never inside this type.
/// Keys iterate in lexicographic order so encoding is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetBundle {
    assets: BTreeMap<AssetId, Quantity>,
}

impl AssetBundle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bundle holding only a base-coin quantity
    pub fn from_lovelace(amount: impl Into<Quantity>) -> Self {
        let mut bundle = Self::new();
        bundle.add(LOVELACE, amount.into());
        bundle
    }

    /// Add a quantity, summing with any existing entry for the same id
    pub fn add(&mut self, id: impl Into<AssetId>, quantity: Quantity) {
        *self.assets.entry(id.into()).or_insert(UBig::ZERO) += quantity;
    }

    /// Quantity for an id, zero when absent
    pub fn get(&self, id: &str) -> Quantity {
        self.assets.get(id).cloned().unwrap_or(UBig::ZERO)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.assets.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Sum of two bundles - commutative, associative, empty is the identity
    pub fn merge(&self, other: &Self) -> Self {
        let mut merged = self.clone();
        merged.merge_from(other);
        merged
    }

    /// Fold another bundle into this one
    pub fn merge_from(&mut self, other: &Self) {
        for (id, quantity) in &other.assets {
            self.add(id.clone(), quantity.clone());
        }
    }

    /// Entries in deterministic (lexicographic) order
    pub fn iter(&self) -> impl Iterator<Item = (&AssetId, &Quantity)> {
        self.assets.iter()
    }

    /// Entries other than the base coin, in deterministic order
    pub fn non_lovelace(&self) -> impl Iterator<Item = (&AssetId, &Quantity)> {
        self.assets.iter().filter(|(id, _)| id.as_str() != LOVELACE)
    }
}

impl FromIterator<(AssetId, Quantity)> for AssetBundle {
    fn from_iter<I: IntoIterator<Item = (AssetId, Quantity)>>(iter: I) -> Self {
        let mut bundle = Self::new();
        for (id, quantity) in iter {
            bundle.add(id, quantity);
        }
        bundle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bundle(entries: &[(&str, u64)]) -> AssetBundle {
        entries.iter().map(|(id, q)| (id.to_string(), UBig::from(*q))).collect()
    }

    #[test]
    fn test_get_missing_is_zero() {
        let b = bundle(&[("lovelace", 5)]);
        assert_eq!(b.get("policy.token"), UBig::ZERO);
        assert_eq!(b.get(LOVELACE), UBig::from(5u64));
    }

    #[test]
    fn test_add_sums_repeated_ids() {
        let mut b = AssetBundle::new();
        b.add("policy.token", UBig::from(3u64));
        b.add("policy.token", UBig::from(4u64));
        assert_eq!(b.get("policy.token"), UBig::from(7u64));
        assert_eq!(b.len(), 1);
    }

    #[test]
    fn test_merge_commutative_associative_identity() {
        let a = bundle(&[("lovelace", 90), ("nft1", 1)]);
        let b = bundle(&[("lovelace", 30), ("nft2", 2)]);
        let c = bundle(&[("nft1", 5)]);

        assert_eq!(a.merge(&b), b.merge(&a));
        assert_eq!(a.merge(&b).merge(&c), a.merge(&b.merge(&c)));
        assert_eq!(a.merge(&AssetBundle::new()), a);
    }

    #[test]
    fn test_merge_sums_quantities() {
        let a = bundle(&[("lovelace", 90)]);
        let b = bundle(&[("lovelace", 30), ("nft1", 1)]);
        let total = a.merge(&b);
        assert_eq!(total, bundle(&[("lovelace", 120), ("nft1", 1)]));
    }

    #[test]
    fn test_quantities_exceed_u64() {
        let mut b = AssetBundle::new();
        b.add(LOVELACE, UBig::from(u64::MAX));
        b.add(LOVELACE, UBig::from(u64::MAX));
        assert_eq!(b.get(LOVELACE), UBig::from(u64::MAX) + UBig::from(u64::MAX));
    }
}
