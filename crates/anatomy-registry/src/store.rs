//! In-memory region store.
//!
//! Owns the authoritative collection of regions. Regions are handed over in
//! one bulk construction and never mutated afterwards, so a built store can
//! be shared freely between readers.
//!
//! ```ignore
//! let store = RegionStore::from_regions(load_regions_json("regions.json")?)?;
//!
//! if let Some(region) = store.get("body.upper-limb.left.forearm") {
//!     println!("Found: {}", region.name);
//! }
//! ```

use std::collections::HashMap;

use anatomy_types::{Laterality, Region};
use tracing::debug;

use crate::types::{RegistryError, RegistryResult};

/// In-memory store for anatomical regions.
///
/// Provides O(1) lookup by id and linear filtered scans in insertion order.
/// Every lookup is lenient: an unknown id yields `None` (or an empty list),
/// never an error.
#[derive(Default)]
pub struct RegionStore {
    /// Regions in insertion order.
    regions: Vec<Region>,
    /// Position of each region in `regions`, keyed by id.
    index: HashMap<String, usize>,
}

impl std::fmt::Debug for RegionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegionStore")
            .field("regions", &self.regions.len())
            .field("roots", &self.roots().count())
            .finish()
    }
}

impl RegionStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from a bulk collection of regions.
    ///
    /// Insertion order is preserved and becomes the enumeration order of
    /// [`all`](Self::all). Fails on the first duplicated id; no other
    /// consistency check is performed here (see
    /// [`HierarchyNavigator::validate_hierarchy`](crate::HierarchyNavigator::validate_hierarchy)).
    pub fn from_regions(regions: impl IntoIterator<Item = Region>) -> RegistryResult<Self> {
        let iter = regions.into_iter();
        let (lower, _) = iter.size_hint();
        let mut store = Self {
            regions: Vec::with_capacity(lower),
            index: HashMap::with_capacity(lower),
        };

        for region in iter {
            if store.index.contains_key(&region.id) {
                return Err(RegistryError::DuplicateRegionId { id: region.id });
            }
            store.index.insert(region.id.clone(), store.regions.len());
            store.regions.push(region);
        }

        debug!(regions = store.regions.len(), "built region store");
        Ok(store)
    }

    /// Gets a region by its id.
    pub fn get(&self, id: &str) -> Option<&Region> {
        self.index.get(id).map(|&i| &self.regions[i])
    }

    /// Returns true if a region exists in the store.
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// All regions, in insertion order.
    pub fn all(&self) -> &[Region] {
        &self.regions
    }

    /// All region ids, in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.regions.iter().map(|r| r.id.as_str())
    }

    /// Regions that declare no parent.
    ///
    /// A well-formed store has exactly one.
    pub fn roots(&self) -> impl Iterator<Item = &Region> {
        self.regions.iter().filter(|r| r.is_root())
    }

    /// Regions at the given hierarchy level.
    pub fn by_level(&self, level: u32) -> Vec<&Region> {
        self.regions.iter().filter(|r| r.level == level).collect()
    }

    /// Regions with the given laterality.
    pub fn by_laterality(&self, laterality: Laterality) -> Vec<&Region> {
        self.regions
            .iter()
            .filter(|r| r.laterality == Some(laterality))
            .collect()
    }

    /// Case-insensitive substring search over name, Latin name, alternate
    /// names and id.
    pub fn search_by_name(&self, query: &str) -> Vec<&Region> {
        let query_lower = query.to_lowercase();
        self.regions
            .iter()
            .filter(|r| r.matches_text(&query_lower))
            .collect()
    }

    /// Number of regions.
    pub fn count(&self) -> usize {
        self.regions.len()
    }

    /// Returns true if the store holds no regions.
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{forearm_fixture, limb_fixture};

    #[test]
    fn test_store_lookup() {
        let store = limb_fixture();

        assert_eq!(store.count(), 4);
        assert!(store.contains("root"));
        assert!(!store.contains("missing"));

        let limb = store.get("root.limb").unwrap();
        assert_eq!(limb.level, 1);
        assert!(store.get("root.tail").is_none());
    }

    #[test]
    fn test_all_preserves_insertion_order() {
        let store = limb_fixture();
        let ids: Vec<_> = store.ids().collect();
        assert_eq!(
            ids,
            vec!["root", "root.limb", "root.limb.left", "root.limb.right"]
        );
        assert_eq!(store.all()[2].id, "root.limb.left");
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let regions = vec![Region::new("body", "Body"), Region::new("body", "Body again")];
        let err = RegionStore::from_regions(regions).unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateRegionId { id } if id == "body"));
    }

    #[test]
    fn test_filters() {
        let store = limb_fixture();

        let level_two: Vec<_> = store.by_level(2).iter().map(|r| r.id.as_str()).collect();
        assert_eq!(level_two, vec!["root.limb.left", "root.limb.right"]);

        let left = store.by_laterality(Laterality::Left);
        assert_eq!(left.len(), 1);
        assert_eq!(left[0].id, "root.limb.left");
        assert!(store.by_laterality(Laterality::Midline).is_empty());

        assert_eq!(store.roots().count(), 1);
    }

    #[test]
    fn test_search_by_name() {
        let store = forearm_fixture();

        let hits: Vec<_> = store
            .search_by_name("FOREARM")
            .iter()
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(hits, vec!["body.arm.left.forearm", "body.arm.right.forearm"]);

        // Latin name
        assert_eq!(store.search_by_name("antebrachium dextrum").len(), 1);
        // Id fragment
        assert_eq!(store.search_by_name("arm.left").len(), 2);
        assert!(store.search_by_name("pelvis").is_empty());
    }

    #[test]
    fn test_empty_store() {
        let store = RegionStore::new();
        assert!(store.is_empty());
        assert!(store.get("body").is_none());
        assert!(store.search_by_name("").is_empty());
    }
}
