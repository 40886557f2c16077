//! Faceted search and aggregate statistics.
//!
//! Search composes independent filters as a conjunction over the store's
//! enumeration order. Filters are order-independent; the result limit is
//! applied last.

use std::collections::BTreeMap;

use anatomy_types::{Laterality, Region, StructureCategory};
use serde::Serialize;

use crate::navigator::HierarchyNavigator;

/// Filters for [`HierarchyNavigator::search`].
///
/// Every unset filter matches everything.
///
/// # Example
///
/// ```ignore
/// let options = SearchOptions::new()
///     .query("forearm")
///     .laterality(Laterality::Left)
///     .limit(5);
/// let hits = nav.search(&options);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Case-insensitive substring matched against name, Latin name,
    /// alternate names and id.
    pub query: Option<String>,
    /// Exact parent id.
    pub parent_id: Option<String>,
    /// Exact hierarchy level.
    pub level: Option<u32>,
    /// Exact laterality.
    pub laterality: Option<Laterality>,
    /// Require at least one structure in this category.
    pub has_structure: Option<StructureCategory>,
    /// Require at least one ontology id.
    pub has_ontology_ids: bool,
    /// Maximum number of results.
    pub limit: Option<usize>,
}

impl SearchOptions {
    /// Creates options with every filter unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the free-text query.
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Restricts results to children of `parent_id`.
    pub fn parent_id(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    /// Restricts results to one hierarchy level.
    pub fn level(mut self, level: u32) -> Self {
        self.level = Some(level);
        self
    }

    /// Restricts results to one laterality.
    pub fn laterality(mut self, laterality: Laterality) -> Self {
        self.laterality = Some(laterality);
        self
    }

    /// Requires at least one structure in `category`.
    pub fn has_structure(mut self, category: StructureCategory) -> Self {
        self.has_structure = Some(category);
        self
    }

    /// Requires at least one ontology id.
    pub fn has_ontology_ids(mut self) -> Self {
        self.has_ontology_ids = true;
        self
    }

    /// Caps the number of results.
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Compiled form of [`SearchOptions`] with the query lowercased once.
struct Filter<'o> {
    options: &'o SearchOptions,
    query_lower: Option<String>,
}

impl<'o> Filter<'o> {
    fn new(options: &'o SearchOptions) -> Self {
        Self {
            options,
            query_lower: options.query.as_deref().map(str::to_lowercase),
        }
    }

    fn matches(&self, region: &Region) -> bool {
        let o = self.options;

        if let Some(query) = &self.query_lower {
            if !region.matches_text(query) {
                return false;
            }
        }
        if let Some(parent_id) = &o.parent_id {
            if region.parent_id.as_ref() != Some(parent_id) {
                return false;
            }
        }
        if o.level.is_some_and(|level| region.level != level) {
            return false;
        }
        if o.laterality.is_some() && region.laterality != o.laterality {
            return false;
        }
        if o
            .has_structure
            .is_some_and(|category| !region.structures.has(category))
        {
            return false;
        }
        if o.has_ontology_ids && region.ontology_ids.is_empty() {
            return false;
        }
        true
    }
}

/// Aggregate counts over a store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HierarchyStatistics {
    /// Number of regions.
    pub total_regions: usize,
    /// Deepest level observed (0 for an empty store).
    pub max_level: u32,
    /// Region count per level.
    pub by_level: BTreeMap<u32, usize>,
    /// Regions with no declared children.
    pub leaf_count: usize,
    /// Region count per laterality; unlateralized regions are not counted.
    pub by_laterality: BTreeMap<Laterality, usize>,
    /// Regions with any primary content.
    pub with_content: usize,
    /// Structure references across all regions.
    pub total_structures: usize,
}

impl<'a> HierarchyNavigator<'a> {
    /// Runs a faceted search over every region in store order.
    pub fn search(&self, options: &SearchOptions) -> Vec<&'a Region> {
        let filter = Filter::new(options);
        let matches = self.store().all().iter().filter(|r| filter.matches(r));

        match options.limit {
            Some(limit) => matches.take(limit).collect(),
            None => matches.collect(),
        }
    }

    /// Regions that declare no children.
    pub fn get_leaf_regions(&self) -> Vec<&'a Region> {
        self.store().all().iter().filter(|r| r.is_leaf()).collect()
    }

    /// Computes aggregate counts. Recomputed on every call.
    pub fn get_statistics(&self) -> HierarchyStatistics {
        let mut stats = HierarchyStatistics::default();

        for region in self.store().all() {
            stats.total_regions += 1;
            stats.max_level = stats.max_level.max(region.level);
            *stats.by_level.entry(region.level).or_default() += 1;
            if region.is_leaf() {
                stats.leaf_count += 1;
            }
            if let Some(side) = region.laterality {
                *stats.by_laterality.entry(side).or_default() += 1;
            }
            if region.has_content() {
                stats.with_content += 1;
            }
            stats.total_structures += region.structure_count();
        }

        stats
    }
}
