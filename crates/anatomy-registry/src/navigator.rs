//! Hierarchy navigation over a region store.
//!
//! The navigator is a stateless view: it borrows a [`RegionStore`], derives
//! relationships from region links, and hands back references into the
//! store or owned summaries. It never mutates the store.
//!
//! Every lookup here is lenient. A dangling parent, child or contralateral
//! link simply resolves to nothing. A `None` from these methods therefore
//! says nothing about whether the hierarchy is consistent; use
//! [`HierarchyNavigator::validate_hierarchy`] for that.

use std::collections::HashSet;

use anatomy_types::{Region, RegionSummary};
use serde::Serialize;

use crate::store::RegionStore;
use crate::traversal::{bounded_walk, Direction};
use crate::types::NavigatorConfig;

/// Root-to-region path, for breadcrumbs.
#[derive(Debug, Clone, Serialize)]
pub struct RegionPath<'a> {
    /// Regions from the root down to and including the requested region.
    pub regions: Vec<&'a Region>,
    /// Number of regions on the path.
    pub depth: usize,
}

impl<'a> RegionPath<'a> {
    /// Ids along the path, root first.
    pub fn ids(&self) -> Vec<&'a str> {
        self.regions.iter().map(|r| r.id.as_str()).collect()
    }

    /// The requested region (last element of the path).
    pub fn target(&self) -> Option<&'a Region> {
        self.regions.last().copied()
    }
}

/// A node of a materialized region tree view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionTreeNode {
    /// Summary of the region at this node.
    pub summary: RegionSummary,
    /// Child nodes in display order.
    pub children: Vec<RegionTreeNode>,
    /// Display default: whether the tree browser shows this node open.
    pub expanded: bool,
}

impl RegionTreeNode {
    /// Number of nodes in this subtree, including itself.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Self::node_count).sum::<usize>()
    }
}

/// Read-only navigator over a [`RegionStore`].
///
/// # Example
///
/// ```ignore
/// let store = anatomy_registry::catalog::standard_body()?;
/// let nav = HierarchyNavigator::new(&store);
///
/// let path = nav.get_path("body.upper-limb.right.forearm").unwrap();
/// assert_eq!(path.ids(), ["body", "body.upper-limb", "body.upper-limb.right", "body.upper-limb.right.forearm"]);
/// ```
#[derive(Debug, Clone)]
pub struct HierarchyNavigator<'a> {
    store: &'a RegionStore,
    config: NavigatorConfig,
}

impl<'a> HierarchyNavigator<'a> {
    /// Creates a navigator with the default configuration.
    pub fn new(store: &'a RegionStore) -> Self {
        Self::with_config(store, NavigatorConfig::default())
    }

    /// Creates a navigator with an explicit configuration.
    pub fn with_config(store: &'a RegionStore, config: NavigatorConfig) -> Self {
        Self { store, config }
    }

    /// The store this navigator reads from.
    pub fn store(&self) -> &'a RegionStore {
        self.store
    }

    /// The active configuration.
    pub fn config(&self) -> &NavigatorConfig {
        &self.config
    }

    /// The first region without a parent, in store order.
    pub fn get_root(&self) -> Option<&'a Region> {
        self.store.roots().next()
    }

    /// Gets the parent of a region.
    pub fn get_parent(&self, id: &str) -> Option<&'a Region> {
        let parent_id = self.store.get(id)?.parent_id.as_deref()?;
        self.store.get(parent_id)
    }

    /// Gets the children of a region in display order.
    ///
    /// Child ids that do not resolve are dropped silently.
    pub fn get_children(&self, id: &str) -> Vec<&'a Region> {
        self.store
            .get(id)
            .map(|region| {
                region
                    .child_ids
                    .iter()
                    .filter_map(|child| self.store.get(child))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Gets all ancestors of a region, nearest first.
    ///
    /// Terminates on cyclic data; the result is then incomplete.
    pub fn get_ancestors(&self, id: &str) -> Vec<&'a Region> {
        self.store
            .get(id)
            .map(|region| self.ancestors_of(region))
            .unwrap_or_default()
    }

    /// Gets the other children of a region's parent.
    ///
    /// For a region without a parent this returns every other parentless
    /// region. With a single root that list is empty; more than one root is
    /// a data error reported by validation.
    pub fn get_siblings(&self, id: &str) -> Vec<&'a Region> {
        let Some(region) = self.store.get(id) else {
            return Vec::new();
        };

        match region.parent_id.as_deref() {
            Some(parent_id) => self
                .get_children(parent_id)
                .into_iter()
                .filter(|r| r.id != region.id)
                .collect(),
            None => self.store.roots().filter(|r| r.id != region.id).collect(),
        }
    }

    /// Gets the mirror-image region on the opposite side.
    pub fn get_contralateral(&self, id: &str) -> Option<&'a Region> {
        let other = self.store.get(id)?.contralateral_id.as_deref()?;
        self.store.get(other)
    }

    /// Gets all descendants of a region, breadth first, bounded by the
    /// configured default depth.
    pub fn get_descendants(&self, id: &str) -> Vec<&'a Region> {
        self.get_descendants_within(id, self.config.max_descendant_depth)
    }

    /// Gets descendants of a region at most `max_depth` levels below it.
    ///
    /// `max_depth = 1` yields exactly the resolvable direct children.
    pub fn get_descendants_within(&self, id: &str, max_depth: usize) -> Vec<&'a Region> {
        self.store
            .get(id)
            .map(|region| bounded_walk(self.store, region, Direction::Down, max_depth).regions)
            .unwrap_or_default()
    }

    /// Gets the root-to-region path.
    ///
    /// Returns `None` for an unknown id. On a well-formed store
    /// `depth == level + 1`.
    pub fn get_path(&self, id: &str) -> Option<RegionPath<'a>> {
        let region = self.store.get(id)?;
        let mut regions = self.ancestors_of(region);
        regions.reverse();
        regions.push(region);

        Some(RegionPath {
            depth: regions.len(),
            regions,
        })
    }

    /// Gets the root-to-region path as summaries.
    pub fn get_breadcrumbs(&self, id: &str) -> Vec<RegionSummary> {
        self.get_path(id)
            .map(|path| path.regions.iter().map(|r| r.summary()).collect())
            .unwrap_or_default()
    }

    /// Materializes the tree view rooted at a region, bounded by the
    /// configured default depth.
    pub fn build_tree(&self, id: &str) -> Option<RegionTreeNode> {
        self.build_tree_within(id, self.config.max_descendant_depth)
    }

    /// Materializes the tree view rooted at a region, at most `max_depth`
    /// levels deep.
    ///
    /// Nodes in the first `expanded_levels` levels are marked expanded. A
    /// region appears at most once in the tree even if the data links it
    /// from several places.
    pub fn build_tree_within(&self, id: &str, max_depth: usize) -> Option<RegionTreeNode> {
        let region = self.store.get(id)?;
        let mut visited = HashSet::new();
        visited.insert(region.id.as_str());
        Some(self.tree_node(region, 0, max_depth, &mut visited))
    }

    fn tree_node(
        &self,
        region: &'a Region,
        depth: usize,
        max_depth: usize,
        visited: &mut HashSet<&'a str>,
    ) -> RegionTreeNode {
        let mut children = Vec::new();
        if depth < max_depth {
            for child in self.get_children(&region.id) {
                if visited.insert(child.id.as_str()) {
                    children.push(self.tree_node(child, depth + 1, max_depth, visited));
                }
            }
        }

        RegionTreeNode {
            summary: region.summary(),
            children,
            expanded: depth < self.config.expanded_levels,
        }
    }

    /// Gets the nearest region that is an ancestor-or-self of both regions.
    ///
    /// Symmetric in its arguments on a well-formed store. Returns `None` if
    /// either id is unknown or the regions share no ancestor.
    pub fn get_common_ancestor(&self, a: &str, b: &str) -> Option<&'a Region> {
        let a = self.store.get(a)?;
        let b = self.store.get(b)?;

        let a_lineage: HashSet<&str> = std::iter::once(a)
            .chain(self.ancestors_of(a))
            .map(|r| r.id.as_str())
            .collect();

        std::iter::once(b)
            .chain(self.ancestors_of(b))
            .find(|r| a_lineage.contains(r.id.as_str()))
    }

    /// Number of parent/child edges between two regions through their
    /// common ancestor.
    ///
    /// Returns `None` where no common ancestor exists (or an id is unknown).
    pub fn get_hierarchy_distance(&self, a: &str, b: &str) -> Option<usize> {
        let common = self.get_common_ancestor(a, b)?;
        Some(self.edges_up_to(a, &common.id)? + self.edges_up_to(b, &common.id)?)
    }

    /// Returns true if `ancestor` is a proper ancestor of `descendant`.
    pub fn is_ancestor_of(&self, ancestor: &str, descendant: &str) -> bool {
        self.get_ancestors(descendant)
            .iter()
            .any(|r| r.id == ancestor)
    }

    /// Returns true if `descendant` is a proper descendant of `ancestor`.
    pub fn is_descendant_of(&self, descendant: &str, ancestor: &str) -> bool {
        self.is_ancestor_of(ancestor, descendant)
    }

    pub(crate) fn ancestors_of(&self, region: &'a Region) -> Vec<&'a Region> {
        // A chain never has more links than the store has regions.
        let max_depth = self
            .config
            .max_ancestor_depth
            .unwrap_or_else(|| self.store.count());
        bounded_walk(self.store, region, Direction::Up, max_depth).regions
    }

    /// Edges from `id` up to `ancestor_id` (0 if they are the same region).
    fn edges_up_to(&self, id: &str, ancestor_id: &str) -> Option<usize> {
        let region = self.store.get(id)?;
        std::iter::once(region)
            .chain(self.ancestors_of(region))
            .position(|r| r.id == ancestor_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{chain_fixture, cyclic_fixture, ids, limb_fixture};

    #[test]
    fn test_parent_and_children() {
        let store = limb_fixture();
        let nav = HierarchyNavigator::new(&store);

        assert_eq!(nav.get_parent("root.limb.left").unwrap().id, "root.limb");
        assert!(nav.get_parent("root").is_none());
        assert!(nav.get_parent("missing").is_none());

        assert_eq!(
            ids(&nav.get_children("root.limb")),
            vec!["root.limb.left", "root.limb.right"]
        );
        assert!(nav.get_children("root.limb.left").is_empty());
        assert!(nav.get_children("missing").is_empty());
    }

    #[test]
    fn test_children_drop_dangling_ids() {
        let store = RegionStore::from_regions([
            Region::new("root", "Root").with_children(["root.a", "root.ghost", "root.b"]),
            Region::new("root.a", "A").with_parent("root").with_level(1),
            Region::new("root.b", "B").with_parent("root").with_level(1),
        ])
        .unwrap();
        let nav = HierarchyNavigator::new(&store);

        assert_eq!(ids(&nav.get_children("root")), vec!["root.a", "root.b"]);
    }

    #[test]
    fn test_limb_scenario() {
        let store = limb_fixture();
        let nav = HierarchyNavigator::new(&store);

        assert_eq!(ids(&nav.get_siblings("root.limb.left")), vec!["root.limb.right"]);
        assert_eq!(
            nav.get_common_ancestor("root.limb.left", "root.limb.right")
                .unwrap()
                .id,
            "root.limb"
        );
        assert_eq!(
            nav.get_hierarchy_distance("root.limb.left", "root.limb.right"),
            Some(2)
        );
        assert_eq!(
            nav.get_path("root.limb.right").unwrap().ids(),
            vec!["root", "root.limb", "root.limb.right"]
        );
        assert_eq!(
            nav.get_contralateral("root.limb.left").unwrap().id,
            "root.limb.right"
        );
        assert_eq!(
            nav.get_contralateral("root.limb.right").unwrap().id,
            "root.limb.left"
        );
        assert!(nav.get_contralateral("root.limb").is_none());
    }

    #[test]
    fn test_ancestors_nearest_first() {
        let store = limb_fixture();
        let nav = HierarchyNavigator::new(&store);

        assert_eq!(ids(&nav.get_ancestors("root.limb.right")), vec!["root.limb", "root"]);
        assert!(nav.get_ancestors("root").is_empty());
        assert!(nav.get_ancestors("missing").is_empty());
    }

    #[test]
    fn test_deep_chain_ancestors_are_complete() {
        let store = chain_fixture(150);
        let nav = HierarchyNavigator::new(&store);
        assert!(nav.validate_hierarchy().is_empty());

        assert_eq!(nav.get_path("n149").unwrap().depth, 150);
        assert_eq!(nav.get_ancestors("n149").len(), 149);
        assert_eq!(nav.get_common_ancestor("n149", "n0").unwrap().id, "n0");
        assert_eq!(nav.get_hierarchy_distance("n149", "n0"), Some(149));
        assert!(nav.is_ancestor_of("n0", "n149"));
    }

    #[test]
    fn test_explicit_ancestor_cap() {
        let store = chain_fixture(5);
        let config = NavigatorConfig::default().with_max_ancestor_depth(2);
        let nav = HierarchyNavigator::with_config(&store, config);

        assert_eq!(ids(&nav.get_ancestors("n4")), vec!["n3", "n2"]);
    }

    #[test]
    fn test_root_siblings_are_other_roots() {
        let store = limb_fixture();
        let nav = HierarchyNavigator::new(&store);
        assert!(nav.get_siblings("root").is_empty());

        let store = RegionStore::from_regions([
            Region::new("body", "Body"),
            Region::new("stray", "Stray root"),
        ])
        .unwrap();
        let nav = HierarchyNavigator::new(&store);
        assert_eq!(ids(&nav.get_siblings("body")), vec!["stray"]);
        assert!(nav.get_siblings("missing").is_empty());
    }

    #[test]
    fn test_descendants_depth_bound() {
        let store = chain_fixture(15);
        let nav = HierarchyNavigator::new(&store);

        assert_eq!(ids(&nav.get_descendants_within("n0", 1)), vec!["n1"]);
        // Default bound is 10 levels.
        assert_eq!(nav.get_descendants("n0").len(), 10);

        let nav = HierarchyNavigator::with_config(
            &store,
            NavigatorConfig::default().with_max_descendant_depth(20),
        );
        assert_eq!(nav.get_descendants("n0").len(), 14);
    }

    #[test]
    fn test_descendants_direct_children_only() {
        let store = limb_fixture();
        let nav = HierarchyNavigator::new(&store);

        assert_eq!(ids(&nav.get_descendants_within("root", 1)), vec!["root.limb"]);
        assert_eq!(nav.get_descendants("root").len(), 3);
    }

    #[test]
    fn test_path_and_breadcrumbs() {
        let store = limb_fixture();
        let nav = HierarchyNavigator::new(&store);

        let path = nav.get_path("root").unwrap();
        assert_eq!(path.depth, 1);
        assert_eq!(path.target().unwrap().id, "root");
        assert!(nav.get_path("missing").is_none());

        let crumbs = nav.get_breadcrumbs("root.limb.left");
        let names: Vec<_> = crumbs.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Root", "Limb", "Left Limb"]);
        assert_eq!(crumbs[1].child_count, 2);
    }

    #[test]
    fn test_build_tree() {
        let store = chain_fixture(5);
        let nav = HierarchyNavigator::new(&store);

        let tree = nav.build_tree("n0").unwrap();
        assert_eq!(tree.node_count(), 5);
        assert!(tree.expanded);
        assert!(tree.children[0].expanded);
        assert!(!tree.children[0].children[0].expanded);

        let shallow = nav.build_tree_within("n0", 2).unwrap();
        assert_eq!(shallow.node_count(), 3);
        assert!(shallow.children[0].children[0].children.is_empty());

        assert!(nav.build_tree("missing").is_none());
    }

    #[test]
    fn test_build_tree_on_cycle_terminates() {
        let store = cyclic_fixture();
        let nav = HierarchyNavigator::new(&store);

        let tree = nav.build_tree("a").unwrap();
        assert_eq!(tree.node_count(), 2);
    }

    #[test]
    fn test_common_ancestor_edge_cases() {
        let store = limb_fixture();
        let nav = HierarchyNavigator::new(&store);

        // A region is its own common ancestor.
        assert_eq!(nav.get_common_ancestor("root.limb", "root.limb").unwrap().id, "root.limb");
        // Ancestor/descendant pair.
        assert_eq!(
            nav.get_common_ancestor("root.limb.left", "root.limb").unwrap().id,
            "root.limb"
        );
        assert_eq!(nav.get_hierarchy_distance("root.limb.left", "root"), Some(2));
        assert_eq!(nav.get_hierarchy_distance("root.limb", "root.limb"), Some(0));
        assert!(nav.get_common_ancestor("root", "missing").is_none());
        assert_eq!(nav.get_hierarchy_distance("root", "missing"), None);
    }

    #[test]
    fn test_disjoint_roots_have_no_common_ancestor() {
        let store = RegionStore::from_regions([
            Region::new("body", "Body"),
            Region::new("stray", "Stray root"),
        ])
        .unwrap();
        let nav = HierarchyNavigator::new(&store);

        assert!(nav.get_common_ancestor("body", "stray").is_none());
        assert_eq!(nav.get_hierarchy_distance("body", "stray"), None);
    }

    #[test]
    fn test_ancestor_predicates() {
        let store = limb_fixture();
        let nav = HierarchyNavigator::new(&store);

        assert!(nav.is_ancestor_of("root", "root.limb.left"));
        assert!(nav.is_ancestor_of("root.limb", "root.limb.left"));
        assert!(!nav.is_ancestor_of("root.limb.left", "root.limb"));
        assert!(!nav.is_ancestor_of("root.limb", "root.limb"));
        assert!(nav.is_descendant_of("root.limb.right", "root"));
        assert!(!nav.is_descendant_of("root", "root.limb.right"));
    }

    #[test]
    fn test_root_lookup() {
        let store = limb_fixture();
        let nav = HierarchyNavigator::new(&store);
        assert_eq!(nav.get_root().unwrap().id, "root");
    }
}
