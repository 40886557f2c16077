//! Property tests for navigation over randomly shaped hierarchies.
//!
//! Every generated store is a well-formed tree, so the lenient lookups and
//! the strict validator must agree with each other.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use proptest::sample::Index;

    use anatomy_types::Region;

    use crate::navigator::HierarchyNavigator;
    use crate::store::RegionStore;
    use crate::types::NavigatorConfig;

    /// Builds a tree where node `i + 1` hangs under `parents[i]` (some
    /// earlier node).
    fn tree_from_parents(parents: &[Index]) -> RegionStore {
        let mut regions = vec![Region::new("n0", "Node 0")];
        for (i, pick) in parents.iter().enumerate() {
            let id = format!("n{}", i + 1);
            let parent = pick.index(i + 1);
            let level = regions[parent].level + 1;
            regions[parent].child_ids.push(id.clone());
            let parent_id = regions[parent].id.clone();
            regions.push(
                Region::new(id, format!("Node {}", i + 1))
                    .with_parent(parent_id)
                    .with_level(level),
            );
        }
        RegionStore::from_regions(regions).unwrap()
    }

    fn tree() -> impl Strategy<Value = RegionStore> {
        prop::collection::vec(any::<Index>(), 0..40).prop_map(|parents| tree_from_parents(&parents))
    }

    proptest! {
        #[test]
        fn generated_trees_validate_clean(store in tree()) {
            let nav = HierarchyNavigator::new(&store);
            prop_assert!(nav.validate_hierarchy().is_empty());
        }

        #[test]
        fn path_and_ancestors_follow_level(store in tree()) {
            let nav = HierarchyNavigator::new(&store);
            for region in store.all() {
                let path = nav.get_path(&region.id).unwrap();
                prop_assert_eq!(path.depth, region.level as usize + 1);
                prop_assert_eq!(path.regions[0].id.as_str(), "n0");
                prop_assert_eq!(path.target().map(|r| r.id.as_str()), Some(region.id.as_str()));
                prop_assert_eq!(nav.get_ancestors(&region.id).len(), region.level as usize);
            }
        }

        #[test]
        fn parent_and_children_agree(store in tree()) {
            let nav = HierarchyNavigator::new(&store);
            for region in store.all() {
                for child in nav.get_children(&region.id) {
                    prop_assert_eq!(nav.get_parent(&child.id).map(|p| p.id.as_str()), Some(region.id.as_str()));
                }
                if let Some(parent) = nav.get_parent(&region.id) {
                    prop_assert!(nav.get_children(&parent.id).iter().any(|c| c.id == region.id));
                    prop_assert!(nav.is_ancestor_of(&parent.id, &region.id));
                    prop_assert!(!nav.is_ancestor_of(&region.id, &parent.id));
                    prop_assert!(nav.get_siblings(&region.id).iter().all(|s| s.id != region.id));
                }
            }
        }

        #[test]
        fn unbounded_descendants_cover_the_tree(store in tree()) {
            let config = NavigatorConfig::default().with_max_descendant_depth(store.count());
            let nav = HierarchyNavigator::with_config(&store, config);
            prop_assert_eq!(nav.get_descendants("n0").len(), store.count() - 1);
            prop_assert_eq!(nav.build_tree("n0").unwrap().node_count(), store.count());
        }

        #[test]
        fn common_ancestor_and_distance_are_symmetric(
            store in tree(),
            a in any::<Index>(),
            b in any::<Index>(),
        ) {
            let nav = HierarchyNavigator::new(&store);
            let a = &store.all()[a.index(store.count())].id;
            let b = &store.all()[b.index(store.count())].id;

            let ab = nav.get_common_ancestor(a, b).map(|r| r.id.clone());
            let ba = nav.get_common_ancestor(b, a).map(|r| r.id.clone());
            prop_assert_eq!(&ab, &ba);

            let lca = ab.unwrap();
            prop_assert!(lca == *a || nav.is_ancestor_of(&lca, a));
            prop_assert!(lca == *b || nav.is_ancestor_of(&lca, b));

            let distance = nav.get_hierarchy_distance(a, b);
            prop_assert_eq!(distance, nav.get_hierarchy_distance(b, a));
            prop_assert_eq!(nav.get_hierarchy_distance(a, a), Some(0));

            let level = |id: &str| store.get(id).unwrap().level as usize;
            prop_assert_eq!(distance, Some(level(a.as_str()) + level(b.as_str()) - 2 * level(lca.as_str())));
        }
    }
}
