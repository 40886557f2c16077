//! Structural validation of the region hierarchy.
//!
//! Validation is the strict counterpart of the lenient lookups in
//! [`navigator`](crate::navigator): every dangling or inconsistent link is
//! turned into a reported finding. It never fails and never stops at the
//! first problem.

use std::collections::HashSet;

use anatomy_types::{Region, RegionId};
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::navigator::HierarchyNavigator;
use crate::traversal::{bounded_walk, Direction};

/// The invariant a region violates.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum IssueKind {
    /// `parent_id` does not resolve.
    #[error("Parent region {parent_id} not found")]
    MissingParent {
        /// The dangling parent id.
        parent_id: RegionId,
    },

    /// The parent exists but does not list this region as a child.
    #[error("Not listed in childIds of parent {parent_id}")]
    NotListedByParent {
        /// The parent id.
        parent_id: RegionId,
    },

    /// A child id does not resolve.
    #[error("Child region {child_id} not found")]
    MissingChild {
        /// The dangling child id.
        child_id: RegionId,
    },

    /// A listed child declares a different parent.
    #[error("Child region {child_id} declares parent {}", .declared_parent.as_deref().unwrap_or("none"))]
    ChildParentMismatch {
        /// The child id.
        child_id: RegionId,
        /// The parent the child actually declares.
        declared_parent: Option<RegionId>,
    },

    /// `contralateral_id` does not resolve.
    #[error("Contralateral region {contralateral_id} not found")]
    MissingContralateral {
        /// The dangling contralateral id.
        contralateral_id: RegionId,
    },

    /// The contralateral region does not point back.
    #[error("Asymmetric contralateral: {contralateral_id} points to {}", .back_reference.as_deref().unwrap_or("nothing"))]
    AsymmetricContralateral {
        /// The contralateral id.
        contralateral_id: RegionId,
        /// What the contralateral region points to instead.
        back_reference: Option<RegionId>,
    },

    /// Level is not the parent's level plus one.
    #[error("Level {level} does not match parent level {parent_level} + 1")]
    LevelMismatch {
        /// The region's declared level.
        level: u32,
        /// The parent's declared level.
        parent_level: u32,
    },

    /// A parentless region with a non-zero level.
    #[error("Root region has level {level}, expected 0")]
    RootLevelNonZero {
        /// The declared level.
        level: u32,
    },

    /// The store has regions but none of them is parentless.
    #[error("No root region found")]
    NoRoot,

    /// A parentless region other than the first root.
    #[error("Additional root region (first root is {first_root})")]
    ExtraRoot {
        /// Id of the first root in store order.
        first_root: RegionId,
    },

    /// Not reachable from any root through child links.
    #[error("Region not reachable from a root")]
    Unreachable,
}

/// One finding of [`HierarchyNavigator::validate_hierarchy`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationIssue {
    /// The offending region.
    pub region_id: RegionId,
    /// The violated invariant.
    pub kind: IssueKind,
    /// Human-readable description.
    pub issue: String,
}

impl ValidationIssue {
    fn new(region_id: &str, kind: IssueKind) -> Self {
        Self {
            region_id: region_id.to_string(),
            issue: kind.to_string(),
            kind,
        }
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.region_id, self.issue)
    }
}

impl<'a> HierarchyNavigator<'a> {
    /// Checks every structural invariant and reports every violation.
    ///
    /// Per region, in store order: parent existence, child back-references,
    /// contralateral symmetry, level arithmetic. Then store-wide: root count
    /// and reachability from the root. An empty result means the store is a
    /// well-formed tree.
    pub fn validate_hierarchy(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();

        for region in self.store().all() {
            self.check_parent(region, &mut issues);
            self.check_children(region, &mut issues);
            self.check_contralateral(region, &mut issues);
        }
        self.check_roots(&mut issues);

        debug!(
            regions = self.store().count(),
            issues = issues.len(),
            "validated region hierarchy"
        );
        issues
    }

    /// Returns true if [`validate_hierarchy`](Self::validate_hierarchy)
    /// reports nothing.
    pub fn is_well_formed(&self) -> bool {
        self.validate_hierarchy().is_empty()
    }

    fn check_parent(&self, region: &Region, issues: &mut Vec<ValidationIssue>) {
        let Some(parent_id) = region.parent_id.as_deref() else {
            if region.level != 0 {
                issues.push(ValidationIssue::new(
                    &region.id,
                    IssueKind::RootLevelNonZero {
                        level: region.level,
                    },
                ));
            }
            return;
        };

        let Some(parent) = self.store().get(parent_id) else {
            issues.push(ValidationIssue::new(
                &region.id,
                IssueKind::MissingParent {
                    parent_id: parent_id.to_string(),
                },
            ));
            return;
        };

        if !parent.child_ids.iter().any(|c| *c == region.id) {
            issues.push(ValidationIssue::new(
                &region.id,
                IssueKind::NotListedByParent {
                    parent_id: parent_id.to_string(),
                },
            ));
        }

        if parent.level.checked_add(1) != Some(region.level) {
            issues.push(ValidationIssue::new(
                &region.id,
                IssueKind::LevelMismatch {
                    level: region.level,
                    parent_level: parent.level,
                },
            ));
        }
    }

    fn check_children(&self, region: &Region, issues: &mut Vec<ValidationIssue>) {
        for child_id in &region.child_ids {
            match self.store().get(child_id) {
                None => issues.push(ValidationIssue::new(
                    &region.id,
                    IssueKind::MissingChild {
                        child_id: child_id.clone(),
                    },
                )),
                Some(child) if child.parent_id.as_deref() != Some(region.id.as_str()) => {
                    issues.push(ValidationIssue::new(
                        &region.id,
                        IssueKind::ChildParentMismatch {
                            child_id: child_id.clone(),
                            declared_parent: child.parent_id.clone(),
                        },
                    ))
                }
                Some(_) => {}
            }
        }
    }

    fn check_contralateral(&self, region: &Region, issues: &mut Vec<ValidationIssue>) {
        let Some(other_id) = region.contralateral_id.as_deref() else {
            return;
        };

        match self.store().get(other_id) {
            None => issues.push(ValidationIssue::new(
                &region.id,
                IssueKind::MissingContralateral {
                    contralateral_id: other_id.to_string(),
                },
            )),
            Some(other) if other.contralateral_id.as_deref() != Some(region.id.as_str()) => {
                issues.push(ValidationIssue::new(
                    &region.id,
                    IssueKind::AsymmetricContralateral {
                        contralateral_id: other_id.to_string(),
                        back_reference: other.contralateral_id.clone(),
                    },
                ))
            }
            Some(_) => {}
        }
    }

    fn check_roots(&self, issues: &mut Vec<ValidationIssue>) {
        let store = self.store();
        let mut roots = store.roots();

        let Some(first) = roots.next() else {
            if let Some(any) = store.all().first() {
                issues.push(ValidationIssue::new(&any.id, IssueKind::NoRoot));
            }
            return;
        };

        let mut reachable: HashSet<&str> = HashSet::new();
        for root in std::iter::once(first).chain(roots) {
            if root.id != first.id {
                issues.push(ValidationIssue::new(
                    &root.id,
                    IssueKind::ExtraRoot {
                        first_root: first.id.clone(),
                    },
                ));
            }
            reachable.insert(root.id.as_str());
            let walk = bounded_walk(store, root, Direction::Down, store.count());
            reachable.extend(walk.regions.into_iter().map(|r| r.id.as_str()));
        }

        for region in store.all() {
            if !reachable.contains(region.id.as_str()) {
                issues.push(ValidationIssue::new(&region.id, IssueKind::Unreachable));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::RegionStore;
    use crate::test_support::{cyclic_fixture, forearm_fixture, limb_fixture, limb_regions};
    use anatomy_types::Region;

    fn validate(regions: Vec<Region>) -> Vec<ValidationIssue> {
        let store = RegionStore::from_regions(regions).unwrap();
        HierarchyNavigator::new(&store).validate_hierarchy()
    }

    fn kinds_for<'i>(issues: &'i [ValidationIssue], id: &str) -> Vec<&'i IssueKind> {
        issues
            .iter()
            .filter(|i| i.region_id == id)
            .map(|i| &i.kind)
            .collect()
    }

    #[test]
    fn test_good_fixtures_are_clean() {
        let store = limb_fixture();
        assert!(HierarchyNavigator::new(&store).validate_hierarchy().is_empty());

        let store = forearm_fixture();
        assert!(HierarchyNavigator::new(&store).is_well_formed());
    }

    #[test]
    fn test_child_removed_from_parent_list() {
        let mut regions = limb_regions();
        regions[1].child_ids.retain(|c| c != "root.limb.left");

        let issues = validate(regions);
        assert_eq!(issues.len(), 2);
        assert_eq!(
            kinds_for(&issues, "root.limb.left"),
            vec![
                &IssueKind::NotListedByParent {
                    parent_id: "root.limb".to_string()
                },
                &IssueKind::Unreachable,
            ]
        );
    }

    #[test]
    fn test_level_mis_set() {
        let mut regions = limb_regions();
        regions[3].level = 5;

        let issues = validate(regions);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].region_id, "root.limb.right");
        assert_eq!(
            issues[0].kind,
            IssueKind::LevelMismatch {
                level: 5,
                parent_level: 1
            }
        );
        assert!(issues[0].issue.contains("Level 5"));
    }

    #[test]
    fn test_root_level_non_zero() {
        let mut regions = limb_regions();
        regions[0].level = 1;

        let issues = validate(regions);
        assert!(kinds_for(&issues, "root").contains(&&IssueKind::RootLevelNonZero { level: 1 }));
    }

    #[test]
    fn test_missing_parent_and_child() {
        let mut regions = limb_regions();
        regions[2].parent_id = Some("root.ghost".to_string());
        regions[0].child_ids.push("root.phantom".to_string());

        let issues = validate(regions);
        assert!(issues.iter().any(|i| i.region_id == "root.limb.left"
            && i.kind
                == IssueKind::MissingParent {
                    parent_id: "root.ghost".to_string()
                }));
        assert!(issues.iter().any(|i| i.region_id == "root"
            && i.kind
                == IssueKind::MissingChild {
                    child_id: "root.phantom".to_string()
                }));
        // The limb still lists the left side, which now points elsewhere.
        assert!(issues.iter().any(|i| i.region_id == "root.limb"
            && matches!(&i.kind, IssueKind::ChildParentMismatch { child_id, .. } if child_id == "root.limb.left")));
    }

    #[test]
    fn test_asymmetric_contralateral() {
        let mut regions = limb_regions();
        regions[3].contralateral_id = None;

        let issues = validate(regions);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].region_id, "root.limb.left");
        assert_eq!(
            issues[0].kind,
            IssueKind::AsymmetricContralateral {
                contralateral_id: "root.limb.right".to_string(),
                back_reference: None,
            }
        );
    }

    #[test]
    fn test_missing_contralateral() {
        let mut regions = limb_regions();
        regions[1].contralateral_id = Some("root.other-limb".to_string());

        let issues = validate(regions);
        assert_eq!(
            kinds_for(&issues, "root.limb"),
            vec![&IssueKind::MissingContralateral {
                contralateral_id: "root.other-limb".to_string()
            }]
        );
    }

    #[test]
    fn test_root_count() {
        let issues = validate(vec![Region::new("body", "Body"), Region::new("stray", "Stray")]);
        assert_eq!(
            kinds_for(&issues, "stray"),
            vec![&IssueKind::ExtraRoot {
                first_root: "body".to_string()
            }]
        );

        assert!(validate(vec![]).is_empty());
    }

    #[test]
    fn test_cycle_is_reported_not_looped() {
        let store = cyclic_fixture();
        let issues = HierarchyNavigator::new(&store).validate_hierarchy();

        assert!(issues.iter().any(|i| i.kind == IssueKind::NoRoot));
        assert!(!issues.is_empty());
    }

    #[test]
    fn test_detached_cycle_is_unreachable() {
        let mut regions = limb_regions();
        regions.push(Region::new("a", "A").with_parent("b").with_children(["b"]).with_level(2));
        regions.push(Region::new("b", "B").with_parent("a").with_children(["a"]).with_level(1));

        let issues = validate(regions);
        // A cycle cannot satisfy level arithmetic on both edges.
        assert_eq!(kinds_for(&issues, "a"), vec![&IssueKind::Unreachable]);
        assert_eq!(
            kinds_for(&issues, "b"),
            vec![
                &IssueKind::LevelMismatch {
                    level: 1,
                    parent_level: 2
                },
                &IssueKind::Unreachable,
            ]
        );
        assert!(issues
            .iter()
            .all(|i| i.region_id == "a" || i.region_id == "b"));
    }

    #[test]
    fn test_every_problem_is_reported() {
        let mut regions = limb_regions();
        regions[3].level = 7;
        regions[3].contralateral_id = Some("root.limb".to_string());

        let issues = validate(regions);
        // Level mismatch on the right side, asymmetric pair seen from both ends.
        assert_eq!(issues.len(), 3);
        assert_eq!(issues[0].to_string(), format!("root.limb.left: {}", issues[0].issue));
    }
}
