//! # anatomy-registry
//!
//! In-memory region registry and hierarchy navigation for the anatomical
//! encyclopedia.
//!
//! Regions are loaded once, from JSON files or the built-in
//! [`catalog`], into a read-only [`RegionStore`]. A [`HierarchyNavigator`]
//! borrows the store and answers structural questions: parents, children,
//! ancestors, siblings, contralateral counterparts, paths, tree views,
//! common ancestors, faceted search and statistics.
//!
//! Navigation is lenient and never fails on broken links.
//! [`HierarchyNavigator::validate_hierarchy`] is the strict counterpart and
//! reports every structural problem in the data.
//!
//! ## Features
//!
//! - `parallel` (default): Parses region files of a directory in parallel
//!   with rayon.
//!
//! ## Usage
//!
//! ```rust
//! use anatomy_registry::{catalog, HierarchyNavigator, SearchOptions};
//! use anatomy_registry::anatomy_types::Laterality;
//!
//! let store = catalog::standard_body().unwrap();
//! let nav = HierarchyNavigator::new(&store);
//!
//! let path = nav.get_path("body.upper-limb.right.forearm").unwrap();
//! assert_eq!(path.depth, 4);
//!
//! let hits = nav.search(&SearchOptions::new().query("forearm").laterality(Laterality::Left));
//! assert_eq!(hits[0].id, "body.upper-limb.left.forearm");
//!
//! assert!(nav.validate_hierarchy().is_empty());
//! ```

#![warn(missing_docs)]

pub mod catalog;
pub mod loader;
pub mod navigator;
pub mod search;
pub mod store;
pub mod traversal;
pub mod types;
pub mod validation;

mod property_tests;
#[cfg(test)]
mod test_support;

pub use loader::{
    discover_region_files, load_regions_dir, load_regions_json, load_store, regions_from_json_str,
};
pub use navigator::{HierarchyNavigator, RegionPath, RegionTreeNode};
pub use search::{HierarchyStatistics, SearchOptions};
pub use store::RegionStore;
pub use traversal::{bounded_walk, Direction, Walk};
pub use types::{LoadConfig, NavigatorConfig, RegistryError, RegistryResult};
pub use validation::{IssueKind, ValidationIssue};

// Re-export anatomy-types for convenience
pub use anatomy_types;
