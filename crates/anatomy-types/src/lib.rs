//! # anatomy-types
//!
//! Type definitions for the anatomical region encyclopedia.
//!
//! This crate provides the data shapes shared by the region registry and
//! its consumers: regions, structure and content references, laterality,
//! viewer metadata and the read-only region summary.
//!
//! ## Features
//!
//! - `serde` (default): Enables serialization/deserialization support via serde.
//!   Disable this feature for zero-dependency usage.
//!
//! ## Usage
//!
//! ```rust
//! use anatomy_types::{Laterality, Region, RegionStructures, StructureCategory, StructureRef};
//!
//! let mut structures = RegionStructures::new();
//! structures.bones.push(StructureRef::new("radius-r", "Right radius"));
//!
//! let forearm = Region::new("body.upper-limb.right.forearm", "Right Forearm")
//!     .with_parent("body.upper-limb.right")
//!     .with_level(3)
//!     .with_laterality(Laterality::Right)
//!     .with_structures(structures);
//!
//! assert!(forearm.structures.has(StructureCategory::Bones));
//! assert_eq!(forearm.summary().structure_count, 1);
//! ```
//!
//! ## Without Serde
//!
//! ```toml
//! [dependencies]
//! anatomy-types = { version = "0.1", default-features = false }
//! ```

#![warn(missing_docs)]

mod content;
mod laterality;
mod region;
mod region_id;
mod structure;
mod viewer;

// Re-export all public types at crate root
pub use content::{ContentCategory, ContentRef, RegionContent};
pub use laterality::Laterality;
pub use region::{Region, RegionAnnotations, RegionSummary};
pub use region_id::{RegionId, ID_SEPARATOR};
pub use structure::{RegionStructures, StructureCategory, StructureRef};
pub use viewer::{CameraPosition, Vec3};
