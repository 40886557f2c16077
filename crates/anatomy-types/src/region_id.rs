//! Region identifier type.
//!
//! Region ids are dot-separated hierarchical strings such as
//! `body.upper-limb.right.forearm`. By convention a parent id is a string
//! prefix of its children's ids, but nothing in the registry relies on that.

/// A region identifier.
///
/// # Examples
///
/// ```
/// use anatomy_types::RegionId;
///
/// let forearm: RegionId = "body.upper-limb.right.forearm".to_string();
/// assert!(forearm.starts_with("body.upper-limb"));
/// ```
pub type RegionId = String;

/// Id separator used by the hierarchical naming convention.
pub const ID_SEPARATOR: char = '.';
