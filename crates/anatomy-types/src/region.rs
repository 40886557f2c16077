//! Anatomical region type.
//!
//! This module provides the `Region` struct, the node type of the region
//! hierarchy, together with the `RegionSummary` view handed to presentation
//! layers.

use crate::{CameraPosition, Laterality, RegionContent, RegionId, RegionStructures};

/// Free-text clinical and surface annotations attached to a region.
///
/// Opaque to hierarchy logic; carried so a loaded region round-trips intact.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct RegionAnnotations {
    /// Clinical significance notes.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Vec::is_empty"))]
    pub clinical_significance: Vec<String>,
    /// Surface landmarks.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Vec::is_empty"))]
    pub landmarks: Vec<String>,
    /// Dermatomes covering the region.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Vec::is_empty"))]
    pub dermatomes: Vec<String>,
    /// Myotomes acting in the region.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Vec::is_empty"))]
    pub myotomes: Vec<String>,
    /// Arterial supply and venous drainage notes.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Vec::is_empty"))]
    pub vascular_supply: Vec<String>,
    /// Innervation notes.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Vec::is_empty"))]
    pub innervation: Vec<String>,
}

impl RegionAnnotations {
    /// Returns true if no annotation is present.
    pub fn is_empty(&self) -> bool {
        self.clinical_significance.is_empty()
            && self.landmarks.is_empty()
            && self.dermatomes.is_empty()
            && self.myotomes.is_empty()
            && self.vascular_supply.is_empty()
            && self.innervation.is_empty()
    }
}

/// A named anatomical region, one node of the region hierarchy.
///
/// Regions are created once when a store is built and never mutated
/// afterwards. Parent, child and contralateral links are plain ids; nothing
/// guarantees they resolve until the store has been validated.
///
/// # Examples
///
/// ```
/// use anatomy_types::{Laterality, Region};
///
/// let forearm = Region::new("body.upper-limb.left.forearm", "Left Forearm")
///     .with_parent("body.upper-limb.left")
///     .with_level(3)
///     .with_laterality(Laterality::Left)
///     .with_contralateral("body.upper-limb.right.forearm");
///
/// assert!(!forearm.is_root());
/// assert!(forearm.is_leaf());
/// assert_eq!(forearm.summary().child_count, 0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Region {
    /// Unique hierarchical identifier.
    pub id: RegionId,
    /// Display name.
    pub name: String,
    /// Latin (Terminologia Anatomica) name.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub latin_name: Option<String>,
    /// Alternate names and synonyms.
    #[cfg_attr(feature = "serde", serde(default, alias = "alternateNames"))]
    pub alternative_names: Vec<String>,
    /// External ontology identifiers (e.g. FMA ids).
    #[cfg_attr(feature = "serde", serde(default, alias = "fmaIds"))]
    pub ontology_ids: Vec<String>,
    /// Parent region, `None` for the root.
    #[cfg_attr(feature = "serde", serde(default, alias = "parentRegion"))]
    pub parent_id: Option<RegionId>,
    /// Child regions in display order.
    #[cfg_attr(feature = "serde", serde(default, alias = "childRegions"))]
    pub child_ids: Vec<RegionId>,
    /// Number of ancestors (root = 0).
    pub level: u32,
    /// Body side.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub laterality: Option<Laterality>,
    /// Mirror-image region on the opposite side.
    #[cfg_attr(
        feature = "serde",
        serde(default, alias = "contralateralRegion", skip_serializing_if = "Option::is_none")
    )]
    pub contralateral_id: Option<RegionId>,
    /// Structure references by category.
    #[cfg_attr(feature = "serde", serde(default))]
    pub structures: RegionStructures,
    /// Content references by topic.
    #[cfg_attr(feature = "serde", serde(default))]
    pub content: RegionContent,
    /// Viewer mesh ids.
    #[cfg_attr(feature = "serde", serde(default))]
    pub mesh_ids: Vec<String>,
    /// Viewer camera pose.
    #[cfg_attr(feature = "serde", serde(default))]
    pub default_camera: CameraPosition,
    /// Short description.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub description: Option<String>,
    /// Clinical and surface annotations.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub annotations: RegionAnnotations,
}

impl Region {
    /// Creates a root-level region with no links and empty payload.
    pub fn new(id: impl Into<RegionId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            latin_name: None,
            alternative_names: Vec::new(),
            ontology_ids: Vec::new(),
            parent_id: None,
            child_ids: Vec::new(),
            level: 0,
            laterality: None,
            contralateral_id: None,
            structures: RegionStructures::default(),
            content: RegionContent::default(),
            mesh_ids: Vec::new(),
            default_camera: CameraPosition::default(),
            description: None,
            annotations: RegionAnnotations::default(),
        }
    }

    /// Sets the Latin name.
    pub fn with_latin_name(mut self, latin_name: impl Into<String>) -> Self {
        self.latin_name = Some(latin_name.into());
        self
    }

    /// Appends alternate names.
    pub fn with_alternative_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.alternative_names.extend(names.into_iter().map(Into::into));
        self
    }

    /// Appends an ontology id.
    pub fn with_ontology_id(mut self, ontology_id: impl Into<String>) -> Self {
        self.ontology_ids.push(ontology_id.into());
        self
    }

    /// Sets the parent id.
    pub fn with_parent(mut self, parent_id: impl Into<RegionId>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    /// Appends child ids, preserving order.
    pub fn with_children<I, S>(mut self, child_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<RegionId>,
    {
        self.child_ids.extend(child_ids.into_iter().map(Into::into));
        self
    }

    /// Sets the hierarchy level.
    pub fn with_level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }

    /// Sets the laterality.
    pub fn with_laterality(mut self, laterality: Laterality) -> Self {
        self.laterality = Some(laterality);
        self
    }

    /// Sets the contralateral region id.
    pub fn with_contralateral(mut self, contralateral_id: impl Into<RegionId>) -> Self {
        self.contralateral_id = Some(contralateral_id.into());
        self
    }

    /// Replaces the structure lists.
    pub fn with_structures(mut self, structures: RegionStructures) -> Self {
        self.structures = structures;
        self
    }

    /// Replaces the content lists.
    pub fn with_content(mut self, content: RegionContent) -> Self {
        self.content = content;
        self
    }

    /// Appends a mesh id.
    pub fn with_mesh_id(mut self, mesh_id: impl Into<String>) -> Self {
        self.mesh_ids.push(mesh_id.into());
        self
    }

    /// Sets the camera pose.
    pub fn with_camera(mut self, camera: CameraPosition) -> Self {
        self.default_camera = camera;
        self
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns true if this region declares no parent.
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    /// Returns true if this region declares no children.
    pub fn is_leaf(&self) -> bool {
        self.child_ids.is_empty()
    }

    /// Number of structure references across all categories.
    pub fn structure_count(&self) -> usize {
        self.structures.total()
    }

    /// Returns true if any primary content category is non-empty.
    pub fn has_content(&self) -> bool {
        self.content.has_primary_content()
    }

    /// Case-insensitive substring match over name, Latin name, alternate
    /// names and id.
    ///
    /// `needle_lower` must already be lowercase.
    pub fn matches_text(&self, needle_lower: &str) -> bool {
        let hit = |s: &str| s.to_lowercase().contains(needle_lower);
        hit(&self.name)
            || self.latin_name.as_deref().is_some_and(hit)
            || self.alternative_names.iter().any(|n| hit(n.as_str()))
            || hit(&self.id)
    }

    /// Builds the read-only summary of this region.
    pub fn summary(&self) -> RegionSummary {
        RegionSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            parent_id: self.parent_id.clone(),
            child_count: self.child_ids.len(),
            structure_count: self.structure_count(),
            has_content: self.has_content(),
            level: self.level,
            laterality: self.laterality,
        }
    }
}

/// Read-only view of a region for breadcrumbs, tree browsers and lists.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RegionSummary {
    /// Region id.
    pub id: RegionId,
    /// Display name.
    pub name: String,
    /// Parent id, `None` for the root.
    pub parent_id: Option<RegionId>,
    /// Number of declared children.
    pub child_count: usize,
    /// Number of structure references.
    pub structure_count: usize,
    /// Whether any primary content is attached.
    pub has_content: bool,
    /// Hierarchy level.
    pub level: u32,
    /// Body side.
    pub laterality: Option<Laterality>,
}

impl From<&Region> for RegionSummary {
    fn from(region: &Region) -> Self {
        region.summary()
    }
}
