//! Anatomical structure references.
//!
//! A region holds lightweight pointers to the bones, muscles, vessels and
//! other structures it contains. The registry never expands them; it only
//! counts them and tests categories for emptiness.

use std::fmt;

use crate::Laterality;

/// A lightweight reference to an anatomical structure.
///
/// # Examples
///
/// ```
/// use anatomy_types::{Laterality, StructureRef};
///
/// let radius = StructureRef::new("radius-r", "Right radius")
///     .with_ontology_id("FMA:23464")
///     .with_laterality(Laterality::Right);
///
/// assert_eq!(radius.laterality, Some(Laterality::Right));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct StructureRef {
    /// Structure identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// External ontology identifier (e.g. an FMA id).
    #[cfg_attr(
        feature = "serde",
        serde(default, alias = "fmaId", skip_serializing_if = "Option::is_none")
    )]
    pub ontology_id: Option<String>,
    /// Body side, when the structure is lateralized.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub laterality: Option<Laterality>,
}

impl StructureRef {
    /// Creates a structure reference with no ontology id or laterality.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ontology_id: None,
            laterality: None,
        }
    }

    /// Sets the ontology id.
    pub fn with_ontology_id(mut self, ontology_id: impl Into<String>) -> Self {
        self.ontology_id = Some(ontology_id.into());
        self
    }

    /// Sets the laterality.
    pub fn with_laterality(mut self, laterality: Laterality) -> Self {
        self.laterality = Some(laterality);
        self
    }
}

/// Anatomical category a structure reference is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum StructureCategory {
    /// Bones.
    Bones,
    /// Muscles.
    Muscles,
    /// Arteries and veins.
    Vessels,
    /// Nerves and plexuses.
    Nerves,
    /// Organs.
    Organs,
    /// Joints.
    Joints,
    /// Ligaments.
    Ligaments,
    /// Tendons.
    Tendons,
    /// Fascia (optional category).
    Fascia,
    /// Lymph nodes (optional category).
    LymphNodes,
}

impl StructureCategory {
    /// All categories, in declaration order.
    pub const ALL: [StructureCategory; 10] = [
        StructureCategory::Bones,
        StructureCategory::Muscles,
        StructureCategory::Vessels,
        StructureCategory::Nerves,
        StructureCategory::Organs,
        StructureCategory::Joints,
        StructureCategory::Ligaments,
        StructureCategory::Tendons,
        StructureCategory::Fascia,
        StructureCategory::LymphNodes,
    ];

    /// Returns the camelCase key used in region data.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bones => "bones",
            Self::Muscles => "muscles",
            Self::Vessels => "vessels",
            Self::Nerves => "nerves",
            Self::Organs => "organs",
            Self::Joints => "joints",
            Self::Ligaments => "ligaments",
            Self::Tendons => "tendons",
            Self::Fascia => "fascia",
            Self::LymphNodes => "lymphNodes",
        }
    }

    /// Parses a camelCase category key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == key)
    }
}

impl fmt::Display for StructureCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structure references of a region, partitioned by category.
///
/// `fascia` and `lymph_nodes` are optional in region data; an absent list
/// behaves exactly like an empty one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct RegionStructures {
    /// Bones.
    pub bones: Vec<StructureRef>,
    /// Muscles.
    pub muscles: Vec<StructureRef>,
    /// Vessels.
    pub vessels: Vec<StructureRef>,
    /// Nerves.
    pub nerves: Vec<StructureRef>,
    /// Organs.
    pub organs: Vec<StructureRef>,
    /// Joints.
    pub joints: Vec<StructureRef>,
    /// Ligaments.
    pub ligaments: Vec<StructureRef>,
    /// Tendons.
    pub tendons: Vec<StructureRef>,
    /// Fascia.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub fascia: Option<Vec<StructureRef>>,
    /// Lymph nodes.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub lymph_nodes: Option<Vec<StructureRef>>,
}

impl RegionStructures {
    /// Creates an empty set of structure lists.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the references filed under `category`.
    pub fn get(&self, category: StructureCategory) -> &[StructureRef] {
        match category {
            StructureCategory::Bones => &self.bones,
            StructureCategory::Muscles => &self.muscles,
            StructureCategory::Vessels => &self.vessels,
            StructureCategory::Nerves => &self.nerves,
            StructureCategory::Organs => &self.organs,
            StructureCategory::Joints => &self.joints,
            StructureCategory::Ligaments => &self.ligaments,
            StructureCategory::Tendons => &self.tendons,
            StructureCategory::Fascia => self.fascia.as_deref().unwrap_or_default(),
            StructureCategory::LymphNodes => self.lymph_nodes.as_deref().unwrap_or_default(),
        }
    }

    /// Files a structure under `category`, creating optional lists on demand.
    pub fn push(&mut self, category: StructureCategory, structure: StructureRef) {
        let list = match category {
            StructureCategory::Bones => &mut self.bones,
            StructureCategory::Muscles => &mut self.muscles,
            StructureCategory::Vessels => &mut self.vessels,
            StructureCategory::Nerves => &mut self.nerves,
            StructureCategory::Organs => &mut self.organs,
            StructureCategory::Joints => &mut self.joints,
            StructureCategory::Ligaments => &mut self.ligaments,
            StructureCategory::Tendons => &mut self.tendons,
            StructureCategory::Fascia => self.fascia.get_or_insert_with(Vec::new),
            StructureCategory::LymphNodes => self.lymph_nodes.get_or_insert_with(Vec::new),
        };
        list.push(structure);
    }

    /// Returns true if at least one structure is filed under `category`.
    pub fn has(&self, category: StructureCategory) -> bool {
        !self.get(category).is_empty()
    }

    /// Total number of structure references across every category.
    pub fn total(&self) -> usize {
        StructureCategory::ALL
            .into_iter()
            .map(|c| self.get(c).len())
            .sum()
    }

    /// Iterates every structure reference, category by category.
    pub fn iter(&self) -> impl Iterator<Item = (StructureCategory, &StructureRef)> {
        StructureCategory::ALL
            .into_iter()
            .flat_map(move |c| self.get(c).iter().map(move |s| (c, s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_includes_optional_categories() {
        let mut structures = RegionStructures::new();
        structures.bones.push(StructureRef::new("radius", "Radius"));
        structures.nerves.push(StructureRef::new("median", "Median nerve"));
        assert_eq!(structures.total(), 2);

        structures.lymph_nodes = Some(vec![StructureRef::new("cubital", "Cubital nodes")]);
        structures.fascia = Some(vec![]);
        assert_eq!(structures.total(), 3);
        assert!(structures.has(StructureCategory::LymphNodes));
        assert!(!structures.has(StructureCategory::Fascia));
    }

    #[test]
    fn test_push_files_by_category() {
        let mut structures = RegionStructures::new();
        structures.push(StructureCategory::Muscles, StructureRef::new("biceps", "Biceps brachii"));
        structures.push(StructureCategory::LymphNodes, StructureRef::new("axillary", "Axillary nodes"));

        assert_eq!(structures.muscles[0].id, "biceps");
        assert_eq!(structures.get(StructureCategory::LymphNodes).len(), 1);
        assert!(structures.fascia.is_none());
        assert_eq!(structures.total(), 2);
    }

    #[test]
    fn test_category_keys() {
        for category in StructureCategory::ALL {
            assert_eq!(StructureCategory::from_key(category.as_str()), Some(category));
        }
        assert_eq!(StructureCategory::from_key("lymph_nodes"), None);
    }

    #[test]
    fn test_iter_tags_category() {
        let mut structures = RegionStructures::new();
        structures.joints.push(StructureRef::new("elbow", "Elbow joint"));
        let collected: Vec<_> = structures.iter().map(|(c, s)| (c, s.id.as_str())).collect();
        assert_eq!(collected, vec![(StructureCategory::Joints, "elbow")]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_accepts_fma_alias_and_missing_lists() {
        let json = r#"{
            "bones": [{ "id": "ulna-l", "name": "Left ulna", "fmaId": "FMA:23466", "laterality": "left" }],
            "lymphNodes": []
        }"#;
        let structures: RegionStructures = serde_json::from_str(json).unwrap();
        assert_eq!(structures.bones[0].ontology_id.as_deref(), Some("FMA:23466"));
        assert_eq!(structures.bones[0].laterality, Some(Laterality::Left));
        assert!(structures.muscles.is_empty());
        assert_eq!(structures.lymph_nodes, Some(vec![]));
        assert_eq!(structures.fascia, None);
    }
}
