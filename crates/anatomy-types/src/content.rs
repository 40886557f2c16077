//! Educational content references.
//!
//! Content bodies (articles, images, histology sets) live outside the
//! registry. A region only carries opaque pointers to them.

use std::fmt;

/// An opaque pointer to a piece of educational content.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ContentRef {
    /// Content identifier.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Location of the content body.
    pub path: String,
    /// Content kind (article, image, histology set...).
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub content_type: String,
}

impl ContentRef {
    /// Creates a content reference.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        path: impl Into<String>,
        content_type: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            path: path.into(),
            content_type: content_type.into(),
        }
    }
}

/// Topic a content reference is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum ContentCategory {
    /// Gross anatomy.
    Anatomy,
    /// Physiology.
    Physiology,
    /// Pathology.
    Pathology,
    /// Histology.
    Histology,
    /// Physical examination.
    PhysicalExam,
    /// Embryology (optional category).
    Embryology,
    /// Radiology (optional category).
    Radiology,
    /// Surgery (optional category).
    Surgery,
}

impl ContentCategory {
    /// The five categories every region carries.
    pub const PRIMARY: [ContentCategory; 5] = [
        ContentCategory::Anatomy,
        ContentCategory::Physiology,
        ContentCategory::Pathology,
        ContentCategory::Histology,
        ContentCategory::PhysicalExam,
    ];

    /// Returns true for the five primary categories.
    pub fn is_primary(self) -> bool {
        Self::PRIMARY.contains(&self)
    }

    /// Returns the camelCase key used in region data.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Anatomy => "anatomy",
            Self::Physiology => "physiology",
            Self::Pathology => "pathology",
            Self::Histology => "histology",
            Self::PhysicalExam => "physicalExam",
            Self::Embryology => "embryology",
            Self::Radiology => "radiology",
            Self::Surgery => "surgery",
        }
    }
}

impl fmt::Display for ContentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Content references of a region, partitioned by topic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct RegionContent {
    /// Gross anatomy.
    pub anatomy: Vec<ContentRef>,
    /// Physiology.
    pub physiology: Vec<ContentRef>,
    /// Pathology.
    pub pathology: Vec<ContentRef>,
    /// Histology.
    pub histology: Vec<ContentRef>,
    /// Physical examination.
    pub physical_exam: Vec<ContentRef>,
    /// Embryology.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub embryology: Option<Vec<ContentRef>>,
    /// Radiology.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub radiology: Option<Vec<ContentRef>>,
    /// Surgery.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub surgery: Option<Vec<ContentRef>>,
}

impl RegionContent {
    /// Creates an empty set of content lists.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the references filed under `category`.
    pub fn get(&self, category: ContentCategory) -> &[ContentRef] {
        match category {
            ContentCategory::Anatomy => &self.anatomy,
            ContentCategory::Physiology => &self.physiology,
            ContentCategory::Pathology => &self.pathology,
            ContentCategory::Histology => &self.histology,
            ContentCategory::PhysicalExam => &self.physical_exam,
            ContentCategory::Embryology => self.embryology.as_deref().unwrap_or_default(),
            ContentCategory::Radiology => self.radiology.as_deref().unwrap_or_default(),
            ContentCategory::Surgery => self.surgery.as_deref().unwrap_or_default(),
        }
    }

    /// Returns true if any of the five primary categories is non-empty.
    ///
    /// Optional categories do not count.
    pub fn has_primary_content(&self) -> bool {
        ContentCategory::PRIMARY
            .into_iter()
            .any(|c| !self.get(c).is_empty())
    }
}
