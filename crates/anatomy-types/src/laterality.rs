//! Laterality classification for regions and structures.

use std::fmt;

/// Body side classification of a region or structure.
///
/// # Examples
///
/// ```
/// use anatomy_types::Laterality;
///
/// assert_eq!(Laterality::from_code("left"), Some(Laterality::Left));
/// assert_eq!(Laterality::Left.opposite(), Some(Laterality::Right));
/// assert_eq!(Laterality::Midline.opposite(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Laterality {
    /// Left side of the body.
    Left,
    /// Right side of the body.
    Right,
    /// Present on both sides.
    Bilateral,
    /// On the sagittal midline.
    Midline,
}

impl Laterality {
    /// All laterality values, in declaration order.
    pub const ALL: [Laterality; 4] = [
        Laterality::Left,
        Laterality::Right,
        Laterality::Bilateral,
        Laterality::Midline,
    ];

    /// Parses the lowercase code used in region data.
    ///
    /// Returns `None` for unrecognized codes.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "left" => Some(Self::Left),
            "right" => Some(Self::Right),
            "bilateral" => Some(Self::Bilateral),
            "midline" => Some(Self::Midline),
            _ => None,
        }
    }

    /// Returns the lowercase code for this laterality.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Bilateral => "bilateral",
            Self::Midline => "midline",
        }
    }

    /// Returns the mirror-image side, if this laterality has one.
    pub fn opposite(self) -> Option<Self> {
        match self {
            Self::Left => Some(Self::Right),
            Self::Right => Some(Self::Left),
            Self::Bilateral | Self::Midline => None,
        }
    }
}

impl fmt::Display for Laterality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
