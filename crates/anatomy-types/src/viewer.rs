//! 3-D viewer metadata carried by regions.
//!
//! The registry treats these as opaque payload.

/// A point or direction in viewer space.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3 {
    /// X coordinate.
    pub x: f32,
    /// Y coordinate.
    pub y: f32,
    /// Z coordinate.
    pub z: f32,
}

impl Vec3 {
    /// Creates a vector.
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// Camera pose used when a region is focused in the viewer.
///
/// # Examples
///
/// ```
/// use anatomy_types::CameraPosition;
///
/// let anterior = CameraPosition::ANTERIOR;
/// assert_eq!(anterior.position.z, 5.0);
/// assert_eq!(anterior.zoom, 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CameraPosition {
    /// Camera location.
    pub position: Vec3,
    /// Point the camera looks at.
    pub target: Vec3,
    /// Zoom factor.
    pub zoom: f32,
}

impl CameraPosition {
    /// Whole-body view from the front.
    pub const ANTERIOR: Self = Self::looking_at_origin(Vec3::new(0.0, 0.0, 5.0));
    /// Whole-body view from behind.
    pub const POSTERIOR: Self = Self::looking_at_origin(Vec3::new(0.0, 0.0, -5.0));
    /// Whole-body view from the side.
    pub const LATERAL: Self = Self::looking_at_origin(Vec3::new(5.0, 0.0, 0.0));
    /// Whole-body view from above.
    pub const SUPERIOR: Self = Self::looking_at_origin(Vec3::new(0.0, 5.0, 0.0));
    /// Whole-body view from below.
    pub const INFERIOR: Self = Self::looking_at_origin(Vec3::new(0.0, -5.0, 0.0));

    /// Creates a camera pose.
    pub const fn new(position: Vec3, target: Vec3, zoom: f32) -> Self {
        Self {
            position,
            target,
            zoom,
        }
    }

    const fn looking_at_origin(position: Vec3) -> Self {
        Self::new(position, Vec3::new(0.0, 0.0, 0.0), 1.0)
    }
}

impl Default for CameraPosition {
    fn default() -> Self {
        Self::ANTERIOR
    }
}
