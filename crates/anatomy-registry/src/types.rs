//! Registry-specific error and configuration types.

use thiserror::Error;

/// Errors that can occur while building or loading a region store.
///
/// Lookups and validation never produce these: a missing region is an
/// absent result, and an inconsistent hierarchy is a list of
/// [`ValidationIssue`](crate::ValidationIssue)s.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// I/O error reading region data.
    #[error("IO error reading region data: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// Two regions share the same id.
    #[error("Duplicate region id: {id}")]
    DuplicateRegionId {
        /// The id that appeared more than once.
        id: String,
    },

    /// File not found.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Directory not found.
    #[error("Directory not found: {path}")]
    DirectoryNotFound {
        /// The path that was not found.
        path: String,
    },
}

/// Result type for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Default bound on downward walks.
pub const DEFAULT_MAX_DESCENDANT_DEPTH: usize = 10;

/// Default number of tree levels marked as expanded.
pub const DEFAULT_EXPANDED_LEVELS: usize = 2;

/// Configuration for hierarchy navigation.
///
/// Every walk carries a visited-set, so traversals stay finite on corrupt,
/// cyclic data whatever the bounds. A parent chain is a single path, so
/// upward walks are unbounded unless a cap is set explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigatorConfig {
    /// Cap on parent links followed by upward walks; `None` follows the
    /// whole chain.
    pub max_ancestor_depth: Option<usize>,
    /// Default depth bound for `get_descendants` and `build_tree`.
    pub max_descendant_depth: usize,
    /// Number of tree levels (from the requested node) marked as expanded.
    pub expanded_levels: usize,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            max_ancestor_depth: None,
            max_descendant_depth: DEFAULT_MAX_DESCENDANT_DEPTH,
            expanded_levels: DEFAULT_EXPANDED_LEVELS,
        }
    }
}

impl NavigatorConfig {
    /// Sets the default descendant depth bound.
    pub fn with_max_descendant_depth(mut self, depth: usize) -> Self {
        self.max_descendant_depth = depth;
        self
    }

    /// Caps upward walks at `depth` parent links.
    pub fn with_max_ancestor_depth(mut self, depth: usize) -> Self {
        self.max_ancestor_depth = Some(depth);
        self
    }

    /// Sets how many tree levels are marked as expanded.
    pub fn with_expanded_levels(mut self, levels: usize) -> Self {
        self.expanded_levels = levels;
        self
    }
}

/// Configuration for bulk loading region data.
#[derive(Debug, Clone)]
pub struct LoadConfig {
    /// Run hierarchy validation after loading and log every issue found.
    pub validate_on_load: bool,
    /// Parse multiple files in parallel (requires the `parallel` feature).
    pub parallel: bool,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            validate_on_load: true,
            parallel: true,
        }
    }
}

impl LoadConfig {
    /// Creates a config that skips load-time validation.
    pub fn without_validation() -> Self {
        Self {
            validate_on_load: false,
            ..Self::default()
        }
    }

    /// Creates a config that parses files one at a time.
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }
}
