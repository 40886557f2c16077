//! Region data discovery and bulk loading.
//!
//! Region records arrive as JSON arrays, either in one document or spread
//! over every `*.json` file of a directory. Loading is the only fallible
//! step; once a [`RegionStore`] is built it is read-only.

use std::fs;
use std::path::{Path, PathBuf};

use anatomy_types::Region;
use tracing::{info, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::navigator::HierarchyNavigator;
use crate::store::RegionStore;
use crate::types::{LoadConfig, RegistryError, RegistryResult};

/// Parses a JSON array of region records.
pub fn regions_from_json_str(json: &str) -> RegistryResult<Vec<Region>> {
    Ok(serde_json::from_str(json)?)
}

/// Reads a JSON document holding an array of region records.
pub fn load_regions_json<P: AsRef<Path>>(path: P) -> RegistryResult<Vec<Region>> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(RegistryError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let json = fs::read_to_string(path)?;
    regions_from_json_str(&json)
}

/// Lists the `*.json` files of a directory, sorted by file name.
///
/// The sort makes insertion order, and with it enumeration order,
/// independent of the platform's directory listing order.
pub fn discover_region_files<P: AsRef<Path>>(dir: P) -> RegistryResult<Vec<PathBuf>> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(RegistryError::DirectoryNotFound {
            path: dir.display().to_string(),
        });
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Loads every region file of a directory into one store.
pub fn load_regions_dir<P: AsRef<Path>>(dir: P, config: &LoadConfig) -> RegistryResult<RegionStore> {
    let dir = dir.as_ref();
    let files = discover_region_files(dir)?;
    info!("Loading regions from {} files in {}", files.len(), dir.display());

    let batches = parse_files(&files, config)?;
    build_store(batches.into_iter().flatten(), config)
}

/// Loads a store from either a single JSON file or a directory of them.
pub fn load_store<P: AsRef<Path>>(path: P, config: &LoadConfig) -> RegistryResult<RegionStore> {
    let path = path.as_ref();
    if path.is_dir() {
        return load_regions_dir(path, config);
    }

    info!("Loading regions from {}", path.display());
    let regions = load_regions_json(path)?;
    build_store(regions, config)
}

#[cfg(feature = "parallel")]
fn parse_files(files: &[PathBuf], config: &LoadConfig) -> RegistryResult<Vec<Vec<Region>>> {
    if config.parallel {
        files.par_iter().map(load_regions_json).collect()
    } else {
        files.iter().map(load_regions_json).collect()
    }
}

#[cfg(not(feature = "parallel"))]
fn parse_files(files: &[PathBuf], _config: &LoadConfig) -> RegistryResult<Vec<Vec<Region>>> {
    files.iter().map(load_regions_json).collect()
}

fn build_store(
    regions: impl IntoIterator<Item = Region>,
    config: &LoadConfig,
) -> RegistryResult<RegionStore> {
    let store = RegionStore::from_regions(regions)?;
    info!("Loaded {} regions", store.count());

    if config.validate_on_load {
        let issues = HierarchyNavigator::new(&store).validate_hierarchy();
        for issue in &issues {
            warn!("Region hierarchy issue: {}", issue);
        }
        if !issues.is_empty() {
            warn!("Region hierarchy has {} issues", issues.len());
        }
    }

    Ok(store)
}
