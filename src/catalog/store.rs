use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::catalog::errors::CatalogError;
use crate::catalog::record::Catalog;

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> CatalogError + '_ {
    move |source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Pretty-printed JSON form of the catalog, byte-stable for equal catalogs.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json(catalog: &Catalog) -> Result<String, CatalogError> {
    Ok(serde_json::to_string_pretty(catalog)?)
}

/// Write the catalog to `path`, replacing any previous file.
///
/// The JSON goes to a sibling temporary file first and is renamed into place,
/// so readers never observe a half-written catalog.
///
/// # Errors
///
/// Returns an error if serialization or any filesystem step fails.
pub fn write_catalog(path: &Path, catalog: &Catalog) -> Result<(), CatalogError> {
    let json = to_json(catalog)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_error(parent))?;
    }

    let staging = staging_path(path);
    debug!("Writing catalog to staging file {}", staging.display());
    fs::write(&staging, json).map_err(io_error(&staging))?;
    if let Err(source) = fs::rename(&staging, path) {
        let _ = fs::remove_file(&staging);
        return Err(CatalogError::Io {
            path: path.to_path_buf(),
            source,
        });
    }

    info!("Puzzles saved to {}", path.display());
    Ok(())
}

/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid catalog.
pub fn read_catalog(path: &Path) -> Result<Catalog, CatalogError> {
    debug!("Reading catalog from {}", path.display());
    let contents = fs::read_to_string(path).map_err(io_error(path))?;
    let catalog: Catalog = serde_json::from_str(&contents)?;
    debug!("Read {} puzzles from {}", catalog.len(), path.display());
    Ok(catalog)
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
