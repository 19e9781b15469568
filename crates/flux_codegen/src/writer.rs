//! # Output Writer
//!
//! Persists generated dispatch types under the generated-sources root,
//! mirroring the package path as directories.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::emitter::GeneratedFile;
use crate::error::Result;

/// Write one generated file under `output_root`, creating the
/// package-mirrored directory chain as needed. Re-running over an existing
/// tree is not an error; an existing file of the same name is overwritten.
pub fn write(file: &GeneratedFile, output_root: &Path) -> Result<PathBuf> {
    let dir = package_dir(output_root, &file.package);
    fs::create_dir_all(&dir)?;

    let path = dir.join(format!("{}.rs", file.type_name));
    fs::write(&path, &file.source)?;

    debug!(path = %path.display(), "wrote generated source");
    Ok(path)
}

/// Map a `::`-separated package onto a directory under `output_root`.
fn package_dir(output_root: &Path, package: &str) -> PathBuf {
    let mut dir = output_root.to_path_buf();
    for segment in package.split("::").filter(|s| !s.is_empty()) {
        dir.push(segment);
    }
    dir
}
