//! Bundle directory persistence: write/read/verify [`ArtifactBundleV1`].
//!
//! # Directory layout
//!
//! ```text
//! <dir>/
//!   bundle_manifest.json   canonical JSON, full artifact listing
//!   bundle_digest.txt      ASCII digest string ("sha256:...")
//!   graph.json             artifact files, one per manifest entry
//!   ...
//! ```
//!
//! The directory path is never part of any hash surface. The manifest's
//! declared list is the source of truth: missing declared files and extra
//! undeclared files are both errors.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use waypoint_kernel::proof::canon::CanonError;
use waypoint_kernel::proof::hash::ContentHash;

use crate::bundle::{assemble, verify_bundle, ArtifactBundleV1, BundleArtifact, BundleVerifyError};

const MANIFEST_FILENAME: &str = "bundle_manifest.json";
const DIGEST_FILENAME: &str = "bundle_digest.txt";
const METADATA_FILENAMES: &[&str] = &[MANIFEST_FILENAME, DIGEST_FILENAME];
const TEMP_PREFIX: &str = ".tmp_";

#[derive(Debug, thiserror::Error)]
pub enum BundleDirError {
    #[error("I/O error: {detail}")]
    Io { detail: String },
    #[error("output directory is not empty: {path}")]
    DirNotEmpty { path: String },
    #[error("missing metadata file: {filename}")]
    MissingMetadata { filename: String },
    #[error("missing artifact: {name}")]
    MissingArtifact { name: String },
    #[error("undeclared extra file: {name}")]
    ExtraFile { name: String },
    #[error("manifest invalid: {detail}")]
    ManifestInvalid { detail: String },
    #[error("digest mismatch: stored={stored}, recomputed={recomputed}")]
    DigestMismatch { stored: String, recomputed: String },
    #[error("canonical JSON error: {0}")]
    Canon(#[from] CanonError),
    #[error("verify error: {0}")]
    Verify(#[from] BundleVerifyError),
}

/// Write `bundle` into `dir`, creating it if needed.
///
/// `dir` must be absent or empty: any file already there would be an
/// undeclared extra that [`read_bundle_dir`] rejects.
///
/// # Errors
///
/// Returns [`BundleDirError::DirNotEmpty`] if `dir` has any entry, and
/// [`BundleDirError::Io`] on any filesystem failure.
pub fn write_bundle_dir(bundle: &ArtifactBundleV1, dir: &Path) -> Result<(), BundleDirError> {
    std::fs::create_dir_all(dir).map_err(|e| BundleDirError::Io {
        detail: format!("create_dir_all {}: {e}", dir.display()),
    })?;
    let mut entries = std::fs::read_dir(dir).map_err(|e| BundleDirError::Io {
        detail: format!("read_dir {}: {e}", dir.display()),
    })?;
    if entries.next().is_some() {
        return Err(BundleDirError::DirNotEmpty {
            path: dir.display().to_string(),
        });
    }

    for artifact in bundle.artifacts.values() {
        write_atomic(dir, &artifact.name, &artifact.content)?;
    }
    write_atomic(dir, MANIFEST_FILENAME, &bundle.manifest)?;
    write_atomic(dir, DIGEST_FILENAME, bundle.digest.as_str().as_bytes())?;
    tracing::debug!(
        dir = %dir.display(),
        artifacts = bundle.artifacts.len(),
        digest = %bundle.digest,
        "bundle written"
    );
    Ok(())
}

/// Read a bundle directory back into memory.
///
/// Artifact hashes are taken from the manifest, not recomputed; run
/// [`verify_bundle_dir`] to check content against them.
///
/// # Errors
///
/// Returns [`BundleDirError`] if metadata is missing or malformed, a
/// declared file is absent, an undeclared file is present, or the stored
/// digest disagrees with the manifest.
pub fn read_bundle_dir(dir: &Path) -> Result<ArtifactBundleV1, BundleDirError> {
    let manifest_bytes = read_required(dir, MANIFEST_FILENAME)?;
    let digest_bytes = read_required(dir, DIGEST_FILENAME)?;

    let manifest: serde_json::Value =
        serde_json::from_slice(&manifest_bytes).map_err(|e| BundleDirError::ManifestInvalid {
            detail: e.to_string(),
        })?;
    let schema_version = manifest["schema_version"].as_str().unwrap_or("");
    if schema_version != "bundle.v1" {
        return Err(BundleDirError::ManifestInvalid {
            detail: format!("unsupported schema_version {schema_version:?}"),
        });
    }
    let entries = manifest["artifacts"]
        .as_array()
        .ok_or_else(|| BundleDirError::ManifestInvalid {
            detail: "\"artifacts\" is not an array".into(),
        })?;

    let mut artifacts = BTreeMap::new();
    for entry in entries {
        let artifact = read_declared_artifact(dir, entry)?;
        artifacts.insert(artifact.name.clone(), artifact);
    }

    for name in list_files(dir)? {
        if !artifacts.contains_key(&name) && !METADATA_FILENAMES.contains(&name.as_str()) {
            return Err(BundleDirError::ExtraFile { name });
        }
    }

    let bundle = assemble(artifacts)?;
    if bundle.manifest != manifest_bytes {
        return Err(BundleDirError::ManifestInvalid {
            detail: "manifest is not in canonical form".into(),
        });
    }
    let stored = String::from_utf8_lossy(&digest_bytes).trim().to_string();
    if stored != bundle.digest.as_str() {
        return Err(BundleDirError::DigestMismatch {
            stored,
            recomputed: bundle.digest.as_str().to_string(),
        });
    }
    Ok(bundle)
}

/// Read a bundle directory, then run [`verify_bundle`] on it.
///
/// # Errors
///
/// Returns [`BundleDirError`] on read failure or integrity mismatch.
pub fn verify_bundle_dir(dir: &Path) -> Result<(), BundleDirError> {
    let bundle = read_bundle_dir(dir)?;
    verify_bundle(&bundle)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

fn read_declared_artifact(
    dir: &Path,
    entry: &serde_json::Value,
) -> Result<BundleArtifact, BundleDirError> {
    let name = entry["name"]
        .as_str()
        .ok_or_else(|| BundleDirError::ManifestInvalid {
            detail: "entry without \"name\"".into(),
        })?
        .to_string();
    if name.contains(['/', '\\']) || METADATA_FILENAMES.contains(&name.as_str()) {
        return Err(BundleDirError::ManifestInvalid {
            detail: format!("reserved or nested artifact name {name:?}"),
        });
    }
    let content_hash = entry["content_hash"]
        .as_str()
        .and_then(ContentHash::parse)
        .ok_or_else(|| BundleDirError::ManifestInvalid {
            detail: format!("missing or malformed content_hash for {name}"),
        })?;
    let normative = entry["normative"]
        .as_bool()
        .ok_or_else(|| BundleDirError::ManifestInvalid {
            detail: format!("missing \"normative\" for {name}"),
        })?;
    let content = std::fs::read(dir.join(&name))
        .map_err(|_| BundleDirError::MissingArtifact { name: name.clone() })?;

    Ok(BundleArtifact {
        name,
        content,
        content_hash,
        normative,
    })
}

/// Write via temp file + rename.
fn write_atomic(dir: &Path, filename: &str, content: &[u8]) -> Result<(), BundleDirError> {
    let path = dir.join(filename);
    let temp_path = dir.join(format!("{TEMP_PREFIX}{filename}"));
    std::fs::write(&temp_path, content).map_err(|e| BundleDirError::Io {
        detail: format!("write {}: {e}", temp_path.display()),
    })?;
    std::fs::rename(&temp_path, &path).map_err(|e| BundleDirError::Io {
        detail: format!("rename {} to {}: {e}", temp_path.display(), path.display()),
    })
}

fn read_required(dir: &Path, filename: &str) -> Result<Vec<u8>, BundleDirError> {
    std::fs::read(dir.join(filename)).map_err(|_| BundleDirError::MissingMetadata {
        filename: filename.to_string(),
    })
}

/// Regular files in `dir`, skipping leftover temp files.
fn list_files(dir: &Path) -> Result<BTreeSet<String>, BundleDirError> {
    let io = |e: std::io::Error| BundleDirError::Io {
        detail: format!("read_dir {}: {e}", dir.display()),
    };
    let mut files = BTreeSet::new();
    for entry in std::fs::read_dir(dir).map_err(io)? {
        let entry = entry.map_err(io)?;
        if !entry.file_type().map_err(io)?.is_file() {
            continue;
        }
        if let Some(name) = entry.file_name().to_str() {
            if !name.starts_with(TEMP_PREFIX) {
                files.insert(name.to_string());
            }
        }
    }
    Ok(files)
}
