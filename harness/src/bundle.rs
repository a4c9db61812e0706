//! In-memory artifact bundle: the output of a harness run.
//!
//! No file I/O in this module (see [`crate::bundle_dir`]).
//!
//! # Normative vs observational artifacts
//!
//! Each artifact is tagged `normative` (participates in the bundle digest)
//! or observational (listed in the manifest but excluded from the digest).
//! `report.json` is observational: it restates facts that the normative
//! artifacts already commit to, in a form meant for people.
//!
//! The bundle digest is computed over the **digest basis**: a canonical
//! JSON projection of normative artifact hashes only.

use std::collections::BTreeMap;

use waypoint_kernel::proof::canon::{canonical_json_bytes, CanonError};
use waypoint_kernel::proof::hash::{canonical_hash, ContentHash, HashDomain};
use waypoint_search::{Path, SearchAuditV1, TerminationReasonV1};

/// Domain prefix for bundle artifact content hashing.
pub const DOMAIN_BUNDLE_ARTIFACT: HashDomain = HashDomain::BundleArtifact;
/// Domain prefix for bundle digest computation.
pub const DOMAIN_BUNDLE_DIGEST: HashDomain = HashDomain::BundleDigest;

/// A single artifact in the bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleArtifact {
    /// Logical filename (e.g., `"graph.json"`).
    pub name: String,
    pub content: Vec<u8>,
    /// `canonical_hash(DOMAIN_BUNDLE_ARTIFACT, content)`.
    pub content_hash: ContentHash,
    pub normative: bool,
}

/// A set of named artifacts plus the digest that commits to them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactBundleV1 {
    /// Artifacts indexed by logical name, in sorted order.
    pub artifacts: BTreeMap<String, BundleArtifact>,
    /// Canonical JSON listing all artifacts with normative flags.
    pub manifest: Vec<u8>,
    /// Canonical JSON listing normative artifact hashes only.
    pub digest_basis: Vec<u8>,
    /// `canonical_hash(DOMAIN_BUNDLE_DIGEST, digest_basis)`.
    pub digest: ContentHash,
}

impl ArtifactBundleV1 {
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&BundleArtifact> {
        self.artifacts.get(name)
    }
}

/// Input for bundle assembly: `(name, content, normative)`.
pub type ArtifactInput = (String, Vec<u8>, bool);

/// Build an [`ArtifactBundleV1`] from artifact inputs.
///
/// A later input with the same name replaces an earlier one.
///
/// # Errors
///
/// Returns [`CanonError`] if manifest serialization fails.
pub fn build_bundle(artifacts: Vec<ArtifactInput>) -> Result<ArtifactBundleV1, CanonError> {
    let artifacts: BTreeMap<String, BundleArtifact> = artifacts
        .into_iter()
        .map(|(name, content, normative)| {
            let content_hash = canonical_hash(DOMAIN_BUNDLE_ARTIFACT, &content);
            let artifact = BundleArtifact {
                name: name.clone(),
                content,
                content_hash,
                normative,
            };
            (name, artifact)
        })
        .collect();
    assemble(artifacts)
}

pub(crate) fn assemble(
    artifacts: BTreeMap<String, BundleArtifact>,
) -> Result<ArtifactBundleV1, CanonError> {
    let manifest = compute_manifest_bytes(&artifacts)?;
    let digest_basis = compute_digest_basis_bytes(&artifacts)?;
    let digest = canonical_hash(DOMAIN_BUNDLE_DIGEST, &digest_basis);
    Ok(ArtifactBundleV1 {
        artifacts,
        manifest,
        digest_basis,
        digest,
    })
}

/// Error from bundle integrity verification.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BundleVerifyError {
    #[error("artifact {artifact}: content hash {actual} does not match declared {expected}")]
    ContentHashMismatch {
        artifact: String,
        expected: String,
        actual: String,
    },
    #[error("manifest does not match artifacts")]
    ManifestMismatch,
    #[error("digest basis does not match normative artifacts")]
    DigestBasisMismatch,
    #[error("bundle digest {actual} does not match declared {expected}")]
    DigestMismatch { expected: String, actual: String },
    #[error("normative artifact {artifact} is not canonical JSON")]
    ArtifactNotCanonical { artifact: String },
    #[error("canonical JSON error: {0}")]
    Canon(#[from] CanonError),
}

/// Recompute every hash in `bundle` and compare with what it declares.
///
/// Normative `.json` artifacts must also be in canonical JSON form.
///
/// # Errors
///
/// Returns the first [`BundleVerifyError`] found.
pub fn verify_bundle(bundle: &ArtifactBundleV1) -> Result<(), BundleVerifyError> {
    for artifact in bundle.artifacts.values() {
        let actual = canonical_hash(DOMAIN_BUNDLE_ARTIFACT, &artifact.content);
        if actual != artifact.content_hash {
            return Err(BundleVerifyError::ContentHashMismatch {
                artifact: artifact.name.clone(),
                expected: artifact.content_hash.as_str().to_string(),
                actual: actual.as_str().to_string(),
            });
        }
        if artifact.normative
            && artifact.name.ends_with(".json")
            && !is_canonical_json(&artifact.content)
        {
            return Err(BundleVerifyError::ArtifactNotCanonical {
                artifact: artifact.name.clone(),
            });
        }
    }

    if compute_manifest_bytes(&bundle.artifacts)? != bundle.manifest {
        return Err(BundleVerifyError::ManifestMismatch);
    }
    if compute_digest_basis_bytes(&bundle.artifacts)? != bundle.digest_basis {
        return Err(BundleVerifyError::DigestBasisMismatch);
    }

    let actual = canonical_hash(DOMAIN_BUNDLE_DIGEST, &bundle.digest_basis);
    if actual != bundle.digest {
        return Err(BundleVerifyError::DigestMismatch {
            expected: bundle.digest.as_str().to_string(),
            actual: actual.as_str().to_string(),
        });
    }
    Ok(())
}

/// The bundle produced by one search run, with the typed results it was
/// built from.
#[derive(Debug, Clone)]
pub struct SearchBundleV1 {
    pub(crate) world_id: String,
    pub(crate) bundle: ArtifactBundleV1,
    pub(crate) path: Option<Path<String>>,
    pub(crate) audit: SearchAuditV1,
}

impl SearchBundleV1 {
    #[must_use]
    pub fn world_id(&self) -> &str {
        &self.world_id
    }

    /// The shortest path, or `None` if the goal was not reached.
    #[must_use]
    pub fn path(&self) -> Option<&Path<String>> {
        self.path.as_ref()
    }

    #[must_use]
    pub fn outcome(&self) -> TerminationReasonV1 {
        self.audit.metadata.termination_reason
    }

    #[must_use]
    pub fn audit(&self) -> &SearchAuditV1 {
        &self.audit
    }

    #[must_use]
    pub fn artifacts(&self) -> &ArtifactBundleV1 {
        &self.bundle
    }

    #[must_use]
    pub fn digest(&self) -> &ContentHash {
        &self.bundle.digest
    }
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

fn compute_manifest_bytes(
    artifacts: &BTreeMap<String, BundleArtifact>,
) -> Result<Vec<u8>, CanonError> {
    let entries: Vec<serde_json::Value> = artifacts
        .values()
        .map(|a| {
            serde_json::json!({
                "content_hash": a.content_hash.as_str(),
                "name": a.name,
                "normative": a.normative,
            })
        })
        .collect();

    canonical_json_bytes(&serde_json::json!({
        "artifacts": entries,
        "schema_version": "bundle.v1",
    }))
}

fn compute_digest_basis_bytes(
    artifacts: &BTreeMap<String, BundleArtifact>,
) -> Result<Vec<u8>, CanonError> {
    let entries: Vec<serde_json::Value> = artifacts
        .values()
        .filter(|a| a.normative)
        .map(|a| {
            serde_json::json!({
                "content_hash": a.content_hash.as_str(),
                "name": a.name,
            })
        })
        .collect();

    canonical_json_bytes(&serde_json::json!({
        "artifacts": entries,
        "schema_version": "bundle_digest_basis.v1",
    }))
}

fn is_canonical_json(bytes: &[u8]) -> bool {
    serde_json::from_slice::<serde_json::Value>(bytes)
        .ok()
        .and_then(|value| canonical_json_bytes(&value).ok())
        .is_some_and(|canon| canon == bytes)
}
