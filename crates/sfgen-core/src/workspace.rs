//! Workspace membership: decides whether a directory lies under one of the
//! configured workspace roots' `src` directories.
//!
//! Roots are tried in the order they were configured and the first match
//! wins, even when several roots contain the same directory.

use crate::error::{Result, ScaffoldError};
use crate::paths;
use std::ffi::OsStr;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Ordered, non-empty list of workspace roots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspaces {
    roots: Vec<PathBuf>,
}

/// Outcome of a successful workspace lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// The configured root that matched.
    pub root: PathBuf,
    /// The `src` directory that matched, either as configured or after
    /// symlink resolution.
    pub src_dir: PathBuf,
    pub current_dir: PathBuf,
}

impl Workspaces {
    pub fn new(roots: Vec<PathBuf>) -> Result<Self> {
        let roots: Vec<PathBuf> = roots
            .into_iter()
            .filter(|r| !r.as_os_str().is_empty())
            .collect();
        if roots.is_empty() {
            return Err(ScaffoldError::WorkspaceUnset);
        }
        Ok(Self { roots })
    }

    /// Parse a platform path list (`:` on Unix, `;` on Windows).
    pub fn from_path_list(value: &OsStr) -> Result<Self> {
        Self::new(std::env::split_paths(value).collect())
    }

    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    /// Find the first root whose `src` directory contains `current_dir`.
    pub fn resolve(&self, current_dir: &Path) -> Result<Resolution> {
        for root in &self.roots {
            let candidate = paths::src_dir(root);
            if relative_components(current_dir, &candidate).is_some() {
                debug!(root = %root.display(), "matched workspace root");
                return Ok(Resolution {
                    root: root.clone(),
                    src_dir: candidate,
                    current_dir: current_dir.to_path_buf(),
                });
            }

            match std::fs::canonicalize(&candidate) {
                Ok(real) => {
                    if relative_components(current_dir, &real).is_some() {
                        debug!(
                            root = %root.display(),
                            resolved = %real.display(),
                            "matched workspace root through symlink"
                        );
                        return Ok(Resolution {
                            root: root.clone(),
                            src_dir: real,
                            current_dir: current_dir.to_path_buf(),
                        });
                    }
                }
                Err(e) => debug!(path = %candidate.display(), error = %e, "cannot resolve src dir"),
            }
        }

        Err(ScaffoldError::OutsideWorkspace {
            workspaces: self.to_string(),
        })
    }
}

impl fmt::Display for Workspaces {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shown: Vec<String> = self
            .roots
            .iter()
            .map(|r| paths::src_dir(r).display().to_string())
            .collect();
        write!(f, "{}", shown.join(", "))
    }
}

// ---------------------------------------------------------------------------
// Component matching
// ---------------------------------------------------------------------------

/// Components of `path` below `base`, compared case-insensitively.
///
/// Returns `None` when `path` is not `base` or a descendant of it; an empty
/// vector when the two are the same directory.
pub(crate) fn relative_components(path: &Path, base: &Path) -> Option<Vec<String>> {
    let mut rest = path.components();
    for base_part in base.components() {
        let part = rest.next()?;
        if !eq_ignore_case(part.as_os_str(), base_part.as_os_str()) {
            return None;
        }
    }
    Some(
        rest.map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect(),
    )
}

fn eq_ignore_case(a: &OsStr, b: &OsStr) -> bool {
    a.to_string_lossy().to_lowercase() == b.to_string_lossy().to_lowercase()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
