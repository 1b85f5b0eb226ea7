use crate::error::{Result, ScaffoldError};
use crate::paths;
use crate::workspace::{relative_components, Resolution};
use serde::Serialize;
use std::path::PathBuf;
use tracing::debug;

/// Where a project will be scaffolded and how generated code refers to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaffoldPlan {
    pub project_name: String,
    pub target_dir: PathBuf,
    /// Path of the project below the workspace `src` directory, joined with
    /// `/`. Used as the import path inside generated code.
    pub canonical_id: String,
}

impl ScaffoldPlan {
    pub fn new(resolution: &Resolution, project_name: &str) -> Result<Self> {
        paths::validate_project_name(project_name)?;

        let target_dir = resolution.current_dir.join(project_name);
        let parts = relative_components(&target_dir, &resolution.src_dir).ok_or_else(|| {
            ScaffoldError::OutsideWorkspace {
                workspaces: resolution.src_dir.display().to_string(),
            }
        })?;
        let canonical_id = parts.join("/");

        debug!(
            target = %target_dir.display(),
            canonical_id = %canonical_id,
            "planned scaffold"
        );

        Ok(Self {
            project_name: project_name.to_string(),
            target_dir,
            canonical_id,
        })
    }
}
