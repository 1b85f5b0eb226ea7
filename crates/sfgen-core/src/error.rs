use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("$GOPATH not found")]
    WorkspaceUnset,

    #[error("unable to create an application outside of $GOPATH/src ({workspaces})")]
    OutsideWorkspace { workspaces: String },

    #[error("invalid project name '{0}': must be a single path segment")]
    InvalidProjectName(String),

    #[error("overwrite of {} declined", .0.display())]
    Declined(PathBuf),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ScaffoldError {
    /// Operator hint printed after the error, when there is a known fix.
    pub fn hint(&self) -> Option<String> {
        match self {
            ScaffoldError::WorkspaceUnset => {
                Some("Set $GOPATH in your environment variables".to_string())
            }
            ScaffoldError::OutsideWorkspace { .. } => Some(format!(
                "Change your work directory by `cd ($GOPATH{}src)`",
                std::path::MAIN_SEPARATOR
            )),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScaffoldError>;
