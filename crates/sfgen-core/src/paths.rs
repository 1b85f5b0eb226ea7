use crate::error::{Result, ScaffoldError};
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Layout constants
// ---------------------------------------------------------------------------

/// Source directory expected under every workspace root.
pub const SRC_DIR: &str = "src";

pub const CONF_DIR: &str = "conf";
pub const MSGS_DIR: &str = "msgs";
pub const MODELS_DIR: &str = "models";

/// Subdirectories created inside every scaffold, in creation order.
pub const SCAFFOLD_DIRS: [&str; 3] = [CONF_DIR, MSGS_DIR, MODELS_DIR];

pub const APP_CONF: &str = "conf/app.conf";
pub const TABLES_GO: &str = "models/tables.go";
pub const MSGLOGIN_GO: &str = "msgs/msglogin.go";
pub const MAIN_GO: &str = "main.go";
pub const FMT_SH: &str = "fmt.sh";
pub const BUILD_SH: &str = "build.sh";
pub const README_MD: &str = "README.md";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn src_dir(root: &Path) -> PathBuf {
    root.join(SRC_DIR)
}

/// Join a slash-separated relative layout path onto `base` using the
/// platform separator.
pub fn layout_path(base: &Path, relative: &str) -> PathBuf {
    relative
        .split('/')
        .fold(base.to_path_buf(), |acc, part| acc.join(part))
}

/// Render a directory for progress output: the path plus a trailing separator.
pub fn display_dir(path: &Path) -> String {
    format!("{}{}", path.display(), std::path::MAIN_SEPARATOR)
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// A project name must be exactly one non-empty path segment.
pub fn validate_project_name(name: &str) -> Result<()> {
    if name.is_empty()
        || name == "."
        || name == ".."
        || name.contains('/')
        || name.contains('\\')
        || name.contains('\0')
    {
        return Err(ScaffoldError::InvalidProjectName(name.to_string()));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
