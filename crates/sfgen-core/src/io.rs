use crate::error::Result;
use std::path::Path;

/// Permission bits applied to generated shell scripts (`rwxrwxr-x`).
pub const EXECUTABLE_MODE: u32 = 0o775;

/// Permission bits for created directories (`rwxr-xr-x`).
pub const DIR_MODE: u32 = 0o755;

/// Create a directory and all parents, idempotent.
pub fn ensure_dir(path: &Path) -> Result<()> {
    let mut builder = std::fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(DIR_MODE);
    }
    builder.create(path)?;
    Ok(())
}

/// Create or truncate `path` and write `data` to it.
pub fn write_file(path: &Path, data: &[u8]) -> Result<()> {
    std::fs::write(path, data)?;
    Ok(())
}

/// Mark a file executable for owner and group. No-op on non-Unix platforms.
pub fn set_executable(path: &Path) -> Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(path, std::fs::Permissions::from_mode(EXECUTABLE_MODE))?;
    }
    #[cfg(not(unix))]
    let _ = path;
    Ok(())
}
