use crate::error::Result;
use crate::io;
use crate::paths;
use crate::plan::ScaffoldPlan;
use crate::template::RenderedFile;
use std::io::Write;
use std::path::PathBuf;

/// Create the scaffold tree and write every rendered file, printing one
/// progress line per directory and file to `progress` before touching it.
///
/// Stops at the first failure; files already written stay on disk.
pub fn write(
    plan: &ScaffoldPlan,
    files: &[RenderedFile],
    progress: &mut dyn Write,
) -> Result<Vec<PathBuf>> {
    let mut created = Vec::with_capacity(1 + paths::SCAFFOLD_DIRS.len() + files.len());

    let dirs = std::iter::once(plan.target_dir.clone())
        .chain(paths::SCAFFOLD_DIRS.iter().map(|d| plan.target_dir.join(d)));
    for dir in dirs {
        io::ensure_dir(&dir)?;
        writeln!(progress, "{}", paths::display_dir(&dir))?;
        created.push(dir);
    }

    for file in files {
        writeln!(progress, "{}", file.destination.display())?;
        io::write_file(&file.destination, file.content.as_bytes())?;
        if file.executable {
            io::set_executable(&file.destination)?;
        }
        created.push(file.destination.clone());
    }

    Ok(created)
}
