use crate::output::{tagged, Tag};
use anyhow::Context;
use sfgen_core::{
    guard::{self, Confirm, ConsoleConfirm, Decision},
    paths,
    plan::ScaffoldPlan,
    template,
    workspace::Workspaces,
    writer, ScaffoldError,
};
use std::ffi::OsStr;
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// `sfgen new <name>` — scaffold an application in the current directory.
pub fn run(gopath: Option<&OsStr>, name: &str) -> anyhow::Result<()> {
    let current_dir = std::env::current_dir().context("failed to read current directory")?;
    let mut confirm = ConsoleConfirm::stdio();
    let mut out = std::io::stdout();
    scaffold(gopath, &current_dir, name, &mut confirm, &mut out)?;
    Ok(())
}

/// Resolve, plan, guard, render, and write. Nothing touches the filesystem
/// until the conflict check has passed.
pub fn scaffold(
    gopath: Option<&OsStr>,
    current_dir: &Path,
    name: &str,
    confirm: &mut dyn Confirm,
    out: &mut dyn Write,
) -> anyhow::Result<ScaffoldPlan> {
    paths::validate_project_name(name)?;

    let gopath = gopath
        .filter(|v| !v.is_empty())
        .ok_or(ScaffoldError::WorkspaceUnset)?;
    let workspaces = Workspaces::from_path_list(gopath)?;
    debug!(workspaces = %workspaces, "loaded workspace roots");

    let resolution = workspaces.resolve(current_dir)?;
    let plan = ScaffoldPlan::new(&resolution, name)?;

    if guard::check(&plan.target_dir, confirm)? == Decision::Abort {
        return Err(ScaffoldError::Declined(plan.target_dir.clone()).into());
    }

    writeln!(out, "{}", tagged(Tag::Info, "Creating application..."))?;
    let files = template::render_all(&plan);
    writer::write(&plan, &files, out)
        .with_context(|| format!("failed to scaffold {}", plan.target_dir.display()))?;
    writeln!(out, "{}", tagged(Tag::Succ, "New server successfully created!"))?;

    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    struct Answer(bool);

    impl Confirm for Answer {
        fn confirm(&mut self, _prompt: &str) -> sfgen_core::Result<bool> {
            Ok(self.0)
        }
    }

    fn workspace() -> (TempDir, std::path::PathBuf) {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("src");
        std::fs::create_dir_all(&src).unwrap();
        (dir, src)
    }

    #[test]
    fn scaffolds_into_src() {
        let (dir, src) = workspace();
        let mut out = Vec::new();
        let plan = scaffold(
            Some(dir.path().as_os_str()),
            &src,
            "demo",
            &mut Answer(false),
            &mut out,
        )
        .unwrap();

        assert_eq!(plan.canonical_id, "demo");
        assert_eq!(plan.target_dir, src.join("demo"));
        let main = std::fs::read_to_string(src.join("demo/main.go")).unwrap();
        assert!(main.contains(r#"_ "demo/models""#));
        assert!(!main.contains(template::PLACEHOLDER));

        let shown = String::from_utf8(out).unwrap();
        assert!(shown.starts_with("[INFO] Creating application...\n"));
        assert!(shown.ends_with("[SUCC] New server successfully created!\n"));
    }

    #[test]
    fn missing_gopath_is_rejected() {
        let (_dir, src) = workspace();
        let err = scaffold(None, &src, "demo", &mut Answer(true), &mut Vec::new()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ScaffoldError>(),
            Some(ScaffoldError::WorkspaceUnset)
        ));
        assert!(!src.join("demo").exists());
    }

    #[test]
    fn outside_workspace_writes_nothing() {
        let (dir, _src) = workspace();
        let outside = TempDir::new().unwrap();
        let err = scaffold(
            Some(dir.path().as_os_str()),
            outside.path(),
            "demo",
            &mut Answer(true),
            &mut Vec::new(),
        )
        .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ScaffoldError>(),
            Some(ScaffoldError::OutsideWorkspace { .. })
        ));
        assert!(!outside.path().join("demo").exists());
    }

    #[test]
    fn declined_overwrite_writes_nothing() {
        let (dir, src) = workspace();
        std::fs::create_dir_all(src.join("demo")).unwrap();
        let mut out = Vec::new();
        let err = scaffold(
            Some(dir.path().as_os_str()),
            &src,
            "demo",
            &mut Answer(false),
            &mut out,
        )
        .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ScaffoldError>(),
            Some(ScaffoldError::Declined(_))
        ));
        assert!(out.is_empty());
        assert_eq!(std::fs::read_dir(src.join("demo")).unwrap().count(), 0);
    }

    #[test]
    fn invalid_name_is_rejected_before_workspace_checks() {
        let err = scaffold(
            None,
            Path::new("/nowhere"),
            "a/b",
            &mut Answer(true),
            &mut Vec::new(),
        )
        .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ScaffoldError>(),
            Some(ScaffoldError::InvalidProjectName(_))
        ));
    }
}
