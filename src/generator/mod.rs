//! Build driver: runs the registry's tests, then writes the distributable
//! module and the README.

pub mod module;
pub mod readme;

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use thiserror::Error;

use crate::config::BuildConfig;
use crate::harness::{self, TestReport};
use crate::registry::Registry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildMode {
    /// Run the declared tests only.
    Test,
    /// Run the tests, then write the module file.
    Module,
    /// Write the README; no tests.
    Readme,
    /// Tests, module file and README.
    All,
}

impl BuildMode {
    pub fn runs_tests(self) -> bool {
        !matches!(self, BuildMode::Readme)
    }

    pub fn writes_module(self) -> bool {
        matches!(self, BuildMode::Module | BuildMode::All)
    }

    pub fn writes_readme(self) -> bool {
        matches!(self, BuildMode::Readme | BuildMode::All)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("no valid arguments")]
pub struct UnknownMode(pub String);

impl FromStr for BuildMode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "test" => Ok(BuildMode::Test),
            "createjs" | "module" => Ok(BuildMode::Module),
            "readme" => Ok(BuildMode::Readme),
            "all" => Ok(BuildMode::All),
            _ => Err(UnknownMode(s.to_string())),
        }
    }
}

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("CAN NOT BUILD, you should fix {failed} test(s) first")]
    TestsFailed { failed: usize, report: TestReport },

    #[error("generated README is malformed: {0}")]
    MalformedReadme(String),

    #[error("cannot write {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },
}

/// What a build run did.
#[derive(Debug, Default)]
pub struct BuildOutcome {
    /// `None` when the mode skips tests.
    pub report: Option<TestReport>,
    pub written: Vec<PathBuf>,
}

/// Runs `mode` against `registry`. Failing tests block every write; a
/// malformed README blocks every write as well.
pub fn build(
    registry: &Registry,
    mode: BuildMode,
    config: &BuildConfig,
) -> Result<BuildOutcome, GenerateError> {
    let mut outcome = BuildOutcome::default();

    if mode.runs_tests() {
        let report = harness::run_registry(registry);
        if !report.is_green() && mode != BuildMode::Test {
            tracing::warn!("build blocked by {} failing test(s)", report.failed());
            return Err(GenerateError::TestsFailed {
                failed: report.failed(),
                report,
            });
        }
        outcome.report = Some(report);
    }

    let mut pending = Vec::new();
    if mode.writes_module() {
        pending.push((config.module_path.clone(), module::render(registry)));
    }
    if mode.writes_readme() {
        let markdown = readme::render(registry);
        readme::lint(&markdown, registry)?;
        pending.push((config.readme_path.clone(), markdown));
    }

    for (path, contents) in pending {
        write_atomic(&path, &contents)?;
        tracing::info!("wrote {} ({} bytes)", path.display(), contents.len());
        outcome.written.push(path);
    }

    Ok(outcome)
}

/// Writes a sibling temp file and renames it over `path`.
fn write_atomic(path: &Path, contents: &str) -> Result<(), GenerateError> {
    let io_err = |source| GenerateError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_err)?;
    }

    let tmp = path.with_extension("tmp");
    let result = (|| -> io::Result<()> {
        let file = fs::File::create(&tmp)?;
        let mut writer = io::BufWriter::new(file);
        writer.write_all(contents.as_bytes())?;
        writer.flush()?;
        fs::rename(&tmp, path)
    })();

    if result.is_err() {
        let _ = fs::remove_file(&tmp);
    }
    result.map_err(io_err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modes_parse_case_insensitively() {
        assert_eq!("TEST".parse::<BuildMode>(), Ok(BuildMode::Test));
        assert_eq!("createJS".parse::<BuildMode>(), Ok(BuildMode::Module));
        assert_eq!("module".parse::<BuildMode>(), Ok(BuildMode::Module));
        assert_eq!("ReadMe".parse::<BuildMode>(), Ok(BuildMode::Readme));
        assert_eq!("all".parse::<BuildMode>(), Ok(BuildMode::All));
        assert_eq!(
            "publish".parse::<BuildMode>(),
            Err(UnknownMode("publish".to_string()))
        );
    }

    #[test]
    fn mode_steps() {
        assert!(!BuildMode::Readme.runs_tests());
        assert!(BuildMode::Test.runs_tests());
        assert!(!BuildMode::Test.writes_module() && !BuildMode::Test.writes_readme());
        assert!(BuildMode::All.writes_module() && BuildMode::All.writes_readme());
    }

    #[test]
    fn unknown_mode_message() {
        assert_eq!(UnknownMode("x".into()).to_string(), "no valid arguments");
    }

    #[test]
    fn write_atomic_creates_parents_and_leaves_no_temp_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let target = dir.path().join("nested/out.rs");
        write_atomic(&target, "fn main() {}\n").expect("write");
        assert_eq!(fs::read_to_string(&target).expect("read"), "fn main() {}\n");
        assert!(!target.with_extension("tmp").exists());
    }
}
