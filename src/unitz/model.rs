use crate::error::{Result, UnitzError};
use std::fs;
use std::path::{Path, PathBuf};

/// The two unit types this tool emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitKind {
    Service,
    Timer,
}

impl UnitKind {
    pub fn extension(&self) -> &'static str {
        match self {
            UnitKind::Service => "service",
            UnitKind::Timer => "timer",
        }
    }

    /// File name for a unit of this kind, e.g. `backup.service`.
    pub fn file_name(&self, name: &str) -> String {
        format!("{}.{}", name, self.extension())
    }
}

/// A validated generation request, built once per invocation and immutable
/// thereafter.
#[derive(Debug, Clone)]
pub struct UnitRequest {
    pub name: String,
    pub working_dir: PathBuf,
    pub command: String,
    pub description: String,
    pub user: String,
    pub timer_spec: Option<String>,
}

impl UnitRequest {
    /// Validate inputs and resolve `working_dir` to a canonical absolute path.
    ///
    /// Canonicalization happens here, before any unit file I/O, so the
    /// generated unit is stable no matter where the tool is invoked from.
    /// Nothing else is validated: command lines and timer expressions pass
    /// through verbatim, quoting is the caller's job.
    pub fn resolve(
        name: String,
        working_dir: &Path,
        command: String,
        description: String,
        user: String,
        timer_spec: Option<String>,
    ) -> Result<Self> {
        if name.is_empty() {
            return Err(UnitzError::Api("Service name cannot be empty".to_string()));
        }

        let working_dir =
            fs::canonicalize(working_dir).map_err(|source| UnitzError::WorkingDir {
                path: working_dir.to_path_buf(),
                source,
            })?;

        Ok(Self {
            name,
            working_dir,
            command,
            description,
            user,
            timer_spec,
        })
    }
}
