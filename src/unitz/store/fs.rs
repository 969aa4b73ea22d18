use super::UnitStore;
use crate::error::{Result, UnitzError};
use crate::model::UnitKind;
use std::fs;
use std::path::{Path, PathBuf};

pub struct FileStore {
    unit_dir: PathBuf,
}

impl FileStore {
    pub fn new(unit_dir: PathBuf) -> Self {
        Self { unit_dir }
    }

    pub fn unit_dir(&self) -> &Path {
        &self.unit_dir
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.unit_dir.exists() {
            fs::create_dir_all(&self.unit_dir).map_err(UnitzError::Io)?;
        }
        Ok(())
    }
}

impl UnitStore for FileStore {
    fn write(&mut self, name: &str, kind: UnitKind, content: &str) -> Result<PathBuf> {
        self.ensure_dir()?;
        let path = self.unit_path(name, kind);
        fs::write(&path, content).map_err(UnitzError::Io)?;
        Ok(path)
    }

    fn exists(&self, name: &str, kind: UnitKind) -> bool {
        self.unit_path(name, kind).exists()
    }

    fn unit_path(&self, name: &str, kind: UnitKind) -> PathBuf {
        self.unit_dir.join(kind.file_name(name))
    }
}
