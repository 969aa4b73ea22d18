use super::UnitStore;
use crate::error::Result;
use crate::model::UnitKind;
use std::collections::HashMap;
use std::path::PathBuf;

/// In-memory store for tests.
///
/// `dropping_writes` builds a store whose writes report success without
/// recording anything, which is how the missing-service check gets exercised.
#[derive(Debug, Default)]
pub struct MemoryStore {
    units: HashMap<(String, UnitKind), String>,
    drop_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dropping_writes() -> Self {
        Self {
            drop_writes: true,
            ..Self::default()
        }
    }

    /// Stored content for a unit, if any.
    pub fn content(&self, name: &str, kind: UnitKind) -> Option<&str> {
        self.units
            .get(&(name.to_string(), kind))
            .map(String::as_str)
    }
}

impl UnitStore for MemoryStore {
    fn write(&mut self, name: &str, kind: UnitKind, content: &str) -> Result<PathBuf> {
        let path = self.unit_path(name, kind);
        if !self.drop_writes {
            self.units
                .insert((name.to_string(), kind), content.to_string());
        }
        Ok(path)
    }

    fn exists(&self, name: &str, kind: UnitKind) -> bool {
        self.units.contains_key(&(name.to_string(), kind))
    }

    fn unit_path(&self, name: &str, kind: UnitKind) -> PathBuf {
        PathBuf::from("/in-memory").join(kind.file_name(name))
    }
}
