//! # Storage Layer
//!
//! The [`UnitStore`] trait abstracts where unit files end up, so generation
//! logic never touches the filesystem directly.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production store, rooted at the resolved unit
//!   directory (normally `~/.config/systemd/user`). Creates the directory
//!   chain on demand and overwrites files in full.
//!
//! - [`memory::MemoryStore`]: in-memory store for tests. No persistence,
//!   plus a silent-drop mode for simulating writes that report success
//!   without landing on disk.

use crate::error::Result;
use crate::model::UnitKind;
use std::path::PathBuf;

pub mod fs;
pub mod memory;

/// Abstract interface for unit-file storage.
pub trait UnitStore {
    /// Write a unit file, replacing any existing file in full. Returns the
    /// path that was written.
    fn write(&mut self, name: &str, kind: UnitKind, content: &str) -> Result<PathBuf>;

    /// Whether a unit file for this name and kind currently exists.
    fn exists(&self, name: &str, kind: UnitKind) -> bool;

    /// The path a unit of this kind is (or would be) stored at.
    fn unit_path(&self, name: &str, kind: UnitKind) -> PathBuf;
}
