//! # API Facade
//!
//! Thin entry point over the command layer. The facade dispatches, returns
//! structured `Result` types, and stays free of terminal I/O and presentation
//! concerns; those belong to whichever client sits on top (currently the
//! CLI in `main.rs`).

use crate::commands;
use crate::error::Result;
use crate::model::UnitRequest;
use crate::store::UnitStore;

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

/// The main API facade for unit generation.
///
/// Generic over `UnitStore` to allow different storage backends:
/// `FileStore` in production, `MemoryStore` in tests.
pub struct UnitzApi<S: UnitStore> {
    store: S,
}

impl<S: UnitStore> UnitzApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Generate the service unit and, when requested, its timer unit.
    pub fn generate(&mut self, request: &UnitRequest) -> Result<CmdResult> {
        commands::generate::run(&mut self.store, request)
    }
}
