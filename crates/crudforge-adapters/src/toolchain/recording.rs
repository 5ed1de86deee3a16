//! Recording toolchain adapter for testing.
//!
//! Records every executed step and treats it as satisfied afterwards, which
//! is exactly the convergence contract the cargo adapter provides on disk.

use std::path::Path;
use std::sync::{Arc, Mutex};

use crudforge_core::{
    application::{ToolchainStep, ports::Toolchain},
    error::ForgeResult,
};

/// Test toolchain that records instead of spawning processes.
#[derive(Debug, Clone, Default)]
pub struct RecordingToolchain {
    inner: Arc<Mutex<Vec<String>>>,
}

impl RecordingToolchain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every step executed so far, in order.
    pub fn runs(&self) -> Vec<String> {
        self.inner.lock().unwrap().clone()
    }
}

impl Toolchain for RecordingToolchain {
    fn is_satisfied(&self, step: &ToolchainStep, _root: &Path) -> bool {
        self.inner.lock().unwrap().contains(&step.to_string())
    }

    fn run(&self, step: &ToolchainStep, _root: &Path) -> ForgeResult<()> {
        self.inner.lock().unwrap().push(step.to_string());
        Ok(())
    }
}
