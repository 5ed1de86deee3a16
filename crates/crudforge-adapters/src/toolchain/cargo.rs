//! Cargo toolchain adapter.
//!
//! Executes plan steps through the `cargo` binary, the way the project driver
//! expects: workspace manifest, `cargo new` per member, `cargo add` for
//! wiring and third-party packages. Satisfaction checks are manifest-based so
//! re-running a plan converges instead of re-invoking cargo.

use std::path::Path;
use std::process::Command;

use tracing::debug;

use crudforge_core::{
    application::{ApplicationError, ToolchainStep, ports::Toolchain},
    error::ForgeResult,
};

/// Production toolchain adapter spawning `cargo`.
#[derive(Debug, Clone, Copy)]
pub struct CargoToolchain;

impl CargoToolchain {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CargoToolchain {
    fn default() -> Self {
        Self::new()
    }
}

impl Toolchain for CargoToolchain {
    fn is_satisfied(&self, step: &ToolchainStep, root: &Path) -> bool {
        match step {
            ToolchainStep::CreateWorkspace { .. } => root.join("Cargo.toml").exists(),
            ToolchainStep::AddMember { member } => root.join(member).join("Cargo.toml").exists(),
            ToolchainStep::AddPathDependency { member, dependency } => {
                manifest_mentions(root, member, dependency)
            }
            ToolchainStep::AddDependency { member, krate, .. } => {
                manifest_mentions(root, member, krate)
            }
        }
    }

    fn run(&self, step: &ToolchainStep, root: &Path) -> ForgeResult<()> {
        match step {
            ToolchainStep::CreateWorkspace { name } => {
                std::fs::create_dir_all(root).map_err(|e| ApplicationError::ToolchainFailed {
                    step: step.to_string(),
                    reason: e.to_string(),
                })?;
                std::fs::write(root.join("Cargo.toml"), workspace_manifest(name)).map_err(|e| {
                    ApplicationError::ToolchainFailed {
                        step: step.to_string(),
                        reason: e.to_string(),
                    }
                })?;
                Ok(())
            }
            ToolchainStep::AddMember { member } => {
                exec(root, &["new", "--lib", "--vcs", "none", member], step)
            }
            ToolchainStep::AddPathDependency { member, dependency } => exec(
                &root.join(member),
                &["add", "--path", &format!("../{dependency}")],
                step,
            ),
            ToolchainStep::AddDependency {
                member,
                krate,
                version,
            } => exec(
                &root.join(member),
                &["add", &format!("{krate}@{version}")],
                step,
            ),
        }
    }
}

fn workspace_manifest(name: &str) -> String {
    format!(
        "# Workspace for {name}\n\
         [workspace]\n\
         members = [\"api\", \"application\", \"domain\", \"infrastructure\"]\n\
         resolver = \"2\"\n"
    )
}

/// Crude but sufficient: `cargo add` always writes a `<name> = ` entry into
/// the member manifest, for registry and path dependencies alike.
fn manifest_mentions(root: &Path, member: &str, needle: &str) -> bool {
    std::fs::read_to_string(root.join(member).join("Cargo.toml"))
        .map(|manifest| manifest.contains(&format!("{needle} = ")))
        .unwrap_or(false)
}

fn exec(dir: &Path, args: &[&str], step: &ToolchainStep) -> ForgeResult<()> {
    debug!(?args, dir = %dir.display(), "invoking cargo");

    let output = Command::new("cargo")
        .args(args)
        .current_dir(dir)
        .output()
        .map_err(|e| ApplicationError::ToolchainFailed {
            step: step.to_string(),
            reason: e.to_string(),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(ApplicationError::ToolchainFailed {
            step: step.to_string(),
            reason: stderr.trim().to_string(),
        }
        .into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn workspace_manifest_lists_the_four_members() {
        let manifest = workspace_manifest("shop");
        for member in ["api", "application", "domain", "infrastructure"] {
            assert!(manifest.contains(member));
        }
    }

    #[test]
    fn nothing_is_satisfied_under_an_empty_root() {
        let toolchain = CargoToolchain::new();
        let root = Path::new("/nonexistent/workspace");
        assert!(!toolchain.is_satisfied(
            &ToolchainStep::CreateWorkspace { name: "shop".into() },
            root
        ));
        assert!(!toolchain.is_satisfied(
            &ToolchainStep::AddMember { member: "api".into() },
            root
        ));
    }
}
