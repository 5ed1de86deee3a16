//! Project Service - executes the declarative workspace plan.
//!
//! Fully decoupled from the entity generator: the only shared piece is the
//! filesystem port (used for the Dockerfile). Toolchain work goes through the
//! `Toolchain` port; re-running a plan skips every step whose outcome already
//! exists.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::{
    application::{
        ports::{Filesystem, Toolchain},
        project::{ProjectPlan, ProjectSpec},
    },
    error::ForgeResult,
};

/// Outcome of one plan execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectReport {
    pub root: PathBuf,
    pub executed: usize,
    pub skipped: usize,
}

/// Drives a [`ProjectPlan`] through the toolchain adapter.
pub struct ProjectService {
    toolchain: Box<dyn Toolchain>,
    filesystem: Box<dyn Filesystem>,
}

impl ProjectService {
    pub fn new(toolchain: Box<dyn Toolchain>, filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            toolchain,
            filesystem,
        }
    }

    /// Scaffold the layered workspace described by `spec` under `output`.
    #[instrument(skip_all, fields(project = %spec.name))]
    pub fn scaffold(&self, spec: &ProjectSpec, output: &Path) -> ForgeResult<ProjectReport> {
        let plan = ProjectPlan::layered(spec);
        let root = output.join(&spec.name);

        let mut executed = 0;
        let mut skipped = 0;
        for step in plan.execution_order()? {
            if self.toolchain.is_satisfied(&step.action, &root) {
                debug!(step = %step.action, "already satisfied, skipping");
                skipped += 1;
                continue;
            }
            info!(step = %step.action, "running");
            self.toolchain.run(&step.action, &root)?;
            executed += 1;
        }

        if spec.docker {
            self.filesystem
                .write_file(&root.join("Dockerfile"), &dockerfile(&spec.name))?;
        }

        info!(executed, skipped, "project scaffold completed");
        Ok(ProjectReport {
            root,
            executed,
            skipped,
        })
    }
}

/// Multi-stage build serving the api member.
fn dockerfile(project: &str) -> String {
    format!(
        "# Stage 1: Build\n\
         FROM rust:1.85 AS build\n\
         WORKDIR /src\n\
         COPY . .\n\
         RUN cargo build --release -p api\n\
         \n\
         # Stage 2: Runtime\n\
         FROM debian:bookworm-slim AS runtime\n\
         WORKDIR /app\n\
         COPY --from=build /src/target/release/api {project}\n\
         ENTRYPOINT [\"./{project}\"]\n"
    )
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::project::ToolchainStep;
    use std::collections::BTreeMap;
    use std::sync::{Arc, Mutex, RwLock};

    /// Records every run; a step is satisfied once it has run.
    #[derive(Default)]
    struct TestToolchain {
        runs: Mutex<Vec<String>>,
        satisfied: Mutex<Vec<String>>,
    }

    impl Toolchain for TestToolchain {
        fn is_satisfied(&self, step: &ToolchainStep, _root: &Path) -> bool {
            self.satisfied.lock().unwrap().contains(&step.to_string())
        }

        fn run(&self, step: &ToolchainStep, _root: &Path) -> ForgeResult<()> {
            self.runs.lock().unwrap().push(step.to_string());
            self.satisfied.lock().unwrap().push(step.to_string());
            Ok(())
        }
    }

    #[derive(Default)]
    struct TestFs {
        files: RwLock<BTreeMap<PathBuf, String>>,
    }

    impl Filesystem for TestFs {
        fn create_dir_all(&self, _path: &Path) -> ForgeResult<()> {
            Ok(())
        }
        fn write_file(&self, path: &Path, content: &str) -> ForgeResult<()> {
            self.files
                .write()
                .unwrap()
                .insert(path.to_path_buf(), content.to_owned());
            Ok(())
        }
        fn exists(&self, path: &Path) -> bool {
            self.files.read().unwrap().contains_key(path)
        }
    }

    fn service() -> (ProjectService, Arc<TestToolchain>, Arc<TestFs>) {
        let toolchain = Arc::new(TestToolchain::default());
        let fs = Arc::new(TestFs::default());

        struct TC(Arc<TestToolchain>);
        impl Toolchain for TC {
            fn is_satisfied(&self, step: &ToolchainStep, root: &Path) -> bool {
                self.0.is_satisfied(step, root)
            }
            fn run(&self, step: &ToolchainStep, root: &Path) -> ForgeResult<()> {
                self.0.run(step, root)
            }
        }
        struct FS(Arc<TestFs>);
        impl Filesystem for FS {
            fn create_dir_all(&self, path: &Path) -> ForgeResult<()> {
                self.0.create_dir_all(path)
            }
            fn write_file(&self, path: &Path, content: &str) -> ForgeResult<()> {
                self.0.write_file(path, content)
            }
            fn exists(&self, path: &Path) -> bool {
                self.0.exists(path)
            }
        }

        (
            ProjectService::new(Box::new(TC(toolchain.clone())), Box::new(FS(fs.clone()))),
            toolchain,
            fs,
        )
    }

    #[test]
    fn first_run_executes_every_step() {
        let (service, toolchain, _) = service();
        let report = service
            .scaffold(&ProjectSpec::new("shop"), Path::new("/out"))
            .unwrap();
        assert_eq!(report.skipped, 0);
        assert_eq!(report.executed, toolchain.runs.lock().unwrap().len());
        assert_eq!(report.root, Path::new("/out/shop"));
    }

    #[test]
    fn second_run_skips_everything() {
        let (service, toolchain, _) = service();
        let spec = ProjectSpec::new("shop");
        let first = service.scaffold(&spec, Path::new("/out")).unwrap();
        let second = service.scaffold(&spec, Path::new("/out")).unwrap();

        assert_eq!(second.executed, 0);
        assert_eq!(second.skipped, first.executed);
        // No step ran twice.
        assert_eq!(toolchain.runs.lock().unwrap().len(), first.executed);
    }

    #[test]
    fn workspace_step_runs_before_member_steps() {
        let (service, toolchain, _) = service();
        service
            .scaffold(&ProjectSpec::new("shop"), Path::new("/out"))
            .unwrap();
        let runs = toolchain.runs.lock().unwrap();
        assert!(runs[0].contains("create workspace"));
    }

    #[test]
    fn dockerfile_is_written_when_requested() {
        let (service, _, fs) = service();
        service
            .scaffold(&ProjectSpec::new("shop"), Path::new("/out"))
            .unwrap();
        let files = fs.files.read().unwrap();
        let dockerfile = files.get(Path::new("/out/shop/Dockerfile")).unwrap();
        assert!(dockerfile.contains("FROM rust:1.85 AS build"));
        assert!(dockerfile.contains("ENTRYPOINT [\"./shop\"]"));
    }

    #[test]
    fn dockerfile_is_omitted_when_disabled() {
        let (service, _, fs) = service();
        let spec = ProjectSpec {
            docker: false,
            ..ProjectSpec::new("shop")
        };
        service.scaffold(&spec, Path::new("/out")).unwrap();
        assert!(fs.files.read().unwrap().is_empty());
    }
}
