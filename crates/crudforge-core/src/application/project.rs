//! Declarative project plan for the sibling scaffolding driver.
//!
//! The original driver was a straight line of external-process calls. Here it
//! is data: every step names its prerequisites, execution is topologically
//! ordered, and already-satisfied steps are skipped, so re-running a plan is
//! harmless. The generator core knows nothing about any of this.

use std::collections::HashSet;
use std::fmt;

use crate::application::error::ApplicationError;

/// The four member crates of the generated layered workspace.
pub const MEMBERS: [&str; 4] = ["api", "application", "domain", "infrastructure"];

/// Caller-supplied description of the project to scaffold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSpec {
    pub name: String,
    pub description: String,
    pub docker: bool,
    /// Extra dependencies installed into the api member, `(crate, version)`.
    pub dependencies: Vec<(String, String)>,
}

impl ProjectSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            docker: true,
            dependencies: Vec::new(),
        }
    }
}

// ── Steps ─────────────────────────────────────────────────────────────────────

/// One externally-executed toolchain action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolchainStep {
    /// Create the workspace root and its manifest.
    CreateWorkspace { name: String },
    /// Add a member crate to the workspace.
    AddMember { member: String },
    /// Wire `member` to depend on sibling `dependency` by path.
    AddPathDependency { member: String, dependency: String },
    /// Install a registry dependency into `member`.
    AddDependency {
        member: String,
        krate: String,
        version: String,
    },
}

impl fmt::Display for ToolchainStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CreateWorkspace { name } => write!(f, "create workspace '{name}'"),
            Self::AddMember { member } => write!(f, "add member '{member}'"),
            Self::AddPathDependency { member, dependency } => {
                write!(f, "wire '{member}' -> '{dependency}'")
            }
            Self::AddDependency {
                member,
                krate,
                version,
            } => write!(f, "add {krate}@{version} to '{member}'"),
        }
    }
}

/// A step plus its position in the dependency graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanStep {
    pub id: String,
    pub requires: Vec<String>,
    pub action: ToolchainStep,
}

// ── Plan ──────────────────────────────────────────────────────────────────────

/// An ordered-on-demand collection of plan steps.
#[derive(Debug, Clone, Default)]
pub struct ProjectPlan {
    steps: Vec<PlanStep>,
}

impl ProjectPlan {
    /// The standard layered workspace: four members, path-wired references,
    /// and the baseline third-party dependencies per layer.
    pub fn layered(spec: &ProjectSpec) -> Self {
        let mut plan = Self::default();

        plan.push("workspace", &[], ToolchainStep::CreateWorkspace {
            name: spec.name.clone(),
        });

        for member in MEMBERS {
            plan.push(
                &format!("member:{member}"),
                &["workspace"],
                ToolchainStep::AddMember {
                    member: member.into(),
                },
            );
        }

        // Reference wiring mirrors the layer rules: api sees application and
        // infrastructure, both of those see domain.
        for (member, dependency) in [
            ("api", "application"),
            ("api", "infrastructure"),
            ("application", "domain"),
            ("application", "infrastructure"),
            ("infrastructure", "domain"),
        ] {
            let member_id = format!("member:{member}");
            let dependency_id = format!("member:{dependency}");
            plan.push(
                &format!("ref:{member}->{dependency}"),
                &[member_id.as_str(), dependency_id.as_str()],
                ToolchainStep::AddPathDependency {
                    member: member.into(),
                    dependency: dependency.into(),
                },
            );
        }

        // Baseline packages per layer.
        for (member, krate, version) in [
            ("domain", "sqlx", "0.8"),
            ("domain", "uuid", "1"),
            ("domain", "chrono", "0.4"),
            ("application", "async-trait", "0.1"),
            ("application", "serde", "1"),
            ("api", "axum", "0.8"),
            ("api", "tokio", "1"),
            ("api", "serde_json", "1"),
            ("infrastructure", "sqlx", "0.8"),
            ("infrastructure", "rust_decimal", "1"),
        ] {
            let member_id = format!("member:{member}");
            plan.push(
                &format!("dep:{member}:{krate}"),
                &[member_id.as_str()],
                ToolchainStep::AddDependency {
                    member: member.into(),
                    krate: krate.into(),
                    version: version.into(),
                },
            );
        }

        // Caller-supplied extras land in the api member. A baseline package
        // named again in the manifest is ignored rather than duplicated.
        for (krate, version) in &spec.dependencies {
            let id = format!("dep:api:{krate}");
            if plan.steps.iter().any(|step| step.id == id) {
                continue;
            }
            plan.push(
                &id,
                &["member:api"],
                ToolchainStep::AddDependency {
                    member: "api".into(),
                    krate: krate.clone(),
                    version: version.clone(),
                },
            );
        }

        plan
    }

    fn push(&mut self, id: &str, requires: &[&str], action: ToolchainStep) {
        self.steps.push(PlanStep {
            id: id.into(),
            requires: requires.iter().map(|r| (*r).to_owned()).collect(),
            action,
        });
    }

    pub fn steps(&self) -> &[PlanStep] {
        &self.steps
    }

    /// Topologically order the steps, keeping declaration order among peers.
    ///
    /// Errors on unknown prerequisites and on cycles.
    pub fn execution_order(&self) -> Result<Vec<&PlanStep>, ApplicationError> {
        let known: HashSet<&str> = self.steps.iter().map(|s| s.id.as_str()).collect();
        for step in &self.steps {
            for requirement in &step.requires {
                if !known.contains(requirement.as_str()) {
                    return Err(ApplicationError::UnknownPlanStep {
                        id: step.id.clone(),
                    });
                }
            }
        }

        let mut placed: HashSet<&str> = HashSet::new();
        let mut order: Vec<&PlanStep> = Vec::with_capacity(self.steps.len());

        while order.len() < self.steps.len() {
            let before = order.len();
            for step in &self.steps {
                if placed.contains(step.id.as_str()) {
                    continue;
                }
                if step.requires.iter().all(|r| placed.contains(r.as_str())) {
                    placed.insert(step.id.as_str());
                    order.push(step);
                }
            }
            if order.len() == before {
                let stuck = self
                    .steps
                    .iter()
                    .find(|s| !placed.contains(s.id.as_str()))
                    .map(|s| s.id.clone())
                    .unwrap_or_default();
                return Err(ApplicationError::PlanCycle { step: stuck });
            }
        }

        Ok(order)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
