//! Application layer: orchestration, ports, and the project plan.
//!
//! Services coordinate domain logic and I/O through ports; they contain no
//! emission logic of their own and no direct filesystem or process calls.

pub mod error;
pub mod ports;
pub mod project;
pub mod services;

pub use error::ApplicationError;
pub use project::{MEMBERS, PlanStep, ProjectPlan, ProjectSpec, ToolchainStep};
pub use services::{GenerationReport, GenerationService, ProjectReport, ProjectService};
