//! Application services: the generation coordinator and the project driver.

pub mod generation_service;
pub mod project_service;

pub use generation_service::{GenerationReport, GenerationService};
pub use project_service::{ProjectReport, ProjectService};
