// Library root — settings resolver and the collaborators built on it.
// The binary entry point is src/main.rs.

pub mod bootstrap;
pub mod core;
pub mod llm;
pub mod prompts;
pub mod subsystems;

pub use crate::bootstrap::logger;
pub use crate::core::{config, error};
