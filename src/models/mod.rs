pub mod config;
pub mod difficulty;
pub mod problem;
pub mod signature;

// config is accessed as crate::models::config::{load_config, save_config, ...}
pub use difficulty::{Difficulty, TEST_FILES};
pub use problem::{Example, ExampleMode, ProblemRecord};
pub use signature::derive_signature;
