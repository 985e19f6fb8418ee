//! Configuration and path management

pub mod paths;
pub mod settings;

pub use paths::FinviewPaths;
pub use settings::Settings;
