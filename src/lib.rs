pub mod core;
pub mod facts;
pub mod scraping;
pub mod tools;

// --- Primary core exports ---
pub use self::core::types;
pub use self::core::types::*;
pub use self::core::AppState;
pub use self::core::{ScoutError, ScoutResult};

pub use facts::FactPipeline;
