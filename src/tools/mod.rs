pub mod export;
pub mod progress;
pub mod run;

pub use export::{export_csv, write_rows};
pub use run::{run, RunContext};
