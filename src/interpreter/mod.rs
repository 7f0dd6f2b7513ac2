pub mod environment;
pub mod error;
pub mod evaluator;

pub use environment::{Environment, Symbol};
pub use error::{ErrorCategory, ErrorRecord};
pub use evaluator::{interpret, run_nodes, RunResult, SymbolEntry};
