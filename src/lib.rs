pub mod ast;
pub mod cli;
pub mod config;
pub mod convert;
pub mod format;
pub mod interpreter;
pub mod value;

pub use ast::{BinaryOp, Expr, Node, Stmt};
pub use interpreter::{interpret, Environment, RunResult};
pub use value::{Type, Value};
