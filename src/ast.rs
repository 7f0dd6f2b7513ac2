use std::rc::Rc;

use crate::value::{Type, Value};

#[derive(Debug, Clone, PartialEq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    /// Source-level symbol, used in error messages.
    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
        }
    }
}

/// A value-producing sub-tree. Expressions are pure data; the environment
/// is passed in at evaluation time, never stored inside a node.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(Value),
    Identifier(Rc<str>),
    Binary {
        left: Box<Expr>,
        op: BinaryOp,
        right: Box<Expr>,
    },
}

/// An executable statement. Each instruction owns its value expression
/// exclusively and carries no validation logic of its own; binding policy
/// lives in the environment.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Declare { name: Rc<str>, ty: Type, value: Expr },
    Assign { name: Rc<str>, value: Expr },
    Print { value: Expr },
}

/// A converted top-level node. Expressions are legal at the top level;
/// the driver evaluates them for effect and discards the value.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Stmt(Stmt),
    Expr(Expr),
}
