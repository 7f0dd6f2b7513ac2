use std::rc::Rc;

use super::environment::Environment;
use super::error::{ErrorCategory, ErrorRecord};
use crate::ast::{BinaryOp, Expr, Node, Stmt};
use crate::convert::convert_node;
use crate::value::{Type, Value};

impl Expr {
    /// Evaluate this expression against `env`. Failures are reported
    /// into the environment's error list and yield `Null`; evaluation
    /// itself never aborts.
    pub fn evaluate(&self, env: &mut Environment) -> Value {
        match self {
            Expr::Literal(value) => value.clone(),
            Expr::Identifier(name) => match env.lookup(name) {
                Some(value) => value.clone(),
                None => {
                    env.report(
                        ErrorCategory::Semantic,
                        format!("Variable '{}' is not declared", name),
                    );
                    Value::Null
                }
            },
            Expr::Binary { left, op, right } => {
                let left_val = left.evaluate(env);
                let right_val = right.evaluate(env);
                eval_binary_op(env, &left_val, op, &right_val)
            }
        }
    }
}

fn eval_binary_op(env: &mut Environment, left: &Value, op: &BinaryOp, right: &Value) -> Value {
    // A Null operand means its cause was already reported upstream;
    // propagate silently instead of piling on a second error.
    if left.is_null() || right.is_null() {
        return Value::Null;
    }
    match op {
        BinaryOp::Add => match (left, right) {
            (Value::Number(a), Value::Number(b)) => Value::Number(a + b),
            // At least one string: concatenate, numbers via their console text.
            _ => Value::String(Rc::from(format!("{}{}", left, right))),
        },
        BinaryOp::Sub => eval_numeric_op(env, left, op, right, |a, b| a - b),
        BinaryOp::Mul => eval_numeric_op(env, left, op, right, |a, b| a * b),
        BinaryOp::Div => match (left.as_number(), right.as_number()) {
            (Some(_), Some(divisor)) if divisor == 0.0 => {
                env.report(ErrorCategory::Semantic, "Division by zero");
                Value::Null
            }
            (Some(a), Some(b)) => Value::Number(a / b),
            _ => non_numeric_operands(env, op),
        },
    }
}

fn eval_numeric_op(
    env: &mut Environment,
    left: &Value,
    op: &BinaryOp,
    right: &Value,
    apply: impl Fn(f64, f64) -> f64,
) -> Value {
    match (left.as_number(), right.as_number()) {
        (Some(a), Some(b)) => Value::Number(apply(a, b)),
        _ => non_numeric_operands(env, op),
    }
}

fn non_numeric_operands(env: &mut Environment, op: &BinaryOp) -> Value {
    env.report(
        ErrorCategory::Semantic,
        format!("Operator '{}' requires numeric operands", op.symbol()),
    );
    Value::Null
}

impl Stmt {
    /// Run this instruction against `env`. The instruction evaluates its
    /// value expression and dispatches to the environment; binding and
    /// type policy live there.
    pub fn execute(&self, env: &mut Environment) {
        match self {
            Stmt::Declare { name, ty, value } => {
                let value = value.evaluate(env);
                env.declare(name, *ty, value);
            }
            Stmt::Assign { name, value } => {
                let value = value.evaluate(env);
                env.assign(name, value);
            }
            Stmt::Print { value } => {
                let value = value.evaluate(env);
                // Absent values print as the literal text `null`.
                env.append_output(&format!("{}\n", value));
            }
        }
    }
}

/// Snapshot of one variable at the end of a run, in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolEntry {
    pub id: String,
    pub ty: Type,
    pub value: Value,
}

/// The structured outcome of one `interpret` call: captured console
/// text, the ordered error list, and the final symbol table snapshot.
/// Built once at the end of a run and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RunResult {
    pub console_output: String,
    pub errors: Vec<ErrorRecord>,
    pub symbols: Vec<SymbolEntry>,
}

/// Run a whole program. `program` is the parser's JSON output: an array
/// of raw AST nodes. `null` or any non-array value is treated as the
/// empty program.
pub fn interpret(program: &serde_json::Value) -> RunResult {
    match program.as_array() {
        Some(nodes) => run_nodes(nodes),
        None => run_nodes(&[]),
    }
}

/// Drive a node sequence against one fresh environment, strictly in
/// order. A node the converter rejects is recorded as a syntactic error
/// and skipped; the remaining nodes still run.
pub fn run_nodes(nodes: &[serde_json::Value]) -> RunResult {
    let mut env = Environment::new();
    for raw in nodes {
        match convert_node(raw) {
            Some(Node::Stmt(stmt)) => stmt.execute(&mut env),
            Some(Node::Expr(expr)) => {
                // Top-level expressions run for effect only.
                expr.evaluate(&mut env);
            }
            None => env.report(ErrorCategory::Syntactic, "Invalid node"),
        }
    }

    let (console_output, errors, symbols) = env.into_parts();
    RunResult {
        console_output,
        errors,
        symbols: symbols
            .into_iter()
            .map(|(id, symbol)| SymbolEntry {
                id,
                ty: symbol.ty,
                value: symbol.value,
            })
            .collect(),
    }
}
