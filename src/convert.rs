use std::rc::Rc;

use crate::ast::{BinaryOp, Expr, Node, Stmt};
use crate::value::{Type, Value};

/// Convert one raw AST node from the parser's JSON wire format into its
/// typed form. Returns `None` for anything malformed: `null`, non-objects,
/// unknown `kind` tags, missing or wrongly-typed fields. Never panics.
pub fn convert_node(raw: &serde_json::Value) -> Option<Node> {
    let fields = raw.as_object()?;
    match fields.get("kind")?.as_str()? {
        "declaration" => {
            let id = fields.get("id")?.as_str()?;
            let ty = Type::from_tag(fields.get("type")?.as_str()?)?;
            let value = convert_expr(fields.get("value")?)?;
            Some(Node::Stmt(Stmt::Declare {
                name: Rc::from(id),
                ty,
                value,
            }))
        }
        "assignment" => {
            let id = fields.get("id")?.as_str()?;
            let value = convert_expr(fields.get("value")?)?;
            Some(Node::Stmt(Stmt::Assign {
                name: Rc::from(id),
                value,
            }))
        }
        "print" => {
            let value = convert_expr(fields.get("value")?)?;
            Some(Node::Stmt(Stmt::Print { value }))
        }
        _ => convert_expr(raw).map(Node::Expr),
    }
}

/// Convert a raw node in expression position. Statement kinds are not
/// valid here and map to `None`.
pub fn convert_expr(raw: &serde_json::Value) -> Option<Expr> {
    let fields = raw.as_object()?;
    match fields.get("kind")?.as_str()? {
        "number-literal" => {
            let numeric_value = fields.get("value")?.as_f64()?;
            Some(Expr::Literal(Value::Number(numeric_value)))
        }
        "string-literal" => {
            let string_value = fields.get("value")?.as_str()?;
            Some(Expr::Literal(Value::String(Rc::from(string_value))))
        }
        "identifier" => {
            let name = fields.get("name")?.as_str()?;
            Some(Expr::Identifier(Rc::from(name)))
        }
        "add" => convert_binary(fields, BinaryOp::Add),
        "subtract" => convert_binary(fields, BinaryOp::Sub),
        "multiply" => convert_binary(fields, BinaryOp::Mul),
        "divide" => convert_binary(fields, BinaryOp::Div),
        _ => None,
    }
}

fn convert_binary(
    fields: &serde_json::Map<String, serde_json::Value>,
    op: BinaryOp,
) -> Option<Expr> {
    let left = convert_expr(fields.get("left")?)?;
    let right = convert_expr(fields.get("right")?)?;
    Some(Expr::Binary {
        left: Box::new(left),
        op,
        right: Box::new(right),
    })
}
