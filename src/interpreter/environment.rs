use indexmap::IndexMap;

use super::error::{ErrorCategory, ErrorRecord};
use crate::value::{Type, Value};

/// A variable binding: declared type plus current value.
#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
    pub ty: Type,
    pub value: Value,
}

/// The single mutable context for one program run: the symbol table
/// (insertion-ordered), the console output buffer, and the accumulated
/// error list. Exactly one environment exists per `interpret` call and
/// it is never shared between runs.
#[derive(Debug, Default)]
pub struct Environment {
    symbols: IndexMap<String, Symbol>,
    output: String,
    errors: Vec<ErrorRecord>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `id` to a fresh variable. Redeclaring an existing id keeps
    /// the old binding, and a value that does not fit the declared type
    /// is not bound; both cases are reported as semantic errors.
    pub fn declare(&mut self, id: &str, ty: Type, value: Value) {
        if self.symbols.contains_key(id) {
            self.report(
                ErrorCategory::Semantic,
                format!("Variable '{}' is already declared", id),
            );
            return;
        }
        if !value.conforms_to(ty) {
            self.report(
                ErrorCategory::Semantic,
                format!(
                    "Cannot declare '{}' as {} with a {} value",
                    id,
                    ty,
                    value.type_name()
                ),
            );
            return;
        }
        self.symbols.insert(id.to_string(), Symbol { ty, value });
    }

    /// Update an existing binding. Assigning to an undeclared id, or
    /// assigning a value of the wrong type, leaves the table untouched
    /// and reports a semantic error.
    pub fn assign(&mut self, id: &str, value: Value) {
        let ty = match self.symbols.get(id) {
            Some(symbol) => symbol.ty,
            None => {
                self.report(
                    ErrorCategory::Semantic,
                    format!("Variable '{}' is not declared", id),
                );
                return;
            }
        };
        if !value.conforms_to(ty) {
            self.report(
                ErrorCategory::Semantic,
                format!(
                    "Cannot assign a {} value to '{}' of type {}",
                    value.type_name(),
                    id,
                    ty
                ),
            );
            return;
        }
        if let Some(symbol) = self.symbols.get_mut(id) {
            symbol.value = value;
        }
    }

    /// Look up the current value of a variable.
    pub fn lookup(&self, id: &str) -> Option<&Value> {
        self.symbols.get(id).map(|symbol| &symbol.value)
    }

    /// Append text to the console buffer.
    pub fn append_output(&mut self, text: &str) {
        self.output.push_str(text);
    }

    /// Append an error record. The list is append-only and ordered.
    pub fn report(&mut self, category: ErrorCategory, description: impl Into<String>) {
        self.errors.push(ErrorRecord::new(category, description));
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn errors(&self) -> &[ErrorRecord] {
        &self.errors
    }

    /// Iterate bindings in declaration order.
    pub fn symbols(&self) -> impl Iterator<Item = (&str, &Symbol)> {
        self.symbols.iter().map(|(id, symbol)| (id.as_str(), symbol))
    }

    /// Tear the environment apart into its final state, for result
    /// bundle assembly.
    pub fn into_parts(self) -> (String, Vec<ErrorRecord>, IndexMap<String, Symbol>) {
        (self.output, self.errors, self.symbols)
    }
}
