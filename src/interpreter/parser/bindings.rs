use std::{collections::HashMap, rc::Rc};

use tracing::trace;

use crate::ast::Expr;

/// An assigned expression together with its nesting depth.
#[derive(Debug, Clone)]
pub(crate) struct Binding {
    /// The expression shared with every reference to it.
    pub value: Rc<Expr>,
    /// How deep `value` nests, counting the expressions behind the variable
    /// references inside it.
    pub depth: usize,
}

/// The variable binding table used during a single parse.
///
/// All variables live in one flat namespace. A later assignment to the same
/// name replaces the entry, but references parsed earlier keep pointing at the
/// expression they were resolved to.
#[derive(Debug, Default, Clone)]
pub(crate) struct Bindings {
    table: HashMap<String, Binding>,
}

impl Bindings {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name` to `value`, which nests `depth` levels deep.
    pub fn bind(&mut self, name: &str, value: Rc<Expr>, depth: usize) {
        trace!(name, depth, %value, "binding variable");
        self.table.insert(name.to_string(), Binding { value, depth });
    }

    /// Looks up the binding of `name`.
    pub fn resolve(&self, name: &str) -> Option<&Binding> {
        self.table.get(name)
    }

    /// Number of distinct variable names bound.
    pub fn len(&self) -> usize {
        self.table.len()
    }
}
