//! Symbol table for the interpreter.
//!
//! One flat, ordered table per interpreter. Bindings keep insertion order so
//! `names()` lists builtins in registration order; an `FxHashMap` index keeps
//! lookups constant-time.

use rustc_hash::FxHashMap;

use lispy_value::errors::undefined_symbol;
use lispy_value::{Builtin, Value};

/// Ordered name-to-value bindings. Every stored value is an owned copy.
#[derive(Clone, Debug, Default)]
pub struct Environment {
    bindings: Vec<(String, Value)>,
    index: FxHashMap<String, usize>,
}

impl Environment {
    /// Empty environment with no builtins.
    pub fn new() -> Self {
        Self::default()
    }

    /// Environment with every builtin registered under its name.
    pub fn with_builtins() -> Self {
        let mut env = Self::new();
        for builtin in Builtin::ALL {
            env.register_builtin(builtin.name(), builtin);
        }
        env
    }

    /// Copy of the value bound to `name`, or an `undefined symbol` error value.
    pub fn get(&self, name: &str) -> Value {
        match self.index.get(name) {
            Some(&slot) => self.bindings[slot].1.deep_copy(),
            None => Value::error(undefined_symbol(name)),
        }
    }

    /// Bind `name` to a copy of `value`, replacing any previous binding.
    pub fn put(&mut self, name: &str, value: &Value) {
        if let Some(&slot) = self.index.get(name) {
            tracing::trace!(name, "rebind");
            self.bindings[slot].1 = value.deep_copy();
            return;
        }
        self.index.insert(name.to_string(), self.bindings.len());
        self.bindings.push((name.to_string(), value.deep_copy()));
    }

    pub fn register_builtin(&mut self, name: &str, builtin: Builtin) {
        self.put(name, &Value::function(builtin));
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Bound names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.bindings.iter().map(|(name, _)| name.as_str())
    }
}
