//! Symbol table for tracking declared variables during semantic analysis.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use tally_core::{Error, Result, Span, VarType};

/// Represents a declared variable.
#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
    /// The name of the variable
    pub name: String,
    /// The declared type
    pub var_type: VarType,
    /// Where the variable was declared
    pub span: Span,
}

impl Symbol {
    /// Creates a new symbol.
    pub fn new(name: impl Into<String>, var_type: VarType, span: Span) -> Self {
        Self {
            name: name.into(),
            var_type,
            span,
        }
    }
}

/// Flat symbol table mapping variable names to their declarations.
///
/// The language has a single global namespace: names are inserted once and
/// never removed, whatever block they were declared in.
#[derive(Debug, Default)]
pub struct SymbolTable {
    symbols: HashMap<String, Symbol>,
}

impl SymbolTable {
    /// Creates an empty symbol table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a new variable.
    ///
    /// # Errors
    /// Returns `DuplicateDeclaration` if `name` is already declared, whatever
    /// the type of either declaration.
    pub fn declare(&mut self, name: &str, var_type: VarType, span: Span) -> Result<()> {
        match self.symbols.entry(name.to_string()) {
            Entry::Occupied(existing) => Err(Error::DuplicateDeclaration {
                name: name.to_string(),
                span,
                previous: existing.get().span,
            }),
            Entry::Vacant(slot) => {
                slot.insert(Symbol::new(name, var_type, span));
                Ok(())
            }
        }
    }

    /// Looks up a symbol by name.
    pub fn lookup(&self, name: &str) -> Option<&Symbol> {
        self.symbols.get(name)
    }

    /// Returns the declared type of `name`.
    ///
    /// # Errors
    /// Returns `UndefinedIdentifier`, labelled at `span`, if `name` was never
    /// declared.
    pub fn lookup_type(&self, name: &str, span: Span) -> Result<VarType> {
        self.lookup(name)
            .map(|symbol| symbol.var_type)
            .ok_or_else(|| Error::UndefinedIdentifier {
                name: name.to_string(),
                span,
            })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.symbols.contains_key(name)
    }
}
