//! Abstract Syntax Tree types for the network DSL.

/// Complete AST representation of a parsed network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkAst {
    /// Module definitions in source order
    pub modules: Vec<ModuleDef>,
}

impl NetworkAst {
    /// Create a new empty network AST.
    pub fn new() -> Self {
        Self {
            modules: Vec::new(),
        }
    }

    /// Find a module definition by name.
    pub fn find(&self, name: &str) -> Option<&ModuleDef> {
        self.modules.iter().find(|def| def.name == name)
    }
}

impl Default for NetworkAst {
    fn default() -> Self {
        Self::new()
    }
}

/// A module definition from the DSL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleDef {
    /// Module kind, taken from the name prefix
    pub kind: ModuleKind,
    /// Unique module name (without prefix)
    pub name: String,
    /// Destination names in declared order
    pub destinations: Vec<String>,
    /// Source line number for error reporting
    pub line: usize,
}

/// Module kinds that can be declared in the DSL.
///
/// Sinks never appear here: they only exist as undefined destinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModuleKind {
    /// Forwards every pulse unchanged (only `broadcaster`)
    Broadcast,
    /// `%` prefix
    FlipFlop,
    /// `&` prefix
    Conjunction,
}

impl ModuleKind {
    /// Parse a module kind from its DSL prefix.
    pub fn from_prefix(prefix: char) -> Option<Self> {
        match prefix {
            '%' => Some(Self::FlipFlop),
            '&' => Some(Self::Conjunction),
            _ => None,
        }
    }
}
