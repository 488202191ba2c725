//! Network graph structure.

use std::collections::HashMap;

use super::types::ModuleId;
use crate::dsl::NetworkAst;
use crate::error::{PulseError, Result};
use crate::modules::Module;
use crate::ENTRY_MODULE;

/// A fully wired network ready for simulation.
///
/// Owns every module; edges are id lists into `modules`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Network {
    /// All modules, indexed by [`ModuleId`]
    modules: Vec<Module>,

    /// Mapping from module names to ids
    name_map: HashMap<String, ModuleId>,

    /// The module the button sends to
    entry: ModuleId,
}

impl Network {
    /// Build a network from a parsed AST.
    pub fn from_ast(ast: NetworkAst) -> Result<Self> {
        let mut modules: Vec<Module> = Vec::with_capacity(ast.modules.len());
        let mut name_map: HashMap<String, ModuleId> = HashMap::new();

        // Declared modules take the first ids, in definition order
        for def in &ast.modules {
            let id = ModuleId(modules.len());
            if name_map.insert(def.name.clone(), id).is_some() {
                return Err(PulseError::DuplicateModule {
                    name: def.name.clone(),
                    line: def.line,
                });
            }
            modules.push(Module::new(id, def.name.clone(), def.kind));
        }

        // Resolve destinations; undefined names become sinks on first reference
        for (idx, def) in ast.modules.iter().enumerate() {
            let source = ModuleId(idx);
            for dest in &def.destinations {
                let target = match name_map.get(dest) {
                    Some(&id) => id,
                    None => {
                        let id = ModuleId(modules.len());
                        log::debug!("materializing sink '{}' as {}", dest, id);
                        modules.push(Module::sink(id, dest.clone()));
                        name_map.insert(dest.clone(), id);
                        id
                    }
                };
                modules[idx].outputs.push(target);
                modules[target.0].inputs.push(source);
            }
        }

        // Inputs are complete only now, so memory is initialized last
        for module in &mut modules {
            module.reset();
        }

        let entry = *name_map
            .get(ENTRY_MODULE)
            .ok_or_else(|| PulseError::MissingEntry {
                name: ENTRY_MODULE.to_string(),
            })?;

        log::debug!(
            "wired {} modules ({} sinks)",
            modules.len(),
            modules.iter().filter(|m| m.is_sink()).count()
        );

        Ok(Network {
            modules,
            name_map,
            entry,
        })
    }

    /// Parse and wire a network in one step.
    pub fn parse(input: &str) -> Result<Self> {
        Self::from_ast(crate::dsl::parse(input)?)
    }

    /// The entry module id.
    pub fn entry(&self) -> ModuleId {
        self.entry
    }

    /// Number of modules, sinks included.
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// Check if the network has no modules.
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Get a module by id.
    pub fn module(&self, id: ModuleId) -> &Module {
        &self.modules[id.0]
    }

    /// Get a module mutably by id.
    pub fn module_mut(&mut self, id: ModuleId) -> &mut Module {
        &mut self.modules[id.0]
    }

    /// All modules in id order.
    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    /// Find a module id by name.
    pub fn find(&self, name: &str) -> Option<ModuleId> {
        self.name_map.get(name).copied()
    }

    /// Find a module id by name, failing if it does not exist.
    pub fn require(&self, name: &str) -> Result<ModuleId> {
        self.find(name).ok_or_else(|| PulseError::module_not_found(name))
    }

    /// Get the name of a module.
    pub fn name(&self, id: ModuleId) -> &str {
        &self.modules[id.0].name
    }

    /// Restore every module to its initial state.
    pub fn reset(&mut self) {
        for module in &mut self.modules {
            module.reset();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::ModuleState;
    use crate::network::Pulse;

    const EXAMPLE: &str = "broadcaster -> a\n%a -> inv, con\n&inv -> b\n%b -> con\n&con -> output";

    fn names(net: &Network, ids: &[ModuleId]) -> Vec<String> {
        ids.iter().map(|&id| net.name(id).to_string()).collect()
    }

    #[test]
    fn test_wiring_edges() {
        let net = Network::parse(EXAMPLE).unwrap();
        assert_eq!(net.len(), 6);
        assert_eq!(net.entry(), ModuleId(0));

        let a = net.module(net.find("a").unwrap());
        assert_eq!(names(&net, &a.outputs), vec!["inv", "con"]);
        assert_eq!(names(&net, &a.inputs), vec!["broadcaster"]);

        let con = net.module(net.find("con").unwrap());
        assert_eq!(names(&net, &con.inputs), vec!["a", "b"]);
    }

    #[test]
    fn test_undefined_destination_becomes_sink() {
        let net = Network::parse(EXAMPLE).unwrap();
        let output = net.require("output").unwrap();
        assert_eq!(output, ModuleId(5));

        let sink = net.module(output);
        assert!(sink.is_sink());
        assert!(sink.outputs.is_empty());
        assert_eq!(names(&net, &sink.inputs), vec!["con"]);
    }

    #[test]
    fn test_sink_keeps_declared_output_position() {
        let net = Network::parse("broadcaster -> rx, a\n%a -> rx").unwrap();
        let bc = net.module(net.entry());
        assert_eq!(names(&net, &bc.outputs), vec!["rx", "a"]);
        let rx = net.module(net.find("rx").unwrap());
        assert_eq!(names(&net, &rx.inputs), vec!["broadcaster", "a"]);
    }

    #[test]
    fn test_conjunction_memory_initialized_after_wiring() {
        // `con` is defined before one of its inputs
        let net = Network::parse("broadcaster -> con, x\n&con -> out\n%x -> con").unwrap();
        let con = net.module(net.find("con").unwrap()).as_conjunction().unwrap();
        assert_eq!(con.input_count(), 2);
        assert_eq!(con.remembered(net.find("x").unwrap()), Some(Pulse::Low));
    }

    #[test]
    fn test_missing_entry() {
        let err = Network::parse("%a -> b").unwrap_err();
        assert!(matches!(err, PulseError::MissingEntry { .. }));
    }

    #[test]
    fn test_require_unknown_module() {
        let net = Network::parse(EXAMPLE).unwrap();
        assert!(matches!(
            net.require("nope"),
            Err(PulseError::ModuleNotFound { .. })
        ));
    }

    #[test]
    fn test_parse_twice_is_identical() {
        assert_eq!(Network::parse(EXAMPLE).unwrap(), Network::parse(EXAMPLE).unwrap());
    }

    #[test]
    fn test_reset_restores_state() {
        let mut net = Network::parse(EXAMPLE).unwrap();
        let fresh = net.clone();
        let a = net.find("a").unwrap();
        let entry = net.entry();
        net.module_mut(a).receive(Some(entry), Pulse::Low);
        assert_ne!(net, fresh);
        assert!(matches!(net.module(a).state, ModuleState::FlipFlop(ref ff) if ff.on));

        net.reset();
        assert_eq!(net, fresh);
    }
}
