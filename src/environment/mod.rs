use crate::value::Value;
use compact_str::{CompactString, ToCompactString};

/// Name to value bindings shared by every node of one interpretation session.
///
/// Scoping is dynamic: a loop binds its variable here for the duration of the
/// loop, so loops nested inside it see (and substitute) the outer binding.
///
/// Bindings are kept in the order their names were first bound, which is also
/// the order [`Environment::resolve`] applies them in. Rebinding a name keeps its
/// original position so substitution stays deterministic across iterations.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    bindings: Vec<(CompactString, Value)>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind(&mut self, name: &str, value: Value) {
        match self.bindings.iter_mut().find(|(bound, _)| bound.as_str() == name) {
            Some((_, slot)) => *slot = value,
            None => self.bindings.push((name.to_compact_string(), value)),
        }
    }

    pub fn unbind(&mut self, name: &str) -> Option<Value> {
        let index = self
            .bindings
            .iter()
            .position(|(bound, _)| bound.as_str() == name)?;
        Some(self.bindings.remove(index).1)
    }

    pub fn access(&self, name: &str) -> Option<&Value> {
        self.bindings
            .iter()
            .find_map(|(bound, value)| (bound.as_str() == name).then_some(value))
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Replaces every literal occurrence of each bound name in `text` with the
    /// display form of its value.
    pub fn resolve(&self, text: &str) -> String {
        let mut resolved = text.to_string();
        for (name, value) in self.bindings.iter() {
            if resolved.contains(name.as_str()) {
                resolved = resolved.replace(name.as_str(), &value.to_compact_string());
            }
        }
        resolved
    }
}
