//! Insertion-ordered record storage keyed by customer id

use std::collections::HashMap;

/// Records keyed by customer id, iterated in first-insertion order.
///
/// Overwriting an existing key keeps its original position.
#[derive(Debug, Clone)]
pub(crate) struct Records<T> {
    entries: HashMap<String, T>,
    order: Vec<String>,
}

impl<T> Default for Records<T> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
            order: Vec::new(),
        }
    }
}

impl<T> Records<T> {
    /// Insert or overwrite. Returns the replaced record, if any.
    pub fn insert(&mut self, id: &str, record: T) -> Option<T> {
        let previous = self.entries.insert(id.to_string(), record);
        if previous.is_none() {
            self.order.push(id.to_string());
        }
        previous
    }

    pub fn remove(&mut self, id: &str) -> Option<T> {
        let removed = self.entries.remove(id)?;
        self.order.retain(|key| key != id);
        Some(removed)
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.entries.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut T> {
        self.entries.get_mut(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Lazy iteration in insertion order
    pub fn values(&self) -> impl Iterator<Item = &T> + '_ {
        self.order.iter().filter_map(move |id| self.entries.get(id))
    }
}
