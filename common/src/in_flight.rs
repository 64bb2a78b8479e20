use std::collections::HashSet;

/// Ids of records with an action currently in flight.
///
/// At most one action per id: [`InFlight::begin`] refuses an id that is
/// already busy.
#[derive(Debug, Clone, Default)]
pub struct InFlight {
    ids: HashSet<String>,
}

impl InFlight {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_busy(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Marks `id` busy. Returns `false`, leaving the set untouched, when an
    /// action on `id` is already in flight.
    pub fn begin(&mut self, id: &str) -> bool {
        self.ids.insert(id.to_string())
    }

    /// Clears `id`. Returns whether it was busy.
    pub fn end(&mut self, id: &str) -> bool {
        self.ids.remove(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
