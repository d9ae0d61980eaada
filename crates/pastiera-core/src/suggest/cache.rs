use std::collections::HashMap;
use std::mem;

/// Bounded memo table keyed by string.
///
/// Two generations: new entries go to `hot`; a `cold` hit is promoted. When
/// `hot` reaches capacity the old `cold` generation is dropped and `hot`
/// takes its place, so at most `2 * capacity` entries are held.
pub(crate) struct MemoCache<V> {
    capacity: usize,
    hot: HashMap<String, V>,
    cold: HashMap<String, V>,
}

impl<V: Clone> MemoCache<V> {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            hot: HashMap::new(),
            cold: HashMap::new(),
        }
    }

    pub fn get_or_insert_with(&mut self, key: &str, compute: impl FnOnce(&str) -> V) -> V {
        if let Some(v) = self.hot.get(key) {
            return v.clone();
        }
        let value = match self.cold.remove(key) {
            Some(v) => v,
            None => compute(key),
        };
        if self.hot.len() >= self.capacity {
            self.cold = mem::take(&mut self.hot);
        }
        self.hot.insert(key.to_string(), value.clone());
        value
    }

    pub fn len(&self) -> usize {
        self.hot.len() + self.cold.len()
    }

    pub fn clear(&mut self) {
        self.hot.clear();
        self.cold.clear();
    }
}
