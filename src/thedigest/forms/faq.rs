use std::collections::BTreeSet;

/// Which FAQ answers are expanded. Any number may be open at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaqAccordion {
    open: BTreeSet<usize>,
}

impl Default for FaqAccordion {
    fn default() -> Self {
        Self {
            open: BTreeSet::from([0]),
        }
    }
}

impl FaqAccordion {
    pub fn toggle(mut self, index: usize) -> Self {
        if !self.open.remove(&index) {
            self.open.insert(index);
        }
        self
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open.contains(&index)
    }

    /// Ascending.
    pub fn open_items(&self) -> Vec<usize> {
        self.open.iter().copied().collect()
    }
}
