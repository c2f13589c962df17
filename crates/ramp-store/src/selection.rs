//! The export selection: an insertion-ordered set of palette names.
//!
//! Names are references only. Nothing here checks them against the store;
//! [`Selection::reconcile`] is the single place stale names are dropped.

use std::collections::HashSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    names: Vec<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Selected names in the order they were added.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Flip membership of `name`. Returns whether it is selected afterwards.
    pub fn toggle(&mut self, name: &str) -> bool {
        if let Some(pos) = self.names.iter().position(|n| n == name) {
            self.names.remove(pos);
            false
        } else {
            self.names.push(name.to_string());
            true
        }
    }

    /// Replace the whole selection. Repeated names collapse onto their first
    /// occurrence.
    pub fn bulk_replace<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names.clear();
        self.extend(names);
    }

    /// Add every name not already selected, keeping existing order.
    pub fn select_all<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extend(names);
    }

    /// Drop every name not in `valid_names`. Returns how many were dropped.
    pub fn reconcile<'a, I>(&mut self, valid_names: I) -> usize
    where
        I: IntoIterator<Item = &'a str>,
    {
        let valid: HashSet<&str> = valid_names.into_iter().collect();
        let before = self.names.len();
        self.names.retain(|n| valid.contains(n.as_str()));
        before - self.names.len()
    }

    pub fn clear(&mut self) {
        self.names.clear();
    }

    fn extend<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            let name = name.into();
            if !self.contains(&name) {
                self.names.push(name);
            }
        }
    }
}
