//! Identity-unique, ordered collections of wells

use crate::Well;
use std::collections::btree_map::{self, BTreeMap};
use tracing::warn;

/// A labelled set of wells, unique by `(row, column)` and iterated in that order
///
/// Adding a well whose identity is already present replaces the stored well.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WellSet {
    label: String,
    wells: BTreeMap<(usize, usize), Well>,
}

impl WellSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_label(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            wells: BTreeMap::new(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    /// Insert `well`, returning the well it replaced
    pub fn add(&mut self, well: Well) -> Option<Well> {
        let previous = self.wells.insert(well.identity(), well);
        if let Some(previous) = &previous {
            warn!(
                well = %previous.index(),
                set = %self.label,
                "duplicate well identity, keeping the latest data"
            );
        }
        previous
    }

    pub fn add_set(&mut self, other: &WellSet) {
        for well in other {
            self.add(well.clone());
        }
    }

    pub fn remove(&mut self, well: &Well) -> Option<Well> {
        self.wells.remove(&well.identity())
    }

    /// Remove every well whose identity appears in `other`
    pub fn remove_set(&mut self, other: &WellSet) {
        self.wells.retain(|key, _| !other.wells.contains_key(key));
    }

    /// Keep only wells whose identity appears in `other`
    pub fn retain_set(&mut self, other: &WellSet) {
        self.wells.retain(|key, _| other.wells.contains_key(key));
    }

    pub fn contains(&self, well: &Well) -> bool {
        self.wells.contains_key(&well.identity())
    }

    pub fn get(&self, row: usize, column: usize) -> Option<&Well> {
        self.wells.get(&(row, column))
    }

    pub fn len(&self) -> usize {
        self.wells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wells.is_empty()
    }

    pub fn first(&self) -> Option<&Well> {
        self.wells.values().next()
    }

    pub fn iter(&self) -> btree_map::Values<'_, (usize, usize), Well> {
        self.wells.values()
    }
}

impl FromIterator<Well> for WellSet {
    fn from_iter<I: IntoIterator<Item = Well>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl Extend<Well> for WellSet {
    fn extend<I: IntoIterator<Item = Well>>(&mut self, iter: I) {
        for well in iter {
            self.add(well);
        }
    }
}

impl<'a> IntoIterator for &'a WellSet {
    type Item = &'a Well;
    type IntoIter = btree_map::Values<'a, (usize, usize), Well>;

    fn into_iter(self) -> Self::IntoIter {
        self.wells.values()
    }
}

impl IntoIterator for WellSet {
    type Item = Well;
    type IntoIter = btree_map::IntoValues<(usize, usize), Well>;

    fn into_iter(self) -> Self::IntoIter {
        self.wells.into_values()
    }
}
