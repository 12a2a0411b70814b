//! Named plate regions

use crate::Well;
use std::collections::BTreeSet;

/// A labelled set of well identities without data
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WellGroup {
    label: String,
    members: BTreeSet<(usize, usize)>,
}

impl WellGroup {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            members: BTreeSet::new(),
        }
    }

    /// Group every identity in `[first_row, last_row] x [first_column, last_column]`
    pub fn rectangle(
        label: impl Into<String>,
        (first_row, first_column): (usize, usize),
        (last_row, last_column): (usize, usize),
    ) -> Self {
        let mut group = Self::new(label);
        for row in first_row..=last_row {
            for column in first_column..=last_column {
                group.members.insert((row, column));
            }
        }
        group
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn add(&mut self, well: &Well) -> bool {
        self.members.insert(well.identity())
    }

    pub fn contains(&self, well: &Well) -> bool {
        self.members.contains(&well.identity())
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Member identities in `(row, column)` order
    pub fn members(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.members.iter().copied()
    }
}

impl<'a> FromIterator<&'a Well> for WellGroup {
    fn from_iter<I: IntoIterator<Item = &'a Well>>(iter: I) -> Self {
        let mut group = Self::default();
        for well in iter {
            group.add(well);
        }
        group
    }
}
