//! Fixed-extent plates owning a well set and named groups

use crate::{validate, Error, Result, Well, WellGroup, WellSet, Window};
use std::collections::BTreeMap;
use tracing::warn;

/// Standard microplate formats as `(wells, rows, columns)`
pub const STANDARD_FORMATS: [(usize, usize, usize); 7] = [
    (6, 2, 3),
    (12, 3, 4),
    (24, 4, 6),
    (48, 6, 8),
    (96, 8, 12),
    (384, 16, 24),
    (1536, 32, 48),
];

/// A microplate: a `rows x columns` grid of wells with a label
///
/// Every stored well satisfies `row < rows` and `1 <= column <= columns`.
/// Plates order by label, then dimensions, then well identities.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Plate {
    label: String,
    rows: usize,
    columns: usize,
    data: WellSet,
    groups: BTreeMap<String, WellGroup>,
}

impl Plate {
    pub fn new(rows: usize, columns: usize, label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            data: WellSet::with_label(label.clone()),
            label,
            rows,
            columns,
            groups: BTreeMap::new(),
        }
    }

    /// A plate in one of the [`STANDARD_FORMATS`], e.g. `Plate::standard(96, "assay")`
    pub fn standard(wells: usize, label: impl Into<String>) -> Result<Self> {
        let (_, rows, columns) = STANDARD_FORMATS
            .iter()
            .find(|(size, _, _)| *size == wells)
            .copied()
            .ok_or_else(|| {
                Error::InvalidArgument(format!("{wells} is not a standard plate format"))
            })?;
        Ok(Self::new(rows, columns, label))
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
        self.data.set_label(self.label.clone());
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Number of well positions, `rows * columns`
    pub fn size(&self) -> usize {
        self.rows * self.columns
    }

    /// `"96-Well"` for standard formats, `"Custom"` otherwise
    pub fn descriptor(&self) -> String {
        STANDARD_FORMATS
            .iter()
            .find(|&&(_, rows, columns)| rows == self.rows && columns == self.columns)
            .map(|(size, _, _)| format!("{size}-Well"))
            .unwrap_or_else(|| "Custom".to_string())
    }

    /// Store `well`, replacing any well with the same identity
    pub fn add_well(&mut self, well: Well) -> Result<Option<Well>> {
        if well.row() >= self.rows || well.column() == 0 || well.column() > self.columns {
            return Err(Error::InvalidIndex(format!(
                "well {} lies outside the {}x{} plate {:?}",
                well.index(),
                self.rows,
                self.columns,
                self.label
            )));
        }
        Ok(self.data.add(well))
    }

    pub fn add_wells<I>(&mut self, wells: I) -> Result<()>
    where
        I: IntoIterator<Item = Well>,
    {
        for well in wells {
            self.add_well(well)?;
        }
        Ok(())
    }

    pub fn remove_well(&mut self, well: &Well) -> Option<Well> {
        self.data.remove(well)
    }

    pub fn get(&self, row: usize, column: usize) -> Option<&Well> {
        self.data.get(row, column)
    }

    pub fn contains(&self, well: &Well) -> bool {
        self.data.contains(well)
    }

    /// The plate's wells as a set carrying the plate label
    pub fn data_set(&self) -> &WellSet {
        &self.data
    }

    /// A copy of this plate's label, dimensions and groups holding `data`
    pub fn with_data<I>(&self, data: I) -> Result<Self>
    where
        I: IntoIterator<Item = Well>,
    {
        let mut plate = Self {
            label: self.label.clone(),
            rows: self.rows,
            columns: self.columns,
            data: WellSet::with_label(self.label.clone()),
            groups: self.groups.clone(),
        };
        plate.add_wells(data)?;
        Ok(plate)
    }

    /// Number of stored wells
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn first(&self) -> Option<&Well> {
        self.data.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Well> {
        self.data.iter()
    }

    /// Add a named group, returning whether it was stored
    ///
    /// A group identical to the stored one is a no-op. A different group
    /// under an existing label is skipped with a warning.
    pub fn add_group(&mut self, group: WellGroup) -> bool {
        match self.groups.get(group.label()) {
            Some(existing) if *existing == group => false,
            Some(_) => {
                warn!(
                    group = %group.label(),
                    plate = %self.label,
                    "group label already in use, skipping"
                );
                false
            }
            None => {
                self.groups.insert(group.label().to_string(), group);
                true
            }
        }
    }

    pub fn remove_group(&mut self, label: &str) -> Option<WellGroup> {
        self.groups.remove(label)
    }

    pub fn contains_group(&self, label: &str) -> bool {
        self.groups.contains_key(label)
    }

    pub fn group(&self, label: &str) -> Option<&WellGroup> {
        self.groups.get(label)
    }

    /// Groups ordered by label
    pub fn groups(&self) -> impl Iterator<Item = &WellGroup> {
        self.groups.values()
    }

    /// Keep only the groups for which `keep` returns true
    pub fn retain_groups<F>(&mut self, mut keep: F)
    where
        F: FnMut(&WellGroup) -> bool,
    {
        self.groups.retain(|_, group| keep(group));
    }

    /// The wells of `group` that hold data on this plate
    pub fn group_set(&self, label: &str) -> Option<WellSet> {
        let group = self.groups.get(label)?;
        let mut set: WellSet = group
            .members()
            .filter_map(|(row, column)| self.data.get(row, column).cloned())
            .collect();
        set.set_label(label);
        Some(set)
    }

    /// A copy of this plate whose wells hold only the window's values
    pub fn slice(&self, window: Window) -> Result<Self> {
        validate::require_window(self.iter(), window)?;
        let wells = self
            .iter()
            .map(|well| well.slice(window))
            .collect::<Result<Vec<_>>>()?;
        self.with_data(wells)
    }

    /// Fail unless `other` has the same rows and columns
    pub fn check_dimensions(&self, other: &Plate) -> Result<()> {
        validate::require_dimensions((self.rows, self.columns), (other.rows, other.columns))
    }
}

impl<'a> IntoIterator for &'a Plate {
    type Item = &'a Well;
    type IntoIter = <&'a WellSet as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}
