//! Ordered collections of same-sized plates

use crate::{validate, Plate, Result, Window};

/// An ordered stack of plates sharing one `rows x columns` extent
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Stack {
    label: String,
    rows: usize,
    columns: usize,
    plates: Vec<Plate>,
}

impl Stack {
    pub fn new(rows: usize, columns: usize, label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            rows,
            columns,
            plates: Vec::new(),
        }
    }

    /// An empty stack with the same label and extent
    pub fn empty_like(&self) -> Self {
        Self::new(self.rows, self.columns, self.label.clone())
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Append `plate`, failing with `DimensionMismatch` on a different extent
    pub fn add(&mut self, plate: Plate) -> Result<()> {
        validate::require_dimensions((self.rows, self.columns), (plate.rows(), plate.columns()))?;
        self.plates.push(plate);
        Ok(())
    }

    pub fn add_all<I>(&mut self, plates: I) -> Result<()>
    where
        I: IntoIterator<Item = Plate>,
    {
        plates.into_iter().try_for_each(|plate| self.add(plate))
    }

    pub fn remove(&mut self, index: usize) -> Option<Plate> {
        (index < self.plates.len()).then(|| self.plates.remove(index))
    }

    pub fn get(&self, index: usize) -> Option<&Plate> {
        self.plates.get(index)
    }

    pub fn first(&self) -> Option<&Plate> {
        self.plates.first()
    }

    pub fn plates(&self) -> &[Plate] {
        &self.plates
    }

    pub fn len(&self) -> usize {
        self.plates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plates.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Plate> {
        self.plates.iter()
    }

    /// A copy of this stack with every plate window-sliced
    pub fn slice(&self, window: Window) -> Result<Self> {
        let mut stack = self.empty_like();
        for plate in &self.plates {
            stack.plates.push(plate.slice(window)?);
        }
        Ok(stack)
    }
}

impl<'a> IntoIterator for &'a Stack {
    type Item = &'a Plate;
    type IntoIter = std::slice::Iter<'a, Plate>;

    fn into_iter(self) -> Self::IntoIter {
        self.plates.iter()
    }
}
