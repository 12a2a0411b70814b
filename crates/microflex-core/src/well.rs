//! The smallest container: one well position and its ordered measurements

use crate::{validate, Error, Result, Window};
use bigdecimal::BigDecimal;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// A single microplate well
///
/// Identity is the zero-based `row` and the one-based `column`. Equality,
/// hashing and ordering look at the identity only, never at the data, so
/// wells can key maps and sets regardless of their current values.
#[derive(Debug, Clone)]
pub struct Well {
    row: usize,
    column: usize,
    data: Vec<BigDecimal>,
}

impl Well {
    /// Create an empty well
    pub fn new(row: usize, column: usize) -> Self {
        Self {
            row,
            column,
            data: Vec::new(),
        }
    }

    /// Create a well holding `data` in order
    pub fn with_data<I>(row: usize, column: usize, data: I) -> Self
    where
        I: IntoIterator<Item = BigDecimal>,
    {
        Self {
            row,
            column,
            data: data.into_iter().collect(),
        }
    }

    /// Parse an index such as `"A1"` or `"AB12"` into an empty well
    pub fn parse(index: &str) -> Result<Self> {
        let (row, column) = parse_index(index)?;
        Ok(Self::new(row, column))
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn column(&self) -> usize {
        self.column
    }

    /// `(row, column)` identity
    pub fn identity(&self) -> (usize, usize) {
        (self.row, self.column)
    }

    /// Row letters followed by the column number, e.g. `"B3"`
    pub fn index(&self) -> String {
        format!("{}{}", row_label(self.row), self.column)
    }

    pub fn data(&self) -> &[BigDecimal] {
        &self.data
    }

    pub fn into_data(self) -> Vec<BigDecimal> {
        self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn push(&mut self, value: BigDecimal) {
        self.data.push(value);
    }

    pub fn replace_data(&mut self, data: Vec<BigDecimal>) {
        self.data = data;
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BigDecimal> {
        self.data.iter()
    }

    /// A new well with the same identity holding only the window's values
    pub fn slice(&self, window: Window) -> Result<Self> {
        validate::require_well(self, window)?;
        Ok(Self::with_data(
            self.row,
            self.column,
            window.apply(&self.data).iter().cloned(),
        ))
    }
}

impl PartialEq for Well {
    fn eq(&self, other: &Self) -> bool {
        self.identity() == other.identity()
    }
}

impl Eq for Well {}

impl Hash for Well {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity().hash(state);
    }
}

impl PartialOrd for Well {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Well {
    fn cmp(&self, other: &Self) -> Ordering {
        self.identity().cmp(&other.identity())
    }
}

impl fmt::Display for Well {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.index())
    }
}

impl FromStr for Well {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl<'a> IntoIterator for &'a Well {
    type Item = &'a BigDecimal;
    type IntoIter = std::slice::Iter<'a, BigDecimal>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

/// Spreadsheet-style row letters: 0 → `A`, 25 → `Z`, 26 → `AA`
pub fn row_label(row: usize) -> String {
    let mut letters = Vec::new();
    let mut n = row + 1;
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push(char::from(b'A' + rem as u8));
        n = (n - 1) / 26;
    }
    letters.iter().rev().collect()
}

/// Split an index such as `"C7"` into `(row, column)`
pub fn parse_index(index: &str) -> Result<(usize, usize)> {
    let trimmed = index.trim();
    let split = trimmed
        .find(|c: char| c.is_ascii_digit())
        .ok_or_else(|| Error::Parse(format!("well index {index:?} has no column")))?;
    let (letters, digits) = trimmed.split_at(split);

    if letters.is_empty() || !letters.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(Error::Parse(format!("well index {index:?} has no row letters")));
    }

    let mut n: usize = 0;
    for c in letters.chars() {
        let digit = (c.to_ascii_uppercase() as u8 - b'A') as usize + 1;
        n = n
            .checked_mul(26)
            .and_then(|n| n.checked_add(digit))
            .ok_or_else(|| Error::Parse(format!("well index {index:?} row overflows")))?;
    }

    let column: usize = digits
        .parse()
        .map_err(|_| Error::Parse(format!("well index {index:?} has an invalid column")))?;
    if column == 0 {
        return Err(Error::Parse(format!("well index {index:?} column must be positive")));
    }

    Ok((n - 1, column))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{BTreeSet, HashSet};

    fn decimals(values: &[i64]) -> Vec<BigDecimal> {
        values.iter().map(|&v| BigDecimal::from(v)).collect()
    }

    #[test]
    fn test_identity_only_equality() {
        let a = Well::with_data(0, 1, decimals(&[1, 2, 3]));
        let b = Well::with_data(0, 1, decimals(&[10, 20]));
        let c = Well::with_data(0, 2, decimals(&[1, 2, 3]));

        assert_eq!(a, b);
        assert_ne!(a, c);

        let hashed: HashSet<Well> = [a.clone(), b.clone()].into_iter().collect();
        assert_eq!(hashed.len(), 1);
    }

    #[test]
    fn test_ordering_by_row_then_column() {
        let wells: BTreeSet<Well> = [Well::new(1, 1), Well::new(0, 12), Well::new(0, 2)]
            .into_iter()
            .collect();
        let order: Vec<_> = wells.iter().map(Well::identity).collect();
        assert_eq!(order, vec![(0, 2), (0, 12), (1, 1)]);
    }

    #[test]
    fn test_row_labels() {
        assert_eq!(row_label(0), "A");
        assert_eq!(row_label(7), "H");
        assert_eq!(row_label(25), "Z");
        assert_eq!(row_label(26), "AA");
        assert_eq!(row_label(27), "AB");
        assert_eq!(row_label(701), "ZZ");
        assert_eq!(row_label(702), "AAA");
    }

    #[test]
    fn test_parse_index() {
        assert_eq!(parse_index("A1").unwrap(), (0, 1));
        assert_eq!(parse_index("h12").unwrap(), (7, 12));
        assert_eq!(parse_index("AA3").unwrap(), (26, 3));

        assert!(matches!(parse_index("12"), Err(Error::Parse(_))));
        assert!(matches!(parse_index("B"), Err(Error::Parse(_))));
        assert!(matches!(parse_index("B0"), Err(Error::Parse(_))));
        assert!(matches!(parse_index("B1x"), Err(Error::Parse(_))));
    }

    #[test]
    fn test_index_round_trip() {
        let well = Well::new(30, 24);
        assert_eq!(well.index(), "AE24");
        assert_eq!(well.to_string().parse::<Well>().unwrap(), well);
    }

    #[test]
    fn test_slice() {
        let well = Well::with_data(2, 3, decimals(&[1, 2, 3, 4, 5]));
        let sliced = well.slice(Window::new(1, 3)).unwrap();
        assert_eq!(sliced.identity(), (2, 3));
        assert_eq!(sliced.data(), decimals(&[2, 3, 4]).as_slice());
        // Original untouched
        assert_eq!(well.len(), 5);

        assert!(matches!(
            well.slice(Window::new(3, 3)),
            Err(Error::InvalidIndex(_))
        ));
        assert!(well.slice(Window::new(5, 0)).unwrap().is_empty());
    }
}
