use std::vec;

use super::index::{normalize, Index, Positions};
use crate::error::{DocError, Result};

/// A list wrapper that implements numpy / torch style indexing
///
/// ```
/// use doc_lib::{ListAdvancedIndexing, Slice};
///
/// let da = ListAdvancedIndexing::new(vec!["a", "b", "c", "d"]);
/// assert_eq!(*da.at(0).unwrap(), "a"); // index by position
/// let even = da.select(Slice::full().step_by(2)).unwrap(); // index by slice
/// let picked = da.select(vec![0isize, 2, 3]).unwrap(); // index by list of indices
/// let masked = da.select(vec![true, false, true, true]).unwrap(); // index by boolean mask
/// assert_eq!(even.data(), &["a", "c"]);
/// assert_eq!(picked.data(), &["a", "c", "d"]);
/// assert_eq!(masked.data(), &["a", "c", "d"]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ListAdvancedIndexing<T> {
    data: Vec<T>,
}

/// The result of [`ListAdvancedIndexing::get`], a scalar index borrows a single
/// item while every other expression produces a new container.
#[derive(Debug, PartialEq)]
pub enum Selection<'a, T> {
    Item(&'a T),
    Many(ListAdvancedIndexing<T>),
}

impl<'a, T> Selection<'a, T> {
    pub fn item(self) -> Option<&'a T> {
        match self {
            Selection::Item(x) => Some(x),
            Selection::Many(_) => None,
        }
    }

    pub fn many(self) -> Option<ListAdvancedIndexing<T>> {
        match self {
            Selection::Item(_) => None,
            Selection::Many(xs) => Some(xs),
        }
    }
}

impl<T> ListAdvancedIndexing<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self { data }
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn into_inner(self) -> Vec<T> {
        self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    pub fn push(&mut self, item: T) {
        self.data.push(item);
    }

    pub fn at(&self, index: isize) -> Result<&T> {
        let i = normalize(index, self.len())?;
        Ok(&self.data[i])
    }

    pub fn at_mut(&mut self, index: isize) -> Result<&mut T> {
        let i = normalize(index, self.len())?;
        Ok(&mut self.data[i])
    }

    /// Assigns `values` to the selected positions, in order. The number of values
    /// must match the number of selected positions, which is exactly one for a
    /// scalar index.
    pub fn set<V>(&mut self, index: impl Into<Index>, values: V) -> Result<()>
    where
        V: IntoIterator<Item = T>,
    {
        let positions = index.into().resolve(self.len())?;
        let values: Vec<T> = values.into_iter().collect();
        if values.len() != positions.len() {
            return Err(DocError::value(format!(
                "cannot assign {} values to {} selected positions",
                values.len(),
                positions.len()
            )));
        }
        for (&pos, value) in positions.as_slice().iter().zip(values) {
            self.data[pos] = value;
        }
        Ok(())
    }

    pub fn set_item(&mut self, index: isize, value: T) -> Result<()> {
        *self.at_mut(index)? = value;
        Ok(())
    }

    /// Removes the selected positions and returns how many items were removed.
    ///
    /// Positions are turned into a retention mask first, so deletions never
    /// shift the positions still to be visited. Repeated positions delete once.
    pub fn delete(&mut self, index: impl Into<Index>) -> Result<usize> {
        let positions = index.into().resolve(self.len())?;
        if positions.is_empty() {
            return Ok(0);
        }
        let mut keep = vec![true; self.len()];
        for &pos in positions.as_slice() {
            keep[pos] = false;
        }
        let before = self.len();
        let mut flags = keep.into_iter();
        self.data.retain(|_| flags.next().unwrap_or(true));
        Ok(before - self.len())
    }

    fn gather(&self, positions: &[usize]) -> Self
    where
        T: Clone,
    {
        positions.iter().map(|&i| self.data[i].clone()).collect()
    }
}

impl<T: Clone> ListAdvancedIndexing<T> {
    /// Single entry point for every index expression.
    pub fn get(&self, index: impl Into<Index>) -> Result<Selection<'_, T>> {
        match index.into().resolve(self.len())? {
            Positions::One(i) => Ok(Selection::Item(&self.data[i])),
            Positions::Many(ids) => Ok(Selection::Many(self.gather(&ids))),
        }
    }

    /// Like [`get`](Self::get) but always returns a container, a scalar index
    /// gives a container of one item.
    pub fn select(&self, index: impl Into<Index>) -> Result<Self> {
        let positions = index.into().resolve(self.len())?;
        Ok(self.gather(positions.as_slice()))
    }
}

impl<T> Default for ListAdvancedIndexing<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T> From<Vec<T>> for ListAdvancedIndexing<T> {
    fn from(data: Vec<T>) -> Self {
        Self::new(data)
    }
}

impl<T> FromIterator<T> for ListAdvancedIndexing<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<T> Extend<T> for ListAdvancedIndexing<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.data.extend(iter)
    }
}

impl<T> IntoIterator for ListAdvancedIndexing<T> {
    type Item = T;
    type IntoIter = vec::IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ListAdvancedIndexing<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}
