//! Two-dimensional arrays of frequency samples, one column per event

use std::ops::{Index, IndexMut};

use crate::event::ParameterError;

/// A `samples × events` array, stored column by column so that
/// the samples belonging to a single event are contiguous.
#[derive(Clone,Debug,PartialEq)]
pub struct Grid<T = f64> {
    samples: usize,
    events: usize,
    data: Vec<T>,
}

impl<T: Copy + Default> Grid<T> {
    /// Returns a grid filled with the default value of `T`.
    pub fn zeros(samples: usize, events: usize) -> Self {
        Grid {
            samples,
            events,
            data: vec![T::default(); samples * events],
        }
    }
}

impl<T: Copy> Grid<T> {
    /// A single column, to be broadcast across every event in a batch.
    pub fn broadcast(values: &[T]) -> Self {
        Grid {
            samples: values.len(),
            events: 1,
            data: values.to_vec(),
        }
    }

    /// Assembles a grid from one column per event.
    /// Fails if the columns do not have the same length.
    pub fn from_columns(columns: &[Vec<T>]) -> Result<Self, ParameterError> {
        let samples = columns.first().map_or(0, |c| c.len());

        if let Some(c) = columns.iter().find(|c| c.len() != samples) {
            return Err(ParameterError::shape(
                &format!("columns have unequal lengths ({} and {})", samples, c.len())
            ));
        }

        let data = columns.iter()
            .flat_map(|c| c.iter().copied())
            .collect();

        Ok(Grid {
            samples,
            events: columns.len(),
            data,
        })
    }

    /// Number of frequency samples per event
    pub fn samples(&self) -> usize {
        self.samples
    }

    /// Number of columns
    pub fn events(&self) -> usize {
        self.events
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.samples, self.events)
    }

    pub fn column(&self, event: usize) -> &[T] {
        let start = event * self.samples;
        &self.data[start..start + self.samples]
    }

    pub fn column_mut(&mut self, event: usize) -> &mut [T] {
        let start = event * self.samples;
        &mut self.data[start..start + self.samples]
    }

    /// Returns the column that applies to the given event, following
    /// the broadcasting rule: a single-column grid serves every event.
    pub fn column_for(&self, event: usize) -> &[T] {
        if self.events == 1 {
            self.column(0)
        } else {
            self.column(event)
        }
    }

    /// Checks that this grid can be evaluated against a batch of
    /// `events` events, i.e. that it has one column or one column
    /// per event.
    pub fn check_broadcast(&self, events: usize) -> Result<(), ParameterError> {
        if self.events == 1 || self.events == events {
            Ok(())
        } else {
            Err(ParameterError::shape(
                &format!("grid has {} columns, but there are {} events", self.events, events)
            ))
        }
    }

    pub fn get(&self, sample: usize, event: usize) -> Option<T> {
        if sample < self.samples && event < self.events {
            Some(self.data[event * self.samples + sample])
        } else {
            None
        }
    }

    pub fn columns(&self) -> impl Iterator<Item = &[T]> + '_ {
        (0..self.events).map(move |j| self.column(j))
    }

    /// Applies `f` elementwise, preserving the shape.
    pub fn map<U, F: FnMut(T) -> U>(&self, f: F) -> Grid<U> {
        Grid {
            samples: self.samples,
            events: self.events,
            data: self.data.iter().copied().map(f).collect(),
        }
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    /// Indexes by `(sample, event)`.
    fn index(&self, (sample, event): (usize, usize)) -> &T {
        assert!(sample < self.samples && event < self.events, "index ({}, {}) out of bounds for grid of shape ({}, {})", sample, event, self.samples, self.events);
        &self.data[event * self.samples + sample]
    }
}

impl<T> IndexMut<(usize, usize)> for Grid<T> {
    fn index_mut(&mut self, (sample, event): (usize, usize)) -> &mut T {
        assert!(sample < self.samples && event < self.events, "index ({}, {}) out of bounds for grid of shape ({}, {})", sample, event, self.samples, self.events);
        &mut self.data[event * self.samples + sample]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout() {
        let grid = Grid::from_columns(&[
            vec![1.0, 2.0, 3.0],
            vec![4.0, 5.0, 6.0],
        ]).unwrap();

        assert_eq!(grid.shape(), (3, 2));
        assert_eq!(grid[(2, 0)], 3.0);
        assert_eq!(grid[(0, 1)], 4.0);
        assert_eq!(grid.column(1), &[4.0, 5.0, 6.0]);
        assert_eq!(grid.get(3, 0), None);

        let doubled = grid.map(|x| 2.0 * x);
        assert_eq!(doubled[(1, 1)], 10.0);
    }

    #[test]
    fn broadcasting() {
        let grid = Grid::broadcast(&[20.0, 50.0]);
        assert!(grid.check_broadcast(7).is_ok());
        assert_eq!(grid.column_for(5), &[20.0, 50.0]);

        let grid = Grid::from_columns(&[vec![20.0], vec![30.0]]).unwrap();
        assert!(grid.check_broadcast(2).is_ok());
        let err = grid.check_broadcast(3).unwrap_err();
        println!("{}", err);
    }

    #[test]
    fn ragged_columns() {
        let grid = Grid::from_columns(&[vec![1.0, 2.0], vec![3.0]]);
        assert!(grid.is_err());
    }

    #[test]
    fn empty() {
        let grid: Grid = Grid::zeros(0, 3);
        assert_eq!(grid.column(2).len(), 0);
        assert_eq!(grid.columns().count(), 3);
    }
}
