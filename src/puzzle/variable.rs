//! Grid slots.

use std::fmt;

/// Orientation of a slot in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Left to right along a row.
    Across,
    /// Top to bottom along a column.
    Down,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Across => write!(f, "across"),
            Direction::Down => write!(f, "down"),
        }
    }
}

/// A slot in the grid that receives one word.
///
/// Identified by its starting cell (`i` = row, `j` = column), its
/// direction and its length. Two variables are equal iff all four
/// fields match.
///
/// # Examples
///
/// ```
/// use u_crossword::puzzle::{Direction, Variable};
///
/// let v = Variable::new(1, 2, Direction::Down, 3);
/// assert_eq!(v.cells(), vec![(1, 2), (2, 2), (3, 2)]);
/// assert_eq!(v.to_string(), "(1, 2) down : 3");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Variable {
    /// Starting row.
    pub i: usize,
    /// Starting column.
    pub j: usize,
    /// Direction the word runs in.
    pub direction: Direction,
    /// Number of cells.
    pub length: usize,
}

impl Variable {
    /// Creates a new variable.
    pub fn new(i: usize, j: usize, direction: Direction, length: usize) -> Self {
        Self {
            i,
            j,
            direction,
            length,
        }
    }

    /// Grid cells covered by this slot, in word order.
    pub fn cells(&self) -> Vec<(usize, usize)> {
        (0..self.length)
            .map(|k| match self.direction {
                Direction::Across => (self.i, self.j + k),
                Direction::Down => (self.i + k, self.j),
            })
            .collect()
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}) {} : {}",
            self.i, self.j, self.direction, self.length
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cells_across() {
        let v = Variable::new(0, 1, Direction::Across, 4);
        assert_eq!(v.cells(), vec![(0, 1), (0, 2), (0, 3), (0, 4)]);
    }

    #[test]
    fn test_cells_down() {
        let v = Variable::new(2, 0, Direction::Down, 2);
        assert_eq!(v.cells(), vec![(2, 0), (3, 0)]);
    }

    #[test]
    fn test_equality_requires_all_fields() {
        let a = Variable::new(0, 0, Direction::Across, 3);
        assert_eq!(a, Variable::new(0, 0, Direction::Across, 3));
        assert_ne!(a, Variable::new(0, 0, Direction::Down, 3));
        assert_ne!(a, Variable::new(0, 0, Direction::Across, 4));
        assert_ne!(a, Variable::new(0, 1, Direction::Across, 3));
    }

    #[test]
    fn test_display() {
        let v = Variable::new(4, 1, Direction::Across, 4);
        assert_eq!(v.to_string(), "(4, 1) across : 4");
    }
}
