//! Crossword grids loaded from text.
//!
//! A structure is a block of lines, one per grid row. `_` marks an open
//! cell; any other character (or a missing one at the end of a short row)
//! is blocked. Every maximal run of two or more open cells, read across
//! or down, becomes a [`Variable`].

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use super::types::{Overlap, Puzzle};
use super::variable::{Direction, Variable};
use crate::csp::Assignment;
use crate::error::PuzzleError;

/// Marker for an open cell in structure text.
pub const OPEN_CELL: char = '_';

/// Glyph used for blocked cells when rendering.
pub const BLOCKED_GLYPH: char = '█';

/// A parsed crossword: grid shape, slots, crossings and vocabulary.
///
/// # Examples
///
/// ```
/// use u_crossword::puzzle::{Crossword, Puzzle};
///
/// let crossword = Crossword::parse("___\n#_#\n#_#", "cat\ndog\nace").unwrap();
/// assert_eq!(crossword.variables().len(), 2);
/// assert!(crossword.vocabulary().contains("ACE"));
/// ```
#[derive(Debug, Clone)]
pub struct Crossword {
    height: usize,
    width: usize,
    structure: Vec<Vec<bool>>,
    words: BTreeSet<String>,
    variables: BTreeSet<Variable>,
    overlaps: BTreeMap<(Variable, Variable), Overlap>,
    neighbors: BTreeMap<Variable, BTreeSet<Variable>>,
    no_neighbors: BTreeSet<Variable>,
}

impl Crossword {
    /// Reads a structure file and a word file.
    ///
    /// # Errors
    ///
    /// Fails if either file cannot be read or the structure is empty.
    pub fn from_files(
        structure: impl AsRef<Path>,
        words: impl AsRef<Path>,
    ) -> Result<Self, PuzzleError> {
        let structure = std::fs::read_to_string(structure)?;
        let words = std::fs::read_to_string(words)?;
        Self::parse(&structure, &words)
    }

    /// Parses structure text and a newline-separated word list.
    ///
    /// Words are trimmed and upper-cased; blank lines are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::EmptyStructure`] if the structure has no rows.
    pub fn parse(structure: &str, words: &str) -> Result<Self, PuzzleError> {
        let rows: Vec<&str> = structure.lines().collect();
        if rows.is_empty() {
            return Err(PuzzleError::EmptyStructure);
        }
        let height = rows.len();
        let width = rows
            .iter()
            .map(|row| row.chars().count())
            .max()
            .unwrap_or(0);

        let structure: Vec<Vec<bool>> = rows
            .iter()
            .map(|row| {
                let mut cells: Vec<bool> = row.chars().map(|c| c == OPEN_CELL).collect();
                cells.resize(width, false);
                cells
            })
            .collect();

        let words = words
            .lines()
            .map(str::trim)
            .filter(|w| !w.is_empty())
            .map(str::to_uppercase)
            .collect();

        let variables = find_variables(&structure, height, width);
        let overlaps = find_overlaps(&variables);

        let mut neighbors: BTreeMap<Variable, BTreeSet<Variable>> =
            variables.iter().map(|v| (*v, BTreeSet::new())).collect();
        for (x, y) in overlaps.keys() {
            neighbors.entry(*x).or_default().insert(*y);
        }

        Ok(Self {
            height,
            width,
            structure,
            words,
            variables,
            overlaps,
            neighbors,
            no_neighbors: BTreeSet::new(),
        })
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Whether the cell at row `i`, column `j` is open.
    pub fn is_open(&self, i: usize, j: usize) -> bool {
        self.structure
            .get(i)
            .and_then(|row| row.get(j))
            .copied()
            .unwrap_or(false)
    }

    /// Letters placed by `assignment`, indexed `[row][column]`.
    ///
    /// Cells not covered by an assigned word are `None`.
    pub fn letter_grid(&self, assignment: &Assignment) -> Vec<Vec<Option<char>>> {
        let mut letters = vec![vec![None; self.width]; self.height];
        for (variable, word) in assignment.iter() {
            for ((i, j), letter) in variable.cells().into_iter().zip(word.chars()) {
                if let Some(cell) = letters.get_mut(i).and_then(|row| row.get_mut(j)) {
                    *cell = Some(letter);
                }
            }
        }
        letters
    }

    /// Renders `assignment` as text, one line per grid row.
    ///
    /// Blocked cells are drawn as [`BLOCKED_GLYPH`], empty open cells as a space.
    pub fn render(&self, assignment: &Assignment) -> String {
        let letters = self.letter_grid(assignment);
        let mut out = String::with_capacity(self.height * (self.width + 1));
        for (i, row) in letters.iter().enumerate() {
            for (j, letter) in row.iter().enumerate() {
                if self.is_open(i, j) {
                    out.push(letter.unwrap_or(' '));
                } else {
                    out.push(BLOCKED_GLYPH);
                }
            }
            out.push('\n');
        }
        out
    }
}

impl Puzzle for Crossword {
    fn variables(&self) -> &BTreeSet<Variable> {
        &self.variables
    }

    fn neighbors(&self, variable: &Variable) -> &BTreeSet<Variable> {
        self.neighbors.get(variable).unwrap_or(&self.no_neighbors)
    }

    fn overlap(&self, x: &Variable, y: &Variable) -> Option<Overlap> {
        self.overlaps.get(&(*x, *y)).copied()
    }

    fn vocabulary(&self) -> &BTreeSet<String> {
        &self.words
    }
}

fn find_variables(structure: &[Vec<bool>], height: usize, width: usize) -> BTreeSet<Variable> {
    let open = |i: usize, j: usize| structure[i][j];
    let mut variables = BTreeSet::new();

    for i in 0..height {
        for j in 0..width {
            if !open(i, j) {
                continue;
            }

            if i == 0 || !open(i - 1, j) {
                let length = (i..height).take_while(|&k| open(k, j)).count();
                if length > 1 {
                    variables.insert(Variable::new(i, j, Direction::Down, length));
                }
            }

            if j == 0 || !open(i, j - 1) {
                let length = (j..width).take_while(|&k| open(i, k)).count();
                if length > 1 {
                    variables.insert(Variable::new(i, j, Direction::Across, length));
                }
            }
        }
    }
    variables
}

fn find_overlaps(variables: &BTreeSet<Variable>) -> BTreeMap<(Variable, Variable), Overlap> {
    let cells: BTreeMap<Variable, Vec<(usize, usize)>> =
        variables.iter().map(|v| (*v, v.cells())).collect();

    let mut overlaps = BTreeMap::new();
    for (x, x_cells) in &cells {
        for (y, y_cells) in &cells {
            if x == y {
                continue;
            }
            // Two straight slots share at most one cell.
            let shared = x_cells.iter().enumerate().find_map(|(a, cell)| {
                y_cells
                    .iter()
                    .position(|other| other == cell)
                    .map(|b| Overlap::new(a, b))
            });
            if let Some(overlap) = shared {
                overlaps.insert((*x, *y), overlap);
            }
        }
    }
    overlaps
}
