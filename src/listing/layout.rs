// src/listing/layout.rs
use std::io::{self, Write};

/// Gap between grid columns.
const COLUMN_GAP: usize = 2;

/// Column-major grid for short listings: entries fill down a column before
/// moving to the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub col_width: usize,
    pub cols: usize,
    pub rows: usize,
    len: usize,
}

/// One printed slot of a grid row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub index: usize,
    pub padded: bool,
}

impl GridLayout {
    /// Returns `None` when there is nothing to lay out.
    pub fn compute<S: AsRef<str>>(names: &[S], width: usize) -> Option<Self> {
        let max_len = names.iter().map(|n| display_len(n.as_ref())).max()?;
        if max_len == 0 {
            return None;
        }

        let col_width = max_len + COLUMN_GAP;
        let cols = (width / col_width).max(1);
        let rows = names.len().div_ceil(cols);
        Some(GridLayout { col_width, cols, rows, len: names.len() })
    }

    /// Cells of `row` in printing order. Slots past the last entry are skipped.
    pub fn row(&self, row: usize) -> impl Iterator<Item = Cell> + '_ {
        (0..self.cols).filter_map(move |col| {
            let index = col * self.rows + row;
            if index >= self.len {
                return None;
            }
            let last = col == self.cols - 1 || index + self.rows >= self.len;
            Some(Cell { index, padded: !last })
        })
    }

    /// Writes every row. `decorate` receives an entry's index and name and
    /// returns its display form; padding is computed from the undecorated name.
    pub fn render<S, W, F>(&self, names: &[S], out: &mut W, mut decorate: F) -> io::Result<()>
    where
        S: AsRef<str>,
        W: Write,
        F: FnMut(usize, &str) -> String,
    {
        for r in 0..self.rows {
            for cell in self.row(r) {
                let name = names[cell.index].as_ref();
                write!(out, "{}", decorate(cell.index, name))?;
                if cell.padded {
                    let pad = self.col_width.saturating_sub(display_len(name));
                    write!(out, "{:pad$}", "", pad = pad)?;
                }
            }
            writeln!(out)?;
        }
        Ok(())
    }
}

fn display_len(name: &str) -> usize {
    name.chars().count()
}
