//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Grid iterators

use crate::grid::GridLevel;
use crate::range::{range, StepRange};
use crate::types::Tile;

/// Level-by-level iterator.
///
/// Tiles are generated on demand, ordered by zoom, row and column.
/// Consumed tiles can't be visited again, create a new iterator instead.
pub struct GridIterator {
    levels: std::vec::IntoIter<GridLevel>,
    zoom: i32,
    /// Columns of the current level
    columns: StepRange,
    /// Remaining rows of the current level
    rows: StepRange,
    row: i64,
    /// Remaining columns of the current row
    cols: StepRange,
    remaining: u64,
}

impl GridIterator {
    pub fn new(levels: Vec<GridLevel>) -> GridIterator {
        let remaining = levels
            .iter()
            .fold(0u64, |count, level| count.saturating_add(level.count()));
        GridIterator {
            levels: levels.into_iter(),
            zoom: 0,
            columns: range(0, 0),
            rows: range(0, 0),
            row: 0,
            cols: range(0, 0),
            remaining,
        }
    }
    /// Number of tiles not yet generated
    pub fn remaining(&self) -> u64 {
        self.remaining
    }
}

impl Iterator for GridIterator {
    type Item = Tile;

    fn next(&mut self) -> Option<Tile> {
        loop {
            if let Some(column) = self.cols.next() {
                self.remaining = self.remaining.saturating_sub(1);
                return Some(Tile::new(column, self.row, self.zoom));
            }
            if let Some(row) = self.rows.next() {
                self.row = row;
                self.cols = self.columns.clone();
                continue;
            }
            let level = self.levels.next()?;
            self.zoom = level.zoom;
            self.columns = level.columns;
            self.rows = level.rows;
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.remaining <= usize::MAX as u64 {
            (self.remaining as usize, Some(self.remaining as usize))
        } else {
            (usize::MAX, None)
        }
    }
}

/// Iterator over batches of grid tiles.
///
/// Every batch holds `size` tiles, except the last one which may be shorter.
/// Batches may span several zoom levels.
pub struct GridBulkIterator {
    griditer: GridIterator,
    size: usize,
}

impl GridBulkIterator {
    pub fn new(griditer: GridIterator, size: usize) -> GridBulkIterator {
        GridBulkIterator { griditer, size }
    }
}

impl Iterator for GridBulkIterator {
    type Item = Vec<Tile>;

    fn next(&mut self) -> Option<Vec<Tile>> {
        let capacity = std::cmp::min(self.size as u64, self.griditer.remaining()) as usize;
        let mut batch = Vec::with_capacity(capacity);
        batch.extend(self.griditer.by_ref().take(self.size));
        if batch.is_empty() {
            None
        } else {
            Some(batch)
        }
    }
}

#[test]
fn test_level_iter() {
    let levels = vec![
        GridLevel {
            columns: range(0, 1),
            rows: range(0, 1),
            zoom: 0,
        },
        GridLevel {
            columns: range(0, 2),
            rows: range(0, 2),
            zoom: 1,
        },
    ];
    let griditer = GridIterator::new(levels);
    assert_eq!(griditer.size_hint(), (5, Some(5)));
    let cells = griditer.collect::<Vec<_>>();
    assert_eq!(
        cells,
        vec![
            Tile::new(0, 0, 0),
            Tile::new(0, 0, 1),
            Tile::new(1, 0, 1),
            Tile::new(0, 1, 1),
            Tile::new(1, 1, 1),
        ]
    );
}

#[test]
fn test_offset_ranges() {
    let levels = vec![GridLevel {
        columns: range(298, 300),
        rows: range(655, 657),
        zoom: 10,
    }];
    let cells = GridIterator::new(levels).collect::<Vec<_>>();
    assert_eq!(
        cells,
        vec![
            Tile::new(298, 655, 10),
            Tile::new(299, 655, 10),
            Tile::new(298, 656, 10),
            Tile::new(299, 656, 10),
        ]
    );
}

#[test]
fn test_no_levels() {
    let mut griditer = GridIterator::new(Vec::new());
    assert_eq!(griditer.remaining(), 0);
    assert_eq!(griditer.next(), None);
    assert_eq!(griditer.next(), None);
}

#[test]
fn test_bulk_iter() {
    let levels = vec![
        GridLevel {
            columns: range(0, 1),
            rows: range(0, 1),
            zoom: 0,
        },
        GridLevel {
            columns: range(0, 2),
            rows: range(0, 2),
            zoom: 1,
        },
    ];
    let batches = GridBulkIterator::new(GridIterator::new(levels.clone()), 2).collect::<Vec<_>>();
    assert_eq!(
        batches,
        vec![
            vec![Tile::new(0, 0, 0), Tile::new(0, 0, 1)],
            vec![Tile::new(1, 0, 1), Tile::new(0, 1, 1)],
            vec![Tile::new(1, 1, 1)],
        ]
    );

    // no trailing empty batch
    let batches = GridBulkIterator::new(GridIterator::new(levels), 5).collect::<Vec<_>>();
    assert_eq!(batches.len(), 1);
    assert_eq!(batches[0].len(), 5);
}
