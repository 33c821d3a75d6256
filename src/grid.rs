//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Tile grids covering an extent

use crate::error::{MercatorError, Result};
use crate::grid_iterator::{GridBulkIterator, GridIterator};
use crate::mercator::Mercator;
use crate::range::{range, StepRange};
use crate::types::{Extent, LngLat};

/// Tile columns and rows of one zoom level
#[derive(PartialEq, Clone, Debug)]
pub struct GridLevel {
    pub columns: StepRange,
    pub rows: StepRange,
    pub zoom: i32,
}

impl GridLevel {
    /// Number of tiles in this level
    pub fn count(&self) -> u64 {
        self.columns
            .count_values()
            .saturating_mul(self.rows.count_values())
    }
}

impl Mercator {
    /// TMS tile ranges covering a degree extent for each zoom level in `minzoom..=maxzoom`
    pub fn grid_levels(
        &self,
        extent: &Extent,
        minzoom: i32,
        maxzoom: i32,
    ) -> Result<Vec<GridLevel>> {
        if minzoom > maxzoom {
            warn!(
                "Empty zoom range {}..={}, no tiles to generate",
                minzoom, maxzoom
            );
        }
        (minzoom..=maxzoom)
            .map(|zoom| {
                let t1 = self.lng_lat_to_tile(LngLat::new(extent.minx, extent.miny), zoom)?;
                let t2 = self.lng_lat_to_tile(LngLat::new(extent.maxx, extent.maxy), zoom)?;
                let (minx, maxx) = (t1.x.min(t2.x), t1.x.max(t2.x));
                let (miny, maxy) = (t1.y.min(t2.y), t1.y.max(t2.y));
                debug!(
                    "Grid level {}: columns {}..={} rows {}..={}",
                    zoom, minx, maxx, miny, maxy
                );
                Ok(GridLevel {
                    columns: range(minx, maxx + 1),
                    rows: range(miny, maxy + 1),
                    zoom,
                })
            })
            .collect()
    }
    /// Total number of tiles generated by [`Mercator::grid`], without iterating
    pub fn grid_count(&self, extent: &Extent, minzoom: i32, maxzoom: i32) -> Result<u64> {
        let levels = self.grid_levels(extent, minzoom, maxzoom)?;
        Ok(levels
            .iter()
            .fold(0u64, |count, level| count.saturating_add(level.count())))
    }
    /// Lazy iterator over all tiles covering `extent`, ordered by zoom, row and column
    pub fn grid(&self, extent: &Extent, minzoom: i32, maxzoom: i32) -> Result<GridIterator> {
        let levels = self.grid_levels(extent, minzoom, maxzoom)?;
        Ok(GridIterator::new(levels))
    }
    /// Like [`Mercator::grid`], but yields batches of up to `size` tiles
    pub fn grid_bulk(
        &self,
        extent: &Extent,
        minzoom: i32,
        maxzoom: i32,
        size: usize,
    ) -> Result<GridBulkIterator> {
        if size == 0 {
            return Err(MercatorError::InvalidBatchSize);
        }
        let griditer = self.grid(extent, minzoom, maxzoom)?;
        Ok(GridBulkIterator::new(griditer, size))
    }
}
