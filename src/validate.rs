//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Input validation
//!
//! Every validator hands back its input on success, so it can be used inline
//! in a conversion chain.

use crate::error::{MercatorError, Result};
use crate::types::{Google, LngLat, Pixels, Tile};

/// Highest supported zoom level
pub const MAX_ZOOM: i32 = 30;

pub fn validate_zoom(zoom: i32) -> Result<i32> {
    if zoom < 0 {
        Err(MercatorError::ZoomTooSmall(zoom))
    } else if zoom > MAX_ZOOM {
        Err(MercatorError::ZoomTooLarge(zoom))
    } else {
        Ok(zoom)
    }
}

pub fn validate_lng_lat(lnglat: LngLat) -> Result<LngLat> {
    // NaN fails both range checks
    if !(-90.0..=90.0).contains(&lnglat.lat) {
        Err(MercatorError::LatitudeOutOfRange(lnglat.lat))
    } else if !(-180.0..=180.0).contains(&lnglat.lng) {
        Err(MercatorError::LongitudeOutOfRange(lnglat.lng))
    } else {
        Ok(lnglat)
    }
}

/// Checks zoom, then x, then y, then the upper bound `2^zoom`.
fn validate_tile_index(x: i64, y: i64, zoom: i32) -> Result<()> {
    validate_zoom(zoom)?;
    if x < 0 {
        return Err(MercatorError::NegativeTileX(x));
    }
    if y < 0 {
        return Err(MercatorError::NegativeTileY(y));
    }
    let max_count = 1i64 << zoom;
    if x >= max_count || y >= max_count {
        return Err(MercatorError::TileOutOfBounds { x, y, zoom });
    }
    Ok(())
}

pub fn validate_tile(tile: Tile) -> Result<Tile> {
    validate_tile_index(tile.x, tile.y, tile.zoom)?;
    Ok(tile)
}

/// Google tiles share the bounds of TMS tiles.
pub fn validate_google(google: Google) -> Result<Google> {
    validate_tile_index(google.x, google.y, google.zoom)?;
    Ok(google)
}

/// Pixels are accepted as they are.
pub fn validate_pixels(pixels: Pixels) -> Pixels {
    // TODO: reject negative pixels and pixels beyond the grid of `zoom` once
    // pixels_to_tile no longer needs to accept the overshoot of latitude 90
    pixels
}
