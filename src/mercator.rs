//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Spherical Mercator projection

use crate::error::Result;
use crate::tile::{google_to_tile, tile_to_google};
use crate::types::{Extent, Google, LngLat, Meters, Pixels, Tile};
use crate::validate::{validate_lng_lat, validate_pixels, validate_tile, validate_zoom};
use std::f64::consts::PI;

/// WGS84 semi-major axis in meters
pub const EARTH_RADIUS: f64 = 6378137.0;

pub const DEFAULT_TILE_SIZE: u32 = 256;

/// Latitude where the square Mercator world ends
pub const MAX_LATITUDE: f64 = 85.05112877980659;

/// Extent of tile (0, 0, 0) in degrees
pub fn world_extent() -> Extent {
    Extent {
        minx: -180.0,
        miny: -MAX_LATITUDE,
        maxx: 180.0,
        maxy: MAX_LATITUDE,
    }
}

/// Round half away from zero to `decimals` places.
pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    if value.is_finite() {
        (value * factor).round() / factor
    } else {
        value
    }
}

/// Spherical Mercator tile pyramid with square tiles of `tile_size` pixels
#[derive(PartialEq, Clone, Debug)]
pub struct Mercator {
    tile_size: u32,
    /// Meters per pixel at zoom level 0
    initial_resolution: f64,
    /// Half of the earth's circumference in meters
    origin_shift: f64,
}

impl Default for Mercator {
    fn default() -> Mercator {
        Mercator::new(DEFAULT_TILE_SIZE)
    }
}

impl Mercator {
    /// Google maps compatible pyramid (256 pixel tiles)
    pub fn web_mercator() -> Mercator {
        Mercator::default()
    }

    pub fn new(tile_size: u32) -> Mercator {
        Mercator {
            tile_size,
            initial_resolution: 2.0 * PI * EARTH_RADIUS / tile_size as f64,
            origin_shift: PI * EARTH_RADIUS,
        }
    }
    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }
    pub fn initial_resolution(&self) -> f64 {
        self.initial_resolution
    }
    pub fn origin_shift(&self) -> f64 {
        self.origin_shift
    }
    /// Meters per pixel at `zoom`
    pub fn resolution(&self, zoom: i32) -> f64 {
        self.initial_resolution / 2f64.powi(zoom)
    }

    /// Project longitude/latitude to meters, rounded to 0.1m.
    pub fn lng_lat_to_meters(&self, lnglat: LngLat) -> Result<Meters> {
        let LngLat { lng, lat } = validate_lng_lat(lnglat)?;
        let x = lng * self.origin_shift / 180.0;
        let y = ((90.0 + lat) * PI / 360.0).tan().ln() / (PI / 180.0);
        let y = y * self.origin_shift / 180.0;
        Ok(Meters {
            x: round_to(x, 1),
            y: round_to(y, 1),
        })
    }
    /// Unproject meters to longitude/latitude, rounded to 6 decimals.
    pub fn meters_to_lng_lat(&self, meters: Meters) -> LngLat {
        let lng = meters.x / self.origin_shift * 180.0;
        let lat = meters.y / self.origin_shift * 180.0;
        let lat = 180.0 / PI * (2.0 * (lat * PI / 180.0).exp().atan() - PI / 2.0);
        LngLat {
            lng: round_to(lng, 6),
            lat: round_to(lat, 6),
        }
    }
    /// Fractional pixel position, not rounded
    pub fn meters_to_pixels(&self, meters: Meters, zoom: i32) -> Pixels {
        let res = self.resolution(zoom);
        Pixels {
            x: (meters.x + self.origin_shift) / res,
            y: (meters.y + self.origin_shift) / res,
            zoom,
        }
    }
    pub fn pixels_to_meters(&self, pixels: Pixels) -> Meters {
        let Pixels { x, y, zoom } = validate_pixels(pixels);
        let res = self.resolution(zoom);
        Meters {
            x: round_to(x * res - self.origin_shift, 1),
            y: round_to(y * res - self.origin_shift, 1),
        }
    }
    /// TMS tile containing the pixel.
    ///
    /// A pixel exactly on a tile border belongs to the tile left/below of it
    /// (`ceil(p / tile_size) - 1`). Negative results are clamped to 0.
    pub fn pixels_to_tile(&self, pixels: Pixels) -> Tile {
        let Pixels { x, y, zoom } = validate_pixels(pixels);
        if zoom == 0 {
            return Tile::new(0, 0, 0);
        }
        let size = self.tile_size as f64;
        // float -> int casts saturate, -inf ends up at 0 after clamping
        let tx = ((x / size).ceil() - 1.0).max(0.0) as i64;
        let ty = ((y / size).ceil() - 1.0).max(0.0) as i64;
        Tile::new(tx, ty, zoom)
    }

    pub fn lng_lat_to_tile(&self, lnglat: LngLat, zoom: i32) -> Result<Tile> {
        let zoom = validate_zoom(zoom)?;
        let meters = self.lng_lat_to_meters(lnglat)?;
        let pixels = self.meters_to_pixels(meters, zoom);
        Ok(self.pixels_to_tile(pixels))
    }
    pub fn lng_lat_to_google(&self, lnglat: LngLat, zoom: i32) -> Result<Google> {
        let lnglat = validate_lng_lat(lnglat)?;
        if validate_zoom(zoom)? == 0 {
            return Ok(Google::new(0, 0, 0));
        }
        let tile = self.lng_lat_to_tile(lnglat, zoom)?;
        tile_to_google(tile)
    }
    pub fn meters_to_tile(&self, meters: Meters, zoom: i32) -> Result<Tile> {
        if validate_zoom(zoom)? == 0 {
            return Ok(Tile::new(0, 0, 0));
        }
        let pixels = self.meters_to_pixels(meters, zoom);
        Ok(self.pixels_to_tile(pixels))
    }

    /// Extent of a TMS tile in meters
    pub fn tile_to_bbox_meters(&self, tile: Tile) -> Result<Extent> {
        let Tile { x, y, zoom } = validate_tile(tile)?;
        let size = self.tile_size as f64;
        let min = self.pixels_to_meters(Pixels::new(x as f64 * size, y as f64 * size, zoom));
        let max = self.pixels_to_meters(Pixels::new(
            (x + 1) as f64 * size,
            (y + 1) as f64 * size,
            zoom,
        ));
        Ok(Extent {
            minx: min.x,
            miny: min.y,
            maxx: max.x,
            maxy: max.y,
        })
    }
    /// Extent of a TMS tile in degrees
    pub fn tile_to_bbox(&self, tile: Tile) -> Result<Extent> {
        let tile = validate_tile(tile)?;
        if tile.zoom == 0 {
            return Ok(world_extent());
        }
        let bbox = self.tile_to_bbox_meters(tile)?;
        let min = self.meters_to_lng_lat(Meters::new(bbox.minx, bbox.miny));
        let max = self.meters_to_lng_lat(Meters::new(bbox.maxx, bbox.maxy));
        Ok(Extent {
            minx: min.lng,
            miny: min.lat,
            maxx: max.lng,
            maxy: max.lat,
        })
    }
    pub fn google_to_bbox_meters(&self, google: Google) -> Result<Extent> {
        self.tile_to_bbox_meters(google_to_tile(google)?)
    }
    pub fn google_to_bbox(&self, google: Google) -> Result<Extent> {
        self.tile_to_bbox(google_to_tile(google)?)
    }

    /// Project a degree extent corner by corner. Corner order is not checked.
    pub fn bbox_to_meters(&self, bbox: &Extent) -> Result<Extent> {
        let min = self.lng_lat_to_meters(LngLat::new(bbox.minx, bbox.miny))?;
        let max = self.lng_lat_to_meters(LngLat::new(bbox.maxx, bbox.maxy))?;
        Ok(Extent {
            minx: min.x,
            miny: min.y,
            maxx: max.x,
            maxy: max.y,
        })
    }
}

/// Center of an extent, rounded to 6 decimals
pub fn bbox_to_center(bbox: &Extent) -> LngLat {
    let lng = (bbox.minx - bbox.maxx) / 2.0 + bbox.maxx;
    let lat = (bbox.miny - bbox.maxy) / 2.0 + bbox.maxy;
    LngLat {
        lng: round_to(lng, 6),
        lat: round_to(lat, 6),
    }
}
