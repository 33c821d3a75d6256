//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Coordinate value types

/// Longitude & latitude in decimal degrees
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct LngLat {
    pub lng: f64,
    pub lat: f64,
}

impl LngLat {
    pub fn new(lng: f64, lat: f64) -> LngLat {
        LngLat { lng, lat }
    }
}

/// Spherical Mercator (EPSG:3857) coordinates in meters
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct Meters {
    pub x: f64,
    pub y: f64,
}

impl Meters {
    pub fn new(x: f64, y: f64) -> Meters {
        Meters { x, y }
    }
}

/// Position in the global pixel grid of a zoom level
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct Pixels {
    pub x: f64,
    pub y: f64,
    pub zoom: i32,
}

impl Pixels {
    pub fn new(x: f64, y: f64, zoom: i32) -> Pixels {
        Pixels { x, y, zoom }
    }
}

/// Tile in TMS adressing scheme (origin bottom left)
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct Tile {
    pub x: i64,
    pub y: i64,
    pub zoom: i32,
}

impl Tile {
    pub fn new(x: i64, y: i64, zoom: i32) -> Tile {
        Tile { x, y, zoom }
    }
}

/// Tile in Google/XYZ adressing scheme (origin top left)
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct Google {
    pub x: i64,
    pub y: i64,
    pub zoom: i32,
}

impl Google {
    pub fn new(x: i64, y: i64, zoom: i32) -> Google {
        Google { x, y, zoom }
    }
}

/// Bounding box ordered as west, south, east, north.
/// Used for degrees and meters alike, callers keep units consistent.
#[derive(PartialEq, Clone, Debug)]
pub struct Extent {
    pub minx: f64,
    pub miny: f64,
    pub maxx: f64,
    pub maxy: f64,
}

impl Extent {
    pub fn new(minx: f64, miny: f64, maxx: f64, maxy: f64) -> Extent {
        Extent {
            minx,
            miny,
            maxx,
            maxy,
        }
    }
}
