//! Conversions between the coordinate systems of web map tile pyramids
//!
//! Longitude/latitude, Spherical Mercator meters, pixels, TMS tiles,
//! Google/XYZ tiles and Microsoft Quadkeys.
//!
//! ## Conversions
//!
//! ```rust
//! use tile_mercator::{tile_to_quadkey, LngLat, Mercator, Tile};
//!
//! let mercator = Mercator::web_mercator();
//! let tile = mercator
//!     .lng_lat_to_tile(LngLat::new(-75.000057, 44.999888), 13)
//!     .unwrap();
//! assert_eq!(tile, Tile::new(2389, 5245, 13));
//! assert_eq!(tile_to_quadkey(tile).unwrap(), "0302321010121");
//! ```
//!
//! ## Grid iterators
//!
//! ```rust
//! use tile_mercator::{Extent, Mercator};
//!
//! let mercator = Mercator::web_mercator();
//! let extent = Extent::new(-75.1, 44.9, -74.9, 45.1);
//! for tile in mercator.grid(&extent, 10, 11).unwrap() {
//!     println!("Tile {}/{}/{}", tile.zoom, tile.x, tile.y);
//! }
//! assert_eq!(mercator.grid_count(&extent, 10, 11).unwrap(), 8);
//! ```
//!
//! ## Custom tile size
//!
//! ```rust
//! use tile_mercator::{parse_config, Config, Mercator, MercatorCfg};
//!
//! let cfg: MercatorCfg = parse_config("tile_size = 512".to_string(), "").unwrap();
//! let mercator = Mercator::from_config(&cfg).unwrap();
//! assert_eq!(mercator.resolution(1), Mercator::web_mercator().resolution(2));
//! ```

#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;

mod config;
mod error;
mod grid;
mod grid_iterator;
mod mercator;
mod range;
mod tile;
mod types;
mod validate;

#[cfg(test)]
mod config_test;
#[cfg(test)]
mod tile_test;

pub use config::{default_tile_size, parse_config, Config, MercatorCfg};
pub use error::{ErrorKind, MercatorError, Result};
pub use grid::GridLevel;
pub use grid_iterator::{GridBulkIterator, GridIterator};
pub use mercator::{
    bbox_to_center, world_extent, Mercator, DEFAULT_TILE_SIZE, EARTH_RADIUS, MAX_LATITUDE,
};
pub use range::{range, range_step, StepRange};
pub use tile::{
    google_to_quadkey, google_to_tile, hash, quadkey_to_google, quadkey_to_tile, tile_to_google,
    tile_to_quadkey,
};
pub use types::{Extent, Google, LngLat, Meters, Pixels, Tile};
pub use validate::{
    validate_google, validate_lng_lat, validate_pixels, validate_tile, validate_zoom, MAX_ZOOM,
};
