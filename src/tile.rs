//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Tile adressing schemes: TMS, Google/XYZ and Quadkeys

use crate::error::{MercatorError, Result};
use crate::types::{Google, Tile};
use crate::validate::{validate_google, validate_tile, validate_zoom};

/// Map id of a tile: `2^z * (2^z + x) + y`.
///
/// Unique for tiles of the same zoom level.
pub fn hash(tile: Tile) -> i64 {
    let n = 1i64.wrapping_shl(tile.zoom as u32);
    n.wrapping_mul(n.wrapping_add(tile.x)).wrapping_add(tile.y)
}

/// Flip y from bottom-left to top-left origin
pub fn tile_to_google(tile: Tile) -> Result<Google> {
    let Tile { x, y, zoom } = validate_tile(tile)?;
    if zoom == 0 {
        return Ok(Google::new(0, 0, 0));
    }
    Ok(Google::new(x, ((1i64 << zoom) - 1) - y, zoom))
}

/// Flip y from top-left to bottom-left origin
pub fn google_to_tile(google: Google) -> Result<Tile> {
    let Google { x, y, zoom } = validate_google(google)?;
    Ok(Tile::new(x, (1i64 << zoom) - y - 1, zoom))
}

/// Quadkey of a TMS tile. Zoom level 0 has the empty quadkey.
pub fn tile_to_quadkey(tile: Tile) -> Result<String> {
    let Tile { x, y, zoom } = validate_tile(tile)?;
    if zoom == 0 {
        return Ok(String::new());
    }
    let y = ((1i64 << zoom) - 1) - y;
    let quadkey: String = (1..=zoom)
        .rev()
        .map(|i| {
            let mask = 1i64 << (i - 1);
            let mut digit = b'0';
            if x & mask != 0 {
                digit += 1;
            }
            if y & mask != 0 {
                digit += 2;
            }
            digit as char
        })
        .collect();
    Ok(quadkey)
}

/// Google tile of a quadkey. The zoom level is the quadkey length.
pub fn quadkey_to_google(quadkey: &str) -> Result<Google> {
    let zoom = validate_zoom(quadkey.chars().count() as i32)?;
    let mut x = 0i64;
    let mut y = 0i64;
    for (digit, i) in quadkey.chars().zip((1..=zoom).rev()) {
        let mask = 1i64 << (i - 1);
        match digit {
            '0' => {}
            '1' => x += mask,
            '2' => y += mask,
            '3' => {
                x += mask;
                y += mask;
            }
            _ => return Err(MercatorError::InvalidQuadkeyDigit(digit)),
        }
    }
    Ok(Google::new(x, y, zoom))
}

pub fn quadkey_to_tile(quadkey: &str) -> Result<Tile> {
    google_to_tile(quadkey_to_google(quadkey)?)
}

pub fn google_to_quadkey(google: Google) -> Result<String> {
    tile_to_quadkey(google_to_tile(google)?)
}
