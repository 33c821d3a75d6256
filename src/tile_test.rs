//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::error::{ErrorKind, MercatorError};
use crate::tile::{
    google_to_quadkey, google_to_tile, hash, quadkey_to_google, quadkey_to_tile, tile_to_google,
    tile_to_quadkey,
};
use crate::types::{Google, Tile};

const TILE: Tile = Tile {
    x: 2389,
    y: 5245,
    zoom: 13,
};
const GOOGLE: Google = Google {
    x: 2389,
    y: 2946,
    zoom: 13,
};
const QUADKEY: &str = "0302321010121";

fn sample_tiles() -> Vec<Tile> {
    vec![
        TILE,
        Tile::new(0, 0, 1),
        Tile::new(1, 0, 1),
        Tile::new(0, 1, 1),
        Tile::new(1, 1, 1),
        Tile::new(3, 5, 3),
        Tile::new(6963, 5003, 13),
        Tile::new(486, 691, 10),
        Tile::new(0, 0, 30),
        Tile::new((1 << 30) - 1, (1 << 30) - 1, 30),
        Tile::new(123456789, 987654321, 30),
    ]
}

#[test]
fn test_hash() {
    assert_eq!(hash(Tile::new(312, 480, 4)), 5728);
    assert_eq!(hash(Tile::new(0, 0, 0)), 1);
    // unique within a zoom level
    let mut ids = Vec::new();
    for x in 0..8 {
        for y in 0..8 {
            ids.push(hash(Tile::new(x, y, 3)));
        }
    }
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 64);
    assert!(hash(Tile::new((1 << 30) - 1, (1 << 30) - 1, 30)) > 0);
}

#[test]
fn test_tile_to_google() {
    assert_eq!(tile_to_google(TILE), Ok(GOOGLE));
    assert_eq!(tile_to_google(Tile::new(0, 0, 0)), Ok(Google::new(0, 0, 0)));
    assert_eq!(
        tile_to_google(Tile::new(6963, 5003, 13)),
        Ok(Google::new(6963, 3188, 13))
    );
    assert_eq!(tile_to_google(Tile::new(0, 0, 1)), Ok(Google::new(0, 1, 1)));
    assert_eq!(
        tile_to_google(Tile::new(8, 0, 3)),
        Err(MercatorError::TileOutOfBounds { x: 8, y: 0, zoom: 3 })
    );
}

#[test]
fn test_google_to_tile() {
    assert_eq!(google_to_tile(GOOGLE), Ok(TILE));
    assert_eq!(google_to_tile(Google::new(0, 0, 0)), Ok(Tile::new(0, 0, 0)));
    // zoom level 0 only has tile (0, 0, 0)
    assert!(google_to_tile(Google::new(0, 1, 0)).is_err());
    assert_eq!(
        google_to_tile(Google::new(-1, 0, 4)),
        Err(MercatorError::NegativeTileX(-1))
    );
}

#[test]
fn test_google_roundtrip() {
    for tile in sample_tiles() {
        let google = tile_to_google(tile).unwrap();
        assert_eq!(google_to_tile(google), Ok(tile));
    }
}

#[test]
fn test_tile_to_quadkey() {
    assert_eq!(tile_to_quadkey(TILE).unwrap(), QUADKEY);
    assert_eq!(tile_to_quadkey(Tile::new(0, 0, 0)).unwrap(), "");
    assert_eq!(
        tile_to_quadkey(Tile::new(6963, 5003, 13)).unwrap(),
        "1321102330211"
    );
    // NW, NE, SW, SE quadrants at zoom 1
    assert_eq!(tile_to_quadkey(Tile::new(0, 1, 1)).unwrap(), "0");
    assert_eq!(tile_to_quadkey(Tile::new(1, 1, 1)).unwrap(), "1");
    assert_eq!(tile_to_quadkey(Tile::new(0, 0, 1)).unwrap(), "2");
    assert_eq!(tile_to_quadkey(Tile::new(1, 0, 1)).unwrap(), "3");
    assert_eq!(tile_to_quadkey(Tile::new(3, 3, 2)).unwrap(), "11");
    assert!(tile_to_quadkey(Tile::new(0, 0, 31)).is_err());
}

#[test]
fn test_quadkey_to_google() {
    assert_eq!(quadkey_to_google(QUADKEY), Ok(GOOGLE));
    assert_eq!(quadkey_to_google(""), Ok(Google::new(0, 0, 0)));
    assert_eq!(quadkey_to_google("3"), Ok(Google::new(1, 1, 1)));
    assert_eq!(
        quadkey_to_google("1321102330211"),
        Ok(Google::new(6963, 3188, 13))
    );
    assert_eq!(google_to_quadkey(GOOGLE).unwrap(), QUADKEY);
}

#[test]
fn test_quadkey_to_tile() {
    assert_eq!(quadkey_to_tile(QUADKEY), Ok(TILE));

    let err = quadkey_to_tile("030486861").unwrap_err();
    assert_eq!(err, MercatorError::InvalidQuadkeyDigit('4'));
    assert_eq!(err.kind(), ErrorKind::Format);
    assert_eq!(err.to_string(), "Invalid Quadkey digit sequence");
    assert!(quadkey_to_tile("12a").is_err());

    let too_long = "0".repeat(31);
    assert_eq!(
        quadkey_to_tile(&too_long),
        Err(MercatorError::ZoomTooLarge(31))
    );
}

#[test]
fn test_quadkey_roundtrip() {
    for tile in sample_tiles() {
        let quadkey = tile_to_quadkey(tile).unwrap();
        assert_eq!(quadkey.len(), tile.zoom as usize);
        assert_eq!(quadkey_to_tile(&quadkey), Ok(tile));
    }
}
