//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Conversion errors

use std::fmt;

pub type Result<T> = std::result::Result<T, MercatorError>;

/// Error category
#[derive(PartialEq, Clone, Copy, Debug)]
pub enum ErrorKind {
    /// Input outside of the projection or tile pyramid bounds
    Range,
    /// Malformed tile address
    Format,
}

#[derive(PartialEq, Clone, Debug)]
pub enum MercatorError {
    ZoomTooSmall(i32),
    ZoomTooLarge(i32),
    LatitudeOutOfRange(f64),
    LongitudeOutOfRange(f64),
    NegativeTileX(i64),
    NegativeTileY(i64),
    TileOutOfBounds { x: i64, y: i64, zoom: i32 },
    InvalidQuadkeyDigit(char),
    InvalidBatchSize,
}

impl MercatorError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            MercatorError::InvalidQuadkeyDigit(_) => ErrorKind::Format,
            _ => ErrorKind::Range,
        }
    }
}

impl fmt::Display for MercatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MercatorError::ZoomTooSmall(_) => write!(f, "<zoom> cannot be less than 0"),
            MercatorError::ZoomTooLarge(_) => write!(f, "<zoom> cannot be greater than 30"),
            MercatorError::LatitudeOutOfRange(_) => {
                write!(f, "LngLat [lat] must be within -90 to 90 degrees")
            }
            MercatorError::LongitudeOutOfRange(_) => {
                write!(f, "LngLat [lng] must be within -180 to 180 degrees")
            }
            MercatorError::NegativeTileX(_) => write!(f, "<x> must not be less than 0"),
            MercatorError::NegativeTileY(_) => write!(f, "<y> must not be less than 0"),
            MercatorError::TileOutOfBounds { .. } => write!(f, "Illegal parameters for tile"),
            MercatorError::InvalidQuadkeyDigit(_) => write!(f, "Invalid Quadkey digit sequence"),
            MercatorError::InvalidBatchSize => write!(f, "<size> must be greater than 0"),
        }
    }
}

impl std::error::Error for MercatorError {}

#[test]
fn test_error_kind() {
    assert_eq!(MercatorError::ZoomTooLarge(31).kind(), ErrorKind::Range);
    assert_eq!(MercatorError::LatitudeOutOfRange(91.0).kind(), ErrorKind::Range);
    assert_eq!(
        MercatorError::InvalidQuadkeyDigit('4').kind(),
        ErrorKind::Format
    );
    assert_eq!(
        MercatorError::TileOutOfBounds {
            x: 25,
            y: 60,
            zoom: 3
        }
        .to_string(),
        "Illegal parameters for tile"
    );
}
