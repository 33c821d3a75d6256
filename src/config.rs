//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! TOML configuration

use crate::mercator::{Mercator, DEFAULT_TILE_SIZE};
use serde::Deserialize;
use toml::Value;

pub trait Config<'a, C: Deserialize<'a>>
where
    Self: std::marker::Sized,
{
    /// Read configuration
    fn from_config(config: &C) -> Result<Self, String>;
    /// Generate configuration template
    fn gen_config() -> String;
}

#[derive(Deserialize, Clone, Debug)]
pub struct MercatorCfg {
    /// The width and height of an individual tile, in pixels.
    #[serde(default = "default_tile_size")]
    pub tile_size: u32,
}

pub fn default_tile_size() -> u32 {
    DEFAULT_TILE_SIZE
}

impl<'a> Config<'a, MercatorCfg> for Mercator {
    fn from_config(cfg: &MercatorCfg) -> Result<Self, String> {
        if cfg.tile_size == 0 {
            return Err("tile_size must be greater than 0".to_string());
        }
        Ok(Mercator::new(cfg.tile_size))
    }
    fn gen_config() -> String {
        let toml = r#"
# Width and height of a tile in pixels
tile_size = 256
"#;
        toml.to_string()
    }
}

/// Parse the configuration into an config struct.
pub fn parse_config<'a, T: Deserialize<'a>>(config_toml: String, path: &str) -> Result<T, String> {
    config_toml
        .parse::<Value>()
        .and_then(|cfg| cfg.try_into::<T>())
        .map_err(|err| format!("{} - {}", path, err))
}
