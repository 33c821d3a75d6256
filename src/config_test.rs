//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::config::{parse_config, Config, MercatorCfg};
use crate::mercator::Mercator;

#[test]
fn test_mercator_from_config() {
    let toml = r#"
        tile_size = 512
        "#;
    let config: MercatorCfg = parse_config(toml.to_string(), "").unwrap();
    assert_eq!(config.tile_size, 512);
    let mercator = Mercator::from_config(&config).unwrap();
    assert_eq!(mercator, Mercator::new(512));

    // default tile size
    let config: MercatorCfg = parse_config("".to_string(), "").unwrap();
    let mercator = Mercator::from_config(&config).unwrap();
    assert_eq!(mercator, Mercator::web_mercator());
}

#[test]
fn test_gen_config() {
    let toml = Mercator::gen_config();
    let config: MercatorCfg = parse_config(toml, "").unwrap();
    assert_eq!(config.tile_size, 256);
}

#[test]
fn test_config_errors() {
    let config: MercatorCfg = parse_config("tile_size = 0".to_string(), "").unwrap();
    assert_eq!(
        Mercator::from_config(&config).err(),
        Some("tile_size must be greater than 0".to_string())
    );

    let config: Result<MercatorCfg, _> =
        parse_config("tile_size = \"large\"".to_string(), "mercator.toml");
    let err = config.err().unwrap();
    assert!(err.starts_with("mercator.toml - "), "{}", err);

    let config: Result<MercatorCfg, _> = parse_config("tile_size = -1".to_string(), "cfg");
    assert!(config.is_err());
}
