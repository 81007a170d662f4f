/*
 * Copyright © 2025, United States Government, as represented by the Administrator of 
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License"); 
 * you may not use this file except in compliance with the License. You may obtain a copy 
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

#![allow(unused)]

use serde::Deserialize;
use celestial_common::config::{config_from_str, load_config, load_config_or_default, ConfigError};

#[derive(Deserialize,Debug,Default,PartialEq)]
struct TestConfig {
    name: String,
    max_items: usize,
    ratio: f64,
}

#[test]
fn test_config_from_str () {
    let cfg: TestConfig = config_from_str( r#"TestConfig( name: "moon", max_items: 42, ratio: 0.5 )"#).unwrap();
    println!("{cfg:?}");
    assert_eq!( cfg, TestConfig{ name: "moon".to_string(), max_items: 42, ratio: 0.5 });

    let res: Result<TestConfig,_> = config_from_str( "TestConfig( name: ");
    assert!( matches!( res, Err(ConfigError::RonError(_))));
}

#[test]
fn test_missing_config () {
    let res: Result<TestConfig,_> = load_config( "does_not_exist.ron");
    assert!( matches!( res, Err(ConfigError::NotFound(_))));

    let cfg: TestConfig = load_config_or_default( "does_not_exist.ron").unwrap();
    assert_eq!( cfg, TestConfig::default());
}
