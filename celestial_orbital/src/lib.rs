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

//! orbital element catalogs (MPC orbit records and free-text element records), catalog conversion and the
//! ephemeris engine that turns them into per-body visibility data for an observer

use celestial_common::config::{load_config_or_default, config_from_str};

pub mod errors;
use errors::Result;

pub mod packed_date;
pub mod columns;
pub mod decimal;
pub mod designation;
pub mod orbital_element;
pub mod convert;
pub mod kepler;
pub mod magnitude;
pub mod catalog;

pub mod bodies;
pub mod astro;
pub mod events;
pub mod lunar_phase;
pub mod eclipse;
pub mod gp_record;
pub mod satellite_pass;
pub mod backend;
pub mod visibility;
pub mod ephemeris;
pub mod config;

pub use orbital_element::{CatalogFormat, OrbitalElement, Rejection};
pub use bodies::{BodyKind, DataTag, Planet};
pub use astro::Observer;
pub use config::EphemerisConfig;
pub use ephemeris::{BodySelection, Catalogs, EphemerisEngine};
pub use visibility::{DataValue, VisibilityResult};

/// name of the engine config file we look up via `celestial_common::config`
pub const EPHEMERIS_CONFIG_FILE: &str = "ephemeris.ron";

/// the engine config from the config dirs, falling back to defaults if there is none
pub fn load_ephemeris_config ()->Result<EphemerisConfig> {
    Ok( load_config_or_default( EPHEMERIS_CONFIG_FILE)?)
}

pub fn ephemeris_config_from_str (s: &str)->Result<EphemerisConfig> {
    Ok( config_from_str( s)?)
}
