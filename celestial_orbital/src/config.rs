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

use serde::{Deserialize,Serialize};
use crate::{
    columns::Columns,
    gp_record::CatalogNumberPolicy,
    satellite_pass::VisibilityStrategy,
};

/// lower/upper bound for magnitude ceilings - anything outside is considered erroneous catalog data
pub const MIN_MAGNITUDE: f64 = -10.0;
pub const MAX_MAGNITUDE: f64 = 15.0;

/// the tunables of the ephemeris engine and its event searches
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
#[serde(default)]
pub struct EphemerisConfig {
    /// rise/set search window and sampling step
    pub rise_set_window_hours: f64,
    pub rise_set_step_minutes: f64,

    /// altitude of the upper limb crossing incl. refraction [deg]
    pub sun_horizon: f64,
    pub moon_horizon: f64,
    pub horizon: f64,

    /// sun altitude that marks dawn and dusk [deg]
    pub dawn_dusk_altitude: f64,

    /// sun altitude at or below which the sky is dark enough to see satellites [deg]
    pub twilight_altitude: f64,

    pub satellite_search_hours: f64,
    pub satellite_step_secs: f64,
    pub satellite_min_altitude: f64,
    pub pass_strategy: VisibilityStrategy,

    /// sampling step for moon quarter, equinox and eclipse searches
    pub event_step_hours: f64,
    pub eclipse_search_lunations: u32,

    pub catalog_number_policy: CatalogNumberPolicy,
    pub magnitude_ceiling: Option<f64>,
}

impl Default for EphemerisConfig {
    fn default()->Self {
        EphemerisConfig {
            rise_set_window_hours: 48.0,
            rise_set_step_minutes: 10.0,
            sun_horizon: -0.8333,
            moon_horizon: -0.8333,
            horizon: -0.5667,
            dawn_dusk_altitude: -6.0,
            twilight_altitude: -6.0,
            satellite_search_hours: 24.0,
            satellite_step_secs: 30.0,
            satellite_min_altitude: 0.0,
            pass_strategy: VisibilityStrategy::Sampled { samples: 10 },
            event_step_hours: 6.0,
            eclipse_search_lunations: 13,
            catalog_number_policy: CatalogNumberPolicy::ClampToSentinel,
            magnitude_ceiling: Some(6.0),
        }
    }
}

impl EphemerisConfig {
    /// the configured ceiling clamped to the sane magnitude range
    pub fn clamped_magnitude_ceiling (ceiling: Option<f64>)->Option<f64> {
        ceiling.map( |m| m.clamp( MIN_MAGNITUDE, MAX_MAGNITUDE))
    }
}

/// column layout of fixed width asteroid catalogs, which differ between catalog vintages
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct AsteroidCatalogLayout {
    pub name: Columns,
    pub absolute_magnitude: Columns,
    pub observation_count: Columns,
    pub min_observations: u32,
}

impl AsteroidCatalogLayout {
    /// observation count at columns 101-106
    pub fn legacy ()->Self {
        AsteroidCatalogLayout {
            name: Columns::new( 1, 26),
            absolute_magnitude: Columns::new( 43, 49),
            observation_count: Columns::new( 101, 106),
            min_observations: 0
        }
    }

    /// observation count at columns 118-122
    pub fn current ()->Self {
        AsteroidCatalogLayout {
            name: Columns::new( 1, 26),
            absolute_magnitude: Columns::new( 43, 49),
            observation_count: Columns::new( 118, 122),
            min_observations: 0
        }
    }
}

impl Default for AsteroidCatalogLayout {
    fn default()->Self { AsteroidCatalogLayout::current() }
}
