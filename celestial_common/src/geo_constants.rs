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

/// common geodetic and solar-system constants that should be consistent throughout the workspace
/// distances for geocentric vectors are kilometers, heliocentric ones astronomical units

/// semi major axis in km (WGS84)
pub const EQUATORIAL_EARTH_RADIUS_KM: f64 = 6378.137;

/// WGS84 flattening
pub const F_EARTH: f64 = 1.0 / 298.257223563;

/// first eccentricity squared
pub const E_EARTH_SQUARED: f64 = F_EARTH * (2.0 - F_EARTH);

/// mean earth radius in km
pub const MEAN_EARTH_RADIUS_KM: f64 = 6371.0;

pub const AU_KM: f64 = 149597870.7;

pub const SUN_RADIUS_KM: f64 = 696000.0;
pub const MOON_RADIUS_KM: f64 = 1737.4;

/// Gaussian gravitational constant (radians per day)
pub const GAUSS_K: f64 = 0.01720209895;

/// mean obliquity of the ecliptic at J2000 in degrees
pub const OBLIQUITY_J2000_DEG: f64 = 23.4392911;

/// equatorial horizontal parallax of the sun in degrees (8.794")
pub const SUN_PARALLAX_DEG: f64 = 8.794 / 3600.0;
