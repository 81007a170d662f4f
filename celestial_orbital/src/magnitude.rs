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

use celestial_common::{acos, tan, log10};
use crate::orbital_element::MagnitudeModel;

/// apparent magnitude of a comet with total magnitude parameters (g, k).
/// Distances are in AU. Returns None if any distance is not positive
pub fn comet_magnitude (g: f64, k: f64, earth_distance: f64, sun_distance: f64)->Option<f64> {
    if !(earth_distance > 0.0 && sun_distance > 0.0) { return None }

    let m = g + 5.0 * log10(earth_distance) + 2.5 * k * log10(sun_distance);
    m.is_finite().then_some(m)
}

/// apparent magnitude of a minor planet with IAU (H,G) parameters, distances in AU:
///   `sun_distance`: body - sun,  `earth_distance`: body - earth,  `earth_sun_distance`: earth - sun
/// Returns None if the geometry is degenerate or the phase law argument is not positive (which happens for
/// some combinations of G and phase angle), in which case the magnitude is undefined
pub fn asteroid_magnitude (h: f64, g: f64, sun_distance: f64, earth_distance: f64, earth_sun_distance: f64)->Option<f64> {
    if !(sun_distance > 0.0 && earth_distance > 0.0) { return None }

    let cos_beta = (sun_distance * sun_distance + earth_distance * earth_distance - earth_sun_distance * earth_sun_distance)
                   / (2.0 * sun_distance * earth_distance);
    let beta = acos( cos_beta.clamp(-1.0, 1.0));

    let tb2 = tan( beta / 2.0);
    let psi1 = (-3.33 * tb2.powf(0.63)).exp();
    let psi2 = (-1.87 * tb2.powf(1.22)).exp();

    let phase_term = (1.0 - g) * psi1 + g * psi2;
    if !(phase_term > 0.0) { return None }

    let m = h + 5.0 * log10( sun_distance * earth_distance) - 2.5 * log10( phase_term);
    m.is_finite().then_some(m)
}

/// dispatch on the record's photometric model. There is no magnitude without a slope parameter
pub fn apparent_magnitude (model: &MagnitudeModel, sun_distance: f64, earth_distance: f64, earth_sun_distance: f64)->Option<f64> {
    match model {
        MagnitudeModel::Comet { g, k } => comet_magnitude( g.value, k.as_ref()?.value, earth_distance, sun_distance),
        MagnitudeModel::Asteroid { h, g } => asteroid_magnitude( h.value, g.as_ref()?.value, sun_distance, earth_distance, earth_sun_distance),
    }
}
