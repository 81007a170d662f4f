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

use std::{cell::RefCell, collections::HashMap};
use chrono::{DateTime,Utc};
use nalgebra::Vector3;
use sgp4::{Elements, Constants};
use celestial_common::{
    sin_deg, cos_deg, sin, rad,
    datetime::{julian_date, julian_centuries, J2000},
    geo_constants::{AU_KM, EQUATORIAL_EARTH_RADIUS_KM},
};
use crate::{
    astro::{ecliptic_to_equatorial, inertial_to_ecef, radec_to_vector, PRECESSION_DEG_PER_CENTURY},
    backend::{EphemerisBackend, SatelliteState},
    errors::{Result, tle_error, propagation_error},
    gp_record::GeneralPerturbationRecord,
    orbital_element::CatalogFormat,
};

/// backend based on closed form series: Astronomical Almanac low precision sun and moon, the `sgp4` crate with
/// a GMST rotation for satellites. Reads small bodies from free-text records
pub struct AnalyticBackend {
    propagators: RefCell<HashMap<String,(Elements,Constants)>>,
}

impl AnalyticBackend {
    pub fn new ()->Self {
        AnalyticBackend { propagators: RefCell::new( HashMap::new()) }
    }

    fn propagate (&self, gp: &GeneralPerturbationRecord, t: &DateTime<Utc>)->Result<[f64;3]> {
        let mut propagators = self.propagators.borrow_mut();
        if !propagators.contains_key( &gp.line1) {
            let elements = Elements::from_tle( Some(gp.name.clone()), gp.line1.as_bytes(), gp.line2.as_bytes())
                .map_err( |e| tle_error!("sgp4 TLE import failed {}", e))?;
            let constants = Constants::from_elements( &elements)
                .map_err( |e| tle_error!("sgp4 initialization failed {}", e))?;
            propagators.insert( gp.line1.clone(), (elements, constants));
        }

        let (elements, constants) = propagators.get( &gp.line1).ok_or( tle_error!("no propagator for {}", gp.name))?;
        let minutes = elements.datetime_to_minutes_since_epoch( &t.naive_utc())
            .map_err( |e| propagation_error!("{} epoch conversion failed: {}", gp.name, e))?;
        let prediction = constants.propagate( minutes)
            .map_err( |e| propagation_error!("sgp4 propagation of {} failed: {}", gp.name, e))?;

        Ok( prediction.position )
    }
}

impl Default for AnalyticBackend {
    fn default()->Self { AnalyticBackend::new() }
}

/// ecliptic of date longitude to J2000
fn to_j2000_longitude (lambda: f64, jd: f64)->f64 {
    lambda - PRECESSION_DEG_PER_CENTURY * julian_centuries(jd)
}

fn ecliptic_vector (lambda: f64, beta: f64, dist: f64)->Vector3<f64> {
    Vector3::new(
        dist * cos_deg(beta) * cos_deg(lambda),
        dist * cos_deg(beta) * sin_deg(lambda),
        dist * sin_deg(beta)
    )
}

impl EphemerisBackend for AnalyticBackend {
    fn name (&self)->&'static str { "analytic" }

    fn sun (&self, t: &DateTime<Utc>)->Result<Vector3<f64>> {
        let jd = julian_date(t);
        let n = jd - J2000;

        let l = 280.460 + 0.9856474 * n;
        let g = 357.528 + 0.9856003 * n;
        let lambda = l + 1.915 * sin_deg(g) + 0.020 * sin_deg(2.0 * g);
        let r = 1.00014 - 0.01671 * cos_deg(g) - 0.00014 * cos_deg(2.0 * g);

        let v = ecliptic_vector( to_j2000_longitude( lambda, jd), 0.0, r * AU_KM);
        Ok( ecliptic_to_equatorial( &v))
    }

    fn moon (&self, t: &DateTime<Utc>)->Result<Vector3<f64>> {
        let jd = julian_date(t);
        let tc = julian_centuries(jd);

        let lambda = 218.32 + 481267.881 * tc
            + 6.29 * sin_deg( 135.0 + 477198.87 * tc)
            - 1.27 * sin_deg( 259.3 - 413335.36 * tc)
            + 0.66 * sin_deg( 235.7 + 890534.22 * tc)
            + 0.21 * sin_deg( 269.9 + 954397.74 * tc)
            - 0.19 * sin_deg( 357.5 + 35999.05 * tc)
            - 0.11 * sin_deg( 186.5 + 966404.03 * tc);

        let beta = 5.13 * sin_deg( 93.3 + 483202.02 * tc)
            + 0.28 * sin_deg( 228.2 + 960400.89 * tc)
            - 0.28 * sin_deg( 318.3 + 6003.15 * tc)
            - 0.17 * sin_deg( 217.6 - 407332.21 * tc);

        let parallax = 0.9508
            + 0.0518 * cos_deg( 135.0 + 477198.87 * tc)
            + 0.0095 * cos_deg( 259.3 - 413335.36 * tc)
            + 0.0078 * cos_deg( 235.7 + 890534.22 * tc)
            + 0.0028 * cos_deg( 269.9 + 954397.74 * tc);

        let dist = EQUATORIAL_EARTH_RADIUS_KM / sin_deg( parallax);
        if !dist.is_finite() { return Err( propagation_error!("invalid lunar parallax at {}", t)) }

        let v = ecliptic_vector( to_j2000_longitude( lambda, jd), beta, dist);
        Ok( ecliptic_to_equatorial( &v))
    }

    fn native_format (&self, is_comet: bool)->CatalogFormat {
        if is_comet { CatalogFormat::CometFreeText } else { CatalogFormat::MinorPlanetFreeText }
    }

    fn satellite (&self, gp: &GeneralPerturbationRecord, t: &DateTime<Utc>)->Result<SatelliteState> {
        let p = self.propagate( gp, t)?;
        let eci = Vector3::new( p[0], p[1], p[2]);
        let ecef = inertial_to_ecef( &eci, julian_date(t));
        Ok( SatelliteState { eci, ecef } )
    }
}
