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
use satkit::{Instant, TLE, sgp4::sgp4, frametransform::qteme2itrf, lpephem};
use celestial_common::datetime::to_unix_secs;
use crate::{
    backend::{EphemerisBackend, SatelliteState},
    errors::{Result, tle_error, propagation_error},
    gp_record::GeneralPerturbationRecord,
    orbital_element::CatalogFormat,
};

pub fn instant_from_datetime (t: &DateTime<Utc>)->Instant {
    Instant::from_unixtime( to_unix_secs(t))
}

/// backend based on the satkit crate: SGP4 with proper TEME->ITRF rotation and satkit's low precision
/// sun and moon ephemerides. Reads small bodies from MPC orbit records
pub struct SatkitBackend {
    tles: RefCell<HashMap<String,TLE>>, // parsed TLEs by line1
}

impl SatkitBackend {
    pub fn new ()->Self {
        SatkitBackend { tles: RefCell::new( HashMap::new()) }
    }

    /// a fresh TLE copy to propagate with. Note that satkit's sgp4 mutates the TLE, hence the clone
    fn get_tle (&self, gp: &GeneralPerturbationRecord)->Result<TLE> {
        if let Some(tle) = self.tles.borrow().get( &gp.line1) {
            return Ok( tle.clone())
        }

        let tle = TLE::load_2line( &gp.line1, &gp.line2).map_err( |e| tle_error!("2 line Satkit TLE import failed {:?}", e))?;
        self.tles.borrow_mut().insert( gp.line1.clone(), tle.clone());
        Ok(tle)
    }
}

impl Default for SatkitBackend {
    fn default()->Self { SatkitBackend::new() }
}

fn km (x: f64, y: f64, z: f64)->Vector3<f64> {
    Vector3::new( x / 1000.0, y / 1000.0, z / 1000.0)
}

impl EphemerisBackend for SatkitBackend {
    fn name (&self)->&'static str { "satkit" }

    fn sun (&self, t: &DateTime<Utc>)->Result<Vector3<f64>> {
        let p = lpephem::sun::pos_gcrf( &instant_from_datetime(t)); // meters
        Ok( km( p[0], p[1], p[2]) )
    }

    fn moon (&self, t: &DateTime<Utc>)->Result<Vector3<f64>> {
        let p = lpephem::moon::pos_gcrf( &instant_from_datetime(t));
        Ok( km( p[0], p[1], p[2]) )
    }

    fn native_format (&self, is_comet: bool)->CatalogFormat {
        if is_comet { CatalogFormat::CometOrbitRecord } else { CatalogFormat::MinorPlanetOrbitRecord }
    }

    fn satellite (&self, gp: &GeneralPerturbationRecord, t: &DateTime<Utc>)->Result<SatelliteState> {
        let mut tle = self.get_tle( gp)?;
        let instant = instant_from_datetime(t);
        let times = vec![instant];

        let (pteme, _vteme, _errs) = sgp4( &mut tle, &times);
        let p = pteme.column(0);
        let (x, y, z) = (p[0], p[1], p[2]);
        if !(x.is_finite() && y.is_finite() && z.is_finite()) || (x == 0.0 && y == 0.0 && z == 0.0) {
            return Err( propagation_error!("SGP4 failed for {} at {}", gp.name, t))
        }

        let itrf = qteme2itrf( &instant).to_rotation_matrix() * p;

        Ok( SatelliteState {
            eci: km( x, y, z),
            ecef: km( itrf[0], itrf[1], itrf[2])
        })
    }
}
