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

use chrono::{DateTime,Utc};
use nalgebra::Vector3;
use celestial_common::{
    datetime::julian_date,
    geo_constants::AU_KM,
};
use crate::{
    astro::{ecliptic_to_equatorial, equatorial_to_ecliptic, radec_to_vector},
    bodies::{Planet, Star},
    errors::{CelestialError, Result, propagation_error},
    gp_record::GeneralPerturbationRecord,
    kepler::planet_heliocentric,
    orbital_element::{parse_record, CatalogFormat},
};

pub mod satkit_backend;
pub mod analytic;

pub use satkit_backend::SatkitBackend;
pub use analytic::AnalyticBackend;

/// nominal distance [km] we use to turn star directions into vectors
pub const STAR_DISTANCE_KM: f64 = 1.0e15;

/// a propagated satellite, in km
#[derive(Debug,Clone,Copy,PartialEq)]
pub struct SatelliteState {
    /// inertial (TEME) position
    pub eci: Vector3<f64>,
    /// earth fixed position
    pub ecef: Vector3<f64>,
}

/// position of a comet or minor planet plus the distances that go into its apparent magnitude
#[derive(Debug,Clone,Copy,PartialEq)]
pub struct SmallBodyState {
    /// geocentric J2000 equatorial position [km]
    pub geocentric: Vector3<f64>,
    pub sun_distance: f64,       // AU
    pub earth_distance: f64,     // AU
    pub earth_sun_distance: f64, // AU
}

/// the astrometry primitives the ephemeris engine is built on. Implementations differ in which propagators
/// and series they use but have to agree on frames and units:
/// all positions are geocentric J2000 equatorial in km unless noted otherwise
pub trait EphemerisBackend {
    fn name (&self)->&'static str;

    fn sun (&self, t: &DateTime<Utc>)->Result<Vector3<f64>>;

    fn moon (&self, t: &DateTime<Utc>)->Result<Vector3<f64>>;

    /// the catalog format this backend reads small body records in
    fn native_format (&self, is_comet: bool)->CatalogFormat;

    fn satellite (&self, gp: &GeneralPerturbationRecord, t: &DateTime<Utc>)->Result<SatelliteState>;

    /// heliocentric J2000 ecliptic earth position [AU], derived from our own sun
    fn earth_heliocentric (&self, t: &DateTime<Utc>)->Result<Vector3<f64>> {
        let sun = self.sun(t)?;
        Ok( -equatorial_to_ecliptic( &sun) / AU_KM)
    }

    fn planet (&self, planet: Planet, t: &DateTime<Utc>)->Result<Vector3<f64>> {
        let jd = julian_date(t);
        let p = planet_heliocentric( planet, jd).ok_or( propagation_error!("no convergence for {} at {}", planet, t))?;
        let earth = self.earth_heliocentric(t)?;
        Ok( ecliptic_to_equatorial( &(p - earth)) * AU_KM)
    }

    fn star (&self, star: &Star, t: &DateTime<Utc>)->Result<Vector3<f64>> {
        Ok( radec_to_vector( star.ra, star.dec, STAR_DISTANCE_KM))
    }

    /// propagate a comet or minor planet record, which has to be in our native format
    fn small_body (&self, record: &str, format: CatalogFormat, t: &DateTime<Utc>)->Result<SmallBodyState> {
        if format != self.native_format( format.is_comet()) {
            return Err( CelestialError::UnsupportedFormat( format!("{} backend does not read {} records", self.name(), format)))
        }

        let orbit = parse_record( record, format)?.kepler_orbit();
        let helio = orbit.heliocentric_ecliptic( julian_date(t)).ok_or( propagation_error!("no Kepler solution at {}", t))?;
        let earth = self.earth_heliocentric(t)?;
        let geo = helio - earth;

        Ok( SmallBodyState {
            geocentric: ecliptic_to_equatorial( &geo) * AU_KM,
            sun_distance: helio.norm(),
            earth_distance: geo.norm(),
            earth_sun_distance: earth.norm()
        })
    }
}
