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

use nalgebra::Vector3;
use serde::{Deserialize,Serialize};
use celestial_common::{
    sin, cos, tan, asin, atan2, sqrt, rad, deg, TWO_PI,
    angle::{normalize_360, normalize_180, normalize_two_pi},
    datetime::{gmst_degrees, local_sidereal_degrees, julian_centuries},
    geo_constants::{EQUATORIAL_EARTH_RADIUS_KM, E_EARTH_SQUARED, OBLIQUITY_J2000_DEG}
};

/// general precession in ecliptic longitude [deg/century]
pub const PRECESSION_DEG_PER_CENTURY: f64 = 1.3969713;

/// geodetic observer position (WGS-84)
#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
pub struct Observer {
    pub latitude: f64,  // degrees, north positive
    pub longitude: f64, // degrees, east positive
    pub elevation: f64, // meters
}

impl Observer {
    pub fn new (latitude: f64, longitude: f64, elevation: f64)->Self {
        Observer { latitude, longitude, elevation }
    }

    /// earth-centered earth-fixed position in km
    pub fn ecef_km (&self)->Vector3<f64> {
        let lat = rad(self.latitude);
        let lon = rad(self.longitude);
        let h = self.elevation / 1000.0;
        let n = EQUATORIAL_EARTH_RADIUS_KM / sqrt( 1.0 - E_EARTH_SQUARED * sin(lat) * sin(lat));

        Vector3::new(
            (n + h) * cos(lat) * cos(lon),
            (n + h) * cos(lat) * sin(lon),
            (n * (1.0 - E_EARTH_SQUARED) + h) * sin(lat)
        )
    }
}

/// horizontal coordinates in degrees. Azimuth is measured from north through east
#[derive(Debug,Clone,Copy,PartialEq)]
pub struct AltAz {
    pub azimuth: f64,
    pub altitude: f64,
}

/* #region frame transformations ****************************************************************************/

pub fn ecliptic_to_equatorial (v: &Vector3<f64>)->Vector3<f64> {
    let (se, ce) = rad(OBLIQUITY_J2000_DEG).sin_cos();
    Vector3::new( v.x, v.y * ce - v.z * se, v.y * se + v.z * ce)
}

pub fn equatorial_to_ecliptic (v: &Vector3<f64>)->Vector3<f64> {
    let (se, ce) = rad(OBLIQUITY_J2000_DEG).sin_cos();
    Vector3::new( v.x, v.y * ce + v.z * se, -v.y * se + v.z * ce)
}

/// right ascension [deg, 0..360), declination [deg] and distance of an equatorial vector
pub fn radec (v: &Vector3<f64>)->(f64, f64, f64) {
    let r = v.norm();
    let ra = normalize_360( deg( atan2( v.y, v.x)));
    let dec = if r > 0.0 { deg( asin( v.z / r)) } else { 0.0 };
    (ra, dec, r)
}

pub fn radec_to_vector (ra: f64, dec: f64, dist: f64)->Vector3<f64> {
    let (sra, cra) = rad(ra).sin_cos();
    let (sdec, cdec) = rad(dec).sin_cos();
    Vector3::new( dist * cdec * cra, dist * cdec * sra, dist * sdec)
}

/// ecliptic longitude [deg, 0..360) of an equatorial J2000 vector
pub fn ecliptic_longitude (v: &Vector3<f64>)->f64 {
    let e = equatorial_to_ecliptic(v);
    normalize_360( deg( atan2( e.y, e.x)))
}

/// ecliptic longitude referred to the mean equinox of date
pub fn ecliptic_longitude_of_date (v: &Vector3<f64>, jd: f64)->f64 {
    normalize_360( ecliptic_longitude(v) + PRECESSION_DEG_PER_CENTURY * julian_centuries(jd))
}

/// precess J2000 equatorial coordinates to the mean equator and equinox of date (Meeus 21.2/21.4)
pub fn precess_from_j2000 (ra: f64, dec: f64, jd: f64)->(f64, f64) {
    let t = julian_centuries(jd);
    let zeta = rad( (2306.2181 * t + 0.30188 * t * t + 0.017998 * t * t * t) / 3600.0);
    let z = rad( (2306.2181 * t + 1.09468 * t * t + 0.018203 * t * t * t) / 3600.0);
    let theta = rad( (2004.3109 * t - 0.42665 * t * t - 0.041833 * t * t * t) / 3600.0);

    let (ra, dec) = (rad(ra), rad(dec));
    let a = cos(dec) * sin(ra + zeta);
    let b = cos(theta) * cos(dec) * cos(ra + zeta) - sin(theta) * sin(dec);
    let c = sin(theta) * cos(dec) * cos(ra + zeta) + cos(theta) * sin(dec);

    (normalize_360( deg( atan2(a, b) + z)), deg( asin( c.clamp(-1.0, 1.0))))
}

/// rotate an earth-fixed vector into the (true-of-date approximated by mean-of-date) inertial frame
pub fn ecef_to_inertial (v: &Vector3<f64>, jd: f64)->Vector3<f64> {
    let (s, c) = rad( gmst_degrees(jd)).sin_cos();
    Vector3::new( v.x * c - v.y * s, v.x * s + v.y * c, v.z)
}

pub fn inertial_to_ecef (v: &Vector3<f64>, jd: f64)->Vector3<f64> {
    let (s, c) = rad( gmst_degrees(jd)).sin_cos();
    Vector3::new( v.x * c + v.y * s, -v.x * s + v.y * c, v.z)
}

/* #endregion frame transformations */

/* #region horizontal coordinates ***************************************************************************/

/// altitude/azimuth of equatorial coordinates of date
pub fn horizontal (ra: f64, dec: f64, observer: &Observer, jd: f64)->AltAz {
    let ha = rad( local_sidereal_degrees( jd, observer.longitude) - ra);
    let lat = rad( observer.latitude);
    let dec = rad(dec);

    let altitude = deg( asin( (sin(lat) * sin(dec) + cos(lat) * cos(dec) * cos(ha)).clamp(-1.0, 1.0)));
    let azimuth = normalize_360( deg( atan2( -cos(dec) * sin(ha), sin(dec) * cos(lat) - cos(dec) * sin(lat) * cos(ha))));

    AltAz { azimuth, altitude }
}

/// apparent horizontal coordinates of a geocentric J2000 equatorial position [km]. Near bodies (moon) need
/// `topocentric` to account for the observer's displacement from the geocenter
pub fn apparent_altaz (geo: &Vector3<f64>, observer: &Observer, jd: f64, topocentric: bool)->AltAz {
    let (ra, dec, dist) = radec( geo);
    let (ra, dec) = precess_from_j2000( ra, dec, jd);

    if topocentric {
        let v = radec_to_vector( ra, dec, dist) - ecef_to_inertial( &observer.ecef_km(), jd);
        let (ra, dec, _) = radec( &v);
        horizontal( ra, dec, observer, jd)
    } else {
        horizontal( ra, dec, observer, jd)
    }
}

/// look angles of an earth-fixed target [km] as seen by the observer, plus the range in km
pub fn look_angles (target_ecef: &Vector3<f64>, observer: &Observer)->(AltAz, f64) {
    let r = target_ecef - observer.ecef_km();
    let range = r.norm();
    let lat = rad( observer.latitude);
    let lon = rad( observer.longitude);

    let east = -sin(lon) * r.x + cos(lon) * r.y;
    let north = -sin(lat) * cos(lon) * r.x - sin(lat) * sin(lon) * r.y + cos(lat) * r.z;
    let up = cos(lat) * cos(lon) * r.x + cos(lat) * sin(lon) * r.y + sin(lat) * r.z;

    let azimuth = normalize_360( deg( atan2( east, north)));
    let altitude = if range > 0.0 { deg( asin( (up / range).clamp(-1.0, 1.0))) } else { 90.0 };

    (AltAz { azimuth, altitude }, range)
}

/// geocentric (latitude, longitude) in degrees of the point below a geocentric J2000 position
pub fn sub_point (geo: &Vector3<f64>, jd: f64)->(f64, f64) {
    let (ra, dec, _) = radec( geo);
    let (ra, dec) = precess_from_j2000( ra, dec, jd);
    (dec, normalize_180( ra - gmst_degrees(jd)))
}

/* #endregion horizontal coordinates */

/* #region illumination *************************************************************************************/

/// cylindrical earth shadow test for a geocentric position. Both vectors have to be in the same inertial frame
pub fn is_sunlit (position: &Vector3<f64>, sun: &Vector3<f64>)->bool {
    let s = sun.normalize();
    let along = position.dot( &s);
    if along >= 0.0 {
        true
    } else {
        (position - s * along).norm() > EQUATORIAL_EARTH_RADIUS_KM
    }
}

/// geocentric elongation [deg] between body and sun
pub fn elongation (body: &Vector3<f64>, sun: &Vector3<f64>)->f64 {
    deg( body.angle( sun))
}

/// illuminated fraction [0..1] of a body given geocentric body and sun positions in the same units
pub fn illuminated_fraction (body: &Vector3<f64>, sun: &Vector3<f64>)->f64 {
    let psi = body.angle( sun);
    let r = sun.norm();
    let delta = body.norm();
    let phase_angle = atan2( r * sin(psi), delta - r * cos(psi));
    (1.0 + cos(phase_angle)) / 2.0
}

/// position angle of the bright limb relative to the observer's vertical, in radians [0,2π).
/// All equatorial coordinates are in degrees and refer to the same equinox
pub fn bright_limb_angle (sun_ra: f64, sun_dec: f64, body_ra: f64, body_dec: f64, observer: &Observer, jd: f64)->f64 {
    let (a_s, d_s, a_b, d_b) = (rad(sun_ra), rad(sun_dec), rad(body_ra), rad(body_dec));
    let chi = atan2( cos(d_s) * sin(a_s - a_b), sin(d_s) * cos(d_b) - cos(d_s) * sin(d_b) * cos(a_s - a_b));

    let lst = rad( local_sidereal_degrees( jd, observer.longitude));
    let h = lst - a_b;
    let lat = rad( observer.latitude);
    let q = atan2( sin(h), tan(lat) * cos(d_b) - sin(d_b) * cos(h));

    normalize_two_pi( chi - q)
}

/* #endregion illumination */
