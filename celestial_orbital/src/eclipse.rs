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

use std::fmt;
use chrono::{DateTime,Utc};
use nalgebra::Vector3;
use serde::{Deserialize,Serialize};
use tracing::debug;
use celestial_common::{
    asin, deg, sqrt,
    angle::normalize_180,
    datetime::{add_secs, julian_date},
    geo_constants::{EQUATORIAL_EARTH_RADIUS_KM, MOON_RADIUS_KM, SUN_RADIUS_KM},
};
use crate::{
    astro::{ecliptic_longitude, sub_point, ecef_to_inertial, inertial_to_ecef},
    backend::EphemerisBackend,
    errors::Result,
    events::{find_angle_crossings, find_minimum},
};

/// the earth shadow appears larger than geometry suggests because of the atmosphere
pub const SHADOW_ENLARGEMENT: f64 = 1.02;

/// mean synodic month [days]
pub const SYNODIC_MONTH_DAYS: f64 = 29.530588;

/// half width of the window around syzygies in which we look for the greatest eclipse [s]
const GREATEST_ECLIPSE_WINDOW_SECS: f64 = 4.0 * 3600.0;

#[derive(Debug,Clone,Copy,PartialEq,Eq,Serialize,Deserialize)]
pub enum EclipseKind {
    Penumbral,
    Partial,
    Total,
    Annular,
}

impl fmt::Display for EclipseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EclipseKind::Penumbral => "Penumbral",
            EclipseKind::Partial => "Partial",
            EclipseKind::Total => "Total",
            EclipseKind::Annular => "Annular",
        };
        write!(f, "{s}")
    }
}

/// time of greatest eclipse and the point on earth it refers to (sub-lunar point for lunar eclipses,
/// shadow axis ground point for solar eclipses)
#[derive(Debug,Clone,Copy,PartialEq)]
pub struct Eclipse {
    pub time: DateTime<Utc>,
    pub kind: EclipseKind,
    pub latitude: f64,
    pub longitude: f64,
}

/// sun-moon elongation in ecliptic longitude [deg, 0..360). 0 is new moon, 180 full moon
pub fn moon_elongation (backend: &dyn EphemerisBackend, t: &DateTime<Utc>)->Result<f64> {
    let sun = backend.sun(t)?;
    let moon = backend.moon(t)?;
    let d = ecliptic_longitude( &moon) - ecliptic_longitude( &sun);
    Ok( if d < 0.0 { d + 360.0 } else { d })
}

/// classify a lunar eclipse from geocentric sun and moon positions [km]
pub fn lunar_eclipse_kind (sun: &Vector3<f64>, moon: &Vector3<f64>)->Option<EclipseKind> {
    let r_sun = sun.norm();
    let r_moon = moon.norm();

    let moon_parallax = asin( EQUATORIAL_EARTH_RADIUS_KM / r_moon);
    let sun_parallax = asin( EQUATORIAL_EARTH_RADIUS_KM / r_sun);
    let sun_semidiameter = asin( SUN_RADIUS_KM / r_sun);
    let moon_semidiameter = asin( MOON_RADIUS_KM / r_moon);

    let umbra = SHADOW_ENLARGEMENT * (moon_parallax + sun_parallax - sun_semidiameter);
    let penumbra = SHADOW_ENLARGEMENT * (moon_parallax + sun_parallax + sun_semidiameter);

    let separation = moon.angle( &(-sun)); // from the anti-solar point

    if separation + moon_semidiameter <= umbra {
        Some( EclipseKind::Total)
    } else if separation - moon_semidiameter < umbra {
        Some( EclipseKind::Partial)
    } else if separation - moon_semidiameter < penumbra {
        Some( EclipseKind::Penumbral)
    } else {
        None
    }
}

/// classify a solar eclipse from geocentric sun and moon positions [km] and return the point where the shadow
/// axis meets the earth (or the point closest to the axis for partial eclipses), as a geocentric vector
pub fn solar_eclipse_kind (sun: &Vector3<f64>, moon: &Vector3<f64>)->Option<(EclipseKind,Vector3<f64>)> {
    let sun_moon = sun - moon;
    let d_sm = sun_moon.norm();
    let axis = -sun_moon / d_sm; // from the moon away from the sun

    let t_closest = -moon.dot( &axis);
    if t_closest <= 0.0 { return None } // shadow points away from earth

    let closest = moon + axis * t_closest;
    let gamma = closest.norm();

    let penumbra = MOON_RADIUS_KM + t_closest * (SUN_RADIUS_KM + MOON_RADIUS_KM) / d_sm;
    let umbra = MOON_RADIUS_KM - t_closest * (SUN_RADIUS_KM - MOON_RADIUS_KM) / d_sm; // negative: antumbra

    if gamma < EQUATORIAL_EARTH_RADIUS_KM {
        // axis hits the earth, first intersection of moon + t*axis with the earth sphere
        let b = moon.dot( &axis);
        let c = moon.norm_squared() - EQUATORIAL_EARTH_RADIUS_KM * EQUATORIAL_EARTH_RADIUS_KM;
        let t_hit = -b - sqrt( (b * b - c).max(0.0));
        let ground = moon + axis * t_hit;
        let kind = if umbra > 0.0 { EclipseKind::Total } else { EclipseKind::Annular };
        Some( (kind, ground) )

    } else if gamma < EQUATORIAL_EARTH_RADIUS_KM + penumbra {
        Some( (EclipseKind::Partial, closest.normalize() * EQUATORIAL_EARTH_RADIUS_KM) )

    } else {
        None
    }
}

fn angular_separation (backend: &dyn EphemerisBackend, t: &DateTime<Utc>, opposite: bool)->Result<f64> {
    let sun = backend.sun(t)?;
    let moon = backend.moon(t)?;
    Ok( if opposite { moon.angle( &(-sun)) } else { moon.angle( &sun) })
}

/// the next lunar eclipse within `lunations` synodic months
pub fn next_lunar_eclipse (backend: &dyn EphemerisBackend, t0: &DateTime<Utc>, lunations: u32, step_secs: f64)->Result<Option<Eclipse>> {
    let window = lunations as f64 * SYNODIC_MONTH_DAYS * 86400.0;
    let full_moons = find_angle_crossings( |t| moon_elongation( backend, t), t0, window, step_secs, 180.0)?;

    for full in full_moons {
        let a = add_secs( &full, -GREATEST_ECLIPSE_WINDOW_SECS);
        let b = add_secs( &full, GREATEST_ECLIPSE_WINDOW_SECS);
        let (t, _) = find_minimum( |t| angular_separation( backend, t, true), &a, &b)?;

        let sun = backend.sun(&t)?;
        let moon = backend.moon(&t)?;
        if let Some(kind) = lunar_eclipse_kind( &sun, &moon) {
            let (latitude, longitude) = sub_point( &moon, julian_date(&t));
            return Ok( Some( Eclipse { time: t, kind, latitude, longitude }))
        }
        debug!("no lunar eclipse at full moon {}", full);
    }

    Ok(None)
}

/// the next solar eclipse within `lunations` synodic months
pub fn next_solar_eclipse (backend: &dyn EphemerisBackend, t0: &DateTime<Utc>, lunations: u32, step_secs: f64)->Result<Option<Eclipse>> {
    let window = lunations as f64 * SYNODIC_MONTH_DAYS * 86400.0;
    let new_moons = find_angle_crossings( |t| moon_elongation( backend, t), t0, window, step_secs, 0.0)?;

    for new in new_moons {
        let a = add_secs( &new, -GREATEST_ECLIPSE_WINDOW_SECS);
        let b = add_secs( &new, GREATEST_ECLIPSE_WINDOW_SECS);
        let (t, _) = find_minimum( |t| angular_separation( backend, t, false), &a, &b)?;

        let sun = backend.sun(&t)?;
        let moon = backend.moon(&t)?;
        if let Some((kind, ground)) = solar_eclipse_kind( &sun, &moon) {
            let (latitude, longitude) = sub_point( &ground, julian_date(&t));
            return Ok( Some( Eclipse { time: t, kind, latitude, longitude }))
        }
        debug!("no solar eclipse at new moon {}", new);
    }

    Ok(None)
}
