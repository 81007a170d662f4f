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
use celestial_common::{
    sin, cos, tan, atan, atan2, sqrt, rad, deg, TWO_PI,
    angle::normalize_360,
    datetime::{J2000, DAYS_PER_CENTURY},
    geo_constants::GAUSS_K
};
use crate::bodies::Planet;

/// mean daily motion [deg/day] of a body with semi-major axis of 1 AU
pub const GAUSS_DAILY_MOTION_DEG: f64 = 0.9856076686;

const MAX_ITERATIONS: usize = 64;
const TOLERANCE: f64 = 1e-12;

/// a heliocentric orbit in perihelion-time form, which covers elliptical, parabolic and hyperbolic orbits alike.
/// Angles are in degrees referring to the J2000 ecliptic, distances in AU
#[derive(Debug,Clone,Copy,PartialEq)]
pub struct KeplerOrbit {
    pub perihelion_distance: f64,
    pub eccentricity: f64,
    pub inclination: f64,
    pub node: f64,
    pub arg_perihelion: f64,
    pub perihelion_jd: f64,
}

impl KeplerOrbit {

    /// build from mean-anomaly form elements (elliptical orbits only). If `daily_motion` is not given it is
    /// computed from the semi-major axis
    pub fn from_mean_anomaly (a: f64, e: f64, inclination: f64, node: f64, arg_perihelion: f64,
                              mean_anomaly: f64, epoch_jd: f64, daily_motion: Option<f64>)->Self {
        let n = daily_motion.filter( |n| *n > 0.0).unwrap_or_else( || mean_daily_motion(a));
        let mut m = normalize_360( mean_anomaly);
        if m > 180.0 { m -= 360.0 } // closest perihelion passage

        KeplerOrbit {
            perihelion_distance: a * (1.0 - e),
            eccentricity: e,
            inclination,
            node,
            arg_perihelion,
            perihelion_jd: epoch_jd - m / n
        }
    }

    pub fn is_elliptical (&self)->bool { self.eccentricity < 1.0 }

    pub fn semi_major_axis (&self)->Option<f64> {
        if self.eccentricity < 1.0 { Some( self.perihelion_distance / (1.0 - self.eccentricity)) } else { None }
    }

    /// heliocentric distance [AU] and true anomaly [rad] at the given Julian date
    pub fn radius_and_true_anomaly (&self, jd: f64)->Option<(f64,f64)> {
        let q = self.perihelion_distance;
        let e = self.eccentricity;
        let dt = jd - self.perihelion_jd;
        if q <= 0.0 || e < 0.0 { return None }

        if (e - 1.0).abs() < 1e-8 {
            // parabolic - Barker's equation
            let w = 3.0 * GAUSS_K / sqrt( 2.0 * q * q * q) * dt;
            let y = (w / 2.0 + sqrt( w * w / 4.0 + 1.0)).cbrt();
            let s = y - 1.0 / y;
            Some( (q * (1.0 + s * s), 2.0 * atan(s)) )

        } else if e < 1.0 {
            let a = q / (1.0 - e);
            let m = rad( mean_daily_motion(a) * dt) % TWO_PI;
            let ea = solve_elliptic( m, e)?;
            let r = a * (1.0 - e * cos(ea));
            let v = 2.0 * atan( sqrt( (1.0 + e) / (1.0 - e)) * tan( ea / 2.0));
            Some( (r, v) )

        } else {
            let a = q / (e - 1.0);
            let m = GAUSS_K * dt / (a * sqrt(a));
            let h = solve_hyperbolic( m, e)?;
            let r = a * (e * h.cosh() - 1.0);
            let v = 2.0 * atan( sqrt( (e + 1.0) / (e - 1.0)) * (h / 2.0).tanh());
            Some( (r, v) )
        }
    }

    /// heliocentric position [AU] in the J2000 ecliptic frame
    pub fn heliocentric_ecliptic (&self, jd: f64)->Option<Vector3<f64>> {
        let (r, v) = self.radius_and_true_anomaly( jd)?;
        Some( orbit_to_ecliptic( r, v, rad(self.arg_perihelion), rad(self.node), rad(self.inclination)) )
    }
}

#[inline]
pub fn mean_daily_motion (a: f64)->f64 {
    GAUSS_DAILY_MOTION_DEG / (a * sqrt(a))
}

/// eccentric anomaly for mean anomaly `m` [rad] (Newton iteration)
fn solve_elliptic (m: f64, e: f64)->Option<f64> {
    let mut ea = if e < 0.8 { m } else { std::f64::consts::PI * m.signum() };
    for _ in 0..MAX_ITERATIONS {
        let d = (ea - e * sin(ea) - m) / (1.0 - e * cos(ea));
        ea -= d;
        if d.abs() < TOLERANCE { return Some(ea) }
    }
    None
}

/// hyperbolic anomaly for mean anomaly `m`
fn solve_hyperbolic (m: f64, e: f64)->Option<f64> {
    let mut h = (2.0 * m / e).asinh();
    for _ in 0..MAX_ITERATIONS {
        let d = (e * h.sinh() - h - m) / (e * h.cosh() - 1.0);
        h -= d;
        if d.abs() < TOLERANCE { return Some(h) }
    }
    None
}

fn orbit_to_ecliptic (r: f64, v: f64, w: f64, node: f64, incl: f64)->Vector3<f64> {
    let u = v + w;
    let (su, cu) = u.sin_cos();
    let (sn, cn) = node.sin_cos();
    let (si, ci) = incl.sin_cos();

    Vector3::new(
        r * (cn * cu - sn * su * ci),
        r * (sn * cu + cn * su * ci),
        r * su * si
    )
}

/* #region planets *****************************************************************************************/

/// JPL approximate Keplerian elements (1800-2050) at J2000 and their rates per century:
/// a [AU], e, I [deg], L [deg], longitude of perihelion [deg], longitude of ascending node [deg]
struct PlanetElements {
    elements: [f64; 6],
    rates: [f64; 6],
}

const MERCURY: PlanetElements = PlanetElements {
    elements: [ 0.38709927, 0.20563593, 7.00497902, 252.25032350, 77.45779628, 48.33076593 ],
    rates:    [ 0.00000037, 0.00001906, -0.00594749, 149472.67411175, 0.16047689, -0.12534081 ]
};
const VENUS: PlanetElements = PlanetElements {
    elements: [ 0.72333566, 0.00677672, 3.39467605, 181.97909950, 131.60246718, 76.67984255 ],
    rates:    [ 0.00000390, -0.00004107, -0.00078890, 58517.81538729, 0.00268329, -0.27769418 ]
};
const EARTH_MOON_BARYCENTER: PlanetElements = PlanetElements {
    elements: [ 1.00000261, 0.01671123, -0.00001531, 100.46457166, 102.93768193, 0.0 ],
    rates:    [ 0.00000562, -0.00004392, -0.01294668, 35999.37244981, 0.32327364, 0.0 ]
};
const MARS: PlanetElements = PlanetElements {
    elements: [ 1.52371034, 0.09339410, 1.84969142, -4.55343205, -23.94362959, 49.55953891 ],
    rates:    [ 0.00001847, 0.00007882, -0.00813131, 19140.30268499, 0.44441088, -0.29257343 ]
};
const JUPITER: PlanetElements = PlanetElements {
    elements: [ 5.20288700, 0.04838624, 1.30439695, 34.39644051, 14.72847983, 100.47390909 ],
    rates:    [ -0.00011607, -0.00013253, -0.00183714, 3034.74612775, 0.21252668, 0.20469106 ]
};
const SATURN: PlanetElements = PlanetElements {
    elements: [ 9.53667594, 0.05386179, 2.48599187, 49.95424423, 92.59887831, 113.66242448 ],
    rates:    [ -0.00125060, -0.00050991, 0.00193609, 1222.49362201, -0.41897216, -0.28867794 ]
};
const URANUS: PlanetElements = PlanetElements {
    elements: [ 19.18916464, 0.04725744, 0.77263783, 313.23810451, 170.95427630, 74.01692503 ],
    rates:    [ -0.00196176, -0.00004397, -0.00242939, 428.48202785, 0.40805281, 0.04240589 ]
};
const NEPTUNE: PlanetElements = PlanetElements {
    elements: [ 30.06992276, 0.00859048, 1.77004347, -55.12002969, 44.96476227, 131.78422574 ],
    rates:    [ 0.00026291, 0.00005105, 0.00035372, 218.45945325, -0.32241464, -0.00508664 ]
};
const PLUTO: PlanetElements = PlanetElements {
    elements: [ 39.48211675, 0.24882730, 17.14001206, 238.92903833, 224.06891629, 110.30393684 ],
    rates:    [ -0.00031596, 0.00005170, 0.00004818, 145.20780515, -0.04062942, -0.01183482 ]
};

fn planet_elements (planet: Planet)->&'static PlanetElements {
    match planet {
        Planet::Mercury => &MERCURY,
        Planet::Venus => &VENUS,
        Planet::Mars => &MARS,
        Planet::Jupiter => &JUPITER,
        Planet::Saturn => &SATURN,
        Planet::Uranus => &URANUS,
        Planet::Neptune => &NEPTUNE,
        Planet::Pluto => &PLUTO,
    }
}

fn heliocentric_from_elements (pe: &PlanetElements, jd: f64)->Option<Vector3<f64>> {
    let t = (jd - J2000) / DAYS_PER_CENTURY;
    let el: Vec<f64> = pe.elements.iter().zip( pe.rates.iter()).map( |(e,r)| e + r * t).collect();
    let (a, e, incl, l, long_peri, node) = (el[0], el[1], el[2], el[3], el[4], el[5]);

    let w = long_peri - node;
    let mut m = normalize_360( l - long_peri);
    if m > 180.0 { m -= 360.0 }

    let ea = solve_elliptic( rad(m), e)?;
    let x = a * (cos(ea) - e);
    let y = a * sqrt( 1.0 - e * e) * sin(ea);
    let r = sqrt( x * x + y * y);
    let v = atan2( y, x);

    Some( orbit_to_ecliptic( r, v, rad(w), rad(node), rad(incl)) )
}

/// heliocentric J2000 ecliptic position [AU] of a planet
pub fn planet_heliocentric (planet: Planet, jd: f64)->Option<Vector3<f64>> {
    heliocentric_from_elements( planet_elements(planet), jd)
}

/// heliocentric J2000 ecliptic position [AU] of the earth-moon barycenter, which is close enough to the earth
/// for planet and small body astrometry
pub fn earth_heliocentric (jd: f64)->Option<Vector3<f64>> {
    heliocentric_from_elements( &EARTH_MOON_BARYCENTER, jd)
}

/* #endregion planets */
