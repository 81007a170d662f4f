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

use std::collections::HashMap;
use chrono::{DateTime,Utc};
use nalgebra::Vector3;
use serde::{Deserialize,Serialize};
use tracing::{debug,info_span,warn};
use celestial_common::{
    deg,
    datetime::{add_secs, julian_date},
};
use crate::{
    astro::{apparent_altaz, bright_limb_angle, illuminated_fraction, is_sunlit, look_angles, precess_from_j2000, radec,
            ecliptic_longitude_of_date, AltAz, Observer},
    backend::EphemerisBackend,
    bodies::{find_star, BodyKind, DataTag, Planet},
    catalog::ApparentMagnitudeRecord,
    config::EphemerisConfig,
    convert::convert,
    designation::{comet_designation, minor_planet_designation, normalize_name},
    eclipse::{moon_elongation, next_lunar_eclipse, next_solar_eclipse, Eclipse, SYNODIC_MONTH_DAYS},
    errors::{Result, op_failed},
    events::{find_crossings, next_angle_crossing, rise_set, RiseSet},
    gp_record::GeneralPerturbationRecord,
    lunar_phase::LunarPhase,
    magnitude::apparent_magnitude,
    orbital_element::OrbitalElement,
    satellite_pass::{PassFinder, PassGeometry},
    visibility::VisibilityResult,
};

/// how far ahead we look for equinoxes and solstices [days]
const SEASON_SEARCH_DAYS: f64 = 370.0;
const SEASON_STEP_SECS: f64 = 86400.0;

/// which bodies to compute. Names are matched case-insensitively against the catalogs
#[derive(Debug,Clone,Default,PartialEq,Serialize,Deserialize)]
#[serde(default)]
pub struct BodySelection {
    pub moon: bool,
    pub sun: bool,
    pub planets: Vec<Planet>,
    pub stars: Vec<String>,
    pub satellites: Vec<String>,
    pub comets: Vec<String>,
    pub minor_planets: Vec<String>,
}

impl BodySelection {
    pub fn is_empty (&self)->bool {
        !self.moon && !self.sun && self.planets.is_empty() && self.stars.is_empty() && self.satellites.is_empty()
            && self.comets.is_empty() && self.minor_planets.is_empty()
    }
}

/// the catalog data the engine draws small bodies and satellites from. All maps are keyed by upper case name
#[derive(Debug,Clone,Default)]
pub struct Catalogs {
    pub comets: HashMap<String,OrbitalElement>,
    pub minor_planets: HashMap<String,OrbitalElement>,
    pub comet_magnitudes: HashMap<String,ApparentMagnitudeRecord>,
    pub minor_planet_magnitudes: HashMap<String,ApparentMagnitudeRecord>,
    pub satellites: HashMap<String,GeneralPerturbationRecord>,
}

/// computes the visibility of selected bodies for an observer at a given time. The engine is stateless, all
/// astrometry is delegated to the backend
pub struct EphemerisEngine<'a> {
    backend: &'a dyn EphemerisBackend,
    config: &'a EphemerisConfig,
}

impl <'a> EphemerisEngine<'a> {
    pub fn new (backend: &'a dyn EphemerisBackend, config: &'a EphemerisConfig)->Self {
        EphemerisEngine { backend, config }
    }

    pub fn backend (&self)->&dyn EphemerisBackend { self.backend }

    /// compute the visibility map. Bodies that fail to compute are logged and left out, they never fail the
    /// whole computation. The magnitude ceiling (if any) gates comets and minor planets
    pub fn compute (&self, observer: &Observer, t: &DateTime<Utc>, selection: &BodySelection, catalogs: &Catalogs,
                    magnitude_ceiling: Option<f64>)->VisibilityResult
    {
        let ceiling = EphemerisConfig::clamped_magnitude_ceiling( magnitude_ceiling);
        let mut result = VisibilityResult::new();

        if selection.moon {
            self.compute_body( &mut result, BodyKind::Moon, "Moon", |r| self.moon( r, observer, t));
        }
        if selection.sun {
            self.compute_body( &mut result, BodyKind::Sun, "Sun", |r| self.sun( r, observer, t));
        }
        for planet in &selection.planets {
            self.compute_body( &mut result, BodyKind::Planet, planet.name(), |r| self.planet( r, *planet, observer, t));
        }
        for name in &selection.stars {
            self.compute_body( &mut result, BodyKind::Star, name, |r| self.star( r, name, observer, t));
        }
        for name in &selection.satellites {
            self.compute_body( &mut result, BodyKind::Satellite, name, |r| self.satellite( r, name, &catalogs.satellites, observer, t));
        }
        for name in &selection.comets {
            self.compute_body( &mut result, BodyKind::Comet, name, |r| {
                self.small_body( r, BodyKind::Comet, name, &catalogs.comets, &catalogs.comet_magnitudes, ceiling, observer, t)
            });
        }
        for name in &selection.minor_planets {
            self.compute_body( &mut result, BodyKind::MinorPlanet, name, |r| {
                self.small_body( r, BodyKind::MinorPlanet, name, &catalogs.minor_planets, &catalogs.minor_planet_magnitudes, ceiling, observer, t)
            });
        }

        result
    }

    /// run a per-body computation on its own result fragment so that a failure can't leave partial keys behind
    fn compute_body<F> (&self, result: &mut VisibilityResult, kind: BodyKind, name: &str, f: F)
        where F: FnOnce(&mut VisibilityResult)->Result<()>
    {
        let span = info_span!("body", kind = %kind, name = %name, backend = self.backend.name());
        let _guard = span.enter();

        let mut fragment = VisibilityResult::new();
        match f( &mut fragment) {
            Ok(()) => result.merge( fragment),
            Err(e) => warn!("failed to compute {} {}: {}", kind, name, e),
        }
    }

    fn rise_set_window_secs (&self)->f64 { self.config.rise_set_window_hours * 3600.0 }
    fn rise_set_step_secs (&self)->f64 { self.config.rise_set_step_minutes * 60.0 }
    fn event_step_secs (&self)->f64 { self.config.event_step_hours * 3600.0 }

    /// the common rise/set/az/alt keys. Az/alt are only reported while the body is above the horizon
    fn position_keys<P> (&self, r: &mut VisibilityResult, kind: BodyKind, name: &str, observer: &Observer, t: &DateTime<Utc>,
                         horizon: f64, topocentric: bool, position: P)->Result<RiseSet>
        where P: Fn(&DateTime<Utc>)->Result<Vector3<f64>>
    {
        let altaz = |t: &DateTime<Utc>| -> Result<AltAz> {
            Ok( apparent_altaz( &position(t)?, observer, julian_date(t), topocentric))
        };

        let rs = rise_set( |t| Ok( altaz(t)?.altitude), t, self.rise_set_window_secs(), self.rise_set_step_secs(), horizon)?;

        match rs {
            RiseSet::NeverRises => {
                debug!("{} {} does not rise", kind, name);
            }
            RiseSet::AlwaysUp => {
                let now = altaz(t)?;
                r.insert_angle( kind, name, DataTag::Azimuth, now.azimuth);
                r.insert_angle( kind, name, DataTag::Altitude, now.altitude);
            }
            RiseSet::RisesAndSets { rise, set } => {
                r.insert_date( kind, name, DataTag::RiseDate, &rise);
                r.insert_angle( kind, name, DataTag::RiseAzimuth, altaz( &rise)?.azimuth);
                r.insert_date( kind, name, DataTag::SetDate, &set);
                r.insert_angle( kind, name, DataTag::SetAzimuth, altaz( &set)?.azimuth);

                let now = altaz(t)?;
                if now.altitude > horizon {
                    r.insert_angle( kind, name, DataTag::Azimuth, now.azimuth);
                    r.insert_angle( kind, name, DataTag::Altitude, now.altitude);
                }
            }
        }

        Ok(rs)
    }

    /* #region moon ******************************************************************************************/

    fn moon (&self, r: &mut VisibilityResult, observer: &Observer, t: &DateTime<Utc>)->Result<()> {
        let (kind, name) = (BodyKind::Moon, "Moon");
        self.position_keys( r, kind, name, observer, t, self.config.moon_horizon, true, |t| self.backend.moon(t))?;

        let sun = self.backend.sun(t)?;
        let moon = self.backend.moon(t)?;
        let illumination = (illuminated_fraction( &moon, &sun) * 100.0).round().clamp( 0.0, 100.0) as u8;
        r.insert_percent( kind, name, DataTag::IlluminationPercentage, illumination);

        let window = SYNODIC_MONTH_DAYS * 1.2 * 86400.0;
        let step = self.event_step_secs();
        let elongation = |t: &DateTime<Utc>| moon_elongation( self.backend, t);

        let new_moon = next_angle_crossing( elongation, t, window, step, 0.0)?;
        let first_quarter = next_angle_crossing( elongation, t, window, step, 90.0)?;
        let full_moon = next_angle_crossing( elongation, t, window, step, 180.0)?;
        let third_quarter = next_angle_crossing( elongation, t, window, step, 270.0)?;

        for (tag, date) in [(DataTag::NewMoon, &new_moon), (DataTag::FirstQuarter, &first_quarter),
                            (DataTag::FullMoon, &full_moon), (DataTag::ThirdQuarter, &third_quarter)] {
            if let Some(date) = date { r.insert_date( kind, name, tag, date) }
        }

        let (Some(new_moon), Some(full_moon)) = (new_moon, full_moon) else {
            return Err( op_failed!("no new/full moon within {:.0} days", window / 86400.0))
        };
        let phase = LunarPhase::from_illumination( illumination, full_moon < new_moon);
        r.insert_text( kind, name, DataTag::Phase, phase);

        let jd = julian_date(t);
        let (sun_ra, sun_dec, _) = radec( &sun);
        let (moon_ra, moon_dec, _) = radec( &moon);
        let (sun_ra, sun_dec) = precess_from_j2000( sun_ra, sun_dec, jd);
        let (moon_ra, moon_dec) = precess_from_j2000( moon_ra, moon_dec, jd);
        let limb = bright_limb_angle( sun_ra, sun_dec, moon_ra, moon_dec, observer, jd);
        r.insert_angle( kind, name, DataTag::BrightLimbAngle, deg(limb));

        if let Some(eclipse) = next_lunar_eclipse( self.backend, t, self.config.eclipse_search_lunations, step)? {
            eclipse_keys( r, kind, name, &eclipse);
        }

        Ok(())
    }

    /* #endregion moon */

    /* #region sun *******************************************************************************************/

    fn sun (&self, r: &mut VisibilityResult, observer: &Observer, t: &DateTime<Utc>)->Result<()> {
        let (kind, name) = (BodyKind::Sun, "Sun");
        self.position_keys( r, kind, name, observer, t, self.config.sun_horizon, false, |t| self.backend.sun(t))?;

        let sun_altitude = |t: &DateTime<Utc>| -> Result<f64> {
            Ok( apparent_altaz( &self.backend.sun(t)?, observer, julian_date(t), false).altitude)
        };
        let crossings = find_crossings( sun_altitude, t, self.rise_set_window_secs(), self.rise_set_step_secs(), self.config.dawn_dusk_altitude)?;
        if let Some(dawn) = crossings.iter().find( |c| c.rising) {
            r.insert_date( kind, name, DataTag::Dawn, &dawn.time);
        }
        if let Some(dusk) = crossings.iter().find( |c| !c.rising) {
            r.insert_date( kind, name, DataTag::Dusk, &dusk.time);
        }

        let longitude = |t: &DateTime<Utc>| -> Result<f64> {
            Ok( ecliptic_longitude_of_date( &self.backend.sun(t)?, julian_date(t)))
        };
        let window = SEASON_SEARCH_DAYS * 86400.0;
        let earliest = |a: Option<DateTime<Utc>>, b: Option<DateTime<Utc>>| match (a, b) {
            (Some(a), Some(b)) => Some( a.min(b)),
            (a, b) => a.or(b),
        };

        let equinox = earliest( next_angle_crossing( longitude, t, window, SEASON_STEP_SECS, 0.0)?,
                                next_angle_crossing( longitude, t, window, SEASON_STEP_SECS, 180.0)?);
        let solstice = earliest( next_angle_crossing( longitude, t, window, SEASON_STEP_SECS, 90.0)?,
                                 next_angle_crossing( longitude, t, window, SEASON_STEP_SECS, 270.0)?);
        if let Some(equinox) = equinox { r.insert_date( kind, name, DataTag::Equinox, &equinox) }
        if let Some(solstice) = solstice { r.insert_date( kind, name, DataTag::Solstice, &solstice) }

        if let Some(eclipse) = next_solar_eclipse( self.backend, t, self.config.eclipse_search_lunations, self.event_step_secs())? {
            eclipse_keys( r, kind, name, &eclipse);
        }

        Ok(())
    }

    /* #endregion sun */

    fn planet (&self, r: &mut VisibilityResult, planet: Planet, observer: &Observer, t: &DateTime<Utc>)->Result<()> {
        self.position_keys( r, BodyKind::Planet, planet.name(), observer, t, self.config.horizon, false, |t| self.backend.planet( planet, t))?;
        Ok(())
    }

    fn star (&self, r: &mut VisibilityResult, name: &str, observer: &Observer, t: &DateTime<Utc>)->Result<()> {
        let star = find_star( name).ok_or_else( || op_failed!("unknown star '{}'", name))?;
        self.position_keys( r, BodyKind::Star, name, observer, t, self.config.horizon, false, |t| self.backend.star( star, t))?;
        Ok(())
    }

    /* #region small bodies **********************************************************************************/

    /// comets and minor planets. With a ceiling, bodies that are fainter (or whose magnitude is undefined) are
    /// skipped before any position is computed
    fn small_body (&self, r: &mut VisibilityResult, kind: BodyKind, name: &str,
                   elements: &HashMap<String,OrbitalElement>, magnitudes: &HashMap<String,ApparentMagnitudeRecord>,
                   ceiling: Option<f64>, observer: &Observer, t: &DateTime<Utc>)->Result<()>
    {
        // catalogs are keyed by designation, selections can use the full readable name
        let designation = match kind {
            BodyKind::Comet => comet_designation( name),
            _ => minor_planet_designation( name)
        };
        let keys = [ designation.as_deref().map( normalize_name), Some( normalize_name( name)) ];
        let element = keys.iter().flatten().find_map( |k| elements.get(k))
            .ok_or_else( || op_failed!("no {} catalog entry for '{}'", kind, name))?;

        let native = self.backend.native_format( element.format.is_comet());
        let record = if element.format == native {
            element.raw_record.clone()
        } else {
            convert( &element.raw_record, element.format, native)?
        };

        if let Some(ceiling) = ceiling {
            let magnitude = match keys.iter().flatten().find_map( |k| magnitudes.get(k)).and_then( |m| m.magnitude()) {
                Some(m) => Some(m),
                None => {
                    let state = self.backend.small_body( &record, native, t)?;
                    apparent_magnitude( &element.record()?.magnitude_model(), state.sun_distance, state.earth_distance, state.earth_sun_distance)
                }
            };

            match magnitude {
                Some(m) if m <= ceiling => {}
                Some(m) => {
                    debug!("{} {} too faint ({:.2} > {:.2})", kind, name, m, ceiling);
                    return Ok(())
                }
                None => {
                    debug!("{} {} has no defined magnitude", kind, name);
                    return Ok(())
                }
            }
        }

        self.position_keys( r, kind, name, observer, t, self.config.horizon, false, |t| {
            Ok( self.backend.small_body( &record, native, t)?.geocentric)
        })?;
        Ok(())
    }

    /* #endregion small bodies */

    /* #region satellites ************************************************************************************/

    fn satellite (&self, r: &mut VisibilityResult, name: &str, satellites: &HashMap<String,GeneralPerturbationRecord>,
                  observer: &Observer, t: &DateTime<Utc>)->Result<()>
    {
        let kind = BodyKind::Satellite;
        let gp = satellites.get( &normalize_name( name)).ok_or_else( || op_failed!("no TLE for '{}'", name))?;

        let geometry = SatelliteGeometry { backend: self.backend, gp, observer };
        let finder = PassFinder::new( &geometry, self.config.pass_strategy, self.config.twilight_altitude);
        let horizon_secs = self.config.satellite_search_hours * 3600.0;

        match finder.next_visible_pass( t, horizon_secs, self.config.satellite_step_secs, self.config.satellite_min_altitude)? {
            Some(pass) => {
                r.insert_date( kind, name, DataTag::RiseDate, &pass.rise_time);
                r.insert_angle( kind, name, DataTag::RiseAzimuth, pass.rise_azimuth);
                r.insert_date( kind, name, DataTag::SetDate, &pass.set_time);
                r.insert_angle( kind, name, DataTag::SetAzimuth, pass.set_azimuth);
            }
            None => debug!("no visible pass of {} within {} h", name, self.config.satellite_search_hours)
        }

        Ok(())
    }

    /* #endregion satellites */
}

fn eclipse_keys (r: &mut VisibilityResult, kind: BodyKind, name: &str, eclipse: &Eclipse) {
    r.insert_date( kind, name, DataTag::EclipseDate, &eclipse.time);
    r.insert_text( kind, name, DataTag::EclipseType, eclipse.kind);
    r.insert_angle( kind, name, DataTag::EclipseLatitude, eclipse.latitude);
    r.insert_angle( kind, name, DataTag::EclipseLongitude, eclipse.longitude);
}

/// pass geometry of one satellite/observer pair on top of an ephemeris backend
pub struct SatelliteGeometry<'a> {
    pub backend: &'a dyn EphemerisBackend,
    pub gp: &'a GeneralPerturbationRecord,
    pub observer: &'a Observer,
}

impl <'a> PassGeometry for SatelliteGeometry<'a> {
    fn satellite_altaz (&self, t: &DateTime<Utc>)->Result<AltAz> {
        let state = self.backend.satellite( self.gp, t)?;
        Ok( look_angles( &state.ecef, self.observer).0)
    }

    fn is_sunlit (&self, t: &DateTime<Utc>)->Result<bool> {
        let state = self.backend.satellite( self.gp, t)?;
        Ok( is_sunlit( &state.eci, &self.backend.sun(t)?))
    }

    fn sun_altitude (&self, t: &DateTime<Utc>)->Result<f64> {
        Ok( apparent_altaz( &self.backend.sun(t)?, self.observer, julian_date(t), false).altitude)
    }
}
