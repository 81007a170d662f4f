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
use serde::{Deserialize,Serialize};
use tracing::debug;
use celestial_common::datetime::{add_secs, secs_between};
use crate::{
    astro::AltAz,
    errors::Result,
    events::{find_crossings, find_local_maxima},
};

/// the geometric queries the pass finder needs for one satellite and observer
pub trait PassGeometry {
    /// look angles of the satellite as seen by the observer
    fn satellite_altaz (&self, t: &DateTime<Utc>)->Result<AltAz>;

    /// is the satellite outside of the earth shadow
    fn is_sunlit (&self, t: &DateTime<Utc>)->Result<bool>;

    /// sun altitude at the observer location [deg]
    fn sun_altitude (&self, t: &DateTime<Utc>)->Result<f64>;
}

/// how pass visibility is established
#[derive(Debug,Clone,Copy,PartialEq,Eq,Serialize,Deserialize)]
pub enum VisibilityStrategy {
    /// only test the culmination instants
    Culmination,
    /// test the culminations plus `samples` evenly spaced instants from rise to set (inclusive)
    Sampled { samples: usize },
}

#[derive(Debug,Clone,Copy,PartialEq)]
pub enum PassEvent {
    Rise(DateTime<Utc>),
    Culminate(DateTime<Utc>),
    Set(DateTime<Utc>),
}

impl PassEvent {
    pub fn time (&self)->DateTime<Utc> {
        match self {
            PassEvent::Rise(t) | PassEvent::Culminate(t) | PassEvent::Set(t) => *t
        }
    }
}

/// a confirmed visible pass. Azimuths are taken at the rise and set instants
#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
pub struct SatellitePass {
    pub rise_time: DateTime<Utc>,
    pub rise_azimuth: f64,
    pub set_time: DateTime<Utc>,
    pub set_azimuth: f64,
}

impl fmt::Display for SatellitePass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SatellitePass( rise: {} @ {:.1}°, set: {} @ {:.1}°)", self.rise_time, self.rise_azimuth, self.set_time, self.set_azimuth)
    }
}

pub struct PassFinder<'a, G: PassGeometry> {
    geometry: &'a G,
    strategy: VisibilityStrategy,
    twilight_altitude: f64,
}

impl <'a, G: PassGeometry> PassFinder<'a, G> {
    pub fn new (geometry: &'a G, strategy: VisibilityStrategy, twilight_altitude: f64)->Self {
        PassFinder { geometry, strategy, twilight_altitude }
    }

    /// the chronologically ordered rise/culminate/set events within the search horizon
    pub fn find_events (&self, t0: &DateTime<Utc>, horizon_secs: f64, step_secs: f64, min_altitude: f64)->Result<Vec<PassEvent>> {
        let altitude = |t: &DateTime<Utc>| -> Result<f64> { Ok( self.geometry.satellite_altaz(t)?.altitude) };

        let crossings = find_crossings( altitude, t0, horizon_secs, step_secs, min_altitude)?;
        let mut events: Vec<PassEvent> = Vec::with_capacity( crossings.len() * 2);
        let mut last_rise: Option<DateTime<Utc>> = None;

        for c in crossings {
            if c.rising {
                events.push( PassEvent::Rise( c.time));
                last_rise = Some( c.time);
            } else {
                if let Some(rise) = last_rise.take() {
                    let step = (step_secs / 4.0).max(1.0);
                    for t in find_local_maxima( altitude, &rise, &c.time, step)? {
                        events.push( PassEvent::Culminate(t));
                    }
                }
                events.push( PassEvent::Set( c.time));
            }
        }

        Ok(events)
    }

    /// is the satellite observable at the given instant
    pub fn is_visible_at (&self, t: &DateTime<Utc>)->Result<bool> {
        Ok( self.geometry.sun_altitude(t)? <= self.twilight_altitude && self.geometry.is_sunlit(t)?)
    }

    fn is_visible_pass (&self, rise: &DateTime<Utc>, set: &DateTime<Utc>, culminations: &[DateTime<Utc>])->Result<bool> {
        for t in culminations {
            if self.is_visible_at( t)? { return Ok(true) }
        }

        if let VisibilityStrategy::Sampled { samples } = self.strategy {
            if samples > 0 {
                let span = secs_between( rise, set);
                let dt = if samples > 1 { span / (samples - 1) as f64 } else { 0.0 };
                for i in 0..samples {
                    if self.is_visible_at( &add_secs( rise, dt * i as f64))? { return Ok(true) }
                }
            }
        }

        Ok(false)
    }

    /// run the pass state machine over an ordered event stream
    pub fn visible_passes (&self, events: &[PassEvent])->Result<Vec<SatellitePass>> {
        let mut passes = Vec::new();
        let mut rise: Option<DateTime<Utc>> = None;
        let mut culminations: Vec<DateTime<Utc>> = Vec::new();

        for e in events {
            match e {
                PassEvent::Rise(t) => {
                    rise = Some(*t); // a pending rise that never culminated is incomplete
                    culminations.clear();
                }
                PassEvent::Culminate(t) => {
                    if rise.is_some() { culminations.push(*t) }
                }
                PassEvent::Set(t_set) => {
                    if let Some(t_rise) = rise.take() {
                        if !culminations.is_empty() && self.is_visible_pass( &t_rise, t_set, &culminations)? {
                            passes.push( SatellitePass {
                                rise_time: t_rise,
                                rise_azimuth: self.geometry.satellite_altaz( &t_rise)?.azimuth,
                                set_time: *t_set,
                                set_azimuth: self.geometry.satellite_altaz( t_set)?.azimuth
                            });
                        } else {
                            debug!("pass {} - {} not visible", t_rise, t_set);
                        }
                    }
                    culminations.clear();
                }
            }
        }

        Ok(passes)
    }

    /// the first visible pass within the search horizon, if any
    pub fn next_visible_pass (&self, t0: &DateTime<Utc>, horizon_secs: f64, step_secs: f64, min_altitude: f64)->Result<Option<SatellitePass>> {
        let events = self.find_events( t0, horizon_secs, step_secs, min_altitude)?;
        Ok( self.visible_passes( &events)?.into_iter().next())
    }
}
