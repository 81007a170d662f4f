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
use celestial_common::{
    angle::delta_degrees,
    datetime::{add_secs, secs_between},
};
use crate::errors::{Result, op_failed};

/// crossings are refined to this resolution [s]
pub const TIME_RESOLUTION_SECS: f64 = 1.0;

const GOLDEN_RATIO_INV: f64 = 0.6180339887498949;

#[derive(Debug,Clone,Copy,PartialEq)]
pub struct Crossing {
    pub time: DateTime<Utc>,
    pub rising: bool,
}

/// find all instants within [t0, t0+window] where `f` crosses `threshold`. `f` is sampled at `step_secs`
/// intervals and each detected sign change is refined by bisection
pub fn find_crossings<F> (mut f: F, t0: &DateTime<Utc>, window_secs: f64, step_secs: f64, threshold: f64)->Result<Vec<Crossing>>
    where F: FnMut(&DateTime<Utc>)->Result<f64>
{
    if !(step_secs > 0.0) { return Err( op_failed!("invalid search step {step_secs}")) }

    let mut crossings = Vec::new();
    let mut t_prev = *t0;
    let mut v_prev = f( &t_prev)? - threshold;
    let mut dt = 0.0;

    while dt < window_secs {
        dt = (dt + step_secs).min( window_secs);
        let t = add_secs( t0, dt);
        let v = f( &t)? - threshold;

        if (v_prev <= 0.0) != (v <= 0.0) {
            let time = bisect( &mut f, threshold, t_prev, t, v_prev <= 0.0)?;
            crossings.push( Crossing { time, rising: v > 0.0 });
        }
        t_prev = t;
        v_prev = v;
    }

    Ok(crossings)
}

fn bisect<F> (f: &mut F, threshold: f64, mut lo: DateTime<Utc>, mut hi: DateTime<Utc>, lo_below: bool)->Result<DateTime<Utc>>
    where F: FnMut(&DateTime<Utc>)->Result<f64>
{
    while secs_between( &lo, &hi) > TIME_RESOLUTION_SECS {
        let mid = add_secs( &lo, secs_between( &lo, &hi) / 2.0);
        let below = f( &mid)? - threshold <= 0.0;
        if below == lo_below { lo = mid } else { hi = mid }
    }
    Ok( add_secs( &lo, secs_between( &lo, &hi) / 2.0))
}

/// find the instants within the window at which the angle returned by `f` [deg] passes `target` in
/// increasing direction. Angles wrap at 360
pub fn find_angle_crossings<F> (mut f: F, t0: &DateTime<Utc>, window_secs: f64, step_secs: f64, target: f64)->Result<Vec<DateTime<Utc>>>
    where F: FnMut(&DateTime<Utc>)->Result<f64>
{
    let mut g = |t: &DateTime<Utc>| -> Result<f64> { Ok( delta_degrees( f(t)?, target)) };

    let mut times = Vec::new();
    let mut t_prev = *t0;
    let mut v_prev = g( &t_prev)?;
    let mut dt = 0.0;

    while dt < window_secs {
        dt = (dt + step_secs).min( window_secs);
        let t = add_secs( t0, dt);
        let v = g( &t)?;

        // ignore the wrap-around discontinuity at +-180
        if v_prev < 0.0 && v >= 0.0 && (v - v_prev) < 90.0 {
            times.push( bisect( &mut g, 0.0, t_prev, t, true)?);
        }
        t_prev = t;
        v_prev = v;
    }

    Ok(times)
}

/// the first time after `t0` the angle `f` passes `target`
pub fn next_angle_crossing<F> (f: F, t0: &DateTime<Utc>, window_secs: f64, step_secs: f64, target: f64)->Result<Option<DateTime<Utc>>>
    where F: FnMut(&DateTime<Utc>)->Result<f64>
{
    Ok( find_angle_crossings( f, t0, window_secs, step_secs, target)?.into_iter().next())
}

/// golden section search for the maximum of a unimodal `f` within [a,b]
pub fn find_maximum<F> (mut f: F, a: &DateTime<Utc>, b: &DateTime<Utc>)->Result<(DateTime<Utc>,f64)>
    where F: FnMut(&DateTime<Utc>)->Result<f64>
{
    let base = *a;
    let mut lo = 0.0;
    let mut hi = secs_between( a, b);

    let mut x1 = hi - GOLDEN_RATIO_INV * (hi - lo);
    let mut x2 = lo + GOLDEN_RATIO_INV * (hi - lo);
    let mut f1 = f( &add_secs( &base, x1))?;
    let mut f2 = f( &add_secs( &base, x2))?;

    while hi - lo > TIME_RESOLUTION_SECS {
        if f1 < f2 {
            lo = x1;
            x1 = x2; f1 = f2;
            x2 = lo + GOLDEN_RATIO_INV * (hi - lo);
            f2 = f( &add_secs( &base, x2))?;
        } else {
            hi = x2;
            x2 = x1; f2 = f1;
            x1 = hi - GOLDEN_RATIO_INV * (hi - lo);
            f1 = f( &add_secs( &base, x1))?;
        }
    }

    let t = add_secs( &base, (lo + hi) / 2.0);
    let v = f( &t)?;
    Ok( (t, v) )
}

/// minimum of `f` within [a,b]
pub fn find_minimum<F> (mut f: F, a: &DateTime<Utc>, b: &DateTime<Utc>)->Result<(DateTime<Utc>,f64)>
    where F: FnMut(&DateTime<Utc>)->Result<f64>
{
    let (t, v) = find_maximum( |t| Ok( -f(t)?), a, b)?;
    Ok( (t, -v) )
}

/// all local maxima of `f` in [t0, t1], located by sampling and refined with golden section search
pub fn find_local_maxima<F> (mut f: F, t0: &DateTime<Utc>, t1: &DateTime<Utc>, step_secs: f64)->Result<Vec<DateTime<Utc>>>
    where F: FnMut(&DateTime<Utc>)->Result<f64>
{
    let span = secs_between( t0, t1);
    let n = ((span / step_secs).ceil() as usize).max(2);
    let dt = span / n as f64;

    let mut samples: Vec<(DateTime<Utc>,f64)> = Vec::with_capacity( n+1);
    for i in 0..=n {
        let t = add_secs( t0, dt * i as f64);
        samples.push( (t, f(&t)?));
    }

    let mut maxima = Vec::new();
    for i in 0..samples.len() {
        let v = samples[i].1;
        let left = if i > 0 { samples[i-1].1 } else { f64::NEG_INFINITY };
        let right = if i + 1 < samples.len() { samples[i+1].1 } else { f64::NEG_INFINITY };

        if v >= left && v > right {
            let a = if i > 0 { samples[i-1].0 } else { samples[i].0 };
            let b = if i + 1 < samples.len() { samples[i+1].0 } else { samples[i].0 };
            if a < b {
                maxima.push( find_maximum( &mut f, &a, &b)?.0);
            } else {
                maxima.push( samples[i].0);
            }
        }
    }

    Ok(maxima)
}

/// rise/set classification of a body over a search window
#[derive(Debug,Clone,Copy,PartialEq)]
pub enum RiseSet {
    NeverRises,
    AlwaysUp,
    RisesAndSets { rise: DateTime<Utc>, set: DateTime<Utc> },
}

/// classify the altitude function `altitude` [deg] against `horizon` [deg] over the window and return the next rise
/// and set. A window that only contains a rise or only a set cannot be classified and is an error
pub fn rise_set<F> (mut altitude: F, t0: &DateTime<Utc>, window_secs: f64, step_secs: f64, horizon: f64)->Result<RiseSet>
    where F: FnMut(&DateTime<Utc>)->Result<f64>
{
    let alt0 = altitude( t0)?;
    let crossings = find_crossings( &mut altitude, t0, window_secs, step_secs, horizon)?;

    let rise = crossings.iter().find( |c| c.rising).map( |c| c.time);
    let set = crossings.iter().find( |c| !c.rising).map( |c| c.time);

    match (rise, set) {
        (Some(rise), Some(set)) => Ok( RiseSet::RisesAndSets { rise, set }),
        (None, None) => if alt0 > horizon { Ok( RiseSet::AlwaysUp) } else { Ok( RiseSet::NeverRises) },
        (Some(_), None) => Err( op_failed!("ambiguous rise/set: rises but does not set within search window")),
        (None, Some(_)) => Err( op_failed!("ambiguous rise/set: sets but does not rise within search window")),
    }
}
