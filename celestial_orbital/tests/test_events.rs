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

use chrono::{DateTime, TimeZone, Utc};
use celestial_common::datetime::{add_secs, secs_between};
use celestial_orbital::{
    errors::Result,
    events::*,
    lunar_phase::LunarPhase,
};

fn t0 ()->DateTime<Utc> { Utc.with_ymd_and_hms( 2024, 6, 21, 0, 0, 0).unwrap() }

fn secs (t: &DateTime<Utc>)->f64 { secs_between( &t0(), t) }

#[test]
fn test_crossings () {
    // sine with 1000s period, crossing 0.5 at 1000*(1/12) and 1000*(5/12) in each period
    let f = |t: &DateTime<Utc>| -> Result<f64> { Ok( (secs(t) * std::f64::consts::TAU / 1000.0).sin()) };
    let crossings = find_crossings( f, &t0(), 2000.0, 50.0, 0.5).unwrap();
    for c in &crossings { println!("{} rising: {}", secs(&c.time), c.rising) }

    assert_eq!( crossings.len(), 4);
    assert!( crossings[0].rising && !crossings[1].rising);
    assert!( (secs( &crossings[0].time) - 1000.0 / 12.0).abs() <= 1.0);
    assert!( (secs( &crossings[1].time) - 5000.0 / 12.0).abs() <= 1.0);

    assert!( find_crossings( f, &t0(), 2000.0, 0.0, 0.5).is_err());
}

#[test]
fn test_angle_crossings () {
    // angle advancing 1 deg per 100s starting at 350
    let f = |t: &DateTime<Utc>| -> Result<f64> { Ok( (350.0 + secs(t) / 100.0) % 360.0) };

    let t = next_angle_crossing( f, &t0(), 100_000.0, 600.0, 0.0).unwrap().unwrap();
    assert!( (secs(&t) - 1000.0).abs() <= 1.0);

    let t = next_angle_crossing( f, &t0(), 100_000.0, 600.0, 180.0).unwrap().unwrap();
    assert!( (secs(&t) - 19000.0).abs() <= 1.0);

    assert!( next_angle_crossing( f, &t0(), 500.0, 100.0, 90.0).unwrap().is_none());
}

#[test]
fn test_extrema () {
    let f = |t: &DateTime<Utc>| -> Result<f64> { let x = secs(t) - 1234.0; Ok( 10.0 - x * x / 1e4) };
    let (t, v) = find_maximum( f, &t0(), &add_secs( &t0(), 3000.0)).unwrap();
    assert!( (secs(&t) - 1234.0).abs() <= 1.0);
    assert!( (v - 10.0).abs() < 1e-3);

    let g = |t: &DateTime<Utc>| -> Result<f64> { Ok( (secs(t) * std::f64::consts::TAU / 1000.0).sin()) };
    let maxima = find_local_maxima( g, &t0(), &add_secs( &t0(), 1600.0), 30.0).unwrap();
    assert_eq!( maxima.len(), 2);
    assert!( (secs( &maxima[0]) - 250.0).abs() <= 1.0);
    assert!( (secs( &maxima[1]) - 1250.0).abs() <= 1.0);
}

#[test]
fn test_rise_set_classification () {
    let window = 86400.0;
    let step = 600.0;

    let rs = rise_set( |_| Ok(10.0), &t0(), window, step, -0.5).unwrap();
    assert_eq!( rs, RiseSet::AlwaysUp);

    let rs = rise_set( |_| Ok(-10.0), &t0(), window, step, -0.5).unwrap();
    assert_eq!( rs, RiseSet::NeverRises);

    let daily = |t: &DateTime<Utc>| -> Result<f64> { Ok( 30.0 * (secs(t) * std::f64::consts::TAU / 86400.0).cos()) };
    match rise_set( daily, &t0(), 2.0 * window, step, 0.0).unwrap() {
        RiseSet::RisesAndSets { rise, set } => {
            println!("rise: {rise}, set: {set}");
            assert!( (secs(&set) - 21600.0).abs() <= 1.0);
            assert!( (secs(&rise) - 64800.0).abs() <= 1.0);
        }
        other => panic!("unexpected {other:?}")
    }

    // only a rise within the window is ambiguous
    let rising = |t: &DateTime<Utc>| -> Result<f64> { Ok( secs(t) / 100.0 - 10.0) };
    assert!( rise_set( rising, &t0(), window, step, 0.0).is_err());
}

#[test]
fn test_lunar_phase () {
    use LunarPhase::*;

    assert_eq!( LunarPhase::from_illumination( 100, true), Full);
    assert_eq!( LunarPhase::from_illumination( 100, false), Full);
    assert_eq!( LunarPhase::from_illumination( 0, true), New);
    assert_eq!( LunarPhase::from_illumination( 0, false), New);
    assert_eq!( LunarPhase::from_illumination( 50, true), FirstQuarter);
    assert_eq!( LunarPhase::from_illumination( 50, false), ThirdQuarter);
    assert_eq!( LunarPhase::from_illumination( 25, true), WaxingCrescent);
    assert_eq!( LunarPhase::from_illumination( 25, false), WaningCrescent);
    assert_eq!( LunarPhase::from_illumination( 75, true), WaxingGibbous);
    assert_eq!( LunarPhase::from_illumination( 99, false), WaningGibbous);

    let mut p = New;
    for _ in 0..8 { p = p.next() }
    assert_eq!( p, New);
    assert_eq!( Full.next(), WaningGibbous);
    assert_eq!( WaxingGibbous.to_string(), "Waxing Gibbous");
}
