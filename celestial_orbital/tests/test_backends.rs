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
use nalgebra::Vector3;
use celestial_common::datetime::{add_secs, secs_between};
use celestial_orbital::{
    backend::{AnalyticBackend, EphemerisBackend, SatkitBackend},
    columns::LineBuilder,
    ephemeris::SatelliteGeometry,
    gp_record::{parse_tle, CatalogNumberPolicy, GeneralPerturbationRecord},
    orbital_element::{comet_cols, CatalogFormat},
    satellite_pass::{PassEvent, PassFinder, SatellitePass, VisibilityStrategy},
    Observer,
};

const ISS_LINE1: &str = "1 25544U 98067A   08264.51782528 -.00002182  00000-0 -11606-4 0  2927";
const ISS_LINE2: &str = "2 25544  51.6416 247.4627 0006703 130.5360 325.0288 15.72125391563537";

fn iss ()->GeneralPerturbationRecord {
    parse_tle( Some("ISS (ZARYA)"), ISS_LINE1, ISS_LINE2, CatalogNumberPolicy::Drop).unwrap().unwrap()
}

fn t0 ()->DateTime<Utc> { Utc.with_ymd_and_hms( 2008, 9, 21, 0, 0, 0).unwrap() }

fn boulder ()->Observer { Observer::new( 40.0, -105.0, 1600.0) }

/// 13P/Olbers, which had its perihelion on 2024-06-30
fn olbers ()->String {
    use comet_cols::*;
    let mut lb = LineBuilder::new( LINE_LENGTH);
    lb.put_left( DESIGNATION, "0013P");
    lb.put_right( PERIHELION_YEAR, "2024");
    lb.put_right( PERIHELION_MONTH, "06");
    lb.put_right( PERIHELION_DAY, "30.0000");
    lb.put_right( PERIHELION_DISTANCE, "1.175500");
    lb.put_right( ECCENTRICITY, "0.930300");
    lb.put_right( ARG_PERIHELION, "64.4100");
    lb.put_right( NODE, "85.8500");
    lb.put_right( INCLINATION, "44.6500");
    lb.put_right( EPOCH_YEAR, "2024");
    lb.put_right( EPOCH_MONTH, "06");
    lb.put_right( EPOCH_DAY, "30");
    lb.put_right( ABS_MAG, "5.0");
    lb.put_right( SLOPE, "4.0");
    lb.put_left( NAME, "13P/Olbers");
    lb.to_line()
}

fn angle_between (a: &Vector3<f64>, b: &Vector3<f64>)->f64 {
    (a.dot(b) / (a.norm() * b.norm())).clamp( -1.0, 1.0).acos().to_degrees()
}

fn azimuth_diff (a: f64, b: f64)->f64 {
    let d = (a - b).abs() % 360.0;
    d.min( 360.0 - d)
}

fn passes (backend: &dyn EphemerisBackend, gp: &GeneralPerturbationRecord, observer: &Observer)->(Vec<PassEvent>, Vec<SatellitePass>) {
    let geo = SatelliteGeometry { backend, gp, observer };
    let finder = PassFinder::new( &geo, VisibilityStrategy::Sampled { samples: 10 }, -6.0);
    let events = finder.find_events( &t0(), 48.0 * 3600.0, 30.0, 0.0).unwrap();
    let passes = finder.visible_passes( &events).unwrap();
    (events, passes)
}

#[test]
fn test_backends_agree_on_iss_passes () {
    let gp = iss();
    let observer = boulder();

    let (satkit_events, satkit_passes) = passes( &SatkitBackend::new(), &gp, &observer);
    let (analytic_events, analytic_passes) = passes( &AnalyticBackend::new(), &gp, &observer);
    for p in &satkit_passes { println!("satkit:   {p}") }
    for p in &analytic_passes { println!("analytic: {p}") }

    // ISS is above the horizon several times a day at 40N
    assert!( satkit_events.len() >= 8);
    assert_eq!( satkit_events.len(), analytic_events.len());
    for (a, b) in satkit_events.iter().zip( analytic_events.iter()) {
        assert_eq!( std::mem::discriminant(a), std::mem::discriminant(b));
        let dt = secs_between( &a.time(), &b.time()).abs();
        assert!( dt < 10.0, "event times differ by {dt}s: {a:?} {b:?}");
    }

    assert_eq!( satkit_passes.len(), analytic_passes.len());
    for (a, b) in satkit_passes.iter().zip( analytic_passes.iter()) {
        assert!( secs_between( &a.rise_time, &b.rise_time).abs() < 10.0);
        assert!( secs_between( &a.set_time, &b.set_time).abs() < 10.0);
        assert!( azimuth_diff( a.rise_azimuth, b.rise_azimuth) < 1.0);
        assert!( azimuth_diff( a.set_azimuth, b.set_azimuth) < 1.0);
    }
}

#[test]
fn test_backends_agree_on_sun_and_moon () {
    let satkit = SatkitBackend::new();
    let analytic = AnalyticBackend::new();

    for day in 0..30 {
        let t = add_secs( &t0(), day as f64 * 86400.0 * 12.3);

        let (a, b) = (satkit.sun(&t).unwrap(), analytic.sun(&t).unwrap());
        let (angle, ratio) = (angle_between( &a, &b), a.norm() / b.norm());
        println!("{t} sun:  {angle:.4}° {ratio:.5}");
        assert!( angle < 0.5);
        assert!( (ratio - 1.0).abs() < 0.01);

        let (a, b) = (satkit.moon(&t).unwrap(), analytic.moon(&t).unwrap());
        let (angle, ratio) = (angle_between( &a, &b), a.norm() / b.norm());
        println!("{t} moon: {angle:.4}° {ratio:.5}");
        assert!( angle < 0.5);
        assert!( (ratio - 1.0).abs() < 0.01);
    }
}

#[test]
fn test_backends_agree_on_comet () {
    let satkit = SatkitBackend::new();
    let analytic = AnalyticBackend::new();
    let t = Utc.with_ymd_and_hms( 2024, 6, 21, 18, 0, 0).unwrap();

    // satkit reads the orbit record as is, the analytic backend only gets the converted free-text record
    let record = olbers();
    let text = celestial_orbital::convert::convert( &record, CatalogFormat::CometOrbitRecord, CatalogFormat::CometFreeText).unwrap();
    println!("{text}");

    let a = satkit.small_body( &record, satkit.native_format(true), &t).unwrap();
    let b = analytic.small_body( &text, analytic.native_format(true), &t).unwrap();
    println!("satkit: {:.4} AU from sun, {:.4} AU from earth", a.sun_distance, a.earth_distance);
    println!("analytic: {:.4} AU from sun, {:.4} AU from earth", b.sun_distance, b.earth_distance);

    assert!( (a.sun_distance / b.sun_distance - 1.0).abs() < 0.01);
    assert!( (a.earth_distance / b.earth_distance - 1.0).abs() < 0.01);
    assert!( angle_between( &a.geocentric, &b.geocentric) < 0.5);
}
