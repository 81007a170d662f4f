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
use celestial_common::{angle::{normalize_360, normalize_180, delta_degrees}, datetime::*};

/// run with "cargo test -p celestial_common -- --nocapture"

#[test]
fn test_julian_date () {
    // Meeus, Astronomical Algorithms, example 7.a
    let jd = julian_date_from_calendar( 1957, 10, 4.81);
    println!("1957-10-04.81 -> {jd}");
    assert!( (jd - 2436116.31).abs() < 1e-6);

    let dt = Utc.with_ymd_and_hms( 2000, 1, 1, 12, 0, 0).unwrap();
    assert!( (julian_date(&dt) - J2000).abs() < 1e-9);

    // calendar based and unix based computation have to agree
    let dt = Utc.with_ymd_and_hms( 2019, 7, 4, 21, 30, 15).unwrap();
    let jd_unix = to_unix_secs(&dt) / SECS_PER_DAY + JD_UNIX_EPOCH;
    assert!( (julian_date(&dt) - jd_unix).abs() < 1e-8);
}

#[test]
fn test_julian_date_roundtrip () {
    let dt = Utc.with_ymd_and_hms( 2024, 2, 29, 3, 4, 5).unwrap();
    let dt1 = from_julian_date( julian_date(&dt));
    println!("{dt} -> {dt1}");
    assert!( secs_between(&dt, &dt1).abs() < 0.002);
}

#[test]
fn test_sidereal_time () {
    // Meeus example 12.a: 1987-04-10 0h UT -> GMST 13h10m46.3668s
    let jd = julian_date_from_calendar( 1987, 4, 10.0);
    let gmst = gmst_degrees(jd);
    let expected = (13.0 + 10.0/60.0 + 46.3668/3600.0) * 15.0;
    println!("gmst = {gmst}, expected {expected}");
    assert!( (gmst - expected).abs() < 1e-4);

    let lst = local_sidereal_degrees( jd, -77.0);
    assert!( (lst - normalize_360(expected - 77.0)).abs() < 1e-4);
}

#[test]
fn test_angles () {
    assert_eq!( normalize_360(-90.0), 270.0);
    assert_eq!( normalize_180(270.0), -90.0);
    assert_eq!( delta_degrees(10.0, 350.0), 20.0);
    assert_eq!( delta_degrees(350.0, 10.0), -20.0);
}

#[test]
fn test_parse_datetime () {
    let dt = parse_datetime("2019-07-04T21:00:00Z").unwrap();
    assert_eq!( dt, Utc.with_ymd_and_hms( 2019, 7, 4, 21, 0, 0).unwrap());
    assert!( parse_datetime("not a date").is_none());
}
