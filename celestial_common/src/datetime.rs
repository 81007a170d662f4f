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

use chrono::{DateTime, Datelike, TimeDelta, Timelike, Utc};
use std::time::Duration;
use crate::angle::normalize_360;

/// Julian date of the J2000.0 epoch (2000-01-01T12:00:00)
pub const J2000: f64 = 2451545.0;

/// Julian date of the unix epoch
pub const JD_UNIX_EPOCH: f64 = 2440587.5;

pub const SECS_PER_DAY: f64 = 86400.0;
pub const DAYS_PER_CENTURY: f64 = 36525.0;

#[inline] pub fn secs (n: u64)->Duration { Duration::from_secs(n) }
#[inline] pub fn minutes (n: u64)->Duration { Duration::from_secs(n * 60) }
#[inline] pub fn hours (n: u64)->Duration { Duration::from_secs(n * 3600) }
#[inline] pub fn days (n: u64)->Duration { Duration::from_secs(n * 86400) }

/// this should be used wherever we might have to use a sim clock instead of wall clock
#[inline]
pub fn utc_now()->DateTime<Utc> {
    Utc::now()
}

/// fractional seconds since the unix epoch
#[inline]
pub fn to_unix_secs (dt: &DateTime<Utc>) -> f64 {
    dt.timestamp_millis() as f64 / 1000.0
}

pub fn from_unix_secs (secs: f64) -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp_millis( (secs * 1000.0).round() as i64).unwrap_or_default()
}

/// add fractional seconds to a DateTime (millisecond resolution)
#[inline]
pub fn add_secs (dt: &DateTime<Utc>, secs: f64) -> DateTime<Utc> {
    *dt + TimeDelta::milliseconds( (secs * 1000.0).round() as i64)
}

/// fractional seconds between two DateTimes (positive if `later` is after `earlier`)
#[inline]
pub fn secs_between (earlier: &DateTime<Utc>, later: &DateTime<Utc>) -> f64 {
    (*later - *earlier).num_milliseconds() as f64 / 1000.0
}

/// truncate sub-second part
pub fn truncate_to_secs (dt: &DateTime<Utc>) -> DateTime<Utc> {
    dt.with_nanosecond(0).unwrap_or(*dt)
}

/// Julian date from Gregorian calendar components (day can carry the day fraction)
pub fn julian_date_from_calendar (year: i32, month: u32, day: f64) -> f64 {
    let (y, m) = if month <= 2 { (year - 1, month + 12) } else { (year, month) };
    let y = y as f64;
    let m = m as f64;

    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();

    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day + b - 1524.5
}

/// Julian date of a UTC DateTime, computed from its calendar components
pub fn julian_date (dt: &DateTime<Utc>) -> f64 {
    let day_fraction = (dt.num_seconds_from_midnight() as f64 + dt.nanosecond() as f64 * 1e-9) / SECS_PER_DAY;
    julian_date_from_calendar( dt.year(), dt.month(), dt.day() as f64 + day_fraction)
}

/// Gregorian calendar (year, month, day with fraction) of a Julian date (Meeus ch.7)
pub fn calendar_from_julian_date (jd: f64) -> (i32, u32, f64) {
    let jd = jd + 0.5;
    let z = jd.floor();
    let f = jd - z;

    let a = if z < 2299161.0 {
        z
    } else {
        let alpha = ((z - 1867216.25) / 36524.25).floor();
        z + 1.0 + alpha - (alpha / 4.0).floor()
    };
    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };

    (year as i32, month as u32, day)
}

pub fn from_julian_date (jd: f64) -> DateTime<Utc> {
    from_unix_secs( (jd - JD_UNIX_EPOCH) * SECS_PER_DAY)
}

/// Julian centuries since J2000
#[inline]
pub fn julian_centuries (jd: f64) -> f64 {
    (jd - J2000) / DAYS_PER_CENTURY
}

/// Greenwich mean sidereal time in degrees [0,360)
pub fn gmst_degrees (jd: f64) -> f64 {
    let t = julian_centuries(jd);
    let theta = 280.46061837 + 360.98564736629 * (jd - J2000) + 0.000387933 * t * t - t * t * t / 38710000.0;
    normalize_360(theta)
}

/// local mean sidereal time in degrees [0,360) for an east-positive longitude
#[inline]
pub fn local_sidereal_degrees (jd: f64, longitude_deg: f64) -> f64 {
    normalize_360( gmst_degrees(jd) + longitude_deg)
}

/// parse RFC 3339 / ISO 8601 datetime specs such as "2019-07-04T21:00:00Z"
pub fn parse_datetime (s: &str)->Option<DateTime<Utc>> {
    match DateTime::parse_from_str(s, "%+") {
        Ok(dt) => Some(dt.to_utc()),
        Err(_) => None
    }
}

pub fn parse_optional_datetime_or<F> (spec: &Option<String>, f: F)->DateTime<Utc> where F: FnOnce()->DateTime<Utc> {
    if let Some(date) = spec.as_ref().and_then(|s| parse_datetime(s)) {
        return date
    }
    f()
}
