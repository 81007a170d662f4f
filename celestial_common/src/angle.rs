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

use crate::TWO_PI;

#[inline]
pub fn normalize_90 (d:f64) -> f64 {
    let x = d % 360.0;

    if x < -90.0 { -180.0 - x }
    else if x > 90.0 { 180.0 - x }
    else { x }
}

#[inline]
pub fn normalize_180 (d: f64) -> f64 {
    let x = d % 360.0;

    if x < -180.0 { 360.0 + x }
    else if x > 180.0 { x - 360.0 }
    else { x }
}

#[inline]
pub fn normalize_360 (d: f64) -> f64 {
    let x = d % 360.0;
    if x < 0.0 { 360.0 + x } else { x }
}

/// normalize radians into [0,2π)
#[inline]
pub fn normalize_two_pi (r: f64) -> f64 {
    let x = r % TWO_PI;
    if x < 0.0 { TWO_PI + x } else { x }
}

/// signed smallest difference a - b in degrees, in the range (-180,180]
#[inline]
pub fn delta_degrees (a: f64, b: f64) -> f64 {
    let d = normalize_360(a - b);
    if d > 180.0 { d - 360.0 } else { d }
}

/// hours/minutes/seconds of right ascension into degrees
pub fn hms_to_deg (h: f64, m: f64, s: f64) -> f64 {
    (h + m/60.0 + s/3600.0) * 15.0
}

/// degrees/minutes/seconds into degrees. The sign is taken from the degree component
pub fn dms_to_deg (d: f64, m: f64, s: f64) -> f64 {
    let sign = if d < 0.0 { -1.0 } else { 1.0 };
    sign * (d.abs() + m/60.0 + s/3600.0)
}
