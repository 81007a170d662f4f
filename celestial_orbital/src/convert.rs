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

use tracing::debug;
use celestial_common::{
    angle::normalize_360,
    datetime::{calendar_from_julian_date, julian_date_from_calendar},
};
use crate::{
    columns::LineBuilder,
    decimal::FixedDecimal,
    designation::{comet_designation_field, minor_planet_designation, pack_minor_planet_designation},
    errors::{CelestialError, Result, op_failed},
    kepler::mean_daily_motion,
    orbital_element::{
        comet_cols, minor_planet_cols, parse_record, CatalogFormat, CometOrbitRecord, FreeTextDate, FreeTextOrbit,
        FreeTextRecord, MagnitudeModel, MinorPlanetOrbitRecord, ParsedRecord, Rejection
    },
    packed_date::pack_date,
};

/// eccentricities below this are written as elliptical free-text orbits
pub const ELLIPTICAL_LIMIT: f64 = 0.99;

const EQUINOX: FixedDecimal = FixedDecimal { value: 2000.0, places: 0 };

// comet orbit record precision
const COMET_DAY_PLACES: u8 = 4;
const COMET_DISTANCE_PLACES: u8 = 6;
const COMET_ECCENTRICITY_PLACES: u8 = 6;
const COMET_ANGLE_PLACES: u8 = 4;
const COMET_MAGNITUDE_PLACES: u8 = 1;

// minor planet orbit record precision
const MP_MAGNITUDE_PLACES: u8 = 2;
const MP_ANGLE_PLACES: u8 = 5;
const MP_ECCENTRICITY_PLACES: u8 = 7;
const MP_DAILY_MOTION_PLACES: u8 = 8;
const MP_SEMI_MAJOR_AXIS_PLACES: u8 = 7;

const FREE_TEXT_MEAN_DISTANCE_PLACES: u8 = 8;

/// convert a catalog record line between formats. Only conversions within the same body family are supported,
/// anything else is a caller error
pub fn convert (record: &str, source: CatalogFormat, target: CatalogFormat)->Result<String> {
    use CatalogFormat::*;

    let parsed = parse_record( record, source)?;
    match (source, target) {
        (s, t) if s == t => Ok( record.to_string()),
        (CometOrbitRecord, CometFreeText) => comet_to_free_text( &parsed),
        (CometFreeText, CometOrbitRecord) => free_text_to_comet( &parsed),
        (MinorPlanetOrbitRecord, MinorPlanetFreeText) => minor_planet_to_free_text( &parsed),
        (MinorPlanetFreeText, MinorPlanetOrbitRecord) => free_text_to_minor_planet( &parsed),
        _ => Err( CelestialError::UnsupportedConversion( source, target))
    }
}

/// the free-text orbit shape for a given eccentricity
pub fn orbit_shape (eccentricity: f64)->char {
    if eccentricity < ELLIPTICAL_LIMIT {
        'e'
    } else if eccentricity > 1.0 {
        'h'
    } else {
        'p'
    }
}

/* #region orbit records -> free text ******************************************************************************/

fn free_text_date (year: i32, month: u32, day: FixedDecimal)->FreeTextDate {
    FreeTextDate { month, day, year }
}

fn comet_to_free_text (parsed: &ParsedRecord)->Result<String> {
    let ParsedRecord::CometOrbit(r) = parsed else { return Err( op_failed!("not a comet orbit record")) };

    let perihelion_date = free_text_date( r.perihelion_year, r.perihelion_month, r.perihelion_day);
    let e = r.eccentricity.value;

    let orbit = match orbit_shape(e) {
        'e' => {
            let a = r.perihelion_distance.value / (1.0 - e);
            FreeTextOrbit::Elliptical {
                inclination: r.inclination,
                node: r.node,
                arg_perihelion: r.arg_perihelion,
                mean_distance: FixedDecimal::new( a, FREE_TEXT_MEAN_DISTANCE_PLACES).rounded( FREE_TEXT_MEAN_DISTANCE_PLACES),
                daily_motion: None,
                eccentricity: r.eccentricity,
                mean_anomaly: FixedDecimal::new( 0.0, 0),
                epoch: perihelion_date
            }
        }
        'h' => FreeTextOrbit::Hyperbolic {
            perihelion_date,
            inclination: r.inclination,
            node: r.node,
            arg_perihelion: r.arg_perihelion,
            eccentricity: r.eccentricity,
            perihelion_distance: r.perihelion_distance
        },
        _ => FreeTextOrbit::Parabolic {
            perihelion_date,
            inclination: r.inclination,
            arg_perihelion: r.arg_perihelion,
            perihelion_distance: r.perihelion_distance,
            node: r.node
        }
    };

    let rec = FreeTextRecord {
        name: r.name.clone(),
        designation: r.designation.clone(),
        orbit,
        equinox: EQUINOX,
        magnitude: MagnitudeModel::Comet { g: r.abs_mag, k: Some(r.slope) }
    };
    Ok( rec.to_line())
}

/// "(1) Ceres" -> "1 Ceres"
pub fn readable_to_free_text_name (name: &str)->String {
    name.replace( ['(', ')'], "").split_whitespace().collect::<Vec<&str>>().join(" ")
}

/// "1 Ceres" -> "(1) Ceres", provisional designations stay as they are
pub fn free_text_to_readable_name (name: &str)->String {
    let name = readable_to_free_text_name( name);
    if minor_planet_designation( &name).is_some_and( |d| d.contains(' ')) {
        return name
    }

    match name.split_once(' ') {
        Some((num, rest)) if num.chars().all( |c| c.is_ascii_digit()) => format!("({num}) {rest}"),
        None if name.chars().all( |c| c.is_ascii_digit()) => format!("({name})"),
        _ => name
    }
}

fn minor_planet_to_free_text (parsed: &ParsedRecord)->Result<String> {
    let ParsedRecord::MinorPlanetOrbit(r) = parsed else { return Err( op_failed!("not a minor planet orbit record")) };

    let (year, month, day) = r.epoch;
    let orbit = FreeTextOrbit::Elliptical {
        inclination: r.inclination,
        node: r.node,
        arg_perihelion: r.arg_perihelion,
        mean_distance: r.semi_major_axis,
        daily_motion: r.daily_motion,
        eccentricity: r.eccentricity,
        mean_anomaly: r.mean_anomaly,
        epoch: free_text_date( year, month, FixedDecimal::new( day as f64, 1))
    };

    let rec = FreeTextRecord {
        name: readable_to_free_text_name( &r.name),
        designation: r.designation.clone(),
        orbit,
        equinox: EQUINOX,
        magnitude: MagnitudeModel::Asteroid { h: r.abs_mag, g: Some(r.slope) }
    };
    Ok( rec.to_line())
}

/* #endregion orbit records -> free text */

/* #region free text -> orbit records ******************************************************************************/

/// split a Julian date into calendar components with the day fraction rounded to `places`
fn calendar_day (jd: f64, places: u8)->(i32, u32, FixedDecimal) {
    let (y, m, d) = calendar_from_julian_date( jd);
    (y, m, FixedDecimal::new( d, places).rounded( places))
}

fn free_text_to_comet (parsed: &ParsedRecord)->Result<String> {
    use comet_cols::*;
    let ParsedRecord::FreeText(r) = parsed else { return Err( op_failed!("not a free-text record")) };

    let (q, e, incl, node, peri, perihelion, epoch): (f64, f64, FixedDecimal, FixedDecimal, FixedDecimal, (i32,u32,FixedDecimal), Option<(i32,u32,u32)>) = match &r.orbit {
        FreeTextOrbit::Elliptical { inclination, node, arg_perihelion, mean_distance, daily_motion, eccentricity, mean_anomaly, epoch } => {
            let e = eccentricity.value;
            let q = mean_distance.value * (1.0 - e);
            let perihelion = if mean_anomaly.value == 0.0 {
                (epoch.year, epoch.month, epoch.day)
            } else {
                let n = daily_motion.map( |n| n.value).filter( |n| *n > 0.0).unwrap_or_else( || mean_daily_motion( mean_distance.value));
                let mut m = normalize_360( mean_anomaly.value);
                if m > 180.0 { m -= 360.0 }
                calendar_day( epoch.julian_date() - m / n, COMET_DAY_PLACES)
            };
            let epoch_day = epoch.day.value.floor() as u32;
            (q, e, *inclination, *node, *arg_perihelion, perihelion, Some((epoch.year, epoch.month, epoch_day)))
        }
        FreeTextOrbit::Hyperbolic { perihelion_date, inclination, node, arg_perihelion, eccentricity, perihelion_distance } => {
            let p = (perihelion_date.year, perihelion_date.month, perihelion_date.day);
            (perihelion_distance.value, eccentricity.value, *inclination, *node, *arg_perihelion, p, None)
        }
        FreeTextOrbit::Parabolic { perihelion_date, inclination, arg_perihelion, perihelion_distance, node } => {
            let p = (perihelion_date.year, perihelion_date.month, perihelion_date.day);
            (perihelion_distance.value, 1.0, *inclination, *node, *arg_perihelion, p, None)
        }
    };

    let designation_field = comet_designation_field( &r.designation)
        .ok_or_else( || CelestialError::Rejected( Rejection::UnknownDesignation( r.designation.clone())))?;

    let mut lb = LineBuilder::new( LINE_LENGTH);
    lb.put_left( DESIGNATION, &designation_field);
    lb.put_right( PERIHELION_YEAR, &format!("{:4}", perihelion.0));
    lb.put_right( PERIHELION_MONTH, &format!("{:02}", perihelion.1));
    lb.put_right( PERIHELION_DAY, &format!("{:07.prec$}", perihelion.2.value, prec = COMET_DAY_PLACES as usize));
    lb.put_right( PERIHELION_DISTANCE, &FixedDecimal::new( q, COMET_DISTANCE_PLACES).format( PERIHELION_DISTANCE.width()));
    lb.put_right( ECCENTRICITY, &FixedDecimal::new( e, COMET_ECCENTRICITY_PLACES).format( ECCENTRICITY.width()));
    lb.put_right( ARG_PERIHELION, &peri.format_with( ARG_PERIHELION.width(), COMET_ANGLE_PLACES));
    lb.put_right( NODE, &node.format_with( NODE.width(), COMET_ANGLE_PLACES));
    lb.put_right( INCLINATION, &incl.format_with( INCLINATION.width(), COMET_ANGLE_PLACES));
    if let Some((y,m,d)) = epoch {
        lb.put_right( EPOCH_YEAR, &format!("{y:4}"));
        lb.put_right( EPOCH_MONTH, &format!("{m:02}"));
        lb.put_right( EPOCH_DAY, &format!("{d:02}"));
    }
    let mag = r.magnitude;
    let slope = mag.slope().ok_or( CelestialError::Rejected( Rejection::BlankSlope))?;
    lb.put_right( ABS_MAG, &mag.absolute_magnitude().format_with( ABS_MAG.width(), COMET_MAGNITUDE_PLACES));
    lb.put_right( SLOPE, &slope.format_with( SLOPE.width(), COMET_MAGNITUDE_PLACES));
    lb.put_left( NAME, &r.name);

    Ok( lb.to_line())
}

fn free_text_to_minor_planet (parsed: &ParsedRecord)->Result<String> {
    use minor_planet_cols::*;
    let ParsedRecord::FreeText(r) = parsed else { return Err( op_failed!("not a free-text record")) };

    let FreeTextOrbit::Elliptical { inclination, node, arg_perihelion, mean_distance, daily_motion, eccentricity, mean_anomaly, epoch } = &r.orbit else {
        return Err( op_failed!("minor planet orbit records only support elliptical orbits: {}", r.name))
    };

    let packed_designation = pack_minor_planet_designation( &r.designation)
        .ok_or_else( || CelestialError::Rejected( Rejection::UnknownDesignation( r.designation.clone())))?;

    let n = daily_motion.map( |n| n.value).filter( |n| *n > 0.0).unwrap_or_else( || mean_daily_motion( mean_distance.value));

    // orbit records only carry whole day epochs, move fractional epochs back to 0h and adjust the mean anomaly
    let day = epoch.day.value;
    let whole_day = day.floor();
    let mean_anomaly = if day > whole_day {
        normalize_360( mean_anomaly.value - n * (day - whole_day))
    } else {
        mean_anomaly.value
    };
    let packed_epoch = pack_date( epoch.year, epoch.month, whole_day as u32)
        .ok_or_else( || op_failed!("epoch outside of packed date range: {}", epoch))?;

    let mag = r.magnitude;
    let slope = mag.slope().ok_or( CelestialError::Rejected( Rejection::BlankSlope))?;
    let mut lb = LineBuilder::new( LINE_LENGTH);
    lb.put_left( DESIGNATION, &packed_designation);
    lb.put_right( ABS_MAG, &mag.absolute_magnitude().format_with( ABS_MAG.width(), MP_MAGNITUDE_PLACES));
    lb.put_right( SLOPE, &slope.format_with( SLOPE.width(), MP_MAGNITUDE_PLACES));
    lb.put_left( EPOCH, &packed_epoch);
    lb.put_right( MEAN_ANOMALY, &FixedDecimal::new( mean_anomaly, MP_ANGLE_PLACES).format( MEAN_ANOMALY.width()));
    lb.put_right( ARG_PERIHELION, &arg_perihelion.format_with( ARG_PERIHELION.width(), MP_ANGLE_PLACES));
    lb.put_right( NODE, &node.format_with( NODE.width(), MP_ANGLE_PLACES));
    lb.put_right( INCLINATION, &inclination.format_with( INCLINATION.width(), MP_ANGLE_PLACES));
    lb.put_right( ECCENTRICITY, &eccentricity.format_with( ECCENTRICITY.width(), MP_ECCENTRICITY_PLACES));
    lb.put_right( DAILY_MOTION, &FixedDecimal::new( n, MP_DAILY_MOTION_PLACES).format( DAILY_MOTION.width()));
    lb.put_right( SEMI_MAJOR_AXIS, &mean_distance.format_with( SEMI_MAJOR_AXIS.width(), MP_SEMI_MAJOR_AXIS_PLACES));
    lb.put_left( NAME, &free_text_to_readable_name( &r.name));

    Ok( lb.to_line())
}

/* #endregion free text -> orbit records */
