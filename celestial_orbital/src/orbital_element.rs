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

use std::{fmt, str::FromStr};
use serde::{Deserialize,Serialize};
use tracing::{warn,debug};
use celestial_common::datetime::julian_date_from_calendar;
use crate::{
    columns::Columns,
    decimal::FixedDecimal,
    designation::{comet_designation, minor_planet_designation, normalize_name, strip_parentheses, unpack_minor_planet_designation},
    errors::{CelestialError, Result},
    kepler::KeplerOrbit,
    packed_date::unpack_date,
};

/// the catalog record families we can read and write
#[derive(Debug,Clone,Copy,PartialEq,Eq,Hash,Serialize,Deserialize)]
pub enum CatalogFormat {
    /// MPC comet orbit records (CometEls.txt)
    CometOrbitRecord,
    /// MPC minor planet orbit records (MPCORB.DAT)
    MinorPlanetOrbitRecord,
    /// comma delimited free-text comet records (XEphem .edb)
    CometFreeText,
    /// comma delimited free-text minor planet records (XEphem .edb)
    MinorPlanetFreeText,
}

impl CatalogFormat {
    pub fn is_comet (&self)->bool {
        matches!( self, CatalogFormat::CometOrbitRecord | CatalogFormat::CometFreeText)
    }

    pub fn is_free_text (&self)->bool {
        matches!( self, CatalogFormat::CometFreeText | CatalogFormat::MinorPlanetFreeText)
    }

    pub fn label (&self)->&'static str {
        match self {
            CatalogFormat::CometOrbitRecord => "comet-orbit",
            CatalogFormat::MinorPlanetOrbitRecord => "minor-planet-orbit",
            CatalogFormat::CometFreeText => "comet-text",
            CatalogFormat::MinorPlanetFreeText => "minor-planet-text",
        }
    }
}

impl fmt::Display for CatalogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for CatalogFormat {
    type Err = CelestialError;
    fn from_str (s: &str)->Result<Self> {
        match s.trim() {
            "comet-orbit" => Ok(CatalogFormat::CometOrbitRecord),
            "minor-planet-orbit" => Ok(CatalogFormat::MinorPlanetOrbitRecord),
            "comet-text" => Ok(CatalogFormat::CometFreeText),
            "minor-planet-text" => Ok(CatalogFormat::MinorPlanetFreeText),
            other => Err( CelestialError::UnsupportedFormat( other.to_string()))
        }
    }
}

/// why a catalog record was not accepted
#[derive(Debug,Clone,PartialEq,Eq)]
pub enum Rejection {
    CorruptionMarker,
    BlankName,
    BlankAbsoluteMagnitude,
    BlankSlope,
    BlankSemiMajorAxis,
    UnknownDesignation(String),
    IncompleteMagnitudePair,
    MalformedField(&'static str),
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::CorruptionMarker => write!(f, "corruption marker present"),
            Rejection::BlankName => write!(f, "blank name"),
            Rejection::BlankAbsoluteMagnitude => write!(f, "blank absolute magnitude"),
            Rejection::BlankSlope => write!(f, "blank slope parameter"),
            Rejection::BlankSemiMajorAxis => write!(f, "blank semi-major axis"),
            Rejection::UnknownDesignation(name) => write!(f, "unknown designation '{name}'"),
            Rejection::IncompleteMagnitudePair => write!(f, "incomplete magnitude pair"),
            Rejection::MalformedField(field) => write!(f, "malformed {field}"),
        }
    }
}

pub const CORRUPTION_MARKER: &str = "***";

/// comet orbit record columns
pub mod comet_cols {
    use crate::columns::Columns;

    pub const DESIGNATION: Columns = Columns::new( 1, 12);
    pub const NUMBER: Columns = Columns::new( 1, 4);
    pub const ORBIT_TYPE: Columns = Columns::new( 5, 5);
    pub const PROVISIONAL: Columns = Columns::new( 6, 12);
    pub const PERIHELION_YEAR: Columns = Columns::new( 15, 18);
    pub const PERIHELION_MONTH: Columns = Columns::new( 20, 21);
    pub const PERIHELION_DAY: Columns = Columns::new( 23, 29);
    pub const PERIHELION_DISTANCE: Columns = Columns::new( 31, 39);
    pub const ECCENTRICITY: Columns = Columns::new( 42, 49);
    pub const ARG_PERIHELION: Columns = Columns::new( 52, 59);
    pub const NODE: Columns = Columns::new( 62, 69);
    pub const INCLINATION: Columns = Columns::new( 72, 79);
    pub const EPOCH_YEAR: Columns = Columns::new( 82, 85);
    pub const EPOCH_MONTH: Columns = Columns::new( 86, 87);
    pub const EPOCH_DAY: Columns = Columns::new( 88, 89);
    pub const ABS_MAG: Columns = Columns::new( 92, 95);
    pub const SLOPE: Columns = Columns::new( 97, 100);
    pub const NAME: Columns = Columns::new( 103, 158);
    pub const REFERENCE: Columns = Columns::new( 160, 168);

    pub const LINE_LENGTH: usize = 168;
}

/// minor planet orbit record columns
pub mod minor_planet_cols {
    use crate::columns::Columns;

    pub const DESIGNATION: Columns = Columns::new( 1, 7);
    pub const ABS_MAG: Columns = Columns::new( 9, 13);
    pub const SLOPE: Columns = Columns::new( 15, 19);
    pub const EPOCH: Columns = Columns::new( 21, 25);
    pub const MEAN_ANOMALY: Columns = Columns::new( 27, 35);
    pub const ARG_PERIHELION: Columns = Columns::new( 38, 46);
    pub const NODE: Columns = Columns::new( 49, 57);
    pub const INCLINATION: Columns = Columns::new( 60, 68);
    pub const ECCENTRICITY: Columns = Columns::new( 71, 79);
    pub const DAILY_MOTION: Columns = Columns::new( 81, 91);
    pub const SEMI_MAJOR_AXIS: Columns = Columns::new( 93, 103);
    pub const OBSERVATIONS: Columns = Columns::new( 118, 122);
    pub const NAME: Columns = Columns::new( 167, 194);

    pub const LINE_LENGTH: usize = 202;
}

/* #region typed records ***********************************************************************************/

#[derive(Debug,Clone,PartialEq)]
pub struct CometOrbitRecord {
    pub designation: String,
    pub perihelion_year: i32,
    pub perihelion_month: u32,
    pub perihelion_day: FixedDecimal,
    pub perihelion_distance: FixedDecimal,
    pub eccentricity: FixedDecimal,
    pub arg_perihelion: FixedDecimal,
    pub node: FixedDecimal,
    pub inclination: FixedDecimal,
    pub epoch: Option<(i32,u32,u32)>,
    pub abs_mag: FixedDecimal,
    pub slope: FixedDecimal,
    pub name: String,
    pub reference: String,
}

impl CometOrbitRecord {
    pub fn perihelion_jd (&self)->f64 {
        julian_date_from_calendar( self.perihelion_year, self.perihelion_month, self.perihelion_day.value)
    }
}

#[derive(Debug,Clone,PartialEq)]
pub struct MinorPlanetOrbitRecord {
    pub designation: String,
    pub packed_designation: String,
    pub abs_mag: FixedDecimal,
    pub slope: FixedDecimal,
    pub epoch: (i32,u32,u32),
    pub mean_anomaly: FixedDecimal,
    pub arg_perihelion: FixedDecimal,
    pub node: FixedDecimal,
    pub inclination: FixedDecimal,
    pub eccentricity: FixedDecimal,
    pub daily_motion: Option<FixedDecimal>,
    pub semi_major_axis: FixedDecimal,
    pub observations: Option<u32>,
    pub name: String,
}

impl MinorPlanetOrbitRecord {
    pub fn epoch_jd (&self)->f64 {
        let (y,m,d) = self.epoch;
        julian_date_from_calendar( y, m, d as f64)
    }
}

/// free-text dates are "MM/DD.DDD/YYYY", optionally followed by a "|..." validity range
#[derive(Debug,Clone,Copy,PartialEq)]
pub struct FreeTextDate {
    pub month: u32,
    pub day: FixedDecimal,
    pub year: i32,
}

impl FreeTextDate {
    pub fn parse (s: &str)->Option<Self> {
        let s = s.split('|').next()?.trim();
        let mut parts = s.split('/');
        let month: u32 = parts.next()?.trim().parse().ok()?;
        let day = FixedDecimal::parse( parts.next()?)?;
        let year: i32 = parts.next()?.trim().parse().ok()?;
        if parts.next().is_some() { return None }

        Some( FreeTextDate { month, day, year } )
    }

    pub fn julian_date (&self)->f64 {
        julian_date_from_calendar( self.year, self.month, self.day.value)
    }
}

impl fmt::Display for FreeTextDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.month, self.day, self.year)
    }
}

/// the free-text orbit shape variants, each with its own field order
#[derive(Debug,Clone,PartialEq)]
pub enum FreeTextOrbit {
    Elliptical {
        inclination: FixedDecimal,
        node: FixedDecimal,
        arg_perihelion: FixedDecimal,
        mean_distance: FixedDecimal,
        daily_motion: Option<FixedDecimal>,
        eccentricity: FixedDecimal,
        mean_anomaly: FixedDecimal,
        epoch: FreeTextDate,
    },
    Hyperbolic {
        perihelion_date: FreeTextDate,
        inclination: FixedDecimal,
        node: FixedDecimal,
        arg_perihelion: FixedDecimal,
        eccentricity: FixedDecimal,
        perihelion_distance: FixedDecimal,
    },
    Parabolic {
        perihelion_date: FreeTextDate,
        inclination: FixedDecimal,
        arg_perihelion: FixedDecimal,
        perihelion_distance: FixedDecimal,
        node: FixedDecimal,
    },
}

impl FreeTextOrbit {
    pub fn shape (&self)->char {
        match self {
            FreeTextOrbit::Elliptical{..} => 'e',
            FreeTextOrbit::Hyperbolic{..} => 'h',
            FreeTextOrbit::Parabolic{..} => 'p',
        }
    }

    /// number of comma separated fields including name, shape and both magnitude components
    fn field_count (shape: char)->Option<usize> {
        match shape {
            'e' => Some(13),
            'h' => Some(11),
            'p' => Some(10),
            _ => None
        }
    }
}

/// the photometric parameters, which come as a (absolute magnitude, slope) pair for both models.
/// Only free-text records of non-elliptical orbits can lack the slope
#[derive(Debug,Clone,Copy,PartialEq)]
pub enum MagnitudeModel {
    Comet { g: FixedDecimal, k: Option<FixedDecimal> },
    Asteroid { h: FixedDecimal, g: Option<FixedDecimal> },
}

impl MagnitudeModel {
    pub fn absolute_magnitude (&self)->FixedDecimal {
        match self {
            MagnitudeModel::Comet{g,..} => *g,
            MagnitudeModel::Asteroid{h,..} => *h,
        }
    }

    pub fn slope (&self)->Option<FixedDecimal> {
        match self {
            MagnitudeModel::Comet{k,..} => *k,
            MagnitudeModel::Asteroid{g,..} => *g,
        }
    }

    /// the free-text field prefix of the absolute magnitude
    pub fn prefix (&self)->char {
        match self {
            MagnitudeModel::Comet{..} => 'g',
            MagnitudeModel::Asteroid{..} => 'H',
        }
    }
}

#[derive(Debug,Clone,PartialEq)]
pub struct FreeTextRecord {
    pub name: String,
    pub designation: String,
    pub orbit: FreeTextOrbit,
    pub equinox: FixedDecimal,
    pub magnitude: MagnitudeModel,
}

impl FreeTextRecord {
    pub fn to_line (&self)->String {
        let mut fields: Vec<String> = vec![ self.name.clone(), self.orbit.shape().to_string() ];

        match &self.orbit {
            FreeTextOrbit::Elliptical { inclination, node, arg_perihelion, mean_distance, daily_motion, eccentricity, mean_anomaly, epoch } => {
                fields.push( inclination.to_string());
                fields.push( node.to_string());
                fields.push( arg_perihelion.to_string());
                fields.push( mean_distance.to_string());
                fields.push( daily_motion.map( |n| n.to_string()).unwrap_or_default());
                fields.push( eccentricity.to_string());
                fields.push( mean_anomaly.to_string());
                fields.push( epoch.to_string());
            }
            FreeTextOrbit::Hyperbolic { perihelion_date, inclination, node, arg_perihelion, eccentricity, perihelion_distance } => {
                fields.push( perihelion_date.to_string());
                fields.push( inclination.to_string());
                fields.push( node.to_string());
                fields.push( arg_perihelion.to_string());
                fields.push( eccentricity.to_string());
                fields.push( perihelion_distance.to_string());
            }
            FreeTextOrbit::Parabolic { perihelion_date, inclination, arg_perihelion, perihelion_distance, node } => {
                fields.push( perihelion_date.to_string());
                fields.push( inclination.to_string());
                fields.push( arg_perihelion.to_string());
                fields.push( perihelion_distance.to_string());
                fields.push( node.to_string());
            }
        }

        fields.push( self.equinox.to_string());
        fields.push( format!("{}{:>5}", self.magnitude.prefix(), self.magnitude.absolute_magnitude().to_string()));
        fields.push( self.magnitude.slope().map( |k| k.to_string()).unwrap_or_default());

        fields.join(",")
    }
}

/// a validated record of any of the supported families
#[derive(Debug,Clone,PartialEq)]
pub enum ParsedRecord {
    CometOrbit(CometOrbitRecord),
    MinorPlanetOrbit(MinorPlanetOrbitRecord),
    FreeText(FreeTextRecord),
}

impl ParsedRecord {
    pub fn designation (&self)->&str {
        match self {
            ParsedRecord::CometOrbit(r) => &r.designation,
            ParsedRecord::MinorPlanetOrbit(r) => &r.designation,
            ParsedRecord::FreeText(r) => &r.designation,
        }
    }

    pub fn magnitude_model (&self)->MagnitudeModel {
        match self {
            ParsedRecord::CometOrbit(r) => MagnitudeModel::Comet { g: r.abs_mag, k: Some(r.slope) },
            ParsedRecord::MinorPlanetOrbit(r) => MagnitudeModel::Asteroid { h: r.abs_mag, g: Some(r.slope) },
            ParsedRecord::FreeText(r) => r.magnitude,
        }
    }

    pub fn kepler_orbit (&self)->KeplerOrbit {
        match self {
            ParsedRecord::CometOrbit(r) => KeplerOrbit {
                perihelion_distance: r.perihelion_distance.value,
                eccentricity: r.eccentricity.value,
                inclination: r.inclination.value,
                node: r.node.value,
                arg_perihelion: r.arg_perihelion.value,
                perihelion_jd: r.perihelion_jd()
            },
            ParsedRecord::MinorPlanetOrbit(r) => KeplerOrbit::from_mean_anomaly(
                r.semi_major_axis.value, r.eccentricity.value, r.inclination.value, r.node.value, r.arg_perihelion.value,
                r.mean_anomaly.value, r.epoch_jd(), r.daily_motion.map( |n| n.value)
            ),
            ParsedRecord::FreeText(r) => match &r.orbit {
                FreeTextOrbit::Elliptical { inclination, node, arg_perihelion, mean_distance, daily_motion, eccentricity, mean_anomaly, epoch } => {
                    KeplerOrbit::from_mean_anomaly(
                        mean_distance.value, eccentricity.value, inclination.value, node.value, arg_perihelion.value,
                        mean_anomaly.value, epoch.julian_date(), daily_motion.map( |n| n.value)
                    )
                }
                FreeTextOrbit::Hyperbolic { perihelion_date, inclination, node, arg_perihelion, eccentricity, perihelion_distance } => KeplerOrbit {
                    perihelion_distance: perihelion_distance.value,
                    eccentricity: eccentricity.value,
                    inclination: inclination.value,
                    node: node.value,
                    arg_perihelion: arg_perihelion.value,
                    perihelion_jd: perihelion_date.julian_date()
                },
                FreeTextOrbit::Parabolic { perihelion_date, inclination, arg_perihelion, perihelion_distance, node } => KeplerOrbit {
                    perihelion_distance: perihelion_distance.value,
                    eccentricity: 1.0,
                    inclination: inclination.value,
                    node: node.value,
                    arg_perihelion: arg_perihelion.value,
                    perihelion_jd: perihelion_date.julian_date()
                }
            }
        }
    }
}

/* #endregion typed records */

/// one comet or minor planet as it is kept in catalog maps. The raw record is retained verbatim since
/// consumers re-parse it with their own column map
#[derive(Debug,Clone,PartialEq)]
pub struct OrbitalElement {
    pub name: String,
    pub raw_record: String,
    pub format: CatalogFormat,
}

impl OrbitalElement {
    /// validate a catalog line. Rejections are logged with the offending line
    pub fn parse (line: &str, format: CatalogFormat)->Result<Self> {
        match parse_record( line, format) {
            Ok(rec) => {
                let name = normalize_name( rec.designation());
                Ok( OrbitalElement { name, raw_record: line.to_string(), format } )
            }
            Err(rejection) => {
                warn!("rejected {} record ({}): {}", format, rejection, line);
                Err( CelestialError::Rejected(rejection))
            }
        }
    }

    pub fn record (&self)->Result<ParsedRecord> {
        Ok( parse_record( &self.raw_record, self.format)? )
    }
}

/// parse and validate a single catalog line. Validation short-circuits on the first failed rule
pub fn parse_record (line: &str, format: CatalogFormat)->std::result::Result<ParsedRecord,Rejection> {
    if line.contains( CORRUPTION_MARKER) { return Err( Rejection::CorruptionMarker) }

    match format {
        CatalogFormat::CometOrbitRecord => parse_comet_orbit_record( line).map( ParsedRecord::CometOrbit),
        CatalogFormat::MinorPlanetOrbitRecord => parse_minor_planet_orbit_record( line).map( ParsedRecord::MinorPlanetOrbit),
        CatalogFormat::CometFreeText => parse_free_text_record( line, true).map( ParsedRecord::FreeText),
        CatalogFormat::MinorPlanetFreeText => parse_free_text_record( line, false).map( ParsedRecord::FreeText),
    }
}

fn decimal (line: &str, cols: Columns, what: &'static str)->std::result::Result<FixedDecimal,Rejection> {
    FixedDecimal::parse( cols.slice(line)).ok_or( Rejection::MalformedField(what))
}

fn decimal_field (s: &str, what: &'static str)->std::result::Result<FixedDecimal,Rejection> {
    FixedDecimal::parse( s).ok_or( Rejection::MalformedField(what))
}

fn integer<T: FromStr> (s: &str, what: &'static str)->std::result::Result<T,Rejection> {
    s.trim().parse::<T>().map_err( |_| Rejection::MalformedField(what))
}

fn is_blank_name (s: &str)->bool {
    strip_parentheses(s).is_empty()
}

fn parse_comet_orbit_record (line: &str)->std::result::Result<CometOrbitRecord,Rejection> {
    use comet_cols::*;

    let name = NAME.field(line);
    if is_blank_name( name) { return Err( Rejection::BlankName) }
    if ABS_MAG.is_blank( line) { return Err( Rejection::BlankAbsoluteMagnitude) }
    if SLOPE.is_blank( line) { return Err( Rejection::BlankSlope) }

    let designation = comet_designation( name).ok_or_else( || Rejection::UnknownDesignation( name.to_string()))?;

    let epoch = if EPOCH_YEAR.is_blank(line) {
        None
    } else {
        Some( (integer( EPOCH_YEAR.field(line), "epoch year")?, integer( EPOCH_MONTH.field(line), "epoch month")?, integer( EPOCH_DAY.field(line), "epoch day")?) )
    };

    Ok( CometOrbitRecord {
        designation,
        perihelion_year: integer( PERIHELION_YEAR.field(line), "perihelion year")?,
        perihelion_month: integer( PERIHELION_MONTH.field(line), "perihelion month")?,
        perihelion_day: decimal( line, PERIHELION_DAY, "perihelion day")?,
        perihelion_distance: decimal( line, PERIHELION_DISTANCE, "perihelion distance")?,
        eccentricity: decimal( line, ECCENTRICITY, "eccentricity")?,
        arg_perihelion: decimal( line, ARG_PERIHELION, "argument of perihelion")?,
        node: decimal( line, NODE, "ascending node")?,
        inclination: decimal( line, INCLINATION, "inclination")?,
        epoch,
        abs_mag: decimal( line, ABS_MAG, "absolute magnitude")?,
        slope: decimal( line, SLOPE, "slope parameter")?,
        name: name.to_string(),
        reference: REFERENCE.field(line).to_string()
    })
}

fn parse_minor_planet_orbit_record (line: &str)->std::result::Result<MinorPlanetOrbitRecord,Rejection> {
    use minor_planet_cols::*;

    let name = NAME.field(line);
    if is_blank_name( name) { return Err( Rejection::BlankName) }
    if ABS_MAG.is_blank( line) { return Err( Rejection::BlankAbsoluteMagnitude) }
    if SLOPE.is_blank( line) { return Err( Rejection::BlankSlope) }
    if SEMI_MAJOR_AXIS.is_blank( line) { return Err( Rejection::BlankSemiMajorAxis) }

    let designation = minor_planet_designation( name).ok_or_else( || Rejection::UnknownDesignation( name.to_string()))?;
    let epoch = unpack_date( EPOCH.field(line)).ok_or( Rejection::MalformedField("packed epoch"))?;
    let daily_motion = if DAILY_MOTION.is_blank(line) { None } else { Some( decimal( line, DAILY_MOTION, "mean daily motion")?) };
    let observations = OBSERVATIONS.field(line).parse::<u32>().ok();

    Ok( MinorPlanetOrbitRecord {
        designation,
        packed_designation: DESIGNATION.field(line).to_string(),
        abs_mag: decimal( line, ABS_MAG, "absolute magnitude")?,
        slope: decimal( line, SLOPE, "slope parameter")?,
        epoch,
        mean_anomaly: decimal( line, MEAN_ANOMALY, "mean anomaly")?,
        arg_perihelion: decimal( line, ARG_PERIHELION, "argument of perihelion")?,
        node: decimal( line, NODE, "ascending node")?,
        inclination: decimal( line, INCLINATION, "inclination")?,
        eccentricity: decimal( line, ECCENTRICITY, "eccentricity")?,
        daily_motion,
        semi_major_axis: decimal( line, SEMI_MAJOR_AXIS, "semi-major axis")?,
        observations,
        name: name.to_string()
    })
}

/// strip the 'g'/'H' prefix of the first magnitude component
fn magnitude_value (s: &str)->(Option<char>, &str) {
    let s = s.trim();
    match s.chars().next() {
        Some(c) if c.is_ascii_alphabetic() => (Some(c), s[c.len_utf8()..].trim()),
        _ => (None, s)
    }
}

fn parse_free_text_record (line: &str, is_comet: bool)->std::result::Result<FreeTextRecord,Rejection> {
    let fields: Vec<&str> = line.split(',').map( |f| f.trim()).collect();

    let name = fields[0];
    if is_blank_name( name) { return Err( Rejection::BlankName) }

    let shape = fields.get(1).and_then( |s| s.chars().next()).ok_or( Rejection::MalformedField("orbit shape"))?;
    let n_fields = FreeTextOrbit::field_count( shape).ok_or( Rejection::MalformedField("orbit shape"))?;

    if fields.len() + 1 < n_fields || fields.len() > n_fields {
        return Err( Rejection::MalformedField("field count"))
    }

    let (prefix, abs_mag) = magnitude_value( fields[n_fields-2]);
    if abs_mag.is_empty() { return Err( Rejection::BlankAbsoluteMagnitude) }

    // upstream data sometimes lacks the second magnitude component, which only elliptical orbits require
    let slope = fields.get(n_fields-1).copied().filter( |s| !s.is_empty());
    if shape == 'e' && slope.is_none() { return Err( Rejection::IncompleteMagnitudePair) }

    let designation = if is_comet { comet_designation( name) } else { minor_planet_designation( name) };
    let designation = designation.ok_or_else( || Rejection::UnknownDesignation( name.to_string()))?;

    let date = |s: &str, what: &'static str| FreeTextDate::parse(s).ok_or( Rejection::MalformedField(what));

    let orbit = match shape {
        'e' => FreeTextOrbit::Elliptical {
            inclination: decimal_field( fields[2], "inclination")?,
            node: decimal_field( fields[3], "ascending node")?,
            arg_perihelion: decimal_field( fields[4], "argument of perihelion")?,
            mean_distance: decimal_field( fields[5], "mean distance")?,
            daily_motion: FixedDecimal::parse( fields[6]),
            eccentricity: decimal_field( fields[7], "eccentricity")?,
            mean_anomaly: decimal_field( fields[8], "mean anomaly")?,
            epoch: date( fields[9], "epoch")?,
        },
        'h' => FreeTextOrbit::Hyperbolic {
            perihelion_date: date( fields[2], "perihelion date")?,
            inclination: decimal_field( fields[3], "inclination")?,
            node: decimal_field( fields[4], "ascending node")?,
            arg_perihelion: decimal_field( fields[5], "argument of perihelion")?,
            eccentricity: decimal_field( fields[6], "eccentricity")?,
            perihelion_distance: decimal_field( fields[7], "perihelion distance")?,
        },
        _ => FreeTextOrbit::Parabolic {
            perihelion_date: date( fields[2], "perihelion date")?,
            inclination: decimal_field( fields[3], "inclination")?,
            arg_perihelion: decimal_field( fields[4], "argument of perihelion")?,
            perihelion_distance: decimal_field( fields[5], "perihelion distance")?,
            node: decimal_field( fields[6], "ascending node")?,
        }
    };

    let equinox = decimal_field( fields[n_fields-3], "equinox")?;
    let abs_mag = decimal_field( abs_mag, "absolute magnitude")?;
    let slope = slope.map( |s| decimal_field( s, "slope parameter")).transpose()?;

    let magnitude = match prefix {
        Some('H') => MagnitudeModel::Asteroid { h: abs_mag, g: slope },
        Some('g') => MagnitudeModel::Comet { g: abs_mag, k: slope },
        _ => if is_comet { MagnitudeModel::Comet { g: abs_mag, k: slope } } else { MagnitudeModel::Asteroid { h: abs_mag, g: slope } }
    };

    Ok( FreeTextRecord { name: name.to_string(), designation, orbit, equinox, magnitude } )
}
