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
use chrono::{DateTime, Datelike, TimeZone, Utc};
use nalgebra::Vector3;
use celestial_common::datetime::secs_between;
use celestial_orbital::{
    backend::{AnalyticBackend, EphemerisBackend, SatelliteState},
    catalog::ApparentMagnitudeRecord,
    columns::LineBuilder,
    errors::{CelestialError, Result},
    gp_record::GeneralPerturbationRecord,
    orbital_element::{comet_cols, minor_planet_cols, CatalogFormat, OrbitalElement},
    BodyKind, BodySelection, Catalogs, DataTag, DataValue, EphemerisConfig, EphemerisEngine, Observer, Planet,
    VisibilityResult,
};

/// an analytic backend that can't compute the moon
struct NoMoonBackend(AnalyticBackend);

impl EphemerisBackend for NoMoonBackend {
    fn name (&self)->&'static str { "no-moon" }
    fn sun (&self, t: &DateTime<Utc>)->Result<Vector3<f64>> { self.0.sun(t) }
    fn moon (&self, t: &DateTime<Utc>)->Result<Vector3<f64>> { Err( CelestialError::PropagationError( format!("no moon at {t}"))) }
    fn native_format (&self, is_comet: bool)->CatalogFormat { self.0.native_format( is_comet) }
    fn satellite (&self, gp: &GeneralPerturbationRecord, t: &DateTime<Utc>)->Result<SatelliteState> { self.0.satellite( gp, t) }
}

fn t0 ()->DateTime<Utc> { Utc.with_ymd_and_hms( 2024, 6, 21, 18, 0, 0).unwrap() }

fn boulder ()->Observer { Observer::new( 40.0, -105.0, 1600.0) }

fn date (r: &VisibilityResult, kind: BodyKind, name: &str, tag: DataTag)->DateTime<Utc> {
    match r.get( kind, name, tag) {
        Some(DataValue::Date(d)) => *d,
        other => panic!("no date for {name} {tag}: {other:?}")
    }
}

fn angle (r: &VisibilityResult, kind: BodyKind, name: &str, tag: DataTag)->f64 {
    match r.get( kind, name, tag) {
        Some(DataValue::Angle(a)) => *a,
        other => panic!("no angle for {name} {tag}: {other:?}")
    }
}

fn text (r: &VisibilityResult, kind: BodyKind, name: &str, tag: DataTag)->String {
    match r.get( kind, name, tag) {
        Some(DataValue::Text(s)) => s.clone(),
        other => panic!("no text for {name} {tag}: {other:?}")
    }
}

fn ymd (d: &DateTime<Utc>)->(i32,u32,u32) { (d.year(), d.month(), d.day()) }

fn print_result (r: &VisibilityResult) {
    for row in r.rows() { println!("{:12} {:12} {:20} {}", row.kind, row.name, row.tag, row.value) }
}

#[test]
fn test_sun () {
    let backend = AnalyticBackend::new();
    let config = EphemerisConfig::default();
    let engine = EphemerisEngine::new( &backend, &config);
    let selection = BodySelection { sun: true, ..Default::default() };

    let r = engine.compute( &boulder(), &t0(), &selection, &Catalogs::default(), None);
    print_result( &r);
    let (k, n) = (BodyKind::Sun, "Sun");

    // local noon-ish in early summer
    assert!( angle( &r, k, n, DataTag::Altitude) > 60.0);
    let az = angle( &r, k, n, DataTag::Azimuth);
    assert!( az > 90.0 && az < 270.0);

    let set = date( &r, k, n, DataTag::SetDate);
    let rise = date( &r, k, n, DataTag::RiseDate);
    assert!( set < rise);
    assert_eq!( ymd( &set), (2024, 6, 22));
    assert!( (secs_between( &set, &rise) / 3600.0 - 9.0).abs() < 0.5);
    assert!( angle( &r, k, n, DataTag::SetAzimuth) > 290.0);
    assert!( angle( &r, k, n, DataTag::RiseAzimuth) < 70.0);

    let dusk = date( &r, k, n, DataTag::Dusk);
    let dawn = date( &r, k, n, DataTag::Dawn);
    assert!( set < dusk && dusk < dawn && dawn < rise);

    assert_eq!( ymd( &date( &r, k, n, DataTag::Equinox)).1, 9);
    assert_eq!( ymd( &date( &r, k, n, DataTag::Solstice)).1, 12);

    assert_eq!( ymd( &date( &r, k, n, DataTag::EclipseDate)), (2024, 10, 2));
    assert_eq!( text( &r, k, n, DataTag::EclipseType), "Annular");
}

#[test]
fn test_moon () {
    let backend = AnalyticBackend::new();
    let config = EphemerisConfig::default();
    let engine = EphemerisEngine::new( &backend, &config);
    let selection = BodySelection { moon: true, ..Default::default() };

    let r = engine.compute( &boulder(), &t0(), &selection, &Catalogs::default(), None);
    print_result( &r);
    let (k, n) = (BodyKind::Moon, "Moon");

    // full moon on 2024-06-22 01:08 UTC
    match r.get( k, n, DataTag::IlluminationPercentage) {
        Some(DataValue::Percent(p)) => assert!( *p >= 97),
        other => panic!("no illumination: {other:?}")
    }
    let phase = text( &r, k, n, DataTag::Phase);
    assert!( phase == "Waxing Gibbous" || phase == "Full Moon");

    assert_eq!( ymd( &date( &r, k, n, DataTag::FullMoon)), (2024, 6, 22));
    for tag in [DataTag::NewMoon, DataTag::FirstQuarter, DataTag::FullMoon, DataTag::ThirdQuarter] {
        let days = secs_between( &t0(), &date( &r, k, n, tag)) / 86400.0;
        assert!( days > 0.0 && days < 36.0);
    }
    assert!( date( &r, k, n, DataTag::ThirdQuarter) < date( &r, k, n, DataTag::NewMoon));
    assert!( date( &r, k, n, DataTag::NewMoon) < date( &r, k, n, DataTag::FirstQuarter));

    let limb = angle( &r, k, n, DataTag::BrightLimbAngle);
    assert!( (0.0..360.0).contains( &limb));

    assert_eq!( ymd( &date( &r, k, n, DataTag::EclipseDate)), (2024, 9, 18));
    let kind = text( &r, k, n, DataTag::EclipseType);
    assert!( kind == "Partial" || kind == "Penumbral");
}

#[test]
fn test_circumpolar_stars () {
    let backend = AnalyticBackend::new();
    let config = EphemerisConfig::default();
    let engine = EphemerisEngine::new( &backend, &config);
    let selection = BodySelection { stars: vec!["Polaris".to_string()], ..Default::default() };

    let r = engine.compute( &Observer::new( 80.0, 10.0, 0.0), &t0(), &selection, &Catalogs::default(), None);
    print_result( &r);
    assert_eq!( r.tags_of( BodyKind::Star, "Polaris"), vec![DataTag::Altitude, DataTag::Azimuth]);
    assert!( (angle( &r, BodyKind::Star, "Polaris", DataTag::Altitude) - 80.0).abs() < 1.5);

    let r = engine.compute( &Observer::new( -60.0, 10.0, 0.0), &t0(), &selection, &Catalogs::default(), None);
    assert!( r.is_empty());

    let selection = BodySelection { stars: vec!["Alpha Nowhere".to_string()], ..Default::default() };
    assert!( engine.compute( &boulder(), &t0(), &selection, &Catalogs::default(), None).is_empty());
}

#[test]
fn test_failing_body_is_omitted () {
    let backend = NoMoonBackend( AnalyticBackend::new());
    let config = EphemerisConfig::default();
    let engine = EphemerisEngine::new( &backend, &config);
    let selection = BodySelection {
        moon: true,
        planets: vec![Planet::Jupiter],
        stars: vec!["Vega".to_string()],
        satellites: vec!["ISS (ZARYA)".to_string()], // no TLE
        ..Default::default()
    };

    let r = engine.compute( &boulder(), &t0(), &selection, &Catalogs::default(), None);
    print_result( &r);
    assert!( !r.has_body( BodyKind::Moon, "Moon"));
    assert!( !r.has_body( BodyKind::Satellite, "ISS (ZARYA)"));
    assert!( r.contains( BodyKind::Planet, "Jupiter", DataTag::RiseDate));
    assert!( r.contains( BodyKind::Star, "Vega", DataTag::SetDate));
}

fn ceres ()->OrbitalElement {
    use minor_planet_cols::*;
    let mut lb = LineBuilder::new( LINE_LENGTH);
    lb.put_left( DESIGNATION, "00001");
    lb.put_right( ABS_MAG, "3.34");
    lb.put_right( SLOPE, "0.15");
    lb.put_left( EPOCH, "K2555");
    lb.put_right( MEAN_ANOMALY, "188.70269");
    lb.put_right( ARG_PERIHELION, "73.27343");
    lb.put_right( NODE, "80.25221");
    lb.put_right( INCLINATION, "10.58780");
    lb.put_right( ECCENTRICITY, "0.0794013");
    lb.put_right( DAILY_MOTION, "0.21424651");
    lb.put_right( SEMI_MAJOR_AXIS, "2.7660512");
    lb.put_left( NAME, "(1) Ceres");
    OrbitalElement::parse( &lb.to_line(), CatalogFormat::MinorPlanetOrbitRecord).unwrap()
}

#[test]
fn test_magnitude_ceiling () {
    let backend = AnalyticBackend::new();
    let config = EphemerisConfig::default();
    let engine = EphemerisEngine::new( &backend, &config);
    let selection = BodySelection { minor_planets: vec!["1".to_string()], ..Default::default() };

    let mut catalogs = Catalogs::default();
    catalogs.minor_planets.insert( "1".to_string(), ceres());
    let has_ceres = |r: &VisibilityResult| r.has_body( BodyKind::MinorPlanet, "1");

    // no ceiling: always computed
    let r = engine.compute( &boulder(), &t0(), &selection, &catalogs, None);
    print_result( &r);
    assert!( has_ceres( &r));
    assert!( r.contains( BodyKind::MinorPlanet, "1", DataTag::RiseDate));

    // computed magnitude (~7.5) is above the ceiling
    assert!( !has_ceres( &engine.compute( &boulder(), &t0(), &selection, &catalogs, Some(6.0))));
    assert!( has_ceres( &engine.compute( &boulder(), &t0(), &selection, &catalogs, Some(10.0))));

    // precomputed magnitudes take precedence
    let record = |m: &str| ApparentMagnitudeRecord { name: "1".to_string(), apparent_magnitude: m.to_string() };
    catalogs.minor_planet_magnitudes.insert( "1".to_string(), record( "5.0"));
    assert!( has_ceres( &engine.compute( &boulder(), &t0(), &selection, &catalogs, Some(6.0))));
    catalogs.minor_planet_magnitudes.insert( "1".to_string(), record( "8.0"));
    assert!( !has_ceres( &engine.compute( &boulder(), &t0(), &selection, &catalogs, Some(6.0))));

    // unknown bodies are left out
    let selection = BodySelection { minor_planets: vec!["99942".to_string()], ..Default::default() };
    assert!( engine.compute( &boulder(), &t0(), &selection, &catalogs, None).is_empty());
}

/// 13P/Olbers as comet orbit record, close to its 2024-06-30 perihelion at t0
fn olbers ()->OrbitalElement {
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
    OrbitalElement::parse( &lb.to_line(), CatalogFormat::CometOrbitRecord).unwrap()
}

#[test]
fn test_comet_orbit_record () {
    // the analytic backend reads free-text records, i.e. the orbit record gets converted before propagation
    let backend = AnalyticBackend::new();
    let config = EphemerisConfig::default();
    let engine = EphemerisEngine::new( &backend, &config);
    let selection = BodySelection { comets: vec!["13P".to_string()], ..Default::default() };

    let mut catalogs = Catalogs::default();
    let comet = olbers();
    assert_eq!( comet.name, "13P");
    catalogs.comets.insert( comet.name.clone(), comet);
    let has_olbers = |r: &VisibilityResult| r.has_body( BodyKind::Comet, "13P");

    let r = engine.compute( &boulder(), &t0(), &selection, &catalogs, None);
    print_result( &r);
    assert!( has_olbers( &r));

    // the computed total magnitude of a comet ~1.2 AU from the sun is somewhere between 3 and 12
    assert!( has_olbers( &engine.compute( &boulder(), &t0(), &selection, &catalogs, Some(12.0))));
    assert!( !has_olbers( &engine.compute( &boulder(), &t0(), &selection, &catalogs, Some(3.0))));
}

#[test]
fn test_selection_by_readable_name () {
    let backend = AnalyticBackend::new();
    let config = EphemerisConfig::default();
    let engine = EphemerisEngine::new( &backend, &config);

    let mut catalogs = Catalogs::default();
    catalogs.minor_planets.insert( "1".to_string(), ceres());
    catalogs.comets.insert( "13P".to_string(), olbers());

    // catalogs are keyed by designation, selections can use the full name
    let selection = BodySelection {
        minor_planets: vec!["(1) Ceres".to_string()],
        comets: vec!["13P/Olbers".to_string()],
        ..Default::default()
    };
    let r = engine.compute( &boulder(), &t0(), &selection, &catalogs, None);
    print_result( &r);
    assert!( r.has_body( BodyKind::MinorPlanet, "(1) Ceres"));
    assert!( r.contains( BodyKind::MinorPlanet, "(1) Ceres", DataTag::RiseDate));
    assert!( r.has_body( BodyKind::Comet, "13P/Olbers"));

    // precomputed magnitudes are found through the designation as well
    let record = ApparentMagnitudeRecord { name: "1".to_string(), apparent_magnitude: "20.0".to_string() };
    catalogs.minor_planet_magnitudes.insert( "1".to_string(), record);
    let r = engine.compute( &boulder(), &t0(), &selection, &catalogs, Some(10.0));
    assert!( !r.has_body( BodyKind::MinorPlanet, "(1) Ceres"));

    let selection = BodySelection { minor_planets: vec!["(2) Pallas".to_string()], ..Default::default() };
    assert!( engine.compute( &boulder(), &t0(), &selection, &catalogs, None).is_empty());
}
