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

use celestial_orbital::{
    columns::LineBuilder,
    convert::*,
    errors::CelestialError,
    orbital_element::{comet_cols, minor_planet_cols, parse_record, CatalogFormat, FreeTextOrbit, ParsedRecord, Rejection},
};

fn ceres ()->String {
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
    lb.to_line()
}

fn comet (name: &str, e: &str)->String {
    use comet_cols::*;
    let mut lb = LineBuilder::new( LINE_LENGTH);
    lb.put_right( PERIHELION_YEAR, "1986");
    lb.put_right( PERIHELION_MONTH, "02");
    lb.put_right( PERIHELION_DAY, "9.4589");
    lb.put_right( PERIHELION_DISTANCE, "0.574636");
    lb.put_right( ECCENTRICITY, e);
    lb.put_right( ARG_PERIHELION, "111.8657");
    lb.put_right( NODE, "59.0967");
    lb.put_right( INCLINATION, "162.1953");
    lb.put_right( ABS_MAG, "4.0");
    lb.put_right( SLOPE, "6.0");
    lb.put_left( NAME, name);
    lb.to_line()
}

fn free_text_shape (line: &str)->char {
    match parse_record( line, CatalogFormat::CometFreeText).unwrap() {
        ParsedRecord::FreeText(r) => r.orbit.shape(),
        _ => panic!("not a free-text record")
    }
}

#[test]
fn test_orbit_shape () {
    assert_eq!( orbit_shape( 0.0794), 'e');
    assert_eq!( orbit_shape( 0.9899), 'e');
    assert_eq!( orbit_shape( 0.995), 'p');
    assert_eq!( orbit_shape( 1.0), 'p');
    assert_eq!( orbit_shape( 1.0005), 'h');

    use CatalogFormat::*;
    for (e, shape) in [("0.967900", 'e'), ("0.995000", 'p'), ("1.000000", 'p'), ("1.000500", 'h')] {
        let line = convert( &comet( "1P/Halley", e), CometOrbitRecord, CometFreeText).unwrap();
        println!("{line}");
        assert_eq!( free_text_shape( &line), shape);
    }
}

#[test]
fn test_comet_conversion_closure () {
    use CatalogFormat::*;
    let src = comet( "1P/Halley", "0.967900");

    let text = convert( &src, CometOrbitRecord, CometFreeText).unwrap();
    println!("{text}");
    assert!( text.starts_with( "1P/Halley,e,162.1953,59.0967,111.8657,"));
    assert!( text.ends_with( ",2/9.4589/1986,2000,g  4.0,6.0"));

    let back = convert( &text, CometFreeText, CometOrbitRecord).unwrap();
    println!("{back}");
    let ParsedRecord::CometOrbit(r) = parse_record( &back, CometOrbitRecord).unwrap() else { panic!("not a comet record") };
    assert_eq!( r.designation, "1P");
    assert_eq!( (r.perihelion_year, r.perihelion_month), (1986, 2));
    assert!( (r.perihelion_day.value - 9.4589).abs() < 1e-4);
    assert!( (r.perihelion_distance.value - 0.574636).abs() < 2e-6);
    assert!( (r.eccentricity.value - 0.9679).abs() < 1e-9);
    assert_eq!( r.inclination.to_string(), "162.1953");
    assert_eq!( &back[0..12], "0001P       ");

    let text = convert( &comet( "C/1995 O1 (Hale-Bopp)", "1.000500"), CometOrbitRecord, CometFreeText).unwrap();
    let back = convert( &text, CometFreeText, CometOrbitRecord).unwrap();
    assert_eq!( parse_record( &back, CometOrbitRecord).unwrap().designation(), "C/1995 O1");
    assert_eq!( &back[0..12], "    CJ95O010");
}

#[test]
fn test_minor_planet_conversion_closure () {
    use CatalogFormat::*;

    let text = convert( &ceres(), MinorPlanetOrbitRecord, MinorPlanetFreeText).unwrap();
    println!("{text}");
    assert_eq!( text, "1 Ceres,e,10.58780,80.25221,73.27343,2.7660512,0.21424651,0.0794013,188.70269,5/5.0/2025,2000,H 3.34,0.15");

    let back = convert( &text, MinorPlanetFreeText, MinorPlanetOrbitRecord).unwrap();
    println!("{back}");
    assert_eq!( back, ceres());
}

#[test]
fn test_fractional_epoch () {
    use CatalogFormat::*;
    let text = "433 Eros,e,10.8283,304.2701,178.9298,1.4579,0.55989,0.22283,100.0,11/4.5/2024,2000,H 10.38,0.46";
    let back = convert( text, MinorPlanetFreeText, MinorPlanetOrbitRecord).unwrap();
    let ParsedRecord::MinorPlanetOrbit(r) = parse_record( &back, MinorPlanetOrbitRecord).unwrap() else { panic!("not a minor planet record") };

    assert_eq!( r.epoch, (2024, 11, 4));
    assert!( (r.mean_anomaly.value - (100.0 - 0.55989 * 0.5)).abs() < 1e-5);
    assert_eq!( r.name, "(433) Eros");
}

#[test]
fn test_unsupported_conversions () {
    use CatalogFormat::*;
    let res = convert( &ceres(), MinorPlanetOrbitRecord, CometFreeText);
    assert!( matches!( res, Err(CelestialError::UnsupportedConversion( MinorPlanetOrbitRecord, CometFreeText))));

    let res = convert( &comet( "1P/Halley", "0.967900"), CometOrbitRecord, MinorPlanetOrbitRecord);
    assert!( matches!( res, Err(CelestialError::UnsupportedConversion(..))));

    // identity conversions pass through verbatim
    assert_eq!( convert( &ceres(), MinorPlanetOrbitRecord, MinorPlanetOrbitRecord).unwrap(), ceres());

    // invalid records are rejected before anything is converted
    let res = convert( &ceres().replace( "3.34", "    "), MinorPlanetOrbitRecord, MinorPlanetFreeText);
    assert!( matches!( res, Err(CelestialError::Rejected(_))));

    // a free-text comet without slope parameter has no orbit record rendition
    let res = convert( "C/2020 F3 (NEOWISE),p,7/3.6/2020,128.9,37.3,0.2947,61.0,2000,g 12.0,", CometFreeText, CometOrbitRecord);
    println!("{res:?}");
    assert!( matches!( res, Err(CelestialError::Rejected(Rejection::BlankSlope))));
}

#[test]
fn test_names () {
    assert_eq!( readable_to_free_text_name( "(1) Ceres"), "1 Ceres");
    assert_eq!( free_text_to_readable_name( "1 Ceres"), "(1) Ceres");
    assert_eq!( free_text_to_readable_name( "1993 RP"), "1993 RP");
}
