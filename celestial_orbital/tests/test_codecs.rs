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
    packed_date::*,
    columns::{Columns, LineBuilder},
    decimal::FixedDecimal,
    designation::*,
};

/// run with "cargo test -p celestial_orbital --test test_codecs -- --nocapture"

#[test]
fn test_packed_dates () {
    let p = pack_date_fields( "2019", "07", "04").unwrap();
    println!("2019-07-04 -> {p}");
    assert_eq!( p, "K1974");
    assert_eq!( pack_date( 2019, 4, 27).as_deref(), Some("K194R"));
    assert_eq!( pack_date( 1995, 12, 31).as_deref(), Some("J95CV"));
    assert_eq!( pack_date( 1801, 1, 1).as_deref(), Some("I0111"));

    assert_eq!( unpack_date( "K194R"), Some( (2019, 4, 27)));
    assert_eq!( unpack_date_fields( "K1974"), Some( ("2019".to_string(), "07".to_string(), "04".to_string())));

    // pure character mapping, no calendar check
    assert_eq!( unpack_date( "K192U"), Some( (2019, 2, 30)));

    assert_eq!( pack_date( 2119, 1, 1), None); // no century letter
    assert_eq!( pack_date( 2019, 1, 36), None);
    assert_eq!( unpack_date( "X1974"), None);
    assert_eq!( unpack_date( "K197"), None);
}

#[test]
fn test_packed_digits () {
    for v in 0..36 {
        let c = encode_digit(v).unwrap();
        assert_eq!( decode_digit(c), Some(v));
    }
    assert_eq!( encode_digit(10), Some('A'));
    assert_eq!( decode_digit('V'), Some(31));
    assert_eq!( decode_digit('a'), None);
}

#[test]
fn test_designation_extraction () {
    assert_eq!( comet_designation( "1P/Halley").as_deref(), Some("1P"));
    assert_eq!( comet_designation( "332P-B/Ikeya-Murakami").as_deref(), Some("332P"));
    assert_eq!( comet_designation( "C/1995 O1 (Hale-Bopp)").as_deref(), Some("C/1995 O1"));
    assert_eq!( comet_designation( "P/2019 LD2 (ATLAS)").as_deref(), Some("P/2019 LD2"));
    assert_eq!( comet_designation( "Halley"), None);

    assert_eq!( minor_planet_designation( "(1) Ceres").as_deref(), Some("1"));
    assert_eq!( minor_planet_designation( "433 Eros").as_deref(), Some("433"));
    assert_eq!( minor_planet_designation( "1993 RP").as_deref(), Some("1993 RP"));
    assert_eq!( minor_planet_designation( "2007 TA418").as_deref(), Some("2007 TA418"));
    assert_eq!( minor_planet_designation( "Ceres"), None);
}

#[test]
fn test_designation_idempotence () {
    for name in ["1P/Halley", "332P-B/Ikeya-Murakami", "C/1995 O1 (Hale-Bopp)", "C/2020 F3 (NEOWISE)"] {
        let d = comet_designation( name).unwrap();
        println!("{name} -> {d}");
        assert_eq!( comet_designation( &d).as_deref(), Some(d.as_str()));
    }
    for name in ["(1) Ceres", "(433) Eros", "1993 RP", "2007 TA418"] {
        let d = minor_planet_designation( name).unwrap();
        println!("{name} -> {d}");
        assert_eq!( minor_planet_designation( &d).as_deref(), Some(d.as_str()));
    }
}

#[test]
fn test_packed_designations () {
    assert_eq!( pack_number( 1).as_deref(), Some("00001"));
    assert_eq!( pack_number( 100345).as_deref(), Some("A0345"));
    assert_eq!( pack_number( 360017).as_deref(), Some("a0017"));
    assert_eq!( unpack_number( "A0345"), Some(100345));
    assert_eq!( unpack_number( "z9999"), Some(619999));
    assert_eq!( pack_number( 620000), None);

    assert_eq!( pack_provisional( "1995 XL1").as_deref(), Some("J95X01L"));
    assert_eq!( pack_provisional( "2007 TA418").as_deref(), Some("K07Tf8A"));
    assert_eq!( pack_provisional( "1993 RP").as_deref(), Some("J93R00P"));
    assert_eq!( unpack_provisional( "K07Tf8A").as_deref(), Some("2007 TA418"));
    assert_eq!( unpack_provisional( "J93R00P").as_deref(), Some("1993 RP"));

    assert_eq!( pack_comet_provisional( "1995 O1").as_deref(), Some("J95O010"));
    assert_eq!( unpack_comet_provisional( "J95O010").as_deref(), Some("1995 O1"));

    assert_eq!( comet_designation_field( "1P").as_deref(), Some("0001P       "));
    assert_eq!( comet_designation_field( "C/1995 O1").as_deref(), Some("    CJ95O010"));
    assert_eq!( designation_from_comet_field( "0001P       ").as_deref(), Some("1P"));
    assert_eq!( designation_from_comet_field( "    CJ95O010").as_deref(), Some("C/1995 O1"));

    assert_eq!( pack_minor_planet_designation( "433").as_deref(), Some("00433"));
    assert_eq!( unpack_minor_planet_designation( "J95X01L").as_deref(), Some("1995 XL1"));
}

#[test]
fn test_columns () {
    let line = "00001    3.34  0.15 K2555";
    assert_eq!( Columns::new( 1, 7).field( line), "00001");
    assert_eq!( Columns::new( 9, 13).field( line), "3.34");
    assert_eq!( Columns::new( 21, 25).slice( line), "K2555");
    assert_eq!( Columns::new( 27, 35).slice( line), ""); // beyond line end
    assert!( Columns::new( 6, 8).is_blank( line));

    let mut lb = LineBuilder::new( 20);
    lb.put_left( Columns::new( 1, 5), "AB");
    lb.put_right( Columns::new( 7, 12), "1.5");
    assert_eq!( lb.to_line(), "AB       1.5");
}

#[test]
fn test_degenerate_columns () {
    // a 0 first column is read as 1, inverted ranges are empty
    assert_eq!( Columns::new( 0, 3).field( "abcdef"), "abc");
    assert_eq!( Columns::new( 0, 3).width(), 3);
    assert_eq!( Columns::new( 0, 0).slice( "abcdef"), "");
    assert_eq!( Columns::new( 5, 2).slice( "abcdef"), "");
    assert_eq!( Columns::new( 5, 2).width(), 0);

    let mut lb = LineBuilder::new( 6);
    lb.put_right( Columns::new( 0, 3), "xy");
    lb.put_left( Columns::new( 5, 2), "zz");
    println!("{:?}", lb.to_line());
    assert_eq!( lb.to_line(), " xy");
}

#[test]
fn test_fixed_decimal () {
    let d = FixedDecimal::parse( "  0.214300 ").unwrap();
    assert_eq!( d.places, 6);
    assert_eq!( d.to_string(), "0.214300");
    assert_eq!( d.format( 10), "  0.214300");
    assert_eq!( d.format_with( 8, 2), "    0.21");
    assert_eq!( d.rounded( 3).to_string(), "0.214");

    assert_eq!( FixedDecimal::parse( "2000").map( |d| d.places), Some(0));
    assert!( FixedDecimal::parse( "   ").is_none());
    assert!( FixedDecimal::parse( "x.5").is_none());
}
