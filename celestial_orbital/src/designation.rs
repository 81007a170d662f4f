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

use std::sync::LazyLock;
use regex::Regex;
use crate::packed_date::{century_from_letter, century_letter};

/// catalog designations of comets and minor planets and their packed (MPC) forms

/// numbered periodic comet with optional fragment and name, e.g. "282P", "332P-B/Ikeya-Murakami", "1P/Halley"
static COMET_NUMBERED_RE: LazyLock<Regex> = LazyLock::new(||
    Regex::new( r"^(\d+[PCDXIA])(?:-[A-Z]{1,2})?(?:/.*)?$").unwrap()
);

/// provisional comet designation, e.g. "C/1995 O1 (Hale-Bopp)", "P/2019 LD2 (ATLAS)"
static COMET_PROVISIONAL_RE: LazyLock<Regex> = LazyLock::new(||
    Regex::new( r"^([PCDXIA]/\S+ \S+)").unwrap()
);

/// provisional minor planet designation, e.g. "1993 RP", "2007 TA418"
static MINOR_PLANET_PROVISIONAL_RE: LazyLock<Regex> = LazyLock::new(||
    Regex::new( r"^(\d{4} [A-Z]{2}\d*)(?: |$)").unwrap()
);

/// leading numbered or packed-numbered minor planet token, e.g. "1", "433", "A0345"
static MINOR_PLANET_NUMBER_RE: LazyLock<Regex> = LazyLock::new(||
    Regex::new( r"^(\d+|[A-Za-z]\d{4})(?: |$)").unwrap()
);

/// upper-case and collapse all whitespace runs into single blanks
pub fn normalize_name (s: &str)->String {
    s.split_whitespace().collect::<Vec<&str>>().join(" ").to_uppercase()
}

/// collapse whitespace and strip the placeholder parentheses that catalogs put around numbers
pub fn strip_parentheses (s: &str)->String {
    s.replace( ['(', ')'], " ").split_whitespace().collect::<Vec<&str>>().join(" ")
}

/// extract the canonical comet designation. This is idempotent
/// ```
/// use celestial_orbital::designation::comet_designation;
/// assert_eq!( comet_designation("332P-B/Ikeya-Murakami").as_deref(), Some("332P"));
/// assert_eq!( comet_designation("C/1995 O1 (Hale-Bopp)").as_deref(), Some("C/1995 O1"));
/// ```
pub fn comet_designation (name: &str)->Option<String> {
    let name = name.split_whitespace().collect::<Vec<&str>>().join(" ");

    if let Some(cap) = COMET_NUMBERED_RE.captures(&name) {
        Some( cap[1].to_string())
    } else if let Some(cap) = COMET_PROVISIONAL_RE.captures(&name) {
        Some( cap[1].to_string())
    } else {
        None
    }
}

/// extract the canonical minor planet designation. This is idempotent
/// ```
/// use celestial_orbital::designation::minor_planet_designation;
/// assert_eq!( minor_planet_designation("(1) Ceres").as_deref(), Some("1"));
/// assert_eq!( minor_planet_designation("1993 RP").as_deref(), Some("1993 RP"));
/// ```
pub fn minor_planet_designation (name: &str)->Option<String> {
    let name = strip_parentheses(name);

    if let Some(cap) = MINOR_PLANET_PROVISIONAL_RE.captures(&name) {
        Some( cap[1].to_string())
    } else if let Some(cap) = MINOR_PLANET_NUMBER_RE.captures(&name) {
        Some( cap[1].to_string())
    } else {
        None
    }
}

/* #region packed numbers and provisional designations ****************************************************/

fn base62_char (v: u32)->Option<char> {
    match v {
        0..=9 => char::from_digit(v, 10),
        10..=35 => char::from_u32( 'A' as u32 + v - 10),
        36..=61 => char::from_u32( 'a' as u32 + v - 36),
        _ => None
    }
}

fn base62_value (c: char)->Option<u32> {
    match c {
        '0'..='9' => c.to_digit(10),
        'A'..='Z' => Some( c as u32 - 'A' as u32 + 10),
        'a'..='z' => Some( c as u32 - 'a' as u32 + 36),
        _ => None
    }
}

/// minor planet numbers: 5 digits below 100000, base-62 leading char + 4 digits up to 619999
pub fn pack_number (n: u32)->Option<String> {
    if n < 100000 {
        Some( format!("{n:05}"))
    } else {
        let c = base62_char( n / 10000)?;
        Some( format!("{c}{:04}", n % 10000))
    }
}

pub fn unpack_number (packed: &str)->Option<u32> {
    let packed = packed.trim();
    if packed.len() != 5 || !packed.is_ascii() { return None }

    let head = base62_value( packed.chars().next()?)?;
    let tail: u32 = packed[1..].parse().ok()?;
    Some( head * 10000 + tail)
}

/// cycle counts below 100 as two digits, up to 619 as base-62 char + digit
fn pack_cycle (n: u32)->Option<String> {
    if n < 100 {
        Some( format!("{n:02}"))
    } else {
        Some( format!("{}{}", base62_char( n / 10)?, n % 10))
    }
}

fn unpack_cycle (c0: char, c1: char)->Option<u32> {
    Some( base62_value(c0)? * 10 + c1.to_digit(10)?)
}

fn split_year (year: &str)->Option<(char,String)> {
    let y: i32 = year.parse().ok()?;
    Some( (century_letter( y / 100)?, format!("{:02}", y % 100)) )
}

/// "1995 XL1" -> "J95X01L", "2007 TA418" -> "K07Tf8A"
pub fn pack_provisional (designation: &str)->Option<String> {
    let (year, code) = designation.trim().split_once(' ')?;
    if year.len() != 4 || !code.is_ascii() || code.len() < 2 { return None }

    let (cl, yy) = split_year(year)?;
    let mut cs = code.chars();
    let half_month = cs.next()?;
    let second = cs.next()?;
    let rest: String = cs.collect();
    let cycle: u32 = if rest.is_empty() { 0 } else { rest.parse().ok()? };

    if !half_month.is_ascii_uppercase() || !second.is_ascii_uppercase() { return None }
    Some( format!("{cl}{yy}{half_month}{}{second}", pack_cycle(cycle)?))
}

/// "J95X01L" -> "1995 XL1"
pub fn unpack_provisional (packed: &str)->Option<String> {
    let cs: Vec<char> = packed.trim().chars().collect();
    if cs.len() != 7 { return None }

    let year = century_from_letter(cs[0])? * 100 + (cs[1].to_digit(10)? * 10 + cs[2].to_digit(10)?) as i32;
    let cycle = unpack_cycle( cs[4], cs[5])?;
    if cycle > 0 {
        Some( format!("{year} {}{}{cycle}", cs[3], cs[6]))
    } else {
        Some( format!("{year} {}{}", cs[3], cs[6]))
    }
}

/// comet provisional part without type prefix: "1995 O1" -> "J95O010", "2019 Y4-B" -> "K19Y04b"
pub fn pack_comet_provisional (designation: &str)->Option<String> {
    let (year, code) = designation.trim().split_once(' ')?;
    if year.len() != 4 || !code.is_ascii() || code.is_empty() { return None }

    let (cl, yy) = split_year(year)?;
    let (code, fragment) = match code.split_once('-') {
        Some((c,f)) => (c, f.chars().next().map( |c| c.to_ascii_lowercase()).unwrap_or('0')),
        None => (code, '0')
    };
    let half_month = code.chars().next()?;
    let cycle: u32 = code[1..].parse().ok()?;

    if !half_month.is_ascii_uppercase() { return None }
    Some( format!("{cl}{yy}{half_month}{}{fragment}", pack_cycle(cycle)?))
}

/// "J95O010" -> "1995 O1"
pub fn unpack_comet_provisional (packed: &str)->Option<String> {
    let cs: Vec<char> = packed.trim().chars().collect();
    if cs.len() != 7 { return None }

    let year = century_from_letter(cs[0])? * 100 + (cs[1].to_digit(10)? * 10 + cs[2].to_digit(10)?) as i32;
    let cycle = unpack_cycle( cs[4], cs[5])?;
    let mut s = format!("{year} {}{cycle}", cs[3]);
    if cs[6].is_ascii_lowercase() {
        s.push('-');
        s.push( cs[6].to_ascii_uppercase());
    }
    Some(s)
}

/// the 12 character designation field of comet orbit records (cols 1-4 number, 5 orbit type, 6-12 packed provisional)
pub fn comet_designation_field (designation: &str)->Option<String> {
    if let Some(cap) = COMET_NUMBERED_RE.captures(designation) {
        let d = &cap[1];
        let (num, kind) = d.split_at( d.len()-1);
        let n: u32 = num.parse().ok()?;
        Some( format!("{n:04}{kind}       "))

    } else {
        let (kind, prov) = designation.split_once('/')?;
        if kind.len() != 1 { return None }
        Some( format!("    {kind}{}", pack_comet_provisional(prov)?))
    }
}

/// inverse of `comet_designation_field`
pub fn designation_from_comet_field (field: &str)->Option<String> {
    if field.len() < 5 || !field.is_ascii() { return None }

    let num = field[0..4].trim();
    let kind = &field[4..5];
    let prov = field.get(5..).unwrap_or("").trim();

    if !num.is_empty() {
        let n: u32 = num.parse().ok()?;
        Some( format!("{n}{kind}"))
    } else {
        Some( format!("{kind}/{}", unpack_comet_provisional(prov)?))
    }
}

/// packed designation (cols 1-7) for minor planet orbit records from a canonical designation
pub fn pack_minor_planet_designation (designation: &str)->Option<String> {
    if let Ok(n) = designation.parse::<u32>() {
        pack_number(n)
    } else {
        pack_provisional(designation)
    }
}

/// canonical designation from a packed minor planet designation
pub fn unpack_minor_planet_designation (packed: &str)->Option<String> {
    let packed = packed.trim();
    match packed.len() {
        5 => unpack_number(packed).map( |n| n.to_string()),
        7 => unpack_provisional(packed),
        _ => None
    }
}

/* #endregion packed numbers and provisional designations */
