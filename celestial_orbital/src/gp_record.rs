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
use serde::{Deserialize,Serialize};
use tracing::{warn,debug};
use crate::errors::{Result, tle_error};

/// what to do with satellites whose catalog number does not fit into the 5 digit TLE field
#[derive(Debug,Clone,Copy,PartialEq,Eq,Serialize,Deserialize)]
pub enum CatalogNumberPolicy {
    Drop,
    /// rewrite the number to "00000". This is lossy - such records can be propagated but their catalog
    /// number must not be used as identity
    ClampToSentinel,
}

pub const SENTINEL_CATALOG_NUMBER: &str = "00000";

/// a satellite element set as it is kept in catalog maps. The TLE lines are the propagable state, which the
/// ephemeris backends turn into their own propagator objects
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct GeneralPerturbationRecord {
    pub name: String,
    pub catalog_number: u32,
    pub international_designator: String,
    pub line1: String,
    pub line2: String,
    pub is_clamped: bool,
}

impl GeneralPerturbationRecord {
    /// the catalog number if it can be used to identify the satellite
    pub fn display_catalog_number (&self)->Option<u32> {
        if self.is_clamped { None } else { Some(self.catalog_number) }
    }
}

/// TLE line checksum: sum of all digits plus one for each '-', modulo 10
pub fn tle_checksum (line: &str)->u32 {
    line.chars().take(68).map( |c| match c {
        '0'..='9' => c.to_digit(10).unwrap_or(0),
        '-' => 1,
        _ => 0
    }).sum::<u32>() % 10
}

fn with_checksum (line: &str)->String {
    let body: String = line.chars().take(68).collect();
    let body = format!("{body:<68}");
    let cs = tle_checksum( &body);
    format!("{body}{cs}")
}

/// decode the 5 character catalog number field, which can be in alpha-5 form ("A0001" == 100001).
/// I and O are not used as leading letters
fn decode_catalog_number (field: &str)->Option<u32> {
    let field = field.trim();
    let mut cs = field.chars();
    let first = cs.next()?;

    if first.is_ascii_digit() {
        field.parse().ok()
    } else if first.is_ascii_uppercase() && first != 'I' && first != 'O' {
        let mut v = first as u32 - 'A' as u32 + 10;
        if first > 'I' { v -= 1 }
        if first > 'O' { v -= 1 }
        let rest: u32 = cs.as_str().parse().ok()?;
        Some( v * 10000 + rest)
    } else {
        None
    }
}

fn replace_catalog_number (line: &str)->String {
    let mut s = String::with_capacity( line.len());
    s.push_str( line.get(0..2).unwrap_or("1 "));
    s.push_str( SENTINEL_CATALOG_NUMBER);
    s.push_str( line.get(7..).unwrap_or(""));
    with_checksum( &s)
}

/// parse TLE text with optional name lines (2 or 3 line format). Records that don't fit the catalog number policy
/// or are otherwise malformed are logged and skipped
pub fn parse_tles (text: &str, policy: CatalogNumberPolicy)->Vec<GeneralPerturbationRecord> {
    let lines: Vec<&str> = text.lines().map( |l| l.trim_end()).filter( |l| !l.trim().is_empty()).collect();
    let mut records = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let (name, l1, l2) = if lines[i].starts_with("1 ") && i+1 < lines.len() && lines[i+1].starts_with("2 ") {
            i += 2;
            (None, lines[i-2], lines[i-1])
        } else if i+2 < lines.len() && lines[i+1].starts_with("1 ") && lines[i+2].starts_with("2 ") {
            i += 3;
            (Some( lines[i-3]), lines[i-2], lines[i-1])
        } else {
            warn!("skipping unexpected TLE line: {}", lines[i]);
            i += 1;
            continue
        };

        match parse_tle( name, l1, l2, policy) {
            Ok(Some(rec)) => records.push( rec),
            Ok(None) => debug!("dropped TLE with out-of-range catalog number: {}", l1),
            Err(e) => warn!("skipping TLE: {e}")
        }
    }

    records
}

/// parse a single element set. Returns None if the record was dropped because of its catalog number
pub fn parse_tle (name: Option<&str>, line1: &str, line2: &str, policy: CatalogNumberPolicy)->Result<Option<GeneralPerturbationRecord>> {
    if line1.len() < 68 || line2.len() < 68 { return Err( tle_error!("TLE lines too short")) }

    let field = line1.get(2..7).ok_or( tle_error!("no catalog number"))?;
    let catalog_number = decode_catalog_number( field).ok_or( tle_error!("invalid catalog number '{}'", field))?;
    let international_designator = line1.get(9..17).unwrap_or("").trim().to_string();

    let name = match name {
        Some(n) => n.trim_start_matches("0 ").trim().to_string(),
        None => format!("{catalog_number}")
    };

    if catalog_number <= 99999 {
        Ok( Some( GeneralPerturbationRecord {
            name, catalog_number, international_designator, line1: line1.to_string(), line2: line2.to_string(), is_clamped: false
        }))
    } else {
        match policy {
            CatalogNumberPolicy::Drop => Ok(None),
            CatalogNumberPolicy::ClampToSentinel => {
                warn!("clamping catalog number {} of {} - not usable for identification", catalog_number, name);
                Ok( Some( GeneralPerturbationRecord {
                    name, catalog_number: 0, international_designator,
                    line1: replace_catalog_number( line1), line2: replace_catalog_number( line2),
                    is_clamped: true
                }))
            }
        }
    }
}

/// a freshly built satellite map keyed by upper-cased name
pub fn load_tle_catalog (text: &str, policy: CatalogNumberPolicy)->HashMap<String,GeneralPerturbationRecord> {
    parse_tles( text, policy).into_iter().map( |r| (crate::designation::normalize_name( &r.name), r)).collect()
}
