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

use std::{collections::HashMap, fs, path::Path};
use chrono::{DateTime,Utc};
use serde::{Deserialize,Serialize};
use tracing::{debug,info,warn};
use celestial_common::datetime::julian_date;
use crate::{
    config::{AsteroidCatalogLayout, EphemerisConfig},
    designation::normalize_name,
    errors::{CelestialError, Result},
    kepler::earth_heliocentric,
    magnitude::apparent_magnitude,
    orbital_element::{CatalogFormat, OrbitalElement},
};

/// MPCORB files start with a free-form header that ends with a dashed separator line
const HEADER_SEPARATOR: &str = "-----";

/// a pre-computed apparent magnitude. The value stays a string so that it keeps its catalog precision
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct ApparentMagnitudeRecord {
    pub name: String,
    pub apparent_magnitude: String,
}

impl ApparentMagnitudeRecord {
    pub fn magnitude (&self)->Option<f64> {
        self.apparent_magnitude.trim().parse().ok()
    }
}

/// result of loading a catalog. The map is always built from scratch
#[derive(Debug,Default)]
pub struct Catalog {
    pub elements: HashMap<String,OrbitalElement>,
    pub rejected: usize,
}

/// validate all records of a catalog text. Invalid records are logged and skipped, they never abort the load
pub fn load_catalog (text: &str, format: CatalogFormat)->Catalog {
    let mut catalog = Catalog::default();

    let body = if format == CatalogFormat::MinorPlanetOrbitRecord {
        skip_header( text)
    } else {
        text
    };

    for line in body.lines() {
        let line = line.trim_end_matches( ['\r', '\n']);
        if line.trim().is_empty() || (format.is_free_text() && line.starts_with('#')) { continue }

        match OrbitalElement::parse( line, format) {
            Ok(e) => {
                if let Some(prev) = catalog.elements.insert( e.name.clone(), e) {
                    debug!("duplicate catalog entry {} replaced", prev.name);
                }
            }
            Err(_) => catalog.rejected += 1 // already logged
        }
    }

    info!("loaded {} {} records ({} rejected)", catalog.elements.len(), format, catalog.rejected);
    catalog
}

pub fn load_catalog_file (path: impl AsRef<Path>, format: CatalogFormat)->Result<Catalog> {
    let text = fs::read_to_string( path)?;
    Ok( load_catalog( &text, format))
}

fn skip_header (text: &str)->&str {
    if let Some(pos) = text.find( &format!("\n{HEADER_SEPARATOR}")) {
        let rest = &text[pos+1..];
        match rest.find('\n') {
            Some(eol) => &rest[eol+1..],
            None => ""
        }
    } else if text.starts_with( HEADER_SEPARATOR) {
        text.split_once('\n').map( |(_,rest)| rest).unwrap_or("")
    } else {
        text
    }
}

#[derive(Debug,Deserialize)]
struct RawMagnitude {
    name: String,
    magnitude: String,
}

/// read "name,magnitude" rows into a map keyed by upper-cased name. Lines starting with '#' are comments
pub fn load_apparent_magnitudes (reader: impl std::io::Read)->Result<HashMap<String,ApparentMagnitudeRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .comment(Some(b'#'))
        .has_headers(false)
        .trim( csv::Trim::All)
        .from_reader(reader);

    let mut map = HashMap::new();
    for res in csv_reader.deserialize::<RawMagnitude>() {
        let raw = res?;
        let name = normalize_name( &raw.name);
        if name.is_empty() { continue }
        map.insert( name.clone(), ApparentMagnitudeRecord { name, apparent_magnitude: raw.magnitude });
    }

    Ok(map)
}

/// write magnitude records in the format read by `load_apparent_magnitudes`
pub fn write_apparent_magnitudes (writer: impl std::io::Write, records: &HashMap<String,ApparentMagnitudeRecord>)->Result<()> {
    let mut wtr = csv::WriterBuilder::new().has_headers(false).from_writer(writer);
    let mut names: Vec<&String> = records.keys().collect();
    names.sort();

    for name in names {
        let r = &records[name];
        wtr.write_record( &[r.name.as_str(), r.apparent_magnitude.as_str()])?;
    }
    wtr.flush()?;
    Ok(())
}

/// a record of the fixed width asteroid catalog variant
#[derive(Debug,Clone,PartialEq)]
pub struct AsteroidCatalogRecord {
    pub name: String,
    pub absolute_magnitude: f64,
    pub observations: u32,
}

impl AsteroidCatalogRecord {
    pub fn parse (line: &str, layout: &AsteroidCatalogLayout)->Option<Self> {
        let name = layout.name.field(line);
        if name.is_empty() { return None }

        let absolute_magnitude: f64 = layout.absolute_magnitude.field(line).parse().ok()?;
        let observations: u32 = layout.observation_count.field(line).parse().ok()?;

        Some( AsteroidCatalogRecord { name: normalize_name(name), absolute_magnitude, observations } )
    }

    pub fn is_well_observed (&self, layout: &AsteroidCatalogLayout)->bool {
        self.observations >= layout.min_observations
    }
}

/// the standalone use of the magnitude model: propagate all elements to `t` and keep the ones at or below
/// the (clamped) magnitude ceiling, together with their computed magnitudes. Elements whose magnitude is
/// undefined at `t` are dropped
pub fn filter_by_apparent_magnitude (elements: &HashMap<String,OrbitalElement>, t: &DateTime<Utc>, ceiling: f64)
    -> (HashMap<String,OrbitalElement>, HashMap<String,ApparentMagnitudeRecord>)
{
    let ceiling = ceiling.clamp( crate::config::MIN_MAGNITUDE, crate::config::MAX_MAGNITUDE);
    let jd = julian_date(t);
    let mut kept = HashMap::new();
    let mut magnitudes = HashMap::new();

    let Some(earth) = earth_heliocentric( jd) else {
        warn!("no earth position at {}", t);
        return (kept, magnitudes)
    };

    for (name, element) in elements {
        let Ok(record) = element.record() else { continue };
        let Some(helio) = record.kepler_orbit().heliocentric_ecliptic( jd) else {
            debug!("no Kepler solution for {}", name);
            continue
        };

        let sun_distance = helio.norm();
        let earth_distance = (helio - earth).norm();

        match apparent_magnitude( &record.magnitude_model(), sun_distance, earth_distance, earth.norm()) {
            Some(m) if m <= ceiling => {
                magnitudes.insert( name.clone(), ApparentMagnitudeRecord { name: name.clone(), apparent_magnitude: format!("{m:.2}") });
                kept.insert( name.clone(), element.clone());
            }
            Some(_) => {}
            None => debug!("undefined magnitude for {}", name)
        }
    }

    (kept, magnitudes)
}
