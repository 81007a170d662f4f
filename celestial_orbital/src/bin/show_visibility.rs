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

use std::{collections::HashMap, fs::{self, File}};
use anyhow::{anyhow, Result};
use celestial_common::{define_cli, datetime::{parse_optional_datetime_or, utc_now}};
use celestial_orbital::{
    backend::{AnalyticBackend, EphemerisBackend, SatkitBackend},
    catalog::{load_apparent_magnitudes, load_catalog_file, ApparentMagnitudeRecord},
    gp_record::load_tle_catalog,
    load_ephemeris_config,
    BodySelection, Catalogs, CatalogFormat, EphemerisEngine, Observer, Planet,
};

define_cli! { ARGS [about="show rise/set, position, phase and eclipse data of selected celestial bodies for an observer"] =
    lat: f64 [help="observer latitude [deg]", long, allow_hyphen_values=true],
    lon: f64 [help="observer longitude [deg]", long, allow_hyphen_values=true],
    elevation: f64 [help="observer elevation [m]", long, default_value="0"],
    date: Option<String> [help="datetime spec (if not specified use current datetime)", short, long],
    backend: String [help="ephemeris backend (satkit or analytic)", short, long, default_value="satkit"],

    moon: bool [help="compute the moon", long],
    sun: bool [help="compute the sun", long],
    planets: Vec<String> [help="comma separated planet names", long, value_delimiter=','],
    stars: Vec<String> [help="comma separated star names", long, value_delimiter=','],
    satellites: Vec<String> [help="comma separated satellite names", long, value_delimiter=','],
    comets: Vec<String> [help="comma separated comet designations", long, value_delimiter=','],
    minor_planets: Vec<String> [help="comma separated minor planet designations", long, value_delimiter=','],

    comet_catalog: Option<String> [help="pathname of comet catalog", long],
    comet_format: String [help="format of comet catalog", long, default_value="comet-orbit"],
    minor_planet_catalog: Option<String> [help="pathname of minor planet catalog", long],
    minor_planet_format: String [help="format of minor planet catalog", long, default_value="minor-planet-orbit"],
    comet_magnitudes: Option<String> [help="pathname of comet apparent magnitude CSV", long],
    minor_planet_magnitudes: Option<String> [help="pathname of minor planet apparent magnitude CSV", long],
    tles: Option<String> [help="pathname of 3-line TLE file", long],

    magnitude: Option<f64> [help="apparent magnitude ceiling for comets and minor planets (config default if not specified)", short, long],
    json: bool [help="print result as JSON", long]
}

fn main ()->Result<()> {
    tracing_subscriber::fmt::init();

    let config = load_ephemeris_config()?;
    let observer = Observer::new( ARGS.lat, ARGS.lon, ARGS.elevation);
    let t = parse_optional_datetime_or( &ARGS.date, utc_now);

    let backend: Box<dyn EphemerisBackend> = match ARGS.backend.as_str() {
        "satkit" => Box::new( SatkitBackend::new()),
        "analytic" => Box::new( AnalyticBackend::new()),
        other => return Err( anyhow!("unknown backend '{other}'"))
    };

    let planets = ARGS.planets.iter().map( |p| p.parse::<Planet>()).collect::<std::result::Result<Vec<Planet>,String>>().map_err( |e| anyhow!(e))?;
    let selection = BodySelection {
        moon: ARGS.moon,
        sun: ARGS.sun,
        planets,
        stars: ARGS.stars.clone(),
        satellites: ARGS.satellites.clone(),
        comets: ARGS.comets.clone(),
        minor_planets: ARGS.minor_planets.clone(),
    };
    if selection.is_empty() {
        return Err( anyhow!("no bodies selected"))
    }

    let mut catalogs = Catalogs::default();
    if let Some(path) = &ARGS.comet_catalog {
        catalogs.comets = load_catalog_file( path, ARGS.comet_format.parse::<CatalogFormat>()?)?.elements;
    }
    if let Some(path) = &ARGS.minor_planet_catalog {
        catalogs.minor_planets = load_catalog_file( path, ARGS.minor_planet_format.parse::<CatalogFormat>()?)?.elements;
    }
    if let Some(path) = &ARGS.comet_magnitudes {
        catalogs.comet_magnitudes = load_apparent_magnitudes( File::open( path)?)?;
    }
    if let Some(path) = &ARGS.minor_planet_magnitudes {
        catalogs.minor_planet_magnitudes = load_apparent_magnitudes( File::open( path)?)?;
    }
    if let Some(path) = &ARGS.tles {
        catalogs.satellites = load_tle_catalog( &fs::read_to_string( path)?, config.catalog_number_policy);
    }

    let engine = EphemerisEngine::new( backend.as_ref(), &config);
    let ceiling = ARGS.magnitude.or( config.magnitude_ceiling);
    let result = engine.compute( &observer, &t, &selection, &catalogs, ceiling);

    if ARGS.json {
        println!("{}", serde_json::to_string_pretty( &result.rows())?);
    } else {
        println!("visibility at {} for {:.4},{:.4} ({} backend):", t, observer.latitude, observer.longitude, backend.name());
        for (key, value) in result.iter() {
            println!("  {:<12} {:<24} {:<18} {}", key.kind.to_string(), key.name, key.tag.to_string(), value);
        }
    }

    Ok(())
}
