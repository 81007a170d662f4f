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

use std::{fs::{self, File}, path::Path};
use anyhow::{anyhow, Result};
use tracing::info;
use celestial_common::{define_cli, datetime::{parse_optional_datetime_or, utc_now}};
use celestial_orbital::{
    catalog::{filter_by_apparent_magnitude, load_catalog, write_apparent_magnitudes},
    CatalogFormat,
};

define_cli! { ARGS [about="download a comet or minor planet catalog, validate it and optionally filter by apparent magnitude"] =
    format: String [help="catalog format (comet-orbit, minor-planet-orbit, comet-text, minor-planet-text)", short, long],
    magnitude: Option<f64> [help="keep only bodies at or below this apparent magnitude", short, long],
    magnitudes_file: Option<String> [help="pathname of CSV file to store computed apparent magnitudes", long],
    date: Option<String> [help="datetime spec for magnitude computation (if not specified use current datetime)", long],
    url: String [help="catalog URL"],
    output: String [help="pathname of output catalog"]
}

fn main ()->Result<()> {
    tracing_subscriber::fmt::init();

    let format: CatalogFormat = ARGS.format.parse()?;

    info!("fetching {}", ARGS.url);
    let response = reqwest::blocking::get( ARGS.url.as_str())?.error_for_status()?;
    let text = response.text()?;

    let catalog = load_catalog( &text, format);
    if catalog.elements.is_empty() {
        return Err( anyhow!("no valid {} records in {}", format, ARGS.url))
    }

    let elements = if let Some(ceiling) = ARGS.magnitude {
        let t = parse_optional_datetime_or( &ARGS.date, utc_now);
        let (kept, magnitudes) = filter_by_apparent_magnitude( &catalog.elements, &t, ceiling);

        if let Some(path) = &ARGS.magnitudes_file {
            write_apparent_magnitudes( File::create( path)?, &magnitudes)?;
        }
        kept
    } else {
        catalog.elements
    };

    let mut names: Vec<&String> = elements.keys().collect();
    names.sort();
    let mut out = String::new();
    for name in names {
        out.push_str( &elements[name].raw_record);
        out.push('\n');
    }
    fs::write( &ARGS.output, out)?;

    println!("stored {} {} records in {} ({} rejected)", elements.len(), format, ARGS.output, catalog.rejected);
    Ok(())
}
