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

use std::{fs, io::Write};
use anyhow::Result;
use tracing::warn;
use celestial_common::define_cli;
use celestial_orbital::{catalog::load_catalog_file, convert::convert, CatalogFormat};

define_cli! { ARGS [about="validate a comet or minor planet catalog and convert it into another catalog format"] =
    from: String [help="format of input catalog (comet-orbit, minor-planet-orbit, comet-text, minor-planet-text)", short, long],
    to: String [help="format of output catalog", short, long],
    output: Option<String> [help="pathname of output file (stdout if not specified)", short, long],
    input: String [help="pathname of input catalog"]
}

fn main ()->Result<()> {
    tracing_subscriber::fmt::init();

    let source: CatalogFormat = ARGS.from.parse()?;
    let target: CatalogFormat = ARGS.to.parse()?;

    let catalog = load_catalog_file( &ARGS.input, source)?;
    let mut names: Vec<&String> = catalog.elements.keys().collect();
    names.sort();

    let mut lines: Vec<String> = Vec::with_capacity( names.len());
    let mut failed = 0;
    for name in names {
        let element = &catalog.elements[name];
        match convert( &element.raw_record, source, target) {
            Ok(line) => lines.push( line),
            Err(e) => {
                warn!("failed to convert {}: {}", name, e);
                failed += 1;
            }
        }
    }

    let mut text = lines.join("\n");
    text.push('\n');

    if let Some(path) = &ARGS.output {
        fs::write( path, text)?;
        eprintln!("wrote {} {} records to {} ({} rejected, {} not converted)", lines.len(), target, path, catalog.rejected, failed);
    } else {
        std::io::stdout().write_all( text.as_bytes())?;
    }

    Ok(())
}
