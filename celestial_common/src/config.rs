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

use std::{fs, path::{Path,PathBuf}};
use serde::de::DeserializeOwned;
use crate::define_error;

define_error!{ pub ConfigError =
    IOError( #[from] std::io::Error ) : "config IO error: {0}",
    RonError( #[from] ron::error::SpannedError ) : "config syntax error: {0}",
    NotFound( String ) : "config file not found: {0}"
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// environment variable that can point to a directory with config files
pub const CONFIG_DIR_ENV: &'static str = "CELESTIAL_CONFIG_DIR";

/// find a config file by name. Absolute and existing relative paths are used as is, otherwise we look
/// into the directory specified by `CELESTIAL_CONFIG_DIR` and then into "./configs"
pub fn find_config_file (filename: &str) -> Option<PathBuf> {
    let path = Path::new(filename);
    if path.is_file() { return Some(path.to_path_buf()) }
    if path.is_absolute() { return None }

    if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
        let p = Path::new(&dir).join(filename);
        if p.is_file() { return Some(p) }
    }

    let p = Path::new("configs").join(filename);
    if p.is_file() { Some(p) } else { None }
}

/// deserialize a RON config from a string
pub fn config_from_str<C> (s: &str) -> Result<C> where C: DeserializeOwned {
    Ok( ron::from_str(s)? )
}

/// locate and deserialize a RON config file
pub fn load_config<C> (filename: &str) -> Result<C> where C: DeserializeOwned {
    let path = find_config_file(filename).ok_or_else(|| ConfigError::NotFound(filename.to_string()))?;
    let s = fs::read_to_string(&path)?;
    config_from_str(&s)
}

/// load a config if the file exists, otherwise fall back to `C::default()`. Syntax errors are still reported
pub fn load_config_or_default<C> (filename: &str) -> Result<C> where C: DeserializeOwned + Default {
    match load_config(filename) {
        Err(ConfigError::NotFound(_)) => Ok( C::default() ),
        other => other
    }
}
