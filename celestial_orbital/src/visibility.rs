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

use std::{collections::BTreeMap, fmt};
use chrono::{DateTime,Utc};
use serde::Serialize;
use celestial_common::{round_to_decimals, datetime::truncate_to_secs};
use crate::bodies::{BodyKind, DataTag};

/// reported angles are rounded to this many decimals
pub const ANGLE_DECIMALS: u32 = 2;

#[derive(Debug,Clone,PartialEq,Eq,PartialOrd,Ord,Hash,Serialize)]
pub struct VisibilityKey {
    pub kind: BodyKind,
    pub name: String,
    pub tag: DataTag,
}

#[derive(Debug,Clone,PartialEq,Serialize)]
#[serde(untagged)]
pub enum DataValue {
    Angle(f64),
    Date(DateTime<Utc>),
    Percent(u8),
    Text(String),
}

impl fmt::Display for DataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataValue::Angle(a) => write!(f, "{a:.2}"),
            DataValue::Date(d) => write!(f, "{}", d.format("%Y-%m-%d %H:%M:%S UTC")),
            DataValue::Percent(p) => write!(f, "{p}"),
            DataValue::Text(s) => write!(f, "{s}"),
        }
    }
}

/// flattened (kind,name,tag,value) row for tool output
#[derive(Debug,Clone,Serialize)]
pub struct VisibilityRow<'a> {
    pub kind: BodyKind,
    pub name: &'a str,
    pub tag: DataTag,
    pub value: &'a DataValue,
}

/// sparse (body kind, body name, data tag) -> value map. A body without keys is either not observable or
/// could not be computed
#[derive(Debug,Clone,Default,PartialEq)]
pub struct VisibilityResult {
    entries: BTreeMap<VisibilityKey,DataValue>,
}

impl VisibilityResult {
    pub fn new ()->Self { VisibilityResult::default() }

    pub fn insert (&mut self, kind: BodyKind, name: &str, tag: DataTag, value: DataValue) {
        self.entries.insert( VisibilityKey { kind, name: name.to_string(), tag }, value);
    }

    pub fn insert_angle (&mut self, kind: BodyKind, name: &str, tag: DataTag, degrees: f64) {
        self.insert( kind, name, tag, DataValue::Angle( round_to_decimals( degrees, ANGLE_DECIMALS)));
    }

    pub fn insert_date (&mut self, kind: BodyKind, name: &str, tag: DataTag, date: &DateTime<Utc>) {
        self.insert( kind, name, tag, DataValue::Date( truncate_to_secs( date)));
    }

    pub fn insert_percent (&mut self, kind: BodyKind, name: &str, tag: DataTag, percent: u8) {
        self.insert( kind, name, tag, DataValue::Percent( percent.min(100)));
    }

    pub fn insert_text (&mut self, kind: BodyKind, name: &str, tag: DataTag, text: impl ToString) {
        self.insert( kind, name, tag, DataValue::Text( text.to_string()));
    }

    pub fn get (&self, kind: BodyKind, name: &str, tag: DataTag)->Option<&DataValue> {
        self.entries.get( &VisibilityKey { kind, name: name.to_string(), tag })
    }

    pub fn contains (&self, kind: BodyKind, name: &str, tag: DataTag)->bool {
        self.get( kind, name, tag).is_some()
    }

    pub fn has_body (&self, kind: BodyKind, name: &str)->bool {
        self.entries.keys().any( |k| k.kind == kind && k.name == name)
    }

    /// all tags present for a body, in tag order
    pub fn tags_of (&self, kind: BodyKind, name: &str)->Vec<DataTag> {
        self.entries.keys().filter( |k| k.kind == kind && k.name == name).map( |k| k.tag).collect()
    }

    pub fn merge (&mut self, other: VisibilityResult) {
        self.entries.extend( other.entries);
    }

    pub fn len (&self)->usize { self.entries.len() }
    pub fn is_empty (&self)->bool { self.entries.is_empty() }

    pub fn iter (&self)->impl Iterator<Item=(&VisibilityKey,&DataValue)> {
        self.entries.iter()
    }

    pub fn rows (&self)->Vec<VisibilityRow<'_>> {
        self.entries.iter().map( |(k,v)| VisibilityRow { kind: k.kind, name: &k.name, tag: k.tag, value: v }).collect()
    }
}
