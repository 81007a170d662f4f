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

use std::fmt;
use serde::{Deserialize,Serialize};

/// a 1-based inclusive column range as used in catalog format documentation.
/// Internally this maps to the 0-based half-open byte range [first-1, last). A first column of 0 is
/// treated as 1, an inverted range is empty. Deserialized ranges have to satisfy 1 <= first <= last
#[derive(Debug,Clone,Copy,PartialEq,Eq,Serialize,Deserialize)]
#[serde(try_from = "ColumnSpec")]
pub struct Columns (pub usize, pub usize);

#[derive(Deserialize)]
#[serde(rename = "Columns")]
struct ColumnSpec (usize, usize);

impl TryFrom<ColumnSpec> for Columns {
    type Error = String;

    fn try_from (spec: ColumnSpec)->Result<Self,Self::Error> {
        let ColumnSpec(first,last) = spec;
        if first == 0 { return Err( format!("columns are 1-based: {first}-{last}")) }
        if last < first { return Err( format!("inverted column range: {first}-{last}")) }
        Ok( Columns(first,last))
    }
}

impl Columns {
    pub const fn new (first: usize, last: usize)->Self { Columns(first,last) }

    #[inline] pub fn start (&self)->usize { self.0.saturating_sub(1) }
    #[inline] pub fn end (&self)->usize { self.1.max( self.start()) }
    #[inline] pub fn width (&self)->usize { self.end() - self.start() }

    /// the raw column slice. Lines shorter than the range yield the available part (possibly empty)
    pub fn slice<'a> (&self, line: &'a str)->&'a str {
        let len = line.len();
        let start = self.start().min(len);
        let end = self.end().min(len);
        line.get( start..end).unwrap_or("")
    }

    /// the trimmed column slice
    #[inline]
    pub fn field<'a> (&self, line: &'a str)->&'a str {
        self.slice(line).trim()
    }

    #[inline]
    pub fn is_blank (&self, line: &str)->bool {
        self.field(line).is_empty()
    }
}

impl fmt::Display for Columns {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.0, self.1)
    }
}

/// builder for fixed-column text lines. Unset columns are blank
pub struct LineBuilder {
    buf: Vec<u8>
}

impl LineBuilder {
    pub fn new (len: usize)->Self {
        LineBuilder { buf: vec![b' '; len] }
    }

    fn put (&mut self, cols: Columns, s: &str) {
        let end = cols.end();
        if end > self.buf.len() { self.buf.resize( end, b' ') }

        let bytes = s.as_bytes();
        let n = bytes.len().min( cols.width());
        let start = cols.start();
        self.buf[start..start+n].copy_from_slice( &bytes[..n]);
    }

    /// right justify `s` within the column range (values are truncated from the right if too long)
    pub fn put_right (&mut self, cols: Columns, s: &str) {
        let w = cols.width();
        if s.len() >= w {
            self.put( cols, s)
        } else {
            self.put( cols, &format!("{:>w$}", s))
        }
    }

    pub fn put_left (&mut self, cols: Columns, s: &str) {
        self.put( cols, s)
    }

    /// the line with trailing blanks removed
    pub fn to_line (&self)->String {
        let s = String::from_utf8_lossy( &self.buf);
        s.trim_end().to_string()
    }
}
