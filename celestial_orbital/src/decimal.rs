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

use std::{fmt, str::FromStr};

/// a numeric catalog value that remembers how many decimal places it was given with, so that it can
/// be re-emitted with its original precision or with a layout specific one
#[derive(Debug,Clone,Copy,PartialEq)]
pub struct FixedDecimal {
    pub value: f64,
    pub places: u8,
}

impl FixedDecimal {
    pub fn new (value: f64, places: u8)->Self {
        FixedDecimal { value, places }
    }

    /// parse a (possibly padded) field such as "  0.2141" or "2000". Scientific notation is not supported
    pub fn parse (s: &str)->Option<Self> {
        let s = s.trim();
        if s.is_empty() { return None }

        let value: f64 = s.parse().ok()?;
        if !value.is_finite() { return None }

        let places = match s.find('.') {
            Some(i) => s[i+1..].chars().take_while( |c| c.is_ascii_digit()).count() as u8,
            None => 0
        };
        Some( FixedDecimal { value, places } )
    }

    /// same value rounded to the given number of places
    pub fn rounded (&self, places: u8)->Self {
        let f = 10f64.powi( places as i32);
        FixedDecimal { value: (self.value * f).round() / f, places }
    }

    /// right justified with our own precision
    pub fn format (&self, width: usize)->String {
        format!("{:>width$.prec$}", self.value, prec = self.places as usize)
    }

    /// right justified with an explicit precision
    pub fn format_with (&self, width: usize, places: u8)->String {
        format!("{:>width$.prec$}", self.value, prec = places as usize)
    }
}

impl fmt::Display for FixedDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.*}", self.places as usize, self.value)
    }
}

impl FromStr for FixedDecimal {
    type Err = String;
    fn from_str (s: &str)->Result<Self,Self::Err> {
        FixedDecimal::parse(s).ok_or_else( || format!("not a decimal number: '{s}'"))
    }
}

impl From<FixedDecimal> for f64 {
    fn from (d: FixedDecimal)->f64 { d.value }
}
