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

/// MPC packed dates: century letter + 2 digit year + one base-62 character each for month and day.
/// e.g. 2019-07-04 <-> "K1974", 2019-04-27 <-> "K194R"
/// the codec is a pure character mapping - it does not check calendar correctness

const CENTURIES: [(char,i32); 3] = [ ('I', 18), ('J', 19), ('K', 20) ];

pub fn century_letter (century: i32) -> Option<char> {
    CENTURIES.iter().find( |(_,c)| *c == century).map( |(l,_)| *l)
}

pub fn century_from_letter (letter: char) -> Option<i32> {
    CENTURIES.iter().find( |(l,_)| *l == letter).map( |(_,c)| *c)
}

/// single character for values 0..35 ('0'..'9','A'..'Z')
pub fn encode_digit (v: u32) -> Option<char> {
    if v < 10 {
        char::from_digit( v, 10)
    } else if v < 36 {
        char::from_u32( 'A' as u32 + v - 10)
    } else {
        None
    }
}

/// inverse of `encode_digit`: digits parse as themselves, alphabetic chars as `ord(c) - ord('A') + 10`
pub fn decode_digit (c: char) -> Option<u32> {
    if c.is_ascii_digit() {
        c.to_digit(10)
    } else if c.is_ascii_uppercase() {
        Some( c as u32 - 'A' as u32 + 10)
    } else {
        None
    }
}

pub fn pack_date (year: i32, month: u32, day: u32) -> Option<String> {
    if year < 0 { return None }

    let mut s = String::with_capacity(5);
    s.push( century_letter( year / 100)?);
    s.push_str( &format!("{:02}", year % 100));
    s.push( encode_digit(month)?);
    s.push( encode_digit(day)?);
    Some(s)
}

pub fn unpack_date (packed: &str) -> Option<(i32,u32,u32)> {
    let cs: Vec<char> = packed.trim().chars().collect();
    if cs.len() != 5 { return None }

    let century = century_from_letter( cs[0])?;
    let yy = cs[1].to_digit(10)? * 10 + cs[2].to_digit(10)?;
    let month = decode_digit( cs[3])?;
    let day = decode_digit( cs[4])?;

    Some( (century * 100 + yy as i32, month, day) )
}

/// string field variant as used by catalog records ("2019","07","04")
pub fn pack_date_fields (year: &str, month: &str, day: &str) -> Option<String> {
    pack_date( year.trim().parse().ok()?, month.trim().parse().ok()?, day.trim().parse().ok()?)
}

/// inverse of `pack_date_fields`, month and day are zero padded to two digits
pub fn unpack_date_fields (packed: &str) -> Option<(String,String,String)> {
    unpack_date(packed).map( |(y,m,d)| (format!("{y}"), format!("{m:02}"), format!("{d:02}")))
}
