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
use std::str::FromStr;
use serde::{Deserialize,Serialize};

/// the kinds of bodies the ephemeris engine knows about. Each kind has its own computation path
#[derive(Debug,Clone,Copy,PartialEq,Eq,PartialOrd,Ord,Hash,Serialize,Deserialize)]
pub enum BodyKind {
    Moon,
    Sun,
    Planet,
    Star,
    Satellite,
    Comet,
    MinorPlanet,
}

impl BodyKind {
    pub const ALL: [BodyKind; 7] = [
        BodyKind::Moon, BodyKind::Sun, BodyKind::Planet, BodyKind::Star, BodyKind::Satellite, BodyKind::Comet, BodyKind::MinorPlanet
    ];

    pub fn label (&self)->&'static str {
        match self {
            BodyKind::Moon => "moon",
            BodyKind::Sun => "sun",
            BodyKind::Planet => "planet",
            BodyKind::Star => "star",
            BodyKind::Satellite => "satellite",
            BodyKind::Comet => "comet",
            BodyKind::MinorPlanet => "minor planet",
        }
    }
}

impl fmt::Display for BodyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug,Clone,Copy,PartialEq,Eq,PartialOrd,Ord,Hash,Serialize,Deserialize)]
pub enum Planet {
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

impl Planet {
    pub const ALL: [Planet; 8] = [
        Planet::Mercury, Planet::Venus, Planet::Mars, Planet::Jupiter, Planet::Saturn, Planet::Uranus, Planet::Neptune, Planet::Pluto
    ];

    pub fn name (&self)->&'static str {
        match self {
            Planet::Mercury => "Mercury",
            Planet::Venus => "Venus",
            Planet::Mars => "Mars",
            Planet::Jupiter => "Jupiter",
            Planet::Saturn => "Saturn",
            Planet::Uranus => "Uranus",
            Planet::Neptune => "Neptune",
            Planet::Pluto => "Pluto",
        }
    }
}

impl fmt::Display for Planet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Planet {
    type Err = String;
    fn from_str (s: &str)->Result<Self,Self::Err> {
        let s = s.trim();
        Planet::ALL.iter().find( |p| p.name().eq_ignore_ascii_case(s)).copied().ok_or_else( || format!("unknown planet '{s}'"))
    }
}

/// a fixed star with its J2000 equatorial coordinates
#[derive(Debug,Clone,Copy,PartialEq)]
pub struct Star {
    pub name: &'static str,
    pub ra: f64,  // degrees
    pub dec: f64, // degrees
    pub magnitude: f64,
}

const fn star (name: &'static str, ra: f64, dec: f64, magnitude: f64)->Star {
    Star { name, ra, dec, magnitude }
}

/// the brightest stars, J2000
pub static STARS: [Star; 22] = [
    star( "Sirius",          101.287155, -16.716116, -1.46),
    star( "Canopus",          95.987958, -52.695661, -0.74),
    star( "Rigil Kentaurus", 219.902066, -60.833975, -0.27),
    star( "Arcturus",        213.915300,  19.182409, -0.05),
    star( "Vega",            279.234735,  38.783689,  0.03),
    star( "Capella",          79.172328,  45.997991,  0.08),
    star( "Rigel",            78.634467,  -8.201638,  0.13),
    star( "Procyon",         114.825498,   5.224988,  0.34),
    star( "Achernar",         24.428523, -57.236753,  0.46),
    star( "Betelgeuse",       88.792939,   7.407064,  0.50),
    star( "Hadar",           210.955856, -60.373035,  0.61),
    star( "Altair",          297.695827,   8.868321,  0.77),
    star( "Acrux",           186.649563, -63.099093,  0.77),
    star( "Aldebaran",        68.980163,  16.509302,  0.85),
    star( "Antares",         247.351915, -26.432003,  0.96),
    star( "Spica",           201.298247, -11.161319,  0.97),
    star( "Pollux",          116.328958,  28.026199,  1.14),
    star( "Fomalhaut",       344.412693, -29.622237,  1.16),
    star( "Deneb",           310.357980,  45.280339,  1.25),
    star( "Mimosa",          191.930263, -59.688764,  1.25),
    star( "Regulus",         152.092962,  11.967209,  1.35),
    star( "Polaris",          37.954561,  89.264109,  1.98),
];

pub fn find_star (name: &str)->Option<&'static Star> {
    let name = name.trim();
    STARS.iter().find( |s| s.name.eq_ignore_ascii_case(name))
}

/// the vocabulary of values the engine reports per body
#[derive(Debug,Clone,Copy,PartialEq,Eq,PartialOrd,Ord,Hash,Serialize,Deserialize)]
pub enum DataTag {
    Altitude,
    Azimuth,
    RiseDate,
    SetDate,
    RiseAzimuth,
    SetAzimuth,
    Phase,
    IlluminationPercentage,
    BrightLimbAngle,
    EclipseDate,
    EclipseType,
    EclipseLatitude,
    EclipseLongitude,
    Dawn,
    Dusk,
    Equinox,
    Solstice,
    FirstQuarter,
    FullMoon,
    ThirdQuarter,
    NewMoon,
}

/// display names, owned here so that presentation layers look them up instead of keeping their own copies
pub static DATA_TAG_NAMES: [(DataTag, &str); 21] = [
    (DataTag::Altitude,               "Altitude"),
    (DataTag::Azimuth,                "Azimuth"),
    (DataTag::RiseDate,               "Rise Date"),
    (DataTag::SetDate,                "Set Date"),
    (DataTag::RiseAzimuth,            "Rise Azimuth"),
    (DataTag::SetAzimuth,             "Set Azimuth"),
    (DataTag::Phase,                  "Phase"),
    (DataTag::IlluminationPercentage, "Illumination (%)"),
    (DataTag::BrightLimbAngle,        "Bright Limb Angle"),
    (DataTag::EclipseDate,            "Eclipse Date"),
    (DataTag::EclipseType,            "Eclipse Type"),
    (DataTag::EclipseLatitude,        "Eclipse Latitude"),
    (DataTag::EclipseLongitude,       "Eclipse Longitude"),
    (DataTag::Dawn,                   "Dawn"),
    (DataTag::Dusk,                   "Dusk"),
    (DataTag::Equinox,                "Equinox"),
    (DataTag::Solstice,               "Solstice"),
    (DataTag::FirstQuarter,           "First Quarter"),
    (DataTag::FullMoon,               "Full Moon"),
    (DataTag::ThirdQuarter,           "Third Quarter"),
    (DataTag::NewMoon,                "New Moon"),
];

impl DataTag {
    pub fn display_name (&self)->&'static str {
        DATA_TAG_NAMES.iter().find( |(t,_)| t == self).map( |(_,n)| *n).unwrap_or("?")
    }
}

impl fmt::Display for DataTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
