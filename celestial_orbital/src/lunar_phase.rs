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

/// the eight named phases of a lunation, in cycle order
#[derive(Debug,Clone,Copy,PartialEq,Eq,Hash,Serialize,Deserialize)]
pub enum LunarPhase {
    New,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    Full,
    WaningGibbous,
    ThirdQuarter,
    WaningCrescent,
}

impl LunarPhase {
    pub const CYCLE: [LunarPhase; 8] = [
        LunarPhase::New, LunarPhase::WaxingCrescent, LunarPhase::FirstQuarter, LunarPhase::WaxingGibbous,
        LunarPhase::Full, LunarPhase::WaningGibbous, LunarPhase::ThirdQuarter, LunarPhase::WaningCrescent
    ];

    /// classify from the integer illumination percentage and whether the next full moon comes before the next
    /// new moon (i.e. the moon is waxing). Illumination alone can't tell the two halves of the cycle apart
    pub fn from_illumination (illumination: u8, next_full_before_next_new: bool)->Self {
        let waxing = next_full_before_next_new;

        if illumination > 99 {
            LunarPhase::Full
        } else if illumination == 50 {
            if waxing { LunarPhase::FirstQuarter } else { LunarPhase::ThirdQuarter }
        } else if illumination < 1 {
            LunarPhase::New
        } else if illumination < 50 {
            if waxing { LunarPhase::WaxingCrescent } else { LunarPhase::WaningCrescent }
        } else {
            if waxing { LunarPhase::WaxingGibbous } else { LunarPhase::WaningGibbous }
        }
    }

    pub fn next (&self)->Self {
        let i = LunarPhase::CYCLE.iter().position( |p| p == self).unwrap_or(0);
        LunarPhase::CYCLE[ (i + 1) % LunarPhase::CYCLE.len()]
    }

    pub fn name (&self)->&'static str {
        match self {
            LunarPhase::New => "New Moon",
            LunarPhase::WaxingCrescent => "Waxing Crescent",
            LunarPhase::FirstQuarter => "First Quarter",
            LunarPhase::WaxingGibbous => "Waxing Gibbous",
            LunarPhase::Full => "Full Moon",
            LunarPhase::WaningGibbous => "Waning Gibbous",
            LunarPhase::ThirdQuarter => "Third Quarter",
            LunarPhase::WaningCrescent => "Waning Crescent",
        }
    }
}

impl fmt::Display for LunarPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
