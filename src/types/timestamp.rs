// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fmt::Display;
use std::fmt::Formatter;

use chrono::DateTime;
use chrono::Local;
use chrono::NaiveDateTime;
use chrono::SubsecRound;

use crate::error::Fallible;

/// The rating log's timestamp format: local time, no offset, second
/// precision.
const FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub struct Timestamp(NaiveDateTime);

impl Timestamp {
    pub fn new(ts: NaiveDateTime) -> Self {
        Self(ts.trunc_subsecs(0))
    }

    pub fn now() -> Self {
        let now: DateTime<Local> = Local::now();
        Self::new(now.naive_local())
    }

    pub fn parse(s: &str) -> Fallible<Self> {
        let ts = NaiveDateTime::parse_from_str(s, FORMAT)?;
        Ok(Self(ts))
    }
}

impl Display for Timestamp {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format(FORMAT))
    }
}
