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

use crate::error::Fallible;
use crate::error::fail;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Rating {
    Bad,
    Meh,
    Good,
}

impl Rating {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rating::Bad => "Bad",
            Rating::Meh => "Meh",
            Rating::Good => "Good",
        }
    }

    /// The character used for this rating in the rating log.
    pub fn as_char(&self) -> char {
        match self {
            Rating::Bad => 'B',
            Rating::Meh => 'M',
            Rating::Good => 'G',
        }
    }

    pub fn from_char(c: char) -> Fallible<Self> {
        match c {
            'B' => Ok(Rating::Bad),
            'M' => Ok(Rating::Meh),
            'G' => Ok(Rating::Good),
            _ => fail(format!("invalid rating: {c:?}")),
        }
    }
}

impl Display for Rating {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
