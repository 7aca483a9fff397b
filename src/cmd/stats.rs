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

use std::collections::HashSet;
use std::fmt::Display;
use std::fmt::Formatter;
use std::path::Path;

use clap::ValueEnum;
use serde::Serialize;

use crate::error::Fallible;
use crate::error::fail;
use crate::ratings::RATINGS_FILE;
use crate::ratings::RatingRecord;
use crate::ratings::read_records;
use crate::types::rating::Rating;

#[derive(ValueEnum, Clone)]
pub enum StatsFormat {
    /// Plain text output.
    Text,
    /// JSON output.
    Json,
}

impl Display for StatsFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StatsFormat::Text => write!(f, "text"),
            StatsFormat::Json => write!(f, "json"),
        }
    }
}

pub fn print_rating_stats(directory: &Path, format: StatsFormat) -> Fallible<()> {
    let path = directory.join(RATINGS_FILE);
    if !path.exists() {
        return fail(format!("no {RATINGS_FILE} in {}.", directory.display()));
    }
    let records = read_records(&path)?;
    log::debug!("Read {} ratings from {}", records.len(), path.display());
    let stats = Stats::from_records(&records);
    match format {
        StatsFormat::Text => {
            print!("{}", stats.to_text());
        }
        StatsFormat::Json => {
            let stats_json = serde_json::to_string_pretty(&stats)?;
            println!("{}", stats_json);
        }
    }
    Ok(())
}

#[derive(Serialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    rating_count: usize,
    bad_count: usize,
    meh_count: usize,
    good_count: usize,
    distinct_card_count: usize,
    first_rated_at: Option<String>,
    last_rated_at: Option<String>,
}

impl Stats {
    fn from_records(records: &[RatingRecord]) -> Self {
        let count = |rating: Rating| records.iter().filter(|r| r.rating == rating).count();
        let cards: HashSet<usize> = records.iter().map(|r| r.card_index).collect();
        let first = records.iter().map(|r| r.timestamp).min();
        let last = records.iter().map(|r| r.timestamp).max();
        Self {
            rating_count: records.len(),
            bad_count: count(Rating::Bad),
            meh_count: count(Rating::Meh),
            good_count: count(Rating::Good),
            distinct_card_count: cards.len(),
            first_rated_at: first.map(|ts| ts.to_string()),
            last_rated_at: last.map(|ts| ts.to_string()),
        }
    }

    fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("Ratings: {}\n", self.rating_count));
        out.push_str(&format!("  Bad:  {}\n", self.bad_count));
        out.push_str(&format!("  Meh:  {}\n", self.meh_count));
        out.push_str(&format!("  Good: {}\n", self.good_count));
        out.push_str(&format!("Distinct cards: {}\n", self.distinct_card_count));
        if let (Some(first), Some(last)) = (&self.first_rated_at, &self.last_rated_at) {
            out.push_str(&format!("From {first} to {last}\n"));
        }
        out
    }
}
