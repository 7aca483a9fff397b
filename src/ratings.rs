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

use std::fs::OpenOptions;
use std::fs::read_to_string;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use crate::error::ErrorReport;
use crate::error::Fallible;
use crate::error::fail;
use crate::types::rating::Rating;
use crate::types::timestamp::Timestamp;

/// The name of the rating log inside the drill directory.
pub const RATINGS_FILE: &str = "ratings.log";

/// One line of the rating log.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct RatingRecord {
    pub timestamp: Timestamp,
    pub card_index: usize,
    pub rating: Rating,
}

impl RatingRecord {
    pub fn to_line(&self) -> String {
        format!(
            "{}|{}|{}\n",
            self.timestamp,
            self.card_index,
            self.rating.as_char()
        )
    }

    pub fn parse(line: &str) -> Fallible<Self> {
        let mut fields = line.trim_end_matches(['\r', '\n']).split('|');
        let (Some(timestamp), Some(card_index), Some(rating), None) =
            (fields.next(), fields.next(), fields.next(), fields.next())
        else {
            return fail(format!("malformed rating line: {line:?}"));
        };
        let mut chars = rating.chars();
        let rating = match (chars.next(), chars.next()) {
            (Some(c), None) => Rating::from_char(c)?,
            _ => return fail(format!("invalid rating: {rating:?}")),
        };
        Ok(Self {
            timestamp: Timestamp::parse(timestamp)?,
            card_index: card_index.parse()?,
            rating,
        })
    }
}

/// An append-only log of ratings.
///
/// The file is opened, written, synced, and closed on every append. Nothing
/// is held open between ratings.
#[derive(Clone, Debug)]
pub struct RatingLog {
    path: PathBuf,
}

impl RatingLog {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// The log at its conventional location inside `directory`.
    pub fn in_directory(directory: &Path) -> Self {
        Self::new(directory.join(RATINGS_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append a record, creating the file if needed.
    ///
    /// Callers that must not be interrupted by I/O trouble are free to
    /// discard the result.
    pub fn append(&self, record: &RatingRecord) -> Fallible<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(record.to_line().as_bytes())?;
        file.sync_all()?;
        Ok(())
    }
}

/// Read every record in the log at `path`.
pub fn read_records(path: &Path) -> Fallible<Vec<RatingRecord>> {
    let content = read_to_string(path)?;
    let mut records = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let record = RatingRecord::parse(line).map_err(|e| {
            ErrorReport::new(format!("{}:{}: {}", path.display(), idx + 1, e.message()))
        })?;
        records.push(record);
    }
    Ok(records)
}
