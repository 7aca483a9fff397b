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

use std::env::current_dir;
use std::path::PathBuf;

use clap::Parser;

use crate::cmd::stats::StatsFormat;
use crate::cmd::stats::print_rating_stats;
use crate::drill::server::start_server;
use crate::error::Fallible;
use crate::error::fail;

#[derive(Parser)]
#[command(version, about, long_about = None)]
enum Command {
    /// Drill multiplication facts in the browser.
    Drill {
        /// Directory to keep the rating log in. Defaults to the current directory.
        directory: Option<String>,
        /// The port to serve the drill page on.
        #[arg(long, default_value_t = 8000)]
        port: u16,
        /// Don't open the drill page in the browser.
        #[arg(long)]
        no_open: bool,
    },
    /// Summarize the rating log.
    Stats {
        /// Directory containing the rating log. Defaults to the current directory.
        directory: Option<String>,
        /// Output format.
        #[arg(long, default_value_t = StatsFormat::Text)]
        format: StatsFormat,
    },
}

pub async fn entrypoint() -> Fallible<()> {
    let cli: Command = Command::parse();
    match cli {
        Command::Drill {
            directory,
            port,
            no_open,
        } => {
            let directory = resolve_directory(directory)?;
            start_server(directory, port, !no_open).await
        }
        Command::Stats { directory, format } => {
            let directory = resolve_directory(directory)?;
            print_rating_stats(&directory, format)
        }
    }
}

fn resolve_directory(directory: Option<String>) -> Fallible<PathBuf> {
    let directory: PathBuf = match directory {
        Some(dir) => PathBuf::from(dir),
        None => current_dir()?,
    };
    if !directory.exists() {
        return fail("directory does not exist.");
    }
    Ok(directory.canonicalize()?)
}
