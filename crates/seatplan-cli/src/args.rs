// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Command-line arguments.

use clap::{Parser, ValueEnum};
use seatplan_model::{
    loading::{InputLoader, LoadError},
    roster::NormalizedInput,
};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "seatplan")]
#[command(version)]
#[command(about = "Assign students to numbered seats, honouring reserved seats")]
#[command(long_about = None)]
pub struct Cli {
    /// Total number of seats, numbered 1 through N
    #[arg(short = 's', long = "seats", env = "SEATPLAN_SEATS")]
    pub seats: u32,

    /// File with one student name per line
    #[arg(short = 'n', long = "names", value_name = "FILE", conflicts_with = "name")]
    pub names_file: Option<PathBuf>,

    /// A student name; may be repeated
    #[arg(long = "name", value_name = "NAME")]
    pub name: Vec<String>,

    /// File with one `name:seat` reservation per line
    #[arg(
        short = 'r',
        long = "reservations",
        value_name = "FILE",
        conflicts_with = "reserve"
    )]
    pub reservations_file: Option<PathBuf>,

    /// A `name:seat` reservation; may be repeated
    #[arg(long = "reserve", value_name = "NAME:SEAT")]
    pub reserve: Vec<String>,

    /// Seed for the random draw; omit for a fresh draw every run
    #[arg(long, env = "SEATPLAN_SEED")]
    pub seed: Option<u64>,

    /// Treat seats next to reservations like any other free seat
    #[arg(long)]
    pub no_avoid_adjacent: bool,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Two-column listing sorted by name
    Text,
    /// Machine-readable JSON
    Json,
}

impl Cli {
    /// Collects roster and reservation lines from files or inline arguments.
    pub fn load_input(&self, loader: &InputLoader) -> Result<NormalizedInput, LoadError> {
        let names = match &self.names_file {
            Some(path) => loader.lines_from_path(path)?,
            None => self.name.clone(),
        };
        let reservations = match &self.reservations_file {
            Some(path) => loader.lines_from_path(path)?,
            None => self.reserve.clone(),
        };
        Ok(NormalizedInput::from_lines(names, reservations))
    }
}
