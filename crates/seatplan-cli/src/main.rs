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

//! `seatplan`: assigns a class roster to numbered seats.
//!
//! ```text
//! seatplan --seats 30 --names class.txt --reservations reserved.txt
//! seatplan -s 4 --name Alice --name Bob --reserve Alice:2 --format json
//! ```

mod args;
mod display;
mod logging;

use anyhow::Context;
use args::{Cli, OutputFormat};
use clap::Parser;
use seatplan_engine::engine::EngineBuilder;
use seatplan_model::loading::InputLoader;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(&cli) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::debug!(error = ?err, "seatplan failed");
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<String> {
    let input = cli
        .load_input(&InputLoader::new())
        .context("failed to load input")?;

    let builder = EngineBuilder::new()
        .with_optional_seed(cli.seed)
        .with_adjacency_avoidance(!cli.no_avoid_adjacent);
    tracing::info!(
        students = input.roster().len(),
        reservations = input.reservation_lines().len(),
        seats = cli.seats,
        seed = ?builder.seed(),
        "assigning seats"
    );

    let mut engine = builder.build();
    let outcome = engine
        .assign(&input, cli.seats)
        .context("could not assign seats")?;

    let rendered = match cli.format {
        OutputFormat::Text => display::render_text(&outcome),
        OutputFormat::Json => {
            let mut json = display::render_json(&outcome).context("failed to encode JSON")?;
            json.push('\n');
            json
        }
    };
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("seatplan").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_run_text_with_reservation() {
        let out = run(&cli(&[
            "-s", "4", "--name", "Alice", "--name", "Bob", "--reserve", "Alice:2", "--seed", "3",
        ]))
        .unwrap();
        assert!(out.starts_with("Seat Assignments\n\n"));
        assert!(out.contains("Alice  2"));
        assert!(out.contains("Bob"));
    }

    #[test]
    fn test_run_is_reproducible_with_seed() {
        let args = [
            "-s", "12", "--name", "A", "--name", "B", "--name", "C", "--name", "D", "--seed", "99",
            "--format", "json",
        ];
        assert_eq!(run(&cli(&args)).unwrap(), run(&cli(&args)).unwrap());
    }

    #[test]
    fn test_run_reports_seating_error() {
        let err = run(&cli(&["-s", "1", "--name", "Alice", "--name", "Bob"])).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.starts_with("could not assign seats: "));
        assert!(msg.contains("not enough seats"), "{msg}");
    }

    #[test]
    fn test_run_reports_missing_file() {
        let err = run(&cli(&["-s", "3", "--names", "/nonexistent/seatplan/names.txt"]))
            .unwrap_err();
        assert!(format!("{err:#}").starts_with("failed to load input: "));
    }
}
