use std::io::Write;
use std::path::PathBuf;

use eyre::{Context, Result};
use serde::Serialize;
use twistysim_core::prelude::*;

use crate::prefs::{OutputFormat, Prefs};

/// Scrambler and simulator for WCA twisty puzzles
#[derive(Debug, clap::Parser)]
#[command(version)]
pub(crate) struct Args {
    /// Preferences file to use instead of the one in the config directory.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    /// Print output as JSON.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub subcommand: Subcommand,
}

#[derive(clap::Subcommand, Debug)]
pub(crate) enum Subcommand {
    /// List every event ID and its puzzle.
    Events,
    /// Generate scrambles.
    Scramble {
        /// Event ID (such as `333` or `SQ1`).
        event: Option<String>,
        /// Seed for reproducible scrambles. With `--count`, scramble `i` uses
        /// the seed string `SEED+i` (the first uses `SEED` unchanged).
        #[arg(short, long)]
        seed: Option<String>,
        /// Number of scrambles to generate.
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
    },
    /// Apply an algorithm to a solved puzzle and print the result.
    Simulate {
        /// Event ID (such as `333` or `SQ1`).
        event: String,
        /// Algorithm to apply.
        #[arg(required = true, num_args = 1..)]
        alg: Vec<String>,
        /// Reject unknown tokens and blocked moves instead of skipping them.
        #[arg(long)]
        strict: bool,
    },
    /// Print the inverse of an algorithm.
    Invert {
        /// Event ID (such as `333` or `SQ1`).
        event: String,
        /// Algorithm to invert.
        #[arg(required = true, num_args = 1..)]
        alg: Vec<String>,
        /// Reject unknown tokens instead of skipping them.
        #[arg(long)]
        strict: bool,
    },
}

#[derive(Serialize, Debug)]
struct EventInfo {
    id: &'static str,
    puzzle: PuzzleKind,
    name: String,
}

#[derive(Serialize, Debug)]
struct SimulationOutput {
    alg: String,
    solved: Option<bool>,
    state: PuzzleState,
}

/// Returns the seed for scramble `i` of a seeded batch.
fn batch_seed(seed: &str, i: usize) -> String {
    match i {
        0 => seed.to_owned(),
        _ => format!("{seed}+{i}"),
    }
}

fn parse_mode(strict: bool, prefs: &Prefs) -> ParseMode {
    if strict || prefs.strict {
        ParseMode::Strict
    } else {
        ParseMode::Lenient
    }
}

pub(crate) fn exec(args: Args, prefs: &Prefs, out: &mut impl Write) -> Result<()> {
    let json = args.json || prefs.output == OutputFormat::Json;

    match args.subcommand {
        Subcommand::Events => {
            use strum::IntoEnumIterator;

            let events: Vec<EventInfo> = Event::iter()
                .map(|event| EventInfo {
                    id: event.id(),
                    puzzle: event.kind(),
                    name: event.kind().to_string(),
                })
                .collect();
            if json {
                return write_json_output(out, &events);
            }
            for e in events {
                writeln!(out, "{:<10} {}", e.id, e.name)?;
            }
            Ok(())
        }

        Subcommand::Scramble { event, seed, count } => {
            let event = event.unwrap_or_else(|| prefs.default_event.clone());
            let kind = PuzzleKind::from_event_id(&event);
            let scrambles: Vec<_> = (0..count)
                .map(|i| match &seed {
                    Some(seed) => ScrambleParams::with_seed(kind, batch_seed(seed, i)),
                    None => ScrambleParams::new(kind),
                })
                .map(ScrambleParams::scramble)
                .collect();
            if json {
                return write_json_output(out, &scrambles);
            }
            for scrambled in scrambles {
                writeln!(out, "{}", scrambled.scramble)?;
            }
            Ok(())
        }

        Subcommand::Simulate { event, alg, strict } => {
            let kind = PuzzleKind::from_event_id(&event);
            let alg = alg.join(" ");
            let state = PuzzleState::simulate(kind, &alg, parse_mode(strict, prefs))
                .wrap_err_with(|| format!("error simulating {kind}"))?;
            if json {
                return write_json_output(out, &SimulationOutput {
                    alg,
                    solved: state.is_solved(),
                    state,
                });
            }
            writeln!(out, "{state}")?;
            if let Some(solved) = state.is_solved() {
                writeln!(out, "solved: {solved}")?;
            }
            Ok(())
        }

        Subcommand::Invert { event, alg, strict } => {
            let kind = PuzzleKind::from_event_id(&event);
            let inverse = kind
                .invert_alg(&alg.join(" "), parse_mode(strict, prefs))
                .wrap_err("error parsing algorithm")?;
            if json {
                return write_json_output(out, &inverse);
            }
            writeln!(out, "{inverse}")?;
            Ok(())
        }
    }
}

fn write_json_output<T: Serialize>(out: &mut impl Write, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)
        .context("error serializing data and writing to output")?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_command_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_unquoted_alg() {
        let args = Args::try_parse_from(["twistysim", "simulate", "333", "R", "U'", "--json"])
            .unwrap();
        assert!(args.json);
        let Subcommand::Simulate { event, alg, strict } = args.subcommand else {
            panic!("expected simulate");
        };
        assert_eq!("333", event);
        assert_eq!(vec!["R", "U'"], alg);
        assert!(!strict);
    }

    fn run(argv: &[&str]) -> Result<String> {
        let argv = std::iter::once("twistysim").chain(argv.iter().copied());
        let args = Args::try_parse_from(argv)?;
        let mut out = vec![];
        exec(args, &Prefs::default(), &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn test_exec_simulate() {
        let sexy = ["R", "U", "R'", "U'"].repeat(6);
        let mut argv = vec!["simulate", "333"];
        argv.extend(sexy);
        assert!(run(&argv).unwrap().ends_with("solved: true\n"));
        assert!(run(&["simulate", "333", "R"]).unwrap().ends_with("solved: false\n"));
        assert!(!run(&["simulate", "MEGAMINX", "R++"]).unwrap().contains("solved"));

        assert!(run(&["simulate", "333", "R", "M"]).is_ok());
        assert!(run(&["simulate", "333", "R", "M", "--strict"]).is_err());
    }

    #[test]
    fn test_exec_simulate_json() {
        let output = run(&["--json", "simulate", "PYRAMINX", "U", "U'"]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!("U U'", value["alg"]);
        assert_eq!(true, value["solved"]);
        assert_eq!("pyraminx", value["state"]["puzzle"]);
    }

    #[test]
    fn test_exec_invert() {
        assert_eq!("F U2 R'\n", run(&["invert", "333", "R", "U2", "F'"]).unwrap());
        assert_eq!("(-1,0) / (0,3)\n", run(&["invert", "SQ1", "(0,-3)/(1,0)"]).unwrap());
        assert_eq!(
            "\"F U2 R'\"\n",
            run(&["invert", "333", "R U2 F'", "--json"]).unwrap(),
        );
    }

    #[test]
    fn test_exec_seeded_scramble_batch() {
        let output = run(&["scramble", "SKEWB", "--seed", "abc", "-n", "3"]).unwrap();
        let expected: Vec<String> = (0..3)
            .map(|i| {
                ScrambleParams::with_seed(PuzzleKind::Skewb, batch_seed("abc", i))
                    .scramble()
                    .scramble
            })
            .collect();
        assert_eq!(expected, output.lines().collect::<Vec<_>>());

        let json = run(&["scramble", "333", "--seed", "abc", "-n", "2", "--json"]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(2, value.as_array().map_or(0, |a| a.len()));
    }

    #[test]
    fn test_exec_events() {
        use strum::IntoEnumIterator;

        let output = run(&["events"]).unwrap();
        assert_eq!(Event::iter().count(), output.lines().count());
        assert!(output.starts_with("222"));
    }

    #[test]
    fn test_batch_seed() {
        assert_eq!("abc", batch_seed("abc", 0));
        assert_eq!("abc+2", batch_seed("abc", 2));
    }

    #[test]
    fn test_parse_mode_prefs() {
        let mut prefs = Prefs::default();
        assert_eq!(ParseMode::Lenient, parse_mode(false, &prefs));
        assert_eq!(ParseMode::Strict, parse_mode(true, &prefs));
        prefs.strict = true;
        assert_eq!(ParseMode::Strict, parse_mode(false, &prefs));
    }
}
