use std::fs::File;
use std::io::{self, BufReader};

use anyhow::{Context, Result, bail};
use clap::Parser;
use itertools::Itertools;
use ropey::Rope;

use string_grouper::{Grouper, GrouperConfig, RopeCursor, SequenceFinder, WrapType};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// File to read (stdin if omitted)
    #[arg(value_name = "FILE")]
    file: Option<String>,

    /// Bracket pair, may be repeated
    #[arg(short, long, num_args = 2, value_names = ["OPEN", "CLOSE"])]
    bracket: Vec<String>,

    /// Barrier literal, may be repeated
    #[arg(short = 'q', long, value_name = "LITERAL")]
    barrier: Vec<String>,

    /// Start from a built-in configuration
    #[arg(short, long, value_name = "NAME")]
    preset: Option<String>,

    /// Also print groups with nothing in them
    #[arg(short = 'e', long)]
    include_empty: bool,

    /// Print groups without their delimiters
    #[arg(short, long)]
    unwrap: bool,

    /// Only report where this literal occurs, may be repeated
    #[arg(short, long, value_name = "LITERAL")]
    scan: Vec<String>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let rope = match args.file.as_ref() {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("Failed to open {}", path))?;
            Rope::from_reader(BufReader::new(file)).with_context(|| format!("Failed to read {}", path))?
        }
        None => Rope::from_reader(io::stdin().lock()).context("Failed to read stdin")?,
    };

    if !args.scan.is_empty() {
        let mut finder = SequenceFinder::new(args.scan)?;
        for m in finder.find_all(&rope.to_string()) {
            println!("{}..{}\t{:?}", m.start, m.end, m.literal);
        }
        return Ok(());
    }

    let config = build_config(args.preset.as_deref(), args.bracket, args.barrier, args.include_empty)?;
    let grouper = Grouper::new(config, RopeCursor::new(&rope))?;
    for group in grouper {
        let kind = match group.wrap_type() {
            WrapType::Plain => "plain",
            WrapType::Brackets => "brackets",
            WrapType::Barrier => "barrier",
        };
        let text = if args.unwrap { group.unwrapped() } else { group.text() };
        println!("{}\t{:?}", kind, text);
    }
    Ok(())
}

fn build_config(
    preset: Option<&str>,
    brackets: Vec<String>,
    barriers: Vec<String>,
    include_empty: bool,
) -> Result<GrouperConfig> {
    let mut config = match preset {
        Some(name) => GrouperConfig::preset(name).with_context(|| {
            format!("Available presets: {}", GrouperConfig::preset_names().join(", "))
        })?,
        None => GrouperConfig::new(),
    };
    if brackets.len() % 2 != 0 {
        bail!("--bracket takes an opening and a closing literal");
    }
    config
        .brackets
        .extend(brackets.into_iter().tuples::<(String, String)>());
    config.barriers.extend(barriers);
    config.include_empty = include_empty;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn brackets_are_paired_in_order() {
        let config = build_config(None, strings(&["(", ")", "<<", ">>"]), strings(&["'"]), true).unwrap();
        assert_eq!(
            config.brackets,
            [("(".to_string(), ")".to_string()), ("<<".to_string(), ">>".to_string())]
        );
        assert_eq!(config.barriers, ["'"]);
        assert!(config.include_empty);
    }

    #[test]
    fn preset_is_extended() {
        let config = build_config(Some("parens"), strings(&["[", "]"]), vec![], false).unwrap();
        assert_eq!(config.brackets.len(), 2);
    }

    #[test]
    fn unknown_preset_fails() {
        assert!(build_config(Some("nope"), vec![], vec![], false).is_err());
    }

    #[test]
    fn colliding_barrier_fails() {
        assert!(build_config(Some("code"), vec![], strings(&["("]), false).is_err());
    }
}
