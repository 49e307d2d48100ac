// Copyright (c) 2025 Nicholas D. Crosbie
use std::path::PathBuf;

use clap::builder::RangedU64ValueParser;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};

pub struct Args {
    pub file: PathBuf,
    pub line: usize,
    pub variable: String,
    pub max_depth: Option<usize>,
    pub max_items: Option<usize>,
    pub patterns: bool,
    pub compact: bool,
    pub config: Option<PathBuf>,
    pub verbose: bool,
}

pub enum Invocation {
    Explore(Args),
    MarkdownHelp,
}

pub fn command() -> Command {
    Command::new("objpath")
        .about("Explore the structure and access paths of a Python variable at a source line")
        .version(env!("CARGO_PKG_VERSION"))
        .author(env!("CARGO_PKG_AUTHORS"))
        .after_help("Copyright (c) 2025 Nicholas D. Crosbie")
        .arg(
            Arg::new("file")
                .help("The Python source file to execute")
                .required_unless_present("markdown_help")
                .value_parser(value_parser!(PathBuf))
                .index(1),
        )
        .arg(
            Arg::new("line")
                .help("Number of leading lines to execute (1-based)")
                .required_unless_present("markdown_help")
                .value_parser(RangedU64ValueParser::<usize>::new().range(1..))
                .index(2),
        )
        .arg(
            Arg::new("variable")
                .help("Name of the variable to explore")
                .required_unless_present("markdown_help")
                .index(3),
        )
        .arg(
            Arg::new("max_depth")
                .long("max-depth")
                .help("Maximum number of levels to expand [default: 4]")
                .value_name("N")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("max_items")
                .long("max-items")
                .help("Maximum number of children per node [default: 20]")
                .value_name("N")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("patterns")
                .long("patterns")
                .help("Attach data frame and array access suggestions to the root node")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("compact")
                .long("compact")
                .help("Print the JSON report on a single line")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Read settings from this file instead of the nearest objpath.toml")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Write debug diagnostics to stderr")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("markdown_help")
                .long("markdown-help")
                .help("Generate a markdown version of the help text")
                .action(ArgAction::SetTrue),
        )
}

pub fn parse_args() -> Invocation {
    from_matches(&command().get_matches())
}

pub fn from_matches(matches: &ArgMatches) -> Invocation {
    if matches.get_flag("markdown_help") {
        return Invocation::MarkdownHelp;
    }

    // The positionals are required whenever --markdown-help is absent.
    let (Some(file), Some(line), Some(variable)) = (
        matches.get_one::<PathBuf>("file"),
        matches.get_one::<usize>("line"),
        matches.get_one::<String>("variable"),
    ) else {
        return Invocation::MarkdownHelp;
    };

    Invocation::Explore(Args {
        file: file.clone(),
        line: *line,
        variable: variable.clone(),
        max_depth: matches.get_one::<usize>("max_depth").copied(),
        max_items: matches.get_one::<usize>("max_items").copied(),
        patterns: matches.get_flag("patterns"),
        compact: matches.get_flag("compact"),
        config: matches.get_one::<PathBuf>("config").cloned(),
        verbose: matches.get_flag("verbose"),
    })
}
