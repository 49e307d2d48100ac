// Copyright (c) 2025 Nicholas D. Crosbie
use objpath::args::{self, Invocation};
use objpath::logging;
use objpath::models::Report;
use objpath::output::{JsonFormatter, OutputFormatter};
use objpath::{explore, Settings};

fn main() {
    let args = match args::parse_args() {
        Invocation::MarkdownHelp => {
            print!("{}", clap_markdown::help_markdown_command(&args::command()));
            return;
        }
        Invocation::Explore(args) => args,
    };

    if let Err(err) = logging::init_logging(args.verbose) {
        eprintln!("objpath: logging disabled: {err}");
    }

    let (report, pretty) = match Settings::resolve(&args) {
        Ok(settings) => (explore(&settings.request), settings.pretty),
        Err(err) => (Report::from(err), !args.compact),
    };

    println!("{}", JsonFormatter { pretty }.format_report(&report));
}
