use anyhow::Result;
use clap::Parser;

use gabay::cli::commands::{chat, configure, corpus, detect, enhance, lookup, terms, translate};
use gabay::cli::{Args, Command, CorpusCommand};
use gabay::error::UsageError;
use gabay::output::{self, OutputConfig};
use gabay::translation::print_languages;
use gabay::ui::Style;

fn main() {
    let args = Args::parse();
    output::init(OutputConfig::from_flags(args.quiet, args.no_color));

    if let Err(err) = run(args) {
        eprintln!("{} {err:#}", Style::error("Error:"));
        std::process::exit(exit_code(&err));
    }
}

fn run(args: Args) -> Result<()> {
    let mappings = args.mappings;

    match args.command {
        Some(Command::Detect { file, scores }) => detect::run_detect(detect::DetectOptions {
            file,
            scores,
            mappings,
        }),
        Some(Command::Enhance { file }) => enhance::run_enhance(file),
        Some(Command::Lookup { word, from, to }) => lookup::run_lookup(lookup::LookupOptions {
            word,
            from,
            to,
            mappings,
        }),
        Some(Command::Terms { term }) => terms::run_terms(term.as_deref()),
        Some(Command::Languages) => {
            print_languages();
            Ok(())
        }
        Some(Command::Corpus { command }) => match command {
            CorpusCommand::Build { input, output } => corpus::run_build(corpus::BuildOptions {
                input,
                output,
                mappings,
            }),
            CorpusCommand::Show => corpus::run_show(mappings),
        },
        Some(Command::Chat { to }) => chat::run_chat(chat::ChatOptions { to, mappings }),
        Some(Command::Configure { show }) => configure::run_configure(show),
        None => translate::run_translate(translate::TranslateOptions {
            file: args.file,
            from: args.from,
            to: args.to,
            mappings,
        }),
    }
}

/// Maps an error chain to a sysexits-style status.
fn exit_code(err: &anyhow::Error) -> exitcode::ExitCode {
    let mut code = exitcode::SOFTWARE;
    for cause in err.chain() {
        if cause.is::<UsageError>() {
            return exitcode::USAGE;
        } else if cause
            .downcast_ref::<std::io::Error>()
            .is_some_and(|e| e.kind() == std::io::ErrorKind::NotFound)
        {
            return exitcode::NOINPUT;
        } else if cause.is::<serde_json::Error>() {
            code = exitcode::DATAERR;
        } else if cause.is::<toml::de::Error>() {
            code = exitcode::CONFIG;
        }
    }
    code
}
