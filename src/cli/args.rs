use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "gabay")]
#[command(about = "Offline Bikol / Filipino / English translation assistant")]
#[command(version)]
pub struct Args {
    /// File to translate (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Source language code (bcl, fil, en); detected when omitted
    #[arg(short = 'f', long = "from")]
    pub from: Option<String>,

    /// Target language code (bcl, fil, en)
    #[arg(short = 't', long = "to")]
    pub to: Option<String>,

    /// Translation mappings file
    #[arg(short = 'm', long, global = true)]
    pub mappings: Option<PathBuf>,

    /// Suppress status messages
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Detect whether text is Bikol, Filipino or English
    Detect {
        /// File to read (reads from stdin if not provided)
        file: Option<PathBuf>,

        /// Also print the score of each language
        #[arg(long)]
        scores: bool,
    },
    /// Add Bikol glosses after English health terms
    Enhance {
        /// File to read (reads from stdin if not provided)
        file: Option<PathBuf>,
    },
    /// Look up a single word in one mapping table
    Lookup {
        word: String,

        /// Source language code
        #[arg(short = 'f', long = "from")]
        from: String,

        /// Target language code
        #[arg(short = 't', long = "to")]
        to: String,
    },
    /// List the health-term glossary, or show one term
    Terms {
        /// English health term
        term: Option<String>,
    },
    /// List supported language codes
    Languages,
    /// Build or inspect the mapping tables
    Corpus {
        #[command(subcommand)]
        command: CorpusCommand,
    },
    /// Interactive translation mode
    Chat {
        /// Fixed target language code (picked per line when omitted)
        #[arg(short = 't', long = "to")]
        to: Option<String>,
    },
    /// Configure gabay settings
    Configure {
        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum CorpusCommand {
    /// Build the mappings file from a corpus
    Build {
        /// Corpus JSON file (the bundled corpus if not provided)
        #[arg(short = 'i', long)]
        input: Option<PathBuf>,

        /// Where to write the mappings (the resolved mappings path if not provided)
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,
    },
    /// Show entry counts of the current mappings
    Show,
}
