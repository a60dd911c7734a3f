//! Chat mode UI components.

use crate::translation::{Direction, SharedTranslator};
use crate::ui::Style;

use super::session::SessionConfig;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn print_header() {
    println!(
        "{} {} - Bikol / Filipino / English",
        Style::header("gabay"),
        Style::version(format!("v{VERSION}"))
    );
    println!();
}

pub fn print_goodbye() {
    println!("{}", Style::success("Dios mabalos!"));
}

pub fn print_config(config: &SessionConfig, translator: &SharedTranslator) {
    let to = config
        .to
        .map_or_else(|| "auto".to_string(), |lang| lang.code().to_string());

    println!("{}", Style::header("Configuration"));
    println!("  {}             {}", Style::label("to"), Style::value(to));
    println!(
        "  {}   {}",
        Style::label("bikol target"),
        Style::value(config.bikol_target.code())
    );
    println!(
        "  {}       {}",
        Style::label("mappings"),
        Style::secondary(translator.path().display())
    );

    let current = translator.current();
    for direction in Direction::ALL {
        println!(
            "    {} {}",
            Style::label(format!("{:18}", direction.table_name())),
            current.mappings().len(direction)
        );
    }
    println!();
}

pub fn print_help() {
    println!("{}", Style::header("Available commands"));
    let commands = [
        ("/config", "Show current configuration"),
        ("/help", "Show this help"),
        ("/reload", "Reload the mappings file"),
        ("/set to <lang>", "Fix the target language (bcl, fil, en, auto)"),
        ("/quit", "Exit chat mode"),
    ];
    for (command, description) in commands {
        println!(
            "  {} {}",
            Style::command(format!("{command:16}")),
            Style::secondary(description)
        );
    }
    println!();
}
