use anyhow::{Result, bail};

use crate::glossary::{HEALTH_TERMS, health_term};
use crate::ui::Style;

/// Lists the glossary, or prints the Bikol gloss of a single term.
pub fn run_terms(term: Option<&str>) -> Result<()> {
    let Some(term) = term else {
        print_glossary();
        return Ok(());
    };

    let Some(found) = health_term(term) else {
        bail!(
            "Health term '{}' not found\n\n\
             Run 'gabay terms' to list the glossary.",
            term.trim()
        );
    };

    println!("{}", found.bikol);
    Ok(())
}

fn print_glossary() {
    let mut category = "";
    for term in HEALTH_TERMS {
        if term.category != category {
            if !category.is_empty() {
                println!();
            }
            category = term.category;
            println!("{}", Style::header(category));
        }
        println!(
            "  {} {}",
            Style::label(format!("{:14}", term.english)),
            Style::value(term.bikol)
        );
    }
}
