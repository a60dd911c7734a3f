use anyhow::Result;
use inquire::Text;
use inquire::ui::{Attributes, Color, RenderConfig, StyleSheet, Styled};

use super::command::{Input, SlashCommand, SlashCommandCompleter, parse_input};
use super::ui;
use crate::translation::{Direction, Language, SharedTranslator, parse_language};
use crate::ui::{Style, answer_or_cancel, print_error};

/// Configuration for a chat session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Fixed target language; `None` picks one per line.
    pub to: Option<Language>,
    /// Target for Bikol input when `to` is not fixed.
    pub bikol_target: Language,
}

impl SessionConfig {
    pub const fn new(to: Option<Language>, bikol_target: Language) -> Self {
        Self { to, bikol_target }
    }
}

/// An interactive chat session for translation.
///
/// Each line is detected and translated with the same direction rules as
/// the one-shot translate command.
pub struct ChatSession {
    config: SessionConfig,
    translator: SharedTranslator,
}

impl ChatSession {
    pub const fn new(config: SessionConfig, translator: SharedTranslator) -> Self {
        Self { config, translator }
    }

    pub fn run(&mut self) -> Result<()> {
        ui::print_header();

        let prompt_style = Styled::new("❯")
            .with_fg(Color::LightBlue)
            .with_attr(Attributes::BOLD);
        let mut render_config = RenderConfig::default()
            .with_prompt_prefix(prompt_style)
            .with_answered_prompt_prefix(prompt_style);

        render_config.option = StyleSheet::new().with_fg(Color::Grey);
        render_config.selected_option = Some(StyleSheet::new().with_fg(Color::DarkMagenta));

        loop {
            let input = Text::new("")
                .with_render_config(render_config)
                .with_autocomplete(SlashCommandCompleter)
                .with_help_message("Type text to translate, /help for commands, Ctrl+C to quit")
                .prompt();

            let Some(line) = answer_or_cancel(input)? else {
                println!();
                break;
            };

            match parse_input(&line) {
                Input::Empty => {}
                Input::Command(cmd) => {
                    if !self.handle_command(cmd) {
                        break;
                    }
                }
                Input::Text(text) => match self.translate_line(&text) {
                    Ok(translated) => {
                        println!("{translated}");
                        println!();
                    }
                    Err(e) => print_error(&format!("{e:#}")),
                },
            }
        }

        ui::print_goodbye();
        Ok(())
    }

    /// Translates one line and tags it with its direction, e.g. `[bcl → fil] ...`.
    pub fn translate_line(&self, text: &str) -> Result<String> {
        let translator = self.translator.current();
        let direction =
            translator.direction_for(text, None, self.config.to, self.config.bikol_target)?;

        Ok(format!(
            "[{} → {}] {}",
            direction.source().code(),
            direction.target().code(),
            translator.translate(text, direction)
        ))
    }

    fn handle_command(&mut self, cmd: SlashCommand) -> bool {
        match cmd {
            SlashCommand::Config => ui::print_config(&self.config, &self.translator),
            SlashCommand::Help => ui::print_help(),
            SlashCommand::Reload => self.reload(),
            SlashCommand::Set { key, value } => self.handle_set(&key, value.as_deref()),
            SlashCommand::Quit => return false,
            SlashCommand::Unknown(cmd) => print_error(&format!("Unknown command: /{cmd}")),
        }
        true
    }

    fn reload(&self) {
        match self.translator.reload() {
            Ok(translator) => {
                let entries: usize = Direction::ALL
                    .iter()
                    .map(|d| translator.mappings().len(*d))
                    .sum();
                println!(
                    "{} Reloaded {} ({entries} entries)\n",
                    Style::success("✓"),
                    Style::secondary(self.translator.path().display()),
                );
            }
            Err(e) => print_error(&format!("{e:#}\nKeeping the previous mappings.")),
        }
    }

    fn handle_set(&mut self, key: &str, value: Option<&str>) {
        match key {
            "to" => self.set_to(value),
            "" => {
                println!("Usage: /set to <lang|auto>");
                println!("Keys: to");
            }
            _ => {
                print_error(&format!("Unknown setting: {key}"));
                println!("Available: to");
            }
        }
    }

    fn set_to(&mut self, value: Option<&str>) {
        match value {
            None => print_error("Usage: /set to <lang|auto>"),
            Some("auto") => {
                self.config.to = None;
                println!("{} Target language picked per line\n", Style::success("✓"));
            }
            Some(code) => match parse_language(code) {
                Ok(lang) => {
                    self.config.to = Some(lang);
                    println!(
                        "{} Target language set to {}\n",
                        Style::success("✓"),
                        Style::value(lang.name())
                    );
                }
                Err(e) => print_error(&e.to_string()),
            },
        }
    }
}
