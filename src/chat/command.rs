use inquire::autocompletion::{Autocomplete, Replacement};

// Available slash commands: (command, description)
const SLASH_COMMANDS: &[(&str, &str)] = &[
    ("/config", "Show current configuration"),
    ("/help", "Show available commands"),
    ("/reload", "Reload the mappings file"),
    ("/set", "Change a setting (/set to <lang>)"),
    ("/quit", "Exit chat mode"),
];

/// Slash command autocompleter
#[derive(Clone, Default)]
pub struct SlashCommandCompleter;

impl Autocomplete for SlashCommandCompleter {
    fn get_suggestions(&mut self, input: &str) -> Result<Vec<String>, inquire::CustomUserError> {
        if !input.starts_with('/') {
            return Ok(vec![]);
        }

        let suggestions: Vec<String> = SLASH_COMMANDS
            .iter()
            .filter(|(cmd, _)| cmd.starts_with(input))
            .map(|(cmd, desc)| format!("{cmd}  {desc}"))
            .collect();

        Ok(suggestions)
    }

    fn get_completion(
        &mut self,
        _input: &str,
        highlighted_suggestion: Option<String>,
    ) -> Result<Replacement, inquire::CustomUserError> {
        let replacement =
            highlighted_suggestion.map(|s| s.split_whitespace().next().unwrap_or("").to_string());
        Ok(replacement)
    }
}

/// Slash command types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlashCommand {
    Config,
    Help,
    Reload,
    Set { key: String, value: Option<String> },
    Quit,
    Unknown(String),
}

/// Input types
#[derive(Debug, PartialEq, Eq)]
pub enum Input {
    Text(String),
    Command(SlashCommand),
    Empty,
}

pub fn parse_input(input: &str) -> Input {
    let input = input.trim();

    if input.is_empty() {
        return Input::Empty;
    }

    input
        .strip_prefix('/')
        .map_or_else(|| Input::Text(input.to_string()), parse_slash_command)
}

fn parse_slash_command(cmd: &str) -> Input {
    let parts: Vec<&str> = cmd.split_whitespace().collect();

    let command = match parts.first().copied() {
        Some("config") => SlashCommand::Config,
        Some("help") => SlashCommand::Help,
        Some("reload") => SlashCommand::Reload,
        Some("set") => SlashCommand::Set {
            key: parts.get(1).copied().unwrap_or_default().to_string(),
            value: parts.get(2).map(|v| (*v).to_string()),
        },
        Some("quit" | "exit" | "q") => SlashCommand::Quit,
        _ => SlashCommand::Unknown(parts.join(" ")),
    };

    Input::Command(command)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_input() {
        assert_eq!(parse_input(""), Input::Empty);
        assert_eq!(parse_input("   "), Input::Empty);
    }

    #[test]
    fn test_parse_text_input() {
        assert_eq!(
            parse_input("  Saen an ospital? "),
            Input::Text("Saen an ospital?".to_string())
        );
    }

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(parse_input("/config"), Input::Command(SlashCommand::Config));
        assert_eq!(parse_input("/help"), Input::Command(SlashCommand::Help));
        assert_eq!(parse_input("/reload"), Input::Command(SlashCommand::Reload));
    }

    #[test]
    fn test_parse_quit_commands() {
        for quit in ["/quit", "/exit", "/q"] {
            assert_eq!(parse_input(quit), Input::Command(SlashCommand::Quit));
        }
    }

    #[test]
    fn test_parse_set_command() {
        assert_eq!(
            parse_input("/set to en"),
            Input::Command(SlashCommand::Set {
                key: "to".to_string(),
                value: Some("en".to_string()),
            })
        );
        assert_eq!(
            parse_input("/set"),
            Input::Command(SlashCommand::Set {
                key: String::new(),
                value: None,
            })
        );
    }

    #[test]
    fn test_parse_unknown_command() {
        assert_eq!(
            parse_input("/translate all"),
            Input::Command(SlashCommand::Unknown("translate all".to_string()))
        );
    }

    #[test]
    fn test_completer_no_suggestions_for_regular_text() {
        let mut completer = SlashCommandCompleter;
        assert!(completer.get_suggestions("maray").unwrap().is_empty());
    }

    #[test]
    fn test_completer_suggestions_for_slash() {
        let mut completer = SlashCommandCompleter;
        let suggestions = completer.get_suggestions("/").unwrap();
        assert_eq!(suggestions.len(), SLASH_COMMANDS.len());
    }

    #[test]
    fn test_completer_suggestions_filter_by_prefix() {
        let mut completer = SlashCommandCompleter;

        let suggestions = completer.get_suggestions("/re").unwrap();
        assert_eq!(suggestions.len(), 1);
        assert!(suggestions[0].starts_with("/reload"));

        let suggestions = completer.get_suggestions("/q").unwrap();
        assert_eq!(suggestions.len(), 1);
        assert!(suggestions[0].starts_with("/quit"));
    }

    #[test]
    fn test_completer_completion() {
        let mut completer = SlashCommandCompleter;
        let suggestion = "/reload  Reload the mappings file".to_string();
        let completion = completer.get_completion("/r", Some(suggestion)).unwrap();
        assert_eq!(completion, Some("/reload".to_string()));

        assert!(completer.get_completion("/x", None).unwrap().is_none());
    }
}
