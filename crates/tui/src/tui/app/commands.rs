use anyhow::Result;

use crate::config::MAX_SHADE_STEPS;
use crate::tui::constants::{COMMAND_HELP, SEARCH_ERROR};

use super::{App, InputMode};

#[derive(Debug, Clone)]
pub(crate) struct Suggestion {
    pub(crate) fill: String,
    pub(crate) label: String,
}

impl Suggestion {
    fn new(fill: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            fill: fill.into(),
            label: label.into(),
        }
    }
}

impl App {
    pub(crate) fn run_command(&mut self) -> Result<()> {
        let raw = self.input.as_str().trim().to_string();
        let Some(body) = raw.strip_prefix('/') else {
            self.set_status_error("Commands must start with '/'");
            self.finish_command();
            return Ok(());
        };
        let (cmd, rest) = match body.split_once(char::is_whitespace) {
            Some((cmd, rest)) => (cmd.to_ascii_lowercase(), rest.trim()),
            None => (body.to_ascii_lowercase(), ""),
        };

        match cmd.as_str() {
            "" => self.set_status_error("Enter a command after '/'"),
            "help" | "h" => self.set_status_info(COMMAND_HELP),
            "search" | "find" => {
                if rest.is_empty() {
                    self.finish_command();
                    self.open_search();
                    return Ok(());
                }
                self.input.set(rest);
                if !self.submit_search() {
                    self.search_error = false;
                    self.set_status_error(SEARCH_ERROR);
                }
            }
            "shuffle" | "random" => self.reshuffle(),
            "steps" => match rest.parse::<u32>() {
                Ok(steps) if (1..=MAX_SHADE_STEPS).contains(&steps) => {
                    self.set_shade_steps(steps);
                    self.set_status_info(format!("Shade steps set to {steps}"));
                }
                _ => self.set_status_error(format!("Usage: /steps <1-{MAX_SHADE_STEPS}>")),
            },
            "quit" | "q" | "exit" => self.should_quit = true,
            unknown => {
                self.set_status_error(format!("Unknown command: {} (try /help)", unknown));
            }
        }

        self.finish_command();
        Ok(())
    }

    /// Leave the command palette without disturbing a drawer that a command opened.
    pub(crate) fn finish_command(&mut self) {
        self.input.clear();
        self.suggestions.clear();
        self.suggestion_index = 0;
        if self.input_mode == InputMode::Command {
            self.input_mode = if self.detail.is_some() {
                InputMode::Detail
            } else {
                InputMode::Normal
            };
        }
    }

    pub(crate) fn update_command_suggestions(&mut self) {
        self.suggestions = build_command_suggestions(self.input.as_str(), self.config.shade_steps());
        if self.suggestion_index >= self.suggestions.len() {
            self.suggestion_index = 0;
        }
    }

    pub(crate) fn accept_suggestion(&mut self) {
        if let Some(s) = self.suggestions.get(self.suggestion_index) {
            self.input.set(s.fill.clone());
            self.update_command_suggestions();
        }
    }
}

fn build_command_suggestions(raw: &str, current_steps: u32) -> Vec<Suggestion> {
    let Some(without) = raw.strip_prefix('/') else {
        return Vec::new();
    };
    let without = without.trim_start();
    let (first, rest) = match without.split_once(char::is_whitespace) {
        Some((first, rest)) => (first.to_ascii_lowercase(), Some(rest.trim())),
        None => (without.to_ascii_lowercase(), None),
    };

    let base = vec![
        Suggestion::new("/help", "❓ Help: show available commands"),
        Suggestion::new("/search ", "🔍 Open a color by value"),
        Suggestion::new("/shuffle", "🎲 Generate a new palette"),
        Suggestion::new("/steps ", format!("🌗 Shade steps (now {current_steps})")),
        Suggestion::new("/quit", "🚪 Quit the application"),
    ];

    let Some(rest) = rest else {
        return base
            .into_iter()
            .filter(|s| s.fill[1..].starts_with(&first))
            .collect();
    };

    match first.as_str() {
        "search" | "find" => {
            if rest.is_empty() {
                vec![Suggestion::new("/search ", "Type fff, #ffffff or rgb(…)")]
            } else {
                vec![Suggestion::new(format!("/search {rest}"), "Open this color")]
            }
        }
        "steps" => [3u32, 5, 8, 10]
            .iter()
            .map(|n| n.to_string())
            .filter(|n| rest.is_empty() || n.starts_with(rest))
            .map(|n| Suggestion::new(format!("/steps {n}"), format!("{n} shades each way")))
            .collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fills(raw: &str) -> Vec<String> {
        build_command_suggestions(raw, 5)
            .into_iter()
            .map(|s| s.fill)
            .collect()
    }

    #[test]
    fn bare_slash_lists_every_command() {
        assert_eq!(fills("/").len(), 5);
    }

    #[test]
    fn prefix_narrows_commands() {
        assert_eq!(fills("/sh"), vec!["/shuffle".to_string()]);
        assert_eq!(
            fills("/s"),
            vec![
                "/search ".to_string(),
                "/shuffle".to_string(),
                "/steps ".to_string()
            ]
        );
    }

    #[test]
    fn arguments_are_completed_in_place() {
        assert_eq!(fills("/search fff"), vec!["/search fff".to_string()]);
        assert_eq!(fills("/steps 1"), vec!["/steps 10".to_string()]);
    }

    #[test]
    fn text_without_slash_has_no_suggestions() {
        assert!(fills("help").is_empty());
    }
}
