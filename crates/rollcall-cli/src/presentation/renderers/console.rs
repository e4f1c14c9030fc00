use anyhow::Result;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::fmt::Write;

use super::traits::Renderer;
use crate::args::OutputFormat;
use crate::presentation::view_models::{CommandResultViewModel, CreateView, ViewMode};

pub struct ConsoleRenderer {
    json_mode: bool,
    mode: ViewMode,
    /// ANSI styling for badge and tips; off unless stdout is a terminal
    styled: bool,
}

impl ConsoleRenderer {
    pub fn new(format: OutputFormat, mode: ViewMode) -> Self {
        Self {
            json_mode: format == OutputFormat::Json,
            mode,
            styled: std::io::stdout().is_terminal(),
        }
    }

    pub fn with_styling(mut self, styled: bool) -> Self {
        self.styled = styled;
        self
    }

    /// Everything `render` prints, as one string.
    pub fn format<T>(&self, result: &CommandResultViewModel<T>) -> Result<String>
    where
        T: Serialize + CreateView,
    {
        if self.json_mode {
            return Ok(format!("{}\n", serde_json::to_string_pretty(result)?));
        }

        let mut out = String::new();

        if let Some(badge) = &result.badge {
            if self.styled {
                writeln!(out, "{} {}", badge.icon(), badge.label().bold())?;
            } else {
                writeln!(out, "{} {}", badge.icon(), badge.label())?;
            }
            writeln!(out)?;
        }

        write!(out, "{}", result.content.create_view(self.mode))?;

        // `--quiet` output is meant for pipes
        if self.mode != ViewMode::Minimal && !result.tips.is_empty() {
            if self.styled {
                writeln!(out, "\n{}", "💡 Tips:".yellow().bold())?;
            } else {
                writeln!(out, "\n💡 Tips:")?;
            }
            for tip in &result.tips {
                if self.styled {
                    writeln!(out, "  • {}: {}", tip.description, tip.command.cyan())?;
                } else {
                    writeln!(out, "  • {}: {}", tip.description, tip.command)?;
                }
            }
        }

        Ok(out)
    }
}

impl Renderer for ConsoleRenderer {
    fn render<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        print!("{}", self.format(&result)?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::{ConfigInitViewModel, StatusBadge, Tip};

    fn sample() -> CommandResultViewModel<ConfigInitViewModel> {
        CommandResultViewModel::new(ConfigInitViewModel {
            path: "/tmp/rollcall/config.toml".to_string(),
            written: true,
        })
        .with_badge(StatusBadge::Success("Config written".to_string()))
        .with_tip(Tip::new("Review it", "rollcall config show"))
    }

    #[test]
    fn test_unstyled_text_has_no_escape_codes() {
        let renderer = ConsoleRenderer::new(OutputFormat::Plain, ViewMode::Standard).with_styling(false);
        let output = renderer.format(&sample()).unwrap();

        assert!(!output.contains('\u{1b}'));
        insta::assert_snapshot!(output, @r"
        ✅ Config written

        Path: /tmp/rollcall/config.toml

        💡 Tips:
          • Review it: rollcall config show
        ");
    }

    #[test]
    fn test_styled_text_colors_badge_and_tips() {
        let renderer = ConsoleRenderer::new(OutputFormat::Plain, ViewMode::Standard).with_styling(true);
        let output = renderer.format(&sample()).unwrap();
        assert!(output.contains('\u{1b}'));
    }

    #[test]
    fn test_json_ignores_styling() {
        let renderer = ConsoleRenderer::new(OutputFormat::Json, ViewMode::Minimal).with_styling(true);
        let output = renderer.format(&sample()).unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(json["badge"]["level"], "success");
        assert_eq!(json["tips"][0]["command"], "rollcall config show");
        assert!(!output.contains('\u{1b}'));
    }
}
