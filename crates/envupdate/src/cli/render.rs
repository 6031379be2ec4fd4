//! # Rendering Module
//!
//! Plain-text output with `console` styles. Styling is applied only when the target
//! stream is a terminal (`console` handles the detection), so piped output and the
//! end-to-end tests see undecorated text.

use console::Style;
use envupdateapp::commands::{CmdMessage, CmdResult, MessageLevel};
use envupdateapp::config::EnvUpdateConfig;
use std::fmt::Write as _;
use std::path::Path;

/// Style identifiers used by the renderers.
mod styles {
    use console::Style;

    pub fn error() -> Style {
        Style::new().red().bold()
    }

    pub fn warning() -> Style {
        Style::new().yellow().bold()
    }

    pub fn success() -> Style {
        Style::new().green()
    }

    pub fn muted() -> Style {
        Style::new().dim()
    }

    pub fn key() -> Style {
        Style::new().cyan()
    }
}

fn level_style(level: MessageLevel) -> Style {
    match level {
        MessageLevel::Info => styles::muted(),
        MessageLevel::Success => styles::success(),
        MessageLevel::Warning => styles::warning(),
        MessageLevel::Error => styles::error(),
    }
}

fn level_prefix(level: MessageLevel) -> &'static str {
    match level {
        MessageLevel::Info | MessageLevel::Success => "",
        MessageLevel::Warning => "Warning: ",
        MessageLevel::Error => "Error: ",
    }
}

/// One line per message.
pub fn render_messages(messages: &[CmdMessage], for_stderr: bool) -> String {
    let mut out = String::new();
    for message in messages {
        let style = level_style(message.level);
        let style = if for_stderr { style.for_stderr() } else { style };
        let line = format!("{}{}", level_prefix(message.level), message.content);
        let _ = writeln!(out, "{}", style.apply_to(line));
    }
    out
}

/// The value as stored, or one segment per line. Empty segments show as `<empty>`.
pub fn render_value(result: &CmdResult, as_segments: bool) -> String {
    let mut out = String::new();
    if as_segments {
        for segment in &result.segments {
            if segment.is_empty() {
                let _ = writeln!(out, "{}", styles::muted().apply_to("<empty>"));
            } else {
                let _ = writeln!(out, "{}", segment);
            }
        }
    } else if let Some(value) = &result.value {
        let _ = writeln!(out, "{}", value);
    }
    out
}

pub fn render_json(result: &CmdResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(result)
}

pub fn render_config(config: &EnvUpdateConfig, data_dir: &Path) -> String {
    let key = styles::key();
    let mut out = String::new();
    let _ = writeln!(out, "{} = {:?}", key.apply_to("data_dir"), data_dir.display().to_string());
    let _ = writeln!(out, "{} = {:?}", key.apply_to("delimiter"), config.delimiter);
    let _ = writeln!(out, "{} = {}", key.apply_to("exchange_capacity"), config.exchange_capacity);
    let _ = writeln!(out, "{} = {}", key.apply_to("missing_as_empty"), config.missing_as_empty);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(text: &str) -> String {
        console::strip_ansi_codes(text).to_string()
    }

    #[test]
    fn messages_get_level_prefixes() {
        let messages = vec![
            CmdMessage::success("Set Path"),
            CmdMessage::warning("empty segment"),
            CmdMessage::error("boom"),
        ];
        assert_eq!(
            plain(&render_messages(&messages, false)),
            "Set Path\nWarning: empty segment\nError: boom\n"
        );
    }

    #[test]
    fn value_or_segments() {
        let result = CmdResult::default()
            .with_value("a;;b".to_string())
            .with_segments(vec!["a".into(), "".into(), "b".into()]);
        assert_eq!(plain(&render_value(&result, false)), "a;;b\n");
        assert_eq!(plain(&render_value(&result, true)), "a\n<empty>\nb\n");
    }

    #[test]
    fn json_includes_segments() {
        let result = CmdResult::default()
            .with_value("a;b".to_string())
            .with_segments(vec!["a".into(), "b".into()]);
        let json = render_json(&result).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["value"], "a;b");
        assert_eq!(parsed["segments"][1], "b");
    }

    #[test]
    fn config_lists_every_key() {
        let out = plain(&render_config(&EnvUpdateConfig::default(), Path::new("/tmp/data")));
        assert!(out.contains("data_dir = \"/tmp/data\""));
        assert!(out.contains("delimiter = \";\""));
        assert!(out.contains("exchange_capacity = 1024"));
        assert!(out.contains("missing_as_empty = false"));
    }
}
