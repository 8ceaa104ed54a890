//! Console output formatter for settings and write results

use colored::Colorize;
use daylog_domain::{Settings, known_keys};
use std::path::Path;

/// Formats daylog results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a looked-up setting
    pub fn format_value(key: &str, value: Option<&str>) -> String {
        match value {
            Some(value) => value.to_string(),
            None => format!("{} {} is not set", "warning:".yellow().bold(), key),
        }
    }

    /// Format the outcome of a `write` command
    pub fn format_write_result(count: usize, silent: bool, path: Option<&Path>) -> String {
        if silent {
            return format!("{} silent mode, nothing written", "note:".cyan().bold());
        }
        match path {
            Some(path) => format!("{} {} line(s) to {}", "wrote".green().bold(), count, path.display()),
            None => format!(
                "{} no usable log directory (set --dir, Serilog or Storage)",
                "skipped:".yellow().bold()
            ),
        }
    }

    /// Format the sections reloaded by `refresh`
    pub fn format_refreshed(sections: &[&str]) -> String {
        format!("{} {}", "refreshed".green().bold(), sections.join(", "))
    }

    /// Format loaded sections as `[section]` blocks
    pub fn format_sections(sections: &[(String, Settings)]) -> String {
        let mut output = String::new();
        for (name, settings) in sections {
            output.push_str(&format!("{}\n", format!("[{}]", name).cyan().bold()));
            if settings.is_empty() {
                output.push_str("  (empty)\n");
            }
            for (key, value) in settings.iter() {
                output.push_str(&format!("  {} = {}\n", key, value));
            }
        }
        output
    }

    /// Format loaded sections as JSON
    pub fn format_sections_json(sections: &[(String, Settings)]) -> String {
        let map: serde_json::Map<String, serde_json::Value> = sections
            .iter()
            .map(|(name, settings)| {
                let values = settings
                    .iter()
                    .map(|(k, v)| (k.clone(), serde_json::Value::String(v.to_string())))
                    .collect();
                (name.clone(), serde_json::Value::Object(values))
            })
            .collect();
        serde_json::to_string_pretty(&map).unwrap_or_else(|_| "{}".to_string())
    }

    /// Describe the well-known keys
    pub fn format_known_keys() -> String {
        let mut output = format!("{}\n", "Well-known keys:".cyan().bold());
        for info in known_keys() {
            output.push_str(&format!(
                "  {}.{:<9} {}\n",
                info.section, info.key, info.description
            ));
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_format_value() {
        plain();
        assert_eq!(ConsoleFormatter::format_value("Serilog", Some("/tmp")), "/tmp");
        assert_eq!(
            ConsoleFormatter::format_value("Serilog", None),
            "warning: Serilog is not set"
        );
    }

    #[test]
    fn test_format_write_result() {
        plain();
        assert_eq!(
            ConsoleFormatter::format_write_result(2, false, Some(Path::new("/tmp/20240501.txt"))),
            "wrote 2 line(s) to /tmp/20240501.txt"
        );
        assert!(ConsoleFormatter::format_write_result(1, true, None).contains("silent"));
        assert!(ConsoleFormatter::format_write_result(1, false, None).starts_with("skipped:"));
    }

    #[test]
    fn test_format_sections() {
        plain();
        let sections = vec![
            (
                "app_settings".to_string(),
                Settings::new().with("Serilog", "/tmp/logs"),
            ),
            ("connection_strings".to_string(), Settings::new()),
        ];
        assert_eq!(
            ConsoleFormatter::format_sections(&sections),
            "[app_settings]\n  Serilog = /tmp/logs\n[connection_strings]\n  (empty)\n"
        );
    }

    #[test]
    fn test_format_sections_json() {
        let sections = vec![(
            "app_settings".to_string(),
            Settings::new().with("ForceLog", "1"),
        )];
        let value: serde_json::Value =
            serde_json::from_str(&ConsoleFormatter::format_sections_json(&sections)).unwrap();
        assert_eq!(value["app_settings"]["ForceLog"], "1");
    }

    #[test]
    fn test_known_keys_listed() {
        plain();
        let output = ConsoleFormatter::format_known_keys();
        assert!(output.contains("app_settings.Serilog"));
        assert!(output.contains("ForceLog"));
    }
}
