//! Console output formatter for project information

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use jsctx_domain::{
    ConfigEntry, ConfigSource, EcmaLevel, EnvironmentGuess, Proposal, ProjectRoot,
};

/// Formats project information for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the computed environment with the sources it came from
    pub fn format_environment(root: Option<&ProjectRoot>, env: &EnvironmentGuess) -> String {
        let mut output = String::new();

        output.push_str(&Self::project_line(root));

        output.push_str(&format!("\n{}\n", "Environment:".cyan().bold()));
        for (name, enabled) in &env.envs {
            if *enabled {
                output.push_str(&format!("  {} {}\n", "+".green(), name));
            } else {
                output.push_str(&format!("  {} {}\n", "-".dimmed(), name.dimmed()));
            }
        }

        output.push_str(&format!("\n{}\n", "Sources:".cyan().bold()));
        output.push_str(&Self::source_line(
            "lint",
            env.eslint.as_ref().map(|e| e.file.qualified_path.as_str()),
            true,
        ));
        output.push_str(&Self::config_source_line("tern", env.tern_project.as_ref()));
        output.push_str(&Self::config_source_line("package", env.package_json.as_ref()));

        if !env.definitions.is_empty() {
            output.push_str(&format!("\n{}\n", "Definitions:".cyan().bold()));
            for definition in &env.definitions {
                output.push_str(&format!("  * {}\n", definition));
            }
        }

        output
    }

    /// Format a configuration file and its values
    pub fn format_config(title: &str, entry: Option<&ConfigEntry>) -> String {
        let Some(entry) = entry else {
            return format!("{} {}\n", format!("{}:", title).cyan().bold(), "none".dimmed());
        };
        let values =
            serde_json::to_string_pretty(&entry.values).unwrap_or_else(|_| "{}".to_string());
        format!(
            "{} {}\n{}\n",
            format!("{}:", title).cyan().bold(),
            entry.file.qualified_path,
            Self::indent(&values, "  ")
        )
    }

    /// Format the ECMAScript level
    pub fn format_ecma(level: EcmaLevel) -> String {
        format!("{} {}\n", "ECMAScript:".cyan().bold(), level)
    }

    /// Format completion proposals, one per line
    pub fn format_proposals(proposals: &[Proposal]) -> String {
        if proposals.is_empty() {
            return format!("{}\n", "No proposals".dimmed());
        }
        let mut output = String::new();
        for proposal in proposals {
            match &proposal.description {
                Some(description) => output.push_str(&format!("  {}\n", description.yellow())),
                None => output.push_str(&format!("  {}\n", proposal.proposal.bold())),
            }
        }
        output
    }

    fn project_line(root: Option<&ProjectRoot>) -> String {
        match root {
            Some(root) => format!("{} {}\n", "Project:".cyan().bold(), root),
            None => format!("{} {}\n", "Project:".cyan().bold(), "none".dimmed()),
        }
    }

    fn config_source_line(label: &str, source: Option<&ConfigSource>) -> String {
        Self::source_line(
            label,
            source.map(|s| s.file.qualified_path.as_str()),
            source.is_some_and(|s| s.values.is_some()),
        )
    }

    fn source_line(label: &str, location: Option<&str>, parsed: bool) -> String {
        match location {
            Some(location) if parsed => format!("  {:<8} {}\n", label, location),
            Some(location) => format!(
                "  {:<8} {} {}\n",
                label,
                location,
                "(unparsable)".red()
            ),
            None => format!("  {:<8} {}\n", label, "-".dimmed()),
        }
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_environment(&self, root: Option<&ProjectRoot>, env: &EnvironmentGuess) -> String {
        Self::format_environment(root, env)
    }

    fn format_config(&self, title: &str, entry: Option<&ConfigEntry>) -> String {
        Self::format_config(title, entry)
    }

    fn format_ecma(&self, level: EcmaLevel) -> String {
        Self::format_ecma(level)
    }

    fn format_proposals(&self, proposals: &[Proposal]) -> String {
        Self::format_proposals(proposals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsctx_domain::{FileHandle, JavaScriptContentAssist};
    use serde_json::json;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_environment_lists_flags_and_sources() {
        plain();
        let root = ProjectRoot::new("/p/");
        let mut env = EnvironmentGuess::seeded();
        env.apply_package_json(Some(FileHandle::new(
            "/p/package.json",
            r#"{"dependencies":{"react":"*"}}"#,
            root.clone(),
        )));

        let output = ConsoleFormatter::format_environment(Some(&root), &env);

        assert!(output.contains("Project: /p/"));
        assert!(output.contains("+ react"));
        assert!(output.contains("+ node"));
        assert!(output.contains("package  /p/package.json"));
        assert!(output.contains("lint     -"));
        assert!(!output.contains("Definitions:"));
    }

    #[test]
    fn test_unparsable_source_is_marked() {
        plain();
        let root = ProjectRoot::new("/p/");
        let mut env = EnvironmentGuess::seeded();
        env.apply_tern_project(Some(FileHandle::new("/p/.tern-project", "{", root)));

        let output = ConsoleFormatter::format_environment(None, &env);

        assert!(output.contains("Project: none"));
        assert!(output.contains("/p/.tern-project (unparsable)"));
    }

    #[test]
    fn test_config_with_values() {
        plain();
        let entry = ConfigEntry::new(
            FileHandle::new("/p/.eslintrc", "", ProjectRoot::new("/p/")),
            json!({"env": {"mocha": true}}),
        );

        let output = ConsoleFormatter::format_config("Lint", Some(&entry));

        assert!(output.starts_with("Lint: /p/.eslintrc\n"));
        assert!(output.contains("    \"mocha\": true"));
    }

    #[test]
    fn test_missing_config() {
        plain();
        assert_eq!(ConsoleFormatter::format_config("Formatting", None), "Formatting: none\n");
    }

    #[test]
    fn test_ecma() {
        plain();
        assert_eq!(ConsoleFormatter::format_ecma(EcmaLevel::DEFAULT), "ECMAScript: 6\n");
    }

    #[test]
    fn test_proposals() {
        plain();
        let proposals = JavaScriptContentAssist::proposals("wh", "wh", 2);

        let output = ConsoleFormatter::format_proposals(&proposals);

        assert_eq!(output, "  while - while loop with condition\n  while\n");
        assert_eq!(ConsoleFormatter::format_proposals(&[]), "No proposals\n");
    }

    #[test]
    fn test_indent() {
        assert_eq!(ConsoleFormatter::indent("a\nb", "> "), "> a\n> b");
    }
}
