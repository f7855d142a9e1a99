//! JSON output formatter

use crate::output::formatter::OutputFormatter;
use jsctx_domain::{ConfigEntry, EcmaLevel, EnvironmentGuess, Proposal, ProjectRoot};
use serde_json::{Value, json};

/// Formats project information as pretty-printed JSON
pub struct JsonFormatter;

impl JsonFormatter {
    fn render(value: Value) -> String {
        let mut output =
            serde_json::to_string_pretty(&value).unwrap_or_else(|_| "null".to_string());
        output.push('\n');
        output
    }

    fn location(entry: Option<&ConfigEntry>) -> Value {
        entry.map_or(Value::Null, |e| json!(e.file.qualified_path))
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_environment(&self, root: Option<&ProjectRoot>, env: &EnvironmentGuess) -> String {
        Self::render(json!({
            "project": root.map(ProjectRoot::as_str),
            "envs": env.envs,
            "sources": {
                "lint": Self::location(env.eslint.as_ref()),
                "tern": env.tern_project.as_ref().map(|s| &s.file.qualified_path),
                "package": env.package_json.as_ref().map(|s| &s.file.qualified_path),
            },
            "definitions": env.definitions,
        }))
    }

    fn format_config(&self, _title: &str, entry: Option<&ConfigEntry>) -> String {
        Self::render(match entry {
            Some(entry) => json!({
                "file": entry.file.qualified_path,
                "values": entry.values,
            }),
            None => Value::Null,
        })
    }

    fn format_ecma(&self, level: EcmaLevel) -> String {
        Self::render(json!({ "ecmaVersion": level.value() }))
    }

    fn format_proposals(&self, proposals: &[Proposal]) -> String {
        Self::render(serde_json::to_value(proposals).unwrap_or(Value::Null))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsctx_domain::{FileHandle, JavaScriptContentAssist};

    fn parse(output: &str) -> Value {
        serde_json::from_str(output).unwrap()
    }

    #[test]
    fn test_environment() {
        let root = ProjectRoot::new("/p/");
        let mut env = EnvironmentGuess::seeded();
        env.apply_package_json(Some(FileHandle::new("/p/package.json", "{}", root.clone())));
        env.apply_definitions(["jquery.json"]);

        let value = parse(&JsonFormatter.format_environment(Some(&root), &env));

        assert_eq!(value["project"], "/p/");
        assert_eq!(value["envs"]["node"], true);
        assert_eq!(value["envs"]["browser"], true);
        assert_eq!(value["sources"]["package"], "/p/package.json");
        assert!(value["sources"]["lint"].is_null());
        assert_eq!(value["definitions"], json!([".definitions/jquery.json"]));
    }

    #[test]
    fn test_config() {
        let entry = ConfigEntry::new(
            FileHandle::new("/p/.jsbeautifyrc", "", ProjectRoot::new("/p/")),
            json!({"indent_size": 2}),
        );

        let value = parse(&JsonFormatter.format_config("Formatting", Some(&entry)));

        assert_eq!(value["file"], "/p/.jsbeautifyrc");
        assert_eq!(value["values"]["indent_size"], 2);
        assert!(parse(&JsonFormatter.format_config("Formatting", None)).is_null());
    }

    #[test]
    fn test_ecma() {
        let value = parse(&JsonFormatter.format_ecma(EcmaLevel::DEFAULT));
        assert_eq!(value, json!({"ecmaVersion": 6}));
    }

    #[test]
    fn test_proposals() {
        let proposals = JavaScriptContentAssist::proposals("wh", "wh", 2);

        let value = parse(&JsonFormatter.format_proposals(&proposals));

        assert_eq!(value[0]["description"], "while - while loop with condition");
        assert_eq!(value[1]["proposal"], "while");
    }
}
