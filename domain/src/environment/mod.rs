//! Environment inference
//!
//! Guesses the runtime a project targets (browser, node, es6, amd and
//! dependency-derived flags) from whichever configuration files it carries.
//! The guess is built in a fixed sequence where later, more specific
//! sources overwrite earlier conclusions:
//!
//! 1. Seed with `browser` and `node`
//! 2. Lint configuration `env` declarations
//! 3. `.tern-project` libs, defs, plugins, `ecmaVersion` and `sourceType`
//! 4. `package.json` dependencies (presence of the manifest implies `node`)
//! 5. Type definition files in `.definitions/`
//!
//! The steps are pure; fetching the files is the caller's job.

pub mod ecma;

pub use ecma::EcmaLevel;

use crate::config::{ConfigEntry, parse_json};
use crate::project::{FileHandle, ProjectFile};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::debug;

pub const BROWSER: &str = "browser";
pub const NODE: &str = "node";
pub const ES6: &str = "es6";
pub const AMD: &str = "amd";

/// Environment name to enabled flag.
pub type EnvFlags = BTreeMap<String, bool>;

/// A configuration file consulted during inference.
///
/// `values` is `None` when the file could not be parsed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfigSource {
    pub file: FileHandle,
    pub values: Option<Value>,
}

/// The computed environment plus the raw sources it was derived from.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EnvironmentGuess {
    pub envs: EnvFlags,
    /// Lint configuration whose `env` section was merged.
    pub eslint: Option<ConfigEntry>,
    /// The `.tern-project` file, if present.
    pub tern_project: Option<ConfigSource>,
    /// The `package.json` file, if present.
    pub package_json: Option<ConfigSource>,
    /// Definition files found under `.definitions/`.
    pub definitions: Vec<String>,
}

impl EnvironmentGuess {
    /// Starts a guess assuming both browser and node.
    pub fn seeded() -> Self {
        let mut guess = Self::default();
        guess.enable(BROWSER);
        guess.enable(NODE);
        guess
    }

    pub fn is_enabled(&self, env: &str) -> bool {
        self.envs.get(env).copied().unwrap_or(false)
    }

    fn enable(&mut self, env: &str) {
        self.envs.insert(env.to_string(), true);
    }

    /// Merges the `env` declarations of the lint configuration.
    pub fn apply_lint_options(&mut self, options: Option<ConfigEntry>) {
        if let Some(env) = options
            .as_ref()
            .and_then(|o| o.values.get("env"))
            .and_then(Value::as_object)
        {
            for (key, value) in env {
                self.envs.insert(key.clone(), is_truthy(value));
            }
        }
        self.eslint = options;
    }

    /// Applies the cues found in `.tern-project`.
    pub fn apply_tern_project(&mut self, file: Option<FileHandle>) {
        let Some(file) = file else {
            self.tern_project = None;
            return;
        };

        let values = match parse_json(ProjectFile::TernProject.file_name(), &file.contents) {
            Ok(values) => Some(values),
            Err(e) => {
                debug!("Ignoring {}: {}", file.qualified_path, e);
                None
            }
        };
        if let Some(values) = &values {
            self.apply_tern_values(values);
        }
        self.tern_project = Some(ConfigSource { file, values });
    }

    fn apply_tern_values(&mut self, values: &Value) {
        for section in ["libs", "defs"] {
            if let Some(names) = values.get(section).and_then(Value::as_array) {
                if contains_str(names, BROWSER) {
                    self.enable(BROWSER);
                } else if contains_str(names, "ecma6") {
                    self.enable(ES6);
                }
            }
        }

        if let Some(plugins) = values.get("plugins").and_then(Value::as_object) {
            let plugin = |name: &str| plugins.get(name).is_some_and(is_truthy);
            if plugin(NODE) {
                self.enable(NODE);
            } else if !plugins.is_empty() {
                // package.json may bring node back later
                self.envs.remove(NODE);
            }
            if plugin("requirejs") || plugin("commonjs") {
                self.enable(AMD);
                self.enable(BROWSER);
            }
            if plugin("es6_modules") {
                self.enable(ES6);
                self.enable(BROWSER);
                self.enable(NODE);
            }
        }

        if values
            .get("ecmaVersion")
            .and_then(Value::as_f64)
            .is_some_and(|v| v >= 6.0)
        {
            self.enable(ES6);
        }

        if values.get("sourceType").and_then(Value::as_str) == Some("modules") {
            self.enable(ES6);
            self.enable(BROWSER);
            self.enable(NODE);
        }
    }

    /// Applies the cues found in `package.json`.
    ///
    /// Only the keys of `dependencies` become flags. When `dependencies` is
    /// missing but `devDependencies` or `optionalDependencies` exist, the
    /// lookup still reads `dependencies` and so contributes nothing. The
    /// mere presence of the manifest enables `node`.
    pub fn apply_package_json(&mut self, file: Option<FileHandle>) {
        let Some(file) = file else {
            self.package_json = None;
            return;
        };

        let values = match parse_json(ProjectFile::PackageJson.file_name(), &file.contents) {
            Ok(values) => Some(values),
            Err(e) => {
                debug!("Ignoring {}: {}", file.qualified_path, e);
                None
            }
        };
        if let Some(values) = &values {
            let present = |key: &str| values.get(key).is_some_and(is_truthy);
            let section = if present("dependencies")
                || present("devDependencies")
                || present("optionalDependencies")
            {
                values.get("dependencies").and_then(Value::as_object)
            } else {
                None
            };
            for name in section.into_iter().flat_map(|deps| deps.keys()) {
                self.enable(name);
            }
        }
        self.enable(NODE);
        self.package_json = Some(ConfigSource { file, values });
    }

    /// Records the definition files found in `.definitions/`.
    pub fn apply_definitions<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let folder = ProjectFile::Definitions.file_name();
        self.definitions = names
            .into_iter()
            .map(|name| format!("{}/{}", folder, name.as_ref()))
            .collect();
    }

    /// Names of the enabled environments.
    pub fn enabled(&self) -> impl Iterator<Item = &str> {
        self.envs
            .iter()
            .filter(|(_, on)| **on)
            .map(|(name, _)| name.as_str())
    }
}

fn contains_str(values: &[Value], needle: &str) -> bool {
    values.iter().any(|v| v.as_str() == Some(needle))
}

/// JavaScript truthiness of a JSON value.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::ProjectRoot;
    use serde_json::json;

    fn handle(name: &str, contents: &str) -> FileHandle {
        FileHandle::new(format!("/p/{}", name), contents, ProjectRoot::new("/p/"))
    }

    fn tern(contents: &str) -> EnvironmentGuess {
        let mut guess = EnvironmentGuess::seeded();
        guess.apply_tern_project(Some(handle(".tern-project", contents)));
        guess
    }

    #[test]
    fn test_seed() {
        let guess = EnvironmentGuess::seeded();
        assert!(guess.is_enabled(BROWSER));
        assert!(guess.is_enabled(NODE));
        assert_eq!(guess.envs.len(), 2);
    }

    #[test]
    fn test_lint_env_merges() {
        let mut guess = EnvironmentGuess::seeded();
        let entry = ConfigEntry::new(
            handle(".eslintrc.json", ""),
            json!({"env": {"mocha": true, "node": false}}),
        );
        guess.apply_lint_options(Some(entry));
        assert!(guess.is_enabled("mocha"));
        assert!(!guess.is_enabled(NODE));
        assert!(guess.is_enabled(BROWSER));
        assert!(guess.eslint.is_some());
    }

    #[test]
    fn test_tern_libs_browser_wins_over_ecma6() {
        let guess = tern(r#"{"libs": ["ecma6", "browser"]}"#);
        assert!(guess.is_enabled(BROWSER));
        assert!(!guess.is_enabled(ES6));
    }

    #[test]
    fn test_tern_libs_ecma6() {
        let guess = tern(r#"{"libs": ["ecma5", "ecma6"]}"#);
        assert!(guess.is_enabled(ES6));
    }

    #[test]
    fn test_tern_defs_ecma6() {
        let guess = tern(r#"{"defs": ["ecma6"]}"#);
        assert!(guess.is_enabled(ES6));
    }

    #[test]
    fn test_tern_node_plugin() {
        let guess = tern(r#"{"plugins": {"node": {}}}"#);
        assert!(guess.is_enabled(NODE));
    }

    #[test]
    fn test_tern_other_plugin_drops_node() {
        let guess = tern(r#"{"plugins": {"doc_comment": {}}}"#);
        assert!(!guess.envs.contains_key(NODE));
        assert!(guess.is_enabled(BROWSER));
    }

    #[test]
    fn test_tern_empty_plugins_keep_node() {
        let guess = tern(r#"{"plugins": {}}"#);
        assert!(guess.is_enabled(NODE));
    }

    #[test]
    fn test_tern_requirejs_means_amd() {
        let guess = tern(r#"{"plugins": {"requirejs": {}}}"#);
        assert!(guess.is_enabled(AMD));
        assert!(guess.is_enabled(BROWSER));
        assert!(!guess.envs.contains_key(NODE));
    }

    #[test]
    fn test_tern_es6_modules() {
        let guess = tern(r#"{"plugins": {"es6_modules": {}}}"#);
        assert!(guess.is_enabled(ES6));
        assert!(guess.is_enabled(NODE));
        assert!(guess.is_enabled(BROWSER));
    }

    #[test]
    fn test_tern_ecma_version() {
        assert!(tern(r#"{"ecmaVersion": 6}"#).is_enabled(ES6));
        assert!(tern(r#"{"ecmaVersion": 7}"#).is_enabled(ES6));
        assert!(!tern(r#"{"ecmaVersion": 5}"#).is_enabled(ES6));
        assert!(!tern(r#"{"ecmaVersion": "6"}"#).is_enabled(ES6));
    }

    #[test]
    fn test_tern_source_type_modules() {
        let guess = tern(r#"{"sourceType": "modules", "plugins": {"doc_comment": {}}}"#);
        assert!(guess.is_enabled(ES6));
        assert!(guess.is_enabled(NODE));
    }

    #[test]
    fn test_tern_bad_json_keeps_source_without_values() {
        let guess = tern("{libs:");
        let source = guess.tern_project.as_ref().unwrap();
        assert!(source.values.is_none());
        assert_eq!(guess.envs.len(), 2);
    }

    #[test]
    fn test_package_dependencies_become_flags() {
        let mut guess = EnvironmentGuess::seeded();
        guess.apply_package_json(Some(handle(
            "package.json",
            r#"{"dependencies": {"react": "*", "express": "^4"}}"#,
        )));
        assert!(guess.is_enabled("react"));
        assert!(guess.is_enabled("express"));
        assert!(guess.is_enabled(NODE));
    }

    #[test]
    fn test_package_dev_dependencies_read_regular_section() {
        // devDependencies alone contribute nothing: the lookup reads `dependencies`
        let mut guess = EnvironmentGuess::seeded();
        guess.apply_package_json(Some(handle(
            "package.json",
            r#"{"devDependencies": {"mocha": "*"}, "optionalDependencies": {"fsevents": "*"}}"#,
        )));
        assert!(!guess.envs.contains_key("mocha"));
        assert!(!guess.envs.contains_key("fsevents"));
        assert!(guess.is_enabled(NODE));
    }

    #[test]
    fn test_package_presence_restores_node() {
        let mut guess = tern(r#"{"plugins": {"doc_comment": {}}}"#);
        guess.apply_package_json(Some(handle("package.json", "not json")));
        assert!(guess.is_enabled(NODE));
        assert!(guess.package_json.as_ref().unwrap().values.is_none());
    }

    #[test]
    fn test_definitions() {
        let mut guess = EnvironmentGuess::seeded();
        guess.apply_definitions(["jquery.json", "lodash.json"]);
        assert_eq!(
            guess.definitions,
            vec![".definitions/jquery.json", ".definitions/lodash.json"]
        );
    }

    #[test]
    fn test_truthiness() {
        assert!(is_truthy(&json!({})));
        assert!(is_truthy(&json!("x")));
        assert!(!is_truthy(&json!("")));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&Value::Null));
    }

    #[test]
    fn test_enabled_lists_true_flags_only() {
        let mut guess = EnvironmentGuess::seeded();
        guess.envs.insert("jquery".to_string(), false);
        let enabled: Vec<_> = guess.enabled().collect();
        assert_eq!(enabled, vec![BROWSER, NODE]);
    }
}
