//! Value objects for project files
//!
//! This module names the configuration files a JavaScript project may carry
//! and provides the small value types the project context passes around:
//! the resolved [`ProjectRoot`] and the cached [`FileHandle`].
//!
//! # Example
//!
//! ```
//! use jsctx_domain::project::{ProjectFile, ProjectRoot, short_name};
//!
//! let root = ProjectRoot::new("/file/web");
//! assert_eq!(root.as_str(), "/file/web/");
//! assert_eq!(root.join(ProjectFile::PackageJson), "/file/web/package.json");
//! assert_eq!(short_name("/file/web/node_modules/"), "node_modules");
//! ```

use serde::{Deserialize, Serialize};

/// Configuration files and folders recognized in a project.
///
/// File names are exact and case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectFile {
    /// `.tern-project` - type inference configuration
    TernProject,
    /// `.eslintrc` - lint configuration (JSON without suffix)
    Eslintrc,
    /// `.eslintrc.js` - lint configuration as a script
    EslintrcJs,
    /// `.eslintrc.json` - lint configuration as JSON
    EslintrcJson,
    /// `.eslintrc.yaml` - lint configuration as YAML
    EslintrcYaml,
    /// `.eslintrc.yml` - lint configuration as YAML
    EslintrcYml,
    /// `package.json` - package manifest
    PackageJson,
    /// `.jsbeautifyrc` - formatting configuration
    Jsbeautifyrc,
    /// `project.json`
    ProjectJson,
    /// `jsconfig.json`
    JsconfigJson,
    /// `node_modules` folder
    NodeModules,
    /// `.definitions` folder holding type definition files
    Definitions,
}

/// Lint configuration candidates in probe order.
const LINT_CONFIGS: &[ProjectFile] = &[
    ProjectFile::EslintrcJs,
    ProjectFile::EslintrcJson,
    ProjectFile::Eslintrc,
    ProjectFile::EslintrcYaml,
    ProjectFile::EslintrcYml,
    ProjectFile::PackageJson,
];

/// Files whose presence marks a project boundary.
const PROJECT_MARKERS: &[ProjectFile] = &[ProjectFile::PackageJson, ProjectFile::TernProject];

/// Marker files followed by every lint configuration, without duplicates.
const PROJECT_FILES: &[ProjectFile] = &[
    ProjectFile::PackageJson,
    ProjectFile::TernProject,
    ProjectFile::EslintrcJs,
    ProjectFile::EslintrcJson,
    ProjectFile::Eslintrc,
    ProjectFile::EslintrcYaml,
    ProjectFile::EslintrcYml,
];

impl ProjectFile {
    /// Returns the exact file (or folder) name.
    pub fn file_name(&self) -> &'static str {
        match self {
            ProjectFile::TernProject => ".tern-project",
            ProjectFile::Eslintrc => ".eslintrc",
            ProjectFile::EslintrcJs => ".eslintrc.js",
            ProjectFile::EslintrcJson => ".eslintrc.json",
            ProjectFile::EslintrcYaml => ".eslintrc.yaml",
            ProjectFile::EslintrcYml => ".eslintrc.yml",
            ProjectFile::PackageJson => "package.json",
            ProjectFile::Jsbeautifyrc => ".jsbeautifyrc",
            ProjectFile::ProjectJson => "project.json",
            ProjectFile::JsconfigJson => "jsconfig.json",
            ProjectFile::NodeModules => "node_modules",
            ProjectFile::Definitions => ".definitions",
        }
    }

    /// Looks up a recognized file by its short name.
    pub fn from_file_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|f| f.file_name() == name)
    }

    /// True when the file can carry lint configuration.
    ///
    /// `package.json` counts because it may embed an `eslintConfig` section.
    pub fn is_lint_config(&self) -> bool {
        LINT_CONFIGS.contains(self)
    }

    /// Lint configuration candidates in the order they are probed.
    pub fn lint_configs() -> &'static [ProjectFile] {
        LINT_CONFIGS
    }

    /// Marker files used to locate a project root.
    pub fn project_markers() -> &'static [ProjectFile] {
        PROJECT_MARKERS
    }

    /// Every file whose change matters to project-level tooling.
    pub fn project_files() -> &'static [ProjectFile] {
        PROJECT_FILES
    }

    /// All recognized files and folders.
    pub fn all() -> &'static [ProjectFile] {
        &[
            ProjectFile::TernProject,
            ProjectFile::Eslintrc,
            ProjectFile::EslintrcJs,
            ProjectFile::EslintrcJson,
            ProjectFile::EslintrcYaml,
            ProjectFile::EslintrcYml,
            ProjectFile::PackageJson,
            ProjectFile::Jsbeautifyrc,
            ProjectFile::ProjectJson,
            ProjectFile::JsconfigJson,
            ProjectFile::NodeModules,
            ProjectFile::Definitions,
        ]
    }
}

impl std::fmt::Display for ProjectFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.file_name())
    }
}

/// The root location of the active project.
///
/// Roots are folder locations and always end with `/`, so a child location
/// is formed by plain concatenation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectRoot(String);

impl ProjectRoot {
    pub fn new(location: impl Into<String>) -> Self {
        let mut location = location.into();
        if !location.ends_with('/') {
            location.push('/');
        }
        Self(location)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Location of a recognized file directly under this root.
    pub fn join(&self, file: ProjectFile) -> String {
        self.child(file.file_name())
    }

    /// Location of an arbitrary child directly under this root.
    pub fn child(&self, name: &str) -> String {
        format!("{}{}", self.0, name)
    }

    /// True if `location` is this root or lies beneath it.
    pub fn contains(&self, location: &str) -> bool {
        location.starts_with(&self.0)
    }
}

impl std::fmt::Display for ProjectRoot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A project file whose contents have been read from the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileHandle {
    /// Fully qualified location of the file.
    pub qualified_path: String,
    /// Last path segment, e.g. `package.json`.
    pub short_name: String,
    /// Raw file contents.
    pub contents: String,
    /// Root the file was fetched relative to.
    pub project: ProjectRoot,
}

impl FileHandle {
    pub fn new(
        qualified_path: impl Into<String>,
        contents: impl Into<String>,
        project: ProjectRoot,
    ) -> Self {
        let qualified_path = qualified_path.into();
        Self {
            short_name: short_name(&qualified_path).to_string(),
            qualified_path,
            contents: contents.into(),
            project,
        }
    }
}

/// Returns the last segment of a location.
///
/// A single trailing `/` (folder locations) is ignored, so
/// `/a/node_modules/` yields `node_modules`.
pub fn short_name(location: &str) -> &str {
    let trimmed = location.strip_suffix('/').unwrap_or(location);
    match trimmed.rfind('/') {
        Some(i) => &trimmed[i + 1..],
        None => trimmed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_names_round_trip_through_lookup() {
        for file in ProjectFile::all() {
            assert_eq!(ProjectFile::from_file_name(file.file_name()), Some(*file));
        }
        assert_eq!(ProjectFile::from_file_name(".ESLINTRC"), None);
    }

    #[test]
    fn test_lint_probe_order() {
        let names: Vec<_> = ProjectFile::lint_configs()
            .iter()
            .map(|f| f.file_name())
            .collect();
        assert_eq!(
            names,
            vec![
                ".eslintrc.js",
                ".eslintrc.json",
                ".eslintrc",
                ".eslintrc.yaml",
                ".eslintrc.yml",
                "package.json"
            ]
        );
    }

    #[test]
    fn test_package_json_is_lint_config_and_marker() {
        assert!(ProjectFile::PackageJson.is_lint_config());
        assert!(ProjectFile::project_markers().contains(&ProjectFile::PackageJson));
        assert!(!ProjectFile::TernProject.is_lint_config());
        assert!(!ProjectFile::Jsbeautifyrc.is_lint_config());
    }

    #[test]
    fn test_root_gets_trailing_slash() {
        assert_eq!(ProjectRoot::new("/file/a").as_str(), "/file/a/");
        assert_eq!(ProjectRoot::new("/file/a/").as_str(), "/file/a/");
    }

    #[test]
    fn test_root_contains() {
        let root = ProjectRoot::new("/file/a/");
        assert!(root.contains("/file/a/src/x.js"));
        assert!(!root.contains("/file/ab/x.js"));
        assert!(!root.contains("/file/"));
    }

    #[test]
    fn test_short_name() {
        assert_eq!(short_name("/file/a/.eslintrc"), ".eslintrc");
        assert_eq!(short_name("/file/a/node_modules/"), "node_modules");
        assert_eq!(short_name("package.json"), "package.json");
    }

    #[test]
    fn test_file_handle_short_name() {
        let handle = FileHandle::new("/p/.tern-project", "{}", ProjectRoot::new("/p/"));
        assert_eq!(handle.short_name, ".tern-project");
        assert_eq!(handle.project, ProjectRoot::new("/p/"));
    }
}
