//! Configuration resolution and updates

use super::types::Snapshot;
use super::{ProjectContext, UpdateFileError};
use crate::ports::file_store::FileStore;
use crate::use_cases::shared::first_some;
use jsctx_domain::config::{
    defaults_for, merge, parse_formatting_config, parse_json, parse_lint_config, to_pretty_json,
};
use jsctx_domain::{ConfigCache, ConfigEntry, EcmaLevel, EnvironmentGuess, ProjectFile};
use serde_json::Value;
use tracing::debug;

impl<S: FileStore + 'static> ProjectContext<S> {
    /// Lint configuration of the project.
    ///
    /// Candidates are probed in order and the first one that parses to a
    /// non-empty object wins. `.eslintrc.js` is never evaluated.
    pub async fn lint_options(&self) -> Option<ConfigEntry> {
        let (cached, snapshot) = self.cached(|cache| cache.lint.clone());
        if let Some(cached) = cached {
            debug!("Lint configuration cache hit");
            return cached;
        }

        let found = first_some(ProjectFile::lint_configs().iter().copied(), |file| async move {
            self.read_lint_config(file).await
        })
        .await;

        self.cache_if_current(&snapshot, |cache| cache.lint = Some(found.clone()));
        found
    }

    async fn read_lint_config(&self, file: ProjectFile) -> Option<ConfigEntry> {
        if file == ProjectFile::EslintrcJs {
            debug!("Skipping {}", file);
            return None;
        }
        let handle = self.fetch_file(file.file_name(), None).await?;
        match parse_lint_config(file, &handle.contents) {
            Ok(values) => Some(ConfigEntry::new(handle, values)),
            Err(e) => {
                debug!("Ignoring {}: {}", handle.qualified_path, e);
                None
            }
        }
    }

    /// Formatting configuration from `.jsbeautifyrc`.
    pub async fn formatting_options(&self) -> Option<ConfigEntry> {
        let (cached, snapshot) = self.cached(|cache| cache.formatting.clone());
        if let Some(cached) = cached {
            debug!("Formatting configuration cache hit");
            return cached;
        }

        let found = self
            .fetch_file(ProjectFile::Jsbeautifyrc.file_name(), None)
            .await
            .and_then(|handle| match parse_formatting_config(&handle.contents) {
                Ok(values) => Some(ConfigEntry::new(handle, values)),
                Err(e) => {
                    debug!("Ignoring {}: {}", handle.qualified_path, e);
                    None
                }
            });

        self.cache_if_current(&snapshot, |cache| cache.formatting = Some(found.clone()));
        found
    }

    /// The environment the project targets.
    ///
    /// Waits for the pending root resolution, then applies the lint
    /// configuration, `.tern-project`, `package.json` and `.definitions/`
    /// in that order, later sources overriding earlier ones.
    pub async fn computed_environment(&self) -> EnvironmentGuess {
        let (cached, _) = self.cached(|cache| cache.env.clone());
        if let Some(cached) = cached {
            debug!("Environment cache hit");
            return cached;
        }

        self.project_ready().await;
        let snapshot = self.lock().snapshot();

        let mut guess = EnvironmentGuess::seeded();
        guess.apply_lint_options(self.lint_options().await);
        guess.apply_tern_project(
            self.fetch_file(ProjectFile::TernProject.file_name(), None)
                .await,
        );
        guess.apply_package_json(
            self.fetch_file(ProjectFile::PackageJson.file_name(), None)
                .await,
        );
        let definitions = self
            .fetch_folder(ProjectFile::Definitions.file_name())
            .await;
        if !definitions.is_empty() {
            guess.apply_definitions(definitions.iter().map(|def| def.name.as_str()));
        }

        debug!(
            "Computed environment: {}",
            guess.enabled().collect::<Vec<_>>().join(", ")
        );
        self.cache_if_current(&snapshot, |cache| cache.env = Some(guess.clone()));
        guess
    }

    /// ECMAScript level from `.tern-project`, defaulting to 6.
    pub async fn ecma_level(&self) -> EcmaLevel {
        let (cached, snapshot) = self.cached(|cache| cache.ecma);
        if let Some(level) = cached {
            return level;
        }

        let level = match self
            .fetch_file(ProjectFile::TernProject.file_name(), None)
            .await
        {
            Some(handle) => EcmaLevel::from_tern_project(&handle.contents),
            None => EcmaLevel::DEFAULT,
        };

        self.cache_if_current(&snapshot, |cache| cache.ecma = Some(level));
        level
    }

    /// Merges `values` into the JSON file `name` under the current root.
    ///
    /// A missing file is created and seeded with its defaults when
    /// `create` is set, and left alone otherwise.
    pub async fn update_file(
        &self,
        name: &str,
        create: bool,
        values: Value,
    ) -> Result<(), UpdateFileError> {
        let root = self.project_path().ok_or(UpdateFileError::NoProject)?;

        let location = match self.fetch_file(name, Some(&root)).await {
            Some(handle) => {
                let json = if handle.contents.trim().is_empty() {
                    values
                } else {
                    let mut existing = parse_json(name, &handle.contents)?;
                    merge(&values, &mut existing);
                    existing
                };
                self.store
                    .write(&handle.qualified_path, &to_pretty_json(&json))
                    .await?;
                handle.qualified_path
            }
            None if create => {
                let created = self.store.create_file(root.as_str(), name).await?;
                let mut json = ProjectFile::from_file_name(name)
                    .and_then(defaults_for)
                    .unwrap_or_else(|| Value::Object(Default::default()));
                merge(&values, &mut json);
                self.store
                    .write(&created.location, &to_pretty_json(&json))
                    .await?;
                created.location
            }
            None => {
                debug!("{} does not exist, nothing to update", root.child(name));
                return Ok(());
            }
        };

        debug!("Updated {}", location);
        let mut state = self.lock();
        state.invalidate();
        state.files.remove(&location);
        Ok(())
    }

    /// Reads a cache entry together with the state it belongs to.
    fn cached<T>(&self, read: impl FnOnce(&ConfigCache) -> T) -> (T, Snapshot) {
        let state = self.lock();
        (read(&state.cache), state.snapshot())
    }

    /// Stores a computed value unless files or the root changed while
    /// computing it.
    fn cache_if_current(&self, snapshot: &Snapshot, update: impl FnOnce(&mut ConfigCache)) {
        let mut state = self.lock();
        if state.snapshot() == *snapshot {
            update(&mut state.cache);
        } else {
            debug!("Project changed while resolving, result not cached");
        }
    }
}
