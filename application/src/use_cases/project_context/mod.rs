//! Project Context use case
//!
//! Tracks the project the active file belongs to and serves the
//! configuration other tools consume from it.
//!
//! | Operation                    | Source files                              | Cached  |
//! |------------------------------|-------------------------------------------|---------|
//! | `lint_options`               | `.eslintrc*`, `package.json#eslintConfig` | yes     |
//! | `formatting_options`         | `.jsbeautifyrc`                           | yes     |
//! | `computed_environment`       | lint config, `.tern-project`, `package.json`, `.definitions/` | yes |
//! | `ecma_level`                 | `.tern-project`                           | yes     |
//! | `fetch_file`                 | any file under the root                   | hits    |
//! | `fetch_folder`               | any folder under the root                 | no      |
//!
//! Cached values stay until a [`ProjectHandler`] drops them in response to
//! a file change or a root change. State lives behind a mutex that is never
//! held across a store call. A value whose store calls overlap a change
//! batch or a root change is returned but not cached.

mod changes;
mod options;
mod resolve;
mod types;


pub use types::UpdateFileError;

use types::ProjectState;

use crate::config::ProjectOptions;
use crate::handlers;
use crate::ports::file_store::FileStore;
use crate::ports::project_handler::ProjectHandler;
use jsctx_domain::{FileHandle, FileMetadata, InputChanged, ProjectFile, ProjectRoot};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::debug;

/// Use case tracking the active JavaScript project
pub struct ProjectContext<S: FileStore + 'static> {
    store: Arc<S>,
    options: ProjectOptions,
    state: Mutex<ProjectState>,
}

impl<S: FileStore + 'static> ProjectContext<S> {
    /// Creates a context with the built-in handlers registered.
    pub fn new(store: Arc<S>, options: ProjectOptions) -> Self {
        let state = ProjectState {
            handlers: handlers::builtin(),
            ..Default::default()
        };
        Self {
            store,
            options,
            state: Mutex::new(state),
        }
    }

    fn lock(&self) -> MutexGuard<'_, ProjectState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Registers a handler after all existing ones.
    pub fn add_handler(&self, handler: Arc<dyn ProjectHandler>) {
        self.lock().handlers.push(handler);
    }

    /// The currently resolved root, if any.
    pub fn project_path(&self) -> Option<ProjectRoot> {
        self.lock().root.clone()
    }

    /// Waits for the most recent root resolution and returns its root.
    ///
    /// Returns the current root immediately when no resolution was ever
    /// started. A resolution started after this call does not affect the
    /// result.
    pub async fn project_ready(&self) -> Option<ProjectRoot> {
        let ready = self.lock().ready.clone();
        let Some(mut ready) = ready else {
            return self.project_path();
        };
        match ready.wait_for(Option::is_some).await {
            Ok(resolved) => (*resolved).clone().flatten(),
            // The resolving task went away without settling.
            Err(_) => self.project_path(),
        }
    }

    /// Whether the project has a `node_modules` folder.
    pub fn has_node_modules(&self) -> bool {
        self.lock().has_node_modules
    }

    /// Whether a change to this file affects type inference.
    ///
    /// True for the project marker and lint configuration files, and for
    /// anything under the project's `.definitions` folder.
    pub fn is_important_change(&self, qualified_path: &str, short_name: &str) -> bool {
        if ProjectFile::project_files()
            .iter()
            .any(|file| file.file_name() == short_name)
        {
            return true;
        }
        self.lock().root.as_ref().is_some_and(|root| {
            qualified_path.starts_with(&root.join(ProjectFile::Definitions))
        })
    }

    /// Seeds the context from a file path once per session.
    ///
    /// Does nothing once any input has been seen, or when the store knows
    /// nothing about `location`.
    pub async fn init_from(&self, location: &str) {
        {
            let mut state = self.lock();
            if state.initialized {
                return;
            }
            state.initialized = true;
        }
        match self.store.read_metadata(location).await {
            Ok(Some(file)) => self.on_input_changed(InputChanged::new(file)).await,
            Ok(None) => debug!("Nothing to initialize from at {}", location),
            Err(e) => debug!("Failed to initialize from {}: {}", location, e),
        }
    }

    /// Fetches a file directly under `root`, or under the current root.
    ///
    /// Missing files, unreadable files and the absence of any root all
    /// yield `None`. Only successful reads are cached, so a file created
    /// later is picked up by the next fetch.
    pub async fn fetch_file(&self, name: &str, root: Option<&ProjectRoot>) -> Option<FileHandle> {
        let root = match root {
            Some(root) => root.clone(),
            None => self.project_path()?,
        };
        let location = root.child(name);

        let (cached, generation) = {
            let state = self.lock();
            (state.files.get(&location).cloned(), state.generation)
        };
        if cached.is_some() {
            debug!("File cache hit: {}", location);
            return cached;
        }

        match self.store.read(&location).await {
            Ok(Some(contents)) => {
                debug!("Fetched {}", location);
                let handle = FileHandle::new(location.clone(), contents, root);
                let mut state = self.lock();
                if state.generation == generation {
                    state.files.insert(location, handle.clone());
                } else {
                    debug!("{} changed while reading, not cached", location);
                }
                Some(handle)
            }
            Ok(None) => {
                debug!("No file at {}", location);
                None
            }
            Err(e) => {
                debug!("Failed to read {}: {}", location, e);
                None
            }
        }
    }

    /// Lists a folder directly under the current root. Never cached.
    pub async fn fetch_folder(&self, name: &str) -> Vec<FileMetadata> {
        let Some(root) = self.project_path() else {
            return Vec::new();
        };
        let location = root.child(name);
        match self.store.fetch_children(&location).await {
            Ok(children) => children,
            Err(e) => {
                debug!("Failed to list {}: {}", location, e);
                Vec::new()
            }
        }
    }
}
