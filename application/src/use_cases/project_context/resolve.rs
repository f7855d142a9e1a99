//! Project root resolution
//!
//! Every input change starts a new resolution with its own readiness
//! signal. Callers that started waiting earlier keep observing the signal
//! they picked up.

use super::ProjectContext;
use crate::ports::file_store::{FileStore, StoreError};
use crate::use_cases::shared::first_some;
use jsctx_domain::{FileMetadata, InputChanged, ProjectFile, ProjectRoot};
use tokio::sync::watch;
use tracing::{debug, info, warn};

impl<S: FileStore + 'static> ProjectContext<S> {
    /// Handles a switch of the active file.
    ///
    /// Keeps the current root when the file lies inside it. Otherwise
    /// resolves a root and, when it differs from the current one, drops
    /// everything derived from the old root before notifying handlers.
    pub async fn on_input_changed(&self, event: InputChanged) {
        let Some(file) = event.file.as_ref() else {
            debug!("Input changed without a file, ignoring");
            return;
        };

        let (settle, ready) = watch::channel(None);
        {
            let mut state = self.lock();
            state.initialized = true;
            state.ready = Some(ready);

            if let Some(root) = state.root.clone()
                && root.contains(&file.location)
            {
                debug!("{} is inside {}, keeping root", file.location, root);
                state.dispatch(|handler, ctx| handler.on_input_changed(ctx, &event, &root));
                settle.send_replace(Some(Some(root)));
                return;
            }
        }

        let root = self.resolve_root(file).await;
        match &root {
            Some(root) => self.adopt_root(root, &event).await,
            None => {
                info!("No project found for {}", file.location);
                let mut state = self.lock();
                state.reset_for(None);
                state.dispatch(|handler, ctx| handler.on_project_changed(ctx, &event, None));
            }
        }
        settle.send_replace(Some(root));
    }

    async fn adopt_root(&self, root: &ProjectRoot, event: &InputChanged) {
        {
            let mut state = self.lock();
            if state.root.as_ref() == Some(root) {
                state.dispatch(|handler, ctx| handler.on_input_changed(ctx, event, root));
                return;
            }
            info!("Project root changed to {}", root);
            state.reset_for(Some(root.clone()));
        }

        let has_node_modules = self.probe_node_modules(root).await;

        let mut state = self.lock();
        if state.root.as_ref() != Some(root) {
            debug!("{} was superseded while resolving", root);
            return;
        }
        state.has_node_modules = has_node_modules;
        state.dispatch(|handler, ctx| handler.on_project_changed(ctx, event, Some(root)));
    }

    async fn probe_node_modules(&self, root: &ProjectRoot) -> bool {
        let location = root.join(ProjectFile::NodeModules);
        match self.store.read_metadata(&location).await {
            Ok(Some(meta)) => meta.directory,
            Ok(None) => false,
            Err(e) => {
                debug!("Failed to stat {}: {}", location, e);
                false
            }
        }
    }

    /// Picks the root for `file`.
    ///
    /// Files without parents get the default root. Otherwise the store is
    /// asked for the owning project, falling back to local resolution when
    /// it has no answer.
    async fn resolve_root(&self, file: &FileMetadata) -> Option<ProjectRoot> {
        if file.parents.is_empty() {
            debug!("{} has no parents, using the default root", file.location);
            return self.options.default_root.clone();
        }

        let markers: Vec<&str> = ProjectFile::project_markers()
            .iter()
            .map(ProjectFile::file_name)
            .collect();
        match self.store.get_project(&file.location, &markers).await {
            Ok(Some(location)) => return Some(ProjectRoot::new(location)),
            Ok(None) => debug!("Store knows no project for {}", file.location),
            Err(StoreError::Unsupported(reason)) => debug!("No store project lookup: {}", reason),
            Err(e) => warn!("Project lookup failed for {}: {}", file.location, e),
        }

        self.fallback_root(&file.parents).await
    }

    /// Resolves a root from the parent chain alone.
    ///
    /// On a filesystem host the project files are probed under the nearest
    /// parent, the outermost parent and the default root, in that order,
    /// and the first folder holding one wins. Other hosts adopt the
    /// outermost parent.
    async fn fallback_root(&self, parents: &[String]) -> Option<ProjectRoot> {
        if !self.options.filesystem_host {
            return parents.last().map(ProjectRoot::new);
        }

        let mut candidates: Vec<ProjectRoot> = Vec::new();
        let nearest = parents.first().map(ProjectRoot::new);
        let outermost = parents.last().map(ProjectRoot::new);
        for root in [nearest, outermost, self.options.default_root.clone()]
            .into_iter()
            .flatten()
        {
            if !candidates.contains(&root) {
                candidates.push(root);
            }
        }

        let probes = candidates.iter().flat_map(|root| {
            ProjectFile::project_files()
                .iter()
                .map(move |file| (root, file.file_name()))
        });
        let found = first_some(probes, |(root, name)| async move {
            self.fetch_file(name, Some(root))
                .await
                .map(|handle| handle.project)
        })
        .await;

        found.or_else(|| self.options.default_root.clone())
    }
}
