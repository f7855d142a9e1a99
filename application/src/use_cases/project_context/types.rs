//! Types for the project context use case

use crate::ports::file_store::StoreError;
use crate::ports::project_handler::{HandlerContext, ProjectHandler};
use jsctx_domain::{ConfigCache, DomainError, FileHandle, ProjectRoot};
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::watch;
use tracing::trace;

/// Errors from [`ProjectContext::update_file`](super::ProjectContext::update_file)
#[derive(Error, Debug)]
pub enum UpdateFileError {
    #[error("No project is resolved")]
    NoProject,

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Existing contents are not valid: {0}")]
    Parse(#[from] DomainError),
}

/// Outcome of one root resolution.
///
/// `None` while resolving, `Some(None)` when no root could be found.
pub(super) type Readiness = Option<Option<ProjectRoot>>;

/// Mutable state of a project context.
#[derive(Default)]
pub(super) struct ProjectState {
    pub root: Option<ProjectRoot>,
    pub cache: ConfigCache,
    /// Fetched files keyed by qualified path. Only hits are stored.
    pub files: HashMap<String, FileHandle>,
    pub has_node_modules: bool,
    pub handlers: Vec<Arc<dyn ProjectHandler>>,
    /// Receiver for the most recent resolution; `None` before the first.
    pub ready: Option<watch::Receiver<Readiness>>,
    pub initialized: bool,
    /// Bumped whenever cached files or configuration may be out of date.
    pub generation: u64,
}

/// The state a computed value was derived from.
///
/// A value is only cached when the snapshot taken before its store calls
/// still matches once they complete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct Snapshot {
    root: Option<ProjectRoot>,
    generation: u64,
}

impl ProjectState {
    /// Invokes `notify` for every handler, in registration order.
    pub fn dispatch<F>(&mut self, mut notify: F)
    where
        F: FnMut(&dyn ProjectHandler, &mut HandlerContext<'_>),
    {
        let Self {
            root,
            cache,
            handlers,
            ..
        } = self;
        let mut ctx = HandlerContext {
            root: root.as_ref(),
            cache,
        };
        for handler in handlers.iter() {
            trace!("Notifying handler {}", handler.name());
            notify(handler.as_ref(), &mut ctx);
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            root: self.root.clone(),
            generation: self.generation,
        }
    }

    /// Marks every value read so far as possibly stale.
    pub fn invalidate(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    /// Forgets everything derived from the previous root.
    pub fn reset_for(&mut self, root: Option<ProjectRoot>) {
        self.invalidate();
        self.root = root;
        self.cache.invalidate_ecma();
        self.files.clear();
        self.has_node_modules = false;
    }
}
