//! File change propagation

use super::ProjectContext;
use crate::ports::file_store::FileStore;
use jsctx_domain::{ChangeKind, FileChangeBatch};
use tracing::debug;

impl<S: FileStore + 'static> ProjectContext<S> {
    /// Applies a batch of file tree changes.
    ///
    /// Each changed file leaves the file cache, the `node_modules` flag
    /// follows the dependency folder, and handlers are notified so they can
    /// drop the configuration derived from the file.
    pub fn on_file_changed(&self, batch: &FileChangeBatch) {
        if batch.is_empty() {
            return;
        }
        let mut state = self.lock();
        state.invalidate();
        for event in batch.events() {
            debug!("{:?} {}", event.kind, event.qualified_path);

            state.files.remove(&event.qualified_path);
            if let Some(to) = &event.to_qualified {
                state.files.remove(to);
            }
            if let Some(present) = event.dependency_folder_effect() {
                state.has_node_modules = present;
            }

            state.dispatch(|handler, ctx| match event.kind {
                ChangeKind::Created => handler.on_created(ctx, &event),
                ChangeKind::Deleted => handler.on_deleted(ctx, &event),
                ChangeKind::Modified => handler.on_modified(ctx, &event),
                ChangeKind::Moved => handler.on_moved(ctx, &event),
            });
        }
    }
}
