//! Project Handler port
//!
//! Handlers observe the project context and invalidate the configuration
//! they derived when a relevant file changes. Every method has a no-op
//! default, so a handler implements only the notifications it cares about.
//!
//! Handlers run while the context holds its state lock. They receive the
//! state they may touch through [`HandlerContext`] and must not call back
//! into the context.

use jsctx_domain::{ConfigCache, FileEvent, InputChanged, ProjectRoot};

/// State exposed to handlers during a notification.
pub struct HandlerContext<'a> {
    /// The project root at the time of the notification.
    pub root: Option<&'a ProjectRoot>,
    /// Derived configuration, for invalidation.
    pub cache: &'a mut ConfigCache,
}

/// Observer of project context events
///
/// A panic inside a handler propagates to the caller of the operation that
/// triggered it; handlers registered after it are not notified.
pub trait ProjectHandler: Send + Sync {
    /// Handler name, for logging
    fn name(&self) -> &str;

    fn on_created(&self, _ctx: &mut HandlerContext<'_>, _event: &FileEvent) {}

    fn on_deleted(&self, _ctx: &mut HandlerContext<'_>, _event: &FileEvent) {}

    fn on_modified(&self, _ctx: &mut HandlerContext<'_>, _event: &FileEvent) {}

    fn on_moved(&self, _ctx: &mut HandlerContext<'_>, _event: &FileEvent) {}

    /// The active file changed within the current project.
    fn on_input_changed(
        &self,
        _ctx: &mut HandlerContext<'_>,
        _event: &InputChanged,
        _root: &ProjectRoot,
    ) {
    }

    /// The active file changed and the project root changed with it.
    ///
    /// `root` is `None` when no project could be resolved.
    fn on_project_changed(
        &self,
        _ctx: &mut HandlerContext<'_>,
        _event: &InputChanged,
        _root: Option<&ProjectRoot>,
    ) {
    }
}
