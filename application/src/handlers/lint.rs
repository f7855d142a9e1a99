//! Invalidation of lint and formatting configuration

use crate::ports::project_handler::{HandlerContext, ProjectHandler};
use jsctx_domain::{FileEvent, InputChanged, ProjectFile, ProjectRoot};
use tracing::debug;

/// Drops cached lint configuration when a lint file changes, and cached
/// formatting configuration when `.jsbeautifyrc` changes.
#[derive(Debug, Clone, Copy, Default)]
pub struct LintConfigHandler;

impl LintConfigHandler {
    fn update(&self, ctx: &mut HandlerContext<'_>, short_name: &str) {
        match ProjectFile::from_file_name(short_name) {
            Some(file) if file.is_lint_config() => {
                debug!("{} changed, dropping lint configuration", short_name);
                ctx.cache.invalidate_lint();
            }
            Some(ProjectFile::Jsbeautifyrc) => {
                debug!("{} changed, dropping formatting configuration", short_name);
                ctx.cache.invalidate_formatting();
            }
            _ => {}
        }
    }
}

impl ProjectHandler for LintConfigHandler {
    fn name(&self) -> &str {
        "lint"
    }

    fn on_created(&self, ctx: &mut HandlerContext<'_>, event: &FileEvent) {
        self.update(ctx, &event.short_name);
    }

    fn on_deleted(&self, ctx: &mut HandlerContext<'_>, event: &FileEvent) {
        self.update(ctx, &event.short_name);
    }

    fn on_modified(&self, ctx: &mut HandlerContext<'_>, event: &FileEvent) {
        self.update(ctx, &event.short_name);
    }

    fn on_moved(&self, ctx: &mut HandlerContext<'_>, event: &FileEvent) {
        self.update(ctx, &event.short_name);
        if let Some(to) = event.to_short_name.as_deref() {
            self.update(ctx, to);
        }
    }

    fn on_project_changed(
        &self,
        ctx: &mut HandlerContext<'_>,
        _event: &InputChanged,
        _root: Option<&ProjectRoot>,
    ) {
        ctx.cache.invalidate_lint();
        ctx.cache.invalidate_formatting();
    }
}
