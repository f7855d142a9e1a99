//! Invalidation of the computed environment

use crate::ports::project_handler::{HandlerContext, ProjectHandler};
use jsctx_domain::{FileEvent, InputChanged, ProjectFile, ProjectRoot};
use tracing::debug;

/// Drops the computed environment when a file it was derived from changes.
///
/// Those are the manifest, the dependency folder, the type inference
/// configuration, every lint configuration and anything under the
/// project's `.definitions` folder. A `.tern-project` change also drops the
/// cached ECMAScript level.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvironmentHandler;

impl EnvironmentHandler {
    fn affects(root: Option<&ProjectRoot>, location: &str, short_name: &str) -> bool {
        let named = match ProjectFile::from_file_name(short_name) {
            Some(ProjectFile::PackageJson | ProjectFile::NodeModules | ProjectFile::TernProject) => {
                true
            }
            Some(file) => file.is_lint_config(),
            None => false,
        };
        named
            || root.is_some_and(|root| {
                location.starts_with(&root.join(ProjectFile::Definitions))
            })
    }

    fn update(&self, ctx: &mut HandlerContext<'_>, location: &str, short_name: &str) {
        if !Self::affects(ctx.root, location, short_name) {
            return;
        }
        debug!("{} changed, dropping computed environment", location);
        ctx.cache.invalidate_env();
        if short_name == ProjectFile::TernProject.file_name() {
            ctx.cache.invalidate_ecma();
        }
    }
}

impl ProjectHandler for EnvironmentHandler {
    fn name(&self) -> &str {
        "environment"
    }

    fn on_created(&self, ctx: &mut HandlerContext<'_>, event: &FileEvent) {
        self.update(ctx, &event.qualified_path, &event.short_name);
    }

    fn on_deleted(&self, ctx: &mut HandlerContext<'_>, event: &FileEvent) {
        self.update(ctx, &event.qualified_path, &event.short_name);
    }

    fn on_modified(&self, ctx: &mut HandlerContext<'_>, event: &FileEvent) {
        self.update(ctx, &event.qualified_path, &event.short_name);
    }

    fn on_moved(&self, ctx: &mut HandlerContext<'_>, event: &FileEvent) {
        self.update(ctx, &event.qualified_path, &event.short_name);
        if let (Some(to), Some(to_name)) = (&event.to_qualified, &event.to_short_name) {
            self.update(ctx, to, to_name);
        }
    }

    fn on_project_changed(
        &self,
        ctx: &mut HandlerContext<'_>,
        _event: &InputChanged,
        _root: Option<&ProjectRoot>,
    ) {
        ctx.cache.invalidate_env();
    }
}
