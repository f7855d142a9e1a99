//! Output formatter trait

use jsctx_domain::{ConfigEntry, EcmaLevel, EnvironmentGuess, Proposal, ProjectRoot};

/// Trait for formatting resolved project information
pub trait OutputFormatter {
    /// Format the computed environment of the project at `root`
    fn format_environment(&self, root: Option<&ProjectRoot>, env: &EnvironmentGuess) -> String;

    /// Format a parsed configuration file, or its absence
    fn format_config(&self, title: &str, entry: Option<&ConfigEntry>) -> String;

    /// Format the ECMAScript level
    fn format_ecma(&self, level: EcmaLevel) -> String;

    /// Format completion proposals
    fn format_proposals(&self, proposals: &[Proposal]) -> String;
}
