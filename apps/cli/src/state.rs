use std::sync::Arc;

use crate::config::Config;
use crate::matching::SkillMatcher;
use crate::store::Store;

/// Shared application state passed into every command handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    /// Pluggable matcher. Default: ExactSkillMatcher — exact case-insensitive
    /// membership, no fuzzy matching.
    pub matcher: Arc<dyn SkillMatcher>,
    pub config: Config,
}
