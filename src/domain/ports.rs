use crate::domain::model::LabelDomain;

/// Anything that can answer "what is the display label of this code".
///
/// Lookup helpers take the source explicitly so callers choose which
/// registry (built-in, configured, per-locale) is in effect.
pub trait LabelSource: Send + Sync {
    fn label_for(&self, domain: LabelDomain, code: &str) -> Option<&str>;
}
