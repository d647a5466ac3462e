//! Error types for the drag and drop core.

use crate::registry::ScopeId;

/// Errors raised while building drag engines, dropzones or contexts.
///
/// Pointer handling itself never fails: mismatched or out-of-order events are
/// ignored rather than reported.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DndError {
    /// A configuration value is out of range.
    #[error("invalid drag config: `{field}` must be finite and non-negative, got {value}")]
    InvalidConfig {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f32,
    },

    /// A child scope was requested from a registry that has been detached.
    #[error("drop registry {0} is detached and cannot host new scopes")]
    DetachedScope(ScopeId),
}
