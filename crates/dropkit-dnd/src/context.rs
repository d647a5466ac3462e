//! The drag-coordination context shared by a tree of draggables and dropzones.

use crate::abort::AbortSlot;
use crate::bounds::Bounds;
use crate::config::DragConfig;
use crate::drag::DragEngineBuilder;
use crate::dropzone::DropzoneEngine;
use crate::error::DndError;
use crate::registry::DropRegistry;

/// Owns the root [`DropRegistry`], the [`AbortSlot`] and the [`DragConfig`]
/// that every engine created through it shares.
///
/// Separate contexts never see each other's drags or resume each other's
/// aborted operations.
#[derive(Debug)]
pub struct DragContext {
    root: DropRegistry,
    aborted: AbortSlot,
    config: DragConfig,
}

impl DragContext {
    /// Context with the default configuration.
    pub fn new() -> Self {
        Self {
            root: DropRegistry::root(),
            aborted: AbortSlot::new(),
            config: DragConfig::default(),
        }
    }

    pub fn with_config(config: DragConfig) -> Result<Self, DndError> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::new()
        })
    }

    pub fn root_scope(&self) -> &DropRegistry {
        &self.root
    }

    pub fn aborted(&self) -> &AbortSlot {
        &self.aborted
    }

    pub fn config(&self) -> &DragConfig {
        &self.config
    }

    /// Start building a draggable that publishes into the root scope unless
    /// told otherwise with [`DragEngineBuilder::scope`].
    pub fn draggable(&self, bounds: impl Bounds + 'static) -> DragEngineBuilder {
        DragEngineBuilder::new(
            Box::new(bounds),
            self.root.clone(),
            self.config,
            self.aborted.clone(),
        )
    }

    /// A dropzone listening on the root scope.
    pub fn dropzone(&self, bounds: impl Bounds + 'static) -> Result<DropzoneEngine, DndError> {
        DropzoneEngine::new(&self.root, bounds)
    }
}

impl Default for DragContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_config_validates() {
        assert!(DragContext::with_config(DragConfig::new().scroll_step(-2.0)).is_err());

        let ctx = DragContext::with_config(DragConfig::new().scroll_margin(24.0)).unwrap();
        assert_eq!(ctx.config().scroll_margin, 24.0);
        assert_eq!(ctx.root_scope().depth(), 0);
    }

    #[test]
    fn test_contexts_are_isolated() {
        let a = DragContext::new();
        let b = DragContext::new();
        assert!(!a.root_scope().ptr_eq(b.root_scope()));

        let _zone = a.dropzone(dropkit_core::geometry::Rect::ZERO).unwrap();
        assert_eq!(a.root_scope().child_count(), 1);
        assert_eq!(b.root_scope().child_count(), 0);
    }
}
