//! Drag configuration.

use crate::error::DndError;
use crate::scroll::ScrollAssist;

/// Default distance from a viewport edge at which scroll assist kicks in.
pub const DEFAULT_SCROLL_MARGIN: f32 = 10.0;

/// Default distance scrolled per move event near an edge.
pub const DEFAULT_SCROLL_STEP: f32 = 10.0;

/// Settings shared by every draggable created from a [`DragContext`](crate::DragContext).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragConfig {
    /// Edge distance (client units) that triggers scroll assist.
    pub scroll_margin: f32,
    /// Scroll distance per move event.
    pub scroll_step: f32,
    /// Whether draggables scroll their viewport near its edges at all.
    pub auto_scroll: bool,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            scroll_margin: DEFAULT_SCROLL_MARGIN,
            scroll_step: DEFAULT_SCROLL_STEP,
            auto_scroll: true,
        }
    }
}

impl DragConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scroll_margin(mut self, margin: f32) -> Self {
        self.scroll_margin = margin;
        self
    }

    pub fn scroll_step(mut self, step: f32) -> Self {
        self.scroll_step = step;
        self
    }

    pub fn auto_scroll(mut self, enabled: bool) -> Self {
        self.auto_scroll = enabled;
        self
    }

    pub fn validate(&self) -> Result<(), DndError> {
        check("scroll_margin", self.scroll_margin)?;
        check("scroll_step", self.scroll_step)?;
        Ok(())
    }

    /// Scroll assist derived from this config, or `None` when disabled.
    pub fn scroll_assist(&self) -> Option<ScrollAssist> {
        self.auto_scroll
            .then(|| ScrollAssist::new(self.scroll_margin, self.scroll_step))
    }
}

fn check(field: &'static str, value: f32) -> Result<(), DndError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(DndError::InvalidConfig { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DragConfig::default();
        assert_eq!(config.scroll_margin, 10.0);
        assert_eq!(config.scroll_step, 10.0);
        assert!(config.auto_scroll);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_negative_margin() {
        let err = DragConfig::new().scroll_margin(-1.0).validate().unwrap_err();
        assert_eq!(
            err,
            DndError::InvalidConfig {
                field: "scroll_margin",
                value: -1.0
            }
        );
    }

    #[test]
    fn test_rejects_nan_step() {
        let err = DragConfig::new().scroll_step(f32::NAN).validate().unwrap_err();
        assert!(matches!(err, DndError::InvalidConfig { field: "scroll_step", .. }));
    }

    #[test]
    fn test_disabled_scroll_assist() {
        assert!(DragConfig::new().auto_scroll(false).scroll_assist().is_none());
        assert!(DragConfig::new().scroll_assist().is_some());
    }
}
