//! Stage display capability.

use crate::color::resolve_color;

/// What a renderer needs from a stage: a title, an optional subtitle and an
/// optional resolved color.
///
/// Implementors supply the stage name and raw color; the title and color
/// follow from those. Stages with nothing to show under the title keep the
/// default `subtitle`.
pub trait StageDisplay {
    /// The stage name as authored.
    fn name(&self) -> &str;

    /// The raw, unvalidated color from the catalog document.
    fn raw_color(&self) -> Option<&str>;

    /// Display title. Always the stage name.
    fn title(&self) -> &str {
        self.name()
    }

    /// Display subtitle.
    fn subtitle(&self) -> Option<String> {
        None
    }

    /// Resolved display color, or `None` when the raw color is absent or
    /// not recognized.
    fn color(&self) -> Option<String> {
        resolve_color(self.raw_color())
    }
}
