//! DiagramData: a view struct combining the registry and the display area.

use crate::data::display::{self, DisplayArea, GenerateOutcome};
use crate::data::registry::SignalRegistry;
use crate::error::DiagramError;

/// A view struct handed to panels for rendering.
///
/// Panels record what the user asked for in the `request_*` fields; the app
/// applies them once all panels have been drawn for the frame.
pub struct DiagramData<'a> {
    pub registry: &'a mut SignalRegistry,
    pub display: &'a mut DisplayArea,
    pub request_add_row: bool,
    pub request_generate: bool,
}

impl<'a> DiagramData<'a> {
    pub fn new(registry: &'a mut SignalRegistry, display: &'a mut DisplayArea) -> Self {
        Self {
            registry,
            display,
            request_add_row: false,
            request_generate: false,
        }
    }

    /// Run pending requests in the order the user sees them: new rows first,
    /// then generation. Returns the generate result if one was requested.
    pub fn apply_requests(&mut self) -> Option<Result<GenerateOutcome, DiagramError>> {
        if std::mem::take(&mut self.request_add_row) {
            self.registry.add_row();
        }
        if std::mem::take(&mut self.request_generate) {
            Some(display::generate(self.registry, self.display))
        } else {
            None
        }
    }
}
