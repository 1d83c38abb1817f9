//! The single display area and the "generate diagram" action.

use crate::data::diagram::Diagram;
use crate::data::registry::SignalRegistry;
use crate::error::DiagramError;

/// Owns the one diagram currently on screen.
///
/// `generation` increases on every [`replace`](Self::replace); the diagram
/// panel refits its view whenever it sees a new generation.
#[derive(Debug, Default)]
pub struct DisplayArea {
    current: Option<Diagram>,
    generation: u64,
}

impl DisplayArea {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&Diagram> {
        self.current.as_ref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Discard whatever is shown and show `diagram` instead.
    pub fn replace(&mut self, diagram: Diagram) {
        self.current = Some(diagram);
        self.generation += 1;
    }
}

/// What a successful [`generate`] did to the display area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerateOutcome {
    /// No complete rows; the display area was left as it was.
    Skipped,
    /// A new diagram with this many lanes replaced the previous one.
    Rendered { lanes: usize },
}

/// Snapshot the registry, build the diagram and swap it into `display`.
///
/// The diagram is built completely before the display area is touched, so
/// on error the previously shown diagram stays visible.
pub fn generate(
    registry: &SignalRegistry,
    display: &mut DisplayArea,
) -> Result<GenerateOutcome, DiagramError> {
    let entries = registry.snapshot();
    if entries.is_empty() {
        log::debug!("No complete signal rows, nothing to render");
        return Ok(GenerateOutcome::Skipped);
    }

    let diagram = Diagram::build(&entries)?;
    let lanes = diagram.lane_count();
    display.replace(diagram);
    log::info!(
        "Rendered timing diagram with {} signals (generation {})",
        lanes,
        display.generation()
    );
    Ok(GenerateOutcome::Rendered { lanes })
}
