//! Standalone application wrapper for the timing diagram generator.
//!
//! [`TimingDiagramApp`] owns the signal registry, the display area and the
//! two panels, and implements [`eframe::App`] so it can run in a native
//! window.

use eframe::egui;

use crate::color_scheme::ColorScheme;
use crate::config::{TimingDiagramConfig, INITIAL_ROWS};
use crate::data::data::DiagramData;
use crate::data::display::{DisplayArea, GenerateOutcome};
use crate::data::registry::SignalRegistry;
use crate::error::DiagramError;
use crate::panels::{DiagramPanel, Panel, SignalsPanel};

/// Top-level container used by [`run_timing_diagram`](super::run_timing_diagram).
pub struct TimingDiagramApp {
    pub registry: SignalRegistry,
    pub display: DisplayArea,
    pub signals_panel: SignalsPanel,
    pub diagram_panel: DiagramPanel,

    /// Color scheme to apply to the egui context. Applied once on the first frame.
    pub color_scheme: ColorScheme,
    color_scheme_applied: bool,
}

impl Default for TimingDiagramApp {
    fn default() -> Self {
        Self::new(&TimingDiagramConfig::default())
    }
}

impl TimingDiagramApp {
    pub fn new(cfg: &TimingDiagramConfig) -> Self {
        Self {
            registry: SignalRegistry::with_rows(INITIAL_ROWS),
            display: DisplayArea::new(),
            signals_panel: SignalsPanel::default(),
            diagram_panel: DiagramPanel::new(
                cfg.features.clone(),
                cfg.color_scheme.lane_colors(),
            ),
            color_scheme: cfg.color_scheme,
            color_scheme_applied: false,
        }
    }

    /// The "Add Signal" action.
    pub fn add_signal(&mut self) {
        self.registry.add_row();
    }

    /// The "Generate Diagram" action.
    pub fn generate(&mut self) -> Result<GenerateOutcome, DiagramError> {
        crate::data::display::generate(&self.registry, &mut self.display)
    }

    fn report(result: Option<Result<GenerateOutcome, DiagramError>>) {
        if let Some(Err(e)) = result {
            log::error!("Failed to generate timing diagram: {e}");
        }
    }
}

impl eframe::App for TimingDiagramApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.color_scheme_applied {
            self.color_scheme.apply(ctx);
            self.color_scheme_applied = true;
        }

        let mut data = DiagramData::new(&mut self.registry, &mut self.display);

        egui::SidePanel::left("signals_panel")
            .resizable(true)
            .default_width(320.0)
            .show(ctx, |ui| {
                ui.heading(self.signals_panel.title_and_icon());
                ui.separator();
                self.signals_panel.render_panel(ui, &mut data);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.diagram_panel.render_panel(ui, &mut data);
        });

        Self::report(data.apply_requests());
    }
}
