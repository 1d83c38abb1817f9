//! Central diagram panel: draws the current [`Diagram`] with egui_plot.
//!
//! Lane polylines and tick labels are computed once per display generation
//! and reused on every frame until the next diagram replaces them.

use super::panel_trait::{Panel, PanelState};
use crate::config::FeatureFlags;
use crate::data::data::DiagramData;
use crate::data::diagram::{Diagram, LANE_HEIGHT};
use crate::data::trace_look::TraceLook;
use egui::{Color32, Ui};
use egui_phosphor::regular as icons;
use egui_plot::{GridMark, Legend, Line, Plot, Points};

/// Pre-built drawing data for one lane.
struct LaneSeries {
    name: String,
    look: TraceLook,
    steps: Vec<[f64; 2]>,
    samples: Vec<[f64; 2]>,
}

/// Everything the plot needs for one generation of the display area.
struct PlotCache {
    generation: u64,
    x_label: String,
    y_label: String,
    ticks: Vec<(f64, String)>,
    series: Vec<LaneSeries>,
}

pub struct DiagramPanel {
    pub state: PanelState,
    pub features: FeatureFlags,
    pub palette: Vec<Color32>,
    cache: Option<PlotCache>,
}

impl Default for DiagramPanel {
    fn default() -> Self {
        Self::new(
            FeatureFlags::default(),
            crate::ColorScheme::default().lane_colors(),
        )
    }
}

/// Label for the tick at `y`, empty when no lane baseline sits there.
pub fn tick_label(ticks: &[(f64, String)], y: f64) -> &str {
    ticks
        .iter()
        .find(|(value, _)| (value - y).abs() < 1e-9)
        .map(|(_, name)| name.as_str())
        .unwrap_or_default()
}

impl DiagramPanel {
    pub fn new(features: FeatureFlags, palette: Vec<Color32>) -> Self {
        Self {
            state: PanelState::new("Diagram", icons::CHART_LINE),
            features,
            palette,
            cache: None,
        }
    }

    /// Rebuild the cached series when `generation` differs from the cached
    /// one. Returns `true` when it did, which means the view must be refitted.
    pub fn refresh(&mut self, diagram: &Diagram, generation: u64) -> bool {
        if self.cache.as_ref().map(|c| c.generation) == Some(generation) {
            return false;
        }
        let series = diagram
            .lanes
            .iter()
            .map(|lane| LaneSeries {
                name: lane.name.clone(),
                look: TraceLook::for_lane(lane.index, &self.palette),
                steps: lane.step_points(),
                samples: lane.sample_points(),
            })
            .collect();
        self.cache = Some(PlotCache {
            generation,
            x_label: diagram.x_label.clone(),
            y_label: diagram.y_label.clone(),
            ticks: diagram.y_ticks().into_iter().zip(diagram.y_tick_labels()).collect(),
            series,
        });
        true
    }

    /// Cached `(baseline, name)` ticks for the diagram last passed to
    /// [`refresh`](Self::refresh).
    pub fn ticks(&self) -> &[(f64, String)] {
        self.cache.as_ref().map(|c| c.ticks.as_slice()).unwrap_or_default()
    }

    fn render_plot(&mut self, ui: &mut Ui, diagram: &Diagram, generation: u64) {
        let refit = self.refresh(diagram, generation);
        let Some(cache) = &self.cache else {
            return;
        };
        let ticks = &cache.ticks;

        let mut plot = Plot::new("timing_diagram")
            .show_grid(self.features.grid)
            .allow_scroll(false)
            .y_grid_spacer(move |_input| {
                ticks
                    .iter()
                    .map(|(value, _)| GridMark {
                        value: *value,
                        step_size: LANE_HEIGHT,
                    })
                    .collect()
            })
            .y_axis_formatter(move |mark, _range| tick_label(ticks, mark.value).to_string());
        if self.features.axis_labels {
            plot = plot
                .x_axis_label(cache.x_label.clone())
                .y_axis_label(cache.y_label.clone());
        }
        if self.features.legend {
            plot = plot.legend(Legend::default());
        }

        let show_points = self.features.points;
        plot.show(ui, |plot_ui| {
            if refit {
                plot_ui.set_auto_bounds(true);
            }
            for s in &cache.series {
                let line = Line::new(s.name.clone(), s.steps.clone())
                    .color(s.look.color)
                    .width(s.look.width)
                    .style(s.look.style);
                plot_ui.line(line);

                if show_points && !s.samples.is_empty() {
                    let points = Points::new(s.name.clone(), s.samples.clone())
                        .radius(s.look.point_size)
                        .shape(s.look.marker)
                        .color(s.look.color);
                    plot_ui.points(points);
                }
            }
        });
    }
}

impl Panel for DiagramPanel {
    fn state(&self) -> &PanelState {
        &self.state
    }

    fn render_panel(&mut self, ui: &mut Ui, data: &mut DiagramData<'_>) {
        match data.display.current() {
            Some(diagram) => self.render_plot(ui, diagram, data.display.generation()),
            None => {
                ui.centered_and_justified(|ui| {
                    ui.weak("Enter signals and press \"Generate Diagram\"");
                });
            }
        }
    }
}
