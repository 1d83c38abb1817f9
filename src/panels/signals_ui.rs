use super::panel_trait::{Panel, PanelState};
use crate::data::data::DiagramData;
use eframe::egui;
use egui::Ui;
use egui_phosphor::regular as icons;

/// The signal entry form: a two-column grid of name/sequence text fields
/// followed by the "Add Signal" and "Generate Diagram" buttons.
pub struct SignalsPanel {
    pub state: PanelState,
}

impl Default for SignalsPanel {
    fn default() -> Self {
        Self {
            state: PanelState::new("Signals", icons::LIST),
        }
    }
}

impl Panel for SignalsPanel {
    fn state(&self) -> &PanelState {
        &self.state
    }

    fn render_panel(&mut self, ui: &mut Ui, data: &mut DiagramData<'_>) {
        egui::ScrollArea::vertical()
            .auto_shrink([false, true])
            .show(ui, |ui| {
                egui::Grid::new("signal_rows")
                    .num_columns(2)
                    .spacing([8.0, 4.0])
                    .show(ui, |ui| {
                        ui.strong("Signal Name");
                        ui.strong("Binary Sequence");
                        ui.end_row();

                        for (idx, row) in data.registry.rows_mut().iter_mut().enumerate() {
                            ui.add(
                                egui::TextEdit::singleline(&mut row.name)
                                    .id_salt(("signal_name", idx))
                                    .desired_width(110.0)
                                    .hint_text(format!("sig{idx}")),
                            );
                            ui.add(
                                egui::TextEdit::singleline(&mut row.sequence)
                                    .id_salt(("signal_sequence", idx))
                                    .desired_width(160.0)
                                    .font(egui::TextStyle::Monospace)
                                    .hint_text("0101"),
                            );
                            ui.end_row();
                        }
                    });

                ui.add_space(6.0);
                ui.vertical_centered_justified(|ui| {
                    if ui
                        .button(format!("{} Add Signal", icons::PLUS))
                        .on_hover_text("Append an empty signal row")
                        .clicked()
                    {
                        data.request_add_row = true;
                    }
                    if ui
                        .button(format!("{} Generate Diagram", icons::CHART_LINE))
                        .on_hover_text("Plot every row with both a name and a sequence")
                        .clicked()
                    {
                        data.request_generate = true;
                    }
                });
            });
    }
}
