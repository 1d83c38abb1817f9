//! Top-level entry point for running the generator as a native window.

use eframe::egui;

use super::TimingDiagramApp;
use crate::config::TimingDiagramConfig;

/// Launch the timing diagram generator in a native window.
///
/// Blocks until the window is closed.
pub fn run_timing_diagram(mut cfg: TimingDiagramConfig) -> eframe::Result<()> {
    let app = TimingDiagramApp::new(&cfg);

    let title = cfg.title.clone();
    let mut opts = cfg
        .native_options
        .take()
        .unwrap_or_else(eframe::NativeOptions::default);

    if opts.viewport.inner_size.is_none() {
        opts.viewport = opts
            .viewport
            .clone()
            .with_inner_size(egui::vec2(cfg.window_size[0], cfg.window_size[1]))
            .with_title(title.clone());
    }

    log::info!(
        "Starting {} with {} signal rows",
        title,
        app.registry.len()
    );

    eframe::run_native(
        &title,
        opts,
        Box::new(|cc| {
            // Install Phosphor icon font before creating the app.
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(app))
        }),
    )
}
