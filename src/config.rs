//! Configuration types for the timing diagram window.

use crate::color_scheme::ColorScheme;

// ─────────────────────────────────────────────────────────────────────────────
// Feature flags
// ─────────────────────────────────────────────────────────────────────────────

/// Toggle individual diagram decorations on or off.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeatureFlags {
    /// Show the plot grid.
    pub grid: bool,
    /// Show the plot legend.
    pub legend: bool,
    /// Show the "Time" / "Signals" axis labels.
    pub axis_labels: bool,
    /// Draw a marker on every sample.
    pub points: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            grid: true,
            legend: true,
            axis_labels: true,
            points: false,
        }
    }
}

/// Empty signal rows shown when the window opens.
pub const INITIAL_ROWS: usize = 3;

// ─────────────────────────────────────────────────────────────────────────────
// TimingDiagramConfig
// ─────────────────────────────────────────────────────────────────────────────

/// Top-level configuration for the timing diagram window.
///
/// | Field            | Purpose |
/// |------------------|---------|
/// | `title`          | Native window title |
/// | `window_size`    | Initial inner window size in points |
/// | `features`       | Toggle diagram decorations |
/// | `color_scheme`   | Visual theme and lane palette |
/// | `native_options` | Raw eframe options, overrides `window_size` when set |
pub struct TimingDiagramConfig {
    pub title: String,
    pub window_size: [f32; 2],
    pub features: FeatureFlags,
    pub color_scheme: ColorScheme,
    pub native_options: Option<eframe::NativeOptions>,
}

impl Clone for TimingDiagramConfig {
    fn clone(&self) -> Self {
        Self {
            title: self.title.clone(),
            window_size: self.window_size,
            features: self.features.clone(),
            color_scheme: self.color_scheme,
            native_options: self.native_options.clone(),
        }
    }
}

impl Default for TimingDiagramConfig {
    fn default() -> Self {
        Self {
            title: "Timing Diagram Generator".to_string(),
            window_size: [1000.0, 750.0],
            features: FeatureFlags::default(),
            color_scheme: ColorScheme::default(),
            native_options: None,
        }
    }
}
