//! TraceLook: visual styling for diagram lanes.

use eframe::egui;
use egui_plot::{LineStyle, MarkerShape};

/// The visual presentation of a lane (color, line width and style, markers).
#[derive(Debug, Clone)]
pub struct TraceLook {
    pub color: egui::Color32,
    pub width: f32,
    pub style: LineStyle,
    pub show_points: bool,
    pub point_size: f32,
    pub marker: MarkerShape,
}

impl Default for TraceLook {
    fn default() -> Self {
        Self {
            color: egui::Color32::GRAY,
            width: 1.5,
            style: LineStyle::Solid,
            show_points: false,
            point_size: 3.0,
            marker: MarkerShape::Circle,
        }
    }
}

impl TraceLook {
    /// Look for the lane at `index`, colored from `palette`.
    pub fn for_lane(index: usize, palette: &[egui::Color32]) -> Self {
        Self {
            color: Self::alloc_color(index, palette),
            ..Default::default()
        }
    }

    /// Pick the palette entry for `index`, cycling when lanes outnumber colors.
    pub fn alloc_color(index: usize, palette: &[egui::Color32]) -> egui::Color32 {
        if palette.is_empty() {
            return egui::Color32::GRAY;
        }
        palette[index % palette.len()]
    }
}
