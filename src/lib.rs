//! Timing diagram generator crate root: re-exports and module wiring.
//!
//! Users type named binary signals into a form; the generator stacks them
//! vertically as step-style waveforms in an egui_plot diagram.
//!
//! - `data`: signal registry, diagram construction and the display area
//! - `panels`: the signal entry form and the diagram view
//! - `app`: the eframe application and [`run_timing_diagram`]
//! - `config` / `settings`: runtime configuration and the optional settings file

pub mod app;
pub mod color_scheme;
pub mod config;
pub mod data;
pub mod error;
pub mod panels;
pub mod settings;

pub use app::{run_timing_diagram, TimingDiagramApp};
pub use color_scheme::ColorScheme;
pub use config::{FeatureFlags, TimingDiagramConfig};
pub use data::diagram::{Diagram, Lane, LANE_HEIGHT};
pub use data::display::{generate, DisplayArea, GenerateOutcome};
pub use data::registry::{SignalEntry, SignalRegistry, SignalRow};
pub use error::{DiagramError, SettingsError};
pub use settings::AppSettings;
