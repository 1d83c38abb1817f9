//! Main application module.
//!
//! | Sub-module      | Responsibility |
//! | --------------- | -------------- |
//! | [`timing_app`]  | [`TimingDiagramApp`] (eframe) owning the registry, display area and panels |
//! | [`run`]         | Top-level [`run_timing_diagram()`] entry point |

mod run;
mod timing_app;

pub use run::run_timing_diagram;
pub use timing_app::TimingDiagramApp;
