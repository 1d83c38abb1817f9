pub mod diagram_ui;
pub mod panel_trait;
pub mod signals_ui;

pub use diagram_ui::DiagramPanel;
pub use panel_trait::{Panel, PanelState};
pub use signals_ui::SignalsPanel;
