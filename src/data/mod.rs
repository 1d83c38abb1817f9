pub mod data;
pub mod diagram;
pub mod display;
pub mod registry;
pub mod trace_look;
