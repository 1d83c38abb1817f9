use timing_diagram::{run_timing_diagram, AppSettings, TimingDiagramConfig};

fn main() -> eframe::Result<()> {
    env_logger::init();

    let mut cfg = TimingDiagramConfig::default();
    AppSettings::load().apply(&mut cfg);

    run_timing_diagram(cfg)
}
