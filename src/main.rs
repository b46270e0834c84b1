use anyhow::Result;
use timing_heatmap::{logging, show_heatmap, timing_heatmap, Measurements};

fn main() -> Result<()> {
    logging::init_logger();

    let measurements = Measurements::recorded();
    let times = measurements.render_order();
    show_heatmap(&timing_heatmap(&measurements, times.view()))
}
