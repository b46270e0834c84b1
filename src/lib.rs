pub mod heatmap;
pub mod logging;
pub mod measurements;
pub mod pyplot;

pub use heatmap::{Colormap, Heatmap, HeatmapError};
pub use measurements::Measurements;
pub use pyo3;
pub use pyplot::{Axes, Figure, PyPlot};

use anyhow::Result;
use tracing::info;

pub const X_LABEL: &str = "Tasks number";
pub const Y_LABEL: &str = "Processors number";

/// Heatmap of the recorded times as they are shown: largest processor count
/// on top, labelled axes and a reversed rocket gradient.
pub fn timing_heatmap<'d>(
    measurements: &Measurements,
    times: ndarray::ArrayView2<'d, f64>,
) -> Heatmap<'d, f64> {
    Heatmap::new(times)
        .x_ticklabels(measurements.task_labels())
        .y_ticklabels(measurements.processor_labels())
        .x_label(X_LABEL)
        .y_label(Y_LABEL)
        .cmap(Colormap::rocket_r())
}

/// Validate `heatmap`, then draw it in a new figure and show it.
///
/// Label mismatches are reported before the GIL is taken.
pub fn show_heatmap<F>(heatmap: &Heatmap<F>) -> Result<()>
where
    F: numpy::Element,
{
    heatmap.validate()?;
    let (rows, cols) = heatmap.dim();
    info!(rows, cols, "rendering heatmap");

    PyPlot::with_plt(|plt| {
        let fig = plt.figure()?;
        let ax = fig.gca()?;
        heatmap.draw_validated(&fig, &ax, plt.py())?;
        plt.show()?;
        Ok(())
    })
}
