use anyhow::Result;
use timing_heatmap::measurements::{PROCESSOR_COUNTS, TASK_COUNTS};
use timing_heatmap::pyo3::{PyAny, Python};
use timing_heatmap::{timing_heatmap, Measurements, PyPlot};

fn use_agg(py: Python) -> Result<()> {
    py.import("matplotlib")?.call1("use", ("Agg",))?;
    Ok(())
}

fn mesh_size(mesh: &PyAny) -> Result<usize> {
    Ok(mesh.call_method0("get_array")?.getattr("size")?.extract()?)
}

fn mesh_cmap(mesh: &PyAny) -> Result<String> {
    Ok(mesh.call_method0("get_cmap")?.getattr("name")?.extract()?)
}

#[test]
#[ignore = "needs a Python interpreter with matplotlib and seaborn"]
fn renders_every_cell_with_one_tick_per_row_and_column() -> Result<()> {
    let measurements = Measurements::recorded();
    let times = measurements.render_order();
    let heatmap = timing_heatmap(&measurements, times.view());

    PyPlot::with_plt(|plt| {
        use_agg(plt.py())?;
        let fig = plt.figure()?;
        let ax = fig.gca()?;
        let mesh = heatmap.draw(&fig, &ax, plt.py())?;

        assert_eq!(mesh_size(mesh)?, PROCESSOR_COUNTS * TASK_COUNTS);
        assert_eq!(mesh_cmap(mesh)?, "rocket_r");
        assert_eq!(ax.xlim()?, (0.0, TASK_COUNTS as f64));
        assert_eq!(ax.ylim()?, (PROCESSOR_COUNTS as f64, 0.0));
        assert_eq!(
            ax.xticklabels()?,
            vec!["100", "200", "300", "400", "500", "600", "700"]
        );
        assert_eq!(
            ax.yticklabels()?,
            vec!["10", "9", "8", "7", "6", "5", "4", "3", "2"]
        );
        // heatmap plus colorbar
        assert_eq!(fig.axes_count()?, 2);
        plt.close(&fig)?;
        Ok(())
    })
}

#[test]
#[ignore = "needs a Python interpreter with matplotlib and seaborn"]
fn renders_without_colorbar() -> Result<()> {
    let measurements = Measurements::recorded();
    let times = measurements.render_order();
    let heatmap = timing_heatmap(&measurements, times.view())
        .tick_rotation(45.0, 0.0)
        .colorbar(false);

    PyPlot::with_plt(|plt| {
        use_agg(plt.py())?;
        let fig = plt.figure()?;
        let ax = fig.gca()?;
        heatmap.draw(&fig, &ax, plt.py())?;
        assert_eq!(fig.axes_count()?, 1);
        assert_eq!(ax.xticklabels()?.len(), TASK_COUNTS);
        plt.close(&fig)?;
        Ok(())
    })
}
