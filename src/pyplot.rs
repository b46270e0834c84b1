//! Typed wrapper around the parts of `matplotlib.pyplot` used for heatmaps.
use anyhow::Result;
use numpy::ToPyArray;
use pyo3::types::{IntoPyDict, PyDict};
use pyo3::{PyAny, Python};

/// Wrapper around some methods and classes of `matplotlib.pyplot`.
pub struct PyPlot<'a> {
    py: Python<'a>,
    plt: &'a pyo3::types::PyModule,
}

impl<'a> PyPlot<'a> {
    pub fn new(py: Python<'a>) -> Result<Self> {
        let plt = py.import("matplotlib.pyplot")?;
        Ok(Self { py, plt })
    }

    /// Acquire the GIL, import pyplot and run `f` with it.
    pub fn with_plt<F, R>(f: F) -> Result<R>
    where
        F: for<'py> FnOnce(&PyPlot<'py>) -> Result<R>,
    {
        Python::with_gil(|py| {
            let plt = PyPlot::new(py)?;
            f(&plt)
        })
    }

    pub fn py(&self) -> Python<'a> {
        self.py
    }

    /// Create a new [Figure].
    /// See `matplotlib.pyplot.figure` for more details.
    pub fn figure(&self) -> Result<Figure<'a>> {
        let fig = self.plt.call0("figure")?;
        Ok(Figure { py: self.py, fig })
    }

    pub fn show(&self) -> Result<&'a PyAny> {
        Ok(self.plt.call0("show")?)
    }

    pub fn close(&self, fig: &Figure<'a>) -> Result<()> {
        self.plt.call1("close", (fig.fig,))?;
        Ok(())
    }
}

pub struct Figure<'a> {
    py: Python<'a>,
    fig: &'a PyAny,
}

impl<'a> Figure<'a> {
    pub fn gca(&self) -> Result<Axes<'a>> {
        let axes = self.fig.call_method0("gca")?;
        Ok(Axes { py: self.py, axes })
    }

    /// Attach a colorbar for `mappable` next to `ax`.
    pub fn colorbar(&self, mappable: &'a PyAny, ax: &Axes<'a>) -> Result<&'a PyAny> {
        let kwargs = [("ax", ax.axes)].into_py_dict(self.py);
        Ok(self
            .fig
            .call_method("colorbar", (mappable,), Some(kwargs))?)
    }

    /// Number of axes on the figure, colorbars included.
    pub fn axes_count(&self) -> Result<usize> {
        Ok(self.fig.getattr("axes")?.len()?)
    }
}

pub struct Axes<'a> {
    py: Python<'a>,
    axes: &'a PyAny,
}

impl<'a> Axes<'a> {
    /// Draw `z` as a quadrilateral mesh; cell `(r, c)` spans `[c, c+1] x [r, r+1]`.
    ///
    /// Returns the `QuadMesh`, usable as colorbar mappable.
    pub fn pcolormesh<F>(&self, z: ndarray::ArrayView2<F>, cmap: &str) -> Result<&'a PyAny>
    where
        F: numpy::Element,
    {
        let z = z.to_pyarray(self.py);
        let kwargs = [("cmap", cmap)].into_py_dict(self.py);
        Ok(self.axes.call_method("pcolormesh", (z,), Some(kwargs))?)
    }

    pub fn set_xlim(&self, left: f64, right: f64) -> Result<&Self> {
        self.axes.call_method1("set_xlim", (left, right))?;
        Ok(self)
    }

    pub fn set_ylim(&self, bottom: f64, top: f64) -> Result<&Self> {
        self.axes.call_method1("set_ylim", (bottom, top))?;
        Ok(self)
    }

    pub fn xlim(&self) -> Result<(f64, f64)> {
        Ok(self.axes.call_method0("get_xlim")?.extract()?)
    }

    pub fn ylim(&self) -> Result<(f64, f64)> {
        Ok(self.axes.call_method0("get_ylim")?.extract()?)
    }

    pub fn invert_yaxis(&self) -> Result<&Self> {
        self.axes.call_method0("invert_yaxis")?;
        Ok(self)
    }

    pub fn set_xticks(&self, ticks: Vec<f64>) -> Result<&Self> {
        self.axes.call_method1("set_xticks", (ticks,))?;
        Ok(self)
    }

    pub fn set_yticks(&self, ticks: Vec<f64>) -> Result<&Self> {
        self.axes.call_method1("set_yticks", (ticks,))?;
        Ok(self)
    }

    pub fn set_xticklabels(&self, labels: Vec<String>, rotation: f64) -> Result<&Self> {
        let kwargs = self.tick_label_kwargs(rotation)?;
        self.axes
            .call_method("set_xticklabels", (labels,), Some(kwargs))?;
        Ok(self)
    }

    /// Rotated labels are centered vertically on their tick.
    pub fn set_yticklabels(&self, labels: Vec<String>, rotation: f64) -> Result<&Self> {
        let kwargs = self.tick_label_kwargs(rotation)?;
        kwargs.set_item("va", "center")?;
        self.axes
            .call_method("set_yticklabels", (labels,), Some(kwargs))?;
        Ok(self)
    }

    fn tick_label_kwargs(&self, rotation: f64) -> Result<&'a PyDict> {
        let kwargs = PyDict::new(self.py);
        kwargs.set_item("rotation", rotation)?;
        Ok(kwargs)
    }

    /// Hide the tick marks but keep their labels.
    pub fn hide_tick_marks(&self) -> Result<&Self> {
        let kwargs = PyDict::new(self.py);
        kwargs.set_item("axis", "both")?;
        kwargs.set_item("which", "both")?;
        kwargs.set_item("length", 0)?;
        self.axes.call_method("tick_params", (), Some(kwargs))?;
        Ok(self)
    }

    pub fn set_xlabel(&self, label: &str) -> Result<&Self> {
        self.axes.call_method1("set_xlabel", (label,))?;
        Ok(self)
    }

    pub fn set_ylabel(&self, label: &str) -> Result<&Self> {
        self.axes.call_method1("set_ylabel", (label,))?;
        Ok(self)
    }

    /// Tick label texts currently set on the x axis.
    pub fn xticklabels(&self) -> Result<Vec<String>> {
        self.ticklabel_texts("get_xticklabels")
    }

    /// Tick label texts currently set on the y axis.
    pub fn yticklabels(&self) -> Result<Vec<String>> {
        self.ticklabel_texts("get_yticklabels")
    }

    fn ticklabel_texts(&self, getter: &str) -> Result<Vec<String>> {
        let labels = self.axes.call_method0(getter)?;
        let mut texts = vec![];
        for label in labels.iter()? {
            texts.push(label?.call_method0("get_text")?.extract()?);
        }
        Ok(texts)
    }
}
