//! Seaborn-style heatmaps drawn with plain matplotlib.
use std::fmt::Display;

use anyhow::Result;
use ndarray::ArrayView2;
use pyo3::{PyAny, Python};
use thiserror::Error;
use tracing::debug;

use crate::pyplot::{Axes, Figure};

#[derive(Error, Debug, PartialEq)]
pub enum HeatmapError {
    #[error("heatmap data is empty")]
    Empty,

    #[error("{actual} column labels for {expected} columns")]
    ColumnLabels { expected: usize, actual: usize },

    #[error("{actual} row labels for {expected} rows")]
    RowLabels { expected: usize, actual: usize },
}

#[derive(Clone, Debug, PartialEq)]
pub enum Colormap {
    /// Seaborn's `rocket` palette; needs the `seaborn` module.
    Rocket { reversed: bool },
    /// Any colormap registered with matplotlib.
    Named(String),
}

impl Colormap {
    pub fn rocket_r() -> Self {
        Colormap::Rocket { reversed: true }
    }

    pub fn name(&self) -> String {
        match self {
            Colormap::Rocket { reversed } => with_suffix("rocket", *reversed),
            Colormap::Named(name) => name.clone(),
        }
    }

    /// Name of a colormap matplotlib knows about in this interpreter.
    ///
    /// Importing `seaborn` registers its palettes with matplotlib.
    pub fn resolve(&self, py: Python) -> Result<String> {
        if let Colormap::Rocket { .. } = self {
            py.import("seaborn")?;
        }
        Ok(self.name())
    }
}

fn with_suffix(base: &str, reversed: bool) -> String {
    if reversed {
        format!("{}_r", base)
    } else {
        base.to_string()
    }
}

/// Centers of `n` unit cells starting at 0.
pub fn cell_centers(n: usize) -> Vec<f64> {
    (0..n).map(|i| i as f64 + 0.5).collect()
}

/// A 2D grid plus everything needed to draw it as a heatmap.
pub struct Heatmap<'d, F> {
    data: ArrayView2<'d, F>,
    x_ticklabels: Vec<String>,
    y_ticklabels: Vec<String>,
    x_label: Option<String>,
    y_label: Option<String>,
    cmap: Colormap,
    x_rotation: f64,
    y_rotation: f64,
    colorbar: bool,
}

impl<'d, F> Heatmap<'d, F>
where
    F: numpy::Element,
{
    /// Row 0 of `data` is drawn at the top. Tick labels default to indices.
    pub fn new(data: ArrayView2<'d, F>) -> Self {
        let (rows, cols) = data.dim();
        Self {
            data,
            x_ticklabels: (0..cols).map(|i| i.to_string()).collect(),
            y_ticklabels: (0..rows).map(|i| i.to_string()).collect(),
            x_label: None,
            y_label: None,
            cmap: Colormap::rocket_r(),
            x_rotation: 0.0,
            y_rotation: 90.0,
            colorbar: true,
        }
    }

    pub fn x_ticklabels<I, T>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Display,
    {
        self.x_ticklabels = labels.into_iter().map(|l| l.to_string()).collect();
        self
    }

    pub fn y_ticklabels<I, T>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Display,
    {
        self.y_ticklabels = labels.into_iter().map(|l| l.to_string()).collect();
        self
    }

    pub fn x_label(mut self, label: &str) -> Self {
        self.x_label = Some(label.to_string());
        self
    }

    pub fn y_label(mut self, label: &str) -> Self {
        self.y_label = Some(label.to_string());
        self
    }

    pub fn cmap(mut self, cmap: Colormap) -> Self {
        self.cmap = cmap;
        self
    }

    pub fn tick_rotation(mut self, x: f64, y: f64) -> Self {
        self.x_rotation = x;
        self.y_rotation = y;
        self
    }

    pub fn colorbar(mut self, colorbar: bool) -> Self {
        self.colorbar = colorbar;
        self
    }

    pub fn dim(&self) -> (usize, usize) {
        self.data.dim()
    }

    /// Labels must match the grid exactly; nothing is truncated or padded.
    pub fn validate(&self) -> Result<(), HeatmapError> {
        let (rows, cols) = self.data.dim();
        if rows == 0 || cols == 0 {
            return Err(HeatmapError::Empty);
        }
        if self.x_ticklabels.len() != cols {
            return Err(HeatmapError::ColumnLabels {
                expected: cols,
                actual: self.x_ticklabels.len(),
            });
        }
        if self.y_ticklabels.len() != rows {
            return Err(HeatmapError::RowLabels {
                expected: rows,
                actual: self.y_ticklabels.len(),
            });
        }
        Ok(())
    }

    /// Draw onto `ax`, adding a colorbar to `fig` if enabled.
    ///
    /// Returns the `QuadMesh` holding the cell values.
    pub fn draw<'py>(
        &self,
        fig: &Figure<'py>,
        ax: &Axes<'py>,
        py: Python<'py>,
    ) -> Result<&'py PyAny> {
        self.validate()?;
        self.draw_validated(fig, ax, py)
    }

    pub(crate) fn draw_validated<'py>(
        &self,
        fig: &Figure<'py>,
        ax: &Axes<'py>,
        py: Python<'py>,
    ) -> Result<&'py PyAny> {
        let (rows, cols) = self.data.dim();
        let cmap = self.cmap.resolve(py)?;
        debug!(rows, cols, cmap = %cmap, "drawing heatmap");

        let mesh = ax.pcolormesh(self.data, &cmap)?;
        ax.set_xlim(0.0, cols as f64)?
            .set_ylim(0.0, rows as f64)?
            .invert_yaxis()?;
        ax.set_xticks(cell_centers(cols))?
            .set_xticklabels(self.x_ticklabels.clone(), self.x_rotation)?;
        ax.set_yticks(cell_centers(rows))?
            .set_yticklabels(self.y_ticklabels.clone(), self.y_rotation)?;
        ax.hide_tick_marks()?;
        if let Some(label) = &self.x_label {
            ax.set_xlabel(label)?;
        }
        if let Some(label) = &self.y_label {
            ax.set_ylabel(label)?;
        }
        if self.colorbar {
            fig.colorbar(mesh, ax)?;
        }
        Ok(mesh)
    }
}
