//! Recorded elapsed times of the scheduler runs.
//!
//! Rows are indexed by processors number, columns by tasks number. The
//! declared order is ascending in processors; [Measurements::render_order]
//! flips it so the largest processor count is drawn on top.
use ndarray::{array, s, Array2, ArrayView2};

/// Number of distinct task counts (columns).
pub const TASK_COUNTS: usize = 7;
/// Number of distinct processor counts (rows).
pub const PROCESSOR_COUNTS: usize = 9;

pub struct Measurements {
    times: Array2<f64>,
}

impl Measurements {
    /// The measurements in the order they were recorded.
    pub fn recorded() -> Self {
        let times = array![
            [0.0, 2.4, 6.8, 17.4, 26.0, 47.0, 60.2],
            [0.0, 4.0, 9.4, 21.0, 42.0, 64.2, 93.2],
            [0.0, 4.2, 12.0, 31.6, 52.8, 68.8, 130.4],
            [1.0, 5.4, 14.6, 30.8, 47.0, 97.0, 132.0],
            [0.0, 5.0, 17.0, 29.2, 51.8, 102.0, 141.2],
            [1.0, 6.0, 18.2, 33.0, 57.0, 103.4, 142.8],
            [1.0, 5.2, 17.2, 36.2, 66.2, 116.0, 170.0],
            [1.0, 6.6, 18.0, 40.8, 80.6, 148.2, 214.6],
            [1.2, 6.2, 20.8, 41.4, 78.0, 122.8, 208.0]
        ];
        Self { times }
    }

    pub fn times(&self) -> ArrayView2<f64> {
        self.times.view()
    }

    /// Rows reversed, i.e. the order in which they are drawn top to bottom.
    pub fn render_order(&self) -> Array2<f64> {
        reverse_rows(self.times.view())
    }

    /// Tick labels of the x axis: `100, 200, ..., 700`.
    pub fn task_labels(&self) -> Vec<u32> {
        (0..self.times.ncols() as u32).map(|i| 100 + 100 * i).collect()
    }

    /// Tick labels of the y axis in render order: `10, 9, ..., 2`.
    pub fn processor_labels(&self) -> Vec<u32> {
        (0..self.times.nrows() as u32).map(|i| 10 - i).collect()
    }
}

pub fn reverse_rows(m: ArrayView2<f64>) -> Array2<f64> {
    m.slice(s![..;-1, ..]).to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matrix_is_rectangular() {
        let m = Measurements::recorded();
        assert_eq!(m.times().dim(), (PROCESSOR_COUNTS, TASK_COUNTS));
        for row in m.times().outer_iter() {
            assert_eq!(row.len(), TASK_COUNTS);
        }
    }

    #[test]
    fn reversing_twice_is_identity() {
        let m = Measurements::recorded();
        let twice = reverse_rows(m.render_order().view());
        assert_eq!(twice, m.times());
    }

    #[test]
    fn render_order_starts_with_last_recorded_row() {
        let rows = Measurements::recorded().render_order();
        assert_eq!(
            rows.row(0).to_vec(),
            vec![1.2, 6.2, 20.8, 41.4, 78.0, 122.8, 208.0]
        );
        assert_eq!(
            rows.row(PROCESSOR_COUNTS - 1).to_vec(),
            vec![0.0, 2.4, 6.8, 17.4, 26.0, 47.0, 60.2]
        );
    }

    #[test]
    fn task_labels() {
        let m = Measurements::recorded();
        assert_eq!(m.task_labels(), vec![100, 200, 300, 400, 500, 600, 700]);
    }

    #[test]
    fn processor_labels_match_row_count() {
        let m = Measurements::recorded();
        let labels = m.processor_labels();
        assert_eq!(labels, vec![10, 9, 8, 7, 6, 5, 4, 3, 2]);
        assert_eq!(labels.len(), m.render_order().nrows());
    }
}
