//! Output shapes for polynomial evaluators.
//!
//! Evaluators either return the full table of degrees 0..=N (one row per
//! degree, one column per point) or only the top-degree row. The request is
//! made with [`Rows`] and the answer comes back as [`PolynomialValues`].

use faer::Mat;

/// Which rows of the polynomial table an evaluator should return.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Rows {
    /// All degrees 0..=N as an (N+1) × M table.
    #[default]
    All,
    /// Only degree N, as a vector of length M.
    Top,
}

/// Values produced by a polynomial evaluator.
#[derive(Clone, Debug)]
pub enum PolynomialValues {
    /// Table[i, j] = φ_i(x_j) for degrees i = 0..=N.
    Table(Mat<f64>),
    /// Row[j] = φ_N(x_j).
    Row(Vec<f64>),
}

impl PolynomialValues {
    /// Values of the highest degree, regardless of the variant.
    pub fn top_row(&self) -> Vec<f64> {
        match self {
            Self::Table(table) => {
                let last = table.nrows() - 1;
                (0..table.ncols()).map(|j| table[(last, j)]).collect()
            }
            Self::Row(row) => row.clone(),
        }
    }

    /// Consume and return the highest-degree row.
    pub fn into_top_row(self) -> Vec<f64> {
        match self {
            Self::Row(row) => row,
            table => table.top_row(),
        }
    }

    /// Borrow the full table, if one was requested.
    pub fn as_table(&self) -> Option<&Mat<f64>> {
        match self {
            Self::Table(table) => Some(table),
            Self::Row(_) => None,
        }
    }

    /// Consume and return the full table, if one was requested.
    pub fn into_table(self) -> Option<Mat<f64>> {
        match self {
            Self::Table(table) => Some(table),
            Self::Row(_) => None,
        }
    }

    /// Number of evaluation points.
    pub fn n_points(&self) -> usize {
        match self {
            Self::Table(table) => table.ncols(),
            Self::Row(row) => row.len(),
        }
    }
}

/// Collects recurrence rows into the requested output shape.
///
/// With [`Rows::Top`] nothing but the final row is stored, so the
/// evaluators only ever hold the two or three rows the recurrence needs.
pub(crate) struct TableBuilder {
    max_degree: usize,
    table: Option<Mat<f64>>,
    top: Vec<f64>,
}

impl TableBuilder {
    pub(crate) fn new(max_degree: usize, n_points: usize, rows: Rows) -> Self {
        let table = match rows {
            Rows::All => Some(Mat::zeros(max_degree + 1, n_points)),
            Rows::Top => None,
        };
        Self {
            max_degree,
            table,
            top: Vec::new(),
        }
    }

    /// Record the values of degree `degree`, scaled by `scale`.
    pub(crate) fn record(&mut self, degree: usize, row: &[f64], scale: f64) {
        if let Some(table) = self.table.as_mut() {
            for (j, &v) in row.iter().enumerate() {
                table[(degree, j)] = v * scale;
            }
        } else if degree == self.max_degree {
            self.top = row.iter().map(|&v| v * scale).collect();
        }
    }

    pub(crate) fn finish(self) -> PolynomialValues {
        match self.table {
            Some(table) => PolynomialValues::Table(table),
            None => PolynomialValues::Row(self.top),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_full_table() {
        let mut builder = TableBuilder::new(1, 2, Rows::All);
        builder.record(0, &[1.0, 1.0], 1.0);
        builder.record(1, &[2.0, 3.0], 0.5);
        let values = builder.finish();

        let table = values.as_table().expect("full table requested");
        assert_eq!(table.nrows(), 2);
        assert_eq!(table.ncols(), 2);
        assert_eq!(table[(1, 0)], 1.0);
        assert_eq!(table[(1, 1)], 1.5);
        assert_eq!(values.top_row(), vec![1.0, 1.5]);
    }

    #[test]
    fn test_builder_top_row_only() {
        let mut builder = TableBuilder::new(2, 3, Rows::Top);
        builder.record(0, &[1.0, 1.0, 1.0], 1.0);
        builder.record(1, &[0.0, 2.0, 4.0], 1.0);
        builder.record(2, &[-2.0, 2.0, 14.0], 1.0);
        let values = builder.finish();

        assert!(values.as_table().is_none());
        assert_eq!(values.n_points(), 3);
        assert_eq!(values.into_top_row(), vec![-2.0, 2.0, 14.0]);
    }
}
