use crate::{Error, Result};

/// Dense row-major table of finite values.
#[derive(Clone, PartialEq, Default)]
pub struct Matrix {
    rows: usize,
    columns: usize,
    values: Vec<f64>,
}

impl Matrix {
    pub fn from_rows<Rows, Row>(rows: Rows) -> Result<Self>
    where
        Rows: IntoIterator<Item = Row>,
        Row: AsRef<[f64]>,
    {
        let mut matrix = Self::default();
        for row in rows {
            matrix.push_row(row.as_ref())?;
        }
        Ok(matrix)
    }

    /// Build an empty matrix with a fixed row width, so that rows can be appended one at a time.
    pub fn with_columns(columns: usize) -> Self {
        Self {
            rows: 0,
            columns,
            values: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: &[f64]) -> Result<()> {
        if self.rows == 0 && self.values.is_empty() && self.columns == 0 {
            self.columns = row.len();
        }
        if row.len() != self.columns {
            return Err(Error::shape("matrix row", self.columns, row.len()));
        }
        if let Some(column) = row.iter().position(|v| !v.is_finite()) {
            return Err(Error::NonFinite {
                row: self.rows,
                column,
            });
        }
        self.values.extend_from_slice(row);
        self.rows += 1;
        Ok(())
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// # Panics
    ///
    /// Panics if `index >= self.rows()`. See [`Matrix::get_row`] for the checked form.
    pub fn row(&self, index: usize) -> &[f64] {
        &self.values[index * self.columns..(index + 1) * self.columns]
    }

    pub fn get_row(&self, index: usize) -> Option<&[f64]> {
        (index < self.rows).then(|| self.row(index))
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        (0..self.rows).map(|i| self.row(i))
    }

    pub fn transpose(&self) -> Self {
        let mut values = Vec::with_capacity(self.values.len());
        for column in 0..self.columns {
            values.extend(self.iter_rows().map(|row| row[column]));
        }
        Self {
            rows: self.columns,
            columns: self.rows,
            values,
        }
    }

    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.iter_rows().map(<[f64]>::to_vec).collect()
    }
}

impl std::fmt::Debug for Matrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter_rows()).finish()
    }
}

impl serde::Serialize for Matrix {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter_rows())
    }
}

#[cfg(test)]
mod test {
    use super::Matrix;
    use crate::Error;

    #[test]
    fn transpose_swaps_orientation() {
        let m = Matrix::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap();
        let t = m.transpose();
        assert_eq!((t.rows(), t.columns()), (3, 2));
        assert_eq!(t.to_rows(), vec![vec![1.0, 4.0], vec![2.0, 5.0], vec![3.0, 6.0]]);
        assert_eq!(t.transpose(), m);
    }

    #[test]
    fn ragged_rows_rejected() {
        let err = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert_eq!(
            err,
            Error::ShapeMismatch {
                what: "matrix row",
                expected: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn non_finite_rejected() {
        let err = Matrix::from_rows([[0.5, f64::NAN]]).unwrap_err();
        assert_eq!(err, Error::NonFinite { row: 0, column: 1 });
        let mut m = Matrix::with_columns(2);
        assert!(m.push_row(&[f64::INFINITY, 0.0]).is_err());
        assert_eq!(m.rows(), 0);
    }

    #[test]
    fn empty_transpose() {
        let m = Matrix::with_columns(5);
        let t = m.transpose();
        assert_eq!((t.rows(), t.columns()), (5, 0));
        assert!(t.is_empty());
        assert_eq!(t.row(3), &[] as &[f64]);
    }

    #[test]
    fn get_row_is_checked() {
        let m = Matrix::from_rows([[1.0, 2.0], [3.0, 4.0]]).unwrap();
        assert_eq!(m.get_row(1), Some(&[3.0, 4.0][..]));
        assert_eq!(m.get_row(2), None);
        assert_eq!(Matrix::with_columns(5).transpose().get_row(4), Some(&[] as &[f64]));
        assert_eq!(Matrix::with_columns(5).get_row(0), None);
    }
}
