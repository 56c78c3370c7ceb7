use rand::Rng;
use std::fmt;
use std::ops::Mul;

use crate::error::{Error, Result, Shape};

/// Dense row-major matrix of `f64`.
///
/// `rows` and `cols` are fixed once built; operations that change the shape
/// return a new matrix. The fields are public for reading: `data` must keep
/// exactly `rows` rows of `cols` elements, or indexing in `transpose` and the
/// product will panic. Build matrices through `new`, `from_data` or
/// `from_sequence`, which check this.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix{
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Vec<f64>>
}

impl Matrix{
    /// Zero-filled `rows x cols` matrix. Both dimensions must be positive.
    pub fn new(rows: usize, cols: usize) -> Result<Matrix> {
        if rows == 0 || cols == 0 {
            return Err(Error::InvalidShape { rows, cols });
        }
        Ok(Matrix::zeros(rows, cols))
    }

    // Callers guarantee a positive shape (it is derived from an existing matrix).
    pub(crate) fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix{
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows]
        }
    }

    /// Builds a matrix from literal rows. Every row must have the same,
    /// non-zero length.
    pub fn from_data(data: Vec<Vec<f64>>) -> Result<Matrix> {
        let rows = data.len();
        let cols = data.first().map_or(0, |row| row.len());
        if rows == 0 || cols == 0 || data.iter().any(|row| row.len() != cols) {
            return Err(Error::InvalidShape { rows, cols });
        }
        Ok(Matrix { rows, cols, data })
    }

    pub fn shape(&self) -> Shape {
        (self.rows, self.cols)
    }

    /// Fills every element with a uniform sample from `[min, max)`.
    ///
    /// An empty range (`min >= max`, or either bound NaN) is an
    /// `InvalidRange` error and leaves the matrix untouched.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R, min: f64, max: f64) -> Result<()> {
        if !(min < max) {
            return Err(Error::InvalidRange { min, max });
        }
        for i in 0..self.rows {
            for j in 0..self.cols {
                self.data[i][j] = rng.gen_range(min..max);
            }
        }
        Ok(())
    }

    /// Applies `functor` to every element in place.
    pub fn map<F>(&mut self, functor: F)
    where
        F: Fn(f64) -> f64,
    {
        for row in self.data.iter_mut() {
            for x in row.iter_mut() {
                *x = functor(*x);
            }
        }
    }

    /// Same as [`Matrix::map`] but leaves `self` untouched.
    pub fn mapped<F>(&self, functor: F) -> Matrix
    where
        F: Fn(f64) -> f64,
    {
        let mut res = self.clone();
        res.map(functor);
        res
    }

    pub fn add(&mut self, other: &Matrix) -> Result<()> {
        self.zip_in_place(other, |a, b| a + b)
    }

    pub fn subtract(&mut self, other: &Matrix) -> Result<()> {
        self.zip_in_place(other, |a, b| a - b)
    }

    /// Hadamard product in place.
    pub fn multiply_elementwise(&mut self, other: &Matrix) -> Result<()> {
        self.zip_in_place(other, |a, b| a * b)
    }

    pub fn add_scalar(&mut self, n: f64) {
        self.map(|x| x + n);
    }

    pub fn subtract_scalar(&mut self, n: f64) {
        self.map(|x| x - n);
    }

    pub fn multiply_scalar(&mut self, n: f64) {
        self.map(|x| x * n);
    }

    pub fn added(&self, other: &Matrix) -> Result<Matrix> {
        let mut res = self.clone();
        res.add(other)?;
        Ok(res)
    }

    pub fn subtracted(&self, other: &Matrix) -> Result<Matrix> {
        let mut res = self.clone();
        res.subtract(other)?;
        Ok(res)
    }

    pub fn added_scalar(&self, n: f64) -> Matrix {
        self.mapped(|x| x + n)
    }

    pub fn subtracted_scalar(&self, n: f64) -> Matrix {
        self.mapped(|x| x - n)
    }

    /// Scalar broadcast multiply, returning a new matrix.
    pub fn scaled(&self, n: f64) -> Matrix {
        self.mapped(|x| x * n)
    }

    pub fn transpose(&self) -> Matrix {
        let mut res = Matrix::zeros(self.cols, self.rows);

        for i in 0..res.rows {
            for j in 0..res.cols {
                res.data[i][j] = self.data[j][i];
            }
        }

        res
    }

    /// Matrix product when `self.cols == rhs.rows`, otherwise the element-wise
    /// product when both shapes are identical.
    ///
    /// The product is checked first: two square matrices of the same size are
    /// always multiplied, never combined element-wise.
    pub fn matmul_or_elementwise(&self, rhs: &Matrix) -> Result<Matrix> {
        if self.cols == rhs.rows {
            let mut res = Matrix::zeros(self.rows, rhs.cols);

            for i in 0..res.rows {
                for j in 0..res.cols {
                    let mut sum = 0.0;

                    for k in 0..self.cols {
                        sum += self.data[i][k] * rhs.data[k][j];
                    }

                    res.data[i][j] = sum;
                }
            }

            Ok(res)
        } else if self.shape() == rhs.shape() {
            let mut res = self.clone();
            res.multiply_elementwise(rhs)?;
            Ok(res)
        } else {
            Err(Error::IncompatibleShapes { left: self.shape(), right: rhs.shape() })
        }
    }

    /// Packs `values` row-major into a matrix with `cols` columns and
    /// `ceil(len / cols)` rows.
    ///
    /// NaN entries become `0.0`. When `len` is not a multiple of `cols`, the
    /// trailing cells of the last row stay `0.0`.
    pub fn from_sequence(values: &[f64], cols: usize) -> Result<Matrix> {
        let rows = if cols == 0 { 0 } else { values.len().div_ceil(cols) };
        let mut res = Matrix::new(rows, cols)?;

        for (index, &value) in values.iter().enumerate() {
            res.data[index / cols][index % cols] = if value.is_nan() { 0.0 } else { value };
        }

        Ok(res)
    }

    /// Flattens row-major.
    pub fn to_sequence(&self) -> Vec<f64> {
        self.data.iter().flatten().copied().collect()
    }

    fn zip_in_place<F>(&mut self, other: &Matrix, op: F) -> Result<()>
    where
        F: Fn(f64, f64) -> f64,
    {
        if self.shape() != other.shape() {
            return Err(Error::ShapeMismatch { left: self.shape(), right: other.shape() });
        }

        for (row, other_row) in self.data.iter_mut().zip(other.data.iter()) {
            for (x, y) in row.iter_mut().zip(other_row.iter()) {
                *x = op(*x, *y);
            }
        }

        Ok(())
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Matrix {}x{}", self.rows, self.cols)?;
        for row in &self.data {
            let cells: Vec<String> = row.iter().map(|x| format!("{:>10.5}", x)).collect();
            writeln!(f, "| {} |", cells.join(" "))?;
        }
        Ok(())
    }
}

impl Mul for &Matrix {
    type Output = Result<Matrix>;

    fn mul(self, rhs: Self) -> Self::Output {
        self.matmul_or_elementwise(rhs)
    }
}

impl Mul<f64> for &Matrix {
    type Output = Matrix;

    fn mul(self, rhs: f64) -> Self::Output {
        self.scaled(rhs)
    }
}
