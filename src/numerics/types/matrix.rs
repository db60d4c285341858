// src/numerics/types/matrix.rs
// Dense row-major matrix with runtime dimensions.

use core::ops::{Add, Index, IndexMut, Mul};

use serde::{Deserialize, Serialize};

use super::traits::FloatingPoint;
use crate::numerics::error::{GeometryError, Result};
use crate::numerics::tolerance;

/// Matrix is a rectangular array of scalars stored row by row.
///
/// Row and column counts are fixed at construction; only `transpose`
/// exchanges them.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix<T: FloatingPoint = f64> {
    row_count: usize,
    column_count: usize,
    data: Vec<T>,
}

// Serialized as a list of rows.
impl<T> Serialize for Matrix<T>
where
    T: FloatingPoint + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let rows: Vec<&[T]> = self.data.chunks(self.column_count.max(1)).collect();
        (self.row_count, self.column_count, rows).serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Matrix<T>
where
    T: FloatingPoint + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let (row_count, column_count, rows) = <(usize, usize, Vec<Vec<T>>)>::deserialize(deserializer)?;
        let cells = row_count.checked_mul(column_count).ok_or_else(|| {
            <D::Error as serde::de::Error>::custom(format!("a {}x{} matrix overflows the cell count", row_count, column_count))
        })?;
        // A matrix without columns serializes no rows.
        let expected_rows = if column_count == 0 { 0 } else { row_count };
        if rows.len() != expected_rows {
            return Err(serde::de::Error::custom(format!(
                "expected {} rows for a {}x{} matrix, found {}",
                expected_rows,
                row_count,
                column_count,
                rows.len()
            )));
        }
        if let Some((r, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != column_count) {
            return Err(serde::de::Error::custom(format!(
                "expected {} columns, found {} in row {}",
                column_count,
                row.len(),
                r
            )));
        }
        let mut data = Vec::with_capacity(cells);
        for row in rows {
            data.extend(row);
        }
        Ok(Matrix { row_count, column_count, data })
    }
}

impl<T: FloatingPoint> Matrix<T> {
    /// Zero-filled matrix.
    pub fn new(row_count: usize, column_count: usize) -> Self {
        Self {
            row_count,
            column_count,
            data: vec![T::zero(); row_count * column_count],
        }
    }

    /// Zero-filled matrix from signed counts; negative counts are a range
    /// error.
    pub fn try_new(row_count: i64, column_count: i64) -> Result<Self> {
        let rows = Self::checked_count("row count", row_count)?;
        let columns = Self::checked_count("column count", column_count)?;
        Ok(Self::new(rows, columns))
    }

    fn checked_count(what: &'static str, count: i64) -> Result<usize> {
        usize::try_from(count).map_err(|_| {
            tracing::debug!(what, count, "negative matrix dimension");
            GeometryError::Range { what, value: count, limit: 0 }
        })
    }

    /// Construct from row slices. Ragged rows are a shape mismatch.
    pub fn from_rows(rows: &[Vec<T>]) -> Result<Self> {
        let column_count = rows.first().map_or(0, |r| r.len());
        let mut data = Vec::with_capacity(rows.len() * column_count);
        for (r, row) in rows.iter().enumerate() {
            if row.len() != column_count {
                return Err(GeometryError::shape(
                    format!("{} columns", column_count),
                    format!("{} columns in row {}", row.len(), r),
                ));
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            row_count: rows.len(),
            column_count,
            data,
        })
    }

    /// Square matrix with ones on the diagonal.
    pub fn identity(size: usize) -> Self {
        let mut m = Self::new(size, size);
        m.set_diagonal(T::one());
        m
    }

    /// Matrix whose cells are `f(row, column)`.
    pub fn generate(row_count: usize, column_count: usize, f: impl Fn(usize, usize) -> T) -> Self {
        let mut m = Self::new(row_count, column_count);
        m.set_by_function(|r, c, _| f(r, c));
        m
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn column_count(&self) -> usize {
        self.column_count
    }

    pub fn is_square(&self) -> bool {
        self.row_count == self.column_count
    }

    pub fn is_valid(&self) -> bool {
        self.data.iter().all(|c| c.is_valid())
    }

    fn offset(&self, row: usize, column: usize) -> Result<usize> {
        if row >= self.row_count {
            return Err(GeometryError::index(row, self.row_count));
        }
        if column >= self.column_count {
            return Err(GeometryError::index(column, self.column_count));
        }
        Ok(row * self.column_count + column)
    }

    pub fn get(&self, row: usize, column: usize) -> Result<T> {
        let at = self.offset(row, column)?;
        Ok(self.data[at])
    }

    pub fn set(&mut self, row: usize, column: usize, value: T) -> Result<()> {
        let at = self.offset(row, column)?;
        self.data[at] = value;
        Ok(())
    }

    /// Get a row by index
    pub fn row(&self, index: usize) -> Result<Vec<T>> {
        if index >= self.row_count {
            return Err(GeometryError::index(index, self.row_count));
        }
        let start = index * self.column_count;
        Ok(self.data[start..start + self.column_count].to_vec())
    }

    /// Get a column by index
    pub fn column(&self, index: usize) -> Result<Vec<T>> {
        if index >= self.column_count {
            return Err(GeometryError::index(index, self.column_count));
        }
        Ok((0..self.row_count)
            .map(|r| self.data[r * self.column_count + index])
            .collect())
    }

    /// Rewrites every cell as `f(row, column, old_value)`.
    ///
    /// The structural mutators below are all expressed through this.
    pub fn set_by_function(&mut self, f: impl Fn(usize, usize, T) -> T) {
        for r in 0..self.row_count {
            for c in 0..self.column_count {
                let at = r * self.column_count + c;
                self.data[at] = f(r, c, self.data[at]);
            }
        }
    }

    pub fn zero(&mut self) {
        self.set_by_function(|_, _, _| T::zero());
    }

    /// Writes `d` on the main diagonal and zero everywhere else.
    pub fn set_diagonal(&mut self, d: T) {
        self.set_by_function(|r, c, _| if r == c { d } else { T::zero() });
    }

    /// Multiply every cell by `s` in place.
    pub fn scale(&mut self, s: T) {
        self.set_by_function(|_, _, old| s * old);
    }

    pub fn duplicate(&self) -> Self {
        let mut copy = Self::new(self.row_count, self.column_count);
        copy.set_by_function(|r, c, _| self.data[r * self.column_count + c]);
        copy
    }

    /// Transposes in place, swapping the row and column counts.
    pub fn transpose(&mut self) -> bool {
        let mut data = Vec::with_capacity(self.data.len());
        for c in 0..self.column_count {
            for r in 0..self.row_count {
                data.push(self.data[r * self.column_count + c]);
            }
        }
        self.data = data;
        core::mem::swap(&mut self.row_count, &mut self.column_count);
        true
    }

    pub fn swap_rows(&mut self, row_a: usize, row_b: usize) -> Result<bool> {
        Self::check_swap_index("row", row_a, row_b, self.row_count)?;
        if row_a == row_b {
            return Ok(true);
        }
        for c in 0..self.column_count {
            self.data
                .swap(row_a * self.column_count + c, row_b * self.column_count + c);
        }
        Ok(true)
    }

    pub fn swap_columns(&mut self, column_a: usize, column_b: usize) -> Result<bool> {
        Self::check_swap_index("column", column_a, column_b, self.column_count)?;
        if column_a == column_b {
            return Ok(true);
        }
        for r in 0..self.row_count {
            let base = r * self.column_count;
            self.data.swap(base + column_a, base + column_b);
        }
        Ok(true)
    }

    fn check_swap_index(what: &'static str, a: usize, b: usize, count: usize) -> Result<()> {
        let worst = a.max(b);
        if worst >= count {
            tracing::debug!(what, index = worst, count, "swap index out of range");
            return Err(GeometryError::Range {
                what,
                value: worst as i64,
                limit: count as i64,
            });
        }
        Ok(())
    }

    /// Matrix product; requires `self.column_count() == other.row_count()`.
    pub fn try_mul(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        if self.column_count != other.row_count {
            return Err(GeometryError::shape(
                format!("{} rows on the right operand", self.column_count),
                format!("{} rows", other.row_count),
            ));
        }
        Ok(Matrix::generate(self.row_count, other.column_count, |r, c| {
            (0..self.column_count).fold(T::zero(), |acc, i| {
                acc + self.data[r * self.column_count + i] * other.data[i * other.column_count + c]
            })
        }))
    }

    /// Elementwise sum of two matrices of identical shape.
    pub fn try_add(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        if self.row_count != other.row_count || self.column_count != other.column_count {
            return Err(GeometryError::shape(
                format!("{}x{}", self.row_count, self.column_count),
                format!("{}x{}", other.row_count, other.column_count),
            ));
        }
        Ok(Matrix::generate(self.row_count, self.column_count, |r, c| {
            let at = r * self.column_count + c;
            self.data[at] + other.data[at]
        }))
    }

    pub fn epsilon_equals(&self, other: &Matrix<T>, epsilon: T) -> bool {
        self.row_count == other.row_count
            && self.column_count == other.column_count
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(&a, &b)| tolerance::epsilon_equals(a, b, epsilon))
    }

    pub fn invert(&mut self, _zero_tolerance: T) -> Result<bool> {
        Err(GeometryError::not_implemented("Matrix::invert"))
    }

    pub fn is_row_orthogonal(&self) -> Result<bool> {
        Err(GeometryError::not_implemented("Matrix::is_row_orthogonal"))
    }

    pub fn is_column_orthogonal(&self) -> Result<bool> {
        Err(GeometryError::not_implemented("Matrix::is_column_orthogonal"))
    }

    pub fn is_row_orthonormal(&self) -> Result<bool> {
        Err(GeometryError::not_implemented("Matrix::is_row_orthonormal"))
    }

    pub fn is_column_orthonormal(&self) -> Result<bool> {
        Err(GeometryError::not_implemented("Matrix::is_column_orthonormal"))
    }
}

/// Panics on an out-of-range cell; use `get` for a checked read.
impl<T: FloatingPoint> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, column): (usize, usize)) -> &T {
        match self.offset(row, column) {
            Ok(at) => &self.data[at],
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T: FloatingPoint> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut T {
        match self.offset(row, column) {
            Ok(at) => &mut self.data[at],
            Err(err) => panic!("{}", err),
        }
    }
}

impl<'a, T: FloatingPoint> Mul<&'a Matrix<T>> for &'a Matrix<T> {
    type Output = Result<Matrix<T>>;

    fn mul(self, rhs: &'a Matrix<T>) -> Result<Matrix<T>> {
        self.try_mul(rhs)
    }
}

impl<'a, T: FloatingPoint> Add<&'a Matrix<T>> for &'a Matrix<T> {
    type Output = Result<Matrix<T>>;

    fn add(self, rhs: &'a Matrix<T>) -> Result<Matrix<T>> {
        self.try_add(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(rows: &[&[f64]]) -> Matrix {
        let rows: Vec<Vec<f64>> = rows.iter().map(|r| r.to_vec()).collect();
        Matrix::from_rows(&rows).unwrap()
    }

    #[test]
    fn test_matrix_constructors_and_accessors() {
        let a = m(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
        assert_eq!(a.row_count(), 2);
        assert_eq!(a.column_count(), 3);
        assert!(!a.is_square());
        assert_eq!(a.row(1).unwrap(), vec![4.0, 5.0, 6.0]);
        assert_eq!(a.column(1).unwrap(), vec![2.0, 5.0]);
        assert_eq!(a.get(1, 2), Ok(6.0));
        assert_eq!(a[(0, 1)], 2.0);

        let z = Matrix::<f64>::new(2, 2);
        assert_eq!(z, m(&[&[0.0, 0.0], &[0.0, 0.0]]));
    }

    #[test]
    fn test_negative_dimensions_are_range_errors() {
        assert!(matches!(
            Matrix::<f64>::try_new(-1, 2),
            Err(GeometryError::Range { what: "row count", value: -1, .. })
        ));
        assert!(matches!(
            Matrix::<f64>::try_new(2, -3),
            Err(GeometryError::Range { what: "column count", .. })
        ));
        let empty = Matrix::<f64>::try_new(0, 0).unwrap();
        assert_eq!(empty.row_count(), 0);
        assert!(empty.is_square());
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let ragged = vec![vec![1.0, 2.0], vec![3.0]];
        assert!(matches!(Matrix::from_rows(&ragged), Err(GeometryError::ShapeMismatch { .. })));
    }

    #[test]
    fn test_index_errors() {
        let mut a = Matrix::<f64>::new(2, 3);
        assert_eq!(a.get(2, 0), Err(GeometryError::Index { index: 2, len: 2 }));
        assert_eq!(a.get(0, 3), Err(GeometryError::Index { index: 3, len: 3 }));
        assert!(a.set(5, 5, 1.0).is_err());
        assert!(a.row(2).is_err());
        assert!(a.column(3).is_err());
    }

    #[test]
    #[should_panic(expected = "Index out of range")]
    fn test_index_operator_panics_out_of_range() {
        let a = Matrix::<f64>::new(1, 1);
        let _ = a[(1, 0)];
    }

    #[test]
    fn test_multiply_by_identity() {
        let a = m(&[&[1.0, 2.0], &[3.0, 4.0]]);
        let id = Matrix::identity(2);
        assert_eq!((&a * &id).unwrap(), a);
        assert_eq!((&id * &a).unwrap(), a);
    }

    #[test]
    fn test_matrix_matrix_mul() {
        let a = m(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0], &[7.0, 8.0, 9.0]]);
        let b = m(&[&[9.0, 8.0, 7.0], &[6.0, 5.0, 4.0], &[3.0, 2.0, 1.0]]);

        let c = a.try_mul(&b).unwrap();

        assert_eq!(c.row(0).unwrap(), vec![30.0, 24.0, 18.0]);
        assert_eq!(c.row(1).unwrap(), vec![84.0, 69.0, 54.0]);
        assert_eq!(c.row(2).unwrap(), vec![138.0, 114.0, 90.0]);
    }

    #[test]
    fn test_rectangular_product_shape() {
        let a = m(&[&[1.0, 2.0, 3.0]]);
        let b = m(&[&[1.0], &[1.0], &[1.0]]);
        let inner = a.try_mul(&b).unwrap();
        assert_eq!((inner.row_count(), inner.column_count()), (1, 1));
        assert_eq!(inner.get(0, 0), Ok(6.0));

        let outer = b.try_mul(&a).unwrap();
        assert_eq!((outer.row_count(), outer.column_count()), (3, 3));

        assert!(matches!(a.try_mul(&a), Err(GeometryError::ShapeMismatch { .. })));
    }

    #[test]
    fn test_product_is_associative() {
        let a = Matrix::generate(2, 3, |r, c| (r as f64 + 1.0) * 0.5 - c as f64);
        let b = Matrix::generate(3, 4, |r, c| (r * 4 + c) as f64 / 3.0);
        let c = Matrix::generate(4, 2, |r, c| 1.0 / (1.0 + r as f64 + c as f64));

        let left = a.try_mul(&b).unwrap().try_mul(&c).unwrap();
        let right = a.try_mul(&b.try_mul(&c).unwrap()).unwrap();
        assert!(left.epsilon_equals(&right, 1e-12));
    }

    #[test]
    fn test_addition() {
        let a = m(&[&[1.0, 2.0], &[3.0, 4.0]]);
        let b = m(&[&[4.0, 3.0], &[2.0, 1.0]]);
        assert_eq!((&a + &b).unwrap(), m(&[&[5.0, 5.0], &[5.0, 5.0]]));

        let wide = Matrix::<f64>::new(2, 3);
        assert!(matches!(a.try_add(&wide), Err(GeometryError::ShapeMismatch { .. })));
    }

    #[test]
    fn test_transpose_twice_restores() {
        let original = m(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
        let mut t = original.duplicate();

        assert!(t.transpose());
        assert_eq!((t.row_count(), t.column_count()), (3, 2));
        assert_eq!(t.row(0).unwrap(), vec![1.0, 4.0]);
        assert_eq!(t.row(2).unwrap(), vec![3.0, 6.0]);

        assert!(t.transpose());
        assert_eq!(t, original);
    }

    #[test]
    fn test_row_and_column_swaps() {
        let mut a = m(&[&[1.0, 2.0], &[3.0, 4.0], &[5.0, 6.0]]);

        assert_eq!(a.swap_rows(0, 2), Ok(true));
        assert_eq!(a.row(0).unwrap(), vec![5.0, 6.0]);
        assert_eq!(a.row(2).unwrap(), vec![1.0, 2.0]);

        assert_eq!(a.swap_columns(0, 1), Ok(true));
        assert_eq!(a.row(0).unwrap(), vec![6.0, 5.0]);

        let before = a.clone();
        assert_eq!(a.swap_rows(1, 1), Ok(true));
        assert_eq!(a, before);

        assert!(matches!(a.swap_rows(0, 3), Err(GeometryError::Range { .. })));
        assert!(matches!(a.swap_columns(2, 0), Err(GeometryError::Range { .. })));
    }

    #[test]
    fn test_cell_rewrites() {
        let mut a = m(&[&[1.0, 2.0], &[3.0, 4.0]]);

        a.scale(2.0);
        assert_eq!(a, m(&[&[2.0, 4.0], &[6.0, 8.0]]));

        a.set_by_function(|r, c, old| old + (r * 10 + c) as f64);
        assert_eq!(a, m(&[&[2.0, 5.0], &[16.0, 19.0]]));

        // Full reset, not an additive update
        a.set_diagonal(7.0);
        assert_eq!(a, m(&[&[7.0, 0.0], &[0.0, 7.0]]));

        a.zero();
        assert_eq!(a, Matrix::new(2, 2));
    }

    #[test]
    fn test_duplicate_is_independent() {
        let a = m(&[&[1.0, 2.0]]);
        let mut b = a.duplicate();
        b.set(0, 0, 9.0).unwrap();
        assert_eq!(a.get(0, 0), Ok(1.0));
        assert_eq!(b.get(0, 0), Ok(9.0));
    }

    #[test]
    fn test_validity() {
        let mut a = Matrix::<f64>::identity(3);
        assert!(a.is_valid());
        a[(1, 2)] = f64::NAN;
        assert!(!a.is_valid());
    }

    #[test]
    fn test_unimplemented_queries_fail() {
        let mut a = Matrix::<f64>::identity(2);
        assert_eq!(a.invert(1e-12), Err(GeometryError::NotImplemented("Matrix::invert")));
        assert!(matches!(a.is_row_orthogonal(), Err(GeometryError::NotImplemented(_))));
        assert!(matches!(a.is_column_orthogonal(), Err(GeometryError::NotImplemented(_))));
        assert!(matches!(a.is_row_orthonormal(), Err(GeometryError::NotImplemented(_))));
        assert!(matches!(a.is_column_orthonormal(), Err(GeometryError::NotImplemented(_))));
        assert_eq!(a, Matrix::identity(2));
    }

    #[test]
    fn test_matrix_roundtrip() {
        let config = bincode::config::standard();
        let a = m(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);

        let encoded = bincode::serde::encode_to_vec(&a, config).unwrap();
        let (decoded, _len): (Matrix, _) =
            bincode::serde::decode_from_slice(&encoded, config).unwrap();

        assert_eq!(a, decoded);
    }

    #[test]
    fn test_deserialize_rejects_overflowing_dimensions() {
        let result = serde_json::from_str::<Matrix>("[18446744073709551615, 2, []]");
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_rejects_ragged_rows() {
        let ragged = serde_json::from_str::<Matrix>("[2, 2, [[1.0, 2.0, 3.0], [4.0]]]");
        assert!(ragged.is_err());

        let missing_row = serde_json::from_str::<Matrix>("[3, 2, [[1.0, 2.0], [3.0, 4.0]]]");
        assert!(missing_row.is_err());

        let ok = serde_json::from_str::<Matrix>("[2, 2, [[1.0, 2.0], [3.0, 4.0]]]").unwrap();
        assert_eq!(ok, m(&[&[1.0, 2.0], &[3.0, 4.0]]));

        let no_columns = serde_json::from_str::<Matrix>("[3, 0, []]").unwrap();
        assert_eq!((no_columns.row_count(), no_columns.column_count()), (3, 0));
    }
}
