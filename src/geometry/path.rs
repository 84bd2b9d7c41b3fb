use std::fmt;

use crate::error::{PathError, Result};
use crate::math::Matrix;

use super::point::check_transform;
use super::{Point, Rotatable, Scalable, Transformable, Translatable};

/// An ordered, mutable sequence of points.
///
/// Every geometric operation is applied to each point in turn.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    points: Vec<Point>,
}

impl Path {
    /// Creates a path from the given points.
    #[must_use]
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the path has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The points in order.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Iterates over the points in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// Iterates mutably over the points in order.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Point> {
        self.points.iter_mut()
    }

    /// Appends a point.
    pub fn push(&mut self, point: Point) -> &mut Self {
        self.points.push(point);
        self
    }

    /// Inserts a point before position `pos`; positions past the end append.
    pub fn insert(&mut self, pos: usize, point: Point) -> &mut Self {
        if pos >= self.points.len() {
            self.points.push(point);
        } else {
            self.points.insert(pos, point);
        }
        self
    }

    /// Removes every point equal to `point`.
    pub fn remove(&mut self, point: &Point) -> &mut Self {
        self.points.retain(|p| p != point);
        self
    }

    /// Removes the points at `indexes` and returns them in the order given.
    ///
    /// A repeated index yields its point once per occurrence but removes it
    /// only once.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::IndexOutOfBounds`] if any index is past the end;
    /// the path is left untouched.
    pub fn remove_at(&mut self, indexes: &[usize]) -> Result<Vec<Point>> {
        let len = self.points.len();
        if let Some(&index) = indexes.iter().find(|&&i| i >= len) {
            tracing::debug!(index, len, "path index out of bounds");
            return Err(PathError::IndexOutOfBounds { index, len }.into());
        }

        let removed = indexes.iter().map(|&i| self.points[i].clone()).collect();

        let mut doomed = indexes.to_vec();
        doomed.sort_unstable();
        doomed.dedup();
        for i in doomed.into_iter().rev() {
            self.points.remove(i);
        }
        Ok(removed)
    }

    /// Translates every point by `(tx, ty)`.
    pub fn translate(&mut self, tx: f64, ty: f64) -> &mut Self {
        for point in &mut self.points {
            point.translate(tx, ty);
        }
        self
    }

    /// Rotates every point by `angle` radians about the origin.
    pub fn rotate(&mut self, angle: f64) -> &mut Self {
        self.rotate_about(angle, &Point::origin())
    }

    /// Rotates every point by `angle` radians about `pivot`.
    pub fn rotate_about(&mut self, angle: f64, pivot: &Point) -> &mut Self {
        for point in &mut self.points {
            point.rotate_about(angle, pivot);
        }
        self
    }

    /// Scales every point by `(sx, sy)` about the origin.
    pub fn scale(&mut self, sx: f64, sy: f64) -> &mut Self {
        self.scale_about(sx, sy, &Point::origin())
    }

    /// Scales every point by `(sx, sy)` about `pivot`.
    pub fn scale_about(&mut self, sx: f64, sy: f64, pivot: &Point) -> &mut Self {
        for point in &mut self.points {
            point.scale_about(sx, sy, pivot);
        }
        self
    }

    /// Applies `matrix` to every point.
    ///
    /// # Errors
    ///
    /// Returns [`crate::MatrixError::DimensionMismatch`] unless `matrix` is
    /// 3x3. The shape is checked before any point is touched.
    pub fn transform(&mut self, matrix: &Matrix) -> Result<&mut Self> {
        check_transform(matrix)?;
        for point in &mut self.points {
            point.apply_transform(matrix);
        }
        tracing::trace!(points = self.points.len(), "path transformed");
        Ok(self)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, point) in self.points.iter().enumerate() {
            if i > 0 {
                f.write_str("->")?;
            }
            write!(f, "{point}")?;
        }
        Ok(())
    }
}

impl FromIterator<Point> for Path {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for Path {
    type Item = Point;
    type IntoIter = std::vec::IntoIter<Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl Translatable for Path {
    fn translate(&mut self, tx: f64, ty: f64) -> &mut Self {
        Path::translate(self, tx, ty)
    }
}

impl Rotatable for Path {
    fn rotate_about(&mut self, angle: f64, pivot: &Point) -> &mut Self {
        Path::rotate_about(self, angle, pivot)
    }
}

impl Scalable for Path {
    fn scale_about(&mut self, sx: f64, sy: f64, pivot: &Point) -> &mut Self {
        Path::scale_about(self, sx, sy, pivot)
    }
}

impl Transformable for Path {
    fn transform(&mut self, matrix: &Matrix) -> Result<&mut Self> {
        Path::transform(self, matrix)
    }
}
