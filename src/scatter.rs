use ndarray::{s, Array2};
use ndarray_stats::QuantileExt;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::lattice::{Bounds, Point};

/// The ordered collection of points a table or chart displays.
///
/// Points arrive either one by one from manual entry or as a whole generated
/// batch replacing the previous content. Unlike a generated batch, the
/// collection itself does not enforce distinct coordinates.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Scatter {
    points: Vec<Point>,
}

impl Scatter {
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Append a manually entered coordinate, indexed behind the points
    /// already present.
    pub fn push(&mut self, x: i32, y: i32) -> Point {
        let point = Point::indexed(x, y, self.points.len());
        self.points.push(point);
        point
    }

    /// Replace the whole collection with a freshly generated batch.
    pub fn refill(&mut self, points: Vec<Point>) {
        self.points = points;
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The coordinates as a `len x 2` matrix in insertion order.
    pub fn positions(&self) -> Array2<i32> {
        let mut positions = Array2::zeros((self.points.len(), 2));
        for (i, point) in self.points.iter().enumerate() {
            positions[[i, 0]] = point.x();
            positions[[i, 1]] = point.y();
        }
        positions
    }

    /// The tightest bounds enclosing all points, `None` while empty.
    pub fn bbox(&self) -> Option<Bounds> {
        let positions = self.positions();
        return Some(Bounds::new(
            *positions.slice(s![.., 0]).min().ok()?,
            *positions.slice(s![.., 0]).max().ok()?,
            *positions.slice(s![.., 1]).min().ok()?,
            *positions.slice(s![.., 1]).max().ok()?,
        ));
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn push_indexes_behind_existing_points() {
        let mut scatter = Scatter::new();
        assert_eq!(scatter.push(1, 2).index(), 0);
        assert_eq!(scatter.push(3, 4).index(), 1);
        assert_eq!(scatter.len(), 2);
        assert_eq!(scatter.points()[1].coord(), (3, 4));

        // duplicate coordinates are fine outside of generation
        assert_eq!(scatter.push(1, 2).index(), 2);
    }

    #[test]
    fn refill_replaces_the_collection() {
        let mut scatter = Scatter::new();
        scatter.push(9, 9);
        scatter.refill(vec![Point::indexed(0, 0, 0), Point::indexed(1, 1, 1)]);
        assert_eq!(scatter.len(), 2);
        assert_eq!(scatter.points()[0].coord(), (0, 0));

        // manual entry continues behind the refilled batch
        assert_eq!(scatter.push(5, 5).index(), 2);

        scatter.clear();
        assert!(scatter.is_empty());
    }

    #[test]
    fn positions_matrix_follows_insertion_order() {
        let mut scatter = Scatter::new();
        scatter.push(-3, 7);
        scatter.push(4, -2);
        let positions = scatter.positions();
        assert_eq!(positions.dim(), (2, 2));
        assert_eq!(positions[[0, 0]], -3);
        assert_eq!(positions[[0, 1]], 7);
        assert_eq!(positions[[1, 0]], 4);
        assert_eq!(positions[[1, 1]], -2);

        assert_eq!(Scatter::new().positions().dim(), (0, 2));
    }

    #[test]
    fn bbox_encloses_all_points() {
        let mut scatter = Scatter::new();
        scatter.push(-3, 7);
        scatter.push(4, -2);
        scatter.push(0, 0);
        assert_eq!(scatter.bbox(), Some(Bounds::new(-3, 4, -2, 7)));
    }

    #[test]
    fn bbox_of_nothing_is_none() {
        assert_eq!(Scatter::new().bbox(), None);
    }
}
