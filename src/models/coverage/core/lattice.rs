use crate::support::geometry::{Bounds, Point};

/// Ratio of row spacing to in-row spacing in a hexagonal tiling, `√3 / 2`.
pub const SQUISH_FACTOR: f64 = 0.866_025_403_784_438_6;

/// Generates the centers of a hexagonal tiling over `bounds`.
///
/// Centers in a row are `spacing` apart and rows are
/// `spacing · √3/2` apart, with every odd row shifted right by half a
/// spacing. Rows start at `bounds.y.min() · √3/2` and enough of them are
/// generated to reach `bounds.y.max()` once compressed.
///
/// Each axis is stepped half-open from its minimum: an axis of width `w`
/// gets `ceil(w / spacing)` positions, and none when `w` is zero.
/// A `spacing` that is not strictly positive yields no centers.
///
/// Centers are returned row by row, bottom row first, each row left to right.
#[must_use]
pub fn hexagonal_lattice(bounds: Bounds, spacing: f64) -> Vec<Point> {
    if spacing.is_nan() || spacing <= 0.0 {
        return Vec::new();
    }

    let shift = spacing / 2.0;
    let y_stop = bounds.y.max() * (1.0 / SQUISH_FACTOR);

    let columns: Vec<f64> = half_open_steps(bounds.x.min(), bounds.x.max(), spacing).collect();

    half_open_steps(bounds.y.min(), y_stop, spacing)
        .enumerate()
        .flat_map(|(row, y)| {
            let y = y * SQUISH_FACTOR;
            let shift = if row % 2 == 1 { shift } else { 0.0 };
            columns.iter().map(move |&x| Point::new(x + shift, y))
        })
        .collect()
}

/// Yields `start + i * step` for `i` in `0..ceil((stop - start) / step)`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn half_open_steps(start: f64, stop: f64, step: f64) -> impl Iterator<Item = f64> {
    let count = ((stop - start) / step).ceil();
    let count = if count > 0.0 { count as usize } else { 0 };
    (0..count).map(move |i| start + i as f64 * step)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::support::geometry::Interval;

    #[test]
    fn squish_factor_is_half_root_three() {
        assert_relative_eq!(SQUISH_FACTOR, 3_f64.sqrt() / 2.0);
    }

    #[test]
    fn unit_square_layout() {
        let centers = hexagonal_lattice(Bounds::UNIT_SQUARE, 0.6);
        let coords: Vec<_> = centers.iter().map(Point::coords).collect();

        // Two columns and two rows; the second row is compressed and shifted.
        assert_eq!(coords.len(), 4);
        let expected = [
            (0.0, 0.0),
            (0.6, 0.0),
            (0.3, 0.6 * SQUISH_FACTOR),
            (0.9, 0.6 * SQUISH_FACTOR),
        ];
        for ((x, y), (ex, ey)) in coords.into_iter().zip(expected) {
            assert_relative_eq!(x, ex, epsilon = 1e-12);
            assert_relative_eq!(y, ey, epsilon = 1e-12);
        }
    }

    #[test]
    fn neighbors_are_one_spacing_apart() {
        let spacing = 0.2;
        let centers = hexagonal_lattice(Bounds::UNIT_SQUARE, spacing);

        for (i, a) in centers.iter().enumerate() {
            let nearest = centers
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .map(|(_, b)| a.distance(b))
                .fold(f64::INFINITY, f64::min);
            assert_relative_eq!(nearest, spacing, epsilon = 1e-9);
        }
    }

    #[test]
    fn rows_alternate_shift() {
        let spacing = 0.25;
        let centers = hexagonal_lattice(Bounds::UNIT_SQUARE, spacing);

        let first_row_x = centers[0].x();
        let second_row = centers
            .iter()
            .find(|p| p.y() > 0.0)
            .expect("lattice has a second row");
        assert_relative_eq!(second_row.x() - first_row_x, spacing / 2.0, epsilon = 1e-12);
        assert_relative_eq!(second_row.y(), spacing * SQUISH_FACTOR, epsilon = 1e-12);
    }

    #[test]
    fn rows_cover_the_vertical_extent() {
        let bounds = Bounds::UNIT_SQUARE.expanded(0.3);
        let centers = hexagonal_lattice(bounds, 0.6);

        let top = centers.iter().map(Point::y).fold(f64::NEG_INFINITY, f64::max);
        let row_spacing = 0.6 * SQUISH_FACTOR;
        assert!(top + row_spacing >= bounds.y.max());
        assert!(top < bounds.y.max());
    }

    #[test]
    fn degenerate_bounds_have_no_centers() {
        let flat = Bounds::new(Interval::new(0.5, 0.5).unwrap(), Interval::UNIT);
        assert!(hexagonal_lattice(flat, 0.1).is_empty());
    }

    #[test]
    fn non_positive_spacing_has_no_centers() {
        assert!(hexagonal_lattice(Bounds::UNIT_SQUARE, 0.0).is_empty());
        assert!(hexagonal_lattice(Bounds::UNIT_SQUARE, -0.2).is_empty());
        assert!(hexagonal_lattice(Bounds::UNIT_SQUARE, f64::NAN).is_empty());
    }

    #[test]
    fn repeated_calls_agree() {
        let bounds = Bounds::UNIT_SQUARE.expanded(0.15).translated(0.03, 0.07);
        let first = hexagonal_lattice(bounds, 0.3);
        let second = hexagonal_lattice(bounds, 0.3);

        assert!(!first.is_empty());
        assert_eq!(first, second);
    }
}
