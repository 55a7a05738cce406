use crate::support::geometry::{Coin, Point, PointSet, Radius};

pub(super) fn radius(value: f64) -> Radius {
    Radius::new(value).expect("test radius should be positive")
}

pub(super) fn point_set(coords: &[(f64, f64)]) -> PointSet {
    coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

/// Five points spread over the unit square: four near the corners and one in the middle.
pub(super) fn spread_points() -> PointSet {
    point_set(&[(0.1, 0.1), (0.9, 0.15), (0.5, 0.5), (0.15, 0.85), (0.85, 0.9)])
}

/// Checks coverage pair by pair, with the distance written out in full.
pub(super) fn brute_force_covered(coins: &[Coin], points: &PointSet) -> bool {
    let mut covered = 0;
    for point in points {
        let mut hit = false;
        for coin in coins {
            let dx = coin.center().x() - point.x();
            let dy = coin.center().y() - point.y();
            if (dx * dx + dy * dy).sqrt() <= coin.radius().get() {
                hit = true;
            }
        }
        if hit {
            covered += 1;
        }
    }
    covered == points.len()
}
