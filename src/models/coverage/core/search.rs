use tracing::trace;

use crate::support::geometry::{Point, Radius};

use super::{Packing, SearchConfig, StepSize, TrialResult, hexagonal_packing};

/// Candidate offsets along one axis: `0, step, 2·step, …` below `coin_radius`.
///
/// One coin radius spans a full period of the lattice translations the
/// search considers. When `step_size >= coin_radius` there are no candidates.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn offsets(coin_radius: Radius, step_size: StepSize) -> impl Iterator<Item = f64> + Clone {
    let (radius, step) = (coin_radius.get(), step_size.get());
    let count = if step >= radius {
        0
    } else {
        (radius / step).ceil() as usize
    };
    (0..count).map(move |i| i as f64 * step)
}

/// Searches lattice offsets for a hexagonal packing that covers every point.
///
/// Offsets `(x, y)` are taken from [`offsets`] on both axes and visited with
/// `x` in the outer position: `(0, 0), (0, step), …, (step, 0), …`.
/// Each visit increments the loop count; the first covering packing ends
/// the search with `valid = true`.
///
/// When `config.max_loops` is set, the visit whose count reaches the cap is
/// not tried and ends the search, so the reported loop count is the cap.
///
/// Without a covering packing the result holds the last packing tried, which
/// is empty when no offset was tried.
pub fn find_hexagonal_packing<'a, P>(
    points: P,
    coin_radius: Radius,
    config: &SearchConfig,
) -> TrialResult
where
    P: IntoIterator<Item = &'a Point> + Copy,
{
    let axis = offsets(coin_radius, config.step_size);
    let candidates = axis
        .clone()
        .flat_map(move |x| axis.clone().map(move |y| (x, y)));

    let mut packing = Packing::default();
    let mut loops = 0;

    for (x_offset, y_offset) in candidates {
        loops += 1;
        if config
            .max_loops
            .is_some_and(|max_loops| loops >= max_loops.into_inner())
        {
            trace!(loops, "offset search hit its loop cap");
            break;
        }

        packing = hexagonal_packing(
            config.bounds,
            config.overflow_bounds,
            coin_radius,
            x_offset,
            y_offset,
        );
        if packing.covers_all(points) {
            trace!(loops, x_offset, y_offset, "found covering packing");
            return TrialResult {
                packing,
                valid: true,
                loops,
            };
        }
    }

    trace!(loops, "offset search exhausted");
    TrialResult {
        packing,
        valid: false,
        loops,
    }
}
