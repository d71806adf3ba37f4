use tracing::{debug, trace};

use crate::operations::KernelParams;
use crate::plan::{Layer, Opening, OpeningId, WallId};

/// Whether a span of the wall is full-height or cut by an opening.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    Solid,
    Hole(OpeningId),
}

/// A span `[t0, t1]` of a wall's normalized length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub t0: f64,
    pub t1: f64,
    pub kind: SegmentKind,
}

/// Openings of `wall` that fit it, sorted by position along the wall.
///
/// An opening fits when `width + opening_margin <= wall_length`; the rest
/// are dropped whole, not clipped. Ties keep arena order.
#[must_use]
pub fn applicable_openings<'a>(
    layer: &'a Layer,
    wall: WallId,
    wall_length: f64,
    params: &KernelParams,
) -> Vec<(OpeningId, &'a Opening)> {
    let mut openings: Vec<(OpeningId, &Opening)> = layer
        .wall_openings(wall)
        .filter(|(id, o)| {
            let fits = o.width + params.opening_margin <= wall_length;
            if !fits {
                debug!(opening = ?id, width = o.width, wall_length, "opening too wide for wall");
            }
            fits
        })
        .collect();
    openings.sort_by(|a, b| a.1.clamped_dist().total_cmp(&b.1.clamped_dist()));
    openings
}

/// Partitions `[0, 1]` into solid and hole segments.
///
/// `openings` must be sorted by `dist`. Holes are clamped to the wall and
/// never start before the previous segment ends; an opening left with an
/// empty span (fully covered by its predecessor) is skipped. The result is
/// contiguous, non-overlapping and covers exactly `[0, 1]`.
#[must_use]
pub fn segment_wall(wall_length: f64, openings: &[(OpeningId, &Opening)]) -> Vec<Segment> {
    let mut segments = Vec::with_capacity(openings.len() * 2 + 1);
    let mut t = 0.0;

    for &(id, opening) in openings {
        let half_w = (opening.width / 2.0) / wall_length;
        let dist = opening.clamped_dist();
        let t_start = (dist - half_w).max(t);
        let t_end = (dist + half_w).min(1.0);
        if t_end <= t_start {
            trace!(opening = ?id, "opening covered by its predecessor");
            continue;
        }

        if t_start > t {
            segments.push(Segment {
                t0: t,
                t1: t_start,
                kind: SegmentKind::Solid,
            });
        }
        segments.push(Segment {
            t0: t_start,
            t1: t_end,
            kind: SegmentKind::Hole(id),
        });
        t = t_end;
    }

    if t < 1.0 {
        segments.push(Segment {
            t0: t,
            t1: 1.0,
            kind: SegmentKind::Solid,
        });
    }

    segments
}
