use crate::foundation::error::{SlideError, SlideResult};

use super::mapper::TrackMapper;

/// Most cursors a single sweep will visit.
pub const MAX_SWEEP_SAMPLES: f64 = 1_000_000.0;

/// A cursor whose value did not map back onto it.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct RoundTripMiss {
    pub cursor: f64,
    pub value: f64,
    pub returned: f64,
}

/// Result of sweeping every integer cursor of one track.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct SweepReport {
    pub track_size: f64,
    pub max_cursor: f64,
    pub samples: usize,
    pub round_trip_misses: Vec<RoundTripMiss>,
    /// Cursors whose value is lower than the previous cursor's.
    pub value_regressions: Vec<f64>,
    /// Cursors whose round-tripped cursor is lower than the previous one's.
    pub cursor_regressions: Vec<f64>,
}

impl SweepReport {
    pub fn is_clean(&self) -> bool {
        self.round_trip_misses.is_empty()
            && self.value_regressions.is_empty()
            && self.cursor_regressions.is_empty()
    }
}

/// Check the round-trip and monotonicity contracts at every integer cursor of a track.
///
/// Fails for a non-finite `track_size` or a track with more than [`MAX_SWEEP_SAMPLES`] cursors.
#[tracing::instrument(skip(mapper))]
pub fn audit<M: TrackMapper + ?Sized>(mapper: &M, track_size: f64) -> SlideResult<SweepReport> {
    if !track_size.is_finite() {
        return Err(SlideError::validation(format!(
            "track_size must be finite (got {track_size})"
        )));
    }
    let max_cursor = mapper.max_cursor(track_size);
    if max_cursor.floor() + 1.0 > MAX_SWEEP_SAMPLES {
        return Err(SlideError::validation(format!(
            "track of {max_cursor} cursors exceeds the sweep limit of {MAX_SWEEP_SAMPLES}"
        )));
    }
    let mut report = SweepReport {
        track_size,
        max_cursor,
        ..SweepReport::default()
    };

    let last = max_cursor.floor() as u64;
    let mut prev: Option<(f64, f64)> = None;
    for c in 0..=last {
        let cursor = c as f64;
        let value = mapper.track_value(cursor, track_size);
        let returned = mapper.track_cursor(value, track_size).round();

        if returned != cursor {
            report.round_trip_misses.push(RoundTripMiss {
                cursor,
                value,
                returned,
            });
        }
        if let Some((prev_value, prev_returned)) = prev {
            if value < prev_value {
                report.value_regressions.push(cursor);
            }
            if returned < prev_returned {
                report.cursor_regressions.push(cursor);
            }
        }
        prev = Some((value, returned));
        report.samples += 1;
    }

    tracing::debug!(
        samples = report.samples,
        misses = report.round_trip_misses.len(),
        value_regressions = report.value_regressions.len(),
        cursor_regressions = report.cursor_regressions.len(),
        "track sweep finished"
    );
    Ok(report)
}

#[cfg(test)]
#[path = "../../tests/unit/track/audit.rs"]
mod tests;
