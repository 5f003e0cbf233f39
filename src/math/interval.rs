/// A closed range `[min, max]` along one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    /// Lower bound.
    pub min: f64,
    /// Upper bound, never below `min`.
    pub max: f64,
}

impl Interval {
    /// Creates an interval from two bounds given in either order.
    #[must_use]
    pub fn new(a: f64, b: f64) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Returns the length of the interval.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.max - self.min
    }

    /// Returns whether `value` lies inside the closed interval.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Merges overlapping intervals into a minimal ascending cover.
///
/// Intervals that merely touch (`next.min == last.max`) are merged as well.
#[must_use]
pub fn merge(intervals: &[Interval]) -> Vec<Interval> {
    let mut sorted = intervals.to_vec();
    sorted.sort_by(|a, b| a.min.total_cmp(&b.min));

    let mut merged: Vec<Interval> = Vec::with_capacity(sorted.len());
    for current in sorted {
        match merged.last_mut() {
            Some(last) if current.min <= last.max => {
                last.max = last.max.max(current.max);
            }
            _ => merged.push(current),
        }
    }
    merged
}

/// Cuts the line `[line_start, line_end]` into the pieces lying outside
/// `obstructions`.
///
/// `obstructions` must be ascending and non-overlapping (see [`merge`]).
/// Pieces no longer than `min_segment_length` are dropped. With no
/// obstructions the whole line is returned unchanged.
#[must_use]
pub fn cut(
    line_start: f64,
    line_end: f64,
    obstructions: &[Interval],
    min_segment_length: f64,
) -> Vec<(f64, f64)> {
    if obstructions.is_empty() {
        return vec![(line_start, line_end)];
    }

    let mut segments = Vec::with_capacity(obstructions.len() + 1);
    let mut cursor = line_start;
    for obstruction in obstructions {
        if obstruction.min >= line_end {
            break;
        }
        if cursor < obstruction.min - min_segment_length {
            segments.push((cursor, obstruction.min));
        }
        cursor = cursor.max(obstruction.max);
    }
    if cursor < line_end - min_segment_length {
        segments.push((cursor, line_end));
    }
    segments
}
