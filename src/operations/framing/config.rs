use crate::error::{ConfigError, Result};

/// Parameters controlling a framing run.
///
/// All lengths are in the same unit system as the wall and opening
/// descriptors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FramingConfig {
    /// On-center spacing between field studs.
    pub stud_spacing: f64,
    /// Nominal member thickness; each face sits half of it from the baseline.
    pub member_offset: f64,
    /// Clearance added to an opening's footprint radius when testing studs.
    pub opening_proximity_tolerance: f64,
    /// Stud pieces no longer than this are dropped.
    pub min_segment_length: f64,
    /// A field stud this close to the wall end is skipped.
    pub end_epsilon: f64,
}

impl Default for FramingConfig {
    fn default() -> Self {
        Self {
            stud_spacing: 2.0,
            member_offset: 0.2,
            opening_proximity_tolerance: 0.5,
            min_segment_length: 0.1,
            end_epsilon: 0.01,
        }
    }
}

impl FramingConfig {
    /// Sets the field stud spacing.
    #[must_use]
    pub fn with_stud_spacing(mut self, spacing: f64) -> Self {
        self.stud_spacing = spacing;
        self
    }

    /// Sets the nominal member thickness.
    #[must_use]
    pub fn with_member_offset(mut self, offset: f64) -> Self {
        self.member_offset = offset;
        self
    }

    /// Sets the opening proximity tolerance.
    #[must_use]
    pub fn with_opening_proximity_tolerance(mut self, tolerance: f64) -> Self {
        self.opening_proximity_tolerance = tolerance;
        self
    }

    /// Sets the minimum stud segment length.
    #[must_use]
    pub fn with_min_segment_length(mut self, length: f64) -> Self {
        self.min_segment_length = length;
        self
    }

    /// Sets the wall-end epsilon.
    #[must_use]
    pub fn with_end_epsilon(mut self, epsilon: f64) -> Self {
        self.end_epsilon = epsilon;
        self
    }

    /// Returns half the member thickness, the distance of each face from
    /// its baseline.
    #[must_use]
    pub fn half_offset(&self) -> f64 {
        self.member_offset * 0.5
    }

    /// Checks that every parameter is usable.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidParameter` if spacing or member offset
    /// is not positive, or if a tolerance is negative or non-finite.
    pub fn validate(&self) -> Result<()> {
        positive("stud_spacing", self.stud_spacing)?;
        positive("member_offset", self.member_offset)?;
        non_negative("opening_proximity_tolerance", self.opening_proximity_tolerance)?;
        non_negative("min_segment_length", self.min_segment_length)?;
        non_negative("end_epsilon", self.end_epsilon)?;
        Ok(())
    }
}

fn positive(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        return Ok(());
    }
    Err(ConfigError::InvalidParameter {
        name,
        value,
        reason: "must be positive and finite",
    }
    .into())
}

fn non_negative(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        return Ok(());
    }
    Err(ConfigError::InvalidParameter {
        name,
        value,
        reason: "must be non-negative and finite",
    }
    .into())
}
