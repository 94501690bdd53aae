//! Configuration error types for heightfield generation.

/// Invalid generation parameters, region tables, or height transforms.
///
/// Almost every variant is a precondition violation, reported before any
/// computation starts. [`ConfigurationError::NonFiniteSample`] is the
/// exception: a caller-supplied base noise produced an unusable value.
/// Retrying with the same input fails the same way.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigurationError {
    /// Width or height is zero.
    #[error("grid dimensions must be positive, got {width}x{height}")]
    ZeroDimension {
        /// Requested grid width.
        width: u32,
        /// Requested grid height.
        height: u32,
    },

    /// The fractal sum needs at least one octave.
    #[error("octave count must be at least 1")]
    ZeroOctaves,

    /// Scale is zero, which would divide every sample coordinate by zero.
    #[error("scale must be non-zero and finite, got {0}")]
    InvalidScale(f64),

    /// A real-valued parameter is NaN or infinite.
    #[error("parameter `{name}` must be finite, got {value}")]
    NonFinite {
        /// Parameter name.
        name: &'static str,
        /// Offending value.
        value: f64,
    },

    /// Amplitude or frequency leaves the finite range before the last octave.
    #[error("`{name}` overflows by octave {octave} of {octaves}")]
    OctaveOverflow {
        /// Parameter driving the overflow.
        name: &'static str,
        /// Zero-based octave at which the value stops being finite.
        octave: u32,
        /// Requested octave count.
        octaves: u32,
    },

    /// The offset table does not hold one pair per requested octave.
    #[error("expected {expected} octave offsets, got {actual}")]
    OffsetCountMismatch {
        /// `octaves` from the parameters.
        expected: u32,
        /// Number of offset pairs supplied.
        actual: usize,
    },

    /// A raw fractal sample is NaN or infinite.
    #[error("raw sample {value} at cell ({x}, {y}) is not finite")]
    NonFiniteSample {
        /// Cell column.
        x: u32,
        /// Cell row.
        y: u32,
        /// Offending value.
        value: f64,
    },

    /// The region table has no entries.
    #[error("region table is empty")]
    EmptyRegionTable,

    /// Region thresholds are not in ascending order.
    #[error("region `{label}` threshold {threshold} is below the previous threshold {previous}")]
    UnsortedRegionTable {
        /// Label of the out-of-order region.
        label: String,
        /// Its threshold.
        threshold: f64,
        /// Threshold of the region before it.
        previous: f64,
    },

    /// The last region threshold does not reach 1.0, leaving heights unmatched.
    #[error("region table covers heights only up to {0}, expected at least 1.0")]
    IncompleteCoverage(f64),

    /// A height transform has an unusable parameter.
    #[error("invalid height transform: {0}")]
    InvalidTransform(String),

    /// A grid cell fell outside every region band while painting.
    #[error("height {height} at cell ({x}, {y}) matches no region")]
    UnclassifiedCell {
        /// Cell column.
        x: u32,
        /// Cell row.
        y: u32,
        /// Height value of the cell.
        height: f64,
    },
}
