//! Quadrant probabilities and quadrant selection.

use crate::error::RmatError;

/// Absolute tolerance accepted when validating caller-supplied probabilities.
pub const CONFIG_SUM_TOLERANCE: f64 = 1.0e-9;

/// The four R-MAT quadrant probabilities `(a, b, c, d)`.
///
/// `a` selects the top-left quadrant (no bit set), `b` the top-right (the
/// target bit), `c` the bottom-left (the source bit) and `d` the bottom-right
/// (both bits).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuadrantProbabilities {
    /// Top-left quadrant probability.
    pub a: f64,
    /// Top-right quadrant probability.
    pub b: f64,
    /// Bottom-left quadrant probability.
    pub c: f64,
    /// Bottom-right quadrant probability.
    pub d: f64,
}

impl QuadrantProbabilities {
    /// The Graph500 reference parameters `(0.57, 0.19, 0.19, 0.05)`.
    pub const GRAPH500: Self = Self::new(0.57, 0.19, 0.19, 0.05);

    /// Uniform parameters; every cell of the adjacency matrix is equally
    /// likely (an Erdős–Rényi style graph).
    pub const UNIFORM: Self = Self::new(0.25, 0.25, 0.25, 0.25);

    /// Creates a quadruple without validating it.
    ///
    /// Validation happens when the generator is built.
    #[must_use]
    pub const fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { a, b, c, d }
    }

    /// Returns `a + b + c + d`, accumulated left to right.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "probability sums require floating-point addition"
    )]
    pub fn sum(&self) -> f64 {
        self.a + self.b + self.c + self.d
    }

    /// Rejects non-finite or negative entries and sums away from one.
    ///
    /// # Errors
    /// Returns [`RmatError::InvalidConfiguration`] naming the first offending
    /// quadrant, or the sum when the entries do not add up to one within
    /// [`CONFIG_SUM_TOLERANCE`].
    ///
    /// # Examples
    /// ```
    /// use rmat_core::QuadrantProbabilities;
    ///
    /// assert!(QuadrantProbabilities::GRAPH500.validate().is_ok());
    /// assert!(QuadrantProbabilities::new(0.5, 0.5, 0.5, -0.5).validate().is_err());
    /// ```
    #[expect(
        clippy::float_arithmetic,
        reason = "sum tolerance comparison requires floating-point arithmetic"
    )]
    pub fn validate(&self) -> Result<(), RmatError> {
        for (name, value) in [("a", self.a), ("b", self.b), ("c", self.c), ("d", self.d)] {
            if !value.is_finite() || value < 0.0 {
                return Err(RmatError::invalid(format!(
                    "probability `{name}` must be finite and non-negative (got {value})"
                )));
            }
        }
        let sum = self.sum();
        if (sum - 1.0).abs() > CONFIG_SUM_TOLERANCE {
            return Err(RmatError::invalid(format!(
                "probabilities must sum to 1 (got {sum})"
            )));
        }
        Ok(())
    }

    /// Picks the quadrant for a uniform draw `p` in `[0, 1)`.
    ///
    /// Thresholds are cumulative and half-open, tested in the order `a`, `b`,
    /// `c`; anything left over falls into `d`.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "cumulative thresholds require floating-point addition"
    )]
    pub fn select(&self, p: f64) -> Quadrant {
        if p < self.a {
            Quadrant::TopLeft
        } else if p < self.a + self.b {
            Quadrant::TopRight
        } else if p < self.a + self.b + self.c {
            Quadrant::BottomLeft
        } else {
            Quadrant::BottomRight
        }
    }
}

impl Default for QuadrantProbabilities {
    fn default() -> Self {
        Self::GRAPH500
    }
}

/// One of the four sub-matrices chosen at a recursion level.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Quadrant {
    /// Quadrant `00`: neither endpoint gains the current bit.
    TopLeft,
    /// Quadrant `01`: the target gains the current bit.
    TopRight,
    /// Quadrant `10`: the source gains the current bit.
    BottomLeft,
    /// Quadrant `11`: both endpoints gain the current bit.
    BottomRight,
}

impl Quadrant {
    /// Returns `(source_bit, target_bit)` for this quadrant.
    #[must_use]
    pub const fn bits(self) -> (bool, bool) {
        match self {
            Self::TopLeft => (false, false),
            Self::TopRight => (false, true),
            Self::BottomLeft => (true, false),
            Self::BottomRight => (true, true),
        }
    }
}
