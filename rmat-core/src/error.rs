//! Error types for the R-MAT generator.
//!
//! Defines the public error enums, their stable machine-readable codes and a
//! convenient result alias.

use std::fmt;

use thiserror::Error;

use crate::VertexId;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? $( ( $($tuple:tt)* ) )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? $( ( $($tuple)* ) )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Internal consistency failure detected while synthesizing edges.
///
/// These never occur for a correctly implemented generator; they are surfaced
/// when [`crate::InvariantChecks::Enabled`] is in effect.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum InvariantViolation {
    /// The working quadrant probabilities drifted away from summing to one.
    #[error("quadrant probabilities sum to {sum} at recursion level {level}")]
    ProbabilitySum {
        /// Zero-based recursion level at which the drift was observed.
        level: u32,
        /// Observed `a + b + c + d`.
        sum: f64,
    },
    /// A synthesized vertex identifier escaped the configured id space.
    #[error("vertex {vertex} exceeds the maximum vertex id {max}")]
    VertexOutOfRange {
        /// Offending vertex identifier.
        vertex: VertexId,
        /// Largest identifier permitted by the vertex scale.
        max: VertexId,
    },
}

/// Error type produced when configuring or driving an [`crate::RmatGenerator`].
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum RmatError {
    /// The generator parameters were rejected at construction time.
    #[error("invalid R-MAT configuration: {reason}")]
    InvalidConfiguration {
        /// Human-readable description of the rejected parameter.
        reason: String,
    },
    /// [`crate::EdgeCursor::advance`] was called after the sequence ended.
    #[error("edge sequence is exhausted")]
    Exhausted,
    /// An internal invariant check failed.
    #[error(transparent)]
    Invariant(#[from] InvariantViolation),
}

define_error_codes! {
    /// Stable codes describing [`RmatError`] variants.
    enum RmatErrorCode for RmatError {
        /// The generator parameters were rejected at construction time.
        InvalidConfiguration => InvalidConfiguration { .. } => "RMAT_INVALID_CONFIGURATION",
        /// The edge sequence had no more values.
        Exhausted => Exhausted => "RMAT_EXHAUSTED",
        /// An internal invariant check failed.
        InvariantViolation => Invariant(..) => "RMAT_INVARIANT_VIOLATION",
    }
}

impl RmatError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            reason: reason.into(),
        }
    }
}

/// Convenient result alias for generator operations.
pub type Result<T, E = RmatError> = std::result::Result<T, E>;
