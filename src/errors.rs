use std::convert::Infallible;
use thiserror::Error;

/// Defines the errors returned by the pedotransfer functions
///
/// Element types are fixed to `f64` by the function signatures, thus a buffer of
/// another numeric type is rejected by the compiler rather than at runtime.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum PtfError {
    /// An argument holds a value outside of its accepted set (e.g., an unknown method name)
    #[error("invalid argument {given:?}: expected one of {accepted:?}")]
    InvalidArgument {
        /// The rejected value
        given: String,

        /// The accepted values
        accepted: &'static [&'static str],
    },

    /// The input shapes cannot be broadcast to a common shape
    #[error("operands with shapes {lhs:?} and {rhs:?} cannot be broadcast together")]
    BroadcastError {
        /// Common shape of the preceding operands
        lhs: Vec<usize>,

        /// Shape of the operand that does not fit
        rhs: Vec<usize>,
    },

    /// The output buffer cannot hold the broadcast result
    #[error("output buffer with shape {found:?} cannot hold a result with shape {expected:?}")]
    ShapeMismatch {
        /// Broadcast shape of the inputs
        expected: Vec<usize>,

        /// Shape of the output buffer
        found: Vec<usize>,
    },
}

impl From<Infallible> for PtfError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
