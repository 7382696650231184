use ndarray::{arr0, ArrayD};

/// Holds the result of an allocating pedotransfer evaluation
///
/// `Scalar` is returned when every input is a scalar (zero-dimensional);
/// otherwise the values are broadcast to the common shape of the inputs.
#[derive(Clone, Debug, PartialEq)]
pub enum Estimate {
    /// Single value
    Scalar(f64),

    /// Values with the broadcast shape of the inputs
    Array(ArrayD<f64>),
}

impl Estimate {
    /// Returns the value if this is a scalar estimate
    pub fn scalar(&self) -> Option<f64> {
        match self {
            Estimate::Scalar(value) => Some(*value),
            Estimate::Array(..) => None,
        }
    }

    /// Returns the values if this is an array estimate
    pub fn array(&self) -> Option<&ArrayD<f64>> {
        match self {
            Estimate::Scalar(..) => None,
            Estimate::Array(values) => Some(values),
        }
    }

    /// Returns the shape (empty for scalars)
    pub fn shape(&self) -> &[usize] {
        match self {
            Estimate::Scalar(..) => &[],
            Estimate::Array(values) => values.shape(),
        }
    }

    /// Converts into an array; a scalar becomes a zero-dimensional array
    pub fn into_array(self) -> ArrayD<f64> {
        match self {
            Estimate::Scalar(value) => arr0(value).into_dyn(),
            Estimate::Array(values) => values,
        }
    }
}

impl From<ArrayD<f64>> for Estimate {
    /// Unwraps zero-dimensional arrays into scalars
    fn from(values: ArrayD<f64>) -> Self {
        if values.ndim() == 0 {
            if let Some(value) = values.first() {
                return Estimate::Scalar(*value);
            }
        }
        Estimate::Array(values)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
