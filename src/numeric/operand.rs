use ndarray::{aview0, aview1, ArrayBase, ArrayViewD, Data, Dimension};

/// Defines an input of the elementwise kernels
///
/// A scalar is handled as a zero-dimensional array, thus a single code path
/// serves the scalar and array call forms.
///
/// # Examples
///
/// ```
/// use ndarray::array;
/// use ptfkit::numeric::Operand;
///
/// assert_eq!(30.0_f64.operand().shape(), &[] as &[usize]);
/// assert_eq!([10.0_f64, 20.0].operand().shape(), &[2]);
/// assert_eq!(array![[1.0_f64], [2.0]].operand().shape(), &[2, 1]);
/// ```
pub trait Operand {
    /// Borrows the values as a dynamic-dimensional view
    fn operand(&self) -> ArrayViewD<'_, f64>;
}

impl Operand for f64 {
    fn operand(&self) -> ArrayViewD<'_, f64> {
        aview0(self).into_dyn()
    }
}

impl Operand for [f64] {
    fn operand(&self) -> ArrayViewD<'_, f64> {
        aview1(self).into_dyn()
    }
}

impl<const N: usize> Operand for [f64; N] {
    fn operand(&self) -> ArrayViewD<'_, f64> {
        aview1(&self[..]).into_dyn()
    }
}

impl Operand for Vec<f64> {
    fn operand(&self) -> ArrayViewD<'_, f64> {
        aview1(self.as_slice()).into_dyn()
    }
}

impl<S, D> Operand for ArrayBase<S, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    fn operand(&self) -> ArrayViewD<'_, f64> {
        self.view().into_dyn()
    }
}

impl<T> Operand for &T
where
    T: Operand + ?Sized,
{
    fn operand(&self) -> ArrayViewD<'_, f64> {
        (**self).operand()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
