use super::{Estimate, Operand};
use crate::PtfError;
use ndarray::{ArrayBase, ArrayViewD, DataMut, Dimension, IxDyn, Zip};

/// Computes the common shape of two operands
///
/// Follows the usual broadcasting rules: the shapes are aligned at their trailing
/// axes and each pair of lengths must be equal or contain a unit length.
///
/// ```
/// use ptfkit::numeric::broadcast_shape;
/// assert_eq!(broadcast_shape(&[4, 1], &[3]).unwrap(), vec![4, 3]);
/// assert!(broadcast_shape(&[2], &[3]).is_err());
/// ```
pub fn broadcast_shape(lhs: &[usize], rhs: &[usize]) -> Result<Vec<usize>, PtfError> {
    let ndim = usize::max(lhs.len(), rhs.len());
    let mut shape = vec![0; ndim];
    for k in 0..ndim {
        // count from the trailing axis; missing axes have unit length
        let a = if k < lhs.len() { lhs[lhs.len() - 1 - k] } else { 1 };
        let b = if k < rhs.len() { rhs[rhs.len() - 1 - k] } else { 1 };
        shape[ndim - 1 - k] = if a == b || b == 1 {
            a
        } else if a == 1 {
            b
        } else {
            return Err(PtfError::BroadcastError {
                lhs: lhs.to_vec(),
                rhs: rhs.to_vec(),
            });
        };
    }
    Ok(shape)
}

/// Computes the common shape of a list of operands
pub fn broadcast_shapes(shapes: &[&[usize]]) -> Result<Vec<usize>, PtfError> {
    let mut common = Vec::new();
    for shape in shapes {
        common = broadcast_shape(&common, shape)?;
    }
    Ok(common)
}

/// Checks that a result with the given shape can be written into an output buffer
///
/// The result may be broadcast to the buffer, but never the other way around.
pub fn check_output_shape(expected: &[usize], found: &[usize]) -> Result<(), PtfError> {
    match broadcast_shape(expected, found) {
        Ok(joined) if joined == found => Ok(()),
        _ => Err(PtfError::ShapeMismatch {
            expected: expected.to_vec(),
            found: found.to_vec(),
        }),
    }
}

/// Returns a view of the operand broadcast to shape
fn broadcast_to<'a>(view: &'a ArrayViewD<'_, f64>, shape: &[usize]) -> Result<ArrayViewD<'a, f64>, PtfError> {
    view.broadcast(IxDyn(shape)).ok_or_else(|| PtfError::BroadcastError {
        lhs: view.shape().to_vec(),
        rhs: shape.to_vec(),
    })
}

/// Evaluates `f(a, b)` elementwise and allocates the result
pub fn eval2<A, B, F>(a: &A, b: &B, f: F) -> Result<Estimate, PtfError>
where
    A: Operand + ?Sized,
    B: Operand + ?Sized,
    F: Fn(f64, f64) -> f64,
{
    let (a, b) = (a.operand(), b.operand());
    let shape = broadcast_shapes(&[a.shape(), b.shape()])?;
    let aa = broadcast_to(&a, &shape)?;
    let bb = broadcast_to(&b, &shape)?;
    let values = Zip::from(&aa).and(&bb).map_collect(|&x, &y| f(x, y));
    Ok(Estimate::from(values))
}

/// Evaluates `f(a, b, c)` elementwise and allocates the result
pub fn eval3<A, B, C, F>(a: &A, b: &B, c: &C, f: F) -> Result<Estimate, PtfError>
where
    A: Operand + ?Sized,
    B: Operand + ?Sized,
    C: Operand + ?Sized,
    F: Fn(f64, f64, f64) -> f64,
{
    let (a, b, c) = (a.operand(), b.operand(), c.operand());
    let shape = broadcast_shapes(&[a.shape(), b.shape(), c.shape()])?;
    let aa = broadcast_to(&a, &shape)?;
    let bb = broadcast_to(&b, &shape)?;
    let cc = broadcast_to(&c, &shape)?;
    let values = Zip::from(&aa).and(&bb).and(&cc).map_collect(|&x, &y, &z| f(x, y, z));
    Ok(Estimate::from(values))
}

/// Evaluates `f(a, b)` elementwise into an output buffer and returns the buffer
///
/// Nothing is written if the shapes are incompatible.
pub fn eval2_into<'o, A, B, S, D, F>(
    a: &A,
    b: &B,
    out: &'o mut ArrayBase<S, D>,
    f: F,
) -> Result<&'o mut ArrayBase<S, D>, PtfError>
where
    A: Operand + ?Sized,
    B: Operand + ?Sized,
    S: DataMut<Elem = f64>,
    D: Dimension,
    F: Fn(f64, f64) -> f64,
{
    let (a, b) = (a.operand(), b.operand());
    let shape = broadcast_shapes(&[a.shape(), b.shape()])?;
    check_output_shape(&shape, out.shape())?;
    {
        let mut target = out.view_mut().into_dyn();
        let aa = broadcast_to(&a, target.shape())?;
        let bb = broadcast_to(&b, target.shape())?;
        Zip::from(&mut target)
            .and(&aa)
            .and(&bb)
            .for_each(|r, &x, &y| *r = f(x, y));
    }
    Ok(out)
}

/// Evaluates `f(a, b, c)` elementwise into an output buffer and returns the buffer
///
/// Nothing is written if the shapes are incompatible.
pub fn eval3_into<'o, A, B, C, S, D, F>(
    a: &A,
    b: &B,
    c: &C,
    out: &'o mut ArrayBase<S, D>,
    f: F,
) -> Result<&'o mut ArrayBase<S, D>, PtfError>
where
    A: Operand + ?Sized,
    B: Operand + ?Sized,
    C: Operand + ?Sized,
    S: DataMut<Elem = f64>,
    D: Dimension,
    F: Fn(f64, f64, f64) -> f64,
{
    let (a, b, c) = (a.operand(), b.operand(), c.operand());
    let shape = broadcast_shapes(&[a.shape(), b.shape(), c.shape()])?;
    check_output_shape(&shape, out.shape())?;
    {
        let mut target = out.view_mut().into_dyn();
        let aa = broadcast_to(&a, target.shape())?;
        let bb = broadcast_to(&b, target.shape())?;
        let cc = broadcast_to(&c, target.shape())?;
        Zip::from(&mut target)
            .and(&aa)
            .and(&bb)
            .and(&cc)
            .for_each(|r, &x, &y, &z| *r = f(x, y, z));
    }
    Ok(out)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{broadcast_shape, broadcast_shapes, check_output_shape, eval2, eval2_into, eval3, eval3_into};
    use crate::numeric::Estimate;
    use crate::PtfError;
    use ndarray::{arr0, array, Array1, Array2};

    #[test]
    fn broadcast_shape_works() -> Result<(), PtfError> {
        assert_eq!(broadcast_shape(&[], &[])?, Vec::<usize>::new());
        assert_eq!(broadcast_shape(&[], &[3])?, vec![3]);
        assert_eq!(broadcast_shape(&[3], &[])?, vec![3]);
        assert_eq!(broadcast_shape(&[3], &[3])?, vec![3]);
        assert_eq!(broadcast_shape(&[1], &[3])?, vec![3]);
        assert_eq!(broadcast_shape(&[2, 1], &[3])?, vec![2, 3]);
        assert_eq!(broadcast_shape(&[5, 1, 4], &[2, 1])?, vec![5, 2, 4]);
        assert_eq!(broadcast_shape(&[0], &[1])?, vec![0]);
        assert_eq!(broadcast_shape(&[2, 0], &[1, 1])?, vec![2, 0]);
        Ok(())
    }

    #[test]
    fn broadcast_shape_captures_errors() {
        assert_eq!(
            broadcast_shape(&[2], &[3]).err(),
            Some(PtfError::BroadcastError {
                lhs: vec![2],
                rhs: vec![3]
            })
        );
        assert_eq!(
            broadcast_shape(&[4, 2], &[4, 3]).err(),
            Some(PtfError::BroadcastError {
                lhs: vec![4, 2],
                rhs: vec![4, 3]
            })
        );
        assert_eq!(
            broadcast_shape(&[0], &[2]).err(),
            Some(PtfError::BroadcastError {
                lhs: vec![0],
                rhs: vec![2]
            })
        );
    }

    #[test]
    fn broadcast_shapes_works() -> Result<(), PtfError> {
        assert_eq!(broadcast_shapes(&[])?, Vec::<usize>::new());
        assert_eq!(broadcast_shapes(&[&[], &[], &[]])?, Vec::<usize>::new());
        assert_eq!(broadcast_shapes(&[&[3], &[], &[1]])?, vec![3]);
        assert_eq!(broadcast_shapes(&[&[2, 1], &[], &[3]])?, vec![2, 3]);
        assert!(broadcast_shapes(&[&[2, 1], &[3], &[4]]).is_err());
        Ok(())
    }

    #[test]
    fn check_output_shape_works() {
        assert_eq!(check_output_shape(&[3], &[3]), Ok(()));
        assert_eq!(check_output_shape(&[], &[3]), Ok(()));
        assert_eq!(check_output_shape(&[1], &[2, 3]), Ok(()));
        assert_eq!(check_output_shape(&[], &[]), Ok(()));
        assert_eq!(
            check_output_shape(&[3], &[2]),
            Err(PtfError::ShapeMismatch {
                expected: vec![3],
                found: vec![2]
            })
        );
        // the buffer is never broadcast
        assert_eq!(
            check_output_shape(&[3], &[1]),
            Err(PtfError::ShapeMismatch {
                expected: vec![3],
                found: vec![1]
            })
        );
        assert_eq!(
            check_output_shape(&[2, 3], &[3]),
            Err(PtfError::ShapeMismatch {
                expected: vec![2, 3],
                found: vec![3]
            })
        );
    }

    #[test]
    fn eval_returns_scalars_for_scalars() -> Result<(), PtfError> {
        assert_eq!(eval2(&2.0, &3.0, |a, b| a * b)?, Estimate::Scalar(6.0));
        assert_eq!(eval3(&2.0, &3.0, &4.0, |a, b, c| a * b + c)?, Estimate::Scalar(10.0));
        assert_eq!(eval2(&arr0(2.0), &3.0, |a, b| a - b)?, Estimate::Scalar(-1.0));
        Ok(())
    }

    #[test]
    fn eval_broadcasts_arrays() -> Result<(), PtfError> {
        let a = array![1.0, 2.0, 3.0];
        let res = eval2(&a, &10.0, |x, y| x + y)?;
        assert_eq!(res, Estimate::Array(array![11.0, 12.0, 13.0].into_dyn()));

        let column = array![[1.0], [2.0]];
        let row = [10.0, 20.0, 30.0];
        let res = eval3(&column, &row, &0.5, |x, y, z| x * y * z)?;
        assert_eq!(
            res,
            Estimate::Array(array![[5.0, 10.0, 15.0], [10.0, 20.0, 30.0]].into_dyn())
        );

        // transposed (non-standard layout) views
        let m = array![[1.0, 2.0], [3.0, 4.0]];
        let res = eval2(&m.t(), &m, |x, y| x - y)?;
        assert_eq!(res, Estimate::Array(array![[0.0, 1.0], [-1.0, 0.0]].into_dyn()));
        Ok(())
    }

    #[test]
    fn eval_handles_empty_arrays() -> Result<(), PtfError> {
        let empty = Array1::<f64>::zeros(0);
        let res = eval3(&empty, &1.0, &[2.0], |x, y, z| x + y + z)?;
        assert_eq!(res.shape(), &[0]);
        Ok(())
    }

    #[test]
    fn eval_captures_broadcast_errors() {
        let a = [1.0, 2.0];
        let b = [1.0, 2.0, 3.0];
        assert_eq!(
            eval2(&a, &b, |x, y| x + y).err(),
            Some(PtfError::BroadcastError {
                lhs: vec![2],
                rhs: vec![3]
            })
        );
        assert!(eval3(&1.0, &a, &b, |x, y, z| x + y + z).is_err());
    }

    #[test]
    fn eval_into_writes_in_place() -> Result<(), PtfError> {
        let a = array![1.0, 2.0, 3.0];
        let mut out = Array1::<f64>::zeros(3);
        let ptr = out.as_ptr();
        let res = eval2_into(&a, &1.0, &mut out, |x, y| x + y)?;
        assert_eq!(res.as_ptr(), ptr);
        assert_eq!(out, array![2.0, 3.0, 4.0]);

        // scalar inputs broadcast to the whole buffer
        let mut out = Array2::<f64>::zeros((2, 2));
        eval3_into(&1.0, &2.0, &3.0, &mut out, |x, y, z| x + y + z)?;
        assert_eq!(out, array![[6.0, 6.0], [6.0, 6.0]]);

        // mutable views
        let mut data = Array2::<f64>::zeros((2, 3));
        let mut column = data.column_mut(1);
        eval2_into(&[1.0, 2.0], &3.0, &mut column, |x, y| x * y)?;
        assert_eq!(data, array![[0.0, 3.0, 0.0], [0.0, 6.0, 0.0]]);
        Ok(())
    }

    #[test]
    fn eval_into_captures_shape_mismatch() {
        let a = array![1.0, 2.0, 3.0];
        let mut out = Array1::<f64>::from_elem(2, -1.0);
        assert_eq!(
            eval2_into(&a, &1.0, &mut out, |x, y| x + y).err(),
            Some(PtfError::ShapeMismatch {
                expected: vec![3],
                found: vec![2]
            })
        );
        assert_eq!(out, array![-1.0, -1.0]);

        let mut out = Array1::<f64>::zeros(3);
        assert_eq!(
            eval3_into(&[1.0, 2.0], &a, &1.0, &mut out, |x, y, z| x + y + z).err(),
            Some(PtfError::BroadcastError {
                lhs: vec![2],
                rhs: vec![3]
            })
        );
    }
}
