/* ************************************************************************ **
** This file is part of fixla, and is licensed under EITHER the MIT license **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use std::ops::{Add, Sub, Mul, Div, Neg};
use std::fmt;

use crate::types::*;

// NOTE: There are no assign ops (`+=` and friends).  Values in this crate are
//       never modified after construction; rebinding is the way to go.

// ---------------------------------------------------------------------------
// vector-vector ops

gen_each!{
    @{Vn}
    @{by_ref}
    @{by_ref_b}
    impl_v_add_sub!(
        {$Vn:ident}
        [ ($($lt_a:tt)*) ($($ref_a:tt)*) ]
        [ ($($lt_b:tt)*) ($($ref_b:tt)*) ]
    ) => {
        // vector + vector
        impl<$($lt_a)* $($lt_b)*> Add<$($ref_b)* $Vn> for $($ref_a)* $Vn {
            type Output = $Vn;

            #[inline]
            fn add(self, other: $($ref_b)* $Vn) -> Self::Output
            { $Vn::from_fn(|k| self[k] + other[k]) }
        }

        // vector - vector
        impl<$($lt_a)* $($lt_b)*> Sub<$($ref_b)* $Vn> for $($ref_a)* $Vn {
            type Output = $Vn;

            #[inline]
            fn sub(self, other: $($ref_b)* $Vn) -> Self::Output
            { $Vn::from_fn(|k| self[k] - other[k]) }
        }
    }
}

// ---------------------------------------------------------------------------
// vector unary ops

gen_each!{
    @{Vn}
    @{by_ref}
    impl_v_unops!(
        {$Vn:ident}
        [ ($($lt_a:tt)*) ($($ref_a:tt)*) ]
    ) => {
        // -vector
        impl<$($lt_a)*> Neg for $($ref_a)* $Vn {
            type Output = $Vn;

            #[inline]
            fn neg(self) -> Self::Output
            { $Vn::from_fn(|k| -self[k]) }
        }
    }
}

// ---------------------------------------------------------------------------
// vector-scalar ops

gen_each!{
    @{Vn}
    @{by_ref}
    impl_v_scalar_ops!(
        {$Vn:ident}
        [ ($($lt_a:tt)*) ($($ref_a:tt)*) ]
    ) => {
        // vector * scalar
        impl<$($lt_a)*> Mul<f32> for $($ref_a)* $Vn {
            type Output = $Vn;

            #[inline]
            fn mul(self, scalar: f32) -> Self::Output
            { $Vn::from_fn(|k| self[k] * scalar) }
        }

        // scalar * vector
        impl<$($lt_a)*> Mul<$($ref_a)* $Vn> for f32 {
            type Output = $Vn;

            #[inline(always)]
            fn mul(self, vector: $($ref_a)* $Vn) -> Self::Output
            { vector * self }
        }

        // vector / scalar
        impl<$($lt_a)*> Div<f32> for $($ref_a)* $Vn {
            type Output = $Vn;

            #[inline]
            fn div(self, scalar: f32) -> Self::Output
            { $Vn::from_fn(|k| self[k] / scalar) }
        }

        // No modulus, which hardly makes sense for vectors anyways
        // except for the special case of `% 1.0`.
    }
}

// ---------------------------------------------------------------------------
// matrix-matrix ops (elementwise)

gen_each!{
    @{Mnn_Vn_n}
    @{by_ref}
    @{by_ref_b}
    impl_m_add_sub!(
        {$Mnn:ident $Vn:ident $n:tt}
        [ ($($lt_a:tt)*) ($($ref_a:tt)*) ]
        [ ($($lt_b:tt)*) ($($ref_b:tt)*) ]
    ) => {
        // matrix + matrix
        impl<$($lt_a)* $($lt_b)*> Add<$($ref_b)* $Mnn> for $($ref_a)* $Mnn {
            type Output = $Mnn;

            #[inline]
            fn add(self, other: $($ref_b)* $Mnn) -> Self::Output
            { $Mnn::from_fn(|r, c| self[r][c] + other[r][c]) }
        }

        // matrix - matrix
        impl<$($lt_a)* $($lt_b)*> Sub<$($ref_b)* $Mnn> for $($ref_a)* $Mnn {
            type Output = $Mnn;

            #[inline]
            fn sub(self, other: $($ref_b)* $Mnn) -> Self::Output
            { $Mnn::from_fn(|r, c| self[r][c] - other[r][c]) }
        }
    }
}

gen_each!{
    @{Mnn_Vn_n}
    @{by_ref}
    impl_m_unops_and_scalar_ops!(
        {$Mnn:ident $Vn:ident $n:tt}
        [ ($($lt_a:tt)*) ($($ref_a:tt)*) ]
    ) => {
        // -matrix
        impl<$($lt_a)*> Neg for $($ref_a)* $Mnn {
            type Output = $Mnn;

            #[inline]
            fn neg(self) -> Self::Output
            { $Mnn::from_fn(|r, c| -self[r][c]) }
        }

        // matrix * scalar
        impl<$($lt_a)*> Mul<f32> for $($ref_a)* $Mnn {
            type Output = $Mnn;

            #[inline]
            fn mul(self, scalar: f32) -> Self::Output
            { $Mnn::from_fn(|r, c| self[r][c] * scalar) }
        }

        // scalar * matrix
        impl<$($lt_a)*> Mul<$($ref_a)* $Mnn> for f32 {
            type Output = $Mnn;

            #[inline(always)]
            fn mul(self, matrix: $($ref_a)* $Mnn) -> Self::Output
            { matrix * self }
        }
    }
}

// matrix * matrix, only for the 2x2 case.  (see `Matrix22::transform`)
gen_each!{
    @{by_ref}
    @{by_ref_b}
    impl_m22_mul!(
        [ ($($lt_a:tt)*) ($($ref_a:tt)*) ]
        [ ($($lt_b:tt)*) ($($ref_b:tt)*) ]
    ) => {
        impl<$($lt_a)* $($lt_b)*> Mul<$($ref_b)* Matrix22> for $($ref_a)* Matrix22 {
            type Output = Matrix22;

            #[inline(always)]
            fn mul(self, other: $($ref_b)* Matrix22) -> Self::Output
            { Matrix22::transform(&self, &other) }
        }
    }
}

// ---------------------------------------------------------------------------

// fmt traits apply the format to each element for convenience.
gen_each!{
    @{Vn}
    [ {Display} {LowerExp} {UpperExp} ]
    impl_v_fmt!(
        {$Vn:ident}
        {$Format:ident}
    ) => {
        impl fmt::$Format for $Vn {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "[")?;
                fmt_row(&self[..], f, fmt::$Format::fmt)?;
                write!(f, "]")?;
                Ok(())
            }
        }
    }
}

// Matrices are written one row per line, which reads nicely in a log.
gen_each!{
    @{Mnn_Vn_n}
    [ {Display} {LowerExp} {UpperExp} ]
    impl_m_fmt!(
        {$Mnn:ident $Vn:ident $n:tt}
        {$Format:ident}
    ) => {
        impl fmt::$Format for $Mnn {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                writeln!(f, "[")?;
                for (r, row) in self.iter().enumerate() {
                    fmt_row(&row[..], f, fmt::$Format::fmt)?;
                    match r + 1 == $n {
                        true => writeln!(f)?,
                        false => writeln!(f, ",")?,
                    }
                }
                write!(f, "]")?;
                Ok(())
            }
        }
    }
}

fn fmt_row(
    xs: &[f32],
    f: &mut fmt::Formatter<'_>,
    fmt_one: fn(&f32, &mut fmt::Formatter<'_>) -> fmt::Result,
) -> fmt::Result {
    fmt_one(&xs[0], f)?;
    for x in &xs[1..] {
        write!(f, ", ")?;
        fmt_one(x, f)?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mat;

    #[test]
    fn vec_vec() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(0.5, -2.0, 10.0);
        let sum = Vector3::new(1.5, 0.0, 13.0);

        assert_eq!(a + b, sum);
        assert_eq!(&a + b, sum);
        assert_eq!(a + &b, sum);
        assert_eq!(&a + &b, sum);
        assert_eq!(a - b, Vector3::new(0.5, 4.0, -7.0));
        assert_eq!(b - a, -(a - b));
    }

    #[test]
    fn vec_scalar() {
        let a = Vector4::new(1.0, -2.0, 3.0, 0.5);
        assert_eq!(a * 2.0, Vector4::new(2.0, -4.0, 6.0, 1.0));
        assert_eq!(2.0 * a, a * 2.0);
        assert_eq!(2.0 * &a, &a * 2.0);
        assert_eq!(a / 2.0, Vector4::new(0.5, -1.0, 1.5, 0.25));
    }

    #[test]
    fn mat_mat() {
        let a = mat::from_array([[0.0, 2.0], [5.0, -1.0]]);
        let b = mat::from_array([[-3.0, 0.0], [1.0, 4.0]]);

        assert_eq!(a + b, mat::from_array([[-3.0, 2.0], [6.0, 3.0]]));
        assert_eq!(a - b, mat::from_array([[3.0, 2.0], [4.0, -5.0]]));
        assert_eq!(b - a, mat::from_array([[-3.0, -2.0], [-4.0, 5.0]]));
        assert_eq!(&b - &a, -(a - b));
        assert_eq!(a * 4.0, mat::from_array([[0.0, 8.0], [20.0, -4.0]]));
        assert_eq!(4.0 * &a, &a * 4.0);

        let eye = Matrix22::identity();
        assert_eq!(&eye * &a, a);
        assert_eq!(a * eye, a);
    }

    #[test]
    fn mat44_elementwise() {
        let a = Matrix44::from_fn(|r, c| (4 * r + c) as f32);
        let b = Matrix44::identity();
        let sum = a + b;
        assert_eq!(sum[0][0], 1.0);
        assert_eq!(sum[0][1], 1.0);
        assert_eq!(sum[3][3], 16.0);
        assert_eq!(sum - b, a);
        assert_eq!((a * 0.5)[2][1], 4.5);
    }

    #[test]
    fn display() {
        assert_eq!(Vector2::new(1.0, -2.5).to_string(), "[1, -2.5]");
        assert_eq!(format!("{:.2}", Vector3::new(1.0, 0.5, 0.25)), "[1.00, 0.50, 0.25]");
        assert_eq!(format!("{:e}", Vector2::new(1500.0, 0.0)), "[1.5e3, 0e0]");

        let m = mat::from_array([[0.0, 2.0], [5.0, -1.0]]);
        assert_eq!(m.to_string(), "[\n0, 2,\n5, -1\n]");
        assert_eq!(
            Matrix44::identity().to_string(),
            "[\n1, 0, 0, 0,\n0, 1, 0, 0,\n0, 0, 1, 0,\n0, 0, 0, 1\n]",
        );
    }
}
