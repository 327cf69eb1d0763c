/* ************************************************************************ **
** This file is part of fixla, and is licensed under EITHER the MIT license **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Small fixed-size square matrix types, compatible with `Vector2`/`Vector4`
//!
//! Matrices are row-major; they are conceptually understood to be containers
//! of row-vectors, so `m[r][c]` is the element in row `r` and column `c`.

use crate::types::*;

use num_traits::{Zero, One};

// ---------------------------------------------------------------------------
// ------------------------------ PUBLIC API ---------------------------------

/// Construct a matrix from a function on indices `(row, col)`.
///
/// The shape of the matrix will be inferred solely from how it
/// is used.  There is also a static method form of this for
/// easily supplying a type hint. (e.g. `Matrix44::from_fn`)
#[inline(always)]
pub fn from_fn<M: IsMatrix, F>(f: F) -> M
where F: FnMut(usize, usize) -> f32,
{ M::from_fn(f) }

/// Construct a matrix from a 2D array (of rows).
///
/// This is intended to be used in places where an array of known
/// shape already exists, and needs to be wrapped into a matrix.
/// The signature is such that type inference will work in the
/// forward direction (deciding the output Matrix shape from
/// the input array).
#[inline(always)]
pub fn from_array<A: IntoMatrix>(arr: A) -> A::Matrix
{ arr.into_matrix() }

/// Construct an identity matrix (using type inference).
///
/// This is also available as a static method on the matrix types.
#[inline(always)]
pub fn identity<M: IsMatrix>() -> M
{ M::from_fn(|r, c| match r == c { true => 1.0, false => 0.0 }) }

/// Construct a zero matrix (using type inference).
///
/// This is also available as a static method on the matrix types.
#[inline(always)]
pub fn zero<M: IsMatrix>() -> M
{ M::from_fn(|_, _| 0.0) }

gen_each!{
    @{Mnn_Vn_n}
    impl_square_inherent!(
        {$Mnn:ident $Vn:ident $n:tt}
    ) => {
        impl $Mnn {
            /// Construct the zero matrix.
            ///
            /// This is also available as the free function `mat::zero`;
            /// this static method just provides an easy way to supply a type hint.
            #[inline(always)]
            pub fn zero() -> Self
            { zero() }

            /// Construct the identity matrix.
            ///
            /// This is also available as the free function `mat::identity`;
            /// this static method just provides an easy way to supply a type hint.
            #[inline(always)]
            pub fn identity() -> Self
            { identity() }

            /// Construct a matrix from a function on indices `(row, col)`.
            ///
            /// This is also available as the free function `mat::from_fn`;
            /// this static method just provides an easy way to supply a type hint.
            #[inline(always)]
            pub fn from_fn<F>(f: F) -> Self
            where F: FnMut(usize, usize) -> f32,
            { <Self as IsMatrix>::from_fn(f) }

            /// Construct a matrix from its row vectors.
            #[inline(always)]
            pub fn from_rows(rows: [$Vn; $n]) -> Self
            { $Mnn(rows) }

            /// Get the row vectors.
            #[inline(always)]
            pub fn rows(&self) -> [$Vn; $n]
            { self.0 }

            /// Get the element in row `r` and column `c`.
            ///
            /// # Panics
            ///
            /// Panics if either index is out of bounds.
            #[inline(always)]
            pub fn at(&self, r: usize, c: usize) -> f32
            { self.0[r][c] }

            /// Cast into a plain `[[f32; n]; n]`.
            #[inline(always)]
            pub fn into_array(self) -> [[f32; $n]; $n]
            { IntoArray::into_array(self) }

            /// Multiply every element by the same factor.
            #[inline(always)]
            pub fn mul_scalar(&self, scalar: f32) -> Self
            { self * scalar }

            /// Map each scalar element of a matrix.
            #[inline]
            pub fn map<F>(self, mut f: F) -> Self
            where F: FnMut(f32) -> f32,
            { $Mnn::from_fn(|r, c| f(self[r][c])) }
        }
    }
}

// Named element accessors; `mRC` is the element in row `R` and column `C`.
gen_each!{
    [
        {Matrix22 [(m00 0 0) (m01 0 1) (m10 1 0) (m11 1 1)]}
        {Matrix44 [
            (m00 0 0) (m01 0 1) (m02 0 2) (m03 0 3)
            (m10 1 0) (m11 1 1) (m12 1 2) (m13 1 3)
            (m20 2 0) (m21 2 1) (m22 2 2) (m23 2 3)
            (m30 3 0) (m31 3 1) (m32 3 2) (m33 3 3)
        ]}
    ]
    impl_m_elements!({$Mnn:ident [$(($get:ident $r:tt $c:tt))+]}) => {
        impl $Mnn {
            $(
                #[inline(always)]
                pub fn $get(&self) -> f32
                { self.0[$r][$c] }
            )+
        }
    }
}

impl Matrix22 {
    /// Matrix determinant.
    ///
    /// Only 2x2 matrices have this; there's no `Matrix44::det`.
    #[inline]
    pub fn det(&self) -> f32 {
        let [[a, b], [c, d]] = self.into_array();
        a * d - b * c
    }

    /// Compose two linear transformations.
    ///
    /// The output transforms a vector by `b` first, and then by `a`.
    /// In other words, this is the matrix product `a * b`.
    /// (also available as the `*` operator)
    #[inline]
    pub fn transform(a: &Matrix22, b: &Matrix22) -> Matrix22
    { Matrix22::from_fn(|r, c| a[r][0] * b[0][c] + a[r][1] * b[1][c]) }
}

/// Implementation detail of the free functions in `mat`.
///
/// > **_Fuggedaboudit._**
///
/// Its purpose is to prevent those functions from producing non-matrix types.
pub trait IsMatrix: Sized {
    fn from_fn<F: FnMut(usize, usize) -> f32>(f: F) -> Self;
}

// -------------------------- END PUBLIC API ---------------------------------
// The rest is implementation and boiler boiler boiiiiler boiilerplaaaaate
// ---------------------------------------------------------------------------

gen_each!{
    @{Mnn_Vn_n}
    impl_is_matrix!(
        {$Mnn:ident $Vn:ident $n:tt}
    ) => {
        impl IsMatrix for $Mnn {
            #[inline]
            fn from_fn<F: FnMut(usize, usize) -> f32>(mut f: F) -> Self {
                let mut rows = [$Vn::zero(); $n];
                for (r, row) in rows.iter_mut().enumerate() {
                    *row = $Vn::from_fn(|c| f(r, c));
                }
                $Mnn(rows)
            }
        }

        impl Zero for $Mnn {
            #[inline]
            fn zero() -> Self
            { zero() }

            #[inline]
            fn is_zero(&self) -> bool
            { self.iter().all(|row| row.is_zero()) }
        }
    }
}

// `One` requires a product, and only the 2x2 case has one.
impl One for Matrix22 {
    #[inline(always)]
    fn one() -> Self
    { identity() }
}

// ---------------------------------------------------------------------------

/// Implementation detail of the free function `mat::from_array`.
///
/// > **_Fuggedaboudit._**
pub trait IntoMatrix: Sized {
    type Matrix;

    fn into_matrix(self) -> Self::Matrix;
}

/// Implementation detail of the inherent method `{Matrix22,Matrix44}::into_array`.
///
/// > **_Fuggedaboudit._**
pub trait IntoArray: Sized {
    type Array;

    fn into_array(self) -> Self::Array;
}

gen_each!{
    @{Mnn_Vn_n}
    impl_array_conversions!(
        {$Mnn:ident $Vn:ident $n:tt}
    ) => {
        impl IntoMatrix for [[f32; $n]; $n] {
            type Matrix = $Mnn;

            #[inline(always)]
            fn into_matrix(self) -> Self::Matrix
            { $Mnn::from_fn(|r, c| self[r][c]) }
        }

        impl IntoArray for $Mnn {
            type Array = [[f32; $n]; $n];

            #[inline(always)]
            fn into_array(self) -> Self::Array {
                let mut out = [[0.0; $n]; $n];
                for (r, row) in out.iter_mut().enumerate() {
                    *row = self.0[r].into_array();
                }
                out
            }
        }
    }
}

// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_a() -> Matrix22 { from_array([[0.0, 2.0], [5.0, -1.0]]) }
    fn sample_b() -> Matrix22 { from_array([[-3.0, 0.0], [1.0, 4.0]]) }

    #[test]
    fn test_zero_identity() {
        assert_eq!(from_array([[0.0, 0.0], [0.0, 0.0]]), Matrix22::zero());
        assert_eq!(from_array([[1.0, 0.0], [0.0, 1.0]]), Matrix22::identity());
        assert_eq!(
            from_array([
                [0.0, 0.0, 0.0, 0.0],
                [0.0, 0.0, 0.0, 0.0],
                [0.0, 0.0, 0.0, 0.0],
                [0.0, 0.0, 0.0, 0.0],
            ]),
            Matrix44::zero(),
        );
        assert_eq!(
            from_array([
                [1.0, 0.0, 0.0, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ]),
            Matrix44::identity(),
        );
        assert!(Matrix44::zero().is_zero());
        assert!(!Matrix44::identity().is_zero());
        assert!(Matrix22::one().is_one());
        assert!(!sample_a().is_one());
    }

    #[test]
    fn test_add_sub_scalar() {
        let (a, b) = (sample_a(), sample_b());
        assert_eq!((a + b).into_array(), [[-3.0, 2.0], [6.0, 3.0]]);
        assert_eq!((a - b).into_array(), [[3.0, 2.0], [4.0, -5.0]]);
        assert_eq!((b - a).into_array(), [[-3.0, -2.0], [-4.0, 5.0]]);
        assert_eq!(a.mul_scalar(4.0).into_array(), [[0.0, 8.0], [20.0, -4.0]]);
    }

    #[test]
    fn test_det() {
        assert_eq!(sample_a().det(), -10.0);
        assert_eq!(Matrix22::identity().det(), 1.0);
        assert_eq!(Matrix22::zero().det(), 0.0);
        assert_eq!(from_array([[7.0, 2.0], [-11.0, 4.0]]).det(), 50.0);
    }

    #[test]
    fn test_transform() {
        let a = from_array([[2.0, 3.0], [1.0, -1.0]]);
        let b = from_array([[-3.0, 1.0], [-2.0, 4.0]]);
        assert_eq!(Matrix22::transform(&a, &b).into_array(), [[-12.0, 14.0], [-1.0, -3.0]]);
        assert_eq!(Matrix22::transform(&b, &a).into_array(), [[-5.0, -10.0], [0.0, -10.0]]);

        // composition matches applying b, then a, to each basis vector
        let ab = Matrix22::transform(&a, &b);
        for k in 0..2 {
            let e = crate::Vector2::from_fn(|i| match i == k { true => 1.0, false => 0.0 });
            let via_b = crate::Vector2::from_fn(|r| crate::vee::dot(&b[r], &e));
            let via_a = crate::Vector2::from_fn(|r| crate::vee::dot(&a[r], &via_b));
            let direct = crate::Vector2::from_fn(|r| crate::vee::dot(&ab[r], &e));
            assert_eq!(via_a, direct);
        }
    }

    #[test]
    fn test_accessors() {
        let m = sample_a();
        assert_eq!([m.m00(), m.m01(), m.m10(), m.m11()], [0.0, 2.0, 5.0, -1.0]);
        assert_eq!(m.at(1, 0), 5.0);
        assert_eq!(m.rows()[1], crate::Vector2::new(5.0, -1.0));
        assert_eq!(Matrix22::from_rows(m.rows()), m);

        let big = Matrix44::from_fn(|r, c| (10 * r + c) as f32);
        assert_eq!(big.at(3, 2), 32.0);
        assert_eq!(
            [big.m00(), big.m03(), big.m12(), big.m21(), big.m30(), big.m33()],
            [0.0, 3.0, 12.0, 21.0, 30.0, 33.0],
        );
        assert_eq!(
            [[big.m10(), big.m11(), big.m13()], [big.m20(), big.m22(), big.m23()]],
            [[10.0, 11.0, 13.0], [20.0, 22.0, 23.0]],
        );
        assert_eq!([big.m01(), big.m02(), big.m31(), big.m32()], [1.0, 2.0, 31.0, 32.0]);
        assert_eq!(big.into_array()[2], [20.0, 21.0, 22.0, 23.0]);
        assert_eq!(big.map(|x| -x).at(1, 1), -11.0);
    }

    // ------------------------------------------------------------------
    // properties

    fn random_m22() -> Matrix22 { from_array(::rand::random::<[[f32; 2]; 2]>()) }
    fn random_m44() -> Matrix44 { from_array(::rand::random::<[[f32; 4]; 4]>()) }

    #[test]
    fn prop_transform_identity() {
        for _ in 0..10 {
            let m = random_m22();
            assert_eq!(Matrix22::transform(&Matrix22::identity(), &m), m);
            assert_eq!(Matrix22::transform(&m, &Matrix22::identity()), m);
        }
    }

    #[test]
    fn prop_sub_undoes_add() {
        for _ in 0..10 {
            let (a, b) = (random_m22(), random_m22());
            assert_close!(abs=1e-6, a.into_array(), ((a + b) - b).into_array());

            let (a, b) = (random_m44(), random_m44());
            assert_close!(abs=1e-6, a.into_array(), ((a + b) - b).into_array());
        }
    }

    #[test]
    fn prop_sub_anticommutes() {
        for _ in 0..10 {
            let (a, b) = (random_m44(), random_m44());
            assert_eq!(a - b, -(b - a));
        }
    }
}
