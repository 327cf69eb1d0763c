/* ************************************************************************ **
** This file is part of fixla, and is licensed under EITHER the MIT license **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use std::ops::Deref;
use std::fmt;

// NOTE: Fields are private to the crate.  Every operation in this crate
//       produces a new value; there is no way to modify one in place.
//       Read access is through `Deref` and the accessor methods.

// ---------------------------------------------------------------------------

/// A 2-dimensional vector of `f32`.
#[derive(Copy, Clone, PartialEq, Default)]
pub struct Vector2(pub(crate) [f32; 2]);

/// A 3-dimensional vector of `f32`.
#[derive(Copy, Clone, PartialEq, Default)]
pub struct Vector3(pub(crate) [f32; 3]);

/// A 4-dimensional vector of `f32`.
#[derive(Copy, Clone, PartialEq, Default)]
pub struct Vector4(pub(crate) [f32; 4]);

// ---------------------------------------------------------------------------

/// A square dense 2x2 matrix of `f32`, stored as rows.
#[derive(Copy, Clone, PartialEq, Default)]
pub struct Matrix22(pub(crate) [Vector2; 2]);

/// A square dense 4x4 matrix of `f32`, stored as rows.
#[derive(Copy, Clone, PartialEq, Default)]
pub struct Matrix44(pub(crate) [Vector4; 4]);

// ---------------------------------------------------------------------------
// All types behave generally like a read-only view of their backing array.

pub type Iter<'a, X> = std::slice::Iter<'a, X>;

gen_each!{
    [
        {Vector2 f32, 2} {Vector3 f32, 3} {Vector4 f32, 4}
        {Matrix22 Vector2, 2} {Matrix44 Vector4, 4}
    ]
    impl_array_like!(
        {$Cn:ident $T:ty, $n:tt}
    ) => {
        impl Deref for $Cn {
            type Target = [$T; $n];

            #[inline(always)]
            fn deref(&self) -> &Self::Target
            { &self.0 }
        }

        // Fix a paper cut not solved by Deref, which is that many methods
        // take `I: IntoIterator`.
        impl<'a> IntoIterator for &'a $Cn {
            type Item = &'a $T;
            type IntoIter = Iter<'a, $T>;

            #[inline(always)]
            fn into_iter(self) -> Self::IntoIter
            { self.0.iter() }
        }

        // forward the debug impl without a surrounding "Vector3(...)", so that
        // debug output of vectors and matrices is a plain nested list.
        impl fmt::Debug for $Cn {
            #[inline]
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
            { fmt::Debug::fmt(&self.0, f) }
        }
    }
}

// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_is_a_plain_list() {
        assert_eq!(format!("{:?}", Vector3([1.0, 2.5, -3.0])), "[1.0, 2.5, -3.0]");
        assert_eq!(
            format!("{:?}", Matrix22([Vector2([1.0, 0.0]), Vector2([0.0, 1.0])])),
            "[[1.0, 0.0], [0.0, 1.0]]",
        );
    }

    #[test]
    fn default_is_zero() {
        assert_eq!(Vector4::default().0, [0.0; 4]);
        assert!(Matrix44::default().iter().all(|row| row.iter().all(|&x| x == 0.0)));
    }

    #[test]
    fn iterates_like_an_array() {
        let v = Vector4([1.0, 2.0, 3.0, 4.0]);
        assert_eq!((&v).into_iter().sum::<f32>(), 10.0);
        assert_eq!(v.len(), 4);
        assert_eq!(v[2], 3.0);
    }
}
