/* ************************************************************************ **
** This file is part of fixla, and is licensed under EITHER the MIT license **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Fixed-size vectors of `f32`, and free functions for working with them.

use crate::traits::Operand;
use crate::types::*;

use num_traits::Zero;

// ---------------------------------------------------------------------------
// ------------------------------ PUBLIC API ---------------------------------

/// Get a zero vector (using type inference).
///
/// This is also available as a static method on the vector types.
#[inline(always)]
pub fn zero<V: IsV>() -> V
{ V::from_fn(|_| 0.0) }

/// Construct a fixed-size vector from a function on indices.
#[inline(always)]
pub fn from_fn<V: IsV, F>(f: F) -> V
where F: FnMut(usize) -> f32,
{ V::from_fn(f) }

/// Inner product of vectors.
///
/// This is basically just `{Vector2,Vector3,Vector4}::dot` as a free function,
/// because everyone loves symmetry.
#[inline]
pub fn dot<V: IsV>(a: &V, b: &V) -> f32
{ (1..V::DIM).fold(a.at(0) * b.at(0), |s, k| s + a.at(k) * b.at(k)) }

/// Componentwise sum.
///
/// `b` may be another vector, or a prefix of its components (see [`Operand`]);
/// components of `a` past the end of the prefix are returned unchanged.
///
/// ```
/// use fixla_array_types::{vee, Vector3};
///
/// let a = Vector3::new(1.0, 2.0, 3.0);
/// assert_eq!(vee::add(&a, (10.0, 20.0)), Vector3::new(11.0, 22.0, 3.0));
/// assert_eq!(vee::add(&a, a), Vector3::new(2.0, 4.0, 6.0));
/// ```
#[inline]
pub fn add<V: IsV, B: Operand<V>>(a: &V, b: B) -> V
{ zip_operand(a, &b, |x, y| x + y) }

/// Componentwise difference, in the order `a - b`.
///
/// Accepts the same operands as [`add`].
#[inline]
pub fn sub<V: IsV, B: Operand<V>>(a: &V, b: B) -> V
{ zip_operand(a, &b, |x, y| x - y) }

/// Componentwise product.
///
/// Accepts the same operands as [`add`].  To scale every component by one
/// factor, use `mul_scalar` (or `*`) instead.
#[inline]
pub fn mul<V: IsV, B: Operand<V>>(a: &V, b: B) -> V
{ zip_operand(a, &b, |x, y| x * y) }

gen_each!{
    @{Vn_n_parts}
    impl_v_inherent!(
        {$Vn:ident $n:tt [$(($arg:ident $get:ident $k:tt))+]}
    ) => {
        impl $Vn {
            /// Get a zero vector.
            ///
            /// This is also available as the free function `vee::zero`;
            /// this static method just provides an easy way to supply a type hint.
            #[inline(always)]
            pub fn zero() -> Self
            { $Vn([0.0; $n]) }

            /// Construct a vector from its components.
            #[inline(always)]
            pub fn new($($arg: f32),+) -> Self
            { $Vn([$($arg),+]) }

            /// Construct a fixed-size vector from a function on indices.
            ///
            /// This is also available as the free function `vee::from_fn`;
            /// this static method just provides an easy way to supply a type hint.
            #[inline(always)]
            pub fn from_fn<F>(f: F) -> Self
            where F: FnMut(usize) -> f32,
            { <Self as IsV>::from_fn(f) }

            $(
                #[inline(always)]
                pub fn $get(&self) -> f32
                { self.0[$k] }
            )+

            /// Cast into a plain array.
            #[inline(always)]
            pub fn into_array(self) -> [f32; $n]
            { self.0 }

            /// Get the inner product of two vectors.
            ///
            /// It is recommended you write this as `Vector3::dot(&a, &b)`, rather than `a.dot(&b)`.
            #[inline(always)]
            pub fn dot(&self, other: &Self) -> f32
            { dot(self, other) }

            /// Get the vector's squared magnitude.
            ///
            /// This overflows to infinity once the magnitude exceeds roughly `1.8e19`.
            #[inline(always)]
            pub fn sqmagnitude(&self) -> f32
            { dot(self, self) }

            /// Get the vector's Euclidean magnitude.
            ///
            /// Components are scaled by the largest of their absolute values before
            /// squaring, so this is finite whenever the true magnitude fits in an `f32`.
            #[inline]
            pub fn magnitude(&self) -> f32
            {
                let scale = self.iter().fold(0.0f32, |acc, &x| acc.max(x.abs()));
                match scale > 0.0 && scale.is_finite() {
                    true => scale * self.map(|x| x / scale).sqmagnitude().sqrt(),
                    // zero, infinite, or entirely NaN
                    false => self.sqmagnitude().sqrt(),
                }
            }

            /// Scale the vector to unit magnitude.
            ///
            /// Vectors whose magnitude is not greater than `f32::EPSILON` have no
            /// meaningful direction, and produce the zero vector instead.
            #[inline]
            pub fn normalize(&self) -> Self
            {
                let magnitude = self.magnitude();
                match magnitude > f32::EPSILON {
                    true => self / magnitude,
                    false => Self::zero(),
                }
            }

            /// Multiply every component by the same factor.
            #[inline(always)]
            pub fn mul_scalar(&self, scalar: f32) -> Self
            { self * scalar }

            /// Limit each component to the range `[min, max]`.
            ///
            /// NaN components stay NaN. Never panics; when `min > max`, components
            /// below `min` come out as `min` and all others as `max`.
            #[inline]
            pub fn clamp(&self, min: f32, max: f32) -> Self
            {
                self.map(|x| {
                    if x < min { min }
                    else if x > max { max }
                    else { x }
                })
            }

            /// Apply a function to each element.
            #[inline]
            pub fn map<F>(self, mut f: F) -> Self
            where F: FnMut(f32) -> f32,
            { $Vn([$(f(self.0[$k])),+]) }
        }
    }
}

// `Vector4` computes its distance through `distance_squared`.
gen_each!{
    [{Vector2} {Vector3}]
    impl_v_distance!({$Vn:ident}) => {
        impl $Vn {
            /// Get the distance between two points, i.e. the magnitude of `other - self`.
            #[inline]
            pub fn distance(&self, other: &Self) -> f32
            { (other - self).magnitude() }
        }
    }
}

impl Vector2 {
    /// Get the magnitude of the *sum* `self + other`.
    ///
    /// Not to be confused with `distance`, which measures the difference.
    #[inline]
    pub fn length(&self, other: &Self) -> f32
    { (self + other).magnitude() }
}

impl Vector3 {
    /// Cross-product.
    #[inline]
    pub fn cross(&self, other: &Self) -> Self {
        Vector3([
            self[1] * other[2] - self[2] * other[1],
            self[2] * other[0] - self[0] * other[2],
            self[0] * other[1] - self[1] * other[0],
        ])
    }
}

impl Vector4 {
    /// Cross-product of the first three components.
    ///
    /// There is no cross product in four dimensions; this treats both vectors
    /// as 3-vectors and always produces a `w` of zero.
    #[inline]
    pub fn cross(&self, other: &Self) -> Self {
        let Vector3([x, y, z]) = self.xyz().cross(&other.xyz());
        Vector4([x, y, z, 0.0])
    }

    /// Get the squared distance between two points, i.e. the squared magnitude of `other - self`.
    #[inline]
    pub fn distance_squared(&self, other: &Self) -> f32
    { (other - self).sqmagnitude() }

    /// Get the distance between two points, i.e. the magnitude of `other - self`.
    #[inline]
    pub fn distance(&self, other: &Self) -> f32
    { self.distance_squared(other).sqrt() }

    #[inline(always)]
    fn xyz(&self) -> Vector3
    { Vector3([self[0], self[1], self[2]]) }
}

/// Trait that provides the arity and raw construction of `Vector2, Vector3, Vector4`.
///
/// > **_Fuggedaboudit._**
///
/// Without this, the free functions in `vee` could not be generic over
/// different sizes of vector.
pub trait IsV: Copy {
    const DIM: usize;

    fn from_fn<F: FnMut(usize) -> f32>(f: F) -> Self;

    fn at(&self, k: usize) -> f32;
}

// -------------------------- END PUBLIC API ---------------------------------
// The rest is implementation and boiler boiler boiiiiler boiilerplaaaaate
// ---------------------------------------------------------------------------

gen_each!{
    @{Vn_n_parts}
    impl_is_v!(
        {$Vn:ident $n:tt [$(($arg:ident $get:ident $k:tt))+]}
    ) => {
        impl IsV for $Vn {
            const DIM: usize = $n;

            #[inline]
            fn from_fn<F: FnMut(usize) -> f32>(mut f: F) -> Self
            { $Vn([$(f($k)),+]) }

            #[inline(always)]
            fn at(&self, k: usize) -> f32
            { self.0[k] }
        }
    }
}

#[inline]
fn zip_operand<V: IsV, B: Operand<V>, F>(a: &V, b: &B, mut f: F) -> V
where F: FnMut(f32, f32) -> f32,
{
    V::from_fn(|k| match b.get(k) {
        Some(y) => f(a.at(k), y),
        None => a.at(k),
    })
}

gen_each!{
    @{Vn_n}
    for_each!(
        {$Vn:ident $n:tt}
    ) => {
        impl Zero for $Vn {
            #[inline]
            fn zero() -> Self
            { $Vn::zero() }

            #[inline]
            fn is_zero(&self) -> bool
            { self.iter().all(|&x| x == 0.0) }
        }

        impl std::iter::Sum for $Vn {
            fn sum<I: Iterator<Item=$Vn>>(iter: I) -> Self {
                iter.fold($Vn::zero(), |a, b| a + b)
            }
        }

        impl<'a> std::iter::Sum<&'a $Vn> for $Vn {
            fn sum<I: Iterator<Item=&'a $Vn>>(iter: I) -> Self {
                iter.fold($Vn::zero(), |a, b| a + b)
            }
        }
    }
}

// ---------------------------------------------------------------------------
