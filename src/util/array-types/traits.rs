/* ************************************************************************ **
** This file is part of fixla, and is licensed under EITHER the MIT license **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

// Traits exposed in public interfaces,
// implemented on finite sets of types rather than more general
//  generic bounds in order to reduce coupling with client crates.

use crate::types::*;

pub use self::operand::Operand;
mod operand {
    /// The right hand side of the componentwise operations `vee::add`,
    /// `vee::sub`, and `vee::mul`.
    ///
    /// An operand may cover only a prefix of the components of `V`:
    ///
    /// * a vector of the same type covers every component;
    /// * a bare `f32` covers only the first component;
    /// * a tuple of `k` floats covers the first `k` components (for `2 <= k <= N`).
    ///
    /// Components that are not covered are left exactly as they are.
    ///
    /// This trait is sealed to avoid accidental commitments.
    pub trait Operand<V>: Sealed<V> {
        /// The value to combine with component `k`, if this operand covers it.
        fn get(&self, k: usize) -> Option<f32>;
    }

    pub(super) use self::private::Sealed;
    pub(super) mod private {
        pub trait Sealed<V> { }
    }
}

impl<'a, V, B: Operand<V>> Operand<V> for &'a B {
    #[inline(always)]
    fn get(&self, k: usize) -> Option<f32>
    { (**self).get(k) }
}
impl<'a, V, B: Operand<V>> operand::Sealed<V> for &'a B { }

gen_each!{
    @{Vn}
    impl_whole_operand!({$Vn:ident}) => {
        impl Operand<$Vn> for $Vn {
            #[inline(always)]
            fn get(&self, k: usize) -> Option<f32>
            { self.0.get(k).cloned() }
        }
        impl operand::Sealed<$Vn> for $Vn { }

        impl Operand<$Vn> for f32 {
            #[inline(always)]
            fn get(&self, k: usize) -> Option<f32>
            { match k { 0 => Some(*self), _ => None } }
        }
        impl operand::Sealed<$Vn> for f32 { }
    }
}

gen_each!{
    [
        {Vector2 [a b]}
        {Vector3 [a b]} {Vector3 [a b c]}
        {Vector4 [a b]} {Vector4 [a b c]} {Vector4 [a b c d]}
    ]
    impl_prefix_operand!({$Vn:ident [$($x:ident)+]}) => {
        impl Operand<$Vn> for ($(f32_for!($x),)+) {
            #[inline]
            fn get(&self, k: usize) -> Option<f32> {
                let &($($x,)+) = self;
                [$($x),+].get(k).cloned()
            }
        }
        impl operand::Sealed<$Vn> for ($(f32_for!($x),)+) { }
    }
}

// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn covered<V, B: Operand<V>>(b: B, n: usize) -> Vec<Option<f32>>
    { (0..n).map(|k| b.get(k)).collect() }

    #[test]
    fn prefixes() {
        assert_eq!(covered::<Vector4, _>(2.0, 4), vec![Some(2.0), None, None, None]);
        assert_eq!(covered::<Vector4, _>((2.0, 3.0), 4), vec![Some(2.0), Some(3.0), None, None]);
        assert_eq!(covered::<Vector3, _>((2.0, 3.0, 4.0), 3), vec![Some(2.0), Some(3.0), Some(4.0)]);
        assert_eq!(covered::<Vector2, _>(Vector2([5.0, 6.0]), 2), vec![Some(5.0), Some(6.0)]);
        assert_eq!(covered::<Vector2, _>(&Vector2([5.0, 6.0]), 2), vec![Some(5.0), Some(6.0)]);
    }
}
