/* ************************************************************************ **
** This file is part of fixla, and is licensed under EITHER the MIT license **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

// Conversions to and from plain arrays.

use crate::types::*;
use crate::mat::{IntoArray, IntoMatrix};

gen_each!{
    @{Vn_n}
    impl_v_array_conv!( {$Vn:ident $n:tt} ) => {
        impl From<[f32; $n]> for $Vn {
            #[inline(always)]
            fn from(arr: [f32; $n]) -> Self
            { $Vn(arr) }
        }

        impl From<$Vn> for [f32; $n] {
            #[inline(always)]
            fn from(v: $Vn) -> Self
            { v.0 }
        }
    }
}

gen_each!{
    @{Mnn_Vn_n}
    impl_m_array_conv!( {$Mnn:ident $Vn:ident $n:tt} ) => {
        impl From<[[f32; $n]; $n]> for $Mnn {
            #[inline(always)]
            fn from(arr: [[f32; $n]; $n]) -> Self
            { arr.into_matrix() }
        }

        impl From<$Mnn> for [[f32; $n]; $n] {
            #[inline(always)]
            fn from(m: $Mnn) -> Self
            { m.into_array() }
        }

        impl From<[$Vn; $n]> for $Mnn {
            #[inline(always)]
            fn from(rows: [$Vn; $n]) -> Self
            { $Mnn(rows) }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_through_arrays() {
        let v = Vector3::from([1.0, 2.0, 3.0]);
        assert_eq!(v, Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(<[f32; 3]>::from(v), [1.0, 2.0, 3.0]);

        let m = Matrix22::from([[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(m.at(1, 0), 3.0);
        assert_eq!(<[[f32; 2]; 2]>::from(m), [[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(Matrix22::from([Vector2::new(1.0, 2.0), Vector2::new(3.0, 4.0)]), m);
    }
}
