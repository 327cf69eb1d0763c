/* ************************************************************************ **
** This file is part of fixla, and is licensed under EITHER the MIT license **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Fixed-size vectors (`Vector2`, `Vector3`, `Vector4`) and square matrices
//! (`Matrix22`, `Matrix44`) of `f32`.
//!
//! All of these are plain `Copy` values.  Nothing in this crate modifies a
//! value after it is constructed, and nothing in it can fail; every operation
//! is total over `f32` (including NaN and infinities, which are passed through
//! rather than checked).

#[cfg(test)]
#[macro_use]
extern crate fixla_assert_close;

#[macro_use] mod macros;

pub use self::types::*;
mod types;

pub use self::traits::Operand;
mod traits;

mod conv;

mod ops;

// Expose neatly-named modules, but let the .rs files have names that are close alphabetically.
#[doc(hidden)] pub mod methods_v;
#[doc(hidden)] pub mod methods_m;
pub use self::methods_v as vee;
pub use self::methods_m as mat;

pub use self::methods_v::dot;
