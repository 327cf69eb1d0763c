/* ************************************************************************ **
** This file is part of fixla, and is licensed under EITHER the MIT license **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Small fixed-size vector and matrix value types.
//!
//! Everything lives in `fixla-array-types`; this crate re-exports it
//! and owns the `fixla-smoke` binary.

pub use fixla_array_types::*;
