/* ************************************************************************ **
** This file is part of fixla, and is licensed under EITHER the MIT license **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Everything behind the fixla binaries.
//!
//! The binaries themselves are one-line shims that call into `entry_points`.

#[macro_use] extern crate log;
#[macro_use] extern crate failure;
#[cfg(test)]
#[macro_use] extern crate fixla_assert_close;

macro_rules! throw {
    ($e:expr) => {
        return Err(::std::convert::Into::into($e));
    }
}

pub type FailResult<T> = Result<T, failure::Error>;

mod env;
mod ui;
mod smoke;
pub mod entry_points;

pub use crate::smoke::SmokeCheckFailed;
