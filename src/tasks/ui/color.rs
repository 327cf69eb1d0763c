/* ************************************************************************ **
** This file is part of fixla, and is licensed under EITHER the MIT license **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use std::fmt;
use ansi_term::Style;

pub fn paint<T>(style: Style, value: T) -> Wrapper<T>
{ Wrapper { style, value } }

/// A wrapper for colorizing the `Display` of a value.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Wrapper<T> {
    style: Style,
    value: T,
}

impl<T: fmt::Display> fmt::Display for Wrapper<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.style.prefix())?;
        fmt::Display::fmt(&self.value, f)?;
        write!(f, "{}", self.style.suffix())?;
        Ok(())
    }
}
