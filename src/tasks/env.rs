/* ************************************************************************ **
** This file is part of fixla, and is licensed under EITHER the MIT license **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Configuration read from environment variables.
//!
//! The binaries take no config files and no flags, so this is all there is.

use crate::FailResult;
use std::env;
use std::path::PathBuf;

pub const VERBOSITY: &str = "FIXLA_VERBOSITY";
pub const LOG_FILE: &str = "FIXLA_LOG_FILE";
pub const LOG_MOD: &str = "FIXLA_LOG_MOD";

fn var(key: &str) -> FailResult<Option<String>>
{ match env::var(key) {
    Ok(s) => Ok(Some(s)),
    Err(env::VarError::NotPresent) => Ok(None),
    Err(env::VarError::NotUnicode(s)) => bail!("env var not unicode: {}={:?}", key, s),
}}

fn nonempty_var(key: &str) -> FailResult<Option<String>>
{ match var(key) {
    Ok(Some(ref s)) if s.trim() == "" => Ok(None),
    r => r,
}}

/// How loud the log should be.  Zero (the default) is normal; anything
/// positive turns on trace output from fixla's own crates.
pub fn verbosity() -> FailResult<i32>
{ parse_verbosity(nonempty_var(VERBOSITY)?) }

/// An additional file to write the log to.
pub fn log_file() -> FailResult<Option<PathBuf>>
{ Ok(nonempty_var(LOG_FILE)?.map(PathBuf::from)) }

/// Show module names in log output.
pub fn log_mod() -> FailResult<bool>
{ parse_log_mod(nonempty_var(LOG_MOD)?) }

fn parse_verbosity(value: Option<String>) -> FailResult<i32>
{Ok({
    match value {
        None => 0,
        Some(s) => match s.trim().parse() {
            Ok(level) => level,
            Err(e) => bail!("Invalid setting for {}: {:?} ({})", VERBOSITY, s, e),
        },
    }
})}

fn parse_log_mod(value: Option<String>) -> FailResult<bool>
{Ok({
    match value.as_ref().map(|s| s.trim()) {
        None => false,
        Some("1") => true,
        Some("0") => false,
        Some(s) => bail!("Invalid setting for {}: {:?}", LOG_MOD, s),
    }
})}
