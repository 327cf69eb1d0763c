/* ************************************************************************ **
** This file is part of fixla, and is licensed under EITHER the MIT license **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::FailResult;
use crate::ui::color::paint;

use std::fmt;
use std::path::{Path, PathBuf};
use log::{Level, LevelFilter};

/// Crates whose log output is interesting at the default verbosity.
const OUR_CRATES: &[&str] = &["fixla_tasks", "fixla_array_types"];

/// Builder-style setup for logging
#[derive(Debug, Clone, Default)]
pub struct GlobalLogger {
    path: Option<PathBuf>,
    verbosity: Verbosity,
    show_target: bool,
}

impl GlobalLogger {
    /// Also write the log to a file.  Relative paths are resolved when
    /// `apply()` is called.
    pub fn path<P: AsRef<Path>>(&mut self, path: P) -> &mut Self
    { self.path = Some(path.as_ref().to_owned()); self }

    /// Any integer will be accepted; the level will be truncated
    /// to the most extreme value supported.
    pub fn verbosity(&mut self, level: i32) -> &mut Self
    {
        self.verbosity = match level > 0 {
            true => Verbosity::Loud,
            false => Verbosity::Default,
        };
        self
    }

    /// Show the module path that produced each message.
    pub fn show_target(&mut self, show: bool) -> &mut Self
    { self.show_target = show; self }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum Verbosity { Default, Loud }

impl Default for Verbosity {
    fn default() -> Self { Verbosity::Default }
}

impl GlobalLogger {
    fn our_level(&self) -> LevelFilter {
        match self.verbosity {
            Verbosity::Default => LevelFilter::Debug,
            Verbosity::Loud => LevelFilter::Trace,
        }
    }

    /// Install the logger.
    ///
    /// Messages go to stderr, leaving stdout for the program's actual output.
    ///
    /// NOTE: This fails if a logger has already been installed.
    pub fn apply(&mut self) -> FailResult<()>
    {
        use std::time::Instant;

        let start = Instant::now();
        let show_target = self.show_target;
        let mut fern = fern::Dispatch::new();
        fern = fern.format(move |out, message, record| {
                let t = start.elapsed();
                let target = match show_target {
                    true => format!("[{}]", record.target()),
                    false => String::new(),
                };
                out.finish(format_args!("[{:>4}.{:03}s]{}[{}] {}",
                    t.as_secs(),
                    t.subsec_millis(),
                    target,
                    ColorizedLevel(record.level()),
                    message))
            })
            .level(LevelFilter::Info);

        for krate in OUR_CRATES {
            fern = fern.level_for(*krate, self.our_level());
        }
        fern = fern.chain(std::io::stderr());

        if let Some(path) = self.path.as_ref() {
            fern = fern.chain(fern::log_file(path)?);
        }

        fern.apply()?;
        Ok(())
    }
}

/// Set up logging as configured by the environment.
pub fn init_global_logger() -> FailResult<()>
{
    let mut logger = GlobalLogger::default();
    logger.verbosity(crate::env::verbosity()?);
    logger.show_target(crate::env::log_mod()?);
    if let Some(path) = crate::env::log_file()? {
        logger.path(path);
    }
    logger.apply()?;

    debug!("Logging initialized ({:?})", logger);
    Ok(())
}

#[derive(Debug, Copy, Clone)]
pub struct ColorizedLevel(pub Level);
impl fmt::Display for ColorizedLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let style = match self.0 {
            Level::Error => ansi_term::Colour::Red.bold(),
            Level::Warn  => ansi_term::Colour::Red.normal(),
            Level::Info  => ansi_term::Colour::Cyan.bold(),
            Level::Debug => ansi_term::Colour::Yellow.dimmed(),
            Level::Trace => ansi_term::Colour::Cyan.normal(),
        };
        write!(f, "{}", paint(style, self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_truncates() {
        let mut logger = GlobalLogger::default();
        assert_eq!(logger.our_level(), LevelFilter::Debug);
        assert_eq!(logger.verbosity(1).our_level(), LevelFilter::Trace);
        assert_eq!(logger.verbosity(1000).our_level(), LevelFilter::Trace);
        assert_eq!(logger.verbosity(-3).our_level(), LevelFilter::Debug);
    }

    #[test]
    fn colorized_level_names_the_level() {
        assert!(ColorizedLevel(Level::Warn).to_string().contains("WARN"));
        assert!(ColorizedLevel(Level::Trace).to_string().contains("TRACE"));
    }
}
