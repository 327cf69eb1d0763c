/* ************************************************************************ **
** This file is part of fixla, and is licensed under EITHER the MIT license **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::FailResult;
use crate::ui::logging::init_global_logger;

use std::ffi::OsStr;

fn wrap_result_main<F>(main: F)
where F: FnOnce() -> FailResult<()>,
{
    main().unwrap_or_else(|e| {
        // Config errors can happen before there is a logger to report them.
        if log::max_level() == log::LevelFilter::Off {
            for cause in e.iter_chain() {
                eprintln!("ERROR: {}", cause);
            }
            std::process::exit(1);
        }

        for cause in e.iter_chain() {
            error!("{}", cause);
        }

        if std::env::var_os("RUST_BACKTRACE") == Some(OsStr::new("1").to_owned()) {
            error!("{}", e.backtrace());
        }
        std::process::exit(1);
    });
}

// -------------------------------------------------------------------------------------

// %% CRATES: binary: fixla-smoke %%
pub fn smoke() {
    wrap_result_main(|| {
        let _ = clap::App::new("fixla-smoke")
            .version(env!("CARGO_PKG_VERSION"))
            .about("\
                Runs a few hand-checked vector and matrix operations, \
                printing the normalized vector (8, 6, 7, 9). \
                Exits with a failure status if any result is wrong.\
            ")
            .after_help("\
                ENVIRONMENT:\n    \
                    FIXLA_VERBOSITY    positive values enable trace logging\n    \
                    FIXLA_LOG_FILE     also write the log to this file\n    \
                    FIXLA_LOG_MOD      set to 1 to show module names in the log\
            ")
            .get_matches();

        init_global_logger()?;

        let stdout = std::io::stdout();
        crate::smoke::run(&mut stdout.lock())
    });
}
