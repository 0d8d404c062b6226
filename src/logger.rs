// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

//! Leveled, optionally buffered console logger.
//!
//! A [`Logger`] is an ordinary value: create one, hand it to whatever needs
//! to report, and drop it to flush. It also implements [`log::Log`], so it
//! can be installed as the backend for the `log` macros the crate emits.

use std::{
    fmt,
    io::{self, Write},
    sync::{Mutex, MutexGuard},
    time::{Duration, Instant},
};

/// Message severity, most severe first. A logger prints every message whose
/// verbosity is at or below its maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Verbosity {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl Verbosity {
    pub fn as_str(self) -> &'static str {
        match self {
            Verbosity::Off => "OFF",
            Verbosity::Error => "ERROR",
            Verbosity::Warn => "WARN",
            Verbosity::Info => "INFO",
            Verbosity::Debug => "DEBUG",
            Verbosity::Trace => "TRACE",
        }
    }

    fn color(self) -> &'static str {
        match self {
            Verbosity::Error => "\x1b[1;31m",
            Verbosity::Warn => "\x1b[1;33m",
            Verbosity::Debug => "\x1b[1;35m",
            Verbosity::Trace => "\x1b[1;36m",
            Verbosity::Off | Verbosity::Info => "",
        }
    }

    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            Verbosity::Off => log::LevelFilter::Off,
            Verbosity::Error => log::LevelFilter::Error,
            Verbosity::Warn => log::LevelFilter::Warn,
            Verbosity::Info => log::LevelFilter::Info,
            Verbosity::Debug => log::LevelFilter::Debug,
            Verbosity::Trace => log::LevelFilter::Trace,
        }
    }
}

impl From<log::Level> for Verbosity {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => Verbosity::Error,
            log::Level::Warn => Verbosity::Warn,
            log::Level::Info => Verbosity::Info,
            log::Level::Debug => Verbosity::Debug,
            log::Level::Trace => Verbosity::Trace,
        }
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Logger settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Most verbose level that is printed (default: Info).
    pub max_verbosity: Verbosity,

    /// Hold messages until `flush_threshold` of them are pending (default: false).
    pub buffered: bool,

    /// Prefix messages with `[hh:mm:ss.mmm]` since the logger started (default: true).
    pub timestamped: bool,

    /// Wrap messages in ANSI colors by level (default: true).
    pub colorized: bool,

    /// Terminate the process with status 1 after logging an error (default: true).
    pub exit_on_error: bool,

    /// Pending messages that trigger a flush in buffered mode (default: 20).
    pub flush_threshold: usize,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            max_verbosity: Verbosity::Info,
            buffered: false,
            timestamped: true,
            colorized: true,
            exit_on_error: true,
            flush_threshold: 20,
        }
    }
}

impl LogConfig {
    pub fn with_max_verbosity(mut self, max_verbosity: Verbosity) -> Self {
        self.max_verbosity = max_verbosity;
        self
    }

    pub fn with_buffered(mut self, buffered: bool) -> Self {
        self.buffered = buffered;
        self
    }

    pub fn with_timestamped(mut self, timestamped: bool) -> Self {
        self.timestamped = timestamped;
        self
    }

    pub fn with_colorized(mut self, colorized: bool) -> Self {
        self.colorized = colorized;
        self
    }

    pub fn with_exit_on_error(mut self, exit_on_error: bool) -> Self {
        self.exit_on_error = exit_on_error;
        self
    }

    pub fn with_flush_threshold(mut self, flush_threshold: usize) -> Self {
        self.flush_threshold = flush_threshold.max(1);
        self
    }
}

/// Render one message the way the logger prints it.
pub fn format_message(
    config: &LogConfig,
    verbosity: Verbosity,
    elapsed: Duration,
    message: &str,
) -> String {
    let (c0, c1) = if config.colorized && !verbosity.color().is_empty() {
        (verbosity.color(), "\x1b[0m")
    } else {
        ("", "")
    };
    let time = if config.timestamped {
        let secs = elapsed.as_secs();
        format!(
            "[{:02}:{:02}:{:02}.{:03}] ",
            secs / 3600,
            (secs / 60) % 60,
            secs % 60,
            elapsed.subsec_millis()
        )
    } else {
        String::new()
    };
    format!("{c0}{time}{verbosity}: {message}{c1}")
}

struct Pending {
    verbosity: Verbosity,
    elapsed: Duration,
    message: String,
}

struct State {
    config: LogConfig,
    start: Instant,
    num_errors: usize,
    num_warnings: usize,
    pending: Vec<Pending>,
    sink: Option<Box<dyn Write + Send>>,
}

impl State {
    fn emit(&mut self, verbosity: Verbosity, elapsed: Duration, message: &str) {
        let line = format_message(&self.config, verbosity, elapsed, message);
        // Write errors are dropped.
        let _ = match self.sink.as_mut() {
            Some(sink) => writeln!(sink, "{line}"),
            None if verbosity == Verbosity::Error => writeln!(io::stderr(), "{line}"),
            None => writeln!(io::stdout(), "{line}"),
        };
    }

    fn flush(&mut self) {
        for p in std::mem::take(&mut self.pending) {
            self.emit(p.verbosity, p.elapsed, &p.message);
        }
        if let Some(sink) = self.sink.as_mut() {
            let _ = sink.flush();
        }
    }
}

/// Leveled logger with error/warning counters.
pub struct Logger {
    state: Mutex<State>,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogConfig::default())
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.lock();
        f.debug_struct("Logger")
            .field("config", &state.config)
            .field("num_errors", &state.num_errors)
            .field("num_warnings", &state.num_warnings)
            .field("pending", &state.pending.len())
            .finish()
    }
}

impl Logger {
    /// Logger printing to stdout, errors to stderr.
    pub fn new(config: LogConfig) -> Self {
        Self::from_parts(config, None)
    }

    /// Logger printing every level to `sink`.
    pub fn with_sink<W: Write + Send + 'static>(config: LogConfig, sink: W) -> Self {
        Self::from_parts(config, Some(Box::new(sink)))
    }

    fn from_parts(config: LogConfig, sink: Option<Box<dyn Write + Send>>) -> Self {
        Self {
            state: Mutex::new(State {
                config,
                start: Instant::now(),
                num_errors: 0,
                num_warnings: 0,
                pending: Vec::new(),
                sink,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn config(&self) -> LogConfig {
        self.lock().config.clone()
    }

    pub fn set_config(&self, config: LogConfig) {
        self.lock().config = config;
    }

    /// Restore default settings, restart the clock and drop pending
    /// messages and counters. The sink is kept.
    pub fn reset(&self) {
        let mut state = self.lock();
        state.config = LogConfig::default();
        state.start = Instant::now();
        state.num_errors = 0;
        state.num_warnings = 0;
        state.pending.clear();
    }

    pub fn num_errors(&self) -> usize {
        self.lock().num_errors
    }

    pub fn num_warnings(&self) -> usize {
        self.lock().num_warnings
    }

    /// Messages held in the buffer.
    pub fn num_pending(&self) -> usize {
        self.lock().pending.len()
    }

    pub fn flush(&self) {
        self.lock().flush();
    }

    /// Record `message` at `verbosity`, printing or buffering it per the
    /// configuration. Errors and warnings are counted even when filtered.
    pub fn log_message(&self, verbosity: Verbosity, message: &str) {
        if verbosity == Verbosity::Off {
            return;
        }
        let mut state = self.lock();
        match verbosity {
            Verbosity::Error => state.num_errors += 1,
            Verbosity::Warn => state.num_warnings += 1,
            _ => {}
        }
        if verbosity <= state.config.max_verbosity {
            let elapsed = state.start.elapsed();
            if state.config.buffered {
                state.pending.push(Pending {
                    verbosity,
                    elapsed,
                    message: message.to_owned(),
                });
                if state.pending.len() >= state.config.flush_threshold {
                    state.flush();
                }
            } else {
                state.emit(verbosity, elapsed, message);
            }
        }
        if verbosity == Verbosity::Error && state.config.exit_on_error {
            state.flush();
            drop(state);
            std::process::exit(1);
        }
    }

    pub fn error(&self, message: &str) {
        self.log_message(Verbosity::Error, message);
    }

    pub fn warn(&self, message: &str) {
        self.log_message(Verbosity::Warn, message);
    }

    pub fn info(&self, message: &str) {
        self.log_message(Verbosity::Info, message);
    }

    pub fn debug(&self, message: &str) {
        self.log_message(Verbosity::Debug, message);
    }

    pub fn trace(&self, message: &str) {
        self.log_message(Verbosity::Trace, message);
    }

    /// Make this logger the global `log` backend.
    pub fn install(self) -> Result<(), log::SetLoggerError> {
        let filter = self.config().max_verbosity.to_level_filter();
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(filter);
        Ok(())
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        Verbosity::from(metadata.level()) <= self.lock().config.max_verbosity
    }

    fn log(&self, record: &log::Record<'_>) {
        self.log_message(record.level().into(), &record.args().to_string());
    }

    fn flush(&self) {
        Logger::flush(self);
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        self.lock().flush();
    }
}
