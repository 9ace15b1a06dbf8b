// Copyright 2015 Axel Rasmussen
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

/// write provides adapters to use anything which implements Write as a logging
/// destination.
pub mod write;

use crate::error::*;
use crate::logging::write::*;
use lazy_static::lazy_static;
use log::{LevelFilter, Log, Metadata, Record};
use regex::Regex;
use std::collections::HashMap;
use std::io::Write;
use std::str::FromStr;

const RUST_LOG_ENV_VAR: &str = "RUST_LOG";

/// The level used when neither explicit filters nor RUST_LOG are given. A
/// command-line program should be quiet unless something goes wrong.
pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::Warn;

/// This is a utility function which provides a way to parse a log::LevelFilter
/// from a string, ignoring case and surrounding whitespace.
pub fn parse_log_level_filter(s: &str) -> Result<LevelFilter> {
    lazy_static! {
        static ref STRING_MAPPING: HashMap<String, LevelFilter> = LevelFilter::iter()
            .map(|l| (l.to_string().to_lowercase(), l))
            .collect();
    }

    match STRING_MAPPING.get(&s.trim().to_lowercase()) {
        None => Err(Error::InvalidArgument(format!(
            "invalid LevelFilter '{}'",
            s
        ))),
        Some(f) => Ok(*f),
    }
}

/// A LogFilter is a single filter, perhaps one of many, that can be applied to
/// log messages before actually outputting them.
pub struct LogFilter {
    /// This LogFilter is applied to any modules which match this regular
    /// expression (anchored at the start of the module path). If this field is
    /// None instead, then this LogFilter applies to *all* modules.
    pub module: Option<Regex>,
    /// The LevelFilter which should be applied to matching modules.
    pub level: LevelFilter,
}

impl LogFilter {
    /// The LevelFilter this LogFilter applies to the given module, or None if
    /// it doesn't match the module at all.
    pub fn max_level_for(&self, module_path: &str) -> Option<LevelFilter> {
        match self.module {
            None => Some(self.level),
            Some(ref module) => match module.is_match(module_path) {
                false => None,
                true => Some(self.level),
            },
        }
    }
}

impl FromStr for LogFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<LogFilter> {
        match s.rfind('=') {
            None => Ok(LogFilter {
                module: None,
                level: parse_log_level_filter(s)?,
            }),
            Some(eq_pos) => Ok(LogFilter {
                module: Some(Regex::new(&format!("^{}", &s[..eq_pos]))?),
                level: parse_log_level_filter(&s[eq_pos + 1..])?,
            }),
        }
    }
}

/// LogFilters is a set of LogFilter, parsed from a string of the form
/// "regex=level;regex=level;level". A bare level applies to every module.
pub struct LogFilters(pub Vec<LogFilter>);

impl LogFilters {
    /// Returns the LevelFilter which should be applied to the given module. If
    /// multiple filters match, the *lowest* (most restrictive) one wins. If
    /// none match, the given fallback is returned.
    pub fn max_level_for(&self, module_path: &str, fallback: LevelFilter) -> LevelFilter {
        self.0
            .iter()
            .filter_map(|f| f.max_level_for(module_path))
            .min()
            .unwrap_or(fallback)
    }

    /// The most verbose level any of these filters enables, or None if there
    /// are no filters.
    pub fn max_level(&self) -> Option<LevelFilter> {
        self.0.iter().map(|f| f.level).max()
    }
}

impl FromStr for LogFilters {
    type Err = Error;

    fn from_str(s: &str) -> Result<LogFilters> {
        let filters: Result<Vec<LogFilter>> = s
            .split(';')
            .filter(|f| !f.trim().is_empty())
            .map(|f| f.parse())
            .collect();
        Ok(LogFilters(filters?))
    }
}

/// Options controls how a Logger filters and formats log records.
pub struct Options {
    /// Filters controlling which log statements are enabled.
    pub filters: LogFilters,
    /// The level applied to modules no filter matches.
    pub default_level: LevelFilter,
    /// The global maximum enabled logging level.
    pub max_level: LevelFilter,
    /// The program name each record is prefixed with.
    pub program: String,
    /// Whether or not to prefix each record with a UTC timestamp.
    pub timestamps: bool,
    /// Where to write log output to.
    pub output_factory: LogOutputFactory,
    /// If true, call flush() after each log statement.
    pub always_flush: bool,
}

/// OptionsBuilder assembles Options; any field left unset falls back to the
/// RUST_LOG environment variable or a sensible default.
#[derive(Default)]
pub struct OptionsBuilder {
    filters: Option<LogFilters>,
    program: Option<String>,
    timestamps: Option<bool>,
    output_factory: Option<LogOutputFactory>,
    always_flush: Option<bool>,
}

impl OptionsBuilder {
    /// Start with every option unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use these filters instead of RUST_LOG.
    pub fn set_filters(mut self, filters: LogFilters) -> Self {
        self.filters = Some(filters);
        self
    }

    /// Set the program name records are prefixed with.
    pub fn set_program(mut self, program: &str) -> Self {
        self.program = Some(program.to_owned());
        self
    }

    /// Enable or disable timestamps (disabled by default).
    pub fn set_timestamps(mut self, timestamps: bool) -> Self {
        self.timestamps = Some(timestamps);
        self
    }

    /// Send log output somewhere other than stderr.
    pub fn set_output_factory(mut self, output_factory: LogOutputFactory) -> Self {
        self.output_factory = Some(output_factory);
        self
    }

    /// Send log output to the given shared writer.
    pub fn set_output_to<T: Write + Send + 'static>(
        self,
        output_writer: SyncWriteAdapter<T>,
    ) -> Self {
        self.set_output_factory(new_log_output_factory(output_writer))
    }

    /// Flush after every record (disabled by default).
    pub fn set_always_flush(mut self, always_flush: bool) -> Self {
        self.always_flush = Some(always_flush);
        self
    }

    /// Build the final Options. This fails if RUST_LOG is consulted and can't
    /// be parsed.
    pub fn build(self) -> Result<Options> {
        let filters: LogFilters = match self.filters {
            Some(filters) => filters,
            None => match get_env_var(RUST_LOG_ENV_VAR)? {
                None => LogFilters(vec![]),
                Some(filters_str) => filters_str.parse()?,
            },
        };
        let max_level = filters
            .max_level()
            .map_or(DEFAULT_LEVEL, |l| l.max(DEFAULT_LEVEL));

        Ok(Options {
            filters: filters,
            default_level: DEFAULT_LEVEL,
            max_level: max_level,
            program: self.program.unwrap_or_else(|| env!("CARGO_PKG_NAME").to_owned()),
            timestamps: self.timestamps.unwrap_or(false),
            output_factory: self
                .output_factory
                .unwrap_or_else(|| Box::new(|| Box::new(::std::io::stderr()))),
            always_flush: self.always_flush.unwrap_or(false),
        })
    }
}

fn get_env_var(key: &str) -> Result<Option<String>> {
    match ::std::env::var(key) {
        Ok(v) => Ok(Some(v)),
        Err(::std::env::VarError::NotPresent) => Ok(None),
        Err(::std::env::VarError::NotUnicode(_)) => Err(Error::InvalidArgument(format!(
            "environment variable '{}' not valid unicode",
            key
        ))),
    }
}

/// Format a single log record as one line (without the trailing newline).
pub fn format_log_record(options: &Options, record: &Record) -> String {
    let timestamp = match options.timestamps {
        false => String::new(),
        true => format!(
            "{} ",
            chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
        ),
    };
    format!(
        "{}{}: [{}] {}",
        timestamp,
        options.program,
        record.level(),
        record.args()
    )
}

/// Logger writes log records to the output configured in its Options.
/// Output failures are ignored; a CLI should keep working even if it can't
/// log.
pub struct Logger {
    options: Options,
}

impl Logger {
    /// Construct a new Logger using the given options.
    pub fn new(options: Options) -> Self {
        Logger { options: options }
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level()
            <= self
                .options
                .filters
                .max_level_for(metadata.target(), self.options.default_level)
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let mut output = (self.options.output_factory)();
        let _ = writeln!(output, "{}", format_log_record(&self.options, record));
        if self.options.always_flush {
            let _ = output.flush();
        }
    }

    fn flush(&self) {
        let _ = (self.options.output_factory)().flush();
    }
}

/// Install a Logger with the given options as the global logger.
pub fn try_init(options: Options) -> Result<()> {
    let logger = Logger::new(options);
    log::set_max_level(logger.options.max_level);
    log::set_boxed_logger(Box::new(logger))?;
    Ok(())
}
