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

use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// A LogOutputFactory produces the writer each log record is written to.
pub type LogOutputFactory = Box<dyn Fn() -> Box<dyn Write> + Send + Sync>;

fn poisoned<T>(_: PoisonError<T>) -> io::Error {
    io::Error::new(io::ErrorKind::Other, "log output lock poisoned")
}

/// SyncWriteAdapter shares a single writer between every log call, so that
/// e.g. an in-memory buffer can collect all of a program's log output.
pub struct SyncWriteAdapter<T: Write> {
    writer: Arc<Mutex<T>>,
}

impl<T: Write + Send + 'static> SyncWriteAdapter<T> {
    /// Wrap the given writer.
    pub fn new(writer: T) -> Self {
        SyncWriteAdapter {
            writer: Arc::new(Mutex::new(writer)),
        }
    }

    /// Lock the underlying writer, e.g. to inspect what has been written.
    pub fn lock(&self) -> io::Result<MutexGuard<T>> {
        self.writer.lock().map_err(poisoned)
    }
}

impl<T: Write + Send + 'static> Write for SyncWriteAdapter<T> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.lock()?.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.lock()?.flush()
    }
}

// Clone cannot be derived in this case, due to something like:
// https://github.com/rust-lang/rust/issues/26925
impl<T: Write + Send + 'static> Clone for SyncWriteAdapter<T> {
    fn clone(&self) -> Self {
        SyncWriteAdapter {
            writer: self.writer.clone(),
        }
    }
}

/// Returns a LogOutputFactory which hands out handles to the given writer.
pub fn new_log_output_factory<T: Write + Send + 'static>(
    writer: SyncWriteAdapter<T>,
) -> LogOutputFactory {
    Box::new(move || Box::new(writer.clone()))
}
