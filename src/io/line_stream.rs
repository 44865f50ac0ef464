//! Fixed-capacity buffered line reader

use crate::error::{LevelError, Result};
use crate::notification::{NotificationCollection, NotificationType};
use std::borrow::Cow;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

/// Buffer capacity used by the level loader
pub const DEFAULT_CAPACITY: usize = 256;

/// What `next_line` hands back for a line longer than one chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlongLines {
    /// Stitch every chunk of the line together.
    #[default]
    Concatenate,
    /// Return only the final chunk of the line; earlier chunks are dropped.
    KeepTail,
}

/// Configuration for a [`LineStream`].
#[derive(Debug, Clone)]
pub struct LineStreamConfiguration {
    /// Chunk buffer size in bytes. One byte is reserved, so a chunk holds at
    /// most `capacity - 1` bytes. Must be at least 2.
    pub capacity: usize,
    /// Handling of lines that span several chunks.
    ///
    /// Default: [`OverlongLines::Concatenate`].
    pub overlong_lines: OverlongLines,
}

impl Default for LineStreamConfiguration {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            overlong_lines: OverlongLines::default(),
        }
    }
}

/// Sequential line reader over a file, using a fixed-size chunk buffer.
///
/// The handle and the buffer are owned together: dropping the stream closes
/// the file, and a failed constructor drops whatever it already acquired.
/// Byte views returned by the read methods borrow the stream and are only
/// valid until the next read.
#[derive(Debug)]
pub struct LineStream<R: Read = File> {
    reader: BufReader<R>,
    buffer: Vec<u8>,
    capacity: usize,
    unfinished: bool,
    line: Vec<u8>,
    /// `line` holds the start of a line whose read failed
    partial_line: bool,
    /// Read error met after part of a chunk was already consumed
    pending_error: Option<io::Error>,
    overlong_lines: OverlongLines,
    line_number: usize,
}

impl LineStream<File> {
    /// Open `path` for reading with a chunk buffer of `capacity` bytes
    pub fn open<P: AsRef<Path>>(path: P, capacity: usize) -> Result<Self> {
        Self::open_with(
            path,
            LineStreamConfiguration {
                capacity,
                ..Default::default()
            },
        )
    }

    /// Open `path` for reading with an explicit configuration
    pub fn open_with<P: AsRef<Path>>(path: P, config: LineStreamConfiguration) -> Result<Self> {
        let path = path.as_ref();
        check_capacity(config.capacity)?;

        let file = File::open(path).map_err(|source| LevelError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!(
            "Opened line stream '{}' (capacity {})",
            path.display(),
            config.capacity
        );

        // `file` is dropped here if the buffer cannot be allocated
        Self::from_reader_with(file, config)
    }
}

impl<R: Read> LineStream<R> {
    /// Wrap any reader with a chunk buffer of `capacity` bytes
    pub fn from_reader(reader: R, capacity: usize) -> Result<Self> {
        Self::from_reader_with(
            reader,
            LineStreamConfiguration {
                capacity,
                ..Default::default()
            },
        )
    }

    /// Wrap any reader with an explicit configuration
    pub fn from_reader_with(reader: R, config: LineStreamConfiguration) -> Result<Self> {
        check_capacity(config.capacity)?;
        let buffer = allocate(config.capacity)?;

        Ok(Self {
            reader: BufReader::new(reader),
            buffer,
            capacity: config.capacity,
            unfinished: false,
            line: Vec::new(),
            partial_line: false,
            pending_error: None,
            overlong_lines: config.overlong_lines,
            line_number: 0,
        })
    }

    /// Chunk buffer size this stream was created with
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether the most recent chunk stopped short of a line terminator
    pub fn is_unfinished(&self) -> bool {
        self.unfinished
    }

    /// Number of logical lines returned by `next_line` so far
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Read the next chunk: up to `capacity - 1` bytes, ending early after `\n`.
    ///
    /// Returns `None` once no byte can be read. Otherwise the chunk is marked
    /// unfinished when it does not end with a line terminator.
    ///
    /// A read that fails after some bytes were taken returns those bytes
    /// first; the error is reported by the following call.
    pub fn next_chunk(&mut self) -> Result<Option<&[u8]>> {
        self.partial_line = false;
        if self.read_chunk()? == 0 {
            return Ok(None);
        }
        Ok(Some(self.buffer.as_slice()))
    }

    /// Read the next logical line, terminator included when present.
    ///
    /// Any remainder of a line left unfinished by [`next_chunk`](Self::next_chunk)
    /// is skipped first. Lines longer than one chunk are returned according to
    /// the configured [`OverlongLines`] policy. The stream is never unfinished
    /// after a successful call, and it keeps returning `None` once exhausted.
    ///
    /// When a read fails mid-line the bytes gathered so far are kept, and the
    /// next call resumes the same line.
    pub fn next_line(&mut self) -> Result<Option<&[u8]>> {
        if !self.partial_line {
            while self.unfinished {
                if self.read_chunk()? == 0 {
                    break;
                }
            }
            self.line.clear();
            self.partial_line = true;
        }

        loop {
            if self.read_chunk()? == 0 {
                break;
            }

            if self.overlong_lines == OverlongLines::KeepTail {
                self.line.clear();
            }
            self.line
                .try_reserve(self.buffer.len())
                .map_err(|_| LevelError::Allocation {
                    requested: self.line.len() + self.buffer.len(),
                })?;
            self.line.extend_from_slice(&self.buffer);

            if !self.unfinished {
                break;
            }
        }
        self.partial_line = false;
        self.unfinished = false;

        // chunks are never empty, so an empty line means nothing was read
        if self.line.is_empty() {
            return Ok(None);
        }
        self.line_number += 1;
        Ok(Some(self.line.as_slice()))
    }

    /// Concatenate the next `n` lines.
    ///
    /// Fails with [`LevelError::InsufficientLines`] if the stream ends first;
    /// the lines read up to that point are dropped.
    pub fn collect_n_lines(&mut self, n: usize) -> Result<String> {
        let mut result = String::new();
        for found in 0..n {
            match self.next_line()? {
                Some(line) => result.push_str(&decode_text(line)),
                None => return Err(LevelError::InsufficientLines { expected: n, found }),
            }
        }
        Ok(result)
    }

    /// Concatenate every remaining line.
    ///
    /// A read error ends collection the same way end of input does. Use
    /// [`collect_until_end_with`](Self::collect_until_end_with) to see the
    /// error, or [`try_collect_until_end`](Self::try_collect_until_end) to
    /// propagate it.
    pub fn collect_until_end(&mut self) -> String {
        self.collect_until_end_with(&mut NotificationCollection::new())
    }

    /// Concatenate every remaining line, recording a read error that ends
    /// collection early as a [`NotificationType::Error`] notification
    pub fn collect_until_end_with(&mut self, notifications: &mut NotificationCollection) -> String {
        let mut result = String::new();
        loop {
            match self.next_line() {
                Ok(Some(line)) => result.push_str(&decode_text(line)),
                Ok(None) => break,
                Err(e) => {
                    notifications.notify(
                        NotificationType::Error,
                        format!(
                            "Stopped collecting lines after line {}: {}",
                            self.line_number, e
                        ),
                    );
                    break;
                }
            }
        }
        result
    }

    /// Concatenate every remaining line, propagating read errors
    pub fn try_collect_until_end(&mut self) -> Result<String> {
        let mut result = String::new();
        while let Some(line) = self.next_line()? {
            result.push_str(&decode_text(line));
        }
        Ok(result)
    }

    /// Iterate over the remaining lines as owned text.
    ///
    /// The iterator yields one `Err` for a failed read and then stops.
    pub fn lines(&mut self) -> Lines<'_, R> {
        Lines {
            stream: self,
            done: false,
        }
    }

    /// Fill `buffer` with the next chunk and update `unfinished`
    fn read_chunk(&mut self) -> Result<usize> {
        self.buffer.clear();
        if let Some(e) = self.pending_error.take() {
            return Err(e.into());
        }
        let limit = self.capacity - 1;

        while self.buffer.len() < limit {
            let available = match self.reader.fill_buf() {
                Ok(available) => available,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) if self.buffer.is_empty() => return Err(e.into()),
                Err(e) => {
                    self.pending_error = Some(e);
                    break;
                }
            };
            if available.is_empty() {
                break;
            }

            let room = limit - self.buffer.len();
            let window = &available[..available.len().min(room)];
            let (taken, complete) = match window.iter().position(|&b| b == b'\n') {
                Some(i) => (i + 1, true),
                None => (window.len(), false),
            };
            self.buffer.extend_from_slice(&window[..taken]);
            self.reader.consume(taken);

            if complete {
                break;
            }
        }

        self.unfinished = matches!(self.buffer.last(), Some(&last) if last != b'\n');
        Ok(self.buffer.len())
    }
}

/// Iterator over the remaining lines of a [`LineStream`].
#[derive(Debug)]
pub struct Lines<'a, R: Read> {
    stream: &'a mut LineStream<R>,
    done: bool,
}

impl<R: Read> Iterator for Lines<'_, R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.stream.next_line() {
            Ok(Some(line)) => Some(Ok(decode_text(line).into_owned())),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

/// Decode level text: UTF-8 when valid, Windows-1252 otherwise
pub fn decode_text(bytes: &[u8]) -> Cow<'_, str> {
    match std::str::from_utf8(bytes) {
        Ok(s) => Cow::Borrowed(s),
        Err(_) => encoding_rs::WINDOWS_1252.decode_without_bom_handling(bytes).0,
    }
}

fn check_capacity(capacity: usize) -> Result<()> {
    if capacity < 2 {
        return Err(LevelError::InvalidCapacity(capacity));
    }
    Ok(())
}

fn allocate(capacity: usize) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(capacity)
        .map_err(|_| LevelError::Allocation {
            requested: capacity,
        })?;
    Ok(buffer)
}
