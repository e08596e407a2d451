use std::collections::VecDeque;
use std::fmt::{self, Display};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Error as IoError, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use tracing::debug;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Mode {
    Read,
    Write,
}

/// A text file opened for either reading or writing whitespace-separated values.
///
/// The file is closed, and any buffered output flushed, when the handle is dropped. Call
/// [`TextFile::flush`] first to observe write errors.
pub struct TextFile {
    path: PathBuf,
    stream: Stream,
}

enum Stream {
    Reader {
        reader: BufReader<File>,
        tokens: VecDeque<String>,
    },
    Writer(BufWriter<File>),
}

impl TextFile {
    pub fn open(path: impl AsRef<Path>, mode: Mode) -> Result<Self, TextFileError> {
        let path = path.as_ref().to_owned();

        let stream = match mode {
            Mode::Read => Stream::Reader {
                reader: BufReader::new(File::open(&path)?),
                tokens: VecDeque::new(),
            },
            Mode::Write => Stream::Writer(BufWriter::new(File::create(&path)?)),
        };

        debug!(path = %path.display(), ?mode, "Opened text file.");

        Ok(Self { path, stream })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn mode(&self) -> Mode {
        match self.stream {
            Stream::Reader { .. } => Mode::Read,
            Stream::Writer(_) => Mode::Write,
        }
    }

    /// Writes any displayable value, without separators.
    pub fn write(&mut self, value: impl Display) -> Result<(), TextFileError> {
        write!(self.writer()?, "{value}")?;
        Ok(())
    }

    pub fn write_int(&mut self, value: i64) -> Result<(), TextFileError> {
        self.write(value)
    }

    pub fn write_float(&mut self, value: f64) -> Result<(), TextFileError> {
        self.write(value)
    }

    pub fn write_str(&mut self, value: &str) -> Result<(), TextFileError> {
        self.write(value)
    }

    pub fn newline(&mut self) -> Result<(), TextFileError> {
        self.write('\n')
    }

    pub fn tab(&mut self) -> Result<(), TextFileError> {
        self.write('\t')
    }

    pub fn flush(&mut self) -> Result<(), TextFileError> {
        self.writer()?.flush()?;
        Ok(())
    }

    /// Reads the next whitespace-separated token and parses it.
    pub fn read<T: FromStr>(&mut self) -> Result<T, TextFileError> {
        let token = self.next_token()?;
        token.parse().map_err(|_| TextFileError::Parse(token))
    }

    pub fn read_int(&mut self) -> Result<i64, TextFileError> {
        self.read()
    }

    pub fn read_float(&mut self) -> Result<f64, TextFileError> {
        self.read()
    }

    fn writer(&mut self) -> Result<&mut BufWriter<File>, TextFileError> {
        match &mut self.stream {
            Stream::Writer(writer) => Ok(writer),
            Stream::Reader { .. } => Err(TextFileError::Mode("file was opened for reading")),
        }
    }

    fn next_token(&mut self) -> Result<String, TextFileError> {
        let (reader, tokens) = match &mut self.stream {
            Stream::Reader { reader, tokens } => (reader, tokens),
            Stream::Writer(_) => return Err(TextFileError::Mode("file was opened for writing")),
        };

        loop {
            if let Some(token) = tokens.pop_front() {
                return Ok(token);
            }

            let mut line = String::new();
            if reader.read_line(&mut line)? == 0 {
                return Err(TextFileError::UnexpectedEof);
            }
            tokens.extend(line.split_whitespace().map(str::to_owned));
        }
    }
}

impl fmt::Debug for TextFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextFile")
            .field("path", &self.path)
            .field("mode", &self.mode())
            .finish()
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TextFileError {
    Io(String),
    UnexpectedEof,
    Parse(String),
    Mode(&'static str),
}

impl From<IoError> for TextFileError {
    fn from(error: IoError) -> Self {
        TextFileError::Io(error.to_string())
    }
}

impl Display for TextFileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextFileError::Io(error) => write!(f, "i/o error: {error}"),
            TextFileError::UnexpectedEof => write!(f, "unexpected end of file"),
            TextFileError::Parse(token) => write!(f, "could not parse {token:?}"),
            TextFileError::Mode(reason) => write!(f, "wrong mode: {reason}"),
        }
    }
}

impl std::error::Error for TextFileError {}
