//! Line-oriented input and output for quiz sessions.
//!
//! The session engine only sees these two traits, so it runs the same
//! against a terminal, a file, or an in-memory script.

use std::io;

use async_trait::async_trait;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

// ---------------------------------------------------------------------------
// Reader
// ---------------------------------------------------------------------------

/// Source of player answers, one line at a time.
#[async_trait]
pub trait LineReader: Send {
    /// Wait for the next line, without its terminator.
    ///
    /// A closed or exhausted stream is an error, not an empty answer.
    async fn read_line(&mut self) -> io::Result<String>;
}

/// [`LineReader`] over any buffered async byte stream.
///
/// A line must end in `\n` (optionally preceded by `\r`). Input that ends
/// without a terminator counts as an exhausted stream.
pub struct BufLineReader<R> {
    inner: R,
}

impl<R> BufLineReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }
}

/// Answers from the process's standard input.
pub fn stdin() -> BufLineReader<BufReader<tokio::io::Stdin>> {
    BufLineReader::new(BufReader::new(tokio::io::stdin()))
}

#[async_trait]
impl<R: AsyncBufRead + Unpin + Send> LineReader for BufLineReader<R> {
    async fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        let read = self.inner.read_line(&mut line).await?;
        if read == 0 || !line.ends_with('\n') {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before a full line was read",
            ));
        }
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }
}

// ---------------------------------------------------------------------------
// Writer
// ---------------------------------------------------------------------------

/// Sink for prompts and score reports.
///
/// Writes are fire-and-forget: a sink that fails to write drops the line.
#[async_trait]
pub trait LineWriter: Send {
    async fn write_line(&mut self, line: &str);
}

/// [`LineWriter`] over any async byte sink. Each line is flushed at once so
/// prompts show up before the session blocks on input.
pub struct StreamLineWriter<W> {
    inner: W,
}

impl<W> StreamLineWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

/// Prompts to the process's standard output.
pub fn stdout() -> StreamLineWriter<tokio::io::Stdout> {
    StreamLineWriter::new(tokio::io::stdout())
}

#[async_trait]
impl<W: AsyncWrite + Unpin + Send> LineWriter for StreamLineWriter<W> {
    async fn write_line(&mut self, line: &str) {
        let written = async {
            self.inner.write_all(line.as_bytes()).await?;
            self.inner.write_all(b"\n").await?;
            self.inner.flush().await
        }
        .await;
        if let Err(e) = written {
            tracing::debug!("dropped output line: {e}");
        }
    }
}

/// Collects lines in memory.
#[async_trait]
impl LineWriter for Vec<String> {
    async fn write_line(&mut self, line: &str) {
        self.push(line.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn reads_lines_without_terminators() {
        let mut reader = BufLineReader::new(&b"\n7\r\n  two words \n"[..]);
        assert_eq!(reader.read_line().await.unwrap(), "");
        assert_eq!(reader.read_line().await.unwrap(), "7");
        assert_eq!(reader.read_line().await.unwrap(), "  two words ");
    }

    #[tokio::test]
    async fn exhausted_input_is_an_error() {
        let mut reader = BufLineReader::new(&b"7\n"[..]);
        reader.read_line().await.unwrap();
        let err = reader.read_line().await.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[tokio::test]
    async fn unterminated_last_line_is_an_error() {
        let mut reader = BufLineReader::new(&b"7"[..]);
        let err = reader.read_line().await.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[tokio::test]
    async fn stream_writer_appends_newlines() {
        let mut writer = StreamLineWriter::new(Vec::<u8>::new());
        writer.write_line("Question 1: 5+2").await;
        writer.write_line("").await;
        assert_eq!(writer.into_inner(), b"Question 1: 5+2\n\n");
    }
}
