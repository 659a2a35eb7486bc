use tokio::io::{self, AsyncBufReadExt, AsyncRead, AsyncReadExt, BufReader};

/// Longest line accepted, not counting its terminator.
pub const MAX_LINE_LEN: usize = 64 * 1024;

/// Incremental newline scanner over an async byte stream.
///
/// Yields each line without its `\n` (and without a `\r` right before it).
/// A final chunk with no terminator is still yielded.
pub struct Lines<R> {
    reader: BufReader<R>,
    buf: Vec<u8>,
}

impl<R: AsyncRead + Unpin> Lines<R> {
    pub fn new(reader: R) -> Self {
        Lines {
            reader: BufReader::new(reader),
            buf: Vec::new(),
        }
    }

    /// Next line, or `None` once the stream is exhausted.
    pub async fn next_line(&mut self) -> io::Result<Option<&[u8]>> {
        self.buf.clear();

        let limit = MAX_LINE_LEN as u64 + 1;
        let n = (&mut self.reader)
            .take(limit)
            .read_until(b'\n', &mut self.buf)
            .await?;

        if n == 0 {
            return Ok(None);
        }

        if self.buf.last() == Some(&b'\n') {
            self.buf.pop();
        } else if n as u64 == limit {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("line longer than {MAX_LINE_LEN} bytes"),
            ));
        }
        if self.buf.last() == Some(&b'\r') {
            self.buf.pop();
        }

        Ok(Some(self.buf.as_slice()))
    }
}
