use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt};

use crate::{lines::Lines, Error, Result};

/// Copy `reader` to `writer` line by line, upper-casing each line.
///
/// Every line is written and flushed as soon as it is read. Returns the number
/// of lines written once `reader` reaches end of stream.
pub async fn transform<R, W>(reader: R, mut writer: W) -> Result<u64>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = Lines::new(reader);
    let mut count = 0;

    while let Some(line) = lines.next_line().await.map_err(Error::Read)? {
        let mut upper = uppercase(line);
        upper.push('\n');

        writer
            .write_all(upper.as_bytes())
            .await
            .map_err(Error::Write)?;
        writer.flush().await.map_err(Error::Write)?;
        count += 1;
    }

    Ok(count)
}

/// Invalid UTF-8 becomes U+FFFD before mapping.
pub fn uppercase(line: &[u8]) -> String {
    String::from_utf8_lossy(line).to_uppercase()
}
