use std::io;
use std::path::PathBuf;

use massres_common::config::InputSource;
use thiserror::Error;
use tokio::fs::File;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::debug;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("cannot open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot read from {origin}: {source}")]
    Read {
        origin: InputSource,
        #[source]
        source: io::Error,
    },
}

/// Reads raw lines one at a time from a single input source.
///
/// The underlying handle is released when the source is dropped, which happens
/// either after end-of-stream or on the first read failure.
pub struct LineSource {
    reader: Box<dyn AsyncBufRead + Unpin + Send>,
    origin: InputSource,
    buf: Vec<u8>,
}

impl LineSource {
    pub async fn open(source: &InputSource) -> Result<Self, InputError> {
        let reader: Box<dyn AsyncBufRead + Unpin + Send> = match source {
            InputSource::Stdin => Box::new(BufReader::new(tokio::io::stdin())),
            InputSource::File(path) => {
                let file = File::open(path).await.map_err(|source| InputError::Open {
                    path: path.clone(),
                    source,
                })?;
                Box::new(BufReader::new(file))
            }
        };
        debug!("Reading hostnames from {source}");
        Ok(Self::from_reader(reader, source.clone()))
    }

    pub fn from_reader<R>(reader: R, origin: InputSource) -> Self
    where
        R: AsyncBufRead + Unpin + Send + 'static,
    {
        Self {
            reader: Box::new(reader),
            origin,
            buf: Vec::new(),
        }
    }

    pub fn origin(&self) -> &InputSource {
        &self.origin
    }

    /// Next raw line, trailing newline included, or `None` at end-of-stream.
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than rejected; such a line
    /// simply fails validation later on.
    pub async fn next_line(&mut self) -> Result<Option<String>, InputError> {
        self.buf.clear();
        let read = self
            .reader
            .read_until(b'\n', &mut self.buf)
            .await
            .map_err(|source| InputError::Read {
                origin: self.origin.clone(),
                source,
            })?;

        if read == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&self.buf).into_owned()))
    }
}
