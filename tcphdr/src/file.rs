//! Loading and storing raw header blobs.

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::header::TCP_HEADER_LEN;

/// Read exactly one header from `src`.
///
/// A source shorter than a header yields [`io::ErrorKind::UnexpectedEof`].
/// Bytes past the header are left unread.
pub fn read_header<R: Read>(mut src: R) -> io::Result<[u8; TCP_HEADER_LEN]> {
    let mut buf = [0; TCP_HEADER_LEN];
    src.read_exact(&mut buf)?;
    Ok(buf)
}

/// Write exactly one header to `dst` and flush it.
pub fn write_header<W: Write>(mut dst: W, header: &[u8; TCP_HEADER_LEN]) -> io::Result<()> {
    dst.write_all(header)?;
    dst.flush()
}

/// Load the header stored at the start of `path`.
pub fn load<P: AsRef<Path>>(path: P) -> Result<[u8; TCP_HEADER_LEN]> {
    let path = path.as_ref();
    let header = File::open(path)
        .and_then(read_header)
        .map_err(|e| Error::io(path, e))?;
    info!(path = %path.display(), "loaded header");
    debug!(bytes = ?header);
    Ok(header)
}

/// Store `header` at `path`, replacing any previous content.
pub fn store<P: AsRef<Path>>(path: P, header: &[u8; TCP_HEADER_LEN]) -> Result<()> {
    let path = path.as_ref();
    File::create(path)
        .and_then(|f| write_header(f, header))
        .map_err(|e| Error::io(path, e))?;
    info!(path = %path.display(), "stored header");
    Ok(())
}
