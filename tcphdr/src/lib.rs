#![warn(missing_debug_implementations, rust_2018_idioms)]

//! Decode fixed 20-byte tcp headers and derive response headers from them.
//!
//! Multi-byte fields are stored least significant byte first. A header is
//! inspected with [`decode`], answered with [`respond`], and its flags byte is
//! rewritten with [`set_flags`]. The [`file`] module moves header blobs to and
//! from disk.

#[macro_use]
mod macros;

mod error;
pub use error::{Error, Result};

mod header;
pub use header::{TcpHeader, TCP_HEADER_LEN, TCP_HEADER_TEMPLATE, TCP_REMAINDER_LEN};

pub mod flags;
pub use flags::{set_flags, FlagName, TcpFlags};

mod decode;
pub use decode::{decode, DecodedHeader};

mod respond;
pub use respond::{answer_flags, make_response, respond, scramble_port};
pub use respond::{PORT_SCRAMBLE_BIT, PORT_SCRAMBLE_MASK};

pub mod file;
