use crate::error::Result;
use crate::flags::FlagName;
use crate::header::TcpHeader;

/// The human-meaningful fields of a header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedHeader {
    /// Port at offsets 0..2.
    pub source_port: u16,
    /// Port at offsets 2..4.
    pub dest_port: u16,
    /// Sequence number at offsets 4..8.
    pub sequence: u32,
    /// Acknowledgement number at offsets 8..12.
    pub ack: u32,
    /// Set flags, URG first and FIN last.
    pub active_flags: Vec<FlagName>,
}

impl<T: AsRef<[u8]>> From<&TcpHeader<T>> for DecodedHeader {
    fn from(header: &TcpHeader<T>) -> Self {
        Self {
            source_port: header.src_port(),
            dest_port: header.dst_port(),
            sequence: header.seq_number(),
            ack: header.ack_number(),
            active_flags: header.flags().active().collect(),
        }
    }
}

/// Extract the named fields of a 20-byte header.
///
/// Fails with [`crate::Error::MalformedHeader`] before touching any byte when
/// `bytes` is not exactly one header long.
pub fn decode(bytes: &[u8]) -> Result<DecodedHeader> {
    let header = TcpHeader::new(bytes)?;
    Ok(DecodedHeader::from(&header))
}
