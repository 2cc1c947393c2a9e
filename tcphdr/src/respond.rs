use tracing::debug;

use crate::error::Result;
use crate::flags::{TcpFlags, SYN_ACK_BITS};
use crate::header::{TcpHeader, TCP_HEADER_LEN, TCP_HEADER_TEMPLATE};

/// Source ports with this bit set are scrambled.
pub const PORT_SCRAMBLE_BIT: u16 = 0x8000;

/// XOR pattern applied to scrambled source ports.
pub const PORT_SCRAMBLE_MASK: u16 = 0x1020;

/// Flip bits 5 and 12 of `port` when bit 15 is set.
#[inline]
pub fn scramble_port(port: u16) -> u16 {
    if port & PORT_SCRAMBLE_BIT != 0 {
        port ^ PORT_SCRAMBLE_MASK
    } else {
        port
    }
}

/// Promote a SYN request to SYN+ACK. Anything else is echoed back.
#[inline]
pub fn answer_flags(request: TcpFlags) -> TcpFlags {
    if request.contains(TcpFlags::SYN) {
        request | SYN_ACK_BITS
    } else {
        request
    }
}

/// Derive a reply header from `request`.
///
/// The reply's bytes 0..2 are the request's bytes 2..4, its bytes 2..4 hold
/// the (possibly scrambled) request source port, its sequence number is the
/// request sequence number plus one and its acknowledgement number is the
/// request sequence number. Offset 12 and bytes 14..20 are copied as-is.
pub fn make_response<T: AsRef<[u8]>>(request: &TcpHeader<T>) -> TcpHeader<[u8; TCP_HEADER_LEN]> {
    let src_port = request.src_port();
    let seq = request.seq_number();

    let reply_port = scramble_port(src_port);
    if reply_port != src_port {
        debug!(src_port, reply_port, "scrambled high source port");
    }

    let flags = answer_flags(request.flags());
    if flags != request.flags() {
        debug!(request = request.flags().raw(), reply = flags.raw(), "answering syn with syn+ack");
    }

    let mut response = TCP_HEADER_TEMPLATE;
    response.set_src_port(request.dst_port());
    response.set_dst_port(reply_port);
    response.set_seq_number(seq.wrapping_add(1));
    response.set_ack_number(seq);
    response.set_offset_byte(request.offset_byte());
    response.set_flags(flags);
    response.set_remainder(request.remainder());
    response
}

/// Checked form of [`make_response`] over raw bytes.
pub fn respond(request: &[u8]) -> Result<[u8; TCP_HEADER_LEN]> {
    let request = TcpHeader::new(request)?;
    Ok(make_response(&request).release())
}
