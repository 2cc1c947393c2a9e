use byteorder::{ByteOrder, LittleEndian};
use bytes::{Buf, BufMut};

use crate::error::{Error, Result};
use crate::flags::{set_flags, TcpFlags};

header_field_range_accessors! {
    (src_port, src_port_mut, 0..2),
    (dst_port, dst_port_mut, 2..4),
    (seq_num, seq_num_mut, 4..8),
    (ack_num, ack_num_mut, 8..12),
    (remainder, remainder_mut, 14..20),
}

header_field_val_accessors! {
    (offset_byte, offset_byte_mut, 12),
    (flags, flags_mut, 13),
}

/// Byte length of the fixed tcp header.
pub const TCP_HEADER_LEN: usize = 20;

/// Byte length of the opaque span at offsets 14..20.
pub const TCP_REMAINDER_LEN: usize = 6;

/// An all-zero header.
pub const TCP_HEADER_TEMPLATE: TcpHeader<[u8; TCP_HEADER_LEN]> = TcpHeader {
    buf: [0x00; TCP_HEADER_LEN],
};

/// A view over the 20 bytes of a tcp header.
///
/// Ports, sequence and acknowledgement numbers are stored least significant
/// byte first. Offset 12 and offsets 14..20 are opaque and only ever copied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TcpHeader<T> {
    buf: T,
}

impl<T: AsRef<[u8]>> TcpHeader<T> {
    /// Wrap `buf`, failing with [`Error::MalformedHeader`] unless it holds
    /// exactly [`TCP_HEADER_LEN`] bytes.
    #[inline]
    pub fn new(buf: T) -> Result<Self> {
        let len = buf.as_ref().len();
        if len == TCP_HEADER_LEN {
            Ok(Self { buf })
        } else {
            Err(Error::malformed(len))
        }
    }

    #[inline]
    pub fn new_unchecked(buf: T) -> Self {
        Self { buf }
    }

    #[inline]
    pub fn release(self) -> T {
        self.buf
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf.as_ref()[0..TCP_HEADER_LEN]
    }

    /// Copy the header into independent storage.
    #[inline]
    pub fn to_owned(&self) -> TcpHeader<[u8; TCP_HEADER_LEN]> {
        let mut buf = [0; TCP_HEADER_LEN];
        buf.copy_from_slice(self.as_bytes());
        TcpHeader { buf }
    }

    #[inline]
    pub fn src_port(&self) -> u16 {
        let data = src_port(self.buf.as_ref());
        LittleEndian::read_u16(data)
    }

    #[inline]
    pub fn dst_port(&self) -> u16 {
        let data = dst_port(self.buf.as_ref());
        LittleEndian::read_u16(data)
    }

    #[inline]
    pub fn seq_number(&self) -> u32 {
        let data = seq_num(self.buf.as_ref());
        LittleEndian::read_u32(data)
    }

    #[inline]
    pub fn ack_number(&self) -> u32 {
        let data = ack_num(self.buf.as_ref());
        LittleEndian::read_u32(data)
    }

    /// The raw byte at offset 12.
    #[inline]
    pub fn offset_byte(&self) -> u8 {
        *offset_byte(self.buf.as_ref())
    }

    #[inline]
    pub fn flags(&self) -> TcpFlags {
        TcpFlags::from(*flags(self.buf.as_ref()))
    }

    #[inline]
    pub fn fin(&self) -> bool {
        self.flags().contains(TcpFlags::FIN)
    }

    #[inline]
    pub fn syn(&self) -> bool {
        self.flags().contains(TcpFlags::SYN)
    }

    #[inline]
    pub fn rst(&self) -> bool {
        self.flags().contains(TcpFlags::RST)
    }

    #[inline]
    pub fn psh(&self) -> bool {
        self.flags().contains(TcpFlags::PSH)
    }

    #[inline]
    pub fn ack(&self) -> bool {
        self.flags().contains(TcpFlags::ACK)
    }

    #[inline]
    pub fn urg(&self) -> bool {
        self.flags().contains(TcpFlags::URG)
    }

    /// The six opaque bytes at offsets 14..20.
    #[inline]
    pub fn remainder(&self) -> &[u8; TCP_REMAINDER_LEN] {
        remainder(self.buf.as_ref()).try_into().unwrap()
    }

    /// Append the header bytes to `dst`.
    #[inline]
    pub fn write_to_buf<B: BufMut>(&self, dst: &mut B) {
        dst.put_slice(self.as_bytes());
    }
}

impl TcpHeader<[u8; TCP_HEADER_LEN]> {
    /// Take the first [`TCP_HEADER_LEN`] bytes off the front of `src`.
    ///
    /// `src` is left untouched when it holds fewer bytes than a header.
    pub fn from_buf<B: Buf>(src: &mut B) -> Result<Self> {
        let remaining = src.remaining();
        if remaining < TCP_HEADER_LEN {
            return Err(Error::malformed(remaining));
        }

        let mut buf = [0; TCP_HEADER_LEN];
        src.copy_to_slice(&mut buf[..]);
        Ok(Self { buf })
    }
}

impl<T: AsMut<[u8]>> TcpHeader<T> {
    #[inline]
    pub fn set_src_port(&mut self, value: u16) {
        let data = src_port_mut(self.buf.as_mut());
        LittleEndian::write_u16(data, value)
    }

    #[inline]
    pub fn set_dst_port(&mut self, value: u16) {
        let data = dst_port_mut(self.buf.as_mut());
        LittleEndian::write_u16(data, value)
    }

    #[inline]
    pub fn set_seq_number(&mut self, value: u32) {
        let data = seq_num_mut(self.buf.as_mut());
        LittleEndian::write_u32(data, value)
    }

    #[inline]
    pub fn set_ack_number(&mut self, value: u32) {
        let data = ack_num_mut(self.buf.as_mut());
        LittleEndian::write_u32(data, value)
    }

    #[inline]
    pub fn set_offset_byte(&mut self, value: u8) {
        *offset_byte_mut(self.buf.as_mut()) = value;
    }

    #[inline]
    pub fn set_flags(&mut self, value: TcpFlags) {
        *flags_mut(self.buf.as_mut()) = value.raw();
    }

    #[inline]
    pub fn set_remainder(&mut self, value: &[u8; TCP_REMAINDER_LEN]) {
        remainder_mut(self.buf.as_mut()).copy_from_slice(value);
    }

    /// Run [`set_flags`] over the flags byte and store the result in place.
    #[inline]
    pub fn edit_flags(&mut self, want_ack: bool, want_syn: bool) {
        let data = flags_mut(self.buf.as_mut());
        *data = set_flags(*data, want_ack, want_syn);
    }
}
