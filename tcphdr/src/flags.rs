//! Control flags carried in the flags byte at offset 13.

use core::fmt;

flag_set! {
    /// The control-flags byte of a tcp header.
    ///
    /// Bit 0 is FIN and bit 5 is URG. Bits 6 and 7 are carried but never named.
    pub struct TcpFlags (u8) {
        /// No more data from sender.
        FIN = 0x01,
        /// Synchronize sequence numbers.
        SYN = 0x02,
        /// Reset the connection.
        RST = 0x04,
        /// Push function.
        PSH = 0x08,
        /// Acknowledgement field is significant.
        ACK = 0x10,
        /// Urgent pointer field is significant.
        URG = 0x20,
    }
}

/// Bits OR-ed into a response when the request carries SYN.
pub const SYN_ACK_BITS: TcpFlags = TcpFlags(0x12);

/// Mask driven by the `want_ack` intent of [`set_flags`].
pub const EDIT_ACK_MASK: u8 = 0x20;

/// Mask driven by the `want_syn` intent of [`set_flags`].
pub const EDIT_SYN_MASK: u8 = 0x10;

/// A named control bit.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum FlagName {
    /// Bit 5.
    Urg,
    /// Bit 4.
    Ack,
    /// Bit 3.
    Psh,
    /// Bit 2.
    Rst,
    /// Bit 1.
    Syn,
    /// Bit 0.
    Fin,
}

impl FlagName {
    /// Every named flag, from the highest bit down to the lowest.
    pub const DESCENDING: [FlagName; 6] = [
        FlagName::Urg,
        FlagName::Ack,
        FlagName::Psh,
        FlagName::Rst,
        FlagName::Syn,
        FlagName::Fin,
    ];

    /// The bit this name refers to.
    #[inline]
    pub fn mask(self) -> TcpFlags {
        match self {
            FlagName::Urg => TcpFlags::URG,
            FlagName::Ack => TcpFlags::ACK,
            FlagName::Psh => TcpFlags::PSH,
            FlagName::Rst => TcpFlags::RST,
            FlagName::Syn => TcpFlags::SYN,
            FlagName::Fin => TcpFlags::FIN,
        }
    }

    /// Upper-case abbreviation, e.g. `"SYN"`.
    pub fn name(self) -> &'static str {
        match self {
            FlagName::Urg => "URG",
            FlagName::Ack => "ACK",
            FlagName::Psh => "PSH",
            FlagName::Rst => "RST",
            FlagName::Syn => "SYN",
            FlagName::Fin => "FIN",
        }
    }
}

impl fmt::Display for FlagName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TcpFlags {
    /// Iterate over the set flags, URG first and FIN last.
    pub fn active(self) -> impl Iterator<Item = FlagName> {
        FlagName::DESCENDING
            .into_iter()
            .filter(move |name| self.contains(name.mask()))
    }
}

/// Set or clear the two edited bits of a flags byte.
///
/// `want_ack` drives `0x20` and `want_syn` drives `0x10`. These are literal
/// masks and do not follow the [`TcpFlags`] naming, where `0x20` is URG and
/// `0x10` is ACK. Every other bit passes through unchanged.
#[inline]
pub fn set_flags(flags: u8, want_ack: bool, want_syn: bool) -> u8 {
    let flags = if want_ack {
        flags | EDIT_ACK_MASK
    } else {
        flags & !EDIT_ACK_MASK
    };

    if want_syn {
        flags | EDIT_SYN_MASK
    } else {
        flags & !EDIT_SYN_MASK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_flags_run_from_urg_to_fin() {
        let all = TcpFlags::from(0x3f);
        let names: Vec<_> = all.active().map(FlagName::name).collect();
        assert_eq!(names, ["URG", "ACK", "PSH", "RST", "SYN", "FIN"]);

        let some = TcpFlags::SYN | TcpFlags::ACK | TcpFlags::FIN;
        let names: Vec<_> = some.active().collect();
        assert_eq!(names, [FlagName::Ack, FlagName::Syn, FlagName::Fin]);
    }

    #[test]
    fn unused_high_bits_are_not_named() {
        assert_eq!(TcpFlags::from(0xc0).active().count(), 0);
        assert_eq!(TcpFlags::from(0xc2).active().collect::<Vec<_>>(), [FlagName::Syn]);
    }

    #[test]
    fn syn_ack_bits() {
        assert_eq!(SYN_ACK_BITS, TcpFlags::SYN | TcpFlags::ACK);
    }

    #[test]
    fn set_flags_drives_both_masks() {
        assert_eq!(set_flags(0x00, true, true), 0x30);
        assert_eq!(set_flags(0x00, true, false), 0x20);
        assert_eq!(set_flags(0x00, false, true), 0x10);
        assert_eq!(set_flags(0xff, false, false), 0xcf);
        assert_eq!(set_flags(0x02, true, true), 0x32);
    }

    #[test]
    fn set_flags_is_idempotent() {
        for flags in 0..=u8::MAX {
            for want_ack in [false, true] {
                for want_syn in [false, true] {
                    let once = set_flags(flags, want_ack, want_syn);
                    assert_eq!(set_flags(once, want_ack, want_syn), once);
                    assert_eq!(once & !(EDIT_ACK_MASK | EDIT_SYN_MASK), flags & 0xcf);
                }
            }
        }
    }
}
