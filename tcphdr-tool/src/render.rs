use std::fmt;

use tcphdr::DecodedHeader;

/// Decoded fields laid out one per line, flags listed URG first.
pub struct Rendered<'a>(pub &'a DecodedHeader);

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header = self.0;
        writeln!(f, "Source port: {}", header.source_port)?;
        writeln!(f, "Destination port: {}", header.dest_port)?;
        writeln!(f, "Sequence Number: {}", header.sequence)?;
        writeln!(f, "Acknowledgement Number: {}", header.ack)?;
        write!(f, "Flags:")?;
        for flag in &header.active_flags {
            write!(f, " {}", flag)?;
        }
        writeln!(f)
    }
}
