use core::mem::size_of;

use macaddr::MacAddr6;

use crate::error::{Error, ErrorKind};

const MAGIC_BYTES_HEADER: [u8; 6] = [0xFF; 6];

/// Parse a textual MAC address into a [`MacAddr6`].
///
/// Exactly six hexadecimal pairs are accepted, separated by `:` or `-`,
/// case-insensitively. The separator has to be the same throughout one
/// address. Anything else, including the empty string, is rejected with an
/// error carrying the offending input.
pub fn parse_mac(input: &str) -> Result<MacAddr6, Error> {
    let invalid = || ErrorKind::InvalidMacAddress {
        input: input.into(),
    };

    let sep = match input.as_bytes().get(2) {
        Some(b':') => ':',
        Some(b'-') => '-',
        _ => return Err(invalid().into()),
    };

    let mut octets = [0u8; 6];
    let mut parts = input.split(sep);

    for octet in octets.iter_mut() {
        let Some(part) = parts.next() else {
            return Err(invalid().into());
        };

        if part.len() != 2 || !part.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid().into());
        }

        *octet = u8::from_str_radix(part, 16).map_err(|_| invalid())?;
    }

    if parts.next().is_some() {
        return Err(invalid().into());
    }

    let [a, b, c, d, e, f] = octets;
    Ok(MacAddr6::new(a, b, c, d, e, f))
}

#[repr(C)]
pub struct MagicPacket {
    // 6 bytes of 0xFF.
    header: [u8; 6],
    // 16 repetitions of the target MAC address.
    dest: [[u8; 6]; 16],
}

const _: () = const {
    assert!(size_of::<MagicPacket>() == 102);
};

impl MagicPacket {
    /// Creates a new `MagicPacket` intended for `address` (but doesn't send it yet).
    pub fn new(address: MacAddr6) -> Self {
        let mut dest = [[0u8; 6]; 16];

        for d in dest.iter_mut() {
            *d = address.into_array();
        }

        Self {
            header: MAGIC_BYTES_HEADER,
            dest,
        }
    }

    /// The full wire image of the packet.
    pub fn as_bytes(&self) -> &[u8] {
        // SAFETY: `MagicPacket` is `repr(C)` and consists entirely of `u8`
        // arrays.
        unsafe { &*(self as *const Self as *const [u8; size_of::<Self>()]) }
    }
}
