// Packed 6-bit ASCII encoding/decoding for FRU record fields
// Packs 4 characters from the 0x20-0x5F range into 3 bytes, each 6-bit
// value laid down least significant bits first.

use thiserror::Error;

/// First character of the packed alphabet (ASCII space)
pub const FIRST_CHAR: u8 = 0x20;

/// Last character of the packed alphabet (ASCII '_')
pub const LAST_CHAR: u8 = 0x5F;

#[derive(Error, Debug)]
pub enum Packed6Error {
    #[error("invalid character {ch:?} for packed 6-bit ASCII encoding at index {index}")]
    InvalidChar { ch: char, index: usize },
}

pub type Result<T> = std::result::Result<T, Packed6Error>;

/// Accumulates 6-bit values into packed bytes. `carry` holds the bits of
/// the last value that have not yet reached an output byte; `phase` is the
/// position within the 4-character cycle.
#[derive(Debug, Default)]
struct Packer {
    out: Vec<u8>,
    carry: u8,
    phase: u8,
}

impl Packer {
    fn with_capacity(chars: usize) -> Self {
        Self {
            out: Vec::with_capacity((chars / 4) * 3 + chars % 4),
            ..Self::default()
        }
    }

    /// Feed one 6-bit value
    fn push(&mut self, v: u8) {
        match self.phase {
            0 => self.carry = v & 0x3F,
            1 => {
                self.out.push((v & 0x03) << 6 | self.carry);
                self.carry = (v >> 2) & 0x0F;
            }
            2 => {
                self.out.push((v & 0x0F) << 4 | self.carry);
                self.carry = (v >> 4) & 0x03;
            }
            _ => {
                self.out.push((v & 0x3F) << 2 | self.carry);
                self.carry = 0;
            }
        }
        self.phase = (self.phase + 1) % 4;
    }

    /// Emit the trailing partial byte and return the buffer. Mid-cycle the
    /// carry byte belongs to the output even when all its bits are zero;
    /// dropping it would change the decoded length.
    fn finish(mut self) -> Vec<u8> {
        if self.phase != 0 {
            self.out.push(self.carry);
        }
        self.out
    }
}

/// Splits packed bytes back into 6-bit values. Inverse of `Packer`.
#[derive(Debug, Default)]
struct Unpacker {
    carry: u8,
    phase: u8,
}

impl Unpacker {
    /// Feed one packed byte; yields one value, plus a second when the byte
    /// completes the 3-byte cycle.
    fn push(&mut self, byte: u8) -> (u8, Option<u8>) {
        let values = match self.phase {
            0 => {
                self.carry = byte >> 6;
                (byte & 0x3F, None)
            }
            1 => {
                let v = (byte & 0x0F) << 2 | self.carry;
                self.carry = byte >> 4;
                (v, None)
            }
            _ => {
                let v = (byte & 0x03) << 4 | self.carry;
                self.carry = 0;
                (v, Some(byte >> 2))
            }
        };
        self.phase = (self.phase + 1) % 3;
        values
    }
}

/// Decode a packed 6-bit ASCII buffer to text. Cannot fail: every 6-bit
/// value offset by 0x20 lands in printable ASCII. Output length is
/// `(n / 3) * 4 + n % 3`; a 2-byte trailing group yields exactly 2
/// characters. `trim` strips trailing spaces from the result.
pub fn decode(data: &[u8], trim: bool) -> String {
    let mut text = String::with_capacity((data.len() / 3) * 4 + data.len() % 3);
    let mut unpacker = Unpacker::default();

    for &byte in data {
        let (first, second) = unpacker.push(byte);
        text.push((first + FIRST_CHAR) as char);
        if let Some(v) = second {
            text.push((v + FIRST_CHAR) as char);
        }
    }

    if trim {
        text.truncate(text.trim_end_matches(' ').len());
    }

    text
}

/// Encode text to packed 6-bit ASCII form. Output length is
/// `(len / 4) * 3 + len % 4`. Inputs whose length is 3 mod 4 fill a whole
/// 3-byte group with zeros in the top bits, so they decode back with one
/// extra trailing space; every other length round-trips exactly.
pub fn encode(text: &str) -> Result<Vec<u8>> {
    let src = text.as_bytes();
    let mut packer = Packer::with_capacity(src.len());

    for (index, &ch) in src.iter().enumerate() {
        if !(FIRST_CHAR..=LAST_CHAR).contains(&ch) {
            return Err(Packed6Error::InvalidChar {
                ch: ch as char,
                index,
            });
        }
        packer.push(ch - FIRST_CHAR);
    }

    Ok(packer.finish())
}
