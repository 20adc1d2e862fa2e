// BCD Plus encoding/decoding for FRU record fields
// Code mapping: '0'-'9' <-> 0x0-0x9, ' ' <-> 0xA, '-' <-> 0xB, '.' <-> 0xC

use thiserror::Error;

/// Character for each code value, indexed by code. Codes 13-15 are unassigned.
const CODES: &[u8] = b"0123456789 -.";

/// Code used to pad the final nibble of an odd-length input
const SPACE_CODE: u8 = 10;

/// Which half of a byte a nibble occupies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nibble {
    Upper,
    Lower,
}

impl std::fmt::Display for Nibble {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Nibble::Upper => write!(f, "upper"),
            Nibble::Lower => write!(f, "lower"),
        }
    }
}

#[derive(Error, Debug)]
pub enum BcdPlusError {
    #[error("invalid BCD Plus code {code:#x} in {nibble} nibble of byte #{index}")]
    InvalidCode {
        code: u8,
        nibble: Nibble,
        index: usize,
    },

    #[error("invalid character {ch:?} for BCD Plus encoding at index {index}")]
    InvalidChar { ch: char, index: usize },
}

pub type Result<T> = std::result::Result<T, BcdPlusError>;

/// Decode a BCD Plus buffer to text, two characters per byte.
/// `trim` strips trailing spaces (the pad character) from the result.
/// Example: [0x12, 0x3B] -> "123-"
pub fn decode(data: &[u8], trim: bool) -> Result<String> {
    let mut text = String::with_capacity(data.len() * 2);

    for (index, &byte) in data.iter().enumerate() {
        for (nibble, code) in [(Nibble::Upper, byte >> 4), (Nibble::Lower, byte & 0x0F)] {
            let ch = *CODES
                .get(code as usize)
                .ok_or(BcdPlusError::InvalidCode { code, nibble, index })?;
            text.push(ch as char);
        }
    }

    if trim {
        text.truncate(text.trim_end_matches(' ').len());
    }

    Ok(text)
}

/// Encode text to BCD Plus form, first character of each pair in the
/// upper nibble. An odd-length input gets a space code in the final lower
/// nibble; the returned bool is true iff that pad was added.
/// Example: "123-" -> ([0x12, 0x3B], false)
pub fn encode(text: &str) -> Result<(Vec<u8>, bool)> {
    let src = text.as_bytes();
    let mut buf = Vec::with_capacity(src.len().div_ceil(2));

    for (i, pair) in src.chunks(2).enumerate() {
        let hi = code_for(pair[0], i * 2)?;
        let lo = match pair.get(1) {
            Some(&ch) => code_for(ch, i * 2 + 1)?,
            None => SPACE_CODE,
        };
        buf.push(hi << 4 | lo);
    }

    Ok((buf, src.len() % 2 != 0))
}

fn code_for(ch: u8, index: usize) -> Result<u8> {
    CODES
        .iter()
        .position(|&c| c == ch)
        .map(|code| code as u8)
        .ok_or(BcdPlusError::InvalidChar {
            ch: ch as char,
            index,
        })
}
