// FRU-CODEC: text codecs for IPMI-style FRU/SDR record fields

pub mod checksum;
pub mod codec;

// Re-export commonly used types
pub use checksum::{zero_checksum, ChecksumError};
pub use codec::{bcdplus, packed6, BcdPlusError, Nibble, Packed6Error};

/// FRU-CODEC version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
