// Text codecs for FRU/SDR record fields
// Both codecs are stateless: encode takes text and returns a freshly
// allocated packed buffer, decode takes a packed buffer and returns text.

pub mod bcdplus;
pub mod packed6;

pub use bcdplus::{BcdPlusError, Nibble};
pub use packed6::Packed6Error;
