//! FRU field encoding demonstration utility
//! Encodes strings with both FRU text codecs and prints hex dumps of the
//! packed buffers, the round-tripped text, and the zero checksum.

use fru_codec::checksum::zero_checksum;
use fru_codec::codec::{bcdplus, packed6};
use std::env;
use tracing_subscriber::{fmt::format::FmtSpan, prelude::*, EnvFilter};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let filter_layer = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap();

    let format_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::NONE);

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(format_layer)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();

    if args.is_empty() {
        // Sample FRU field values
        dump_bcdplus("123-456-7.890")?;
        dump_packed6("IPMITOOL 12")?;
        return Ok(());
    }

    for arg in &args {
        dump_bcdplus(arg)?;
        dump_packed6(arg)?;
    }

    Ok(())
}

fn dump_bcdplus(text: &str) -> anyhow::Result<()> {
    println!("=== BCD Plus: {:?} ===", text);

    let (buf, padded) = bcdplus::encode(text)?;
    tracing::info!("BCD Plus: {} chars -> {} bytes", text.len(), buf.len());

    println!("{} bytes, padded = {}", buf.len(), padded);
    print_hex_dump(&buf);
    println!("decoded: {:?}", bcdplus::decode(&buf, false)?);
    print_checksum(&buf)?;
    println!();

    Ok(())
}

fn dump_packed6(text: &str) -> anyhow::Result<()> {
    println!("=== Packed 6-bit ASCII: {:?} ===", text);

    let buf = packed6::encode(text)?;
    tracing::info!("Packed 6-bit: {} chars -> {} bytes", text.len(), buf.len());

    println!("{} bytes", buf.len());
    print_hex_dump(&buf);
    println!("decoded: {:?}", packed6::decode(&buf, true));
    print_checksum(&buf)?;
    println!();

    Ok(())
}

fn print_checksum(buf: &[u8]) -> anyhow::Result<()> {
    if !buf.is_empty() {
        println!("zero checksum: {:#04X}", zero_checksum(buf, 0, buf.len())?);
    }
    Ok(())
}

fn print_hex_dump(data: &[u8]) {
    for (offset, chunk) in data.chunks(16).enumerate() {
        // Offset
        print!("{:08X}  ", offset * 16);

        // Hex bytes
        for (i, byte) in chunk.iter().enumerate() {
            print!("{:02X} ", byte);
            if i == 7 {
                print!(" ");
            }
        }

        // Padding for incomplete lines
        if chunk.len() < 16 {
            for i in chunk.len()..16 {
                print!("   ");
                if i == 7 {
                    print!(" ");
                }
            }
        }

        // ASCII column
        print!(" ");
        for byte in chunk {
            let c = *byte as char;
            if c.is_ascii_graphic() || c == ' ' {
                print!("{}", c);
            } else {
                print!(".");
            }
        }

        println!();
    }
}
