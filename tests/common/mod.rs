//! Common test utilities

use std::path::Path;

/// The 8-byte signature every PNG file starts with
pub const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// Check whether the file at `path` starts with the PNG signature
pub fn is_png(path: &Path) -> bool {
    std::fs::read(path)
        .map(|bytes| bytes.starts_with(&PNG_SIGNATURE))
        .unwrap_or(false)
}

/// Read (width, height) from the IHDR chunk of a PNG file
pub fn png_dimensions(path: &Path) -> Option<(u32, u32)> {
    let bytes = std::fs::read(path).ok()?;
    parse_ihdr(&bytes)
}

fn parse_ihdr(bytes: &[u8]) -> Option<(u32, u32)> {
    // signature (8) + chunk length (4) + "IHDR" (4) + width (4) + height (4)
    if bytes.len() < 24 || !bytes.starts_with(&PNG_SIGNATURE) || &bytes[12..16] != b"IHDR" {
        return None;
    }
    let width = u32::from_be_bytes(bytes[16..20].try_into().ok()?);
    let height = u32::from_be_bytes(bytes[20..24].try_into().ok()?);
    Some((width, height))
}

/// Extract table data rows (lines whose first cell is a wavelength)
pub fn table_rows(stdout: &str) -> Vec<&str> {
    stdout
        .lines()
        .filter(|line| {
            line.split('|')
                .nth(1)
                .is_some_and(|cell| cell.trim().parse::<u32>().is_ok())
        })
        .collect()
}
