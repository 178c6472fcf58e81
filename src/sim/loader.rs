//! Program image loading.
//!
//! The image format is ASCII text: one 32-bit word per line, base 16,
//! no prefix. Words are placed sequentially from the text base.

use std::fs;
use std::io;

use crate::mem::Memory;

/// Reads a program image from disk. Blank lines are skipped; a token that
/// does not parse as a hex word is an error.
pub fn read_image(path: &str) -> io::Result<Vec<u32>> {
    let text = fs::read_to_string(path)?;
    let mut words = Vec::new();

    for line in text.lines() {
        let token = line.trim();
        if token.is_empty() {
            continue;
        }
        let word = u32::from_str_radix(token, 16).map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("bad program word {:?}: {}", token, e),
            )
        })?;
        words.push(word);
    }

    Ok(words)
}

/// Writes the image into memory, one word every four bytes from `base`.
pub fn install(mem: &mut Memory, base: u32, words: &[u32]) {
    for (i, word) in words.iter().enumerate() {
        mem.write_u32(base.wrapping_add(i as u32 * 4), *word);
    }
}
