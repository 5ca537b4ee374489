//! File-type classification by magic bytes.

use crate::constants::{FTYPE_JPEG, FTYPE_RAW, FTYPE_WEBP};

/// Classification of a source file's payload, written into the FEC packet
/// header at offset 17.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum FileType {
    Raw = FTYPE_RAW,
    Jpeg = FTYPE_JPEG,
    Webp = FTYPE_WEBP,
}

impl FileType {
    /// Detects the file type from the first bytes of `data`.
    ///
    /// `FF D8` -> JPEG; `52 49 46 46 ?? ?? ?? ?? 57 45 42 50` (`RIFF....WEBP`)
    /// -> WebP; anything else -> Raw.
    pub fn detect(data: &[u8]) -> FileType {
        if data.len() >= 2 && data[0] == 0xFF && data[1] == 0xD8 {
            return FileType::Jpeg;
        }
        if data.len() >= 12
            && &data[0..4] == b"RIFF"
            && &data[8..12] == b"WEBP"
        {
            return FileType::Webp;
        }
        FileType::Raw
    }

    /// Returns the wire byte for this file type.
    pub fn as_byte(self) -> u8 {
        self as u8
    }

    /// Decodes a wire byte into a `FileType`, defaulting to `Raw` for any
    /// value that isn't a recognised code.
    pub fn from_byte(byte: u8) -> FileType {
        match byte {
            FTYPE_JPEG => FileType::Jpeg,
            FTYPE_WEBP => FileType::Webp,
            _ => FileType::Raw,
        }
    }
}
