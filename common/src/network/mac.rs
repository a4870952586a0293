//! # Physical Address Codec
//!
//! Strict conversion between the textual notations of a MAC address and its binary form.
//!
//! Two widths are supported:
//! * **EUI-48**: 6 bytes, the classic Ethernet MAC address.
//! * **EUI-64**: 8 bytes.
//!
//! Four notations are understood, each with upper- or lowercase hex letters:
//! * `M` compact, e.g. `0123456789AB`
//! * `D` dashed, e.g. `01-23-45-67-89-AB` (the default)
//! * `C` colon, e.g. `01:23:45:67:89:AB`
//! * `X` dotted, e.g. `01.23.45.67.89.AB`
//!
//! Parsing is strict: a string must use one separator and one letter case
//! throughout.

use std::fmt;
use std::str::FromStr;

use pnet::util::MacAddr;

use crate::error::{AddressError, FormatError};

const EUI48_LEN: usize = 6;
const EUI64_LEN: usize = 8;

/// Longest textual form: EUI-64 with separators.
pub const MAX_TEXT_LEN: usize = EUI64_LEN * 3 - 1;

const UPPER_HEX: &[u8; 16] = b"0123456789ABCDEF";
const LOWER_HEX: &[u8; 16] = b"0123456789abcdef";

/// Width of a physical address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Eui {
    Eui48,
    Eui64,
}

impl Eui {
    /// Number of raw bytes an address of this width carries.
    pub const fn byte_len(self) -> usize {
        match self {
            Eui::Eui48 => EUI48_LEN,
            Eui::Eui64 => EUI64_LEN,
        }
    }

    /// Maps a textual length onto `(width, separated)`.
    const fn from_text_len(len: usize) -> Option<(Eui, bool)> {
        match len {
            12 => Some((Eui::Eui48, false)),
            17 => Some((Eui::Eui48, true)),
            16 => Some((Eui::Eui64, false)),
            23 => Some((Eui::Eui64, true)),
            _ => None,
        }
    }
}

impl fmt::Display for Eui {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Eui::Eui48 => f.write_str("EUI-48"),
            Eui::Eui64 => f.write_str("EUI-64"),
        }
    }
}

/// The layout of a formatted address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notation {
    Compact,
    Dashed,
    Colon,
    Dotted,
}

impl Notation {
    pub const fn separator(self) -> Option<u8> {
        match self {
            Notation::Compact => None,
            Notation::Dashed => Some(b'-'),
            Notation::Colon => Some(b':'),
            Notation::Dotted => Some(b'.'),
        }
    }
}

/// A parsed format specifier.
///
/// The empty specifier selects [`Notation::Dashed`] in uppercase. Otherwise a specifier is
/// exactly one of `M`, `D`, `C`, `X`; its case selects the case of the hex letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatSpec {
    pub notation: Notation,
    pub uppercase: bool,
}

impl Default for FormatSpec {
    fn default() -> Self {
        Self {
            notation: Notation::Dashed,
            uppercase: true,
        }
    }
}

impl FormatSpec {
    pub fn parse(spec: &str) -> Result<Self, FormatError> {
        let spec_char = match spec.as_bytes() {
            [] => return Ok(Self::default()),
            [c] => *c,
            _ => return Err(FormatError::InvalidSpecifier),
        };

        let notation = match spec_char.to_ascii_uppercase() {
            b'M' => Notation::Compact,
            b'D' => Notation::Dashed,
            b'C' => Notation::Colon,
            b'X' => Notation::Dotted,
            _ => return Err(FormatError::InvalidSpecifier),
        };

        Ok(Self {
            notation,
            uppercase: spec_char.is_ascii_uppercase(),
        })
    }

    /// Exact length of the text produced for an address of the given width.
    pub const fn output_len(self, family: Eui) -> usize {
        let bytes = family.byte_len();
        match self.notation.separator() {
            None => bytes * 2,
            Some(_) => bytes * 3 - 1,
        }
    }
}

impl FromStr for FormatSpec {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Letter case lock used while parsing.
///
/// The first alphabetic hex digit decides which case every following letter must use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LetterCase {
    Undetermined,
    Upper,
    Lower,
}

impl LetterCase {
    fn decode(&mut self, c: u8) -> Option<u8> {
        match c {
            b'0'..=b'9' => Some(c - b'0'),
            b'A'..=b'F' if *self != LetterCase::Lower => {
                *self = LetterCase::Upper;
                Some(c - b'A' + 10)
            }
            b'a'..=b'f' if *self != LetterCase::Upper => {
                *self = LetterCase::Lower;
                Some(c - b'a' + 10)
            }
            _ => None,
        }
    }
}

/// An EUI-48 or EUI-64 physical address.
///
/// Stored as a fixed 8-byte buffer plus its width. Unused trailing bytes of an EUI-48 address
/// are always zero, so the derived equality and hash only ever see `(family, bytes)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PhysicalAddress {
    family: Eui,
    bytes: [u8; EUI64_LEN],
}

impl PhysicalAddress {
    /// Builds an address from 6 or 8 raw bytes.
    pub fn new(data: &[u8]) -> Result<Self, AddressError> {
        let family = match data.len() {
            EUI48_LEN => Eui::Eui48,
            EUI64_LEN => Eui::Eui64,
            len => return Err(AddressError::InvalidLength(len)),
        };

        let mut bytes = [0u8; EUI64_LEN];
        bytes[..data.len()].copy_from_slice(data);
        Ok(Self { family, bytes })
    }

    pub fn family(&self) -> Eui {
        self.family
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.family.byte_len()]
    }

    /// Parses any of the accepted notations.
    ///
    /// Accepted lengths are 12 and 17 (EUI-48) or 16 and 23 (EUI-64); the longer form of each
    /// pair carries a separator (`:`, `-` or `.`) between every byte.
    pub fn parse(s: &str) -> Result<Self, AddressError> {
        let invalid = || AddressError::InvalidFormat(s.to_owned());

        let text = s.as_bytes();
        let (family, separated) = Eui::from_text_len(text.len()).ok_or_else(invalid)?;
        let stride = if separated { 3 } else { 2 };

        let mut separator: Option<u8> = None;
        let mut case = LetterCase::Undetermined;
        let mut bytes = [0u8; EUI64_LEN];

        for (index, byte) in bytes[..family.byte_len()].iter_mut().enumerate() {
            let start = index * stride;

            if separated && index != 0 {
                let found = text[start - 1];
                match separator {
                    None if matches!(found, b':' | b'-' | b'.') => separator = Some(found),
                    Some(locked) if locked == found => {}
                    _ => return Err(invalid()),
                }
            }

            let high = case.decode(text[start]).ok_or_else(invalid)?;
            let low = case.decode(text[start + 1]).ok_or_else(invalid)?;
            *byte = (high << 4) | low;
        }

        Ok(Self { family, bytes })
    }

    /// Formats the address according to a textual specifier (see [`FormatSpec`]).
    pub fn format(&self, spec: &str) -> Result<String, FormatError> {
        let spec = FormatSpec::parse(spec)?;
        Ok(self.to_text(spec))
    }

    /// Formats the address into a caller supplied buffer and returns the number of bytes written.
    ///
    /// The specifier is validated before anything else, and nothing is written when `dest` is
    /// shorter than [`FormatSpec::output_len`].
    pub fn try_format(&self, dest: &mut [u8], spec: &str) -> Result<usize, FormatError> {
        let spec = FormatSpec::parse(spec)?;
        self.write_to(dest, spec)
    }

    pub fn write_to(&self, dest: &mut [u8], spec: FormatSpec) -> Result<usize, FormatError> {
        let required = spec.output_len(self.family);
        if dest.len() < required {
            return Err(FormatError::BufferTooSmall {
                required,
                available: dest.len(),
            });
        }

        Ok(self.encode(dest, spec))
    }

    pub fn to_text(&self, spec: FormatSpec) -> String {
        let mut buffer = [0u8; MAX_TEXT_LEN];
        let written = self.encode(&mut buffer, spec);
        buffer[..written].iter().map(|&b| char::from(b)).collect()
    }

    // Callers guarantee `dest` holds at least `spec.output_len(self.family)` bytes.
    fn encode(&self, dest: &mut [u8], spec: FormatSpec) -> usize {
        let digits = if spec.uppercase { UPPER_HEX } else { LOWER_HEX };
        let mut written = 0;

        for (index, byte) in self.as_bytes().iter().enumerate() {
            if index != 0 {
                if let Some(separator) = spec.notation.separator() {
                    dest[written] = separator;
                    written += 1;
                }
            }

            dest[written] = digits[usize::from(byte >> 4)];
            dest[written + 1] = digits[usize::from(byte & 0x0F)];
            written += 2;
        }

        written
    }
}

impl fmt::Display for PhysicalAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buffer = [0u8; MAX_TEXT_LEN];
        let written = self.encode(&mut buffer, FormatSpec::default());
        let text = std::str::from_utf8(&buffer[..written]).map_err(|_| fmt::Error)?;
        f.pad(text)
    }
}

impl FromStr for PhysicalAddress {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&[u8]> for PhysicalAddress {
    type Error = AddressError;

    fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
        Self::new(data)
    }
}

impl From<[u8; EUI48_LEN]> for PhysicalAddress {
    fn from(data: [u8; EUI48_LEN]) -> Self {
        let mut bytes = [0u8; EUI64_LEN];
        bytes[..EUI48_LEN].copy_from_slice(&data);
        Self {
            family: Eui::Eui48,
            bytes,
        }
    }
}

impl From<[u8; EUI64_LEN]> for PhysicalAddress {
    fn from(bytes: [u8; EUI64_LEN]) -> Self {
        Self {
            family: Eui::Eui64,
            bytes,
        }
    }
}

impl From<MacAddr> for PhysicalAddress {
    fn from(mac: MacAddr) -> Self {
        let MacAddr(a, b, c, d, e, f) = mac;
        Self::from([a, b, c, d, e, f])
    }
}
