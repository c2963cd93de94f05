use crate::crypto::error::CipherError;
use std::fmt;
use std::str::FromStr;

/// Mode of operation used by [`CipherContext`](crate::CipherContext).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CipherMode {
    ECB,
    CBC,
    PCBC,
    CFB,
    OFB,
    CTR,
}

impl CipherMode {
    pub const ALL: [CipherMode; 6] = [
        CipherMode::ECB,
        CipherMode::CBC,
        CipherMode::PCBC,
        CipherMode::CFB,
        CipherMode::OFB,
        CipherMode::CTR,
    ];

    /// Stream modes turn the block cipher into a keystream generator, so they
    /// never pad and accept a partial final block.
    pub fn is_stream_mode(self) -> bool {
        matches!(self, CipherMode::CFB | CipherMode::OFB | CipherMode::CTR)
    }

    pub fn requires_iv(self) -> bool {
        !matches!(self, CipherMode::ECB)
    }

    /// Length of a freshly generated IV. CTR draws a half-block nonce and
    /// keeps the lower half of the counter block for the block index.
    pub fn generated_iv_len(self, block_size: usize) -> usize {
        match self {
            CipherMode::ECB => 0,
            CipherMode::CTR => block_size / 2,
            _ => block_size,
        }
    }

    /// IV lengths the mode accepts: a full block, or for CTR also a
    /// half-block nonce.
    pub fn iv_lengths(self, block_size: usize) -> Vec<usize> {
        match self {
            CipherMode::ECB => Vec::new(),
            CipherMode::CTR => vec![block_size, block_size / 2],
            _ => vec![block_size],
        }
    }

    pub fn accepts_iv_len(self, block_size: usize, len: usize) -> bool {
        self == CipherMode::ECB || self.iv_lengths(block_size).contains(&len)
    }
}

impl fmt::Display for CipherMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CipherMode::ECB => "ECB",
            CipherMode::CBC => "CBC",
            CipherMode::PCBC => "PCBC",
            CipherMode::CFB => "CFB",
            CipherMode::OFB => "OFB",
            CipherMode::CTR => "CTR",
        };
        f.write_str(name)
    }
}

impl FromStr for CipherMode {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ECB" => Ok(CipherMode::ECB),
            "CBC" => Ok(CipherMode::CBC),
            "PCBC" => Ok(CipherMode::PCBC),
            "CFB" => Ok(CipherMode::CFB),
            "OFB" => Ok(CipherMode::OFB),
            "CTR" => Ok(CipherMode::CTR),
            _ => Err(CipherError::UnknownMode(s.to_string())),
        }
    }
}

#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaddingMode {
    /// No padding; block modes reject unaligned input.
    None,
    Zeros,
    ANSI_X923,
    PKCS7,
    ISO10126,
}

impl FromStr for PaddingMode {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().replace(['-', '_', ' '], "").as_str() {
            "NONE" => Ok(PaddingMode::None),
            "ZEROS" | "ZERO" => Ok(PaddingMode::Zeros),
            "ANSIX923" | "X923" => Ok(PaddingMode::ANSI_X923),
            "PKCS7" | "PKCS" => Ok(PaddingMode::PKCS7),
            "ISO10126" => Ok(PaddingMode::ISO10126),
            _ => Err(CipherError::UnknownPadding(s.to_string())),
        }
    }
}
