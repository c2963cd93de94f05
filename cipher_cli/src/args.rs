use crate::registry::CipherKind;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use symmetric_cipher::{CipherMode, PaddingMode};

#[derive(Parser, Debug)]
#[command(name = "cipher_cli", version, about = "Encrypt and decrypt with hand-written block and stream ciphers")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Encrypt the input; missing key or IV are generated and reported
    Encrypt(CryptArgs),
    /// Decrypt the input with the key (and IV) used for encryption
    Decrypt(CryptArgs),
}

#[derive(Args, Debug, Clone)]
pub struct CryptArgs {
    #[arg(long, value_enum)]
    pub cipher: CipherKind,

    /// Chaining mode for block ciphers: ECB, CBC, PCBC, CFB, OFB or CTR
    #[arg(long)]
    pub mode: Option<CipherMode>,

    /// None, Zeros, ANSI_X923, PKCS7 or ISO10126
    #[arg(long)]
    pub padding: Option<PaddingMode>,

    /// Hex key; empty means generate one
    #[arg(long, default_value = "")]
    pub key: String,

    /// Hex IV or nonce; empty means generate one where the mode needs it
    #[arg(long, default_value = "")]
    pub iv: String,

    #[command(flatten)]
    pub source: InputSource,

    /// Write raw bytes here instead of printing hex
    #[arg(long)]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct InputSource {
    /// UTF-8 text
    #[arg(long)]
    pub text: Option<String>,

    /// File to read
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Hex-encoded bytes
    #[arg(long)]
    pub hex_input: Option<String>,
}
