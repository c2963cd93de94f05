use crate::args::{Command, CryptArgs};
use crate::error::{decode_hex, CliError};
use crate::io::{read_all, write_all, CipherInput, CipherOutput};
use crate::registry::{build, embedded_iv, resolve, CipherKind, Resolved};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Encrypt,
    Decrypt,
}

/// Outcome of one run: the material actually used and, when no output file
/// was given, the result as hex.
#[derive(Debug, Clone)]
pub struct Report {
    pub direction: Direction,
    pub cipher: CipherKind,
    pub resolved: Resolved,
    pub processed: usize,
    pub output_hex: Option<String>,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "cipher: {:?}", self.cipher)?;
        if let (Some(mode), Some(padding)) = (self.resolved.mode, self.resolved.padding) {
            writeln!(f, "mode: {mode}, padding: {padding:?}")?;
        }
        writeln!(f, "key: {}", hex::encode(&self.resolved.key))?;
        if let Some(iv) = &self.resolved.iv {
            writeln!(f, "iv: {}", hex::encode(iv))?;
        }
        match &self.output_hex {
            Some(hex) => write!(f, "output: {hex}"),
            None => write!(f, "output: {} bytes written", self.processed),
        }
    }
}

pub async fn run(command: Command) -> Result<Report, CliError> {
    match command {
        Command::Encrypt(args) => execute(Direction::Encrypt, &args).await,
        Command::Decrypt(args) => execute(Direction::Decrypt, &args).await,
    }
}

pub async fn execute(direction: Direction, args: &CryptArgs) -> Result<Report, CliError> {
    let key = decode_hex("key", &args.key)?;
    let iv = decode_hex("iv", &args.iv)?;
    let mut resolved = resolve(
        args.cipher,
        args.mode,
        args.padding,
        &key,
        &iv,
        direction == Direction::Encrypt,
    )?;
    let cipher = build(args.cipher, &resolved)?;

    let input = CipherInput::from_source(&args.source)?;
    let data = read_all(&input).await?;
    log::info!("{:?} {} bytes with {:?}", direction, data.len(), args.cipher);
    if direction == Direction::Decrypt && args.cipher.is_block_cipher() {
        resolved.iv = embedded_iv(args.cipher, &resolved, &data);
    }

    let result = tokio::task::spawn_blocking(move || match direction {
        Direction::Encrypt => cipher.encrypt(&data),
        Direction::Decrypt => cipher.decrypt(&data),
    })
    .await??;

    let output = CipherOutput::from(args.output.clone());
    let output_hex = write_all(&output, &result).await?;

    Ok(Report {
        direction,
        cipher: args.cipher,
        resolved,
        processed: result.len(),
        output_hex,
    })
}
