use crate::args::InputSource;
use crate::error::{decode_hex, CliError};
use std::path::PathBuf;

/// Where the bytes to process come from.
#[derive(Debug, Clone)]
pub enum CipherInput {
    Bytes(Vec<u8>),
    File(PathBuf),
}

/// Where the processed bytes go. `Stdout` prints hex.
#[derive(Debug, Clone)]
pub enum CipherOutput {
    Stdout,
    File(PathBuf),
}

impl CipherInput {
    pub fn from_source(source: &InputSource) -> Result<Self, CliError> {
        match (&source.text, &source.input, &source.hex_input) {
            (Some(text), _, _) => Ok(CipherInput::Bytes(text.as_bytes().to_vec())),
            (_, Some(path), _) => Ok(CipherInput::File(path.clone())),
            (_, _, Some(hex)) => Ok(CipherInput::Bytes(decode_hex("hex-input", hex)?)),
            _ => Err(CliError::Usage(
                "one of --text, --input or --hex-input is required".to_string(),
            )),
        }
    }
}

impl From<Option<PathBuf>> for CipherOutput {
    fn from(path: Option<PathBuf>) -> Self {
        path.map_or(CipherOutput::Stdout, CipherOutput::File)
    }
}

pub async fn read_all(input: &CipherInput) -> Result<Vec<u8>, CliError> {
    match input {
        CipherInput::Bytes(data) => Ok(data.clone()),
        CipherInput::File(path) => {
            let data = tokio::fs::read(path)
                .await
                .map_err(|e| CliError::io(path, e))?;
            log::debug!("read {} bytes from {}", data.len(), path.display());
            Ok(data)
        }
    }
}

/// Writes raw bytes to a file, or returns them hex-encoded for stdout.
pub async fn write_all(output: &CipherOutput, data: &[u8]) -> Result<Option<String>, CliError> {
    match output {
        CipherOutput::Stdout => Ok(Some(hex::encode(data))),
        CipherOutput::File(path) => {
            tokio::fs::write(path, data)
                .await
                .map_err(|e| CliError::io(path, e))?;
            log::debug!("wrote {} bytes to {}", data.len(), path.display());
            Ok(None)
        }
    }
}
