use crate::error::CliError;
use clap::ValueEnum;
use magma::Magma;
use rabbit::Rabbit;
use serpent::Serpent;
use symmetric_cipher::crypto::utils::resolve_or_generate;
use symmetric_cipher::{BlockCipher, CipherAlgorithm, CipherContext, CipherMode, PaddingMode, SymmetricCipher};
use tea::{Tea, Xtea, Xxtea};

pub const DEFAULT_MODE: CipherMode = CipherMode::CBC;
pub const DEFAULT_PADDING: PaddingMode = PaddingMode::PKCS7;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CipherKind {
    Magma,
    Serpent,
    Tea,
    Xtea,
    Xxtea,
    Rabbit,
}

impl CipherKind {
    /// Length of a generated key.
    pub fn key_len(self) -> usize {
        match self {
            CipherKind::Magma => largest_key::<Magma>(),
            CipherKind::Serpent => largest_key::<Serpent>(),
            CipherKind::Tea => largest_key::<Tea>(),
            CipherKind::Xtea => largest_key::<Xtea>(),
            CipherKind::Xxtea => largest_key::<Xxtea>(),
            CipherKind::Rabbit => largest_key::<Rabbit>(),
        }
    }

    pub fn block_size(self) -> Option<usize> {
        match self {
            CipherKind::Magma | CipherKind::Tea | CipherKind::Xtea => Some(8),
            CipherKind::Serpent => Some(16),
            CipherKind::Xxtea | CipherKind::Rabbit => None,
        }
    }

    /// Block ciphers run through the chaining layer; the rest take the whole buffer.
    pub fn is_block_cipher(self) -> bool {
        self.block_size().is_some()
    }
}

fn largest_key<C: SymmetricCipher>() -> usize {
    C::KEY_SIZES.iter().copied().max().unwrap_or(0)
}

/// What to run and with which parameters, after defaults are filled in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub key: Vec<u8>,
    pub iv: Option<Vec<u8>>,
    pub mode: Option<CipherMode>,
    pub padding: Option<PaddingMode>,
}

pub type DynCipher = Box<dyn CipherAlgorithm + Send + Sync>;

/// Fills in defaults and random material. A decrypting caller must bring
/// the key; the IV of a block cipher travels with the ciphertext, so
/// decryption never generates one.
pub fn resolve(
    kind: CipherKind,
    mode: Option<CipherMode>,
    padding: Option<PaddingMode>,
    key: &[u8],
    iv: &[u8],
    encrypting: bool,
) -> Result<Resolved, CliError> {
    if !encrypting && key.is_empty() {
        return Err(CliError::Usage("decryption needs --key".to_string()));
    }
    let key = resolve_or_generate(key, kind.key_len());

    let Some(block_size) = kind.block_size() else {
        if mode.is_some() || padding.is_some() {
            log::warn!("{kind:?} ignores --mode and --padding");
        }
        let iv = match kind {
            CipherKind::Rabbit if !iv.is_empty() => Some(iv.to_vec()),
            _ => {
                if !iv.is_empty() {
                    log::warn!("{kind:?} takes no IV, ignoring it");
                }
                None
            }
        };
        return Ok(Resolved {
            key,
            iv,
            mode: None,
            padding: None,
        });
    };

    let mode = mode.unwrap_or(DEFAULT_MODE);
    let padding = padding.unwrap_or(DEFAULT_PADDING);
    let iv = if !mode.requires_iv() {
        None
    } else if encrypting {
        Some(resolve_or_generate(iv, mode.generated_iv_len(block_size)))
    } else {
        if !iv.is_empty() {
            log::warn!("decryption reads the IV from the ciphertext, ignoring --iv");
        }
        None
    };

    Ok(Resolved {
        key,
        iv,
        mode: Some(mode),
        padding: Some(padding),
    })
}

fn block_cipher(kind: CipherKind, key: &[u8]) -> Result<Box<dyn BlockCipher>, CliError> {
    let cipher: Box<dyn BlockCipher> = match kind {
        CipherKind::Magma => Box::new(Magma::new(key)?),
        CipherKind::Serpent => Box::new(Serpent::new(key)?),
        CipherKind::Tea => Box::new(Tea::new(key)?),
        CipherKind::Xtea => Box::new(Xtea::new(key)?),
        CipherKind::Xxtea | CipherKind::Rabbit => {
            return Err(CliError::Usage(format!("{kind:?} is not a block cipher")))
        }
    };
    Ok(cipher)
}

/// Builds the whole-buffer cipher. Block ciphers carry the IV in front of
/// the ciphertext so decryption only needs the key.
pub fn build(kind: CipherKind, resolved: &Resolved) -> Result<DynCipher, CliError> {
    let cipher: DynCipher = match kind {
        CipherKind::Xxtea => Box::new(Xxtea::new(&resolved.key)?),
        CipherKind::Rabbit => match &resolved.iv {
            Some(iv) => Box::new(Rabbit::with_iv(&resolved.key, iv)?),
            None => Box::new(Rabbit::new(&resolved.key)?),
        },
        _ => {
            let mode = resolved.mode.unwrap_or(DEFAULT_MODE);
            let padding = resolved.padding.unwrap_or(DEFAULT_PADDING);
            let ctx = CipherContext::new(
                block_cipher(kind, &resolved.key)?,
                mode,
                padding,
                resolved.iv.clone(),
            )?
            .with_prepended_iv();
            Box::new(ctx)
        }
    };
    Ok(cipher)
}

/// The IV block `build` put in front of a block-cipher ciphertext, i.e. the
/// IV a decryption of `data` actually uses.
pub fn embedded_iv(kind: CipherKind, resolved: &Resolved, data: &[u8]) -> Option<Vec<u8>> {
    let block_size = kind.block_size()?;
    if !resolved.mode?.requires_iv() {
        return None;
    }
    data.get(..block_size).map(<[u8]>::to_vec)
}
