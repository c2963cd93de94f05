/// Derives a cipher's round keys from its master key, in encryption order.
///
/// The Feistel network consumes one entry per round; SPN ciphers may produce
/// one extra whitening key.
pub trait KeyExpansion {
    fn generate_round_keys(&self, key: &[u8]) -> Vec<Vec<u8>>;
}
