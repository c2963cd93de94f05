/// Round function F(half_block, round_key) of a Feistel network.
pub trait EncryptionTransformation {
    fn transform(&self, input_block: &[u8], round_key: &[u8]) -> Vec<u8>;
}
