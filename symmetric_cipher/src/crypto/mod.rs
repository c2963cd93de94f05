pub mod bit_word;
pub mod cipher_context;
pub mod cipher_traits;
pub mod cipher_types;
pub mod encryption_transformation;
pub mod error;
pub mod feistel_network;
pub mod key_expansion;
pub mod utils;
