pub mod crypto;

pub use crypto::rabbit::Rabbit;
