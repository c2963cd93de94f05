pub mod crypto;

pub use crypto::magma::Magma;
