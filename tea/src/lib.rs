pub mod crypto;

pub use crypto::tea::Tea;
pub use crypto::xtea::Xtea;
pub use crypto::xxtea::Xxtea;
