pub mod block64;
pub mod tea;
pub mod xtea;
pub mod xxtea;

/// Key schedule constant shared by the whole TEA family.
pub const DELTA: u32 = 0x9e37_79b9;
pub const KEY_SIZE: usize = 16;
