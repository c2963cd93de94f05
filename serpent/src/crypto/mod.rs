pub mod key_schedule;
pub mod linear;
pub mod permutation;
pub mod sboxes;
pub mod serpent;
