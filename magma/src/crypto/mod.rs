pub mod key_schedule;
pub mod magma;
pub mod sboxes;
pub mod transformation;
