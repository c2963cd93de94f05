pub mod rabbit;
pub mod state;
