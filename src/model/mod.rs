pub mod distribution;
pub mod state;
