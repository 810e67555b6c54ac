pub mod fields;
pub mod state;
