pub mod sma;

pub use sma::{average_volume, calculate_sma};
