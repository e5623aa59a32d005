pub mod mfi;

pub use mfi::{calculate_mfi, calculate_mfi_default, DEFAULT_MFI_WINDOW};
