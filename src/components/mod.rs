pub mod address;
pub mod hash;
pub mod pico;
pub mod toast;
