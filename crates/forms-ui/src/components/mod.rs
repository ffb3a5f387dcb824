pub mod label;
pub mod radio_button;
pub mod text_input;

// Re-exports for convenience
pub use label::*;
pub use radio_button::*;
pub use text_input::*;
