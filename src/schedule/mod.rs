pub mod morph_options;
pub mod scheduler;
pub use morph_options::*;
pub use scheduler::*;
