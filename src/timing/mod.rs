pub mod easing;
pub mod timing_function;
pub use easing::*;
pub use timing_function::*;
