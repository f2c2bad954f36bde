pub mod floating_point;
pub mod trigonometry;

pub use floating_point::*;
pub use trigonometry::*;
