pub mod bitmap;
pub mod blur;
pub mod composite;
pub mod renderer;

pub use bitmap::Bitmap;
pub use composite::PremulRgba8;
pub use renderer::FrameRenderer;
