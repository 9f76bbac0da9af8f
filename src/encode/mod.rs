pub mod archive;
pub mod document;
pub mod png;

pub use archive::{ArchiveEntry, export_animations};
pub use document::{DOCUMENT_VERSION, SpriteDocument};
pub use png::{encode_png, write_png};
