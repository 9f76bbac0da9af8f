pub mod editor;
pub mod playback;

pub use editor::EditorSession;
pub use playback::Playback;
