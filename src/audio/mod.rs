// Audio file loading
// Serves raw file bytes to the renderer as base64 data URLs

pub mod loader;

pub use loader::AudioLoadError;
