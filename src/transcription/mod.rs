//! Speech-to-text seam for uploaded audio

mod clip;
mod transcriber;

pub use clip::{AudioClip, WavInfo};
pub use transcriber::{SimulatedTranscriber, Transcriber, TranscriptionResult, WordTiming};
