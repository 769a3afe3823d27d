use hound::WavReader;
use std::io::Cursor;
use tracing::{debug, info};

/// Format details read from a WAV header
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WavInfo {
    pub sample_rate: u32,
    pub channels: u16,
    pub duration_seconds: f64,
}

/// An uploaded audio payload
#[derive(Debug, Clone)]
pub struct AudioClip {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
    /// Present when the payload parses as WAV
    pub wav: Option<WavInfo>,
}

impl AudioClip {
    pub fn new(bytes: Vec<u8>, file_name: Option<String>, content_type: Option<String>) -> Self {
        let wav = probe_wav(&bytes);

        match &wav {
            Some(info) => info!(
                "Audio clip loaded: {} bytes, {:.1}s, {}Hz, {} channels",
                bytes.len(),
                info.duration_seconds,
                info.sample_rate,
                info.channels
            ),
            None => info!(
                "Audio clip loaded: {} bytes ({})",
                bytes.len(),
                content_type.as_deref().unwrap_or("unknown type")
            ),
        }

        Self {
            file_name,
            content_type,
            bytes,
            wav,
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Read the WAV header, if there is one. Other formats (webm, ogg) yield `None`.
fn probe_wav(bytes: &[u8]) -> Option<WavInfo> {
    let reader = match WavReader::new(Cursor::new(bytes)) {
        Ok(reader) => reader,
        Err(e) => {
            debug!("Payload is not WAV: {}", e);
            return None;
        }
    };

    let spec = reader.spec();
    // duration() counts frames, i.e. samples per channel
    let duration_seconds = reader.duration() as f64 / spec.sample_rate.max(1) as f64;

    Some(WavInfo {
        sample_rate: spec.sample_rate,
        channels: spec.channels,
        duration_seconds,
    })
}
