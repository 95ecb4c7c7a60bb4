//! Read-only startup assets: the window icon and the looping splash
//! animation, decoded to raw RGBA so the UI layer stays toolkit-agnostic.

use std::fs;
use std::io::Cursor;
use std::path::Path;

use image::AnimationDecoder;

use crate::error::AssetError;

// Some encoders write 0/1 ms frame delays; clamp to keep playback sane.
const MIN_FRAME_DELAY_MS: u32 = 20;
const MAX_FRAME_DELAY_MS: u32 = 10_000;
const FALLBACK_FRAME_DELAY_MS: u32 = 100;

/// Decoded window icon.
#[derive(Debug, Clone)]
pub struct IconImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

/// One frame of the splash animation.
#[derive(Debug, Clone)]
pub struct AnimationFrame {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
    pub delay_ms: u32,
}

/// The looping splash animation as raw RGBA frames.
#[derive(Debug, Clone)]
pub struct SplashAnimation {
    pub frames: Vec<AnimationFrame>,
}

impl SplashAnimation {
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }
}

pub fn load_window_icon(path: &Path) -> Result<IconImage, AssetError> {
    let bytes = read_asset(path)?;
    decode_window_icon(&bytes)
}

pub fn decode_window_icon(bytes: &[u8]) -> Result<IconImage, AssetError> {
    let decoded = image::load_from_memory(bytes)?;
    let rgba = decoded.to_rgba8();
    Ok(IconImage {
        width: rgba.width(),
        height: rgba.height(),
        rgba: rgba.into_raw(),
    })
}

pub fn load_splash_animation(path: &Path) -> Result<SplashAnimation, AssetError> {
    let bytes = read_asset(path)?;
    decode_splash_animation(&bytes)
}

pub fn decode_splash_animation(bytes: &[u8]) -> Result<SplashAnimation, AssetError> {
    let decoder = image::codecs::gif::GifDecoder::new(Cursor::new(bytes))?;
    let frames = decoder.into_frames().collect_frames()?;
    if frames.is_empty() {
        return Err(AssetError::NoFrames);
    }

    let mut out = Vec::with_capacity(frames.len());
    for frame in frames {
        let (num, den) = frame.delay().numer_denom_ms();
        let delay_ms = if den == 0 {
            FALLBACK_FRAME_DELAY_MS
        } else {
            ((num as f32 / den as f32).round() as u32).clamp(MIN_FRAME_DELAY_MS, MAX_FRAME_DELAY_MS)
        };

        let buffer = frame.into_buffer();
        out.push(AnimationFrame {
            width: buffer.width(),
            height: buffer.height(),
            rgba: buffer.into_raw(),
            delay_ms,
        });
    }

    Ok(SplashAnimation { frames: out })
}

fn read_asset(path: &Path) -> Result<Vec<u8>, AssetError> {
    fs::read(path).map_err(|source| AssetError::Io {
        path: path.to_path_buf(),
        source,
    })
}
