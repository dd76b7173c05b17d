//! Codec module - opcode-stream encoding and decoding of animation frames.
//!
//! Each frame is a 64×64 grid of palette color indices, encoded into a
//! byte-opcode stream terminated by `0xFF`:
//!
//! ```text
//! 0x0X  SetColor        current color = X (0-13)          both modes
//! 0x1Y  Skip            Y+1 unchanged pixels (1-16)       delta only
//! 0x2Y  Repeat          Y+1 pixels of current color       both modes
//! 0x3Y  Chunk16         baseline: repeat (Y+1)*16
//!                       delta:    skip (Y+1)*16           both modes
//! 0x4Y  RepeatChunk16   (Y+1)*16 changed pixels           delta only
//! 0x5Y  SkipChunk64     (Y+1)*64 unchanged pixels         delta only
//! 0xFF  EndOfFrame                                        both modes
//! ```
//!
//! Baseline streams are pure intra-frame RLE. Delta streams encode a frame
//! relative to its immediate predecessor, skipping unchanged spans, so
//! frames must be decoded in index order.

mod decoder;
mod encoder;
pub mod opcode;

pub use decoder::{DecodePolicy, decode_baseline, decode_delta};
pub use encoder::{encode_baseline, encode_delta};

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Frame width in pixels.
pub const FRAME_WIDTH: usize = 64;
/// Frame height in pixels.
pub const FRAME_HEIGHT: usize = 64;
/// Pixels per frame.
pub const FRAME_PIXELS: usize = FRAME_WIDTH * FRAME_HEIGHT;
/// Frames per animation. The animation loops, but the wraparound is a
/// consumer concern; frame 11 never references frame 0.
pub const FRAME_COUNT: usize = 12;

/// Errors produced by the codec.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("frame has {actual} pixels, expected {expected}")]
    FrameSize { expected: usize, actual: usize },
    #[error("animation has {actual} frames, expected {expected}")]
    FrameCount { expected: usize, actual: usize },
    #[error("unknown opcode {opcode:#04x} at stream offset {offset}")]
    UnknownOpcode { opcode: u8, offset: usize },
}

/// Which encoding strategy an opcode stream uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u16)]
pub enum EncodingMode {
    /// Intra-frame RLE, every frame standalone.
    #[default]
    Baseline = 0,
    /// Frame 0 baseline, frames 1.. encoded against their predecessor.
    Delta = 1,
}

impl EncodingMode {
    pub fn to_u16(self) -> u16 {
        self as u16
    }

    pub fn from_u16(v: u16) -> Option<Self> {
        match v {
            0 => Some(EncodingMode::Baseline),
            1 => Some(EncodingMode::Delta),
            _ => None,
        }
    }
}

/// Encode every frame of an animation, returning one opcode stream per frame.
///
/// Baseline frames are independent and encoded in parallel. Delta mode forms
/// a linear dependency chain (frame k is encoded against frame k-1), so it
/// runs sequentially: frame 0 is baseline-encoded, the rest delta-encoded.
pub fn encode_animation(
    frames: &[Vec<u8>],
    mode: EncodingMode,
) -> Result<Vec<Vec<u8>>, CodecError> {
    match mode {
        EncodingMode::Baseline => frames
            .par_iter()
            .map(|frame| encode_baseline(frame))
            .collect(),
        EncodingMode::Delta => {
            let mut streams = Vec::with_capacity(frames.len());
            for (k, frame) in frames.iter().enumerate() {
                let stream = if k == 0 {
                    encode_baseline(frame)?
                } else {
                    encode_delta(&frames[k - 1], frame)?
                };
                streams.push(stream);
            }
            Ok(streams)
        }
    }
}

/// Decode every frame of an animation from its per-frame opcode streams.
///
/// In delta mode each frame after the first is decoded against the
/// previously *decoded* frame, matching what a consumer of stored streams
/// actually has available.
pub fn decode_animation(
    streams: &[Vec<u8>],
    mode: EncodingMode,
    policy: DecodePolicy,
) -> Result<Vec<Vec<u8>>, CodecError> {
    let mut frames: Vec<Vec<u8>> = Vec::with_capacity(streams.len());
    for (k, stream) in streams.iter().enumerate() {
        let frame = if k == 0 || mode == EncodingMode::Baseline {
            decode_baseline(stream, policy)?
        } else {
            decode_delta(&frames[k - 1], stream, policy)?
        };
        frames.push(frame);
    }
    Ok(frames)
}

pub(crate) fn check_frame_len(pixels: &[u8]) -> Result<(), CodecError> {
    if pixels.len() != FRAME_PIXELS {
        return Err(CodecError::FrameSize {
            expected: FRAME_PIXELS,
            actual: pixels.len(),
        });
    }
    Ok(())
}
