//! Round-trip verification of encoded animations.
//!
//! Every frame is encoded, decoded back, and compared element-wise against
//! the original color indices. Mismatches are counted per frame and rolled
//! up into an aggregate pass/fail signal rather than failing the run early.

use log::debug;
use serde::Serialize;

use crate::codec::{
    CodecError, DecodePolicy, EncodingMode, FRAME_PIXELS, decode_baseline, decode_delta,
    encode_baseline, encode_delta,
};

/// Round-trip result for a single frame.
#[derive(Debug, Clone, Serialize)]
pub struct FrameReport {
    /// Frame index within the animation.
    pub frame: usize,
    /// Opcode stream length in bytes.
    pub stream_len: usize,
    /// Number of color indices the decoder produced.
    pub decoded_len: usize,
    /// Element-wise mismatches against the original frame.
    pub mismatches: usize,
}

impl FrameReport {
    /// True when the frame decoded to the right length with zero mismatches.
    pub fn is_match(&self) -> bool {
        self.mismatches == 0 && self.decoded_len == FRAME_PIXELS
    }

    /// Pixel-to-opcode size reduction, in whole percent. Negative when a
    /// stream expands past the pixel count.
    pub fn reduction_percent(&self) -> i64 {
        100 - (self.stream_len * 100 / FRAME_PIXELS) as i64
    }
}

/// Aggregate verification result for a whole animation.
#[derive(Debug, Clone, Serialize)]
pub struct VerifyReport {
    pub mode: EncodingMode,
    pub frames: Vec<FrameReport>,
}

impl VerifyReport {
    /// True iff every frame round-tripped exactly.
    pub fn passed(&self) -> bool {
        self.frames.iter().all(FrameReport::is_match)
    }

    /// Total opcode bytes across all frames.
    pub fn total_opcodes(&self) -> usize {
        self.frames.iter().map(|f| f.stream_len).sum()
    }

    /// Total source pixels across all frames.
    pub fn total_pixels(&self) -> usize {
        self.frames.len() * FRAME_PIXELS
    }

    /// Whole-animation size reduction, in whole percent.
    pub fn reduction_percent(&self) -> i64 {
        100 - (self.total_opcodes() * 100 / self.total_pixels()) as i64
    }
}

impl std::fmt::Display for VerifyReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:?} mode: {} frames, {} pixels -> {} opcodes ({}% reduction), {}",
            self.mode,
            self.frames.len(),
            self.total_pixels(),
            self.total_opcodes(),
            self.reduction_percent(),
            if self.passed() { "all match" } else { "MISMATCH" }
        )
    }
}

/// Verify an animation in the given mode.
pub fn verify(frames: &[Vec<u8>], mode: EncodingMode) -> Result<VerifyReport, CodecError> {
    match mode {
        EncodingMode::Baseline => verify_baseline(frames),
        EncodingMode::Delta => verify_delta(frames),
    }
}

/// Encode and decode each frame independently, comparing to the original.
pub fn verify_baseline(frames: &[Vec<u8>]) -> Result<VerifyReport, CodecError> {
    let mut reports = Vec::with_capacity(frames.len());
    for (k, frame) in frames.iter().enumerate() {
        let stream = encode_baseline(frame)?;
        let decoded = decode_baseline(&stream, DecodePolicy::Lenient)?;
        reports.push(compare(k, frame, &stream, &decoded));
    }
    Ok(VerifyReport {
        mode: EncodingMode::Baseline,
        frames: reports,
    })
}

/// Verify delta encoding under deployment conditions.
///
/// Frame 0 round-trips through the baseline codec. Each later frame is
/// delta-encoded against the *original* predecessor, then delta-decoded
/// against the baseline-round-tripped predecessor: the decoder in the field
/// only ever holds previously decoded frames, never source frames.
pub fn verify_delta(frames: &[Vec<u8>]) -> Result<VerifyReport, CodecError> {
    let mut reports = Vec::with_capacity(frames.len());
    for (k, frame) in frames.iter().enumerate() {
        let (stream, decoded) = if k == 0 {
            let stream = encode_baseline(frame)?;
            let decoded = decode_baseline(&stream, DecodePolicy::Lenient)?;
            (stream, decoded)
        } else {
            let prev = &frames[k - 1];
            let stream = encode_delta(prev, frame)?;
            let prev_decoded =
                decode_baseline(&encode_baseline(prev)?, DecodePolicy::Lenient)?;
            let decoded = decode_delta(&prev_decoded, &stream, DecodePolicy::Lenient)?;
            (stream, decoded)
        };
        reports.push(compare(k, frame, &stream, &decoded));
    }
    Ok(VerifyReport {
        mode: EncodingMode::Delta,
        frames: reports,
    })
}

fn compare(k: usize, original: &[u8], stream: &[u8], decoded: &[u8]) -> FrameReport {
    let mismatches = original
        .iter()
        .zip(decoded.iter())
        .filter(|(a, b)| a != b)
        .count();

    let report = FrameReport {
        frame: k,
        stream_len: stream.len(),
        decoded_len: decoded.len(),
        mismatches,
    };
    debug!(
        "frame {k}: {} opcodes, {} mismatches",
        report.stream_len, report.mismatches
    );
    report
}
