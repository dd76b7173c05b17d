//! Opcode stream decoders for baseline and delta frames.

use super::opcode;
use super::{CodecError, FRAME_PIXELS, check_frame_len};

/// How the decoder treats opcodes with an unrecognized high nibble.
///
/// Stored streams were produced by encoders that only emit known opcodes,
/// and their decoders ignore anything else. `Lenient` reproduces that
/// behavior bit-for-bit; `Strict` surfaces corruption instead of masking it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecodePolicy {
    /// Ignore unknown opcodes and continue (wire-compatible behavior).
    #[default]
    Lenient,
    /// Fail with [`CodecError::UnknownOpcode`] on unknown opcodes.
    Strict,
}

/// Decode a baseline opcode stream into color indices.
///
/// Processing stops at the first `0xFF` sentinel or when the stream is
/// exhausted; bytes after the sentinel are never examined. A well-formed
/// stream yields exactly [`FRAME_PIXELS`] indices.
pub fn decode_baseline(stream: &[u8], policy: DecodePolicy) -> Result<Vec<u8>, CodecError> {
    let mut out = Vec::with_capacity(FRAME_PIXELS);
    let mut current_color = 0u8;

    for (offset, &op) in stream.iter().enumerate() {
        if op == opcode::END_OF_FRAME {
            break;
        }
        match opcode::class(op) {
            opcode::SET_COLOR => current_color = op & 0x0F,
            opcode::REPEAT_SHORT => {
                out.extend(std::iter::repeat_n(current_color, opcode::param(op)));
            }
            opcode::CHUNK16 => {
                out.extend(std::iter::repeat_n(current_color, opcode::param(op) * 16));
            }
            _ => {
                if policy == DecodePolicy::Strict {
                    return Err(CodecError::UnknownOpcode { opcode: op, offset });
                }
            }
        }
    }

    Ok(out)
}

/// Decode a delta opcode stream against the previously decoded frame.
///
/// The output starts as a copy of `prev`; skips advance the cursor leaving
/// the copied pixels in place, repeats overwrite with the current color.
/// Writes are clamped so no pixel past index `FRAME_PIXELS - 1` is touched.
/// Processing stops at the sentinel, stream exhaustion, or once the cursor
/// leaves the frame.
pub fn decode_delta(
    prev: &[u8],
    stream: &[u8],
    policy: DecodePolicy,
) -> Result<Vec<u8>, CodecError> {
    check_frame_len(prev)?;

    let mut out = prev.to_vec();
    let mut pos = 0usize;
    let mut current_color = 0u8;

    for (offset, &op) in stream.iter().enumerate() {
        if op == opcode::END_OF_FRAME || pos >= FRAME_PIXELS {
            break;
        }
        match opcode::class(op) {
            opcode::SET_COLOR => current_color = op & 0x0F,
            opcode::SKIP_SHORT => pos += opcode::param(op),
            opcode::REPEAT_SHORT => pos = write_run(&mut out, pos, current_color, opcode::param(op)),
            opcode::CHUNK16 => pos += opcode::param(op) * 16,
            opcode::REPEAT_CHUNK16 => {
                pos = write_run(&mut out, pos, current_color, opcode::param(op) * 16);
            }
            opcode::SKIP_CHUNK64 => pos += opcode::param(op) * 64,
            _ => {
                if policy == DecodePolicy::Strict {
                    return Err(CodecError::UnknownOpcode { opcode: op, offset });
                }
            }
        }
    }

    Ok(out)
}

/// Write `count` copies of `color` starting at `pos`, clamped to the frame.
fn write_run(out: &mut [u8], pos: usize, color: u8, count: usize) -> usize {
    let end = (pos + count).min(FRAME_PIXELS);
    out[pos.min(FRAME_PIXELS)..end].fill(color);
    end
}
