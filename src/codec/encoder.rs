//! Frame encoders: baseline intra-frame RLE and inter-frame delta.

use super::opcode;
use super::{CodecError, FRAME_PIXELS, check_frame_len};

/// Encode one frame with pure run-length encoding.
///
/// Scans left to right, emitting a SetColor whenever the color register
/// changes, then splitting each maximal run across the repeat tiers: one
/// short opcode for runs up to 16 pixels, 16-pixel chunks up to 256, and
/// repeated 256-pixel chunks beyond that.
pub fn encode_baseline(pixels: &[u8]) -> Result<Vec<u8>, CodecError> {
    check_frame_len(pixels)?;

    let mut out = Vec::new();
    let mut current_color: Option<u8> = None;
    let mut i = 0;

    while i < FRAME_PIXELS {
        let color = pixels[i];
        let mut count = 1;
        while i + count < FRAME_PIXELS && pixels[i + count] == color {
            count += 1;
        }

        if current_color != Some(color) {
            out.push(opcode::set_color(color));
            current_color = Some(color);
        }

        let mut remaining = count;
        while remaining > 0 {
            if remaining <= 16 {
                out.push(opcode::repeat_short(remaining));
                remaining = 0;
            } else if remaining <= 256 {
                let chunks = (remaining / 16).min(16);
                out.push(opcode::chunk16(chunks));
                remaining -= chunks * 16;
            } else {
                out.push(opcode::chunk16(16));
                remaining -= 256;
            }
        }

        i += count;
    }

    out.push(opcode::END_OF_FRAME);
    Ok(out)
}

/// Encode one frame relative to its immediate predecessor.
///
/// Alternates two phases over the pixel cursor. The skip phase covers the
/// maximal span of unchanged pixels with three skip tiers (1-16, chunks of
/// 16 up to 256, chunks of 64 up to 1024); unchanged spans dominate a
/// temporally coherent animation, hence the extra coarse tier. The changed
/// phase emits SetColor if needed, then covers the maximal run of pixels
/// that both changed and share the new color, using two repeat tiers.
pub fn encode_delta(prev: &[u8], curr: &[u8]) -> Result<Vec<u8>, CodecError> {
    check_frame_len(prev)?;
    check_frame_len(curr)?;

    let mut out = Vec::new();
    let mut current_color: Option<u8> = None;
    let mut i = 0;

    while i < FRAME_PIXELS {
        let mut skip = 0;
        while i + skip < FRAME_PIXELS && prev[i + skip] == curr[i + skip] {
            skip += 1;
        }

        if skip > 0 {
            let mut remaining = skip;
            while remaining > 0 {
                if remaining <= 16 {
                    out.push(opcode::skip_short(remaining));
                    remaining = 0;
                } else if remaining <= 256 {
                    let chunks = (remaining / 16).min(16);
                    out.push(opcode::chunk16(chunks));
                    remaining -= chunks * 16;
                } else if remaining <= 1024 {
                    let chunks = (remaining / 64).min(16);
                    out.push(opcode::skip_chunk64(chunks));
                    remaining -= chunks * 64;
                } else {
                    out.push(opcode::skip_chunk64(16));
                    remaining -= 1024;
                }
            }

            i += skip;
            if i >= FRAME_PIXELS {
                break;
            }
        }

        let color = curr[i];
        if current_color != Some(color) {
            out.push(opcode::set_color(color));
            current_color = Some(color);
        }

        // Run ends when the color changes or a pixel becomes unchanged,
        // even if it still matches the run color.
        let mut run = 1;
        while i + run < FRAME_PIXELS
            && curr[i + run] == color
            && prev[i + run] != curr[i + run]
        {
            run += 1;
        }

        let mut remaining = run;
        while remaining > 0 {
            if remaining <= 16 {
                out.push(opcode::repeat_short(remaining));
                remaining = 0;
            } else if remaining <= 256 {
                let chunks = (remaining / 16).min(16);
                out.push(opcode::repeat_chunk16(chunks));
                remaining -= chunks * 16;
            } else {
                out.push(opcode::repeat_chunk16(16));
                remaining -= 256;
            }
        }

        i += run;
    }

    out.push(opcode::END_OF_FRAME);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_baseline_rejects_wrong_size() {
        let err = encode_baseline(&[0u8; 100]).unwrap_err();
        assert!(matches!(
            err,
            CodecError::FrameSize {
                expected: 4096,
                actual: 100
            }
        ));
    }

    #[test]
    fn test_delta_rejects_wrong_size() {
        let good = vec![0u8; FRAME_PIXELS];
        assert!(encode_delta(&good, &[0u8; 10]).is_err());
        assert!(encode_delta(&[0u8; 10], &good).is_err());
    }

    #[test]
    fn test_uniform_frame_is_18_opcodes() {
        // SetColor + 16 maximal chunk16 repeats (256 pixels each) + sentinel.
        let frame = vec![3u8; FRAME_PIXELS];
        let stream = encode_baseline(&frame).unwrap();

        let mut expected = vec![0x03];
        expected.extend(std::iter::repeat_n(0x3F, 16));
        expected.push(0xFF);
        assert_eq!(stream, expected);
        assert_eq!(stream.len(), 18);
    }

    #[test]
    fn test_baseline_run_splitting() {
        // 17 pixels of color 1, then 4079 of background.
        let mut frame = vec![0u8; FRAME_PIXELS];
        frame[..17].fill(1);
        let stream = encode_baseline(&frame).unwrap();

        // 17 -> chunk16(1) + repeat_short(1); 4079 -> 15 full 256-pixel
        // chunks, chunk16(14) for 224, repeat_short(15).
        let mut expected = vec![0x01, 0x30, 0x20, 0x00];
        expected.extend(std::iter::repeat_n(0x3F, 15));
        expected.push(0x3D);
        expected.push(0x2E);
        expected.push(0xFF);
        assert_eq!(stream, expected);
    }

    #[test]
    fn test_baseline_runs_are_maximal() {
        // A single run never emits two SetColors.
        let mut frame = vec![0u8; FRAME_PIXELS];
        frame[100..400].fill(7);
        let stream = encode_baseline(&frame).unwrap();
        let set_colors = stream
            .iter()
            .take_while(|&&op| op != opcode::END_OF_FRAME)
            .filter(|&&op| opcode::class(op) == opcode::SET_COLOR)
            .count();
        assert_eq!(set_colors, 3); // background, color 7, background again
    }

    #[test]
    fn test_delta_identical_frames_is_all_skip() {
        let frame = vec![5u8; FRAME_PIXELS];
        let stream = encode_delta(&frame, &frame).unwrap();
        // 4096 unchanged pixels: four maximal 1024-pixel skips.
        assert_eq!(stream, vec![0x5F, 0x5F, 0x5F, 0x5F, 0xFF]);
    }

    #[test]
    fn test_delta_single_changed_pixel() {
        let prev = vec![0u8; FRAME_PIXELS];
        let mut curr = prev.clone();
        curr[100] = 9;
        let stream = encode_delta(&prev, &curr).unwrap();

        // Content is exactly one SetColor and one 1-pixel repeat; everything
        // else is skips plus the sentinel.
        let set_colors: Vec<u8> = stream
            .iter()
            .copied()
            .filter(|&op| op != opcode::END_OF_FRAME && opcode::class(op) == opcode::SET_COLOR)
            .collect();
        assert_eq!(set_colors, vec![0x09]);

        let repeats: Vec<u8> = stream
            .iter()
            .copied()
            .filter(|&op| {
                opcode::class(op) == opcode::REPEAT_SHORT
                    || opcode::class(op) == opcode::REPEAT_CHUNK16
            })
            .collect();
        assert_eq!(repeats, vec![0x20]);

        assert!(stream.len() <= 12);
        assert_eq!(stream.last(), Some(&0xFF));
    }

    #[test]
    fn test_delta_run_stops_at_unchanged_pixel() {
        // curr[10..20] is color 2, but curr[15] == prev[15], so the changed
        // run must split around it.
        let mut prev = vec![0u8; FRAME_PIXELS];
        let mut curr = vec![0u8; FRAME_PIXELS];
        curr[10..20].fill(2);
        prev[15] = 2;

        let stream = encode_delta(&prev, &curr).unwrap();
        // skip 10, SetColor 2, repeat 5, skip 1, repeat 4, skip rest.
        assert_eq!(stream[0], 0x19);
        assert_eq!(stream[1], 0x02);
        assert_eq!(stream[2], 0x24);
        assert_eq!(stream[3], 0x10);
        assert_eq!(stream[4], 0x23);
    }

    #[test]
    fn test_delta_change_at_last_pixel() {
        let prev = vec![0u8; FRAME_PIXELS];
        let mut curr = prev.clone();
        curr[FRAME_PIXELS - 1] = 1;
        let stream = encode_delta(&prev, &curr).unwrap();
        assert_eq!(stream.last(), Some(&0xFF));
        assert_eq!(stream[stream.len() - 2], 0x20);
        assert_eq!(stream[stream.len() - 3], 0x01);
    }

    #[test]
    fn test_streams_end_with_single_sentinel() {
        let frame = vec![0u8; FRAME_PIXELS];
        let stream = encode_baseline(&frame).unwrap();
        assert_eq!(stream.iter().filter(|&&op| op == 0xFF).count(), 1);
        assert_eq!(stream.last(), Some(&0xFF));

        let stream = encode_delta(&frame, &frame).unwrap();
        assert_eq!(stream.iter().filter(|&&op| op == 0xFF).count(), 1);
        assert_eq!(stream.last(), Some(&0xFF));
    }
}
