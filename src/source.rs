//! Parser for the upstream animation source format.
//!
//! The reference animation ships as a C source file declaring one array per
//! frame (`const char * frame0[] = { "…", … };` through `frame11`), each
//! holding 64 quoted strings of 64 pixel symbols. This module extracts the
//! raw symbol grids and maps them through the palette.

use crate::codec::{FRAME_COUNT, FRAME_PIXELS};
use crate::palette::map_symbols;

/// Errors produced while parsing an animation source file.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("frame {0} not found in animation source")]
    MissingFrame(usize),
    #[error("frame {frame} has {actual} pixels, expected {expected}")]
    FrameSize {
        frame: usize,
        expected: usize,
        actual: usize,
    },
}

/// Extract the 12 raw symbol frames from an animation source file.
///
/// Each frame's quoted strings are concatenated and must flatten to exactly
/// 4096 symbols. Content between strings (commas, whitespace, comments
/// outside quotes) is ignored.
pub fn parse_animation(source: &str) -> Result<Vec<Vec<char>>, SourceError> {
    let mut frames = Vec::with_capacity(FRAME_COUNT);
    for n in 0..FRAME_COUNT {
        let needle = format!("frame{n}[]");
        let start = source
            .find(&needle)
            .ok_or(SourceError::MissingFrame(n))?;
        let block = &source[start..];
        let open = block.find('{').ok_or(SourceError::MissingFrame(n))?;
        let close = block[open..]
            .find('}')
            .map(|p| p + open)
            .ok_or(SourceError::MissingFrame(n))?;
        let body = &block[open..close];

        let mut pixels = Vec::with_capacity(FRAME_PIXELS);
        let mut in_string = false;
        for c in body.chars() {
            if c == '"' {
                in_string = !in_string;
            } else if in_string {
                pixels.push(c);
            }
        }

        if pixels.len() != FRAME_PIXELS {
            return Err(SourceError::FrameSize {
                frame: n,
                expected: FRAME_PIXELS,
                actual: pixels.len(),
            });
        }
        frames.push(pixels);
    }
    Ok(frames)
}

/// Parse an animation source file into palette-indexed frames.
pub fn load_frames(source: &str) -> Result<Vec<Vec<u8>>, SourceError> {
    let frames = parse_animation(source)?;
    Ok(frames.iter().map(|f| map_symbols(f)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::FRAME_WIDTH;

    /// Build a minimal source file: every frame is 64 lines of one symbol.
    fn fixture(symbols: &[char]) -> String {
        let mut out = String::new();
        for (n, &symbol) in symbols.iter().enumerate() {
            let line: String = std::iter::repeat_n(symbol, FRAME_WIDTH).collect();
            out.push_str(&format!("const char * frame{n}[] = {{\n"));
            for _ in 0..FRAME_WIDTH {
                out.push_str(&format!("    \"{line}\",\n"));
            }
            out.push_str("};\n\n");
        }
        out
    }

    fn twelve_symbols() -> Vec<char> {
        vec![',', '.', '\'', '@', '%', '$', '-', '&', '+', '#', '=', ';']
    }

    #[test]
    fn test_parse_animation() {
        let source = fixture(&twelve_symbols());
        let frames = parse_animation(&source).unwrap();
        assert_eq!(frames.len(), FRAME_COUNT);
        for frame in &frames {
            assert_eq!(frame.len(), FRAME_PIXELS);
        }
        assert!(frames[1].iter().all(|&c| c == '.'));
    }

    #[test]
    fn test_load_frames_maps_palette() {
        let source = fixture(&twelve_symbols());
        let frames = load_frames(&source).unwrap();
        assert!(frames[0].iter().all(|&p| p == 0));
        assert!(frames[1].iter().all(|&p| p == 1));
        assert!(frames[11].iter().all(|&p| p == 11));
    }

    #[test]
    fn test_missing_frame() {
        let source = fixture(&twelve_symbols()[..11]);
        let err = parse_animation(&source).unwrap_err();
        assert!(matches!(err, SourceError::MissingFrame(11)));
    }

    #[test]
    fn test_wrong_frame_size() {
        let mut source = fixture(&twelve_symbols());
        // Drop one pixel from frame0's first line.
        source = source.replacen(
            &",".repeat(FRAME_WIDTH),
            &",".repeat(FRAME_WIDTH - 1),
            1,
        );
        let err = parse_animation(&source).unwrap_err();
        assert!(matches!(
            err,
            SourceError::FrameSize {
                frame: 0,
                actual: 4095,
                ..
            }
        ));
    }

    #[test]
    fn test_frame1_not_confused_with_frame11() {
        let source = fixture(&twelve_symbols());
        let frames = parse_animation(&source).unwrap();
        assert!(frames[1].iter().all(|&c| c == '.'));
        assert!(frames[11].iter().all(|&c| c == ';'));
    }
}
