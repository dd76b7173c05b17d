//! Lossless opcode codec for palette-indexed sprite animations.
//!
//! Encodes a 12-frame animation of 64×64 pixels over a 14-color palette
//! into compact byte-opcode streams, using either intra-frame RLE
//! (baseline) or inter-frame delta encoding that skips spans left unchanged
//! by the previous frame. Decoding is exact; a verifier proves round-trip
//! correctness per frame.
//!
//! # Architecture
//!
//! - `palette`: symbol-to-color-index mapping
//! - `codec`: the opcode wire format, encoders and decoders
//! - `verify`: encode→decode round-trip verification and reports
//! - `container`: offset table + concatenated streams, on-disk packaging
//! - `source`: parser for the upstream animation source format
//!
//! # Example
//!
//! ```rust
//! use sprite_codec::codec::{DecodePolicy, decode_delta, encode_delta};
//!
//! let prev = vec![0u8; 4096];
//! let mut curr = prev.clone();
//! curr[1000..1010].fill(6);
//!
//! let stream = encode_delta(&prev, &curr).unwrap();
//! assert!(stream.len() < 16); // a few skips, one color, one repeat
//!
//! let decoded = decode_delta(&prev, &stream, DecodePolicy::default()).unwrap();
//! assert_eq!(decoded, curr);
//! ```

pub mod codec;
pub mod container;
pub mod palette;
pub mod source;
pub mod verify;

// Re-export commonly used types
pub use codec::{CodecError, DecodePolicy, EncodingMode, FRAME_COUNT, FRAME_PIXELS};
pub use container::EncodedAnimation;
pub use verify::{FrameReport, VerifyReport, verify};
