//! Binary container for an encoded animation.
//!
//! The codec hands its packaging collaborator two artifacts: the
//! concatenation of all per-frame opcode streams and a 12-entry offset
//! table giving each stream's start within that concatenation. This module
//! owns that handoff and the on-disk layout:
//!
//! ```text
//! Header (12 bytes):
//!   Magic: "SPRC" (4 bytes)
//!   Version: u16
//!   Mode: u16 (0 = baseline, 1 = delta)
//!   Frame count: u16
//!   Reserved: u16
//! Offset table (frame_count * 4 bytes):
//!   Start offset of each frame's stream, u32
//! Stream data (variable):
//!   Concatenated opcode streams, each ending in 0xFF
//! ```

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

use log::debug;

use crate::codec::{CodecError, EncodingMode, FRAME_COUNT, encode_animation};

/// Magic bytes identifying a sprite animation container.
pub const CONTAINER_MAGIC: &[u8; 4] = b"SPRC";

/// Current container format version.
pub const CONTAINER_VERSION: u16 = 1;

/// An animation's per-frame opcode streams, ready for packaging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedAnimation {
    mode: EncodingMode,
    streams: Vec<Vec<u8>>,
}

impl EncodedAnimation {
    /// Wrap already-encoded streams. Fails unless exactly [`FRAME_COUNT`]
    /// streams are supplied.
    pub fn new(mode: EncodingMode, streams: Vec<Vec<u8>>) -> Result<Self, CodecError> {
        if streams.len() != FRAME_COUNT {
            return Err(CodecError::FrameCount {
                expected: FRAME_COUNT,
                actual: streams.len(),
            });
        }
        Ok(Self { mode, streams })
    }

    /// Encode a full animation and package the streams.
    pub fn from_frames(frames: &[Vec<u8>], mode: EncodingMode) -> Result<Self, CodecError> {
        if frames.len() != FRAME_COUNT {
            return Err(CodecError::FrameCount {
                expected: FRAME_COUNT,
                actual: frames.len(),
            });
        }
        Self::new(mode, encode_animation(frames, mode)?)
    }

    pub fn mode(&self) -> EncodingMode {
        self.mode
    }

    pub fn streams(&self) -> &[Vec<u8>] {
        &self.streams
    }

    /// Start offset of each frame's stream within [`Self::concatenated`].
    pub fn offsets(&self) -> Vec<u32> {
        let mut offsets = Vec::with_capacity(self.streams.len());
        let mut total = 0u32;
        for stream in &self.streams {
            offsets.push(total);
            total += stream.len() as u32;
        }
        offsets
    }

    /// All opcode streams, concatenated in frame order.
    pub fn concatenated(&self) -> Vec<u8> {
        self.streams.concat()
    }

    /// Total opcode bytes across all frames.
    pub fn total_len(&self) -> usize {
        self.streams.iter().map(Vec::len).sum()
    }

    /// Write the container to an output.
    pub fn write_to<W: Write>(&self, w: &mut W) -> io::Result<()> {
        w.write_all(CONTAINER_MAGIC)?;
        w.write_all(&CONTAINER_VERSION.to_le_bytes())?;
        w.write_all(&self.mode.to_u16().to_le_bytes())?;
        w.write_all(&(self.streams.len() as u16).to_le_bytes())?;
        w.write_all(&0u16.to_le_bytes())?;

        for offset in self.offsets() {
            w.write_all(&offset.to_le_bytes())?;
        }
        for stream in &self.streams {
            w.write_all(stream)?;
        }
        Ok(())
    }

    /// Read a container from an input, splitting the concatenated data back
    /// into per-frame streams via the offset table.
    pub fn read_from<R: Read>(r: &mut R) -> io::Result<Self> {
        let mut magic = [0u8; 4];
        r.read_exact(&mut magic)?;
        if &magic != CONTAINER_MAGIC {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "Invalid SPRC magic bytes",
            ));
        }

        let mut buf2 = [0u8; 2];

        r.read_exact(&mut buf2)?;
        let version = u16::from_le_bytes(buf2);
        if version != CONTAINER_VERSION {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("Unsupported SPRC version: {}", version),
            ));
        }

        r.read_exact(&mut buf2)?;
        let mode = EncodingMode::from_u16(u16::from_le_bytes(buf2)).ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidData, "Unknown encoding mode")
        })?;

        r.read_exact(&mut buf2)?;
        let frame_count = u16::from_le_bytes(buf2) as usize;
        if frame_count != FRAME_COUNT {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("Expected {} frames, found {}", FRAME_COUNT, frame_count),
            ));
        }

        // Reserved
        r.read_exact(&mut buf2)?;

        let mut buf4 = [0u8; 4];
        let mut offsets = Vec::with_capacity(frame_count);
        for _ in 0..frame_count {
            r.read_exact(&mut buf4)?;
            offsets.push(u32::from_le_bytes(buf4) as usize);
        }

        let mut data = Vec::new();
        r.read_to_end(&mut data)?;

        let mut streams = Vec::with_capacity(frame_count);
        for k in 0..frame_count {
            let start = offsets[k];
            let end = if k + 1 < frame_count {
                offsets[k + 1]
            } else {
                data.len()
            };
            if start > end || end > data.len() {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("Corrupt offset table at frame {}", k),
                ));
            }
            streams.push(data[start..end].to_vec());
        }

        debug!("read {} streams, {} bytes total", frame_count, data.len());
        Ok(Self { mode, streams })
    }

    /// Write the container to a file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.write_to(&mut writer)?;
        writer.flush()
    }

    /// Read a container from a file.
    pub fn load<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let mut reader = BufReader::new(File::open(path)?);
        Self::read_from(&mut reader)
    }
}
