//! Frame encoding and decoding for the panel link
//!
//! Layout: SYNC (0x7E), TYPE, LEN, payload, CHECKSUM. The checksum is the
//! two's complement of TYPE + LEN + payload, so summing every byte after
//! SYNC of a valid frame yields zero. The decoder resynchronizes on the
//! next SYNC byte after garbage or a checksum failure.

use heapless::Vec;

/// Frame synchronization byte
pub const FRAME_SYNC: u8 = 0x7E;

/// Maximum payload size in bytes (longest word placement: region, color,
/// 16 characters of text)
pub const MAX_PAYLOAD: usize = 24;

/// Maximum complete frame size (SYNC + TYPE + LEN + payload + CHECKSUM)
pub const MAX_FRAME_SIZE: usize = 4 + MAX_PAYLOAD;

/// Errors raised while encoding or decoding frames
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameError {
    /// Payload exceeds [`MAX_PAYLOAD`]
    Oversize,
    /// Checksum mismatch; the decoder has already resynchronized
    BadChecksum,
    /// Structurally invalid frame
    Malformed,
    /// Destination buffer too small for encoding
    BufferTooSmall,
}

/// A decoded or constructed frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Message type identifier
    pub kind: u8,
    /// Type-specific payload
    pub payload: Vec<u8, MAX_PAYLOAD>,
}

impl Frame {
    /// Build a frame with the given type and payload.
    pub fn new(kind: u8, payload: &[u8]) -> Result<Self, FrameError> {
        let mut owned = Vec::new();
        owned
            .extend_from_slice(payload)
            .map_err(|_| FrameError::Oversize)?;
        Ok(Self {
            kind,
            payload: owned,
        })
    }

    /// Build a payload-less frame.
    pub fn bare(kind: u8) -> Self {
        Self {
            kind,
            payload: Vec::new(),
        }
    }

    fn checksum(kind: u8, payload: &[u8]) -> u8 {
        let mut sum = kind.wrapping_add(payload.len() as u8);
        for &byte in payload {
            sum = sum.wrapping_add(byte);
        }
        sum.wrapping_neg()
    }

    /// Encode into a byte buffer, returning the number of bytes written.
    pub fn encode(&self, buffer: &mut [u8]) -> Result<usize, FrameError> {
        let total = 4 + self.payload.len();
        if buffer.len() < total {
            return Err(FrameError::BufferTooSmall);
        }

        buffer[0] = FRAME_SYNC;
        buffer[1] = self.kind;
        buffer[2] = self.payload.len() as u8;
        buffer[3..3 + self.payload.len()].copy_from_slice(&self.payload);
        buffer[3 + self.payload.len()] = Self::checksum(self.kind, &self.payload);

        Ok(total)
    }

    /// Encode into an owned heapless Vec.
    pub fn encode_to_vec(&self) -> Vec<u8, MAX_FRAME_SIZE> {
        let mut buffer = [0u8; MAX_FRAME_SIZE];
        // MAX_FRAME_SIZE always fits a frame with a legal payload
        let len = self.encode(&mut buffer).unwrap_or(0);
        let mut out = Vec::new();
        let _ = out.extend_from_slice(&buffer[..len]);
        out
    }
}

/// Incremental frame decoder fed one byte at a time.
#[derive(Debug, Clone)]
pub struct Decoder {
    state: DecodeState,
    kind: u8,
    expected: u8,
    buffer: Vec<u8, MAX_PAYLOAD>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DecodeState {
    /// Hunting for the SYNC byte
    Sync,
    /// SYNC seen, next byte is the message type
    Kind,
    /// Type seen, next byte is the payload length
    Len,
    /// Collecting payload bytes
    Payload,
    /// Payload complete, next byte is the checksum
    Check,
}

impl Decoder {
    pub const fn new() -> Self {
        Self {
            state: DecodeState::Sync,
            kind: 0,
            expected: 0,
            buffer: Vec::new(),
        }
    }

    /// Drop any partial frame and hunt for the next SYNC byte.
    pub fn resync(&mut self) {
        self.state = DecodeState::Sync;
        self.kind = 0;
        self.expected = 0;
        self.buffer.clear();
    }

    /// Feed one received byte.
    ///
    /// Returns `Ok(Some(frame))` when a complete valid frame closes,
    /// `Ok(None)` while more bytes are needed. On error the decoder has
    /// already resynchronized and can keep being fed.
    pub fn feed(&mut self, byte: u8) -> Result<Option<Frame>, FrameError> {
        match self.state {
            DecodeState::Sync => {
                if byte == FRAME_SYNC {
                    self.state = DecodeState::Kind;
                }
                // Garbage between frames is silently skipped
                Ok(None)
            }
            DecodeState::Kind => {
                self.kind = byte;
                self.state = DecodeState::Len;
                Ok(None)
            }
            DecodeState::Len => {
                if byte as usize > MAX_PAYLOAD {
                    self.resync();
                    return Err(FrameError::Malformed);
                }
                self.expected = byte;
                self.buffer.clear();
                self.state = if byte == 0 {
                    DecodeState::Check
                } else {
                    DecodeState::Payload
                };
                Ok(None)
            }
            DecodeState::Payload => {
                // Cannot overflow: expected is bounded by MAX_PAYLOAD
                let _ = self.buffer.push(byte);
                if self.buffer.len() == self.expected as usize {
                    self.state = DecodeState::Check;
                }
                Ok(None)
            }
            DecodeState::Check => {
                let expected = Frame::checksum(self.kind, &self.buffer);
                if byte != expected {
                    self.resync();
                    return Err(FrameError::BadChecksum);
                }

                let frame = Frame {
                    kind: self.kind,
                    payload: self.buffer.clone(),
                };
                self.resync();
                Ok(Some(frame))
            }
        }
    }

    /// Feed a run of bytes, returning the first complete frame found.
    pub fn feed_slice(&mut self, bytes: &[u8]) -> Result<Option<Frame>, FrameError> {
        for &byte in bytes {
            if let Some(frame) = self.feed(byte)? {
                return Ok(Some(frame));
            }
        }
        Ok(None)
    }
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_encode_bare_frame() {
        let frame = Frame::bare(0x10);
        let mut buffer = [0u8; 8];
        let len = frame.encode(&mut buffer).unwrap();

        assert_eq!(len, 4);
        assert_eq!(buffer[0], FRAME_SYNC);
        assert_eq!(buffer[1], 0x10);
        assert_eq!(buffer[2], 0);
        // 0x10 + 0x00 + checksum == 0 (mod 256)
        assert_eq!(buffer[3], 0x10u8.wrapping_neg());
    }

    #[test]
    fn test_frame_bytes_sum_to_zero() {
        let frame = Frame::new(0x11, &[1, 2, 3, 4]).unwrap();
        let encoded = frame.encode_to_vec();
        let sum: u8 = encoded[1..]
            .iter()
            .fold(0u8, |acc, &b| acc.wrapping_add(b));
        assert_eq!(sum, 0);
    }

    #[test]
    fn test_roundtrip() {
        let original = Frame::new(0x11, &[0, 15, 255, 0, 0, b'R', b'E', b'A']).unwrap();
        let encoded = original.encode_to_vec();

        let mut decoder = Decoder::new();
        let decoded = decoder.feed_slice(&encoded).unwrap().unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn test_bad_checksum_resyncs() {
        let frame = Frame::bare(0x1F);
        let mut encoded = frame.encode_to_vec();
        let last = encoded.len() - 1;
        encoded[last] ^= 0x55;

        let mut decoder = Decoder::new();
        assert_eq!(decoder.feed_slice(&encoded), Err(FrameError::BadChecksum));

        // A clean frame right after is still decoded
        let clean = Frame::bare(0x1F).encode_to_vec();
        let decoded = decoder.feed_slice(&clean).unwrap().unwrap();
        assert_eq!(decoded.kind, 0x1F);
    }

    #[test]
    fn test_resync_after_garbage() {
        let frame = Frame::new(0x02, &[]).unwrap();
        let encoded = frame.encode_to_vec();

        let mut bytes: Vec<u8, 32> = Vec::new();
        bytes.extend_from_slice(&[0x00, 0xFF, 0x13, 0x37]).unwrap();
        bytes.extend_from_slice(&encoded).unwrap();

        let mut decoder = Decoder::new();
        let decoded = decoder.feed_slice(&bytes).unwrap().unwrap();
        assert_eq!(decoded.kind, 0x02);
    }

    #[test]
    fn test_oversize_payload_rejected() {
        let payload = [0u8; MAX_PAYLOAD + 1];
        assert_eq!(Frame::new(0x11, &payload), Err(FrameError::Oversize));
    }

    #[test]
    fn test_oversize_length_byte_rejected() {
        let mut decoder = Decoder::new();
        decoder.feed(FRAME_SYNC).unwrap();
        decoder.feed(0x11).unwrap();
        assert_eq!(decoder.feed(250), Err(FrameError::Malformed));
    }

    proptest! {
        #[test]
        fn any_legal_frame_roundtrips(kind in 0u8..=255, payload in proptest::collection::vec(0u8..=255, 0..=MAX_PAYLOAD)) {
            let frame = Frame::new(kind, &payload).unwrap();
            let encoded = frame.encode_to_vec();
            let mut decoder = Decoder::new();
            let decoded = decoder.feed_slice(&encoded).unwrap();
            prop_assert_eq!(decoded, Some(frame));
        }

        #[test]
        fn decoder_never_panics_on_noise(noise in proptest::collection::vec(0u8..=255, 0..256)) {
            let mut decoder = Decoder::new();
            for byte in noise {
                let _ = decoder.feed(byte);
            }
        }
    }
}
