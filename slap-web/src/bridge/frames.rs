//! Landmark buffers from JavaScript
//!
//! The page hands over MediaPipe results as flat Float32Arrays of
//! interleaved x, y, z triples. Any part may be missing from a frame.

use crate::tracking::{FrameSnapshot, LandmarkSet};

/// Floats per landmark (x, y, z)
pub const STRIDE: usize = 3;

/// `Ok(None)` for an empty buffer, `Err(len)` for a ragged one
fn decode(data: &[f32]) -> Result<Option<LandmarkSet>, usize> {
    if data.is_empty() {
        return Ok(None);
    }
    LandmarkSet::from_flat(data, STRIDE)
        .map(Some)
        .ok_or(data.len())
}

fn decode_or_warn(data: Option<&[f32]>, part: &str) -> Option<LandmarkSet> {
    match decode(data?) {
        Ok(set) => set,
        Err(len) => {
            web_sys::console::warn_1(
                &format!("Invalid {part} landmark data length: {len} (expected multiple of {STRIDE})")
                    .into(),
            );
            None
        }
    }
}

/// Malformed parts are dropped as if the tracker had not seen them
pub fn snapshot_from_buffers(
    face: Option<&[f32]>,
    left_hand: Option<&[f32]>,
    right_hand: Option<&[f32]>,
) -> FrameSnapshot {
    FrameSnapshot {
        face: decode_or_warn(face, "face"),
        left_hand: decode_or_warn(left_hand, "left hand"),
        right_hand: decode_or_warn(right_hand, "right hand"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracking::Landmark;

    #[test]
    fn test_decode_triples() {
        let set = decode(&[0.1, 0.2, -0.5, 0.3, 0.4, 0.0]).unwrap().unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.get(1), Some(Landmark::new(0.3, 0.4)));
    }

    #[test]
    fn test_decode_empty_is_absent() {
        assert_eq!(decode(&[]), Ok(None));
        let frame = snapshot_from_buffers(None, Some(&[][..]), None);
        assert!(frame.face.is_none());
        assert!(frame.left_hand.is_none());
    }

    #[test]
    fn test_decode_ragged() {
        assert_eq!(decode(&[0.1, 0.2, 0.3, 0.4]), Err(4));
    }
}
