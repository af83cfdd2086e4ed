//! Landmark types delivered by the tracker once per camera frame.
//!
//! MediaPipe Holistic reports a face mesh plus up to two 21-point hands,
//! all in normalized image coordinates (0-1). A set that is missing from
//! a frame simply means that body part was not tracked.

use std::str::FromStr;

use nalgebra::Point2;

use crate::error::GameError;

// ============================================================================
// LANDMARK INDICES
// ============================================================================

/// Face mesh nose tip
pub const NOSE: usize = 1;

/// Middle finger MCP - used as the position proxy for the whole hand
pub const MIDDLE_MCP: usize = 9;

/// Reference point used for all hand gesture math
pub const HAND_REFERENCE: usize = MIDDLE_MCP;

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// A single landmark in normalized image space
pub type Landmark = Point2<f32>;

/// Tracked hand
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Hand {
    Left,
    Right,
}

impl Hand {
    pub fn as_str(&self) -> &'static str {
        match self {
            Hand::Left => "left",
            Hand::Right => "right",
        }
    }

    pub fn other(&self) -> Hand {
        match self {
            Hand::Left => Hand::Right,
            Hand::Right => Hand::Left,
        }
    }
}

impl FromStr for Hand {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "left" => Ok(Hand::Left),
            "right" => Ok(Hand::Right),
            _ => Err(GameError::UnknownHand(s.to_string())),
        }
    }
}

/// Horizontal direction in image space (slap direction, boss dodge side)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Direction of a horizontal displacement; positive x is right
    pub fn from_dx(dx: f32) -> Side {
        if dx > 0.0 {
            Side::Right
        } else {
            Side::Left
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

/// Indexed point set for one body part
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LandmarkSet {
    points: Vec<Landmark>,
}

impl LandmarkSet {
    pub fn new(points: Vec<Landmark>) -> Self {
        Self { points }
    }

    /// Build from interleaved coordinates with the given stride
    /// (2 for x,y or 3 for x,y,z). Extra components are ignored.
    ///
    /// Returns None if the buffer length is not a multiple of the stride.
    pub fn from_flat(data: &[f32], stride: usize) -> Option<Self> {
        if stride < 2 || data.len() % stride != 0 {
            return None;
        }
        let points = data
            .chunks_exact(stride)
            .map(|c| Landmark::new(c[0], c[1]))
            .collect();
        Some(Self { points })
    }

    pub fn get(&self, index: usize) -> Option<Landmark> {
        self.points.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Nose tip, if this is a face mesh with enough points
    pub fn nose(&self) -> Option<Landmark> {
        self.get(NOSE)
    }

    /// Hand position proxy, if this is a hand with enough points
    pub fn hand_reference(&self) -> Option<Landmark> {
        self.get(HAND_REFERENCE)
    }
}

/// Everything the tracker reported for one frame
#[derive(Clone, Debug, Default)]
pub struct FrameSnapshot {
    pub face: Option<LandmarkSet>,
    pub left_hand: Option<LandmarkSet>,
    pub right_hand: Option<LandmarkSet>,
}

impl FrameSnapshot {
    pub fn hand(&self, hand: Hand) -> Option<&LandmarkSet> {
        match hand {
            Hand::Left => self.left_hand.as_ref(),
            Hand::Right => self.right_hand.as_ref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_flat_xyz() {
        let set = LandmarkSet::from_flat(&[0.1, 0.2, 0.0, 0.3, 0.4, -0.1], 3).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.get(1), Some(Landmark::new(0.3, 0.4)));
        assert_eq!(set.get(2), None);
    }

    #[test]
    fn test_from_flat_rejects_ragged_buffer() {
        assert!(LandmarkSet::from_flat(&[0.1, 0.2, 0.3, 0.4], 3).is_none());
        assert!(LandmarkSet::from_flat(&[0.1], 1).is_none());
    }

    #[test]
    fn test_short_hand_has_no_reference() {
        let set = LandmarkSet::new(vec![Landmark::new(0.5, 0.5); 5]);
        assert!(set.hand_reference().is_none());
        assert!(set.nose().is_some());
    }

    #[test]
    fn test_side_from_dx() {
        assert_eq!(Side::from_dx(0.07), Side::Right);
        assert_eq!(Side::from_dx(-0.07), Side::Left);
    }

    #[test]
    fn test_hand_parse() {
        assert_eq!("LEFT".parse::<Hand>().unwrap(), Hand::Left);
        assert_eq!(Hand::Right.other(), Hand::Left);
        assert!("middle".parse::<Hand>().is_err());
    }
}
