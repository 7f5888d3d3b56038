//! Duck sprite data: two wing frames stored as palette-indexed bitmaps.
//!
//! Frames are plain index tables rather than parsed string art so the
//! renderer can paint them with a direct double loop and no per-frame
//! decoding.

/// Sprite width in logical pixels.
pub const DUCK_WIDTH: usize = 18;
/// Sprite height in logical pixels.
pub const DUCK_HEIGHT: usize = 16;

/// Palette slot 0 is transparent.
pub const DUCK_PALETTE: [Option<&str>; 8] = [
    None,
    Some("#8fd4ff"), // outline / head highlight
    Some("#3c82f6"), // body
    Some("#1f4fb7"), // wing shading
    Some("#f8fbff"), // eye white
    Some("#0a1328"), // pupil
    Some("#f7d441"), // bill
    Some("#d08e17"), // bill shadow
];

pub type DuckFrame = [[u8; DUCK_WIDTH]; DUCK_HEIGHT];

/// Two-frame waddle cycle. Frame 1 tucks the legs and dips the tail.
pub const DUCK_FRAMES: [DuckFrame; 2] = [
    [
        [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 1, 2, 2, 2, 2, 2, 2, 2, 1, 0, 0, 0, 0, 0],
        [0, 0, 0, 1, 2, 2, 2, 2, 2, 2, 2, 2, 2, 1, 0, 0, 0, 0],
        [0, 0, 1, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 1, 0, 0, 0],
        [0, 0, 1, 2, 2, 2, 2, 2, 2, 2, 4, 2, 2, 2, 1, 0, 0, 0],
        [0, 1, 2, 2, 2, 2, 2, 2, 2, 5, 2, 2, 2, 2, 2, 6, 0, 0],
        [0, 1, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 6, 6, 7, 0],
        [0, 1, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 1, 6, 0, 0],
        [0, 0, 1, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 1, 0, 0, 0],
        [0, 0, 1, 2, 2, 2, 2, 3, 3, 3, 2, 2, 2, 2, 1, 0, 0, 0],
        [0, 0, 0, 1, 2, 2, 2, 3, 3, 3, 3, 2, 2, 2, 1, 0, 0, 0],
        [0, 0, 0, 0, 1, 1, 2, 0, 0, 0, 0, 2, 2, 1, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    ],
    [
        [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 1, 2, 2, 2, 2, 2, 2, 2, 1, 0, 0, 0, 0, 0],
        [0, 0, 0, 1, 2, 2, 2, 2, 2, 2, 2, 2, 2, 1, 0, 0, 0, 0],
        [0, 0, 1, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 1, 0, 0, 0],
        [0, 0, 1, 2, 2, 2, 2, 2, 2, 2, 4, 2, 2, 2, 1, 0, 0, 0],
        [0, 1, 2, 2, 2, 2, 2, 2, 2, 5, 2, 2, 2, 2, 2, 6, 0, 0],
        [0, 1, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 6, 6, 7, 0],
        [0, 1, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 1, 6, 0, 0],
        [0, 0, 1, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 1, 0, 0, 0],
        [0, 0, 0, 1, 2, 2, 2, 2, 2, 2, 2, 2, 2, 1, 1, 0, 0, 0],
        [0, 0, 0, 1, 2, 2, 2, 2, 3, 3, 2, 1, 1, 1, 0, 0, 0, 0],
        [0, 0, 0, 0, 1, 1, 2, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    ],
];

/// Ticks each waddle frame is held on screen.
const FRAME_HOLD: u32 = 6;

/// Wing frame for the current animation counter. Airborne ducks hold frame 0.
pub fn frame_index(animation_time: u32, jumping: bool) -> usize {
    if jumping {
        0
    } else {
        ((animation_time / FRAME_HOLD) % 2) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frames_only_reference_palette_slots() {
        for frame in &DUCK_FRAMES {
            for row in frame {
                for &px in row {
                    assert!((px as usize) < DUCK_PALETTE.len());
                }
            }
        }
    }

    #[test]
    fn frame_index_cycles_on_ground_and_holds_in_air() {
        assert_eq!(frame_index(0, false), 0);
        assert_eq!(frame_index(FRAME_HOLD, false), 1);
        assert_eq!(frame_index(FRAME_HOLD * 2, false), 0);
        // A jumping duck keeps its wings in the glide pose.
        assert_eq!(frame_index(FRAME_HOLD, true), 0);
        assert_eq!(frame_index(u32::MAX, true), 0);
    }
}
