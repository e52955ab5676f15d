//! Enclosure geometry shared by movement logic and cages.

use serde::{Deserialize, Serialize};

/// Default enclosure width in position units.
pub const DEFAULT_ENCLOSURE_WIDTH: u32 = 800;

/// Default enclosure height in position units.
pub const DEFAULT_ENCLOSURE_HEIGHT: u32 = 400;

/// The bounded rectangle an animal moves inside.
///
/// Positions are valid on the closed ranges `[0, width]` and
/// `[0, height]`; the bounds themselves are reachable (an animal
/// clamped to a wall sits exactly on it).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enclosure {
    /// Maximum horizontal position.
    pub width: u32,
    /// Maximum vertical position (the floor).
    pub height: u32,
}

impl Enclosure {
    /// Create an enclosure with the given bounds.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Whether the point lies within the enclosure (bounds inclusive).
    pub const fn contains(&self, x: u32, y: u32) -> bool {
        x <= self.width && y <= self.height
    }
}

impl Default for Enclosure {
    fn default() -> Self {
        Self::new(DEFAULT_ENCLOSURE_WIDTH, DEFAULT_ENCLOSURE_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_inclusive() {
        let enclosure = Enclosure::default();
        assert!(enclosure.contains(0, 0));
        assert!(enclosure.contains(800, 400));
        assert!(!enclosure.contains(801, 0));
        assert!(!enclosure.contains(0, 401));
    }
}
