//! Fixed color palette for circle outlines

use rand::Rng;
use serde::{Deserialize, Serialize};

/// One of the six outline colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Swatch {
    Rose,
    Blue,
    Green,
    Orange,
    Purple,
    Yellow,
}

/// Every swatch, in palette order
pub const PALETTE: [Swatch; 6] = [
    Swatch::Rose,
    Swatch::Blue,
    Swatch::Green,
    Swatch::Orange,
    Swatch::Purple,
    Swatch::Yellow,
];

impl Swatch {
    /// Pick a swatch uniformly at random
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        PALETTE[rng.random_range(0..PALETTE.len())]
    }

    /// 0xRRGGBB
    pub const fn hex(self) -> u32 {
        match self {
            Swatch::Rose => 0xFC3761,
            Swatch::Blue => 0x3876FD,
            Swatch::Green => 0x84CE73,
            Swatch::Orange => 0xFD8F38,
            Swatch::Purple => 0x8E4DBB,
            Swatch::Yellow => 0xFDD749,
        }
    }

    /// Opaque RGBA in 0..1, for vertex colors
    pub fn rgba(self) -> [f32; 4] {
        let hex = self.hex();
        let channel = |shift: u32| ((hex >> shift) & 0xFF) as f32 / 255.0;
        [channel(16), channel(8), channel(0), 1.0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_rgba_from_hex() {
        let [r, g, b, a] = Swatch::Rose.rgba();
        assert!((r - 252.0 / 255.0).abs() < 1e-6);
        assert!((g - 55.0 / 255.0).abs() < 1e-6);
        assert!((b - 97.0 / 255.0).abs() < 1e-6);
        assert_eq!(a, 1.0);
    }

    #[test]
    fn test_random_covers_palette() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut seen = [false; 6];
        for _ in 0..600 {
            let swatch = Swatch::random(&mut rng);
            let idx = PALETTE.iter().position(|s| *s == swatch).unwrap();
            seen[idx] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }
}
