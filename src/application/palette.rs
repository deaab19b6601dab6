use rand::Rng;
use serde::{Deserialize, Serialize};

/// Plain 8-bit RGB triple, independent of any drawing backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const WHITE: Rgb = Rgb(255, 255, 255);

    fn random<R: Rng>(rng: &mut R) -> Self {
        Rgb(rng.random(), rng.random(), rng.random())
    }
}

/// Colours offered by the menu selectors
pub const NAMED_COLORS: &[(&str, Rgb)] = &[
    ("Black", Rgb(0, 0, 0)),
    ("White", Rgb(255, 255, 255)),
    ("Red", Rgb(255, 0, 0)),
    ("Green", Rgb(0, 255, 0)),
    ("Blue", Rgb(0, 0, 255)),
    ("Yellow", Rgb(255, 255, 0)),
    ("Purple", Rgb(255, 0, 255)),
    ("Cyan", Rgb(0, 255, 255)),
];

/// Colours used to draw a run
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub dead: Rgb,
    pub alive: Rgb,
    pub border: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            dead: Rgb::BLACK,
            alive: Rgb::WHITE,
            border: Rgb::WHITE,
        }
    }
}

impl Palette {
    /// Replace every colour with a uniformly random one
    pub fn randomized<R: Rng>(rng: &mut R) -> Self {
        Self {
            dead: Rgb::random(rng),
            alive: Rgb::random(rng),
            border: Rgb::random(rng),
        }
    }
}

/// Position of a colour in `NAMED_COLORS`, if it is one of them
pub fn named_index(color: Rgb) -> Option<usize> {
    NAMED_COLORS.iter().position(|&(_, c)| c == color)
}
