//! Fixed-point hue wheel
//!
//! The wheel is quantized into 25 samples: six sectors of four sub-steps
//! each (red → yellow → green → cyan → blue → magenta → red), plus a final
//! sample that wraps back onto sector 0 and duplicates sample 0. Renderers
//! interpolating near the top of the table read that duplicate as a
//! sentinel, so it is kept.
//!
//! Within every sector one channel is pinned to 0 and the other two trade
//! off against each other. The two profiles differ in how they trade:
//!
//! - **constant**: the two live channels always sum to `FIXMAX`, with the
//!   leading one following a half-slope roll-off curve.
//! - **bright**: one channel is pinned to `FIXMAX` and the other ramps
//!   linearly.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, TableError};
use crate::fixed::{Fixed, FIXMAX};

/// Number of samples in a hue table
pub const HUE_SAMPLES: usize = 25;

/// Highest valid hue index
pub const MAX_HUE_INDEX: u32 = (HUE_SAMPLES - 1) as u32;

/// Fixed-point width of one sub-step inside a sector
pub const SUBSTEP: Fixed = FIXMAX / 4;

/// Number of color sectors on the wheel
pub const SECTORS: u32 = 6;

/// An RGB color with fixed-point channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: Fixed,
    pub g: Fixed,
    pub b: Fixed,
}

impl Rgb {
    /// Create a new color
    pub const fn new(r: Fixed, g: Fixed, b: Fixed) -> Self {
        Self { r, g, b }
    }

    /// Channels as an array, in `r, g, b` order
    pub const fn channels(&self) -> [Fixed; 3] {
        [self.r, self.g, self.b]
    }
}

/// Which brightness profile a table follows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HueProfile {
    /// Live channels sum to `FIXMAX`
    Constant,
    /// One channel held at `FIXMAX`
    Bright,
}

impl HueProfile {
    /// Evaluate this profile at one hue index
    pub fn sample(self, hue: HueIndex) -> Rgb {
        match self {
            HueProfile::Constant => constant_hue(hue),
            HueProfile::Bright => bright_hue(hue),
        }
    }
}

/// Index of one sample on the 25-step wheel
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct HueIndex(u32);

impl HueIndex {
    /// Checked constructor
    pub fn new(hue: u32) -> Result<Self> {
        if hue > MAX_HUE_INDEX {
            return Err(TableError::HueIndexOutOfRange { hue });
        }
        Ok(Self(hue))
    }

    /// Every valid index, `0..=24`
    pub fn all() -> impl Iterator<Item = HueIndex> {
        (0..=MAX_HUE_INDEX).map(HueIndex)
    }

    /// Raw index value
    pub fn get(self) -> u32 {
        self.0
    }

    /// Color sector, `0..6`
    pub fn sector(self) -> u32 {
        (self.0 >> 2) % SECTORS
    }

    /// Leading offset inside the sector
    pub fn offset(self) -> Fixed {
        (self.0 & 3) as Fixed * SUBSTEP
    }

    /// Trailing offset, `FIXMAX - offset()`
    pub fn complement(self) -> Fixed {
        FIXMAX - self.offset()
    }
}

impl TryFrom<u32> for HueIndex {
    type Error = TableError;

    fn try_from(hue: u32) -> Result<Self> {
        HueIndex::new(hue)
    }
}

impl From<HueIndex> for u32 {
    fn from(hue: HueIndex) -> u32 {
        hue.0
    }
}

/// Roll-off curve for the constant profile: `FIXMAX - offset/2`
#[inline]
pub fn hue_curve(offset: Fixed) -> Fixed {
    FIXMAX - (offset >> 1)
}

/// Constant-brightness wheel sample
pub fn constant_hue(hue: HueIndex) -> Rgb {
    let o1 = hue.offset();
    let o2 = hue.complement();
    match hue.sector() {
        0 => {
            let r = hue_curve(o1);
            Rgb::new(r, FIXMAX - r, 0)
        }
        1 => {
            let g = hue_curve(o2);
            Rgb::new(FIXMAX - g, g, 0)
        }
        2 => {
            let g = hue_curve(o1);
            Rgb::new(0, g, FIXMAX - g)
        }
        3 => {
            let b = hue_curve(o2);
            Rgb::new(0, FIXMAX - b, b)
        }
        4 => {
            let b = hue_curve(o1);
            Rgb::new(FIXMAX - b, 0, b)
        }
        _ => {
            let r = hue_curve(o2);
            Rgb::new(r, 0, FIXMAX - r)
        }
    }
}

/// Full-brightness wheel sample
pub fn bright_hue(hue: HueIndex) -> Rgb {
    let o1 = hue.offset();
    let o2 = hue.complement();
    match hue.sector() {
        0 => Rgb::new(FIXMAX, o1, 0),
        1 => Rgb::new(o2, FIXMAX, 0),
        2 => Rgb::new(0, FIXMAX, o1),
        3 => Rgb::new(0, o2, FIXMAX),
        4 => Rgb::new(o1, 0, FIXMAX),
        _ => Rgb::new(FIXMAX, 0, o2),
    }
}

/// Channel index (`0 = r, 1 = g, 2 = b`) pinned to 0 throughout a sector
pub fn pinned_channel(sector: u32) -> usize {
    match sector % SECTORS {
        0 | 1 => 2,
        2 | 3 => 0,
        _ => 1,
    }
}

/// Channel index held at `FIXMAX` by the bright profile in a sector
pub fn held_channel(sector: u32) -> usize {
    match sector % SECTORS {
        0 | 5 => 0,
        1 | 2 => 1,
        _ => 2,
    }
}

/// Check one sample against the wheel invariant
///
/// Every channel must be in `0..=FIXMAX`, the sector's pinned channel must
/// be 0 and the sample must not be black. Bright samples must also hold
/// the sector's held channel at `FIXMAX`. At a sector's first sub-step the
/// live channel is also 0 (pure red, green or blue), so a second zero is
/// allowed there.
pub fn check_hue_sample(hue: HueIndex, profile: HueProfile, rgb: Rgb) -> Result<()> {
    let channels = rgb.channels();
    let invariant = |reason: String| TableError::HueInvariant {
        hue: hue.get(),
        reason,
    };

    if let Some(c) = channels.iter().find(|c| !(0..=FIXMAX).contains(*c)) {
        return Err(invariant(format!("channel value {} outside 0..={}", c, FIXMAX)));
    }

    let pinned = pinned_channel(hue.sector());
    if channels[pinned] != 0 {
        return Err(invariant(format!("pinned channel {} is {}", pinned, channels[pinned])));
    }

    if channels.iter().all(|&c| c == 0) {
        return Err(invariant("sample is black".to_string()));
    }

    if profile == HueProfile::Bright {
        let held = held_channel(hue.sector());
        if channels[held] != FIXMAX {
            return Err(invariant(format!("held channel {} is {}", held, channels[held])));
        }
    }

    Ok(())
}

/// Build and check a 25-sample table for one profile
pub fn hue_table(profile: HueProfile) -> Result<Vec<Rgb>> {
    let table = HueIndex::all()
        .map(|hue| {
            let rgb = profile.sample(hue);
            check_hue_sample(hue, profile, rgb).map(|_| rgb)
        })
        .collect::<Result<Vec<_>>>()?;

    debug!(?profile, samples = table.len(), "generated hue table");
    Ok(table)
}

/// The `hue_constant_table` rows
pub fn hue_constant_table() -> Result<Vec<Rgb>> {
    hue_table(HueProfile::Constant)
}

/// The `hue_bright_table` rows
pub fn hue_bright_table() -> Result<Vec<Rgb>> {
    hue_table(HueProfile::Bright)
}
