use std::ops::{BitOr, BitOrAssign};

/// Color pair identifiers. The render driver maps each to concrete colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum ColorPair {
    Default = 0,
    Header = 1,
    SelectedTab = 2,
    Text = 3,
    Accent = 4,
    Positive = 5,
    Info = 6,
}

impl ColorPair {
    fn from_bits(bits: u16) -> Self {
        match bits {
            1 => ColorPair::Header,
            2 => ColorPair::SelectedTab,
            3 => ColorPair::Text,
            4 => ColorPair::Accent,
            5 => ColorPair::Positive,
            6 => ColorPair::Info,
            _ => ColorPair::Default,
        }
    }
}

/// Color pair in the low byte, attribute flags above it.
///
/// Combine with `|`: `SegmentStyle::pair(ColorPair::Text) | SegmentStyle::BOLD`.
/// OR-ing two styles that carry different color pairs is not meaningful;
/// attribute flags never touch the pair bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SegmentStyle(u16);

const PAIR_MASK: u16 = 0x00ff;

impl SegmentStyle {
    pub const PLAIN: SegmentStyle = SegmentStyle(0);
    pub const BOLD: SegmentStyle = SegmentStyle(1 << 8);
    pub const UNDERLINE: SegmentStyle = SegmentStyle(1 << 9);
    /// Layered on by the highlight splicer over a search match.
    pub const HIGHLIGHT: SegmentStyle = SegmentStyle(1 << 10);
    /// Layered on the highlighted pieces of the selected match.
    pub const CURRENT: SegmentStyle = SegmentStyle(1 << 11);

    pub const fn pair(pair: ColorPair) -> Self {
        SegmentStyle(pair as u16)
    }

    pub fn color_pair(self) -> ColorPair {
        ColorPair::from_bits(self.0 & PAIR_MASK)
    }

    pub const fn contains(self, flag: SegmentStyle) -> bool {
        self.0 & flag.0 & !PAIR_MASK == flag.0 & !PAIR_MASK
    }
}

impl BitOr for SegmentStyle {
    type Output = SegmentStyle;

    fn bitor(self, rhs: SegmentStyle) -> SegmentStyle {
        SegmentStyle(self.0 | rhs.0)
    }
}

impl BitOrAssign for SegmentStyle {
    fn bitor_assign(&mut self, rhs: SegmentStyle) {
        self.0 |= rhs.0;
    }
}

pub const TEXT: SegmentStyle = SegmentStyle::pair(ColorPair::Text);
pub const ACCENT: SegmentStyle = SegmentStyle::pair(ColorPair::Accent);
pub const POSITIVE: SegmentStyle = SegmentStyle::pair(ColorPair::Positive);
pub const INFO: SegmentStyle = SegmentStyle::pair(ColorPair::Info);
