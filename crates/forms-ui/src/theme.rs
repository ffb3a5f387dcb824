use std::ops::Index;

/// An opaque sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Construct a color from its channel values.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS hex form, `#rrggbb`.
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// CSS `rgba(...)` form with the given alpha.
    pub fn with_alpha(&self, alpha: f32) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}

/// Subtract `amount` from full opacity.
///
/// `transparentize(0.92, c)` yields `c` at alpha 0.08 — the soft ambient
/// halo used by focused inputs.
pub fn transparentize(amount: f32, color: Color) -> String {
    color.with_alpha(((1.0 - amount) * 100.0).round() / 100.0)
}

/// An ordered palette ramp, indexed by rank.
///
/// Rank 0 is the base shade; higher ranks move toward the ramp's extreme
/// (lighter for `lights`, darker for `darks`, and so on).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ramp(pub [Color; 5]);

impl Index<usize> for Ramp {
    type Output = Color;

    fn index(&self, rank: usize) -> &Color {
        &self.0[rank]
    }
}

/// The color palette consumed by every component.
///
/// Passed down explicitly as a prop; components default to
/// [`Palette::default`] when the host does not supply one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary: Ramp,
    pub lights: Ramp,
    pub darks: Ramp,
    pub reds: Ramp,
    /// Default body text color.
    pub text: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            primary: Ramp([
                Color::rgb(0x34, 0x58, 0xd4),
                Color::rgb(0x4d, 0x6f, 0xe0),
                Color::rgb(0x6e, 0x8c, 0xeb),
                Color::rgb(0x9d, 0xb1, 0xf2),
                Color::rgb(0xcc, 0xd8, 0xf8),
            ]),
            lights: Ramp([
                Color::rgb(0xd6, 0xdb, 0xe4),
                Color::rgb(0xe3, 0xe7, 0xee),
                Color::rgb(0xee, 0xf1, 0xf5),
                Color::rgb(0xf5, 0xf7, 0xfa),
                Color::rgb(0xfb, 0xfc, 0xfe),
            ]),
            darks: Ramp([
                Color::rgb(0x10, 0x14, 0x1c),
                Color::rgb(0x2a, 0x33, 0x42),
                Color::rgb(0x47, 0x52, 0x64),
                Color::rgb(0x5d, 0x6b, 0x80),
                Color::rgb(0x85, 0x93, 0xa6),
            ]),
            reds: Ramp([
                Color::rgb(0xc4, 0x23, 0x48),
                Color::rgb(0xe0, 0x26, 0x5a),
                Color::rgb(0xea, 0x5c, 0x83),
                Color::rgb(0xf1, 0x93, 0xac),
                Color::rgb(0xf8, 0xc9, 0xd6),
            ]),
            text: Color::rgb(0x1b, 0x27, 0x33),
        }
    }
}

/// Size variant shared by labels and inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControlSize {
    #[default]
    Medium,
    Large,
}

/// Fixed geometry preset for one [`ControlSize`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeGeometry {
    pub height: u32,
    pub padding_x: u32,
    pub font_size: u32,
    pub line_height: f32,
    pub letter_spacing: f32,
}

impl ControlSize {
    /// The geometry preset for this size. Exactly two presets exist.
    pub fn geometry(&self) -> SizeGeometry {
        match self {
            ControlSize::Medium => SizeGeometry {
                height: 40,
                padding_x: 12,
                font_size: 15,
                line_height: 1.33,
                letter_spacing: -0.2,
            },
            ControlSize::Large => SizeGeometry {
                height: 48,
                padding_x: 16,
                font_size: 17,
                line_height: 1.53,
                letter_spacing: -0.3,
            },
        }
    }
}
