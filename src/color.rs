//! RGB color support for the adaptive display style.
//!
//! Colors use the `smart_leds` RGB8 type so presenters can hand them
//! straight to LED or framebuffer drivers.

use smart_leds::RGB8;

pub type Rgb = RGB8;

/// Text color used over dark backgrounds.
pub const WHITE: Rgb = Rgb {
    r: 255,
    g: 255,
    b: 255,
};

/// Text color used over light backgrounds.
pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// Create an RGB color from a u32 value (0xRRGGBB format)
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}

/// Interpolate linearly between two colors.
///
/// `t` is clamped to `[0, 1]` before use: 0 yields `from` and 1 yields `to`,
/// channel for channel.
pub fn lerp_rgb(from: Rgb, to: Rgb, t: f32) -> Rgb {
    let t = t.clamp(0.0, 1.0);
    Rgb {
        r: lerp_channel(from.r, to.r, t),
        g: lerp_channel(from.g, to.g, t),
        b: lerp_channel(from.b, to.b, t),
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn lerp_channel(from: u8, to: u8, t: f32) -> u8 {
    let from = f32::from(from);
    let to = f32::from(to);
    libm::roundf(from + t * (to - from)) as u8
}
