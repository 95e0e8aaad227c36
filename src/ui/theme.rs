use ratatui::style::Color;

use crate::{cli::ColorArg, domain::weather::BackgroundClass};

mod capability;
mod data;

use capability::{TermEnv, capability_for};
use data::{DARK_SURFACES, LIGHT_SURFACES, Rgb, gradient_seed};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorCapability {
    TrueColor,
    Xterm256,
    Basic16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Left edge of the backdrop gradient, unquantized so it can be interpolated.
    pub start: Color,
    /// Right edge of the backdrop gradient, unquantized.
    pub end: Color,
    pub capability: ColorCapability,
    pub surface: Color,
    pub text: Color,
    pub muted_text: Color,
    pub accent: Color,
    pub border: Color,
    pub danger: Color,
    pub particle: Color,
}

#[must_use]
pub fn detect_color_capability(mode: ColorArg) -> ColorCapability {
    capability_for(mode, &TermEnv::from_process())
}

/// Palette for a backdrop class. Dark mode dims the gradient and swaps the card surfaces.
#[must_use]
pub fn theme_for(background: BackgroundClass, dark: bool, capability: ColorCapability) -> Theme {
    let (mut start, mut end) = gradient_seed(background);
    if dark {
        start = dim(start);
        end = dim(end);
    }
    let surfaces = if dark { DARK_SURFACES } else { LIGHT_SURFACES };
    let rgb = |(r, g, b): Rgb| quantize(Color::Rgb(r, g, b), capability);

    Theme {
        start: Color::Rgb(start.0, start.1, start.2),
        end: Color::Rgb(end.0, end.1, end.2),
        capability,
        surface: rgb(surfaces.surface),
        text: rgb(surfaces.text),
        muted_text: rgb(surfaces.muted),
        accent: rgb((59, 130, 246)),
        border: rgb(surfaces.border),
        danger: rgb((239, 68, 68)),
        particle: rgb(surfaces.particle),
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn dim((r, g, b): Rgb) -> Rgb {
    let scale = |v: u8| (f32::from(v) * 0.32).round() as u8;
    (scale(r), scale(g), scale(b))
}

#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn quantize(color: Color, capability: ColorCapability) -> Color {
    match (capability, color) {
        (ColorCapability::TrueColor, c) => c,
        (ColorCapability::Xterm256, Color::Rgb(r, g, b)) => {
            let to_cube = |v: u8| -> u8 { ((f32::from(v) / 255.0) * 5.0).round() as u8 };
            let index = 16 + 36 * to_cube(r) + 6 * to_cube(g) + to_cube(b);
            Color::Indexed(index)
        }
        (ColorCapability::Basic16, Color::Rgb(r, g, b)) => basic16_from_rgb(r, g, b),
        (_, c) => c,
    }
}

fn basic16_from_rgb(r: u8, g: u8, b: u8) -> Color {
    let rf = f32::from(r) / 255.0;
    let gf = f32::from(g) / 255.0;
    let bf = f32::from(b) / 255.0;

    let max = rf.max(gf.max(bf));
    let min = rf.min(gf.min(bf));
    let delta = max - min;
    let light = (max + min) / 2.0;

    if delta < 0.08 {
        return match light {
            l if l < 0.20 => Color::Black,
            l if l < 0.40 => Color::DarkGray,
            l if l < 0.72 => Color::Gray,
            _ => Color::White,
        };
    }

    let hue = if (max - rf).abs() < f32::EPSILON {
        60.0 * ((gf - bf) / delta).rem_euclid(6.0)
    } else if (max - gf).abs() < f32::EPSILON {
        60.0 * (((bf - rf) / delta) + 2.0)
    } else {
        60.0 * (((rf - gf) / delta) + 4.0)
    };

    let bright = light >= 0.55;
    let (normal, light_variant) = match hue {
        h if !(30.0..330.0).contains(&h) => (Color::Red, Color::LightRed),
        h if h < 90.0 => (Color::Yellow, Color::LightYellow),
        h if h < 150.0 => (Color::Green, Color::LightGreen),
        h if h < 210.0 => (Color::Cyan, Color::LightCyan),
        h if h < 270.0 => (Color::Blue, Color::LightBlue),
        _ => (Color::Magenta, Color::LightMagenta),
    };
    if bright { light_variant } else { normal }
}
