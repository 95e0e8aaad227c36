#![allow(
    clippy::cast_lossless,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]

use ratatui::{buffer::Buffer, layout::Rect, style::Color, widgets::Widget};

use crate::ui::{
    particles::Particle,
    theme::{Theme, quantize},
};

/// Left-to-right gradient with the particle layer painted on top.
pub struct GradientBackground<'a> {
    pub theme: Theme,
    pub particles: &'a [Particle],
}

impl Widget for GradientBackground<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        paint_gradient(area, buf, self.theme);
        paint_particles(area, buf, self.particles, self.theme.particle);
    }
}

fn paint_gradient(area: Rect, buf: &mut Buffer, theme: Theme) {
    let start = color_to_rgb(theme.start);
    let end = color_to_rgb(theme.end);
    for x in area.left()..area.right() {
        let color = quantize(lerp_color(start, end, gradient_ratio(area, x)), theme.capability);
        for y in area.top()..area.bottom() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_char(' ').set_bg(color);
            }
        }
    }
}

fn gradient_ratio(area: Rect, x: u16) -> f32 {
    if area.width <= 1 {
        0.0
    } else {
        (x - area.left()) as f32 / (area.width - 1) as f32
    }
}

fn paint_particles(area: Rect, buf: &mut Buffer, particles: &[Particle], color: Color) {
    for particle in particles {
        if let Some((x, y)) = particle_position(area, particle)
            && let Some(cell) = buf.cell_mut((x, y))
        {
            cell.set_char(particle.glyph).set_fg(color);
        }
    }
}

fn particle_position(area: Rect, particle: &Particle) -> Option<(u16, u16)> {
    if !(0.0..1.0).contains(&particle.x) || !(0.0..1.0).contains(&particle.y) {
        return None;
    }
    let x = area.x + (particle.x * area.width as f32) as u16;
    let y = area.y + (particle.y * area.height as f32) as u16;
    (x < area.right() && y < area.bottom()).then_some((x, y))
}

fn color_to_rgb(c: Color) -> (f32, f32, f32) {
    match c {
        Color::Rgb(r, g, b) => (r as f32, g as f32, b as f32),
        Color::White => (255., 255., 255.),
        _ => (0., 0., 0.),
    }
}

fn lerp_color(a: (f32, f32, f32), b: (f32, f32, f32), t: f32) -> Color {
    let channel = |from: f32, to: f32| (from + (to - from) * t).clamp(0.0, 255.0) as u8;
    Color::Rgb(channel(a.0, b.0), channel(a.1, b.1), channel(a.2, b.2))
}
