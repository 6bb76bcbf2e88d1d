use crate::model::OverlayStyle;
use egui::{Color32, Painter, Pos2, Rect, Stroke, Vec2, pos2};
use std::f32::consts::TAU;

/// Fondo animado. `t` son segundos desde el arranque; no guarda estado.
pub fn paint(painter: &Painter, rect: Rect, style: OverlayStyle, t: f32) {
    match style {
        OverlayStyle::Stars => stars(painter, rect, t),
        OverlayStyle::Grid => grid(painter, rect, t),
        OverlayStyle::Waves => waves(painter, rect, t),
        OverlayStyle::Modular => modular(painter, rect, t),
        OverlayStyle::Horizon => horizon(painter, rect, t),
    }
}

/// Posición pseudoaleatoria estable en [0, 1).
fn unit_hash(seed: u32) -> f32 {
    let mut x = seed.wrapping_mul(0x9E37_79B9) ^ 0x85EB_CA6B;
    x ^= x >> 15;
    x = x.wrapping_mul(0x2C1B_3C6D);
    x ^= x >> 12;
    (x % 10_000) as f32 / 10_000.0
}

fn stars(painter: &Painter, rect: Rect, t: f32) {
    for i in 0..140u32 {
        let x = rect.left() + unit_hash(i * 2) * rect.width();
        let y = rect.top() + unit_hash(i * 2 + 1) * rect.height();
        let twinkle = ((t * 1.5 + i as f32).sin() + 1.0) / 2.0;
        let alpha = (40.0 + twinkle * 150.0) as u8;
        painter.circle_filled(pos2(x, y), 1.0 + unit_hash(i + 999) * 1.5, Color32::from_white_alpha(alpha));
    }
}

fn grid(painter: &Painter, rect: Rect, t: f32) {
    let step = 50.0;
    let offset = (t * 2.5) % step;
    let color = Color32::from_white_alpha(25);
    let mut y = rect.top() + offset;
    while y < rect.bottom() {
        let mut x = rect.left();
        while x < rect.right() {
            painter.circle_filled(pos2(x, y), 1.2, color);
            x += step;
        }
        y += step;
    }
}

fn waves(painter: &Painter, rect: Rect, t: f32) {
    for (line, (base, width, period)) in [(0.5, 1.0, 10.0), (0.6, 0.5, 12.0)].into_iter().enumerate() {
        let amplitude = rect.height() * 0.1 * (t * TAU / period).sin();
        let points: Vec<Pos2> = (0..=64)
            .map(|i| {
                let u = i as f32 / 64.0;
                let x = rect.left() + u * rect.width();
                let y = rect.top() + rect.height() * base + amplitude * (u * TAU + line as f32).sin();
                pos2(x, y)
            })
            .collect();
        painter.line(points, Stroke::new(width, Color32::from_white_alpha(50)));
    }
}

fn modular(painter: &Painter, rect: Rect, t: f32) {
    for i in 0..6 {
        let period = 5.0 + i as f32;
        let phase = ((t * TAU / period).sin() + 1.0) / 2.0;
        let side = (100.0 + i as f32 * 50.0) * (0.8 + 0.3 * phase);
        let square = Rect::from_center_size(rect.center(), Vec2::splat(side));
        let alpha = (15.0 + phase * 60.0) as u8;
        painter.rect_stroke(
            square,
            side * 0.1,
            Stroke::new(1.0, Color32::from_white_alpha(alpha)),
            egui::StrokeKind::Middle,
        );
    }
}

fn horizon(painter: &Painter, rect: Rect, t: f32) {
    let lower = Rect::from_min_max(pos2(rect.left(), rect.center().y), rect.max);
    painter.rect_filled(lower, 0.0, Color32::from_white_alpha(8));
    let sweep = ((t * TAU / 8.0).sin() + 1.0) / 2.0;
    let y = rect.top() + rect.height() * (0.35 + 0.3 * sweep);
    painter.line_segment(
        [pos2(rect.left(), y), pos2(rect.right(), y)],
        Stroke::new(2.0, Color32::from_white_alpha(45)),
    );
}
