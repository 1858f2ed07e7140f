//! Banner animation effects.

use ratatui::layout::Rect;

use circles_engine::{BannerEffect, BannerEffectKind};

/// Apply a banner effect to transform the base rectangle.
#[must_use]
pub fn apply_banner_effect(effect: &BannerEffect, base: Rect, viewport: Rect) -> Rect {
    match effect.kind() {
        BannerEffectKind::PopScale => {
            let t = ease_out_cubic(effect.progress());
            let scale = 0.6 + 0.4 * t;
            scale_rect(base, scale)
        }
        BannerEffectKind::Shake => {
            let t = effect.progress().clamp(0.0, 1.0);
            let decay = 1.0 - t;
            let oscillations = 4.0;
            let amplitude = 3.0;
            let offset = (f32::sin(t * std::f32::consts::TAU * oscillations) * amplitude * decay)
                .round() as i32;
            let viewport_left = i32::from(viewport.x);
            let viewport_right = i32::from(viewport.x) + i32::from(viewport.width);
            let max_x = (viewport_right - i32::from(base.width)).max(viewport_left);
            let base_x = i32::from(base.x);
            let x = (base_x + offset).clamp(viewport_left, max_x) as u16;
            Rect { x, ..base }
        }
    }
}

fn scale_rect(base: Rect, scale: f32) -> Rect {
    let width = (f32::from(base.width) * scale).round() as u16;
    let width = width.max(1).min(base.width);
    let x = base.x + (base.width.saturating_sub(width) / 2);
    Rect { x, width, ..base }
}

fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use ratatui::layout::Rect;

    use circles_engine::BannerEffect;

    use super::apply_banner_effect;

    const VIEWPORT: Rect = Rect {
        x: 0,
        y: 0,
        width: 60,
        height: 20,
    };
    const BASE: Rect = Rect {
        x: 20,
        y: 10,
        width: 20,
        height: 3,
    };

    #[test]
    fn pop_starts_narrow_and_ends_full() {
        let mut effect = BannerEffect::pop_scale(Duration::from_millis(200));
        let start = apply_banner_effect(&effect, BASE, VIEWPORT);
        assert!(start.width < BASE.width);
        assert_eq!(start.height, BASE.height);

        effect.advance(Duration::from_millis(500));
        assert_eq!(apply_banner_effect(&effect, BASE, VIEWPORT), BASE);
    }

    #[test]
    fn shake_stays_inside_viewport() {
        let base = Rect { x: 0, ..BASE };
        let mut effect = BannerEffect::shake(Duration::from_millis(400));
        for _ in 0..40 {
            let rect = apply_banner_effect(&effect, base, VIEWPORT);
            assert!(rect.x + rect.width <= VIEWPORT.width);
            assert_eq!(rect.y, base.y);
            effect.advance(Duration::from_millis(10));
        }
    }

    #[test]
    fn shake_settles_at_base() {
        let mut effect = BannerEffect::shake(Duration::from_millis(100));
        effect.advance(Duration::from_millis(100));
        assert_eq!(apply_banner_effect(&effect, BASE, VIEWPORT), BASE);
    }
}
