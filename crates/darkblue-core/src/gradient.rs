//! Color/alpha key gradients, with the inspection and bulk-edit helpers used
//! when tuning sky color ramps.

use glam::{Vec3, Vec4};
use serde::{Deserialize, Serialize};

use crate::math::{inverse_lerp, lerp};

/// Opaque black, the start point of brightness scaling.
const BLACK: Vec4 = Vec4::new(0.0, 0.0, 0.0, 1.0);

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorKey {
    /// RGBA, 0.0–1.0 per channel.
    pub color: Vec4,
    /// Position along the gradient (0.0–1.0).
    pub time: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlphaKey {
    pub alpha: f32,
    pub time: f32,
}

/// A gradient made of independent color and alpha key lists, each kept
/// sorted by time. Keys can only be supplied through [`Gradient::new`].
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Gradient {
    color_keys: Vec<ColorKey>,
    alpha_keys: Vec<AlphaKey>,
}

/// Per-channel linear interpolation between two colors. `t` is clamped to [0, 1].
pub fn lerp_color(a: Vec4, b: Vec4, t: f32) -> Vec4 {
    a.lerp(b, t.clamp(0.0, 1.0))
}

impl Gradient {
    pub fn new(mut color_keys: Vec<ColorKey>, mut alpha_keys: Vec<AlphaKey>) -> Self {
        color_keys.sort_by(|a, b| a.time.total_cmp(&b.time));
        alpha_keys.sort_by(|a, b| a.time.total_cmp(&b.time));
        Self {
            color_keys,
            alpha_keys,
        }
    }

    pub fn color_keys(&self) -> &[ColorKey] {
        &self.color_keys
    }

    pub fn alpha_keys(&self) -> &[AlphaKey] {
        &self.alpha_keys
    }

    /// Multi-line listing of every color and alpha key.
    pub fn describe(&self, name: &str) -> String {
        let mut out = format!("Information for Gradient {name}");

        out.push_str(&format!(
            "\n\n{} color keys detected:",
            self.color_keys.len()
        ));
        for key in &self.color_keys {
            let c = key.color;
            out.push_str(&format!(
                "\n> RGBA({:.3}, {:.3}, {:.3}, {:.3}) @ {}",
                c.x, c.y, c.z, c.w, key.time
            ));
        }

        out.push_str(&format!(
            "\n\n{} alpha keys detected:",
            self.alpha_keys.len()
        ));
        for key in &self.alpha_keys {
            out.push_str(&format!("\n> {} @ {}", key.alpha, key.time));
        }

        out
    }

    /// Copy with every alpha key set to `alpha`.
    pub fn with_global_alpha(&self, alpha: f32) -> Self {
        let mut g = self.clone();
        for key in &mut g.alpha_keys {
            key.alpha = alpha;
        }
        g
    }

    /// Copy with every color key pulled toward opaque black.
    /// `amount` = 1 keeps the colors, 0 turns them black.
    pub fn with_global_brightness(&self, amount: f32) -> Self {
        let mut g = self.clone();
        for key in &mut g.color_keys {
            key.color = lerp_color(BLACK, key.color, amount);
        }
        g
    }

    /// Sample the gradient at `time`. Colors come from the color keys, alpha
    /// from the alpha keys; both hold their end values outside the key range.
    pub fn evaluate(&self, time: f32) -> Vec4 {
        let rgb = sample(
            &self.color_keys,
            time,
            |k| k.time,
            |k| k.color.truncate(),
            Vec3::lerp,
        )
        .unwrap_or(Vec3::ONE);
        let alpha = sample(&self.alpha_keys, time, |k| k.time, |k| k.alpha, lerp).unwrap_or(1.0);
        rgb.extend(alpha)
    }
}

/// Interpolate between the two keys around `time`. `keys` must be sorted by time.
fn sample<K, V>(
    keys: &[K],
    time: f32,
    key_time: impl Fn(&K) -> f32,
    value: impl Fn(&K) -> V,
    mix: impl Fn(V, V, f32) -> V,
) -> Option<V> {
    let first = keys.first()?;
    if time <= key_time(first) {
        return Some(value(first));
    }
    for pair in keys.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        if time <= key_time(b) {
            let t = inverse_lerp(key_time(a), key_time(b), time);
            return Some(mix(value(a), value(b), t));
        }
    }
    keys.last().map(value)
}
