//! Hero section geometry: the per-character title reveal and the pointer tilt.

const GLYPH_DELAY_MS: u32 = 20;
const MAX_TILT_DEG: f64 = 8.0;
const MAX_SHIFT_PX: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glyph {
    pub ch: char,
    pub delay_ms: u32,
}

/// Split `text` into individually animated characters.
///
/// Spaces become non-breaking so the flex-wrapped spans keep their width.
pub fn title_glyphs(text: &str) -> Vec<Glyph> {
    text.chars()
        .enumerate()
        .map(|(i, ch)| Glyph {
            ch: if ch == ' ' { '\u{00A0}' } else { ch },
            delay_ms: GLYPH_DELAY_MS * i as u32,
        })
        .collect()
}

/// Rotation and background shift for a pointer over the hero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
    pub shift_x: f64,
}

impl Default for Tilt {
    fn default() -> Self {
        Self::from_normalized(0.5, 0.5)
    }
}

impl Tilt {
    /// `x` and `y` are the pointer position as fractions of the box, clamped
    /// to `[0, 1]`.
    pub fn from_normalized(x: f64, y: f64) -> Self {
        let x = x.clamp(0.0, 1.0);
        let y = y.clamp(0.0, 1.0);
        Self {
            rotate_x: lerp(MAX_TILT_DEG, -MAX_TILT_DEG, y),
            rotate_y: lerp(-MAX_TILT_DEG, MAX_TILT_DEG, x),
            shift_x: lerp(-MAX_SHIFT_PX, MAX_SHIFT_PX, x),
        }
    }

    /// Tilt for a pointer at client coordinates over a box at
    /// (`left`, `top`) of size `width` x `height`.
    pub fn from_pointer(
        client_x: f64,
        client_y: f64,
        left: f64,
        top: f64,
        width: f64,
        height: f64,
    ) -> Self {
        if width <= 0.0 || height <= 0.0 {
            return Self::default();
        }
        Self::from_normalized((client_x - left) / width, (client_y - top) / height)
    }

    pub fn content_transform(&self) -> String {
        format!(
            "perspective(1000px) rotateX({:.2}deg) rotateY({:.2}deg)",
            self.rotate_x, self.rotate_y
        )
    }

    pub fn background_transform(&self) -> String {
        format!("translate3d({:.2}px, 0, 0)", self.shift_x)
    }
}

fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}
