//! Enter and hover effects.
//!
//! Components only describe the effect. `assets/styling/app.css` owns the
//! keyframes and reads the values from CSS custom properties, so the inline
//! style built here is the whole contract between the two.

/// Fade in while sliding from `offset_y` pixels to the resting position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entrance {
    pub offset_y: i32,
    pub duration_ms: u32,
    pub delay_ms: u32,
}

/// Default duration used when an entrance does not set one.
pub const DEFAULT_DURATION_MS: u32 = 300;

/// Delay between consecutive items of a staggered list.
pub const STAGGER_STEP_MS: u32 = 100;

impl Entrance {
    pub const fn from_offset(offset_y: i32) -> Self {
        Self {
            offset_y,
            duration_ms: DEFAULT_DURATION_MS,
            delay_ms: 0,
        }
    }

    pub const fn duration(mut self, duration_ms: u32) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub const fn delay(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Entrance for the `index`-th item of a list, delayed one step per item.
    pub fn staggered(self, index: usize) -> Self {
        let step = u32::try_from(index).unwrap_or(u32::MAX);
        self.delay(step.saturating_mul(STAGGER_STEP_MS))
    }

    pub fn style(&self) -> String {
        format!(
            "--enter-from-y: {}px; animation-duration: {}ms; animation-delay: {}ms;",
            self.offset_y, self.duration_ms, self.delay_ms
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hover {
    pub scale: f32,
}

impl Hover {
    pub const fn scale(scale: f32) -> Self {
        Self { scale }
    }

    pub fn style(&self) -> String {
        format!("--hover-scale: {};", self.scale)
    }
}

pub const ENTER_CLASS: &str = "motion-enter";
pub const HOVER_CLASS: &str = "motion-hover";

/// Header block: drops in from above.
pub const HEADER_ENTRANCE: Entrance = Entrance::from_offset(-30).duration(800);

/// Album cards: rise from below, staggered by index.
pub const CARD_ENTRANCE: Entrance = Entrance::from_offset(20);

pub const CARD_HOVER: Hover = Hover::scale(1.05);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_style() {
        assert_eq!(
            HEADER_ENTRANCE.style(),
            "--enter-from-y: -30px; animation-duration: 800ms; animation-delay: 0ms;"
        );
    }

    #[test]
    fn cards_are_staggered_by_index() {
        assert_eq!(CARD_ENTRANCE.staggered(0).delay_ms, 0);
        assert_eq!(CARD_ENTRANCE.staggered(3).delay_ms, 300);
        assert_eq!(CARD_ENTRANCE.staggered(9).delay_ms, 900);
        assert_eq!(CARD_ENTRANCE.staggered(9).offset_y, 20);
    }

    #[test]
    fn huge_index_saturates() {
        assert_eq!(CARD_ENTRANCE.staggered(usize::MAX).delay_ms, u32::MAX);
    }

    #[test]
    fn hover_style() {
        assert_eq!(CARD_HOVER.style(), "--hover-scale: 1.05;");
    }
}
