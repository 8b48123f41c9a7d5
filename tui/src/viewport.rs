//! Scroll position of the rendered page.
//!
//! `PageViewport` is the engine's [`Viewport`] collaborator. The renderer
//! feeds it the document height and section offsets every frame; navigation
//! asks it to smooth-scroll, and manual scrolling moves it directly.

use std::time::Duration;

use folio_engine::{SectionId, Viewport};
use folio_types::ui::{AnimPhase, EffectTimer};

use crate::effects::{ease_out_cubic, lerp_rows};

const SMOOTH_SCROLL_DURATION: Duration = Duration::from_millis(300);

#[derive(Debug, Clone)]
struct ScrollAnimation {
    from: u16,
    to: u16,
    timer: EffectTimer,
}

#[derive(Debug, Clone, Default)]
pub struct PageViewport {
    offset: u16,
    height: u16,
    content_height: u16,
    sections: [Option<u16>; SectionId::ALL.len()],
    animation: Option<ScrollAnimation>,
    reduced_motion: bool,
}

impl PageViewport {
    #[must_use]
    pub fn new(reduced_motion: bool) -> Self {
        Self {
            reduced_motion,
            ..Self::default()
        }
    }

    /// Record the measurements of the latest layout pass.
    pub fn set_layout(
        &mut self,
        height: u16,
        content_height: u16,
        sections: [Option<u16>; SectionId::ALL.len()],
    ) {
        self.height = height;
        self.content_height = content_height;
        self.sections = sections;

        let max = self.max_offset();
        self.offset = self.offset.min(max);
        if let Some(anim) = &mut self.animation {
            anim.to = anim.to.min(max);
        }
    }

    #[must_use]
    pub fn offset(&self) -> u16 {
        self.offset
    }

    #[must_use]
    pub fn height(&self) -> u16 {
        self.height
    }

    #[must_use]
    pub fn content_height(&self) -> u16 {
        self.content_height
    }

    #[must_use]
    pub fn max_offset(&self) -> u16 {
        self.content_height.saturating_sub(self.height)
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Manual scroll by `rows` (negative is up). Cancels a running animation.
    pub fn scroll_by(&mut self, rows: i32) {
        self.animation = None;
        let target = (i32::from(self.offset) + rows).clamp(0, i32::from(self.max_offset()));
        self.offset = u16::try_from(target).unwrap_or(self.offset);
    }

    pub fn scroll_to_top(&mut self) {
        self.animation = None;
        self.offset = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.animation = None;
        self.offset = self.max_offset();
    }

    /// Step the smooth-scroll animation.
    pub fn advance(&mut self, delta: Duration) {
        let Some(anim) = &mut self.animation else {
            return;
        };
        anim.timer.advance(delta);
        match anim.timer.phase() {
            AnimPhase::Running { progress } => {
                self.offset = lerp_rows(anim.from, anim.to, ease_out_cubic(progress));
            }
            AnimPhase::Completed => {
                self.offset = anim.to;
                self.animation = None;
            }
        }
    }

    /// The section owning the row a third of the way down the viewport.
    ///
    /// At the very bottom of the document the last laid-out section wins, so
    /// a short final section can still become active.
    #[must_use]
    pub fn section_in_view(&self) -> Option<SectionId> {
        let laid_out = || {
            SectionId::ALL
                .into_iter()
                .filter_map(|id| self.sections[id.index()].map(|row| (id, row)))
        };
        if self.max_offset() > 0 && self.offset >= self.max_offset() {
            return laid_out().max_by_key(|&(_, row)| row).map(|(id, _)| id);
        }
        let probe = self.offset.saturating_add(self.height / 3);
        laid_out()
            .filter(|&(_, row)| row <= probe)
            .max_by_key(|&(_, row)| row)
            .map(|(id, _)| id)
    }
}

impl Viewport for PageViewport {
    fn section_position(&self, section: SectionId) -> Option<u16> {
        self.sections[section.index()]
    }

    fn smooth_scroll_to(&mut self, position: u16) {
        let target = position.min(self.max_offset());
        if self.reduced_motion || target == self.offset {
            self.animation = None;
            self.offset = target;
            return;
        }
        self.animation = Some(ScrollAnimation {
            from: self.offset,
            to: target,
            timer: EffectTimer::new(SMOOTH_SCROLL_DURATION),
        });
    }
}
