//! TUI rendering for Folio.

mod document;
mod effects;
mod format;
mod input;
mod sections;
mod theme;
mod viewport;

pub use document::DocumentTheme;
pub use input::{InputPump, handle_events};
pub use theme::{Glyphs, Palette, glyphs, palette, styles};
pub use viewport::PageViewport;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
};
use unicode_width::UnicodeWidthStr;

use folio_engine::{PageCoordinator, PreferenceStore, ThemePreference};
use folio_types::ui::UiOptions;

use self::sections::{DocumentInput, build_document};

const BRAND: &str = "Portfolio";

/// The page as the terminal front end mounts it.
pub type Page = PageCoordinator<Box<dyn PreferenceStore>, DocumentTheme, PageViewport>;

/// Presentation state that is not page state: display options, the
/// breakpoint, the last known terminal width, and the highlighted entry of the
/// collapsed menu.
#[derive(Debug, Clone, Copy)]
pub struct PageView {
    options: UiOptions,
    breakpoint: u16,
    width: u16,
    menu_cursor: usize,
}

impl PageView {
    #[must_use]
    pub fn new(options: UiOptions, breakpoint: u16) -> Self {
        Self {
            options,
            breakpoint,
            width: 0,
            menu_cursor: 0,
        }
    }

    #[must_use]
    pub fn options(&self) -> UiOptions {
        self.options
    }

    #[must_use]
    pub fn breakpoint(&self) -> u16 {
        self.breakpoint
    }

    /// Below the breakpoint the nav bar collapses behind the menu button.
    #[must_use]
    pub fn is_compact(&self, width: u16) -> bool {
        width < self.breakpoint
    }

    #[must_use]
    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn set_width(&mut self, width: u16) {
        self.width = width;
    }

    /// Whether the collapsed menu exists at the last known width. Above the
    /// breakpoint it is never drawn, so it must not take input either.
    #[must_use]
    pub fn has_menu(&self) -> bool {
        self.is_compact(self.width)
    }

    #[must_use]
    pub fn menu_cursor(&self) -> usize {
        self.menu_cursor
    }

    /// Move the menu highlight by `step`, wrapping over `entries`.
    pub fn move_menu_cursor(&mut self, step: isize, entries: usize) {
        if entries == 0 {
            self.menu_cursor = 0;
            return;
        }
        let len = entries as isize;
        let current = (self.menu_cursor.min(entries - 1)) as isize;
        self.menu_cursor = (current + step).rem_euclid(len) as usize;
    }

    pub fn reset_menu_cursor(&mut self) {
        self.menu_cursor = 0;
    }
}

pub fn draw(frame: &mut Frame, page: &mut Page, view: &mut PageView) {
    view.set_width(frame.area().width);
    let options = view.options;
    let palette = palette(page.theme_surface().is_dark(), options);
    let glyphs = glyphs(options);

    let bg_block = Block::default().style(Style::default().bg(palette.bg));
    frame.render_widget(bg_block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Nav bar
            Constraint::Length(1), // Rule
            Constraint::Min(1),    // Document
            Constraint::Length(1), // Key hints
        ])
        .split(frame.area());

    let compact = view.has_menu();
    draw_nav_bar(frame, page, chunks[0], compact, &palette, &glyphs);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            glyphs.rule.repeat(usize::from(chunks[1].width)),
            Style::default().fg(palette.border),
        ))),
        chunks[1],
    );
    draw_document(frame, page, chunks[2], &palette, &glyphs);
    draw_key_hints(frame, chunks[3], compact, &palette);

    if compact && page.navigation().menu_open {
        draw_menu(frame, page, view, chunks[2], &palette, &glyphs);
    }
}

fn draw_nav_bar(
    frame: &mut Frame,
    page: &Page,
    area: Rect,
    compact: bool,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let nav = page.navigation();
    let theme_glyph = match page.theme() {
        ThemePreference::Dark => glyphs.sun,
        ThemePreference::Light => glyphs.moon,
    };

    let mut right: Vec<Span<'static>> = Vec::new();
    if compact {
        let toggle = if nav.menu_open {
            glyphs.close
        } else {
            glyphs.menu
        };
        right.push(Span::styled(
            format!(" {toggle} "),
            Style::default()
                .fg(palette.text_secondary)
                .add_modifier(Modifier::BOLD),
        ));
    } else {
        for (i, item) in page.content().nav.iter().enumerate() {
            if i > 0 {
                right.push(Span::raw(" "));
            }
            let style = if item.id == nav.active {
                styles::nav_active(palette)
            } else {
                styles::nav_idle(palette)
            };
            right.push(Span::styled(format!(" {} ", item.label), style));
        }
        right.push(Span::raw("  "));
        right.push(Span::styled(
            format!(" {theme_glyph} "),
            Style::default().fg(palette.primary).bg(palette.bg_panel),
        ));
    }
    right.push(Span::raw(" "));

    let right_width: usize = right.iter().map(|span| span.content.width()).sum();
    let left_width = BRAND.width() + 1;
    let gap = usize::from(area.width).saturating_sub(left_width + right_width);

    let mut spans = vec![
        Span::raw(" "),
        Span::styled(BRAND, styles::brand(palette)),
        Span::raw(" ".repeat(gap)),
    ];
    spans.extend(right);
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_document(
    frame: &mut Frame,
    page: &mut Page,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    // Leave a column for the scrollbar.
    let text_width = area.width.saturating_sub(1).max(1);
    let hero_name = page.typewriter().current_display();
    let document = build_document(&DocumentInput {
        content: page.content(),
        hero_name: &hero_name,
        width: text_width,
        min_home_height: area.height,
        palette,
        glyphs,
    });

    let viewport = page.viewport_mut();
    viewport.set_layout(area.height, document.height(), document.sections);
    let scroll_offset = viewport.offset();
    let max_scroll = viewport.max_offset();

    let text_area = Rect {
        width: text_width,
        ..area
    };
    frame.render_widget(
        Paragraph::new(document.lines).scroll((scroll_offset, 0)),
        text_area,
    );

    if max_scroll > 0 {
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some(glyphs.arrow_up))
            .end_symbol(Some(glyphs.arrow_down))
            .track_symbol(Some(glyphs.track))
            .thumb_symbol(glyphs.thumb)
            .style(Style::default().fg(palette.text_muted));

        // content_length is the scrollable range so the thumb reaches the
        // bottom exactly at max_scroll.
        let mut scrollbar_state =
            ScrollbarState::new(usize::from(max_scroll)).position(usize::from(scroll_offset));

        frame.render_stateful_widget(
            scrollbar,
            area.inner(Margin {
                vertical: 1,
                horizontal: 0,
            }),
            &mut scrollbar_state,
        );
    }
}

/// Collapsed navigation: every nav item, then the theme toggle.
fn draw_menu(
    frame: &mut Frame,
    page: &Page,
    view: &PageView,
    body: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let nav = page.navigation();
    let items = &page.content().nav;
    let entries = items.len() + 1;
    let cursor = view.menu_cursor.min(entries - 1);

    let height = u16::try_from(entries + 2)
        .unwrap_or(u16::MAX)
        .min(body.height);
    let area = Rect {
        height,
        ..body
    };
    frame.render_widget(Clear, area);

    let marker = |i: usize| {
        if i == cursor {
            format!("{} ", glyphs.selected)
        } else {
            "  ".to_owned()
        }
    };

    let mut lines: Vec<Line<'static>> = items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let style = if item.id == nav.active {
                styles::nav_active(palette)
            } else {
                styles::nav_idle(palette)
            };
            Line::from(vec![
                Span::styled(marker(i), styles::key_hint(palette)),
                Span::styled(item.label.clone(), style),
            ])
        })
        .collect();

    let (glyph, label) = match page.theme() {
        ThemePreference::Dark => (glyphs.sun, "Light Mode"),
        ThemePreference::Light => (glyphs.moon, "Dark Mode"),
    };
    lines.push(Line::from(vec![
        Span::styled(marker(items.len()), styles::key_hint(palette)),
        Span::styled(
            format!("{glyph} {label}"),
            Style::default().fg(palette.primary),
        ),
    ]));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border))
        .style(Style::default().bg(palette.bg));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_key_hints(frame: &mut Frame, area: Rect, compact: bool, palette: &Palette) {
    let hints: &[(&str, &str)] = if compact {
        &[("m", "menu"), ("t", "theme"), ("g", "contact"), ("q", "quit")]
    } else {
        &[
            ("1-5", "jump"),
            ("Tab", "next"),
            ("t", "theme"),
            ("g", "contact"),
            ("q", "quit"),
        ]
    };
    let mut spans = vec![Span::raw(" ")];
    for (i, (key, action)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(*key, styles::key_hint(palette)));
        spans.push(Span::styled(
            format!(" {action}"),
            Style::default().fg(palette.text_muted),
        ));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(palette.bg_panel)),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::PageView;
    use folio_types::ui::UiOptions;

    #[test]
    fn compact_below_breakpoint() {
        let view = PageView::new(UiOptions::default(), 80);
        assert!(view.is_compact(79));
        assert!(!view.is_compact(80));
    }

    #[test]
    fn menu_cursor_wraps() {
        let mut view = PageView::new(UiOptions::default(), 80);
        view.move_menu_cursor(-1, 6);
        assert_eq!(view.menu_cursor(), 5);
        view.move_menu_cursor(1, 6);
        assert_eq!(view.menu_cursor(), 0);
        view.move_menu_cursor(3, 6);
        assert_eq!(view.menu_cursor(), 3);
        view.reset_menu_cursor();
        assert_eq!(view.menu_cursor(), 0);
    }

    #[test]
    fn menu_follows_recorded_width() {
        let mut view = PageView::new(UiOptions::default(), 80);
        view.set_width(60);
        assert!(view.has_menu());
        view.set_width(120);
        assert!(!view.has_menu());
    }
}
