//! Lays the page content out as one scrollable column of lines.
//!
//! Every section starts at a known row; those rows are what navigation
//! scrolls to and what passive tracking probes against.

use std::mem;

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use folio_types::{SectionId, SiteContent, SocialKind};

use crate::format::{center_pad, progress_bar, wrap_text};
use crate::theme::{Glyphs, Palette, styles};

const MARGIN: usize = 2;
const MAX_TEXT_WIDTH: usize = 72;
const MAX_BAR_WIDTH: usize = 30;
const FORM_FIELD_WIDTH: usize = 28;

const ABOUT_TITLE: &str = "About Me";
const SKILLS_TITLE: &str = "Skills & Technologies";
const PROJECTS_TITLE: &str = "Featured Projects";
const CONTACT_TITLE: &str = "Get In Touch";

pub(crate) struct Document {
    pub lines: Vec<Line<'static>>,
    pub sections: [Option<u16>; SectionId::ALL.len()],
}

impl Document {
    pub fn height(&self) -> u16 {
        u16::try_from(self.lines.len()).unwrap_or(u16::MAX)
    }
}

/// Inputs for one layout pass.
pub(crate) struct DocumentInput<'a> {
    pub content: &'a SiteContent,
    /// Typewriter output including the caret cell.
    pub hero_name: &'a str,
    pub width: u16,
    /// The home section fills at least this many rows.
    pub min_home_height: u16,
    pub palette: &'a Palette,
    pub glyphs: &'a Glyphs,
}

struct Builder<'a> {
    lines: Vec<Line<'static>>,
    sections: [Option<u16>; SectionId::ALL.len()],
    width: usize,
    text_width: usize,
    palette: &'a Palette,
    glyphs: &'a Glyphs,
}

impl Builder<'_> {
    fn row(&self) -> u16 {
        u16::try_from(self.lines.len()).unwrap_or(u16::MAX)
    }

    fn start_section(&mut self, id: SectionId) {
        self.sections[id.index()] = Some(self.row());
    }

    fn blank(&mut self) {
        self.lines.push(Line::default());
    }

    fn push(&mut self, mut spans: Vec<Span<'static>>) {
        spans.insert(0, Span::raw(" ".repeat(MARGIN)));
        self.lines.push(Line::from(spans));
    }

    fn text(&mut self, text: &str, style: Style) {
        for line in wrap_text(text, self.text_width) {
            self.push(vec![Span::styled(line, style)]);
        }
    }

    fn title(&mut self, title: &str) {
        self.blank();
        self.push(vec![Span::styled(
            title.to_owned(),
            styles::section_title(self.palette),
        )]);
        let underline = self.glyphs.rule.repeat(title.width());
        self.push(vec![Span::styled(
            underline,
            Style::default().fg(self.palette.primary),
        )]);
        self.blank();
    }

    /// Lay `chips` out left to right, wrapping when a row is full.
    fn chips(&mut self, chips: &[String], style: Style) {
        let mut row: Vec<Span<'static>> = Vec::new();
        let mut used = 0;
        for chip in chips {
            let label = format!(" {chip} ");
            let width = label.width();
            if used > 0 && used + 1 + width > self.text_width {
                self.push(mem::take(&mut row));
                used = 0;
            }
            if used > 0 {
                row.push(Span::raw(" "));
                used += 1;
            }
            row.push(Span::styled(label, style));
            used += width;
        }
        if !row.is_empty() {
            self.push(row);
        }
    }
}

pub(crate) fn build_document(input: &DocumentInput<'_>) -> Document {
    let width = usize::from(input.width);
    let mut b = Builder {
        lines: Vec::new(),
        sections: [None; SectionId::ALL.len()],
        width,
        text_width: width.saturating_sub(MARGIN * 2).clamp(1, MAX_TEXT_WIDTH),
        palette: input.palette,
        glyphs: input.glyphs,
    };

    hero(&mut b, input);
    about(&mut b, input.content);
    skills(&mut b, input.content);
    projects(&mut b, input.content);
    contact(&mut b, input.content);
    footer(&mut b, input.content);

    Document {
        lines: b.lines,
        sections: b.sections,
    }
}

fn hero(b: &mut Builder<'_>, input: &DocumentInput<'_>) {
    let palette = b.palette;
    let hero = &input.content.hero;
    b.start_section(SectionId::Home);
    b.blank();
    b.blank();
    b.push(vec![
        Span::styled(
            "Hi, I'm ",
            Style::default()
                .fg(palette.text_primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(input.hero_name.to_owned(), styles::brand(palette)),
    ]);
    b.blank();
    b.text(&hero.role, Style::default().fg(palette.text_secondary));
    b.text(&hero.tagline, Style::default().fg(palette.text_muted));
    b.blank();

    let button = Style::default()
        .fg(palette.bg)
        .bg(palette.primary)
        .add_modifier(Modifier::BOLD);
    let outline = Style::default()
        .fg(palette.primary)
        .add_modifier(Modifier::BOLD);
    let mut buttons = Vec::new();
    if hero.resume.is_some() {
        buttons.push(Span::styled(
            format!(" {} Download CV ", b.glyphs.download),
            button,
        ));
        buttons.push(Span::raw("  "));
    }
    buttons.push(Span::styled("[ Get In Touch ]", outline));
    buttons.push(Span::styled(" g", styles::key_hint(palette)));
    b.push(buttons);
    if let Some(resume) = &hero.resume {
        b.push(vec![Span::styled(
            resume.clone(),
            Style::default().fg(palette.text_muted),
        )]);
    }
    b.blank();

    for social in &hero.socials {
        let label = match social.kind {
            SocialKind::Github => "GitHub",
            SocialKind::Linkedin => "LinkedIn",
            SocialKind::Email => "Email",
        };
        b.push(vec![
            Span::styled(
                format!("{} {label:<9}", b.glyphs.bullet),
                Style::default().fg(palette.primary),
            ),
            Span::styled(
                social.url.clone(),
                Style::default().fg(palette.text_secondary),
            ),
        ]);
    }

    // The home section fills the first screen; a scroll hint sits at its foot.
    let min_rows = usize::from(input.min_home_height);
    while b.lines.len() + 1 < min_rows {
        b.blank();
    }
    let hint = b.glyphs.arrow_down;
    b.lines.push(Line::from(vec![
        Span::raw(" ".repeat(center_pad(hint, b.width))),
        Span::styled(hint, Style::default().fg(palette.text_muted)),
    ]));
}

fn about(b: &mut Builder<'_>, content: &SiteContent) {
    let palette = b.palette;
    b.start_section(SectionId::About);
    b.title(ABOUT_TITLE);
    for (i, paragraph) in content.about.paragraphs.iter().enumerate() {
        if i > 0 {
            b.blank();
        }
        b.text(paragraph, Style::default().fg(palette.text_secondary));
    }
    if content.about.highlights.is_empty() {
        return;
    }
    b.blank();
    let value_width = content
        .about
        .highlights
        .iter()
        .map(|h| h.value.width())
        .max()
        .unwrap_or(0);
    for highlight in &content.about.highlights {
        let pad = value_width.saturating_sub(highlight.value.width());
        b.push(vec![
            Span::raw(" ".repeat(pad)),
            Span::styled(highlight.value.clone(), styles::brand(palette)),
            Span::raw("  "),
            Span::styled(
                highlight.label.clone(),
                Style::default().fg(palette.text_secondary),
            ),
        ]);
    }
}

fn skills(b: &mut Builder<'_>, content: &SiteContent) {
    let palette = b.palette;
    b.start_section(SectionId::Skills);
    b.title(SKILLS_TITLE);
    let bar_width = b.text_width.saturating_sub(6).clamp(1, MAX_BAR_WIDTH);
    for (i, skill) in content.skills.iter().enumerate() {
        if i > 0 {
            b.blank();
        }
        b.push(vec![
            Span::styled(
                format!("{:<2} ", b.glyphs.skill_icon(skill.icon)),
                Style::default().fg(palette.primary),
            ),
            Span::styled(skill.name.clone(), styles::section_title(palette)),
            Span::raw("  "),
            Span::styled(format!(" {} ", skill.category), styles::tag(palette)),
        ]);
        b.push(vec![
            Span::raw("   "),
            Span::styled(
                progress_bar(
                    skill.proficiency,
                    bar_width,
                    b.glyphs.bar_full,
                    b.glyphs.bar_empty,
                ),
                Style::default().fg(palette.primary),
            ),
            Span::styled(
                format!(" {}%", skill.proficiency),
                Style::default().fg(palette.text_muted),
            ),
        ]);
    }
}

fn projects(b: &mut Builder<'_>, content: &SiteContent) {
    let palette = b.palette;
    b.start_section(SectionId::Projects);
    b.title(PROJECTS_TITLE);
    for (i, project) in content.projects.iter().enumerate() {
        if i > 0 {
            b.blank();
        }
        b.text(&project.title, styles::section_title(palette));
        b.text(
            &project.description,
            Style::default().fg(palette.text_secondary),
        );
        b.chips(&project.tech, styles::tag(palette));
        if !project.image.is_empty() {
            b.text(&project.image, Style::default().fg(palette.text_muted));
        }
        b.push(vec![
            Span::styled(
                format!("{} ", b.glyphs.link),
                Style::default().fg(palette.primary),
            ),
            Span::styled(
                project.link.clone(),
                Style::default()
                    .fg(palette.primary)
                    .add_modifier(Modifier::UNDERLINED),
            ),
        ]);
    }
}

fn contact(b: &mut Builder<'_>, content: &SiteContent) {
    let palette = b.palette;
    let contact = &content.contact;
    b.start_section(SectionId::Contact);
    b.title(CONTACT_TITLE);
    b.text(&contact.heading, styles::section_title(palette));
    if !contact.message.is_empty() {
        b.text(&contact.message, Style::default().fg(palette.text_secondary));
    }
    b.blank();

    let channels = [
        ("Email", Some(&contact.email)),
        ("LinkedIn", contact.linkedin.as_ref()),
        ("GitHub", contact.github.as_ref()),
    ];
    for (label, value) in channels {
        let Some(value) = value else {
            continue;
        };
        b.push(vec![
            Span::styled(format!("{label:<10}"), Style::default().fg(palette.primary)),
            Span::styled(value.clone(), Style::default().fg(palette.text_secondary)),
        ]);
    }
    b.blank();

    let field_width = b.text_width.saturating_sub(14).clamp(1, FORM_FIELD_WIDTH);
    for placeholder in ["Your Name", "Your Email", "Your Message"] {
        b.push(vec![
            Span::styled(
                format!("{placeholder:<14}"),
                Style::default().fg(palette.text_muted),
            ),
            Span::styled(
                "_".repeat(field_width),
                Style::default().fg(palette.border),
            ),
        ]);
    }
    b.blank();
    b.push(vec![Span::styled(
        " Send Message ",
        Style::default()
            .fg(palette.bg)
            .bg(palette.primary)
            .add_modifier(Modifier::BOLD),
    )]);
}

fn footer(b: &mut Builder<'_>, content: &SiteContent) {
    let palette = b.palette;
    b.blank();
    b.lines.push(Line::from(Span::styled(
        b.glyphs.rule.repeat(b.width),
        Style::default().fg(palette.border),
    )));
    if !content.footer.is_empty() {
        for line in wrap_text(&content.footer, b.width) {
            let pad = center_pad(&line, b.width);
            b.lines.push(Line::from(vec![
                Span::raw(" ".repeat(pad)),
                Span::styled(line, Style::default().fg(palette.text_muted)),
            ]));
        }
    }
    b.blank();
}
