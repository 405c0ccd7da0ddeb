//! Content blocks and the drawing commands they emit.
//!
//! A [`ContentBlock`] is the unit of pagination: its height is derived from
//! the content first, and only then are the drawing commands emitted, so the
//! page-break decision always precedes placement. Command coordinates are
//! relative to the block origin (x from the column edge, y downward from the
//! block top); [`crate::page::ColumnLayout`] offsets them during placement.

use itertools::Itertools;

use crate::config::LayoutConfig;
use crate::measure::wrap_text;
use crate::resume::{Entry, Language, ResumeData, Skill};

/// RGB color, each channel in 0.0–1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub fn black() -> Self {
        Self::rgb(0.0, 0.0, 0.0)
    }

    /// Heading and bar-fill color.
    pub fn accent() -> Self {
        Self::rgb(0.16, 0.32, 0.5)
    }

    /// Background track behind skill/language bars.
    pub fn track() -> Self {
        Self::rgb(0.85, 0.85, 0.85)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontStyle {
    Regular,
    Bold,
}

/// One primitive drawing operation, y measured downward from the page top.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Text {
        text: String,
        x: f32,
        y: f32,
        size: f32,
        style: FontStyle,
        color: Color,
    },
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        color: Color,
    },
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Color,
    },
    Image {
        data: Vec<u8>,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
}

impl DrawCommand {
    /// Translates the command by `(dx, dy)`.
    pub fn offset(self, dx: f32, dy: f32) -> Self {
        match self {
            DrawCommand::Text {
                text,
                x,
                y,
                size,
                style,
                color,
            } => DrawCommand::Text {
                text,
                x: x + dx,
                y: y + dy,
                size,
                style,
                color,
            },
            DrawCommand::Line {
                x1,
                y1,
                x2,
                y2,
                color,
            } => DrawCommand::Line {
                x1: x1 + dx,
                y1: y1 + dy,
                x2: x2 + dx,
                y2: y2 + dy,
                color,
            },
            DrawCommand::Rect {
                x,
                y,
                width,
                height,
                color,
            } => DrawCommand::Rect {
                x: x + dx,
                y: y + dy,
                width,
                height,
                color,
            },
            DrawCommand::Image {
                data,
                x,
                y,
                width,
                height,
            } => DrawCommand::Image {
                data,
                x: x + dx,
                y: y + dy,
                width,
                height,
            },
        }
    }
}

/// A placed-atomically unit of content with a pre-computed height.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentBlock {
    pub height: f32,
    pub commands: Vec<DrawCommand>,
}

// Baseline offsets within a block, relative to the block top.
const HEADING_BASELINE: f32 = 4.5;
const HEADER_RULE_Y: f32 = 6.5;
const LABEL_BASELINE: f32 = 3.0;
const BAR_OFFSET: f32 = 4.5;

/// Section heading with an underline rule spanning the column.
fn section_header(title: &str, width: f32, config: &LayoutConfig) -> Vec<DrawCommand> {
    vec![
        DrawCommand::Text {
            text: title.to_string(),
            x: 0.0,
            y: HEADING_BASELINE,
            size: config.heading_size,
            style: FontStyle::Bold,
            color: Color::accent(),
        },
        DrawCommand::Line {
            x1: 0.0,
            y1: HEADER_RULE_Y,
            x2: width,
            y2: HEADER_RULE_Y,
            color: Color::accent(),
        },
    ]
}

/// Baseline of the i-th wrapped text line below a section header.
fn line_baseline(config: &LayoutConfig, index: usize) -> f32 {
    config.header_height + (index as f32 + 0.8) * config.line_height
}

/// Square photo thumbnail. Height is a fixed constant per the estimator
/// contract; the renderer fits the decoded image into the square.
pub fn photo_block(photo: &[u8], config: &LayoutConfig) -> ContentBlock {
    let height = config.photo_size + config.section_spacing;
    ContentBlock {
        height,
        commands: vec![DrawCommand::Image {
            data: photo.to_vec(),
            x: 0.0,
            y: 0.0,
            width: config.photo_size,
            height: config.photo_size,
        }],
    }
}

/// Name heading at the top of the right column.
pub fn name_block(full_name: &str, config: &LayoutConfig) -> ContentBlock {
    let width = config.right_column_width();
    ContentBlock {
        height: config.name_height,
        commands: vec![
            DrawCommand::Text {
                text: full_name.to_string(),
                x: 0.0,
                y: 8.0,
                size: config.name_size,
                style: FontStyle::Bold,
                color: Color::black(),
            },
            DrawCommand::Line {
                x1: 0.0,
                y1: 11.0,
                x2: width,
                y2: 11.0,
                color: Color::accent(),
            },
        ],
    }
}

/// Contact block: email always, phone/address/LinkedIn only when present.
/// Each present field adds one line to the height.
pub fn contact_block(resume: &ResumeData, config: &LayoutConfig) -> ContentBlock {
    let lines: Vec<&str> = std::iter::once(resume.email.as_str())
        .chain(resume.phone.as_deref())
        .chain(resume.address.as_deref())
        .chain(resume.linked_in.as_deref())
        .collect();

    let height =
        config.header_height + lines.len() as f32 * config.line_height + config.section_spacing;

    let mut commands = section_header("CONTACT", config.left_column_width, config);
    for (i, line) in lines.iter().enumerate() {
        commands.push(DrawCommand::Text {
            text: (*line).to_string(),
            x: 0.0,
            y: line_baseline(config, i),
            size: config.body_size,
            style: FontStyle::Regular,
            color: Color::black(),
        });
    }

    ContentBlock { height, commands }
}

/// One labeled horizontal bar: name above, track rect, fill rect scaled by
/// `fraction` of the column width.
fn bar_row(
    label: &str,
    fraction: f32,
    row_index: usize,
    width: f32,
    config: &LayoutConfig,
    commands: &mut Vec<DrawCommand>,
) {
    let row_y = config.header_height + row_index as f32 * config.bar_row_height;
    commands.push(DrawCommand::Text {
        text: label.to_string(),
        x: 0.0,
        y: row_y + LABEL_BASELINE,
        size: config.small_size,
        style: FontStyle::Regular,
        color: Color::black(),
    });
    commands.push(DrawCommand::Rect {
        x: 0.0,
        y: row_y + BAR_OFFSET,
        width,
        height: config.bar_height,
        color: Color::track(),
    });
    commands.push(DrawCommand::Rect {
        x: 0.0,
        y: row_y + BAR_OFFSET,
        width: width * fraction,
        height: config.bar_height,
        color: Color::accent(),
    });
}

fn bar_list_height(rows: usize, config: &LayoutConfig) -> f32 {
    config.header_height + rows as f32 * config.bar_row_height + config.section_spacing
}

/// Skill bars scaled `level / 100`, levels clamped to 100.
pub fn skills_block(skills: &[Skill], config: &LayoutConfig) -> ContentBlock {
    let width = config.left_column_width;
    let height = bar_list_height(skills.len(), config);

    let mut commands = section_header("SOFTWARE & SKILLS", width, config);
    for (i, skill) in skills.iter().enumerate() {
        let fraction = skill.level.min(100) as f32 / 100.0;
        bar_row(&skill.name, fraction, i, width, config, &mut commands);
    }

    ContentBlock { height, commands }
}

/// Language bars with the fixed per-level width mapping.
pub fn languages_block(languages: &[Language], config: &LayoutConfig) -> ContentBlock {
    let width = config.left_column_width;
    let height = bar_list_height(languages.len(), config);

    let mut commands = section_header("LANGUAGES", width, config);
    for (i, language) in languages.iter().enumerate() {
        bar_row(
            &language.name,
            language.level.bar_fraction(),
            i,
            width,
            config,
            &mut commands,
        );
    }

    ContentBlock { height, commands }
}

/// Headed, word-wrapped paragraph (profile and interests sections).
pub fn paragraph_block(title: &str, text: &str, width: f32, config: &LayoutConfig) -> ContentBlock {
    let lines = wrap_text(text, width, config.body_size);
    let height =
        config.header_height + lines.len() as f32 * config.line_height + config.section_spacing;

    let mut commands = section_header(title, width, config);
    for (i, line) in lines.iter().enumerate() {
        commands.push(DrawCommand::Text {
            text: line.clone(),
            x: 0.0,
            y: line_baseline(config, i),
            size: config.body_size,
            style: FontStyle::Regular,
            color: Color::black(),
        });
    }

    ContentBlock { height, commands }
}

/// "start - end" line for a dated entry, if either date is present.
fn date_line(entry: &Entry) -> Option<String> {
    let joined = [entry.start_date.as_deref(), entry.end_date.as_deref()]
        .into_iter()
        .flatten()
        .join(" - ");
    (!joined.is_empty()).then_some(joined)
}

/// Dated entries (education and experience): each entry renders an optional
/// date line followed by its wrapped description.
pub fn entries_block(
    title: &str,
    entries: &[Entry],
    width: f32,
    config: &LayoutConfig,
) -> ContentBlock {
    // Wrap everything first so the height is known before any command exists.
    let prepared: Vec<(Option<String>, Vec<String>)> = entries
        .iter()
        .map(|entry| {
            (
                date_line(entry),
                wrap_text(&entry.description, width, config.body_size),
            )
        })
        .collect();

    let mut line_slots = 0usize;
    for (date, lines) in &prepared {
        line_slots += usize::from(date.is_some()) + lines.len();
    }
    let height = config.header_height
        + line_slots as f32 * config.line_height
        + entries.len() as f32 * config.entry_spacing
        + config.section_spacing;

    let mut commands = section_header(title, width, config);
    let mut y = config.header_height;
    for (date, lines) in prepared {
        if let Some(date) = date {
            commands.push(DrawCommand::Text {
                text: date,
                x: 0.0,
                y: y + 0.8 * config.line_height,
                size: config.small_size,
                style: FontStyle::Bold,
                color: Color::accent(),
            });
            y += config.line_height;
        }
        for line in lines {
            commands.push(DrawCommand::Text {
                text: line,
                x: 0.0,
                y: y + 0.8 * config.line_height,
                size: config.body_size,
                style: FontStyle::Regular,
                color: Color::black(),
            });
            y += config.line_height;
        }
        y += config.entry_spacing;
    }

    ContentBlock { height, commands }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resume::LanguageLevel;

    fn config() -> LayoutConfig {
        LayoutConfig::default()
    }

    fn text_commands(block: &ContentBlock) -> Vec<&str> {
        block
            .commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_contact_block_email_only() {
        let resume = ResumeData {
            full_name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            ..Default::default()
        };
        let cfg = config();
        let block = contact_block(&resume, &cfg);
        assert_eq!(text_commands(&block), vec!["CONTACT", "ada@example.com"]);
        let expected = cfg.header_height + cfg.line_height + cfg.section_spacing;
        assert!((block.height - expected).abs() < 1e-4);
    }

    #[test]
    fn test_contact_block_each_optional_field_adds_a_line() {
        let mut resume = ResumeData {
            full_name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            ..Default::default()
        };
        let cfg = config();
        let base = contact_block(&resume, &cfg).height;

        resume.phone = Some("+33 1 23 45 67 89".into());
        resume.linked_in = Some("linkedin.com/in/ada".into());
        let taller = contact_block(&resume, &cfg);
        assert!((taller.height - base - 2.0 * cfg.line_height).abs() < 1e-4);
        assert_eq!(text_commands(&taller).len(), 4, "header + 3 contact lines");
    }

    #[test]
    fn test_skill_bar_scaled_by_level() {
        let cfg = config();
        let block = skills_block(
            &[Skill {
                name: "Go".into(),
                level: 90,
            }],
            &cfg,
        );
        let rects: Vec<f32> = block
            .commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Rect { width, .. } => Some(*width),
                _ => None,
            })
            .collect();
        assert_eq!(rects.len(), 2, "track rect plus fill rect");
        assert!((rects[0] - cfg.left_column_width).abs() < 1e-4);
        assert!((rects[1] - cfg.left_column_width * 0.9).abs() < 1e-4);
    }

    #[test]
    fn test_skill_level_above_100_is_clamped() {
        let cfg = config();
        let block = skills_block(
            &[Skill {
                name: "Rust".into(),
                level: 250,
            }],
            &cfg,
        );
        let max_fill = block
            .commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Rect { width, .. } => Some(*width),
                _ => None,
            })
            .fold(0.0f32, f32::max);
        assert!(max_fill <= cfg.left_column_width + 1e-4);
    }

    #[test]
    fn test_language_bar_uses_level_mapping() {
        let cfg = config();
        let block = languages_block(
            &[Language {
                name: "English".into(),
                level: LanguageLevel::Advanced,
            }],
            &cfg,
        );
        let fill = block
            .commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Rect { width, color, .. } if *color == Color::accent() => {
                    Some(*width)
                }
                _ => None,
            })
            .next()
            .expect("language bar should have a fill rect");
        assert!((fill - cfg.left_column_width * 0.8).abs() < 1e-4);
    }

    #[test]
    fn test_bar_list_height_counts_rows() {
        let cfg = config();
        let skills: Vec<Skill> = (0..5)
            .map(|i| Skill {
                name: format!("skill-{i}"),
                level: 50,
            })
            .collect();
        let block = skills_block(&skills, &cfg);
        let expected = cfg.header_height + 5.0 * cfg.bar_row_height + cfg.section_spacing;
        assert!((block.height - expected).abs() < 1e-4);
    }

    #[test]
    fn test_paragraph_height_matches_wrapped_lines() {
        let cfg = config();
        let text = "a profile paragraph that is long enough to wrap over multiple lines \
                    when constrained to the right column width of the page";
        let block = paragraph_block("PROFILE", text, cfg.right_column_width(), &cfg);
        let lines = crate::measure::wrap_text(text, cfg.right_column_width(), cfg.body_size);
        let expected =
            cfg.header_height + lines.len() as f32 * cfg.line_height + cfg.section_spacing;
        assert!((block.height - expected).abs() < 1e-4);
    }

    #[test]
    fn test_entry_date_line_variants() {
        let both = Entry {
            start_date: Some("2019".into()),
            end_date: Some("2022".into()),
            description: "x".into(),
        };
        let start_only = Entry {
            start_date: Some("2019".into()),
            end_date: None,
            description: "x".into(),
        };
        let none = Entry {
            start_date: None,
            end_date: None,
            description: "x".into(),
        };
        assert_eq!(date_line(&both).as_deref(), Some("2019 - 2022"));
        assert_eq!(date_line(&start_only).as_deref(), Some("2019"));
        assert_eq!(date_line(&none), None);
    }

    #[test]
    fn test_entries_block_undated_entry_skips_date_slot() {
        let cfg = config();
        let dated = entries_block(
            "EDUCATION",
            &[Entry {
                start_date: Some("2019".into()),
                end_date: Some("2022".into()),
                description: "BSc".into(),
            }],
            cfg.right_column_width(),
            &cfg,
        );
        let undated = entries_block(
            "EDUCATION",
            &[Entry {
                start_date: None,
                end_date: None,
                description: "BSc".into(),
            }],
            cfg.right_column_width(),
            &cfg,
        );
        assert!((dated.height - undated.height - cfg.line_height).abs() < 1e-4);
    }

    #[test]
    fn test_commands_stay_within_block_height() {
        // The estimator contract: nothing may draw below the estimated height.
        let cfg = config();
        let blocks = vec![
            contact_block(
                &ResumeData {
                    full_name: "n".into(),
                    email: "e@x".into(),
                    phone: Some("p".into()),
                    ..Default::default()
                },
                &cfg,
            ),
            skills_block(
                &[Skill {
                    name: "Rust".into(),
                    level: 80,
                }],
                &cfg,
            ),
            paragraph_block("PROFILE", "some wrapped text here", 60.0, &cfg),
            entries_block(
                "EXPERIENCE",
                &[Entry {
                    start_date: Some("2020".into()),
                    end_date: None,
                    description: "worked on things worth describing at length".into(),
                }],
                60.0,
                &cfg,
            ),
        ];
        for block in blocks {
            for cmd in &block.commands {
                let bottom = match cmd {
                    DrawCommand::Text { y, .. } => *y,
                    DrawCommand::Line { y1, y2, .. } => y1.max(*y2),
                    DrawCommand::Rect { y, height, .. } => y + height,
                    DrawCommand::Image { y, height, .. } => y + height,
                };
                assert!(
                    bottom <= block.height + 1e-4,
                    "command bottom {bottom} exceeds block height {}",
                    block.height
                );
            }
        }
    }
}
