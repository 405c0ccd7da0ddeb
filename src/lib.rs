//! # resumegen
//!
//! Two-column resume PDF generation with a pure pagination engine.
//!
//! The engine lays out structured resume content into pages of drawing
//! commands (top-down millimeter coordinates) without touching any PDF
//! machinery; a separate printpdf backend replays the commands into a file.
//!
//! ```no_run
//! use resumegen::{assemble, render_to_file, LayoutConfig, ResumeData};
//!
//! fn main() -> anyhow::Result<()> {
//!     let resume = ResumeData {
//!         full_name: "Ada Lovelace".into(),
//!         email: "ada@example.com".into(),
//!         ..Default::default()
//!     };
//!     let document = assemble(&resume, &LayoutConfig::default());
//!     render_to_file(&document, "resume.pdf")?;
//!     Ok(())
//! }
//! ```

pub mod assemble;
pub mod blocks;
pub mod config;
pub mod measure;
pub mod page;
pub mod reader;
pub mod render;
pub mod resume;

pub use assemble::{assemble, present_sections, Document, Section};
pub use blocks::{Color, ContentBlock, DrawCommand, FontStyle};
pub use config::LayoutConfig;
pub use page::{should_break, BreakDecision, Column, ColumnLayout, Cursor, Page};
pub use reader::read_resume;
pub use render::render_to_file;
pub use resume::{Entry, Language, LanguageLevel, ResumeData, Skill};
