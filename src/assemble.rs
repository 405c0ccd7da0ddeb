//! Document assembly: section selection and the fixed traversal order.

use log::debug;

use crate::blocks::{
    contact_block, entries_block, languages_block, name_block, paragraph_block, photo_block,
    skills_block, ContentBlock,
};
use crate::config::LayoutConfig;
use crate::page::{Column, ColumnLayout, Page};
use crate::resume::{Entry, Language, ResumeData, Skill};

/// A fully laid-out, paginated document ready for rendering.
#[derive(Debug)]
pub struct Document {
    pub config: LayoutConfig,
    pub pages: Vec<Page>,
}

/// One section present in the resume, in render order. Optional fields that
/// are absent or empty never produce a variant, so the assembler iterates
/// uniformly instead of re-checking presence per field.
#[derive(Debug)]
pub enum Section<'a> {
    Photo(&'a [u8]),
    Name(&'a str),
    Contact(&'a ResumeData),
    Skills(&'a [Skill]),
    Languages(&'a [Language]),
    Profile(&'a str),
    Education(&'a [Entry]),
    Experience(&'a [Entry]),
    Interests(&'a str),
}

impl Section<'_> {
    fn name(&self) -> &'static str {
        match self {
            Section::Photo(_) => "photo",
            Section::Name(_) => "name",
            Section::Contact(_) => "contact",
            Section::Skills(_) => "skills",
            Section::Languages(_) => "languages",
            Section::Profile(_) => "profile",
            Section::Education(_) => "education",
            Section::Experience(_) => "experience",
            Section::Interests(_) => "interests",
        }
    }

    pub fn column(&self) -> Column {
        match self {
            Section::Photo(_)
            | Section::Contact(_)
            | Section::Skills(_)
            | Section::Languages(_) => Column::Left,
            Section::Name(_)
            | Section::Profile(_)
            | Section::Education(_)
            | Section::Experience(_)
            | Section::Interests(_) => Column::Right,
        }
    }
}

/// Computes the present sections in the fixed order: photo, name, contact,
/// skills, languages, profile, education, experience, interests. An empty
/// list is treated the same as a missing one.
pub fn present_sections(resume: &ResumeData) -> Vec<Section<'_>> {
    let mut sections = Vec::new();
    if let Some(photo) = &resume.photo {
        sections.push(Section::Photo(photo));
    }
    sections.push(Section::Name(&resume.full_name));
    sections.push(Section::Contact(resume));
    if !resume.technical_skills.is_empty() {
        sections.push(Section::Skills(&resume.technical_skills));
    }
    if !resume.languages.is_empty() {
        sections.push(Section::Languages(&resume.languages));
    }
    if let Some(profile) = &resume.professional_profile {
        sections.push(Section::Profile(profile));
    }
    if !resume.educations.is_empty() {
        sections.push(Section::Education(&resume.educations));
    }
    if !resume.experiences.is_empty() {
        sections.push(Section::Experience(&resume.experiences));
    }
    if let Some(interests) = &resume.interests {
        sections.push(Section::Interests(interests));
    }
    sections
}

fn build_block(section: &Section<'_>, config: &LayoutConfig) -> ContentBlock {
    let right_width = config.right_column_width();
    match section {
        Section::Photo(photo) => photo_block(photo, config),
        Section::Name(name) => name_block(name, config),
        Section::Contact(resume) => contact_block(resume, config),
        Section::Skills(skills) => skills_block(skills, config),
        Section::Languages(languages) => languages_block(languages, config),
        Section::Profile(text) => paragraph_block("PROFESSIONAL PROFILE", text, right_width, config),
        Section::Education(entries) => entries_block("EDUCATION", entries, right_width, config),
        Section::Experience(entries) => entries_block("EXPERIENCE", entries, right_width, config),
        Section::Interests(text) => paragraph_block("INTERESTS", text, right_width, config),
    }
}

/// Lays out the whole resume: for every present section, estimate the block
/// height, decide the page break, place the block, advance the cursor.
pub fn assemble(resume: &ResumeData, config: &LayoutConfig) -> Document {
    let mut layout = ColumnLayout::new(config);
    for section in present_sections(resume) {
        let block = build_block(&section, config);
        debug!(
            "placing {} block of height {:.1} in {:?} column",
            section.name(),
            block.height,
            section.column()
        );
        layout.place_block(section.column(), block);
    }
    let pages = layout.into_pages();
    debug!("assembled {} page(s)", pages.len());
    Document {
        config: config.clone(),
        pages,
    }
}
