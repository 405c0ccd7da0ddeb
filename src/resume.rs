use serde::{Deserialize, Serialize};

/// Structured resume content, the immutable input to the layout engine.
///
/// Created once from a validated submission; every optional field that is
/// `None` (or an empty list) simply skips its section during assembly.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResumeData {
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub linked_in: Option<String>,
    pub professional_profile: Option<String>,
    pub interests: Option<String>,
    #[serde(default)]
    pub educations: Vec<Entry>,
    #[serde(default)]
    pub experiences: Vec<Entry>,
    #[serde(default)]
    pub technical_skills: Vec<Skill>,
    #[serde(default)]
    pub languages: Vec<Language>,
    /// Raw PNG/JPEG bytes, loaded from a sidecar file by the reader.
    #[serde(skip)]
    pub photo: Option<Vec<u8>>,
}

/// One dated entry, shared by the education and experience sections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Entry {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub description: String,
}

/// A technical skill rendered as a labeled bar scaled `level / 100`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// 0–100; values above 100 are clamped at bar emission.
    pub level: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Language {
    pub name: String,
    pub level: LanguageLevel,
}

/// Spoken-language proficiency, mapped to a fixed bar width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LanguageLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl LanguageLevel {
    /// Fraction of the maximum bar width for this level.
    pub fn bar_fraction(self) -> f32 {
        match self {
            LanguageLevel::Beginner => 0.4,
            LanguageLevel::Intermediate => 0.6,
            LanguageLevel::Advanced => 0.8,
        }
    }
}
