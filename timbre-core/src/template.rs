//! Template slot placeholders and verb morphology.

/// One slot placeholder inside a template string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateSlot {
    Noun,
    Verb,
    VerbPast,
    VerbPart,
    VerbGerund,
    Verb3rd,
    Adjective,
    Adverb,
    Conjunction,
    Pronoun,
    Article,
    Preposition,
    Aux,
    Modal,
}

impl TemplateSlot {
    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Noun => "{noun}",
            Self::Verb => "{verb}",
            Self::VerbPast => "{verbPast}",
            Self::VerbPart => "{verbPart}",
            Self::VerbGerund => "{verbGerund}",
            Self::Verb3rd => "{verb3rd}",
            Self::Adjective => "{adjective}",
            Self::Adverb => "{adverb}",
            Self::Conjunction => "{conjunction}",
            Self::Pronoun => "{pronoun}",
            Self::Article => "{article}",
            Self::Preposition => "{preposition}",
            Self::Aux => "{aux}",
            Self::Modal => "{modal}",
        }
    }
}

/// Verb form reported by a tagger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerbForm {
    #[default]
    Bare,
    Past,
    Part,
    Gerund,
    /// Third-person singular present.
    S3,
}

impl VerbForm {
    /// Case-insensitive parse. Missing or unrecognised forms are `Bare`.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::to_lowercase).as_deref() {
            Some("past") => Self::Past,
            Some("part") => Self::Part,
            Some("gerund") => Self::Gerund,
            Some("s3") => Self::S3,
            _ => Self::Bare,
        }
    }

    pub fn slot(&self) -> TemplateSlot {
        match self {
            Self::Bare => TemplateSlot::Verb,
            Self::Past => TemplateSlot::VerbPast,
            Self::Part => TemplateSlot::VerbPart,
            Self::Gerund => TemplateSlot::VerbGerund,
            Self::S3 => TemplateSlot::Verb3rd,
        }
    }
}
