//! Document-name classification.
//!
//! A document name follows `Stem ("." Lang)? "." Extension`. The name is split on
//! every `.`: two segments make a base document, three make a translation whose
//! middle segment is the language. Anything else is left unrecognized.
//!
//! The language segment is never checked against the configured languages here.
//! A stem that itself contains dots (`v1.2.md`) is read as a translation with a
//! bogus language; callers that care must check the language themselves.

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DocName {
    /// `stem.md`; `name` is the file name itself.
    Base { name: String },
    /// `stem.lang.md`; `base_name` is `stem.md`.
    Translation { lang: String, base_name: String },
    Unrecognized,
}

impl DocName {
    pub fn parse(file_name: &str) -> Self {
        let parts: Vec<&str> = file_name.split('.').collect();
        match parts.as_slice() {
            [_, _] => DocName::Base {
                name: file_name.to_string(),
            },
            [stem, lang, ext] => DocName::Translation {
                lang: (*lang).to_string(),
                base_name: format!("{stem}.{ext}"),
            },
            _ => DocName::Unrecognized,
        }
    }

    pub fn lang(&self) -> Option<&str> {
        match self {
            DocName::Translation { lang, .. } => Some(lang),
            _ => None,
        }
    }

    /// Name of the base document this file stands for.
    pub fn base_name(&self) -> Option<&str> {
        match self {
            DocName::Base { name } => Some(name),
            DocName::Translation { base_name, .. } => Some(base_name),
            DocName::Unrecognized => None,
        }
    }

    /// Base name without its extension (`guide` for both `guide.md` and `guide.de.md`).
    pub fn stem(&self) -> Option<&str> {
        self.base_name()
            .map(|n| n.rsplit_once('.').map_or(n, |(stem, _)| stem))
    }
}
