//! Operation mode of a section edit

use std::fmt;

/// What to do with the addressed section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SectionMode {
    /// Replace the section body, or append the section when it is absent.
    #[default]
    Upsert,
    /// Delete the section, markers included.
    Remove,
}

impl SectionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Upsert => "upsert",
            Self::Remove => "remove",
        }
    }
}

impl fmt::Display for SectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
