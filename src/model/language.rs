//! Language tags for snippet variants

use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A language a snippet can be written in
///
/// The declaration order is the tab order shown on every page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageTag {
    Cpp,
    C,
    Python,
    Java,
}

impl LanguageTag {
    pub fn all() -> Vec<LanguageTag> {
        vec![
            LanguageTag::Cpp,
            LanguageTag::C,
            LanguageTag::Python,
            LanguageTag::Java,
        ]
    }

    /// Identifier used in catalog files and config
    pub fn key(&self) -> &'static str {
        match self {
            LanguageTag::Cpp => "cpp",
            LanguageTag::C => "c",
            LanguageTag::Python => "python",
            LanguageTag::Java => "java",
        }
    }

    /// Label shown on the tab strip
    pub fn label(&self) -> &'static str {
        match self {
            LanguageTag::Cpp => "C++",
            LanguageTag::C => "C",
            LanguageTag::Python => "Python",
            LanguageTag::Java => "Java",
        }
    }

    pub fn accent(&self) -> Color {
        match self {
            LanguageTag::Cpp => Color::Rgb(14, 165, 233),
            LanguageTag::C => Color::Rgb(139, 92, 246),
            LanguageTag::Python => Color::Rgb(16, 185, 129),
            LanguageTag::Java => Color::Rgb(245, 158, 11),
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            LanguageTag::Cpp => "cpp",
            LanguageTag::C => "c",
            LanguageTag::Python => "py",
            LanguageTag::Java => "java",
        }
    }

    /// File name for a snippet with the given snake_case stem
    ///
    /// Java sources are named after their public class, so the stem is
    /// converted to PascalCase: `bubble_sort` becomes `BubbleSort.java`.
    pub fn file_name(&self, stem: &str) -> String {
        match self {
            LanguageTag::Java => format!("{}.{}", pascal_case(stem), self.extension()),
            _ => format!("{}.{}", stem, self.extension()),
        }
    }
}

fn pascal_case(stem: &str) -> String {
    stem.split(|c: char| c == '_' || c == '-' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for LanguageTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cpp" | "c++" => Ok(LanguageTag::Cpp),
            "c" => Ok(LanguageTag::C),
            "python" | "py" => Ok(LanguageTag::Python),
            "java" => Ok(LanguageTag::Java),
            other => Err(format!("unknown language '{}'", other)),
        }
    }
}
