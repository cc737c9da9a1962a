//! Theme catalogue types and JSON parsing.
//!
//! The display layer offers a small set of named colour themes. The
//! catalogue ships with built-in defaults and can be replaced by a versioned
//! JSON file, validated on load.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Current supported catalogue version.
const SUPPORTED_VERSION: u32 = 1;

/// A named colour theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Primary colour as a `#RRGGBB` value.
    pub primary_color: String,
    /// Secondary colour as a `#RRGGBB` value.
    pub secondary_color: String,
}

/// A validated catalogue of colour themes.
///
/// # Example
///
/// ```
/// use chrononews::ThemeCatalog;
///
/// let json = r##"{
///     "version": 1,
///     "themes": [
///         {"name": "Ink", "primaryColor": "#102030", "secondaryColor": "#405060"}
///     ]
/// }"##;
///
/// let catalog = ThemeCatalog::from_json(json).expect("valid catalogue");
/// assert_eq!(catalog.themes().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeCatalog {
    version: u32,
    themes: Vec<Theme>,
}

impl ThemeCatalog {
    /// Parses a theme catalogue from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if:
    /// - The JSON is malformed
    /// - The version is unsupported
    /// - The theme list is empty
    /// - Any colour is not a `#RRGGBB` value
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let raw: RawThemeCatalog =
            serde_json::from_str(json).map_err(|e| CatalogError::ParseError {
                message: e.to_string(),
            })?;

        Self::from_raw(raw)
    }

    /// Loads a theme catalogue from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let contents = fs::read_to_string(path).map_err(|e| CatalogError::IoError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Self::from_json(&contents)
    }

    /// Returns the built-in catalogue shipped with the binary.
    #[must_use]
    pub fn built_in() -> Self {
        let themes = [
            ("Violet", "#9b87f5", "#6E59A5"),
            ("Blue", "#0EA5E9", "#0C4A6E"),
            ("Green", "#10B981", "#065F46"),
            ("Red", "#EF4444", "#991B1B"),
        ];
        Self {
            version: SUPPORTED_VERSION,
            themes: themes
                .into_iter()
                .map(|(name, primary, secondary)| Theme {
                    name: name.to_owned(),
                    primary_color: primary.to_owned(),
                    secondary_color: secondary.to_owned(),
                })
                .collect(),
        }
    }

    fn from_raw(raw: RawThemeCatalog) -> Result<Self, CatalogError> {
        if raw.version != SUPPORTED_VERSION {
            return Err(CatalogError::UnsupportedVersion {
                expected: SUPPORTED_VERSION,
                actual: raw.version,
            });
        }

        if raw.themes.is_empty() {
            return Err(CatalogError::EmptyThemes);
        }

        for theme in &raw.themes {
            for colour in [&theme.primary_color, &theme.secondary_color] {
                if !is_valid_hex_colour(colour) {
                    return Err(CatalogError::InvalidColour {
                        theme: theme.name.clone(),
                        value: colour.clone(),
                    });
                }
            }
        }

        Ok(Self {
            version: raw.version,
            themes: raw.themes,
        })
    }

    /// Returns the catalogue version.
    #[must_use]
    pub const fn version(&self) -> u32 {
        self.version
    }

    /// Returns the themes in catalogue order.
    #[must_use]
    pub fn themes(&self) -> &[Theme] {
        &self.themes
    }

    /// Finds a theme by name.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::ThemeNotFound`] if no theme with the given
    /// name exists.
    pub fn find_theme(&self, name: &str) -> Result<&Theme, CatalogError> {
        self.themes
            .iter()
            .find(|theme| theme.name == name)
            .ok_or_else(|| CatalogError::ThemeNotFound {
                name: name.to_owned(),
            })
    }
}

impl Default for ThemeCatalog {
    fn default() -> Self {
        Self::built_in()
    }
}

/// Returns `true` for colours of the form `#RRGGBB`.
fn is_valid_hex_colour(value: &str) -> bool {
    let mut chars = value.chars();
    chars.next() == Some('#') && {
        let digits: Vec<char> = chars.collect();
        digits.len() == 6 && digits.iter().all(char::is_ascii_hexdigit)
    }
}

/// Raw JSON representation for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawThemeCatalog {
    version: u32,
    themes: Vec<Theme>,
}
