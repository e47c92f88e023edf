//! Column header normalization.
//!
//! Spreadsheet templates are filled in by hand, so the same column may show up
//! as `"Nº de Registro"`, `"N° de registro"` or `"nº  de REGISTRO"`. Every header
//! is folded into a [`Slug`] before it is compared against a schema.

use std::borrow::Borrow;
use std::fmt;

use serde::Serialize;
use unicode_normalization::UnicodeNormalization;

/// Normalizes a human-written header into a slug.
///
/// Accents are folded to their base letter, the result is lowercased and every
/// character outside `[a-z0-9]` is deleted. A slug that would start with a
/// digit is prefixed with `n`.
///
/// ```
/// use acervo_model::slugify;
///
/// assert_eq!(slugify("Nº de Registro"), "nderegistro");
/// assert_eq!(slugify("Material/Técnica"), "materialtecnica");
/// assert_eq!(slugify("3D"), "n3d");
/// ```
pub fn slugify(header: &str) -> String {
    let folded: String = header
        .nfd()
        .filter(|c| !is_combining_diacritic(*c))
        .collect::<String>()
        .to_lowercase();

    let mut slug: String = folded
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect();

    if slug.starts_with(|c: char| c.is_ascii_digit()) {
        slug.insert(0, 'n');
    }
    slug
}

/// Combining Diacritical Marks block (U+0300..=U+036F).
fn is_combining_diacritic(c: char) -> bool {
    ('\u{0300}'..='\u{036f}').contains(&c)
}

/// A normalized column identifier.
///
/// Only constructed through [`slugify`], so the value always matches
/// `^([a-z][a-z0-9]*)?$`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Slug(String);

impl Slug {
    /// Normalizes a raw header cell.
    pub fn from_header(header: &str) -> Self {
        Self(slugify(header))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Slug {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Slug {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Slug {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl From<&str> for Slug {
    fn from(header: &str) -> Self {
        Self::from_header(header)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_accents() {
        assert_eq!(slugify("Título"), "titulo");
        assert_eq!(slugify("Titulo"), "titulo");
        assert_eq!(slugify("Situação"), "situacao");
        assert_eq!(slugify("Âmbito e Conteúdo"), "ambitoeconteudo");
    }

    #[test]
    fn test_deletes_separators() {
        assert_eq!(slugify("História Administrativa/Biografia"), "historiaadministrativabiografia");
        assert_eq!(slugify("  Cod. de referência  "), "coddereferencia");
        assert_eq!(slugify("Unid. de pesagem"), "uniddepesagem");
    }

    #[test]
    fn test_ordinal_indicator_is_dropped() {
        // U+00BA has no canonical decomposition, so it is deleted as punctuation.
        assert_eq!(slugify("Nº de Registro"), "nderegistro");
    }

    #[test]
    fn test_leading_digit_gets_prefix() {
        assert_eq!(slugify("1ª edição"), "n1edicao");
        assert_eq!(slugify("  42 "), "n42");
    }

    #[test]
    fn test_trailing_digit_kept() {
        assert_eq!(slugify("Campo 2"), "campo2");
    }

    #[test]
    fn test_empty_and_symbol_only() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify(" -/- "), "");
    }

    #[test]
    fn test_slug_comparisons() {
        let slug = Slug::from_header("Dimensões");
        assert_eq!(slug, "dimensoes");
        assert_eq!(slug.as_str(), "dimensoes");
        assert_eq!(slug.to_string(), "dimensoes");
        assert!(!slug.is_empty());
        assert!(Slug::default().is_empty());
    }

    #[test]
    fn test_slug_serializes_as_string() {
        let json = serde_json::to_string(&Slug::from_header("Editora")).unwrap();
        assert_eq!(json, "\"editora\"");
    }
}
