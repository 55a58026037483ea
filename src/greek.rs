//! Greek letter table for Bayer designations.
//!
//! Star catalogs spell the Greek letter of a Bayer designation three ways:
//! spelled out ("Alpha"), as a three-letter abbreviation ("ALF"), or as the
//! Unicode letter itself ("α"). [`GreekTable`] maps any of the three to the
//! spelled-out canonical form, which is the form used as the indexing key
//! throughout the name database.

/// (spelled name, catalog abbreviation, Unicode lowercase letter).
///
/// Abbreviations follow the three-letter scheme common in star catalogs
/// (note "MU", "NU", "XI" and "PI" are shorter).
const LETTERS: [(&str, &str, &str); 24] = [
    ("Alpha", "ALF", "α"),
    ("Beta", "BET", "β"),
    ("Gamma", "GAM", "γ"),
    ("Delta", "DEL", "δ"),
    ("Epsilon", "EPS", "ε"),
    ("Zeta", "ZET", "ζ"),
    ("Eta", "ETA", "η"),
    ("Theta", "TET", "θ"),
    ("Iota", "IOT", "ι"),
    ("Kappa", "KAP", "κ"),
    ("Lambda", "LAM", "λ"),
    ("Mu", "MU", "μ"),
    ("Nu", "NU", "ν"),
    ("Xi", "XI", "ξ"),
    ("Omicron", "OMI", "ο"),
    ("Pi", "PI", "π"),
    ("Rho", "RHO", "ρ"),
    ("Sigma", "SIG", "σ"),
    ("Tau", "TAU", "τ"),
    ("Upsilon", "UPS", "υ"),
    ("Phi", "PHI", "φ"),
    ("Chi", "CHI", "χ"),
    ("Psi", "PSI", "ψ"),
    ("Omega", "OME", "ω"),
];

/// Lookup table over the 24 Greek letters and their accepted spellings.
///
/// Construct once with [`GreekTable::new`] and share by reference (or `Arc`)
/// with every component that needs it. The table is immutable.
#[derive(Debug, Default)]
pub struct GreekTable(());

impl GreekTable {
    pub fn new() -> Self {
        GreekTable(())
    }

    /// Resolve `token` to the canonical spelled-out letter name.
    ///
    /// Matches the spelled name, the catalog abbreviation, or the Unicode
    /// letter, case-insensitively. Returns `None` if `token` is not a Greek
    /// letter under any accepted spelling.
    pub fn canonical(&self, token: &str) -> Option<&'static str> {
        let lower = token.to_lowercase();
        LETTERS
            .iter()
            .find(|(name, abbrev, unicode)| {
                lower == name.to_lowercase() || lower == abbrev.to_lowercase() || lower == *unicode
            })
            .map(|(name, _, _)| *name)
    }

    /// Every accepted spelling of the letter `token` resolves to, in table
    /// order (spelled, abbreviation, Unicode). Empty if `token` is not a
    /// Greek letter.
    ///
    /// Used by the completion engine to widen a query fragment like "ALF"
    /// into the spellings that may appear in registered names.
    pub fn synonyms(&self, token: &str) -> Vec<String> {
        let lower = token.to_lowercase();
        LETTERS
            .iter()
            .find(|(name, abbrev, unicode)| {
                lower == name.to_lowercase() || lower == abbrev.to_lowercase() || lower == *unicode
            })
            .map(|(name, abbrev, unicode)| {
                vec![name.to_string(), abbrev.to_string(), unicode.to_string()]
            })
            .unwrap_or_default()
    }

    /// Rewrite the leading Greek token of a designation to canonical form.
    ///
    /// The leading token is the text up to the first space, minus an optional
    /// trailing multiplicity digit which is kept in place: "ALF2 Cen" becomes
    /// "Alpha2 Cen", "α Cen A" becomes "Alpha Cen A". Names whose leading
    /// token is not a Greek letter are returned unchanged. Idempotent.
    pub fn replace_greek_abbreviation(&self, name: &str) -> String {
        let (token, rest) = match name.find(' ') {
            Some(pos) => (&name[..pos], &name[pos..]),
            None => (name, ""),
        };

        let (letter_part, digit) = match token.strip_suffix(|c: char| c.is_ascii_digit()) {
            Some(head) if !head.is_empty() => (head, &token[head.len()..]),
            _ => (token, ""),
        };

        match self.canonical(letter_part) {
            Some(canonical) => format!("{}{}{}", canonical, digit, rest),
            None => name.to_string(),
        }
    }
}
