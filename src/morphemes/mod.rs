//! The morpheme lookup service.
//!
//! Nomenclature is assembled from morphemes: alkane stems, multiplicative
//! prefixes, heteroatom replacement prefixes, functional-group suffix and
//! prefix forms, and retained ring names. All of them live in a read-only
//! TOML document; a default copy is embedded in the binary and parsed once
//! on first access. Missing entries are never fatal; callers fall back to
//! systematic construction (`C⟨n⟩` stems, `polycyclic_C⟨n⟩` labels).

use crate::core::Element;
use crate::core::error::{MorphemeParseError, NamerError};
use serde::{Deserialize, Deserializer, de};
use std::collections::HashMap;
use std::sync::LazyLock;

mod default;

/// Deserializes a TOML table with stringified integer keys into a
/// `HashMap<usize, V>`.
///
/// TOML only allows string keys, so counts such as `"20" = "eicos"` need
/// parsing on the way in.
fn usize_keyed_map<'de, V, D>(deserializer: D) -> Result<HashMap<usize, V>, D::Error>
where
    V: Deserialize<'de>,
    D: Deserializer<'de>,
{
    let string_map = HashMap::<String, V>::deserialize(deserializer)?;
    string_map
        .into_iter()
        .map(|(key, value)| {
            key.parse::<usize>()
                .map(|parsed| (parsed, value))
                .map_err(de::Error::custom)
        })
        .collect()
}

/// Which multiplicative prefix family to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MultiplierKind {
    /// di / tri / tetra / ... for simple substituents.
    Basic,
    /// bis / tris / tetrakis / ... for complex (locant-bearing) substituents.
    Group,
}

/// Metadata for a named substituent prefix.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SubstituentMeta {
    /// Alternative spellings accepted for this substituent.
    #[serde(default)]
    pub aliases: Vec<String>,
    /// Suffix form, when the substituent can also be cited as one.
    #[serde(default)]
    pub suffix: String,
    /// Prefix form used in substitutive names.
    #[serde(default)]
    pub prefix: String,
    /// Priority on the external inverted scale.
    #[serde(default)]
    pub priority: u8,
}

/// Metadata for a detectable functional-group class.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FunctionalGroupMeta {
    /// Priority on the external inverted scale (1 = most senior); values
    /// above 20 are taken as already on the engine scale.
    pub priority: u8,
    /// Suffix morpheme; empty when the class is prefix-only.
    #[serde(default)]
    pub suffix: String,
    /// Prefix morpheme.
    #[serde(default)]
    pub prefix: String,
    /// Canonical class name.
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct Multipliers {
    #[serde(default, deserialize_with = "usize_keyed_map")]
    basic: HashMap<usize, String>,
    #[serde(default, deserialize_with = "usize_keyed_map")]
    group: HashMap<usize, String>,
}

/// The complete morpheme table, deserialized from one TOML document.
///
/// Every section is optional; a table missing a section simply answers
/// `None` for its queries and the engine degrades gracefully.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct MorphemeTable {
    #[serde(default, deserialize_with = "usize_keyed_map")]
    alkanes: HashMap<usize, String>,
    #[serde(default)]
    multipliers: Multipliers,
    #[serde(default)]
    heteroatom_prefixes: HashMap<String, String>,
    #[serde(default)]
    substituents: HashMap<String, SubstituentMeta>,
    #[serde(default)]
    functional_groups: HashMap<String, FunctionalGroupMeta>,
    #[serde(default)]
    retained_rings: HashMap<String, String>,
}

impl MorphemeTable {
    /// The alkane stem for a carbon count (1 → "meth", 20 → "eicos").
    pub fn alkane_stem(&self, carbon_count: usize) -> Option<&str> {
        self.alkanes.get(&carbon_count).map(String::as_str)
    }

    /// The alkane stem, or a generic `C⟨n⟩` token when the count is outside
    /// the table.
    pub fn stem_or_generic(&self, carbon_count: usize) -> String {
        match self.alkane_stem(carbon_count) {
            Some(stem) => stem.to_owned(),
            None => format!("C{}", carbon_count),
        }
    }

    /// The multiplicative prefix for a count, in the requested family.
    pub fn multiplier(&self, count: usize, kind: MultiplierKind) -> Option<&str> {
        let table = match kind {
            MultiplierKind::Basic => &self.multipliers.basic,
            MultiplierKind::Group => &self.multipliers.group,
        };
        table.get(&count).map(String::as_str)
    }

    /// The skeletal replacement prefix for a heteroatom (O → "oxa").
    pub fn heteroatom_prefix(&self, element: Element) -> Option<&str> {
        self.heteroatom_prefixes
            .get(element.symbol())
            .map(String::as_str)
    }

    /// Metadata for a functional-group pattern key.
    pub fn functional_group_meta(&self, pattern_key: &str) -> Option<&FunctionalGroupMeta> {
        self.functional_groups.get(pattern_key)
    }

    /// Metadata for a named substituent, by canonical name or alias.
    pub fn substituent_meta(&self, name: &str) -> Option<&SubstituentMeta> {
        if let Some(meta) = self.substituents.get(name) {
            return Some(meta);
        }
        self.substituents
            .values()
            .find(|meta| meta.aliases.iter().any(|alias| alias == name))
    }

    /// The retained name bound to a ring-system pattern key.
    pub fn retained_ring_name(&self, pattern_key: &str) -> Option<&str> {
        self.retained_rings.get(pattern_key).map(String::as_str)
    }

    /// Normalizes a substituent citation for alphabetical comparison.
    ///
    /// Strips leading locants (`2,3-`), multiplicative prefixes known to
    /// the table (di/tri/bis/...), and the citation qualifiers `sec-`,
    /// `tert-`, `iso` and `n-`, leaving the bare stem that P-14.5.2
    /// alphabetizes on.
    pub fn normalize_citation_token(&self, raw: &str) -> String {
        let mut current = raw.trim().to_owned();
        loop {
            let mut stripped = false;

            // Enclosure and leading locants: digits, commas, hyphens. Letter
            // locants (N, 4a) never start a citation, so this run suffices.
            let trimmed = current
                .trim_matches(|c| c == '(' || c == ')')
                .trim_start_matches(|c: char| c.is_ascii_digit() || c == ',' || c == '-')
                .to_owned();
            if trimmed != current {
                current = trimmed;
                stripped = true;
            }
            for qualifier in ["sec-", "tert-", "n-"] {
                if let Some(rest) = current.strip_prefix(qualifier) {
                    current = rest.to_owned();
                    stripped = true;
                }
            }
            if let Some(rest) = current.strip_prefix("iso") {
                // "iso" only counts as a qualifier when something follows.
                if !rest.is_empty() {
                    current = rest.to_owned();
                    stripped = true;
                }
            }
            let mut multipliers: Vec<&String> = self
                .multipliers
                .basic
                .values()
                .chain(self.multipliers.group.values())
                .collect();
            multipliers.sort_by_key(|morpheme| std::cmp::Reverse(morpheme.len()));
            for morpheme in multipliers {
                if let Some(rest) = current.strip_prefix(morpheme.as_str()) {
                    if rest.len() > 2 {
                        current = rest.to_owned();
                        stripped = true;
                        break;
                    }
                }
            }
            if !stripped {
                break;
            }
        }
        current
    }
}

/// Lazily-loaded default morpheme tables.
///
/// The default document is compiled into the binary and parsed once on
/// first access.
static DEFAULT_TABLE: LazyLock<Result<MorphemeTable, NamerError>> =
    LazyLock::new(|| parse_morphemes(default::DEFAULT_MORPHEMES_TOML));

/// Parses a TOML string into a morpheme table.
///
/// # Errors
///
/// Returns `NamerError::MorphemeParse` if the TOML is malformed or a
/// section has the wrong shape.
///
/// # Examples
///
/// ```
/// use iupac_namer::morphemes::parse_morphemes;
///
/// let table = parse_morphemes(r#"
///     [alkanes]
///     1 = "meth"
///     2 = "eth"
/// "#).unwrap();
/// assert_eq!(table.alkane_stem(2), Some("eth"));
/// assert_eq!(table.alkane_stem(3), None);
/// ```
pub fn parse_morphemes(content: &str) -> Result<MorphemeTable, NamerError> {
    let table: MorphemeTable = toml::from_str(content).map_err(|e| MorphemeParseError {
        message: e.to_string(),
    })?;
    Ok(table)
}

/// Returns the default morpheme tables compiled into the library.
pub fn default_table() -> Result<&'static MorphemeTable, NamerError> {
    DEFAULT_TABLE.as_ref().map_err(|e| match e {
        NamerError::MorphemeParse(parse) => NamerError::MorphemeParse(parse.clone()),
        NamerError::InvalidInput(graph) => NamerError::InvalidInput(graph.clone()),
    })
}
