//! Immutable lookup tables driving cuisine and dietary inference.

use crate::domain::restaurant::{Cuisine, DietaryTag};

/// Keyword to cuisine mapping. Order matters: name inference takes the first
/// keyword contained in the name.
pub const CUISINE_KEYWORDS: &[(&str, Cuisine)] = &[
    ("pizza", Cuisine::Italian),
    ("italian", Cuisine::Italian),
    ("chinese", Cuisine::Chinese),
    ("japanese", Cuisine::Japanese),
    ("sushi", Cuisine::Japanese),
    ("indian", Cuisine::Indian),
    ("mexican", Cuisine::Mexican),
    ("thai", Cuisine::Thai),
    ("greek", Cuisine::Greek),
    ("mediterranean", Cuisine::Mediterranean),
    ("french", Cuisine::French),
    ("american", Cuisine::American),
    ("korean", Cuisine::Korean),
    ("vietnamese", Cuisine::Vietnamese),
    ("turkish", Cuisine::Turkish),
    ("lebanese", Cuisine::Lebanese),
    ("seafood", Cuisine::Seafood),
    ("steakhouse", Cuisine::American),
    ("burger", Cuisine::American),
    ("sandwich", Cuisine::American),
    ("barbecue", Cuisine::American),
    ("regional", Cuisine::Regional),
];

/// OSM `diet:*` keys and the tag each one grants.
pub const DIET_KEYS: &[(&str, DietaryTag)] = &[
    ("diet:vegetarian", DietaryTag::Vegetarian),
    ("diet:vegan", DietaryTag::Vegan),
    ("diet:halal", DietaryTag::Halal),
    ("diet:kosher", DietaryTag::Kosher),
    ("diet:gluten_free", DietaryTag::GlutenFree),
];

/// `diet:*` values that mean the diet is catered for.
const AFFIRMATIVE_DIET_VALUES: [&str; 2] = ["yes", "only"];

/// Category heuristics that add a Vegetarian tag without an explicit
/// `diet:vegetarian` tag.
#[derive(Debug, Clone, PartialEq)]
pub struct DietaryHeuristics {
    /// Tag every `amenity=cafe` as Vegetarian.
    pub cafes_are_vegetarian: bool,
    /// Probability, per cuisine, of adding a Vegetarian tag.
    pub vegetarian_odds: Vec<(Cuisine, f64)>,
}

impl Default for DietaryHeuristics {
    fn default() -> Self {
        Self {
            cafes_are_vegetarian: true,
            vegetarian_odds: vec![(Cuisine::Indian, 0.5), (Cuisine::Mediterranean, 0.3)],
        }
    }
}

/// Street and city used for synthetic addresses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderAddress {
    /// Street name after the random house number.
    pub street: String,
    /// City and province suffix.
    pub locality: String,
}

impl Default for PlaceholderAddress {
    fn default() -> Self {
        Self {
            street: "Main St".to_owned(),
            locality: "Ottawa, ON".to_owned(),
        }
    }
}

/// Lookup tables owned by the normaliser.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizationTables {
    /// Ordered keyword table for cuisine inference.
    pub cuisine_keywords: Vec<(&'static str, Cuisine)>,
    /// Explicit diet keys.
    pub diet_keys: Vec<(&'static str, DietaryTag)>,
    /// Category heuristics.
    pub heuristics: DietaryHeuristics,
    /// Synthetic address parts.
    pub placeholder: PlaceholderAddress,
}

impl Default for NormalizationTables {
    fn default() -> Self {
        Self {
            cuisine_keywords: CUISINE_KEYWORDS.to_vec(),
            diet_keys: DIET_KEYS.to_vec(),
            heuristics: DietaryHeuristics::default(),
            placeholder: PlaceholderAddress::default(),
        }
    }
}

impl NormalizationTables {
    /// Resolve a cuisine, preferring the explicit `cuisine` tag over the name.
    ///
    /// The tag is lowercased and only its first `;`-separated value is
    /// looked up. When the tag is absent or unknown, the first keyword
    /// contained in the lowercased name wins. Otherwise the cuisine is
    /// [`Cuisine::International`].
    pub fn resolve_cuisine(&self, cuisine_tag: Option<&str>, name: &str) -> Cuisine {
        cuisine_tag
            .and_then(|raw| self.cuisine_from_tag(raw))
            .or_else(|| self.cuisine_from_name(name))
            .unwrap_or(Cuisine::International)
    }

    fn cuisine_from_tag(&self, raw: &str) -> Option<Cuisine> {
        let lowered = raw.to_lowercase();
        let key = lowered.split(';').next().unwrap_or_default().trim();
        if key.is_empty() {
            return None;
        }
        self.cuisine_keywords
            .iter()
            .find(|(keyword, _)| *keyword == key)
            .map(|(_, cuisine)| *cuisine)
    }

    fn cuisine_from_name(&self, name: &str) -> Option<Cuisine> {
        let lowered = name.to_lowercase();
        self.cuisine_keywords
            .iter()
            .find(|(keyword, _)| lowered.contains(keyword))
            .map(|(_, cuisine)| *cuisine)
    }

    /// Dietary tags granted by explicit `diet:*` tags, in table order.
    pub fn explicit_diets<'a>(
        &'a self,
        tag: impl Fn(&str) -> Option<&'a str> + 'a,
    ) -> impl Iterator<Item = DietaryTag> + 'a {
        self.diet_keys.iter().filter_map(move |(key, diet)| {
            tag(*key)
                .map(str::trim)
                .filter(|value| {
                    AFFIRMATIVE_DIET_VALUES
                        .iter()
                        .any(|affirmative| affirmative == value)
                })
                .map(|_| *diet)
        })
    }

    /// Probability of a heuristic Vegetarian tag for `cuisine`.
    pub fn vegetarian_odds(&self, cuisine: Cuisine) -> Option<f64> {
        self.heuristics
            .vegetarian_odds
            .iter()
            .find(|(candidate, _)| *candidate == cuisine)
            .map(|(_, odds)| *odds)
    }
}
