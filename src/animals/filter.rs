//! # Query Filter
//!
//! Reduces the record list by the predicates given as URL query parameters.
//! `name`, `species` and `diet` match by exact string equality;
//! every `personalityTraits` value must appear in the record's trait list.
//! All predicates are AND-ed.

use super::record::AnimalRecord;

/// Query keys understood by the filter
pub const NAME_KEY: &str = "name";
pub const SPECIES_KEY: &str = "species";
pub const DIET_KEY: &str = "diet";
pub const TRAITS_KEY: &str = "personalityTraits";

/// Record fields a filter can target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimalField {
    Name,
    Species,
    Diet,
    PersonalityTraits,
}

/// Filter operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOperator {
    /// Field equals value
    Eq,

    /// List field contains value
    Contains,
}

/// Value carried by a query key.
///
/// A key given more than once becomes a list, and a list never equals a
/// string field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    One(String),
    Many(Vec<String>),
}

impl FilterValue {
    /// Fold another occurrence of the same key into this value
    fn push(self, value: String) -> Self {
        match self {
            FilterValue::One(first) => FilterValue::Many(vec![first, value]),
            FilterValue::Many(mut values) => {
                values.push(value);
                FilterValue::Many(values)
            }
        }
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        FilterValue::One(value.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        FilterValue::One(value)
    }
}

/// A single predicate over an animal record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterExpr {
    pub field: AnimalField,
    pub operator: FilterOperator,
    pub value: FilterValue,
}

impl FilterExpr {
    pub fn new(field: AnimalField, operator: FilterOperator, value: impl Into<FilterValue>) -> Self {
        Self {
            field,
            operator,
            value: value.into(),
        }
    }

    /// Create an equality filter
    pub fn eq(field: AnimalField, value: impl Into<FilterValue>) -> Self {
        Self::new(field, FilterOperator::Eq, value)
    }

    /// Create a trait containment filter
    pub fn has_trait(value: impl Into<String>) -> Self {
        Self::new(
            AnimalField::PersonalityTraits,
            FilterOperator::Contains,
            FilterValue::One(value.into()),
        )
    }

    /// Check if a record matches this filter
    pub fn matches(&self, animal: &AnimalRecord) -> bool {
        let value = match &self.value {
            FilterValue::One(value) => value,
            FilterValue::Many(_) => return false,
        };

        match (self.operator, self.field) {
            (FilterOperator::Contains, AnimalField::PersonalityTraits) => animal.has_trait(value),
            (FilterOperator::Eq, AnimalField::Name) => animal.name == *value,
            (FilterOperator::Eq, AnimalField::Species) => animal.species == *value,
            (FilterOperator::Eq, AnimalField::Diet) => animal.diet == *value,
            // A trait list never equals a single string, and scalar fields hold no list.
            (FilterOperator::Eq, AnimalField::PersonalityTraits) => false,
            (FilterOperator::Contains, _) => false,
        }
    }
}

/// A set of filters combined with AND logic
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    pub filters: Vec<FilterExpr>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn and(mut self, filter: FilterExpr) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Check if a record matches all filters
    pub fn matches(&self, animal: &AnimalRecord) -> bool {
        self.filters.iter().all(|f| f.matches(animal))
    }
}

/// Parsed animal query parameters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnimalQuery {
    pub name: Option<FilterValue>,
    pub species: Option<FilterValue>,
    pub diet: Option<FilterValue>,
    /// Every trait listed here must be present on a matching record
    pub personality_traits: Vec<String>,
}

impl AnimalQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a query from raw URL query pairs.
    ///
    /// `personalityTraits` may repeat (or use the `personalityTraits[]` form)
    /// to build a list of required traits. A repeated scalar key keeps every
    /// value and then matches no record. Empty values and unknown keys impose
    /// no constraint.
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: AsRef<str>,
        V: AsRef<str>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut query = AnimalQuery::new();

        for (key, value) in pairs {
            let value = value.as_ref();
            if value.is_empty() {
                continue;
            }

            match key.as_ref() {
                NAME_KEY => merge(&mut query.name, value),
                SPECIES_KEY => merge(&mut query.species, value),
                DIET_KEY => merge(&mut query.diet, value),
                TRAITS_KEY | "personalityTraits[]" => {
                    query.personality_traits.push(value.to_string())
                }
                _ => {}
            }
        }

        query
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(FilterValue::One(name.into()));
        self
    }

    pub fn with_species(mut self, species: impl Into<String>) -> Self {
        self.species = Some(FilterValue::One(species.into()));
        self
    }

    pub fn with_diet(mut self, diet: impl Into<String>) -> Self {
        self.diet = Some(FilterValue::One(diet.into()));
        self
    }

    pub fn with_trait(mut self, personality_trait: impl Into<String>) -> Self {
        self.personality_traits.push(personality_trait.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.species.is_none()
            && self.diet.is_none()
            && self.personality_traits.is_empty()
    }

    /// Lower this query into a conjunction of predicates
    pub fn to_filter_set(&self) -> FilterSet {
        let mut set = FilterSet::new();

        for personality_trait in &self.personality_traits {
            set = set.and(FilterExpr::has_trait(personality_trait.as_str()));
        }
        if let Some(diet) = &self.diet {
            set = set.and(FilterExpr::eq(AnimalField::Diet, diet.clone()));
        }
        if let Some(species) = &self.species {
            set = set.and(FilterExpr::eq(AnimalField::Species, species.clone()));
        }
        if let Some(name) = &self.name {
            set = set.and(FilterExpr::eq(AnimalField::Name, name.clone()));
        }

        set
    }
}

fn merge(slot: &mut Option<FilterValue>, value: &str) {
    *slot = Some(match slot.take() {
        None => FilterValue::One(value.to_string()),
        Some(existing) => existing.push(value.to_string()),
    });
}

/// Return the records matching `query`, in store order.
///
/// An empty query returns every record.
pub fn filter_by_query(query: &AnimalQuery, animals: &[AnimalRecord]) -> Vec<AnimalRecord> {
    if query.is_empty() {
        return animals.to_vec();
    }

    let filter_set = query.to_filter_set();
    animals
        .iter()
        .filter(|a| filter_set.matches(a))
        .cloned()
        .collect()
}
