use crate::types::SearchField;

/// The text carried by one searchable field of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    List(&'a [String]),
    Missing,
}

/// Read-only view of a catalog record as seen by the search engine.
///
/// Only `id` and `name` are mandatory; every other accessor defaults to
/// "absent" so thin catalog types only override what they carry. The engine
/// never mutates an item through this trait.
pub trait SearchableItem {
    fn id(&self) -> &str;
    fn name(&self) -> &str;

    fn category(&self) -> Option<&str> {
        None
    }

    fn brand(&self) -> Option<&str> {
        None
    }

    fn price(&self) -> Option<f64> {
        None
    }

    fn in_stock(&self) -> Option<bool> {
        None
    }

    fn featured(&self) -> Option<bool> {
        None
    }

    fn rating(&self) -> Option<f64> {
        None
    }

    fn popularity(&self) -> Option<f64> {
        None
    }

    fn description(&self) -> Option<&str> {
        None
    }

    fn tags(&self) -> &[String] {
        &[]
    }

    /// Resolve a configured search field to the text it contributes.
    fn field_value(&self, field: SearchField) -> FieldValue<'_> {
        match field {
            SearchField::Id => FieldValue::Text(self.id()),
            SearchField::Name => FieldValue::Text(self.name()),
            SearchField::Category => optional_text(self.category()),
            SearchField::Brand => optional_text(self.brand()),
            SearchField::Description => optional_text(self.description()),
            SearchField::Tags => FieldValue::List(self.tags()),
        }
    }
}

fn optional_text(value: Option<&str>) -> FieldValue<'_> {
    value.map_or(FieldValue::Missing, FieldValue::Text)
}
