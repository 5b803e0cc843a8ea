//! Client-side filter, search and sort over a fetched list.
//!
//! Everything here is pure: the rows shown are recomputed from the
//! authoritative list and the current [`TableQuery`] on every render.

use std::cmp::Ordering;

use crate::format::parse_timestamp;

/// Selecting this value (or leaving a filter blank) disables the filter.
pub const MATCH_ALL: &str = "Todos";

#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
    Missing,
}

impl FieldValue {
    pub fn text(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }

    pub fn opt_text(value: Option<&str>) -> Self {
        value.map_or(FieldValue::Missing, FieldValue::text)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterKind {
    Text,
    /// Boolean field offered as two localized choices.
    Flag {
        yes: &'static str,
        no: &'static str,
    },
}

pub trait FilterField: Copy + PartialEq + 'static {
    fn all() -> &'static [Self];
    fn label(self) -> &'static str;

    fn kind(self) -> FilterKind {
        FilterKind::Text
    }
}

pub trait SortOption<R>: Copy + PartialEq + 'static {
    fn all() -> &'static [Self];
    fn label(self) -> &'static str;
    fn compare(self, a: &R, b: &R) -> Ordering;

    fn from_label(label: &str) -> Option<Self> {
        Self::all().iter().copied().find(|option| option.label() == label)
    }
}

/// A row type the data table knows how to filter, search and sort.
pub trait TableRecord: Clone + PartialEq + 'static {
    type Field: FilterField;
    type Sort: SortOption<Self> + Default;

    fn row_key(&self) -> String;
    fn field(&self, field: Self::Field) -> FieldValue;
    /// Text the free-text search looks into.
    fn search_text(&self) -> Vec<&str>;
}

#[derive(Clone, Debug, PartialEq)]
pub struct Filter<F> {
    pub field: F,
    pub value: String,
}

impl<F: FilterField> Filter<F> {
    pub fn new(field: F) -> Self {
        Self {
            field,
            value: String::new(),
        }
    }

    pub fn label(&self) -> &'static str {
        self.field.label()
    }

    pub fn matches(&self, actual: &FieldValue) -> bool {
        let wanted = self.value.as_str();
        if wanted.is_empty() || wanted == MATCH_ALL {
            return true;
        }

        match (self.field.kind(), actual) {
            (FilterKind::Flag { yes, no }, FieldValue::Flag(flag)) => {
                if wanted == yes {
                    *flag
                } else if wanted == no {
                    !*flag
                } else {
                    false
                }
            }
            (_, FieldValue::Text(text)) => text == wanted,
            (_, FieldValue::Flag(flag)) => flag.to_string() == wanted,
            (_, FieldValue::Missing) => false,
        }
    }
}

pub struct TableQuery<R: TableRecord> {
    pub filters: Vec<Filter<R::Field>>,
    pub search: String,
    pub sort: R::Sort,
}

impl<R: TableRecord> Clone for TableQuery<R> {
    fn clone(&self) -> Self {
        Self {
            filters: self.filters.clone(),
            search: self.search.clone(),
            sort: self.sort,
        }
    }
}

impl<R: TableRecord> PartialEq for TableQuery<R> {
    fn eq(&self, other: &Self) -> bool {
        self.filters == other.filters && self.search == other.search && self.sort == other.sort
    }
}

impl<R: TableRecord> Default for TableQuery<R> {
    fn default() -> Self {
        Self {
            filters: Vec::new(),
            search: String::new(),
            sort: R::Sort::default(),
        }
    }
}

impl<R: TableRecord> TableQuery<R> {
    /// Adds an empty filter for `field` unless one is already active.
    pub fn add_filter(&mut self, field: R::Field) {
        if !self.filters.iter().any(|f| f.field == field) {
            self.filters.push(Filter::new(field));
        }
    }

    pub fn set_filter_value(&mut self, field: R::Field, value: &str) {
        if let Some(filter) = self.filters.iter_mut().find(|f| f.field == field) {
            filter.value = value.to_string();
        }
    }

    pub fn remove_filter(&mut self, field: R::Field) {
        self.filters.retain(|f| f.field != field);
    }

    pub fn matches_filters(&self, record: &R) -> bool {
        self.filters
            .iter()
            .all(|filter| filter.matches(&record.field(filter.field)))
    }

    pub fn matches_search(&self, record: &R) -> bool {
        let term = self.search.trim().to_lowercase();
        if term.is_empty() {
            return true;
        }
        record
            .search_text()
            .iter()
            .any(|text| text.to_lowercase().contains(&term))
    }
}

/// Filters, then searches, then sorts. The sort is stable, so applying it
/// to an already sorted sequence leaves it unchanged.
pub fn visible_rows<'a, R: TableRecord>(rows: &'a [R], query: &TableQuery<R>) -> Vec<&'a R> {
    let mut visible: Vec<&R> = rows
        .iter()
        .filter(|row| query.matches_filters(row))
        .filter(|row| query.matches_search(row))
        .collect();
    visible.sort_by(|a, b| query.sort.compare(a, b));
    visible
}

/// Choices offered by a filter's select.
///
/// Text fields offer the distinct non-empty values present in `rows`, in
/// first-seen order; values absent from the fetched list are never offered.
pub fn filter_options<R: TableRecord>(rows: &[R], field: R::Field) -> Vec<String> {
    if let FilterKind::Flag { yes, no } = field.kind() {
        return vec![yes.to_string(), no.to_string()];
    }

    let mut seen: Vec<String> = Vec::new();
    for row in rows {
        if let FieldValue::Text(text) = row.field(field) {
            if !text.is_empty() && !seen.contains(&text) {
                seen.push(text);
            }
        }
    }
    seen
}

/// Orders timestamps oldest first; unparseable values sort before any date.
pub fn compare_timestamps(a: &str, b: &str) -> Ordering {
    parse_timestamp(a).cmp(&parse_timestamp(b))
}

/// Orders timestamps newest first; unparseable values still sort before any date.
pub fn compare_timestamps_desc(a: &str, b: &str) -> Ordering {
    match (parse_timestamp(a), parse_timestamp(b)) {
        (Some(x), Some(y)) => y.cmp(&x),
        (x, y) => x.is_some().cmp(&y.is_some()),
    }
}

/// Numeric when both sides parse, otherwise numbers first then text.
pub fn compare_numeric_text(a: &str, b: &str) -> Ordering {
    match (a.trim().parse::<i64>(), b.trim().parse::<i64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}

/// Case-insensitive, falling back to exact comparison to keep the order total.
pub fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Item {
        id: u32,
        name: &'static str,
        team: Option<&'static str>,
        done: bool,
    }

    #[derive(Clone, Copy, Debug, PartialEq)]
    enum ItemField {
        Team,
        Done,
    }

    impl FilterField for ItemField {
        fn all() -> &'static [Self] {
            &[ItemField::Team, ItemField::Done]
        }

        fn label(self) -> &'static str {
            match self {
                ItemField::Team => "Equipo",
                ItemField::Done => "Hecho",
            }
        }

        fn kind(self) -> FilterKind {
            match self {
                ItemField::Team => FilterKind::Text,
                ItemField::Done => FilterKind::Flag { yes: "Sí", no: "No" },
            }
        }
    }

    #[derive(Clone, Copy, Debug, Default, PartialEq)]
    enum ItemSort {
        #[default]
        Id,
        NameDesc,
    }

    impl SortOption<Item> for ItemSort {
        fn all() -> &'static [Self] {
            &[ItemSort::Id, ItemSort::NameDesc]
        }

        fn label(self) -> &'static str {
            match self {
                ItemSort::Id => "Id",
                ItemSort::NameDesc => "Nombre desc",
            }
        }

        fn compare(self, a: &Item, b: &Item) -> Ordering {
            match self {
                ItemSort::Id => a.id.cmp(&b.id),
                ItemSort::NameDesc => compare_text(b.name, a.name),
            }
        }
    }

    impl TableRecord for Item {
        type Field = ItemField;
        type Sort = ItemSort;

        fn row_key(&self) -> String {
            self.id.to_string()
        }

        fn field(&self, field: ItemField) -> FieldValue {
            match field {
                ItemField::Team => FieldValue::opt_text(self.team),
                ItemField::Done => FieldValue::Flag(self.done),
            }
        }

        fn search_text(&self) -> Vec<&str> {
            vec![self.name]
        }
    }

    fn items() -> Vec<Item> {
        vec![
            Item { id: 3, name: "Carla", team: Some("Ventas"), done: true },
            Item { id: 1, name: "Bruno", team: Some("ventas"), done: false },
            Item { id: 2, name: "Ana", team: None, done: true },
            Item { id: 4, name: "Bea", team: Some("Soporte"), done: false },
        ]
    }

    fn ids(rows: &[&Item]) -> Vec<u32> {
        rows.iter().map(|r| r.id).collect()
    }

    #[test]
    fn empty_query_shows_everything_sorted() {
        let rows = items();
        let query = TableQuery::<Item>::default();
        assert_eq!(ids(&visible_rows(&rows, &query)), vec![1, 2, 3, 4]);
    }

    #[test]
    fn text_filter_is_case_sensitive() {
        let rows = items();
        let mut query = TableQuery::<Item>::default();
        query.add_filter(ItemField::Team);
        query.set_filter_value(ItemField::Team, "Ventas");
        assert_eq!(ids(&visible_rows(&rows, &query)), vec![3]);
    }

    #[test]
    fn blank_and_match_all_filters_are_noops() {
        let rows = items();
        let mut query = TableQuery::<Item>::default();
        query.add_filter(ItemField::Team);
        assert_eq!(visible_rows(&rows, &query).len(), 4);

        query.set_filter_value(ItemField::Team, MATCH_ALL);
        assert_eq!(visible_rows(&rows, &query).len(), 4);
    }

    #[test]
    fn flag_filter_uses_localized_choices() {
        let rows = items();
        let mut query = TableQuery::<Item>::default();
        query.add_filter(ItemField::Done);

        query.set_filter_value(ItemField::Done, "No");
        assert_eq!(ids(&visible_rows(&rows, &query)), vec![1, 4]);

        query.set_filter_value(ItemField::Done, "Sí");
        assert_eq!(ids(&visible_rows(&rows, &query)), vec![2, 3]);
    }

    #[test]
    fn missing_value_never_matches_a_set_filter() {
        let rows = items();
        let mut query = TableQuery::<Item>::default();
        query.add_filter(ItemField::Team);
        query.set_filter_value(ItemField::Team, "Soporte");
        assert_eq!(ids(&visible_rows(&rows, &query)), vec![4]);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let rows = items();
        let mut query = TableQuery::<Item>::default();
        query.search = "  BR ".into();
        assert_eq!(ids(&visible_rows(&rows, &query)), vec![1]);
    }

    #[test]
    fn no_match_leaves_source_untouched() {
        let rows = items();
        let mut query = TableQuery::<Item>::default();
        query.search = "zzz".into();
        assert!(visible_rows(&rows, &query).is_empty());
        assert_eq!(rows, items());
    }

    #[test]
    fn filter_and_search_set_is_independent_of_sort() {
        let rows = items();
        let mut query = TableQuery::<Item>::default();
        query.add_filter(ItemField::Done);
        query.set_filter_value(ItemField::Done, "Sí");
        query.search = "a".into();

        let mut by_id = ids(&visible_rows(&rows, &query));
        query.sort = ItemSort::NameDesc;
        let mut by_name = ids(&visible_rows(&rows, &query));

        by_id.sort();
        by_name.sort();
        assert_eq!(by_id, by_name);
    }

    #[test]
    fn repeated_sort_is_idempotent() {
        let rows = items();
        let query = TableQuery::<Item> {
            sort: ItemSort::NameDesc,
            ..TableQuery::default()
        };
        let once: Vec<Item> = visible_rows(&rows, &query).into_iter().cloned().collect();
        let twice: Vec<Item> = visible_rows(&once, &query).into_iter().cloned().collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn filters_are_unique_per_field_and_removable() {
        let mut query = TableQuery::<Item>::default();
        query.add_filter(ItemField::Team);
        query.set_filter_value(ItemField::Team, "Ventas");
        query.add_filter(ItemField::Team);
        assert_eq!(query.filters.len(), 1);
        assert_eq!(query.filters[0].value, "Ventas");

        query.remove_filter(ItemField::Team);
        assert!(query.filters.is_empty());
    }

    #[test]
    fn options_come_from_the_fetched_rows() {
        let rows = items();
        assert_eq!(
            filter_options(&rows, ItemField::Team),
            vec!["Ventas".to_string(), "ventas".into(), "Soporte".into()]
        );
        assert_eq!(filter_options(&rows, ItemField::Done), vec!["Sí".to_string(), "No".into()]);
    }

    #[test]
    fn sort_option_round_trips_through_label() {
        assert_eq!(ItemSort::from_label("Nombre desc"), Some(ItemSort::NameDesc));
        assert_eq!(ItemSort::from_label("otro"), None);
    }

    #[test]
    fn comparators_are_total() {
        assert_eq!(compare_numeric_text("9", "10"), Ordering::Less);
        assert_eq!(compare_numeric_text("abc", "10"), Ordering::Greater);
        assert_eq!(compare_text("ana", "Bruno"), Ordering::Less);
        assert_eq!(compare_text("Ana", "ana"), Ordering::Less);
        assert_eq!(
            compare_timestamps("2024-01-02T00:00:00Z", "2024-01-01T00:00:00Z"),
            Ordering::Greater
        );
        assert_eq!(compare_timestamps("", "2024-01-01T00:00:00Z"), Ordering::Less);
        assert_eq!(
            compare_timestamps_desc("2024-01-02T00:00:00Z", "2024-01-01T00:00:00Z"),
            Ordering::Less
        );
        assert_eq!(compare_timestamps_desc("", "2024-01-01T00:00:00Z"), Ordering::Less);
        assert_eq!(compare_timestamps_desc("2024-01-01T00:00:00Z", "nope"), Ordering::Greater);
        assert_eq!(compare_timestamps_desc("", "nope"), Ordering::Equal);
    }
}
