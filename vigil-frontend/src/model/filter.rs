use serde::{Deserialize, Serialize};

use crate::model::record::EditRecord;

/// User-chosen predicate configuration, persisted verbatim across sessions.
/// `bot` and `minor` are tri-state: None passes everything, Some(true)
/// requires the flag. False is never a selectable state.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    pub domain: String,
    pub title: String,
    pub user: String,
    pub bot: Option<bool>,
    pub minor: Option<bool>,
    pub namespace: Option<i64>,
    pub search_text: String,
    pub edits_only: bool,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            domain: String::new(),
            title: String::new(),
            user: String::new(),
            bot: None,
            minor: None,
            namespace: None,
            search_text: String::new(),
            edits_only: true,
        }
    }
}

impl FilterState {
    pub fn matches(&self, record: &EditRecord) -> bool {
        if self.edits_only && record.kind != "edit" {
            return false;
        }

        if !contains_or_empty(&record.domain, &self.domain) {
            return false;
        }
        if !contains_or_empty(&record.title, &self.title) {
            return false;
        }
        if !contains_or_empty(&record.user, &self.user) {
            return false;
        }

        if let Some(bot) = self.bot {
            if record.bot != bot {
                return false;
            }
        }
        if let Some(minor) = self.minor {
            if record.minor != minor {
                return false;
            }
        }
        if let Some(namespace) = self.namespace {
            if record.namespace != Some(namespace) {
                return false;
            }
        }

        if !self.search_text.is_empty() {
            let needle = self.search_text.to_lowercase();
            let hit = [&record.domain, &record.title, &record.kind, &record.comment]
                .iter()
                .any(|field| field.to_lowercase().contains(&needle));

            if !hit {
                return false;
            }
        }

        true
    }

    pub fn apply<'a>(&self, records: &'a [EditRecord]) -> Vec<&'a EditRecord> {
        records.iter().filter(|record| self.matches(record)).collect()
    }
}

fn contains_or_empty(content: &str, filter: &str) -> bool {
    filter.is_empty() || content.to_lowercase().contains(&filter.to_lowercase())
}

#[cfg(test)]
mod test {
    use crate::model::record::EditRecord;

    use super::FilterState;

    fn edit(domain: &str, title: &str, user: &str) -> EditRecord {
        EditRecord {
            id: "id".to_string(),
            domain: domain.to_string(),
            title: title.to_string(),
            kind: "edit".to_string(),
            comment: "fixed a typo".to_string(),
            user: user.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn edits_only_excludes_other_kinds() {
        let filters = FilterState::default();

        let mut record = edit("en.wikipedia.org", "Rust", "alice");
        assert!(filters.matches(&record));

        record.kind = "log".to_string();
        assert!(!filters.matches(&record));

        let filters = FilterState {
            edits_only: false,
            ..Default::default()
        };
        assert!(filters.matches(&record));
    }

    #[test]
    fn substring_filters_are_case_insensitive() {
        let filters = FilterState {
            domain: "WIKIPEDIA".to_string(),
            title: "rust".to_string(),
            user: String::new(),
            ..Default::default()
        };

        assert!(filters.matches(&edit("en.wikipedia.org", "Rust (language)", "alice")));
        assert!(!filters.matches(&edit("commons.wikimedia.org", "Rust (language)", "alice")));
    }

    #[test]
    fn tri_state_bot_filter() {
        let mut record = edit("en.wikipedia.org", "Rust", "alice");

        let passive = FilterState::default();
        assert!(passive.matches(&record));

        let bots_only = FilterState {
            bot: Some(true),
            ..Default::default()
        };
        assert!(!bots_only.matches(&record));

        record.bot = true;
        assert!(bots_only.matches(&record));
        assert!(passive.matches(&record));
    }

    #[test]
    fn namespace_matches_exactly() {
        let filters = FilterState {
            namespace: Some(0),
            ..Default::default()
        };

        let mut record = edit("en.wikipedia.org", "Rust", "alice");
        record.namespace = Some(1);
        assert!(!filters.matches(&record));

        record.namespace = Some(0);
        assert!(filters.matches(&record));

        record.namespace = None;
        assert!(!filters.matches(&record));
    }

    #[test]
    fn search_text_spans_domain_title_kind_and_comment() {
        let filters = FilterState {
            search_text: "typo".to_string(),
            ..Default::default()
        };
        assert!(filters.matches(&edit("en.wikipedia.org", "Rust", "alice")));

        // the free-text search does not cover the user field
        let filters = FilterState {
            search_text: "alice".to_string(),
            ..Default::default()
        };
        assert!(!filters.matches(&edit("en.wikipedia.org", "Rust", "alice")));
    }

    #[test]
    fn predicates_are_conjunctive() {
        let filters = FilterState {
            domain: "wikipedia".to_string(),
            title: "rust".to_string(),
            search_text: "typo".to_string(),
            ..Default::default()
        };

        assert!(filters.matches(&edit("en.wikipedia.org", "Rust", "alice")));
        // one failing predicate excludes the record
        assert!(!filters.matches(&edit("en.wikipedia.org", "Go", "alice")));
    }

    #[test]
    fn apply_keeps_record_order() {
        let records = vec![
            edit("en.wikipedia.org", "Rust", "alice"),
            edit("fr.wikipedia.org", "Rust", "bob"),
        ];

        let filters = FilterState::default();
        let filtered = filters.apply(&records);

        assert_eq!(2, filtered.len());
        assert_eq!("en.wikipedia.org", filtered[0].domain);
    }

    #[test]
    fn persisted_shape_uses_camel_case() {
        let encoded = serde_json::to_string(&FilterState::default()).unwrap();

        assert!(encoded.contains("\"searchText\""));
        assert!(encoded.contains("\"editsOnly\":true"));

        let decoded: FilterState = serde_json::from_str(&encoded).unwrap();
        assert_eq!(FilterState::default(), decoded);
    }
}
