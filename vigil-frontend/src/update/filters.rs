use crate::{
    action::Action,
    model::{FilterField, Model},
    task::Task,
};

/// Flips the selected record's seen flag to true. Idempotent, no-op when
/// nothing is selected.
pub fn mark_selected_seen(model: &mut Model) -> Vec<Action> {
    let id = model
        .filters
        .apply(&model.stream.records)
        .get(model.selected)
        .map(|record| record.id.clone());

    if let Some(id) = id {
        mark_seen(model, &id);
    }

    Vec::new()
}

pub fn mark_seen(model: &mut Model, id: &str) {
    for record in model
        .stream
        .records
        .iter_mut()
        .filter(|record| record.id == id)
    {
        record.seen = true;
    }
}

pub fn toggle_edits_only(model: &mut Model) -> Vec<Action> {
    model.filters.edits_only = !model.filters.edits_only;
    persist_filters(model)
}

pub fn toggle_bot(model: &mut Model) -> Vec<Action> {
    model.filters.bot = toggle_tri_state(model.filters.bot);
    persist_filters(model)
}

pub fn toggle_minor(model: &mut Model) -> Vec<Action> {
    model.filters.minor = toggle_tri_state(model.filters.minor);
    persist_filters(model)
}

// the checkbox only ever yields "don't care" or "required true"
fn toggle_tri_state(current: Option<bool>) -> Option<bool> {
    match current {
        None => Some(true),
        Some(_) => None,
    }
}

pub fn clear_filters(model: &mut Model) -> Vec<Action> {
    model.filters = Default::default();

    vec![Action::Task(Task::RemoveFilters)]
}

pub fn push_filter_char(model: &mut Model, field: FilterField, character: char) -> Vec<Action> {
    match field {
        FilterField::Domain => model.filters.domain.push(character),
        FilterField::Namespace => {
            let digit = match character.to_digit(10) {
                Some(digit) => i64::from(digit),
                None => return Vec::new(),
            };

            let current = model.filters.namespace.unwrap_or(0);
            model.filters.namespace = Some(current.saturating_mul(10).saturating_add(digit));
        }
        FilterField::Search => model.filters.search_text.push(character),
        FilterField::Title => model.filters.title.push(character),
        FilterField::User => model.filters.user.push(character),
    };

    persist_filters(model)
}

pub fn pop_filter_char(model: &mut Model, field: FilterField) -> Vec<Action> {
    match field {
        FilterField::Domain => {
            model.filters.domain.pop();
        }
        FilterField::Namespace => {
            model.filters.namespace = match model.filters.namespace {
                Some(namespace) if namespace >= 10 => Some(namespace / 10),
                _ => None,
            };
        }
        FilterField::Search => {
            model.filters.search_text.pop();
        }
        FilterField::Title => {
            model.filters.title.pop();
        }
        FilterField::User => {
            model.filters.user.pop();
        }
    };

    persist_filters(model)
}

/// Cycles the domain filter through the known-domains set, the persisted
/// equivalent of the original domain dropdown.
pub fn cycle_domain(model: &mut Model, forward: bool) -> Vec<Action> {
    if model.domains.is_empty() {
        return Vec::new();
    }

    let domains: Vec<_> = model.domains.iter().cloned().collect();
    let current = domains
        .iter()
        .position(|domain| domain == &model.filters.domain);

    let next = match (current, forward) {
        (Some(index), true) => (index + 1) % domains.len(),
        (Some(index), false) => (index + domains.len() - 1) % domains.len(),
        (None, true) => 0,
        (None, false) => domains.len() - 1,
    };

    model.filters.domain = domains[next].clone();
    persist_filters(model)
}

fn persist_filters(model: &Model) -> Vec<Action> {
    vec![Action::Task(Task::SaveFilters(model.filters.clone()))]
}

#[cfg(test)]
mod test {
    use crate::{
        action::Action,
        model::{filter::FilterState, record::EditRecord, FilterField, Model},
        task::Task,
    };

    use super::{
        clear_filters, cycle_domain, mark_seen, mark_selected_seen, pop_filter_char,
        push_filter_char, toggle_bot,
    };

    fn model_with_records(ids: &[&str]) -> Model {
        let mut model = Model::default();
        model.stream.records = ids
            .iter()
            .map(|id| EditRecord {
                id: id.to_string(),
                domain: "en.wikipedia.org".to_string(),
                kind: "edit".to_string(),
                ..Default::default()
            })
            .collect();

        model
    }

    #[test]
    fn mark_seen_is_idempotent() {
        let mut model = model_with_records(&["1", "2"]);

        mark_seen(&mut model, "2");
        let after_once = model.stream.records.clone();

        mark_seen(&mut model, "2");
        assert_eq!(after_once, model.stream.records);
        assert!(model.stream.records[1].seen);
        assert!(!model.stream.records[0].seen);

        // unknown id is a no-op
        mark_seen(&mut model, "3");
        assert_eq!(after_once, model.stream.records);
    }

    #[test]
    fn mark_selected_seen_targets_the_filtered_row() {
        let mut model = model_with_records(&["1", "2", "3"]);
        model.stream.records[1].kind = "log".to_string();
        model.selected = 1;

        // filtered view shows "1" and "3"; index 1 is record "3"
        mark_selected_seen(&mut model);

        assert!(!model.stream.records[0].seen);
        assert!(!model.stream.records[1].seen);
        assert!(model.stream.records[2].seen);
    }

    #[test]
    fn toggles_persist_and_never_select_false() {
        let mut model = Model::default();

        let actions = toggle_bot(&mut model);
        assert_eq!(Some(true), model.filters.bot);
        assert_eq!(
            vec![Action::Task(Task::SaveFilters(model.filters.clone()))],
            actions
        );

        toggle_bot(&mut model);
        assert_eq!(None, model.filters.bot);
    }

    #[test]
    fn clear_resets_and_removes_the_entry() {
        let mut model = Model::default();
        push_filter_char(&mut model, FilterField::Search, 'x');
        toggle_bot(&mut model);

        let actions = clear_filters(&mut model);

        assert_eq!(FilterState::default(), model.filters);
        assert_eq!(vec![Action::Task(Task::RemoveFilters)], actions);
    }

    #[test]
    fn namespace_edits_digit_by_digit() {
        let mut model = Model::default();

        push_filter_char(&mut model, FilterField::Namespace, '1');
        push_filter_char(&mut model, FilterField::Namespace, '0');
        assert_eq!(Some(10), model.filters.namespace);

        // non-digits are ignored without persisting
        assert!(push_filter_char(&mut model, FilterField::Namespace, 'a').is_empty());
        assert_eq!(Some(10), model.filters.namespace);

        pop_filter_char(&mut model, FilterField::Namespace);
        assert_eq!(Some(1), model.filters.namespace);

        pop_filter_char(&mut model, FilterField::Namespace);
        assert_eq!(None, model.filters.namespace);
    }

    #[test]
    fn cycle_domain_walks_the_known_set() {
        let mut model = Model::default();
        model.domains.insert("de.wikipedia.org".to_string());
        model.domains.insert("en.wikipedia.org".to_string());

        cycle_domain(&mut model, true);
        assert_eq!("de.wikipedia.org", model.filters.domain);

        cycle_domain(&mut model, true);
        assert_eq!("en.wikipedia.org", model.filters.domain);

        cycle_domain(&mut model, true);
        assert_eq!("de.wikipedia.org", model.filters.domain);

        cycle_domain(&mut model, false);
        assert_eq!("en.wikipedia.org", model.filters.domain);
    }
}
