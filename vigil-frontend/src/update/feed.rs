use crate::{
    action::Action,
    feed::WINDOW_LIMIT,
    model::{record::EditRecord, Model, Toast},
    task::Task,
};

/// Merges an accepted record into the window: the seen flag of an existing
/// record with the same id is carried forward, the record is prepended and
/// the window truncated from the tail. A domain observed for the first time
/// raises one toast and persists the grown set.
pub fn record_accepted(model: &mut Model, record: EditRecord) -> Vec<Action> {
    let seen = model
        .stream
        .records
        .iter()
        .find(|existing| existing.id == record.id)
        .map(|existing| existing.seen)
        .unwrap_or(false);

    let domain = record.domain.clone();
    model.stream.records.insert(0, EditRecord { seen, ..record });
    model.stream.records.truncate(WINDOW_LIMIT);

    let mut actions = Vec::new();
    if model.domains.insert(domain.clone()) {
        let toast = Toast {
            id: model.next_toast_id,
            message: format!("a new edit in {}", domain),
        };
        model.next_toast_id += 1;

        tracing::debug!("new domain observed: {}", domain);

        model.toast = Some(toast.clone());
        actions.push(Action::Task(Task::DismissToast(toast.id)));
        actions.push(Action::Task(Task::SaveDomains(model.domains.clone())));
    }

    actions
}

/// Diffs the wanted stream url against the active subscription and tears
/// down/reopens the feed task on change. Idempotent across loop passes.
pub fn ensure_subscription(model: &mut Model) -> Vec<Action> {
    if model.stream.subscribed.as_deref() == Some(model.stream.url.as_str()) {
        return Vec::new();
    }

    let mut actions = Vec::new();
    if let Some(previous) = model.stream.subscribed.take() {
        actions.push(Action::AbortTask(Task::SubscribeFeed(previous)));
    }

    model.stream.subscribed = Some(model.stream.url.clone());
    actions.push(Action::Task(Task::SubscribeFeed(model.stream.url.clone())));

    tracing::trace!("subscription changes: {:?}", actions);

    actions
}
