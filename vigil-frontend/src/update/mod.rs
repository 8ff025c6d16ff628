use crate::{
    action::Action,
    event::{Envelope, Message},
    model::Model,
};

pub mod feed;
pub mod filters;
mod keys;

#[tracing::instrument(skip(model))]
pub fn update_model(model: &mut Model, envelope: &Envelope) -> Vec<Action> {
    let mut actions: Vec<_> = envelope
        .messages
        .iter()
        .flat_map(|message| update_with_message(model, message))
        .collect();

    actions.extend(feed::ensure_subscription(model));
    clamp_selection(model);

    actions
}

fn update_with_message(model: &mut Model, message: &Message) -> Vec<Action> {
    match message {
        Message::DismissToast(id) => {
            if model.toast.as_ref().is_some_and(|toast| toast.id == *id) {
                model.toast = None;
            }
            Vec::new()
        }
        Message::Error(error) => {
            // toasts are reserved for new-domain notices, errors go to the log
            tracing::error!("task reported error: {}", error);
            Vec::new()
        }
        Message::FeedRecord(record) => feed::record_accepted(model, record.as_ref().clone()),
        Message::Key(key) => keys::handle_key(model, key),
        Message::Rerender => Vec::new(),
        Message::Resize(x, y) => vec![Action::Resize(*x, *y)],
    }
}

fn clamp_selection(model: &mut Model) {
    let shown = model.filters.apply(&model.stream.records).len();
    if shown == 0 {
        model.selected = 0;
    } else if model.selected >= shown {
        model.selected = shown - 1;
    }
}
