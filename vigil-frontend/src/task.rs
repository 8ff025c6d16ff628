use std::time::Duration;

use tokio::{
    sync::mpsc::Sender,
    task::{AbortHandle, JoinSet},
    time,
};

use crate::{
    error::AppError,
    event::{Envelope, Message, MessageSource},
    feed,
    init::{
        domains::save_domains_to_storage,
        filters::{remove_filters_from_storage, save_filters_to_storage},
    },
    model::{domains::KnownDomains, filter::FilterState},
    storage::SharedStorage,
};

const TOAST_TIMEOUT: Duration = Duration::from_secs(4);

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Task {
    DismissToast(u64),
    EmitMessages(Vec<Message>),
    RemoveFilters,
    SaveDomains(KnownDomains),
    SaveFilters(FilterState),
    SubscribeFeed(String),
}

pub struct TaskManager {
    abort_handles: Vec<(Task, AbortHandle)>,
    sender: Sender<Envelope>,
    storage: SharedStorage,
    tasks: JoinSet<Result<(), AppError>>,
}

impl TaskManager {
    pub fn new(sender: Sender<Envelope>, storage: SharedStorage) -> Self {
        Self {
            abort_handles: Vec::new(),
            sender,
            storage,
            tasks: JoinSet::new(),
        }
    }

    pub fn abort(&mut self, task: &Task) {
        if let Some(index) = self.abort_handles.iter().position(|(t, _)| t == task) {
            let (_, abort_handle) = self.abort_handles.remove(index);
            abort_handle.abort();
        }
    }

    pub async fn finishing(&mut self) -> Result<(), AppError> {
        let mut errors = Vec::new();
        for (task, abort_handle) in self.abort_handles.drain(..) {
            if should_abort_on_finish(task) {
                abort_handle.abort();
            }
        }

        while let Some(task) = self.tasks.join_next().await {
            match task {
                Ok(Ok(())) => (),
                Ok(Err(error)) => {
                    tracing::error!("task result returned error: {:?}", error);
                    errors.push(error)
                }
                Err(error) => {
                    tracing::error!("task failed: {:?}", error);
                }
            };
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::Aggregate(errors))
        }
    }

    pub fn run(&mut self, task: Task) {
        let abort_handle = match task.clone() {
            Task::DismissToast(id) => {
                let sender = self.sender.clone();
                self.tasks.spawn(async move {
                    time::sleep(TOAST_TIMEOUT).await;
                    send_messages(&sender, vec![Message::DismissToast(id)]).await;
                    Ok(())
                })
            }
            Task::EmitMessages(messages) => {
                let sender = self.sender.clone();
                self.tasks.spawn(async move {
                    send_messages(&sender, messages).await;
                    Ok(())
                })
            }
            Task::RemoveFilters => {
                let sender = self.sender.clone();
                let storage = self.storage.clone();
                self.tasks.spawn(async move {
                    tracing::trace!("removing persisted filter state");

                    let mut storage = storage.lock().await;
                    if let Err(error) = remove_filters_from_storage(&mut *storage) {
                        emit_error(&sender, error).await;
                    }
                    Ok(())
                })
            }
            Task::SaveDomains(domains) => {
                let sender = self.sender.clone();
                let storage = self.storage.clone();
                self.tasks.spawn(async move {
                    tracing::trace!("saving known domains");

                    let mut storage = storage.lock().await;
                    if let Err(error) = save_domains_to_storage(&mut *storage, &domains) {
                        emit_error(&sender, error).await;
                    }
                    Ok(())
                })
            }
            Task::SaveFilters(filters) => {
                let sender = self.sender.clone();
                let storage = self.storage.clone();
                self.tasks.spawn(async move {
                    tracing::trace!("saving filter state");

                    let mut storage = storage.lock().await;
                    if let Err(error) = save_filters_to_storage(&mut *storage, &filters) {
                        emit_error(&sender, error).await;
                    }
                    Ok(())
                })
            }
            Task::SubscribeFeed(url) => {
                let sender = self.sender.clone();
                self.tasks.spawn(async move {
                    if let Err(error) = feed::stream(&url, &sender).await {
                        emit_error(&sender, error).await;
                    }
                    Ok(())
                })
            }
        };

        self.abort_handles.push((task, abort_handle));
    }
}

fn should_abort_on_finish(task: Task) -> bool {
    matches!(task, Task::DismissToast(_) | Task::SubscribeFeed(_))
}

async fn send_messages(sender: &Sender<Envelope>, messages: Vec<Message>) {
    let envelope = Envelope {
        messages,
        source: MessageSource::Task,
    };

    if let Err(error) = sender.send(envelope).await {
        tracing::error!("sending messages from task failed: {:?}", error);
    }
}

async fn emit_error(sender: &Sender<Envelope>, error: AppError) {
    tracing::error!("task failed: {:?}", error);
    send_messages(sender, vec![Message::Error(error.to_string())]).await;
}
