use crossterm::event::{Event, KeyEvent};
use futures::StreamExt;
use tokio::sync::mpsc::{self, Receiver, Sender};

use crate::{
    error::AppError,
    model::record::EditRecord,
    storage::SharedStorage,
    task::{Task, TaskManager},
};

#[derive(Debug)]
pub struct Envelope {
    pub messages: Vec<Message>,
    pub source: MessageSource,
}

#[derive(Debug, Eq, PartialEq)]
pub enum MessageSource {
    Feed,
    Task,
    User,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Message {
    DismissToast(u64),
    Error(String),
    FeedRecord(Box<EditRecord>),
    Key(KeyEvent),
    Rerender,
    Resize(u16, u16),
}

pub struct Emitter {
    tasks: TaskManager,
    pub receiver: Receiver<Envelope>,
}

impl Emitter {
    pub fn start(storage: SharedStorage) -> Self {
        let (sender, receiver) = mpsc::channel(1);
        let internal_sender = sender.clone();

        let (task_sender, mut task_receiver) = mpsc::channel(1);
        let tasks = TaskManager::new(task_sender, storage);
        tokio::spawn(async move {
            while let Some(envelope) = task_receiver.recv().await {
                let _ = internal_sender.send(envelope).await;
            }
        });

        start_crossterm_listener(sender);

        Self { tasks, receiver }
    }

    pub async fn shutdown(&mut self) -> Result<(), AppError> {
        self.tasks.finishing().await
    }

    pub fn run(&mut self, task: Task) {
        self.tasks.run(task);
    }

    pub fn abort(&mut self, task: &Task) {
        self.tasks.abort(task);
    }
}

fn start_crossterm_listener(sender: Sender<Envelope>) {
    tokio::spawn(async move {
        let mut reader = crossterm::event::EventStream::new();

        while let Some(Ok(event)) = reader.next().await {
            if let Some(envelope) = handle_crossterm_event(event) {
                let _ = sender.send(envelope).await;
            }
        }
    });
}

fn handle_crossterm_event(event: Event) -> Option<Envelope> {
    match event {
        Event::Key(key) => Some(Envelope {
            messages: vec![Message::Key(key)],
            source: MessageSource::User,
        }),
        Event::Resize(x, y) => Some(Envelope {
            messages: vec![Message::Resize(x, y)],
            source: MessageSource::User,
        }),
        Event::FocusLost | Event::FocusGained | Event::Paste(_) | Event::Mouse(_) => None,
    }
}
