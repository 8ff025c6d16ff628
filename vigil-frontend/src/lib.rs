use std::{path::PathBuf, sync::Arc};

use tokio::sync::Mutex;

use action::ActionResult;
use error::AppError;
use event::{Emitter, Message};
use init::{domains::load_domains_from_storage, filters::load_filters_from_storage};
use layout::AppLayout;
use model::Model;
use settings::Settings;
use storage::{FileStorage, SharedStorage};
use task::Task;
use terminal::TerminalWrapper;
use update::update_model;
use view::render_model;

mod action;
pub mod error;
mod event;
mod feed;
mod init;
mod layout;
mod model;
pub mod settings;
pub mod storage;
mod task;
mod terminal;
mod update;
mod view;

pub async fn run(settings: Settings) -> Result<(), AppError> {
    let mut terminal = TerminalWrapper::start()?;

    let mut model = Model {
        settings,
        ..Default::default()
    };

    let state_path = get_state_path(&model.settings)?;
    let storage: SharedStorage = Arc::new(Mutex::new(FileStorage::new(state_path)));
    let mut emitter = Emitter::start(storage.clone());

    {
        let guard = storage.lock().await;
        match load_filters_from_storage(&*guard) {
            Ok(filters) => model.filters = filters,
            Err(error) => tracing::error!("loading filter state failed: {:?}", error),
        }
        match load_domains_from_storage(&*guard) {
            Ok(domains) => model.domains = domains,
            Err(error) => tracing::error!("loading known domains failed: {:?}", error),
        }
    }

    emitter.run(Task::EmitMessages(vec![Message::Rerender]));

    tracing::debug!("starting with model state: {:?}", model);

    while let Some(envelope) = emitter.receiver.recv().await {
        tracing::debug!(
            "received messages from {:?}: {:?}",
            envelope.source,
            envelope.messages
        );

        let size = terminal.size()?;
        model.layout = AppLayout::new(size);

        let actions = update_model(&mut model, &envelope);
        let result = action::execute(actions, &mut emitter, &mut terminal).await?;

        render_model(&mut terminal, &model)?;

        if result == ActionResult::Quit {
            break;
        }
    }

    let mut errors = Vec::new();
    if let Err(error) = emitter.shutdown().await {
        errors.push(error);
    }

    terminal.shutdown()?;

    if errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::Aggregate(errors))
    }
}

fn get_state_path(settings: &Settings) -> Result<PathBuf, AppError> {
    if let Some(state_dir) = &settings.state_dir {
        return Ok(state_dir.clone());
    }

    match dirs::cache_dir() {
        Some(cache_dir) => Ok(cache_dir.join("vigil").join("state")),
        None => Err(AppError::StateDirUnresolved),
    }
}
