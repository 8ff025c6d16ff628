use crate::{error::AppError, event::Emitter, task::Task, terminal::TerminalWrapper};

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    AbortTask(Task),
    Quit,
    Resize(u16, u16),
    Task(Task),
}

#[derive(Debug, Eq, PartialEq)]
pub enum ActionResult {
    Continue,
    Quit,
}

pub async fn execute(
    actions: Vec<Action>,
    emitter: &mut Emitter,
    terminal: &mut TerminalWrapper,
) -> Result<ActionResult, AppError> {
    let mut result = ActionResult::Continue;
    for action in actions {
        tracing::debug!("executing action: {:?}", action);

        match action {
            Action::AbortTask(task) => emitter.abort(&task),
            Action::Quit => result = ActionResult::Quit,
            Action::Resize(x, y) => terminal.resize(x, y)?,
            Action::Task(task) => emitter.run(task),
        }
    }

    Ok(result)
}
