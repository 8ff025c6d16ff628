use crate::{error::AppError, model::Model, terminal::TerminalWrapper};

mod filterline;
mod statusline;
mod table;

pub fn render_model(terminal: &mut TerminalWrapper, model: &Model) -> Result<(), AppError> {
    terminal.draw(|frame| {
        let layout = model.layout.clone();

        filterline::view(model, frame, layout.filterline);
        table::view(model, frame, layout.table);
        statusline::view(model, frame, layout.statusline);
    })
}
