use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::{
    action::Action,
    model::{FilterField, Mode, Model},
};

use super::filters;

pub fn handle_key(model: &mut Model, key: &KeyEvent) -> Vec<Action> {
    if key.kind != KeyEventKind::Press {
        return Vec::new();
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    match model.mode {
        Mode::Normal => handle_normal_mode(model, key),
        Mode::Input(field) => handle_input_mode(model, field, key),
    }
}

fn handle_normal_mode(model: &mut Model, key: &KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Char('q') => vec![Action::Quit],
        KeyCode::Char('j') | KeyCode::Down => move_selection(model, 1),
        KeyCode::Char('k') | KeyCode::Up => move_selection(model, -1),
        KeyCode::Enter | KeyCode::Char(' ') => filters::mark_selected_seen(model),
        KeyCode::Char('e') => filters::toggle_edits_only(model),
        KeyCode::Char('b') => filters::toggle_bot(model),
        KeyCode::Char('m') => filters::toggle_minor(model),
        KeyCode::Char('c') => filters::clear_filters(model),
        KeyCode::Char(']') => filters::cycle_domain(model, true),
        KeyCode::Char('[') => filters::cycle_domain(model, false),
        KeyCode::Char('/') => enter_input_mode(model, FilterField::Search),
        KeyCode::Char('d') => enter_input_mode(model, FilterField::Domain),
        KeyCode::Char('t') => enter_input_mode(model, FilterField::Title),
        KeyCode::Char('u') => enter_input_mode(model, FilterField::User),
        KeyCode::Char('n') => enter_input_mode(model, FilterField::Namespace),
        _ => Vec::new(),
    }
}

fn handle_input_mode(model: &mut Model, field: FilterField, key: &KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => {
            model.mode = Mode::Normal;
            Vec::new()
        }
        KeyCode::Backspace => filters::pop_filter_char(model, field),
        KeyCode::Char(character) => filters::push_filter_char(model, field, character),
        _ => Vec::new(),
    }
}

fn enter_input_mode(model: &mut Model, field: FilterField) -> Vec<Action> {
    model.mode = Mode::Input(field);
    Vec::new()
}

fn move_selection(model: &mut Model, offset: isize) -> Vec<Action> {
    let shown = model.filters.apply(&model.stream.records).len();
    if shown == 0 {
        return Vec::new();
    }

    let current = model.selected as isize;
    model.selected = current
        .saturating_add(offset)
        .clamp(0, shown as isize - 1) as usize;

    Vec::new()
}

#[cfg(test)]
mod test {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use crate::{
        action::Action,
        model::{record::EditRecord, FilterField, Mode, Model},
    };

    use super::handle_key;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn quit_on_q_and_ctrl_c() {
        let mut model = Model::default();

        assert_eq!(
            vec![Action::Quit],
            handle_key(&mut model, &press(KeyCode::Char('q')))
        );

        model.mode = Mode::Input(FilterField::Search);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(vec![Action::Quit], handle_key(&mut model, &ctrl_c));
    }

    #[test]
    fn input_mode_routes_typing_into_the_focused_filter() {
        let mut model = Model::default();

        handle_key(&mut model, &press(KeyCode::Char('/')));
        assert_eq!(Mode::Input(FilterField::Search), model.mode);

        handle_key(&mut model, &press(KeyCode::Char('r')));
        handle_key(&mut model, &press(KeyCode::Char('s')));
        handle_key(&mut model, &press(KeyCode::Backspace));
        assert_eq!("r", model.filters.search_text);

        handle_key(&mut model, &press(KeyCode::Esc));
        assert_eq!(Mode::Normal, model.mode);

        // back in normal mode, 'c' clears instead of typing
        handle_key(&mut model, &press(KeyCode::Char('c')));
        assert_eq!("", model.filters.search_text);
    }

    #[test]
    fn selection_moves_within_filtered_bounds() {
        let mut model = Model::default();
        model.stream.records = (0..3)
            .map(|index| EditRecord {
                id: index.to_string(),
                kind: "edit".to_string(),
                ..Default::default()
            })
            .collect();

        handle_key(&mut model, &press(KeyCode::Char('k')));
        assert_eq!(0, model.selected);

        handle_key(&mut model, &press(KeyCode::Char('j')));
        handle_key(&mut model, &press(KeyCode::Char('j')));
        handle_key(&mut model, &press(KeyCode::Char('j')));
        assert_eq!(2, model.selected);
    }
}
