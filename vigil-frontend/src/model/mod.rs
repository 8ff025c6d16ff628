use ratatui::layout::Rect;

use crate::{feed, layout::AppLayout, settings::Settings};

use self::{domains::KnownDomains, filter::FilterState, record::EditRecord};

pub mod domains;
pub mod filter;
pub mod record;

#[derive(Debug)]
pub struct Model {
    pub domains: KnownDomains,
    pub filters: FilterState,
    pub layout: AppLayout,
    pub mode: Mode,
    pub next_toast_id: u64,
    pub selected: usize,
    pub settings: Settings,
    pub stream: FeedState,
    pub toast: Option<Toast>,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            domains: KnownDomains::default(),
            filters: FilterState::default(),
            layout: AppLayout::new(Rect::default()),
            mode: Mode::default(),
            next_toast_id: 0,
            selected: 0,
            settings: Settings::default(),
            stream: FeedState::default(),
            toast: None,
        }
    }
}

#[derive(Debug)]
pub struct FeedState {
    pub records: Vec<EditRecord>,
    pub subscribed: Option<String>,
    pub url: String,
}

impl Default for FeedState {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            subscribed: None,
            url: feed::RECENT_CHANGE_URL.to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Mode {
    #[default]
    Normal,
    Input(FilterField),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FilterField {
    Domain,
    Namespace,
    Search,
    Title,
    User,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
}
