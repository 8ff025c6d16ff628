/// One observed change event. `seen` is local-only state, set by explicit
/// user acknowledgement and carried forward when the same id is merged
/// into the window again.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct EditRecord {
    pub id: String,
    pub domain: String,
    pub title: String,
    pub kind: String,
    pub comment: String,
    pub user: String,
    pub bot: bool,
    pub minor: bool,
    pub namespace: Option<i64>,
    pub seen: bool,
}
