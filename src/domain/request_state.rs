/// Lifecycle of the latest request issued from a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Pending,
    Loaded,
    Failed,
}
