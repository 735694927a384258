use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TabParseError {
    #[error(
        "unknown tab destination {0:?} (expected one of: home, pump, diapers, calendar, profile)"
    )]
    UnknownTab(String),
}
