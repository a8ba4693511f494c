use contracts::shared::table::{ErrorKind, TableError};
use leptos::prelude::*;
use thaw::*;

/// Message shown above a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Warning(String),
    Error(String),
}

impl Notice {
    /// Validation problems are warnings; transport and backend failures are errors.
    pub fn from_error(error: &TableError) -> Self {
        match error.kind() {
            ErrorKind::Validation => Self::Warning(error.to_string()),
            ErrorKind::Network => Self::Error(error.to_string()),
        }
    }

    fn intent(&self) -> MessageBarIntent {
        match self {
            Self::Success(_) => MessageBarIntent::Success,
            Self::Warning(_) => MessageBarIntent::Warning,
            Self::Error(_) => MessageBarIntent::Error,
        }
    }

    fn text(&self) -> &str {
        match self {
            Self::Success(t) | Self::Warning(t) | Self::Error(t) => t,
        }
    }
}

/// Reports an error to the console and to the screen's notice slot.
pub fn report_error(notice: RwSignal<Option<Notice>>, context: &str, error: &TableError) {
    match error.kind() {
        ErrorKind::Validation => log::warn!("{}: {}", context, error),
        ErrorKind::Network => log::error!("{}: {}", context, error),
    }
    notice.set(Some(Notice::from_error(error)));
}

#[component]
pub fn NoticeBar(notice: RwSignal<Option<Notice>>) -> impl IntoView {
    move || {
        notice.get().map(|n| {
            view! {
                <MessageBar intent=n.intent()>
                    <div class="notice-bar">
                        <span>{n.text().to_string()}</span>
                        <button class="notice-bar__close" on:click=move |_| notice.set(None) title="Close">
                            {crate::shared::icons::icon("x")}
                        </button>
                    </div>
                </MessageBar>
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds_map_to_notices() {
        let warn = Notice::from_error(&TableError::Validation("Please select both dates".into()));
        assert_eq!(warn, Notice::Warning("Please select both dates".into()));

        let err = Notice::from_error(&TableError::Backend {
            status: 500,
            message: "db down".into(),
        });
        assert_eq!(err, Notice::Error("backend returned 500: db down".into()));
    }
}
