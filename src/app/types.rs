//! Type definitions for the view controller.

/// Tab currently shown on the resume screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Upload,
    History,
}

impl Tab {
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Upload => "Upload",
            Tab::History => "History",
        }
    }
}
