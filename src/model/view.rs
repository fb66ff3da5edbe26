use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stamp {
    Company,
    Contractor,
    Site,
    Branch,
}

impl Stamp {
    pub const ALL: [Stamp; 4] = [Stamp::Company, Stamp::Contractor, Stamp::Site, Stamp::Branch];

    pub fn label(&self) -> &'static str {
        match self {
            Stamp::Company => "Company",
            Stamp::Contractor => "Contractor",
            Stamp::Site => "Site",
            Stamp::Branch => "Branch",
        }
    }
}

/// 页面状态，只能通过 reducer 产生新值
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ViewState {
    pub selected_state: Option<String>,
    pub files: Vec<String>,
    pub query: String,
    pub show_dropdown: bool,
    pub selected_file: Option<String>,
    pub selected_stamp: Option<Stamp>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum ViewAction {
    SelectState(String),
    SetQuery(String),
    ToggleDropdown,
    CloseDropdown,
    SelectFile(String),
    SelectStamp(Option<Stamp>),
    DownloadFailed(String),
    ClearError,
}
