use serde::Serialize;
use crate::model::catalog::{derive_category, file_name, qualify_path, CatalogEntry, GroupedEntries};
use crate::model::view::{ViewAction, ViewState};
use crate::service::catalog::{filter_files, group_entries, Catalog};

/// Pure transition from one view state to the next.
///
/// Switching state replaces the file list and clears the query, the selected
/// file and any error in the same step.
pub fn reduce(state: &ViewState, action: ViewAction, catalog: &Catalog) -> ViewState {
    let mut next = state.clone();

    match action {
        ViewAction::SelectState(name) => {
            next.files = if name.is_empty() {
                Vec::new()
            } else {
                catalog.files(&name).map(|f| f.to_vec()).unwrap_or_default()
            };
            next.selected_state = if name.is_empty() { None } else { Some(name) };
            next.query.clear();
            next.selected_file = None;
            next.error = None;
        }
        ViewAction::SetQuery(query) => next.query = query,
        ViewAction::ToggleDropdown => next.show_dropdown = !next.show_dropdown,
        ViewAction::CloseDropdown => next.show_dropdown = false,
        ViewAction::SelectFile(path) => {
            if next.files.contains(&path) {
                next.selected_file = Some(path);
                next.show_dropdown = false;
            }
        }
        ViewAction::SelectStamp(stamp) => next.selected_stamp = stamp,
        ViewAction::DownloadFailed(message) => next.error = Some(message),
        ViewAction::ClearError => next.error = None,
    }

    next
}

/// 视图状态加上派生数据，直接返回给前端
#[derive(Debug, Clone, Serialize)]
pub struct ViewSnapshot {
    #[serde(flatten)]
    pub view: ViewState,
    pub categories: GroupedEntries,
    pub selected_file_name: Option<String>,
    pub selected_category: Option<String>,
}

impl ViewSnapshot {
    pub fn from_view(view: &ViewState) -> Self {
        let state = view.selected_state.as_deref().unwrap_or_default();

        let categories = if state.is_empty() {
            GroupedEntries::new()
        } else {
            group_entries(
                filter_files(&view.files, &view.query)
                    .into_iter()
                    .map(|path| CatalogEntry::new(state, path)),
            )
        };

        let selected_file_name = view.selected_file.as_deref().map(|p| file_name(p).to_string());
        let selected_category = view
            .selected_file
            .as_deref()
            .map(|p| derive_category(&qualify_path(state, p)));

        Self {
            view: view.clone(),
            categories,
            selected_file_name,
            selected_category,
        }
    }
}
