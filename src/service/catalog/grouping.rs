use crate::model::catalog::{CatalogEntry, GroupedEntries};

/// 按 category 分组，组内保持输入顺序
pub fn group_entries<I>(entries: I) -> GroupedEntries
where
    I: IntoIterator<Item = CatalogEntry>,
{
    let mut groups = GroupedEntries::new();
    for entry in entries {
        groups.entry(entry.category.clone()).or_default().push(entry);
    }
    groups
}
