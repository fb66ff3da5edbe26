use validator::Validate;
use crate::error::AppResult;
use crate::model::branch::{BranchMapping, CreateBranchMapping};
use crate::util::time::next_timestamp_id;

/// 会话内的分支 -> state 映射列表，不持久化
#[derive(Debug, Clone, Default)]
pub struct BranchMappingEditor {
    mappings: Vec<BranchMapping>,
    last_id: Option<i64>,
}

impl BranchMappingEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn list(&self) -> &[BranchMapping] {
        &self.mappings
    }

    /// branch 与 state 都不能为空
    pub fn add(&mut self, request: &CreateBranchMapping) -> AppResult<BranchMapping> {
        request.validate()?;

        let id = next_timestamp_id(self.last_id);
        self.last_id = Some(id);

        let mapping = BranchMapping {
            id,
            branch: request.branch.clone(),
            state: request.state.clone(),
        };
        self.mappings.push(mapping.clone());
        tracing::debug!("新增分支映射 #{}: {} -> {}", id, mapping.branch, mapping.state);
        Ok(mapping)
    }

    /// 返回是否真的删除了记录；未知 id 不报错
    pub fn remove(&mut self, id: i64) -> bool {
        let before = self.mappings.len();
        self.mappings.retain(|m| m.id != id);
        before != self.mappings.len()
    }
}
