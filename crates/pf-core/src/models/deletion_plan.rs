use serde::Serialize;

/// One dependent table and the column that references the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeletionTarget {
    pub table: String,
    pub column: String,
}

impl DeletionTarget {
    pub fn new(table: impl Into<String>, column: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            column: column.into(),
        }
    }
}

/// Every record that has to go before the authentication identity itself.
///
/// Targets are independent of each other; their order only fixes the order
/// in which requests are issued.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeletionPlan {
    targets: Vec<DeletionTarget>,
}

impl DeletionPlan {
    pub fn new(targets: Vec<DeletionTarget>) -> Self {
        Self { targets }
    }

    pub fn targets(&self) -> &[DeletionTarget] {
        &self.targets
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

impl Default for DeletionPlan {
    fn default() -> Self {
        Self::new(vec![
            DeletionTarget::new("users", "id"),
            DeletionTarget::new("users_profile", "user_id"),
            DeletionTarget::new("interest_selected", "id"),
            DeletionTarget::new("party", "user_id"),
            DeletionTarget::new("board", "user_id"),
            DeletionTarget::new("board_comment", "user_id"),
        ])
    }
}
