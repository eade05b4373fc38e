use crate::{DeletionPlan, DeletionTarget};

#[test]
fn test_default_plan_covers_every_dependent_table() {
    let plan = DeletionPlan::default();
    let tables: Vec<&str> = plan.targets().iter().map(|t| t.table.as_str()).collect();

    assert_eq!(
        tables,
        vec![
            "users",
            "users_profile",
            "interest_selected",
            "party",
            "board",
            "board_comment"
        ]
    );
}

#[test]
fn test_default_plan_predicate_columns() {
    let plan = DeletionPlan::default();
    assert!(plan.targets().contains(&DeletionTarget::new("users", "id")));
    assert!(
        plan.targets()
            .contains(&DeletionTarget::new("interest_selected", "id"))
    );
    assert!(
        plan.targets()
            .contains(&DeletionTarget::new("board_comment", "user_id"))
    );
}

#[test]
fn test_empty_plan() {
    let plan = DeletionPlan::new(Vec::new());
    assert!(plan.is_empty());
    assert_eq!(plan.len(), 0);
}
