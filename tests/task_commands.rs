// File: tests/task_commands.rs
mod common;

use common::*;
use crewbook::command::Command;
use crewbook::error::CommandError;
use crewbook::model::Index;
use crewbook::parser::parse_command;
use crewbook::store::Model;

fn run(model: &mut dyn Model, input: &str) -> Result<String, CommandError> {
    parse_command(input)
        .unwrap()
        .apply(model)
        .map(|r| r.feedback)
}

#[test]
fn test_add_task_only_touches_target_member() {
    let mut model = typical_model();
    let feedback = run(&mut model, "tadd m/3 n/Collect receipts").unwrap();
    assert_eq!(feedback, "New task added to Carl Kurz: [ ] Collect receipts");

    let members = model.address_book().members();
    assert_eq!(members[2].tasks(), [task("Collect receipts")]);
    for (i, m) in members.iter().enumerate() {
        if i != 2 {
            assert_eq!(m.tasks(), typical_members()[i].tasks(), "member {i}");
        }
    }
}

#[test]
fn test_add_duplicate_task_is_rejected() {
    let mut model = RecordingModel::new(typical_model());
    let err = run(&mut model, "tadd m/2 n/Book venue").unwrap_err();
    assert_eq!(
        err,
        CommandError::DuplicateTask {
            member: "Benson Meier".to_string()
        }
    );
    assert!(model.mutations.is_empty());
}

#[test]
fn test_same_task_name_under_two_members_is_fine() {
    let mut model = typical_model();
    run(&mut model, "tadd m/1 n/Book venue").unwrap();
    assert_eq!(model.address_book().members()[0].tasks().len(), 1);
    assert_eq!(model.address_book().members()[1].tasks().len(), 2);
}

#[test]
fn test_task_commands_use_displayed_member_index() {
    let mut model = typical_model();
    run(&mut model, "find Benson").unwrap();
    let feedback = run(&mut model, "tlist m/1").unwrap();
    assert_eq!(
        feedback,
        "Listed 2 task(s) of Benson Meier\n1. [ ] Book venue\n2. [ ] Order shirts"
    );
    assert_eq!(
        run(&mut model, "tlist m/2").unwrap_err(),
        CommandError::InvalidMemberIndex
    );
}

#[test]
fn test_list_tasks_of_member_without_tasks() {
    let mut model = typical_model();
    assert_eq!(
        run(&mut model, "tlist m/1").unwrap(),
        "Listed 0 task(s) of Alice Pauline"
    );
}

#[test]
fn test_delete_task() {
    let mut model = typical_model();
    let feedback = run(&mut model, "tdel m/2 t/1").unwrap();
    assert_eq!(feedback, "Deleted task from Benson Meier: [ ] Book venue");
    assert_eq!(
        model.address_book().members()[1].tasks(),
        [task("Order shirts")]
    );
}

#[test]
fn test_delete_task_out_of_range() {
    let mut model = RecordingModel::new(typical_model());
    let err = Command::DeleteTask {
        member: Index::from_one_based(2),
        task: Index::from_one_based(3),
    }
    .apply(&mut model)
    .unwrap_err();
    assert_eq!(err, CommandError::InvalidTaskIndex);
    assert!(model.mutations.is_empty());
}

#[test]
fn test_mark_task_toggles() {
    let mut model = typical_model();
    assert_eq!(
        run(&mut model, "tdone m/2 t/2").unwrap(),
        "Marked task of Benson Meier: [X] Order shirts"
    );
    assert!(model.address_book().members()[1].tasks()[1].is_done());

    assert_eq!(
        run(&mut model, "tdone m/2 t/2").unwrap(),
        "Unmarked task of Benson Meier: [ ] Order shirts"
    );
    assert!(!model.address_book().members()[1].tasks()[1].is_done());
}

#[test]
fn test_mark_task_out_of_range() {
    let mut model = RecordingModel::new(typical_model());
    assert_eq!(
        run(&mut model, "tdone m/1 t/1").unwrap_err(),
        CommandError::InvalidTaskIndex
    );
    assert!(model.mutations.is_empty());
}

#[test]
fn test_tasks_follow_member_through_edit() {
    let mut model = typical_model();
    run(&mut model, "edit 2 n/Benson Mayer").unwrap();
    assert_eq!(
        run(&mut model, "tlist m/2").unwrap(),
        "Listed 2 task(s) of Benson Mayer\n1. [ ] Book venue\n2. [ ] Order shirts"
    );
}

#[test]
fn test_model_task_ops_reject_unknown_member() {
    let mut model = typical_model();
    let stranger = member("Nobody Here", "123");
    assert!(matches!(
        model.add_task(&stranger, task("x")),
        Err(CommandError::MemberNotFound { .. })
    ));
    assert!(matches!(
        model.filtered_task_list(&stranger),
        Err(CommandError::MemberNotFound { .. })
    ));
}

#[test]
fn test_model_task_lookup_uses_loose_identity() {
    let mut model = typical_model();
    // A stale copy of Carl with a different phone still resolves to Carl.
    let stale = member("carl kurz", "000");
    model.add_task(&stale, task("Fold flyers")).unwrap();
    assert_eq!(
        model.address_book().members()[2].tasks(),
        [task("Fold flyers")]
    );
    model.delete_task(&stale, &task("Fold flyers")).unwrap();
    assert!(model.address_book().members()[2].tasks().is_empty());
}

#[test]
fn test_done_task_still_blocks_same_name() {
    let mut model = typical_model();
    run(&mut model, "tadd m/1 n/Report").unwrap();
    run(&mut model, "tdone m/1 t/1").unwrap();
    assert_eq!(
        run(&mut model, "tadd m/1 n/report").unwrap_err(),
        CommandError::DuplicateTask {
            member: "Alice Pauline".to_string()
        }
    );
    assert_eq!(model.address_book().members()[0].tasks().len(), 1);
}

#[test]
fn test_toggle_never_conflicts_with_itself() {
    let mut model = typical_model();
    run(&mut model, "tadd m/1 n/Report").unwrap();
    run(&mut model, "tadd m/1 n/Budget").unwrap();
    for _ in 0..3 {
        run(&mut model, "tdone m/1 t/2").unwrap();
    }
    assert!(model.address_book().members()[0].tasks()[1].is_done());
    assert!(!model.address_book().members()[0].tasks()[0].is_done());
}

#[test]
fn test_model_rejects_renaming_task_onto_sibling() {
    let mut model = typical_model();
    let benson = benson();
    let err = model
        .set_task(&benson, &task("Order shirts"), task("BOOK VENUE"))
        .unwrap_err();
    assert!(matches!(err, CommandError::DuplicateTask { .. }));
    assert!(model.has_task(&benson, &task("book venue")).unwrap());
}
