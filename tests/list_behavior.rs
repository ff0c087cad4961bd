use pretty_assertions::assert_eq;
use tick::model::TodoList;
use tick::ops::list_ops::{AddError, ListError, add_task, edit_title, remove_task, toggle_done};

#[test]
fn add_appends_in_insertion_order() {
    let mut list = TodoList::new();
    add_task(&mut list, "first").unwrap();
    add_task(&mut list, "second").unwrap();
    add_task(&mut list, "third").unwrap();

    let titles: Vec<&str> = list.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["first", "second", "third"]);
    assert!(list.iter().all(|t| !t.done));
}

#[test]
fn add_rejections_leave_the_list_untouched() {
    let mut list = TodoList::new();
    add_task(&mut list, "only").unwrap();

    assert_eq!(add_task(&mut list, ""), Err(AddError::EmptyTitle));
    assert_eq!(
        add_task(&mut list, "only"),
        Err(AddError::DuplicateTitle("only".into()))
    );
    assert_eq!(list.len(), 1);
}

#[test]
fn duplicate_titles_are_allowed_again_after_removal() {
    let mut list = TodoList::new();
    let id = add_task(&mut list, "recurring").unwrap();
    remove_task(&mut list, id).unwrap();

    // The title is free again once its task is gone
    let id2 = add_task(&mut list, "recurring").unwrap();
    assert!(id2 > id);
    assert_eq!(list.len(), 1);
}

#[test]
fn toggling_twice_restores_the_original_state() {
    let mut list = TodoList::new();
    let id = add_task(&mut list, "flip me").unwrap();

    assert_eq!(toggle_done(&mut list, id), Ok(true));
    assert_eq!(toggle_done(&mut list, id), Ok(false));
    assert!(!list.find(id).unwrap().done);
}

#[test]
fn operations_on_unknown_ids_do_not_disturb_the_list() {
    let mut list = TodoList::new();
    add_task(&mut list, "keeper").unwrap();
    let before = list.tasks.clone();

    assert_eq!(toggle_done(&mut list, 42), Err(ListError::NotFound(42)));
    assert_eq!(edit_title(&mut list, 42, "x"), Err(ListError::NotFound(42)));
    assert!(remove_task(&mut list, 42).is_err());

    assert_eq!(list.tasks, before);
}

#[test]
fn rename_is_unvalidated_by_design() {
    let mut list = TodoList::new();
    let a = add_task(&mut list, "alpha").unwrap();
    add_task(&mut list, "beta").unwrap();

    // Renaming onto an existing title is accepted
    edit_title(&mut list, a, "beta").unwrap();
    assert_eq!(list.iter().filter(|t| t.title == "beta").count(), 2);

    // ...and so is renaming to nothing
    edit_title(&mut list, a, "").unwrap();
    assert_eq!(list.find(a).unwrap().title, "");
}

#[test]
fn full_session_scenario() {
    let mut list = TodoList::new();

    let id = add_task(&mut list, "Buy milk").unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list.tasks[0].title, "Buy milk");
    assert!(!list.tasks[0].done);

    assert_eq!(
        add_task(&mut list, "Buy milk"),
        Err(AddError::DuplicateTitle("Buy milk".into()))
    );
    assert_eq!(list.len(), 1);

    assert_eq!(toggle_done(&mut list, id), Ok(true));

    edit_title(&mut list, id, "Buy oat milk").unwrap();
    assert_eq!(list.tasks[0].title, "Buy oat milk");
    assert!(list.tasks[0].done);
    assert_eq!(list.tasks[0].id, id);

    remove_task(&mut list, id).unwrap();
    assert!(list.is_empty());
}
