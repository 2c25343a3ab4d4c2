use orx_positional_list::*;
use std::hash::{DefaultHasher, Hash, Hasher};

fn hash_single<H: Hash>(val: H) -> u64 {
    let mut hasher = DefaultHasher::new();
    val.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn clone() {
    let mut list = PositionalList::new();

    let pos1 = list.add_first(0.to_string());
    let pos2 = list.add_first(1.to_string());

    assert_ne!(pos1, pos2);

    let cloned = pos1;

    assert_eq!(pos1, cloned);
    assert_ne!(pos2, cloned);
}

#[test]
fn hash() {
    let mut list = PositionalList::new();

    let pos1 = list.add_first(0.to_string());
    let pos2 = list.add_first(1.to_string());

    let pos1_hash = hash_single(pos1);
    let pos2_hash = hash_single(pos2);

    assert_ne!(pos1_hash, pos2_hash);
    assert_eq!(pos1_hash, hash_single(list.last().unwrap()));
}

#[test]
fn equality_is_node_identity() {
    let mut list = PositionalList::new();

    let a = list.add_last(7);
    let b = list.add_last(7);

    assert_eq!(list.element(a), list.element(b));
    assert_ne!(a, b);

    assert_eq!(list.first(), Some(a));
    assert_eq!(list.after(a), Ok(Some(b)));
    assert_eq!(list.before(b), Ok(Some(a)));
}

#[test]
fn equal_elements_of_different_lists() {
    let mut list1 = PositionalList::new();
    let mut list2 = PositionalList::new();

    let a = list1.add_last('a');
    let b = list2.add_last('a');

    assert_ne!(a, b);
}

#[test]
fn replace_keeps_position_valid() {
    let mut list = PositionalList::new();
    let a = list.add_last('a');
    let b = list.add_last('b');

    assert_eq!(list.replace(a, 'x'), Ok('a'));

    assert!(list.is_valid(a));
    assert_eq!(list.element(a), Ok(&'x'));
    assert_eq!(list.first(), Some(a));
    assert_eq!(list.after(a), Ok(Some(b)));
}

#[test]
fn delete_invalidates_position() {
    let mut list = PositionalList::new();
    let a = list.add_last('a');
    let b = list.add_last('b');
    let c = list.add_last('c');

    assert_eq!(list.delete(b), Ok('b'));

    assert!(!list.is_valid(b));
    assert_eq!(list.invalidity_reason(b), Some(PositionError::RemovedNode));

    assert_eq!(list.element(b), Err(PositionError::RemovedNode));
    assert_eq!(list.before(b), Err(PositionError::RemovedNode));
    assert_eq!(list.after(b), Err(PositionError::RemovedNode));
    assert_eq!(list.add_before(b, 'x'), Err(PositionError::RemovedNode));
    assert_eq!(list.add_after(b, 'x'), Err(PositionError::RemovedNode));
    assert_eq!(list.replace(b, 'x'), Err(PositionError::RemovedNode));
    assert_eq!(list.delete(b), Err(PositionError::RemovedNode));
    assert_eq!(list.element_mut(b), Err(PositionError::RemovedNode));

    assert_eq!(list.len(), 2);
    assert_eq!(list.after(a), Ok(Some(c)));
    assert_eq!(list.before(c), Ok(Some(a)));
}

#[test]
fn reused_slot_does_not_revive_position() {
    let mut list = PositionalList::new();
    let a = list.add_last('a');
    _ = list.delete(a);

    let b = list.add_last('b');

    assert_eq!(list.utilization().num_closed_nodes, 0);
    assert_ne!(a, b);
    assert!(!list.is_valid(a));
    assert!(list.is_valid(b));
    assert_eq!(list.element(a), Err(PositionError::RemovedNode));
    assert_eq!(list.element(b), Ok(&'b'));
}

#[test]
fn other_list() {
    let mut list1 = PositionalList::new();
    let mut list2 = PositionalList::new();

    let a = list1.add_last('a');
    let b = list2.add_last('b');

    assert_eq!(list1.invalidity_reason(a), None);
    assert_eq!(list2.invalidity_reason(a), Some(PositionError::OtherList));
    assert_eq!(list1.invalidity_reason(b), Some(PositionError::OtherList));

    assert_eq!(list2.element(a), Err(PositionError::OtherList));
    assert_eq!(list2.after(a), Err(PositionError::OtherList));
    assert_eq!(list2.add_before(a, 'x'), Err(PositionError::OtherList));
    assert_eq!(list2.delete(a), Err(PositionError::OtherList));

    assert_eq!(list1.iter().copied().collect::<Vec<_>>(), ['a']);
    assert_eq!(list2.iter().copied().collect::<Vec<_>>(), ['b']);
}

#[test]
fn other_list_takes_precedence_over_removal() {
    let mut list1 = PositionalList::new();
    let list2 = PositionalList::<char>::new();

    let a = list1.add_last('a');
    _ = list1.delete(a);

    assert_eq!(list1.invalidity_reason(a), Some(PositionError::RemovedNode));
    assert_eq!(list2.invalidity_reason(a), Some(PositionError::OtherList));
}

#[test]
fn clear_invalidates_all_positions() {
    let mut list = PositionalList::new();
    let positions: Vec<_> = (0..10).map(|x| list.add_last(x)).collect();

    list.clear();

    assert!(list.is_empty());
    assert!(positions.iter().all(|p| !list.is_valid(*p)));

    let fresh: Vec<_> = (0..10).map(|x| list.add_last(x)).collect();
    assert!(positions.iter().all(|p| !list.is_valid(*p)));
    assert!(fresh.iter().all(|p| list.is_valid(*p)));
}

#[test]
fn error_display() {
    assert_eq!(
        PositionError::OtherList.to_string(),
        "position does not belong to this list"
    );
    assert_eq!(
        PositionError::RemovedNode.to_string(),
        "position is no longer valid"
    );

    let error: Box<dyn std::error::Error> = Box::new(PositionError::RemovedNode);
    assert_eq!(error.to_string(), "position is no longer valid");
}

#[test]
fn position_is_send_sync_copy_for_any_element() {
    fn assert_traits<P: Send + Sync + Copy>(_: P) {}

    let mut list = PositionalList::new();
    let a = list.add_last(std::rc::Rc::new(1));
    assert_traits(a);
}
