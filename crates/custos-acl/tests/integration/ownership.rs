//! Ownership transfer in and out of the list.

use std::io::Read;

use custos_acl::{Acl, Resource, ResourceId, Subject};

use crate::common::{subject, TestHarness};

#[test]
fn test_popped_handle_is_still_open() {
    let mut harness = TestHarness::new();
    let sub = subject("my_files");
    let id = harness.acl.add(&sub, harness.fixtures.open_fixture()).unwrap();

    let popped = harness.acl.try_pop(&sub, id).expect("resource should pop");
    assert_eq!(popped.id(), id);

    let mut file = popped.into_payload().expect("handle should be open");
    let mut content = String::new();
    file.read_to_string(&mut content).unwrap();
    assert_eq!(content, "custos fixture\n");
}

#[test]
fn test_failed_handle_is_stored_untouched() {
    let mut harness = TestHarness::new();
    let sub = subject("my_files");
    let ok = harness.acl.add(&sub, harness.fixtures.open_fixture()).unwrap();
    let bad = harness.acl.add(&sub, harness.fixtures.open_missing()).unwrap();

    let popped_ok = harness.acl.try_pop(&sub, ok).unwrap();
    let popped_bad = harness.acl.try_pop(&sub, bad).unwrap();
    assert!(popped_ok.payload().is_some());
    assert!(popped_bad.payload().is_none());
}

#[test]
fn test_pop_leaves_nothing_behind() {
    let mut harness = TestHarness::new();
    let sub = subject("my_files");
    let id = harness.acl.add(&sub, harness.fixtures.open_fixture()).unwrap();
    harness.acl.allow_access(&sub, id);

    let popped = harness.acl.try_pop(&sub, id).unwrap();
    assert!(!harness.acl.has_resource(&sub, id));
    assert!(!harness.acl.is_allowed(&sub, &popped));
    assert!(harness.acl.try_pop(&sub, id).is_none());
    assert!(harness.acl.has_subject(&sub));
}

#[test]
fn test_try_pop_on_missing_pair() {
    let mut harness = TestHarness::new();
    assert!(harness
        .acl
        .try_pop(&subject("nobody"), ResourceId::new(1))
        .is_none());

    let sub = subject("my_files");
    harness.acl.add(&sub, harness.fixtures.open_fixture()).unwrap();
    assert!(harness.acl.try_pop(&sub, ResourceId::new(2)).is_none());
}

#[test]
fn test_popped_resource_can_be_added_again() {
    let mut acl: Acl<&str, String> = Acl::new();
    let alice = Subject::new("alice");
    let bob = Subject::new("bob");

    let first = acl.add(&alice, Resource::new("draft".to_string())).unwrap();
    let mut res = acl.try_pop(&alice, first).unwrap();
    res.payload_mut().push_str(" v2");

    let second = acl.add(&bob, res).unwrap();
    assert_eq!(second.get(), 2);
    assert_eq!(acl.get(&bob, second).unwrap().payload(), "draft v2");
    assert_eq!(acl.get(&bob, second).unwrap().id(), second);
}

#[test]
fn test_dropping_list_drops_payloads() {
    use std::rc::Rc;

    let tracker = Rc::new(());
    {
        let mut acl: Acl<u8, Rc<()>> = Acl::new();
        acl.add(&Subject::new(1), Resource::new(Rc::clone(&tracker))).unwrap();
        acl.add(&Subject::new(2), Resource::new(Rc::clone(&tracker))).unwrap();
        assert_eq!(Rc::strong_count(&tracker), 3);

        acl.remove_subject(&Subject::new(1));
        assert_eq!(Rc::strong_count(&tracker), 2);
    }
    assert_eq!(Rc::strong_count(&tracker), 1);
}
