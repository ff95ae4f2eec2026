//! Id allocation and sizing scenarios.

use custos_acl::ResourceId;

use crate::common::{subject, TestHarness};

#[test]
fn test_first_resource_gets_id_one() {
    let mut harness = TestHarness::new();
    let res = harness.fixtures.open_fixture();

    let id = harness.acl.add(&subject("my_files"), res).unwrap();
    assert_eq!(id, ResourceId::new(1));
}

#[test]
fn test_size_for_different_subjects() {
    let mut harness = TestHarness::new();
    let resources = [
        harness.fixtures.open_fixture(),
        harness.fixtures.open_fixture(),
        harness.fixtures.open_fixture(),
    ];
    let subjects = ["my_files", "my_files_one", "my_files_sec"];

    for (expected, (name, res)) in (1u64..).zip(subjects.iter().zip(resources)) {
        let id = harness.acl.add(&subject(name), res).unwrap();
        assert_eq!(id.get(), expected);
    }
    assert_eq!(harness.acl.size(), 3);
}

#[test]
fn test_size_for_same_subject() {
    let mut harness = TestHarness::new();
    let sub = subject("my_files");

    for expected in 1..=3u64 {
        let res = harness.fixtures.open_fixture();
        assert_eq!(harness.acl.add(&sub, res).unwrap().get(), expected);
    }
    assert_eq!(harness.acl.size(), 1);
    assert_eq!(harness.acl.resource_count(&sub), 3);
}

#[test]
fn test_ids_keep_increasing_after_removals() {
    let mut harness = TestHarness::new();
    let sub = subject("my_files");

    let first = harness.acl.add(&sub, harness.fixtures.open_fixture()).unwrap();
    harness.acl.remove_resource(&sub, first);
    let second = harness.acl.add(&sub, harness.fixtures.open_fixture()).unwrap();
    harness.acl.remove_subject(&sub);
    let third = harness
        .acl
        .add(&subject("other"), harness.fixtures.open_fixture())
        .unwrap();

    assert!(first < second && second < third);
    assert_eq!(third.get(), 3);
}

#[test]
fn test_remove_subject_updates_size() {
    let mut harness = TestHarness::new();
    let alice = subject("alice");
    let bob = subject("bob");
    harness.acl.add(&alice, harness.fixtures.open_fixture()).unwrap();
    harness.acl.add(&alice, harness.fixtures.open_fixture()).unwrap();
    harness.acl.add(&bob, harness.fixtures.open_fixture()).unwrap();

    harness.acl.remove_subject(&alice);
    assert_eq!(harness.acl.size(), 1);
    assert!(!harness.acl.has_subject(&alice));
    assert!(harness.acl.has_subject(&bob));
}

#[test]
fn test_remove_resource_from_subject() {
    let mut harness = TestHarness::new();
    let sub = subject("my_files");
    let id = harness.acl.add(&sub, harness.fixtures.open_fixture()).unwrap();
    assert!(harness.acl.has_subject(&sub));
    assert!(harness.acl.has_resource(&sub, id));

    harness.acl.remove_resource(&sub, id);
    assert!(harness.acl.has_subject(&sub));
    assert!(!harness.acl.has_resource(&sub, id));
}
