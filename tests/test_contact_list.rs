//! Tests for the contact list session: filtering, ordering and replacement.

mod mocks;

use contact_gateway_mcp::domain::{ContactId, PhoneEntry};
use contact_gateway_mcp::repositories::ContactDirectory;
use contact_gateway_mcp::ContactListSession;
use mocks::MockContactDirectory;
use std::sync::Arc;

fn directory() -> MockContactDirectory {
    let directory = MockContactDirectory::new();
    directory.add_contact("1", "Juan", vec![PhoneEntry::mobile("06-1")]);
    directory.add_contact("2", "Bob", vec![]);
    directory.add_contact("3", "Anna", vec![]);
    directory.add_contact("4", "Hannah", vec![]);
    directory
}

fn names(contacts: &[contact_gateway_mcp::ContactSummary]) -> Vec<&str> {
    contacts.iter().map(|c| c.display_name.as_str()).collect()
}

#[tokio::test]
async fn test_unfiltered_list_is_sorted_by_name() {
    let session = ContactListSession::new(Arc::new(directory()));

    let contacts = session.filter(None).await.unwrap();
    assert_eq!(names(&contacts), vec!["Anna", "Bob", "Hannah", "Juan"]);
}

#[tokio::test]
async fn test_substring_filter_is_case_insensitive() {
    let session = ContactListSession::new(Arc::new(directory()));

    let contacts = session.filter(Some("an")).await.unwrap();
    assert_eq!(names(&contacts), vec!["Anna", "Hannah", "Juan"]);

    let contacts = session.filter(Some("AN")).await.unwrap();
    assert_eq!(names(&contacts), vec!["Anna", "Hannah", "Juan"]);
}

#[tokio::test]
async fn test_empty_query_clears_filter() {
    let session = ContactListSession::new(Arc::new(directory()));

    session.filter(Some("bob")).await.unwrap();
    assert_eq!(session.constraint().await.as_deref(), Some("bob"));

    let contacts = session.filter(Some("")).await.unwrap();
    assert_eq!(contacts.len(), 4);
    assert_eq!(session.constraint().await, None);
}

#[tokio::test]
async fn test_each_filter_replaces_the_displayed_set() {
    let session = ContactListSession::new(Arc::new(directory()));

    session.filter(Some("an")).await.unwrap();
    assert_eq!(session.current().await.len(), 3);

    session.filter(Some("zzz")).await.unwrap();
    assert!(session.current().await.is_empty());
    assert!(session.at(0).await.is_none());
}

#[tokio::test]
async fn test_find_and_position_lookup() {
    let session = ContactListSession::new(Arc::new(directory()));
    session.filter(None).await.unwrap();

    let juan = session.find(&ContactId::new("1").unwrap()).await.unwrap();
    assert_eq!(juan.display_name, "Juan");
    assert_eq!(session.at(1).await.unwrap().display_name, "Bob");
    assert!(session.find(&ContactId::new("99").unwrap()).await.is_none());
}

#[tokio::test]
async fn test_directory_failure_keeps_previous_set() {
    let directory = directory();
    let session = ContactListSession::new(Arc::new(directory.clone()));

    session.filter(None).await.unwrap();
    directory.set_failing(true);

    assert!(session.filter(Some("an")).await.is_err());
    assert_eq!(session.current().await.len(), 4);
    assert_eq!(directory.get_call_count("query_contacts"), 2);
}

#[tokio::test]
async fn test_mock_directory_matches_provider_rules() {
    let directory = directory();
    let contacts = directory.query_contacts(Some("an")).await.unwrap();
    assert_eq!(names(&contacts), vec!["Anna", "Hannah", "Juan"]);
}
