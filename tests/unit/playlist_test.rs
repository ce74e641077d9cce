//! Tests for the playlist actions on the admin client

use statusctl::{AdminClient, UrlBuilder};

use crate::common::mocks::{DesktopSetup, test_desktop};

fn client(setup: DesktopSetup) -> (AdminClient, crate::common::mocks::Recorded) {
    let urls = UrlBuilder::new("http://radio.local:8080", "/status").unwrap();
    let (desktop, recorded) = test_desktop(setup);
    (AdminClient::with_desktop(urls, desktop), recorded)
}

const PLAYLIST: &str = "http://radio.local:8080/playlist.m3u";

#[test]
fn test_playlist_url_ignores_status_prefix() {
    let (client, _) = client(DesktopSetup::default());
    assert_eq!(client.playlist_url().as_str(), PLAYLIST);
}

// =============================================================================
// COPY
// =============================================================================

#[test]
fn test_copy_uses_clipboard_when_available() {
    let (client, recorded) = client(DesktopSetup::default());

    assert!(client.copy_playlist_url());
    assert_eq!(recorded.written(), vec![PLAYLIST.to_string()]);
    assert!(recorded.fallback_calls().is_empty());
}

#[test]
fn test_copy_clipboard_failure_returns_false() {
    let (client, recorded) = client(DesktopSetup {
        clipboard_fails: true,
        ..DesktopSetup::default()
    });

    assert!(!client.copy_playlist_url());
    assert!(recorded.fallback_calls().is_empty());
}

#[test]
fn test_copy_falls_back_when_clipboard_unavailable() {
    let (client, recorded) = client(DesktopSetup {
        clipboard_available: false,
        ..DesktopSetup::default()
    });

    assert!(client.copy_playlist_url());
    assert!(recorded.written().is_empty());
    assert_eq!(recorded.fallback_calls(), vec![PLAYLIST.to_string()]);
}

#[test]
fn test_copy_reports_fallback_failure() {
    let (client, _) = client(DesktopSetup {
        clipboard_available: false,
        fallback_outcome: Some(false),
        ..DesktopSetup::default()
    });

    assert!(!client.copy_playlist_url());
}

#[test]
fn test_copy_fallback_error_returns_false() {
    let (client, recorded) = client(DesktopSetup {
        clipboard_available: false,
        fallback_outcome: None,
        ..DesktopSetup::default()
    });

    assert!(!client.copy_playlist_url());
    assert_eq!(recorded.fallback_calls().len(), 1);
}

// =============================================================================
// OPEN
// =============================================================================

#[test]
fn test_open_playlist_opens_playlist_url() {
    let (client, recorded) = client(DesktopSetup::default());

    client.open_playlist();

    assert_eq!(recorded.opened(), vec![PLAYLIST.to_string()]);
}

#[test]
fn test_open_playlist_ignores_launcher_failure() {
    let (client, recorded) = client(DesktopSetup {
        launcher_fails: true,
        ..DesktopSetup::default()
    });

    client.open_playlist();

    assert_eq!(recorded.opened().len(), 1);
}
