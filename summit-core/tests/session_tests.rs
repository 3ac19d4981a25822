use rstest::rstest;
use tempfile::TempDir;

use summit_core::session;

#[test]
fn load_returns_none_before_login() {
    let home = TempDir::new().expect("home");
    assert_eq!(session::load_at(home.path()).expect("load"), None);
}

#[test]
fn saved_key_survives_reload() {
    let home = TempDir::new().expect("home");
    let saved = session::save_at(home.path(), "clave-admin").expect("save");

    let loaded = session::load_at(home.path())
        .expect("load")
        .expect("session present");
    assert_eq!(loaded.key, "clave-admin");
    assert_eq!(loaded.saved_at, saved.saved_at);
}

#[test]
fn saving_again_replaces_previous_key() {
    let home = TempDir::new().expect("home");
    session::save_at(home.path(), "old").expect("save old");
    session::save_at(home.path(), "new").expect("save new");

    let loaded = session::load_at(home.path()).expect("load").expect("session");
    assert_eq!(loaded.key, "new");
}

#[rstest]
#[case::after_login(true, true)]
#[case::without_login(false, false)]
fn clear_reports_whether_a_session_existed(#[case] logged_in: bool, #[case] expected: bool) {
    let home = TempDir::new().expect("home");
    if logged_in {
        session::save_at(home.path(), "k").expect("save");
    }

    assert_eq!(session::clear_at(home.path()).expect("clear"), expected);
    assert_eq!(session::load_at(home.path()).expect("load"), None);
}

#[cfg(unix)]
#[test]
fn session_file_is_owner_only() {
    use std::os::unix::fs::PermissionsExt;

    let home = TempDir::new().expect("home");
    session::save_at(home.path(), "k").expect("save");
    let mode = std::fs::metadata(session::session_path_at(home.path()))
        .expect("metadata")
        .permissions()
        .mode()
        & 0o777;
    assert_eq!(mode, 0o600);
}
