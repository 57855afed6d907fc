//! Acceptance tests for creating a request from the collection browser.
//!
//! Each test drives the real TuiApp through TestBackend with key events and
//! checks both the rendered screen and the files on disk.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use posthorn::collection::{CollectionTree, FILE_SUFFIX};
use posthorn::config::KeyBindings;
use posthorn::model::{RequestFile, Severity};
use posthorn::state::AppState;
use posthorn::view::TuiApp;
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::fs;
use std::path::Path;
use std::time::Duration;

// ===== Harness =====

struct Harness {
    app: TuiApp<TestBackend>,
}

impl Harness {
    fn open(root: &Path) -> Self {
        let tree = CollectionTree::load(root).expect("collection should load");
        let terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        Self {
            app: TuiApp::with_terminal(
                terminal,
                AppState::new(tree),
                KeyBindings::default(),
                Duration::from_secs(3),
            ),
        }
    }

    fn press(&mut self, code: KeyCode) -> bool {
        self.app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ctrl(&mut self, c: char) -> bool {
        self.app
            .handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.press(KeyCode::Char(c));
        }
    }

    fn screen(&mut self) -> String {
        self.app.draw().expect("draw should succeed");
        self.app
            .terminal()
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }
}

fn write_request(path: &Path, name: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, format!("name: {name}\nmethod: GET\nurl: https://example.com\n")).unwrap();
}

// ===== Scenarios =====

#[test]
fn create_request_next_to_selected_request() {
    // GIVEN: a collection with api/users/get-user.posting.yaml
    let root = tempfile::tempdir().unwrap();
    write_request(
        &root.path().join("api/users").join(format!("get-user{FILE_SUFFIX}")),
        "Get user",
    );
    let mut harness = Harness::open(root.path());

    // WHEN: the request is selected and the dialog is opened
    harness.press(KeyCode::Down);
    harness.press(KeyCode::Down);
    harness.ctrl('n');
    let screen = harness.screen();

    // THEN: the directory field defaults to the request's directory
    assert!(screen.contains("New request"));
    assert!(screen.contains("api/users"));

    // WHEN: a title is typed and confirmed
    harness.type_text("Delete user");
    harness.press(KeyCode::Enter);

    // THEN: the file is written beside the selected request and selected
    let written = root
        .path()
        .join("api/users")
        .join(format!("delete-user{FILE_SUFFIX}"));
    let document: RequestFile =
        serde_yaml::from_str(&fs::read_to_string(&written).unwrap()).unwrap();
    assert_eq!(document.name, "Delete user");

    let state = harness.app.app_state();
    assert!(state.modal.is_none());
    assert_eq!(
        state.selected_node().map(|n| n.name.as_str()),
        Some("Delete user")
    );
    assert!(harness.screen().contains("Request created"));
}

#[test]
fn duplicate_file_name_keeps_dialog_open() {
    let root = tempfile::tempdir().unwrap();
    write_request(&root.path().join(format!("ping{FILE_SUFFIX}")), "Ping");
    let mut harness = Harness::open(root.path());

    harness.ctrl('n');
    harness.type_text("Ping");
    harness.ctrl('k');

    let state = harness.app.app_state();
    assert!(state.modal.is_some(), "Dialog should stay open");
    let note = state.notifications.latest().unwrap();
    assert_eq!(note.severity(), Severity::Error);
    assert!(harness.screen().contains("A request with this name already exists."));

    // Editing the file name resolves the clash
    harness.press(KeyCode::Tab);
    harness.type_text("-2");
    harness.press(KeyCode::Enter);

    assert!(root.path().join(format!("ping-2{FILE_SUFFIX}")).is_file());
    assert!(harness.app.app_state().modal.is_none());
}

#[test]
fn escape_discards_dialog_and_writes_nothing() {
    let root = tempfile::tempdir().unwrap();
    let mut harness = Harness::open(root.path());

    harness.ctrl('n');
    harness.type_text("Never saved");
    harness.press(KeyCode::Esc);

    assert!(harness.app.app_state().modal.is_none());
    assert_eq!(fs::read_dir(root.path()).unwrap().count(), 0);
    assert!(!harness.screen().contains("Never saved"));
}

#[test]
fn quit_key_is_typed_while_dialog_open() {
    let root = tempfile::tempdir().unwrap();
    let mut harness = Harness::open(root.path());

    harness.ctrl('n');
    assert!(!harness.press(KeyCode::Char('q')));
    harness.press(KeyCode::Esc);
    assert!(harness.press(KeyCode::Char('q')));
}
