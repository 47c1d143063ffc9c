//! Integrationstests für den Controller-Fluss:
//! - Öffnen mit Snapshot bzw. Template-Fallback
//! - Speichern (Erfolg und Fehler) über die Backends
//! - Beenden mit ungespeicherten Änderungen
//! - Signale des AtomicCoordinators

use glam::DVec3;
use landmark_editor::{
    AppCommand, AppController, AppIntent, AppState, EditorOptions, FileBackend, LandmarkBackend,
    MemoryBackend, ScriptAction, Signal, Template, parse_script_line, write_ljson,
};
use std::path::Path;

const FACE_TEMPLATE: &str = r#"
[[groups]]
label = "left_eye"
points = 3
connectivity = [[0, 1], [1, 2], [2, 0]]

[[groups]]
label = "mouth"
points = 2
connectivity = [[0, 1]]
"#;

/// Kopiert `tests/fixtures/data` in ein Temp-Verzeichnis.
fn data_dir_copy() -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("Temp-Verzeichnis");
    let src = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/data");
    for sub in ["templates", "landmarks"] {
        let target = dir.path().join(sub);
        std::fs::create_dir_all(&target).expect("Verzeichnis anlegen");
        for entry in std::fs::read_dir(src.join(sub)).expect("Fixture-Verzeichnis lesbar") {
            let entry = entry.expect("Eintrag lesbar");
            std::fs::copy(entry.path(), target.join(entry.file_name())).expect("Kopieren");
        }
    }
    dir
}

fn file_state(dir: &Path) -> AppState {
    let options = EditorOptions {
        data_dir: dir.display().to_string(),
        default_template: "face".to_string(),
        ..EditorOptions::default()
    };
    AppState::with_backend(options, Box::new(FileBackend::new(dir)))
}

fn memory_state(backend: MemoryBackend) -> AppState {
    let options = EditorOptions {
        default_template: "face".to_string(),
        ..EditorOptions::default()
    };
    AppState::with_backend(options, Box::new(backend))
}

fn face_backend() -> MemoryBackend {
    let template = Template::from_toml_str(FACE_TEMPLATE).expect("Template gültig");
    MemoryBackend::new().with_template("face", template)
}

fn open(controller: &mut AppController, state: &mut AppState, asset: &str) {
    controller
        .handle_intent(
            state,
            AppIntent::OpenRequested {
                asset: asset.to_string(),
                template: None,
            },
        )
        .expect("Öffnen darf nicht fehlschlagen");
}

// ─── Öffnen ──────────────────────────────────────────────────────────────────

#[test]
fn test_open_existing_snapshot_from_data_dir() {
    let dir = data_dir_copy();
    let mut controller = AppController::new();
    let mut state = file_state(dir.path());

    open(&mut controller, &mut state, "face_01");

    let session = state.session.as_ref().expect("Session offen");
    assert!(!session.from_template);
    assert_eq!(session.group.landmark_count(), 8);
    assert!(session.group.landmarks()[1].is_bad());
    assert!(session.group.landmarks()[7].is_invisible());
    assert_eq!(session.group.next_available(), Some(3));
    assert_eq!(session.group.labels().len(), 3);
    assert!(session.group.is_up_to_date());
}

#[test]
fn test_open_missing_snapshot_falls_back_to_template() {
    let dir = data_dir_copy();
    let mut controller = AppController::new();
    let mut state = file_state(dir.path());

    open(&mut controller, &mut state, "face_99");

    let session = state.session.as_ref().expect("Session offen");
    assert!(session.from_template);
    assert_eq!(session.group.landmark_count(), 8);
    assert!(session.group.landmarks().iter().all(|lm| lm.is_empty()));
    assert_eq!(
        session.group.connectivity().collect::<Vec<_>>(),
        vec![[0, 1], [1, 2], [2, 0], [3, 4], [4, 5], [5, 3], [6, 7]]
    );
    assert_eq!(session.group.next_available(), Some(0));
}

#[test]
fn test_open_invalid_snapshot_falls_back_to_template() {
    let dir = data_dir_copy();
    std::fs::copy(
        dir.path().join("landmarks/broken_face.ljson"),
        dir.path().join("landmarks/face_02_face.ljson"),
    )
    .expect("Kopieren");

    let mut controller = AppController::new();
    let mut state = file_state(dir.path());
    open(&mut controller, &mut state, "face_02");

    let session = state.session.as_ref().expect("Session offen");
    assert!(session.from_template, "Connectivity [[0, 5]] ist ungültig");
    assert_eq!(session.group.landmark_count(), 8);
}

#[test]
fn test_open_with_unknown_template_fails_and_sets_status() {
    let mut controller = AppController::new();
    let mut state = memory_state(MemoryBackend::new());

    let result = controller.handle_intent(
        &mut state,
        AppIntent::OpenRequested {
            asset: "face_01".to_string(),
            template: Some("hand".to_string()),
        },
    );

    assert!(result.is_err());
    assert!(state.session.is_none());
    let status = state.status_message.as_deref().expect("Statusnachricht gesetzt");
    assert!(status.contains("hand"), "Status nennt das Template: {status}");
}

// ─── Speichern ───────────────────────────────────────────────────────────────

#[test]
fn test_insert_then_save_writes_snapshot_file() {
    let dir = data_dir_copy();
    let mut controller = AppController::new();
    let mut state = file_state(dir.path());
    open(&mut controller, &mut state, "face_01");

    controller
        .handle_intent(
            &mut state,
            AppIntent::PointPlaced {
                point: DVec3::new(200.0, 90.0, 0.0),
            },
        )
        .expect("Insert erfolgreich");
    assert!(state.has_unsaved_changes());

    controller
        .handle_intent(&mut state, AppIntent::SaveRequested)
        .expect("Speichern erfolgreich");
    assert!(!state.has_unsaved_changes());
    assert_eq!(state.status_message.as_deref(), Some("Gespeichert: face_01"));

    let reloaded = FileBackend::new(dir.path())
        .load_landmark_group("face_01", "face")
        .expect("Snapshot lesbar");
    assert_eq!(reloaded.landmarks.points[3], vec![Some(200.0), Some(90.0)]);
    let session = state.session.as_ref().expect("Session offen");
    assert_eq!(reloaded, session.group.to_ljson());
}

#[test]
fn test_failed_save_keeps_group_dirty() {
    let mut backend = face_backend();
    backend.fail_saves = true;
    let mut controller = AppController::new();
    let mut state = memory_state(backend);
    open(&mut controller, &mut state, "face_01");

    controller
        .handle_intent(
            &mut state,
            AppIntent::PointPlaced {
                point: DVec3::new(1.0, 1.0, 0.0),
            },
        )
        .expect("Insert erfolgreich");

    let result = controller.handle_intent(&mut state, AppIntent::SaveRequested);
    assert!(result.is_err());
    assert!(state.has_unsaved_changes());
    assert!(state.status_message.is_some());

    // Mit funktionierendem Backend klappt es danach
    state.backend = Box::new(face_backend());
    controller
        .handle_intent(&mut state, AppIntent::SaveRequested)
        .expect("Speichern erfolgreich");
    assert!(!state.has_unsaved_changes());
    assert!(state.backend.load_landmark_group("face_01", "face").is_ok());
}

#[test]
fn test_restore_from_file_replaces_contents_and_marks_dirty() {
    let dir = tempfile::tempdir().expect("Temp-Verzeichnis");
    let mut controller = AppController::new();
    let mut state = memory_state(face_backend());
    open(&mut controller, &mut state, "face_01");

    let mut replacement = state
        .session
        .as_ref()
        .expect("Session offen")
        .group
        .to_ljson();
    replacement.landmarks.points[4] = vec![Some(9.0), Some(9.0)];
    let path = dir.path().join("restore.ljson");
    std::fs::write(&path, write_ljson(&replacement).expect("Schreiben")).expect("Datei schreiben");

    controller
        .handle_intent(
            &mut state,
            AppIntent::RestoreRequested {
                path: path.display().to_string(),
            },
        )
        .expect("Restore erfolgreich");

    let group = &state.session.as_ref().expect("Session offen").group;
    assert_eq!(group.to_ljson(), replacement);
    assert!(state.has_unsaved_changes());

    controller
        .handle_intent(&mut state, AppIntent::UndoRequested)
        .expect("Undo erfolgreich");
    let group = &state.session.as_ref().expect("Session offen").group;
    assert!(group.landmarks()[4].is_empty());
    assert!(!state.has_unsaved_changes());
}

// ─── Beenden ─────────────────────────────────────────────────────────────────

#[test]
fn test_exit_without_changes_exits_immediately() {
    let mut controller = AppController::new();
    let mut state = memory_state(face_backend());
    open(&mut controller, &mut state, "face_01");

    controller
        .handle_intent(&mut state, AppIntent::ExitRequested)
        .expect("ExitRequested sollte ohne Fehler durchlaufen");
    assert!(state.should_exit);
    assert_eq!(state.command_log.entries().last(), Some(&AppCommand::RequestExit));
}

#[test]
fn test_exit_with_unsaved_changes_requires_confirmation() {
    let mut controller = AppController::new();
    let mut state = memory_state(face_backend());
    open(&mut controller, &mut state, "face_01");
    controller
        .handle_intent(
            &mut state,
            AppIntent::PointPlaced {
                point: DVec3::new(1.0, 1.0, 0.0),
            },
        )
        .expect("Insert erfolgreich");

    controller
        .handle_intent(&mut state, AppIntent::ExitRequested)
        .expect("ExitRequested");
    assert!(!state.should_exit);
    assert!(state.exit_confirmation_pending);

    controller
        .handle_intent(&mut state, AppIntent::ExitRequested)
        .expect("ExitRequested");
    assert!(state.should_exit);
}

#[test]
fn test_exit_warning_can_be_disabled() {
    let mut controller = AppController::new();
    let mut state = memory_state(face_backend());
    state.options.warn_unsaved_on_exit = false;
    open(&mut controller, &mut state, "face_01");
    controller
        .handle_command(
            &mut state,
            AppCommand::InsertLandmark {
                point: DVec3::new(1.0, 1.0, 0.0),
            },
        )
        .expect("Insert erfolgreich");

    controller
        .handle_command(&mut state, AppCommand::RequestExit)
        .expect("RequestExit");
    assert!(state.should_exit);
}

// ─── Signale & Fehler ────────────────────────────────────────────────────────

#[test]
fn test_insert_emits_enter_exit_change() {
    let mut controller = AppController::new();
    let mut state = memory_state(face_backend());
    open(&mut controller, &mut state, "face_01");
    assert_eq!(controller.take_signals(), vec![Signal::Change]);

    controller
        .handle_command(
            &mut state,
            AppCommand::InsertLandmark {
                point: DVec3::new(5.0, 5.0, 0.0),
            },
        )
        .expect("Insert erfolgreich");
    assert_eq!(
        controller.take_signals(),
        vec![Signal::AtomicEnter, Signal::AtomicExit, Signal::Change]
    );

    controller
        .handle_command(&mut state, AppCommand::Redo)
        .expect("Redo ohne Schritt ist kein Fehler");
    assert_eq!(controller.take_signals(), vec![Signal::NoOp]);
    assert!(!controller.atomic().is_active());
}

#[test]
fn test_commands_without_session_fail() {
    let mut controller = AppController::new();
    let mut state = memory_state(face_backend());

    let err = controller
        .handle_command(&mut state, AppCommand::Undo)
        .expect_err("Ohne Session kein Undo");
    assert!(err.to_string().contains("Kein Asset"));
    assert!(state.status_message.is_some());
}

#[test]
fn test_full_group_insert_reports_error() {
    let mut controller = AppController::new();
    let mut state = memory_state(face_backend());
    open(&mut controller, &mut state, "face_01");

    for i in 0..5 {
        controller
            .handle_command(
                &mut state,
                AppCommand::InsertLandmark {
                    point: DVec3::new(i as f64, 0.0, 0.0),
                },
            )
            .expect("Slot frei");
    }
    let result = controller.handle_command(
        &mut state,
        AppCommand::InsertLandmark {
            point: DVec3::new(9.0, 9.0, 0.0),
        },
    );
    assert!(result.is_err());
}

// ─── Skript ──────────────────────────────────────────────────────────────────

#[test]
fn test_script_session_end_to_end() {
    let mut controller = AppController::new();
    let mut state = memory_state(face_backend());

    let script = "\
# Zwei Augenpunkte setzen, einen löschen, rückgängig machen
open face_01
insert 10 10
insert 20 10
select 0 +
complete
bad
delete
undo
save
status
";

    let mut displays = 0;
    for line in script.lines() {
        match parse_script_line(line).expect("Zeile gültig") {
            None => {}
            Some(ScriptAction::Intent(intent)) => {
                // `bad` mit 3 selektierten ist ein No-op, kein Fehler
                controller
                    .handle_intent(&mut state, intent)
                    .expect("Intent erfolgreich");
            }
            Some(ScriptAction::Print | ScriptAction::Status) => displays += 1,
        }
    }

    assert_eq!(displays, 1);
    let session = state.session.as_ref().expect("Session offen");
    assert_eq!(session.group.selected_indices(), vec![0, 1]);
    assert!(!session.group.landmarks()[0].is_bad());
    assert!(session.group.landmarks()[2].is_empty());
    assert!(!state.has_unsaved_changes());
    assert!(session.summary().contains("2/5 gesetzt"));
}
