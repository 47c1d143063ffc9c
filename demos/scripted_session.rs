//! Beispiel: Skriptgesteuerte Annotation mit In-Memory-Backend.
//! Aufruf: cargo run --example scripted_session

use landmark_editor::{
    AppController, AppState, EditorOptions, MemoryBackend, ScriptAction, Template,
    parse_script_line, write_ljson,
};

const TEMPLATE: &str = r#"
[[groups]]
label = "left_eye"
points = 3
connectivity = [[0, 1], [1, 2], [2, 0]]

[[groups]]
label = "mouth"
points = 2
connectivity = [[0, 1]]
"#;

const SCRIPT: &str = "\
open face_01 face
insert 120 88
insert 131 84
insert 141 88
select 1
complete
move 2 -1
status
undo
set 3 128 160
select 3
invisible
save
print
";

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let template = Template::from_toml_str(TEMPLATE)?;
    let backend = MemoryBackend::new().with_template("face", template);
    let mut state = AppState::with_backend(EditorOptions::default(), Box::new(backend));
    let mut controller = AppController::new();

    for line in SCRIPT.lines() {
        println!("> {}", line);
        match parse_script_line(line)? {
            None => {}
            Some(ScriptAction::Intent(intent)) => {
                controller.handle_intent(&mut state, intent)?;
                println!("  Signale: {:?}", controller.take_signals());
            }
            Some(ScriptAction::Status) => {
                if let Some(session) = state.session.as_ref() {
                    println!("  {}", session.summary());
                }
            }
            Some(ScriptAction::Print) => {
                if let Some(session) = state.session.as_ref() {
                    print!("{}", write_ljson(&session.group.to_ljson())?);
                }
            }
        }
    }

    println!("Commands ausgeführt: {}", state.command_log.total());
    for command in state.command_log.tail(3) {
        println!("  zuletzt: {:?}", command);
    }
    Ok(())
}
