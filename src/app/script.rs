//! Zeilenbasierte Skript-Befehle für die Headless-Shell.
//!
//! Eine Zeile wird zu einem [`AppIntent`] oder einer reinen Anzeige-Aktion.
//! Leere Zeilen und `#`-Kommentare werden übersprungen.

use super::AppIntent;
use anyhow::{Context, Result, bail};
use glam::DVec3;

/// Ergebnis einer Skriptzeile
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptAction {
    /// Mutierender oder steuernder Intent
    Intent(AppIntent),
    /// Aktuellen Snapshot als LJSON ausgeben
    Print,
    /// Statuszeile ausgeben
    Status,
}

/// Parsed eine Skriptzeile. `Ok(None)` für leere Zeilen und Kommentare.
pub fn parse_script_line(line: &str) -> Result<Option<ScriptAction>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let mut parts = line.split_whitespace();
    let Some(keyword) = parts.next() else {
        return Ok(None);
    };
    let args: Vec<&str> = parts.collect();

    let intent = match (keyword, args.as_slice()) {
        ("open", [asset]) => AppIntent::OpenRequested {
            asset: asset.to_string(),
            template: None,
        },
        ("open", [asset, template]) => AppIntent::OpenRequested {
            asset: asset.to_string(),
            template: Some(template.to_string()),
        },
        ("close", []) => AppIntent::CloseRequested,
        ("insert", coords) => AppIntent::PointPlaced {
            point: parse_point(coords)?,
        },
        ("set", [index, coords @ ..]) => AppIntent::LandmarkPlaced {
            index: parse_index(index)?,
            point: parse_point(coords)?,
        },
        ("select", [index]) => AppIntent::LandmarkClicked {
            index: parse_index(index)?,
            additive: false,
        },
        ("select", [index, "+"]) => AppIntent::LandmarkClicked {
            index: parse_index(index)?,
            additive: true,
        },
        ("deselect", [index]) => AppIntent::LandmarkDeselectRequested {
            index: parse_index(index)?,
        },
        ("select-all", []) => AppIntent::SelectAllRequested,
        ("clear-selection", []) => AppIntent::ClearSelectionRequested,
        ("label", [name]) => AppIntent::LabelSelected {
            label: name.to_string(),
        },
        ("complete", []) => AppIntent::CompleteGroupsRequested,
        ("move", coords) => AppIntent::SelectionDragged {
            delta: parse_point(coords)?,
        },
        ("delete", []) => AppIntent::DeleteRequested,
        ("bad", []) => AppIntent::ToggleBadRequested,
        ("invisible", []) => AppIntent::ToggleInvisibleRequested,
        ("undo", []) => AppIntent::UndoRequested,
        ("redo", []) => AppIntent::RedoRequested,
        ("save", []) => AppIntent::SaveRequested,
        ("restore", [path]) => AppIntent::RestoreRequested {
            path: path.to_string(),
        },
        ("quit" | "exit", []) => AppIntent::ExitRequested,
        ("print", []) => return Ok(Some(ScriptAction::Print)),
        ("status", []) => return Ok(Some(ScriptAction::Status)),
        _ => bail!("Unbekannter Befehl oder falsche Argumente: '{}'", line),
    };

    Ok(Some(ScriptAction::Intent(intent)))
}

fn parse_index(text: &str) -> Result<usize> {
    text.parse()
        .with_context(|| format!("Ungültiger Index: '{}'", text))
}

/// 2 oder 3 endliche Koordinaten; fehlendes z = 0
fn parse_point(coords: &[&str]) -> Result<DVec3> {
    if !(2..=3).contains(&coords.len()) {
        bail!("Erwartet 2 oder 3 Koordinaten, erhalten {}", coords.len());
    }
    let mut values = [0.0; 3];
    for (value, text) in values.iter_mut().zip(coords) {
        let parsed: f64 = text
            .parse()
            .with_context(|| format!("Ungültige Koordinate: '{}'", text))?;
        if !parsed.is_finite() {
            bail!("Koordinate muss endlich sein: '{}'", text);
        }
        *value = parsed;
    }
    Ok(DVec3::from_array(values))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn intent(line: &str) -> AppIntent {
        match parse_script_line(line) {
            Ok(Some(ScriptAction::Intent(intent))) => intent,
            other => panic!("Intent erwartet für '{}', erhalten {:?}", line, other),
        }
    }

    #[test]
    fn parses_insert_in_2d_and_3d() {
        assert_eq!(
            intent("insert 1.5 -2"),
            AppIntent::PointPlaced {
                point: DVec3::new(1.5, -2.0, 0.0)
            }
        );
        assert_eq!(
            intent("  insert 1 2 3  "),
            AppIntent::PointPlaced {
                point: DVec3::new(1.0, 2.0, 3.0)
            }
        );
    }

    #[test]
    fn parses_set_and_additive_select() {
        assert_eq!(
            intent("set 4 10 20"),
            AppIntent::LandmarkPlaced {
                index: 4,
                point: DVec3::new(10.0, 20.0, 0.0)
            }
        );
        assert_eq!(
            intent("select 2 +"),
            AppIntent::LandmarkClicked {
                index: 2,
                additive: true
            }
        );
        assert_eq!(
            intent("select 2"),
            AppIntent::LandmarkClicked {
                index: 2,
                additive: false
            }
        );
    }

    #[test]
    fn parses_open_with_and_without_template() {
        assert_eq!(
            intent("open face_01"),
            AppIntent::OpenRequested {
                asset: "face_01".to_string(),
                template: None
            }
        );
        assert_eq!(
            intent("open face_01 ibug68"),
            AppIntent::OpenRequested {
                asset: "face_01".to_string(),
                template: Some("ibug68".to_string())
            }
        );
    }

    #[test]
    fn skips_blank_lines_and_comments() {
        assert_eq!(parse_script_line("").ok(), Some(None));
        assert_eq!(parse_script_line("   # Kommentar").ok(), Some(None));
    }

    #[test]
    fn display_actions_are_not_intents() {
        assert_eq!(parse_script_line("print").ok(), Some(Some(ScriptAction::Print)));
        assert_eq!(parse_script_line("status").ok(), Some(Some(ScriptAction::Status)));
    }

    #[test]
    fn rejects_bad_arguments() {
        assert!(parse_script_line("insert 1").is_err());
        assert!(parse_script_line("insert 1 2 3 4").is_err());
        assert!(parse_script_line("insert a b").is_err());
        assert!(parse_script_line("select -1").is_err());
        assert!(parse_script_line("undo now").is_err());
        assert!(parse_script_line("fly").is_err());
    }

    #[test]
    fn rejects_non_finite_coordinates() {
        assert!(parse_script_line("insert nan 1").is_err());
        assert!(parse_script_line("set 0 1 inf").is_err());
        assert!(parse_script_line("move -inf 0").is_err());
        assert!(parse_script_line("insert 1 1e400").is_err());
    }
}
