//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::OpenRequested { asset, template } => {
            let template = template.unwrap_or_else(|| state.options.default_template.clone());
            vec![AppCommand::OpenAsset { asset, template }]
        }
        AppIntent::CloseRequested => vec![AppCommand::CloseAsset],
        AppIntent::PointPlaced { point } => vec![AppCommand::InsertLandmark { point }],
        AppIntent::LandmarkPlaced { index, point } => {
            vec![AppCommand::SetLandmark { index, point }]
        }
        AppIntent::LandmarkClicked { index, additive } => {
            vec![AppCommand::SelectLandmark { index, additive }]
        }
        AppIntent::LandmarkDeselectRequested { index } => {
            vec![AppCommand::DeselectLandmark { index }]
        }
        AppIntent::SelectAllRequested => vec![AppCommand::SelectAll],
        AppIntent::ClearSelectionRequested => vec![AppCommand::ClearSelection],
        AppIntent::LabelSelected { label } => vec![AppCommand::SelectLabel { label }],
        AppIntent::CompleteGroupsRequested => vec![AppCommand::CompleteGroups],
        AppIntent::SelectionDragged { delta } => {
            // Leerer Drag erzeugt keinen Undo-Schritt
            if delta == glam::DVec3::ZERO {
                Vec::new()
            } else {
                vec![AppCommand::MoveSelected { delta }]
            }
        }
        AppIntent::DeleteRequested => vec![AppCommand::DeleteSelected],
        AppIntent::ToggleBadRequested => vec![AppCommand::ToggleBadOnSelected],
        AppIntent::ToggleInvisibleRequested => vec![AppCommand::ToggleInvisibleOnSelected],
        AppIntent::UndoRequested => vec![AppCommand::Undo],
        AppIntent::RedoRequested => vec![AppCommand::Redo],
        AppIntent::SaveRequested => {
            if state.session.is_some() {
                vec![AppCommand::Save]
            } else {
                log::debug!("Speichern ohne geöffnetes Asset ignoriert");
                Vec::new()
            }
        }
        AppIntent::RestoreRequested { path } => vec![AppCommand::RestoreFromFile { path }],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}
