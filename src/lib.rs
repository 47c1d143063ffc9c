//! Landmark Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod backend;
pub mod core;
pub mod ljson;
pub mod shared;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, ScriptAction, Session, parse_script_line,
};
pub use backend::{FileBackend, LandmarkBackend, MemoryBackend};
pub use core::{
    AtomicCoordinator, Dimensionality, LJson, LJsonLabel, LJsonLandmarks, Landmark,
    LandmarkCollection, LandmarkCollectionMut, LandmarkError, LandmarkFlags, LandmarkGroup,
    LandmarkLabel, Signal, Template, TemplateGroup, Tracker,
};
pub use shared::EditorOptions;
pub use ljson::{parse_ljson, write_ljson};
