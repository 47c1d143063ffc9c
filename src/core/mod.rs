//! Core-Domänentypen: Landmarks, Labels, LandmarkGroup und Undo-Tracker.

pub mod atomic;
pub mod collection;
pub mod error;
pub mod label;
/// Einzelner Landmark mit Position, Selektion und Flags
pub mod landmark;
pub mod landmark_group;
pub mod snapshot;
pub mod template;
pub mod tracker;

pub use atomic::{AtomicCoordinator, Signal};
pub use collection::{LandmarkCollection, LandmarkCollectionMut};
pub use error::LandmarkError;
pub use label::{LabelView, LabelViewMut, LandmarkLabel};
pub use landmark::{Dimensionality, Landmark, LandmarkDiff, LandmarkFlags, LandmarkValue};
pub use landmark_group::{GroupTracker, LandmarkGroup};
pub use snapshot::{LJSON_VERSION, LJson, LJsonLabel, LJsonLandmarks};
pub use template::{Template, TemplateGroup};
pub use tracker::{Reconcile, Revision, Tracker};
