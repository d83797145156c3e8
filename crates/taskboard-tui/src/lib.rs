pub mod app;
pub mod card;
pub mod components;
pub mod controller;
pub mod dialog;
pub mod document;
pub mod drag;
pub mod events;
pub mod modal;
pub mod selection;
pub mod theme;
pub mod ui;

pub use app::App;
pub use card::render_card;
pub use controller::{BoardController, EventResponse, UiEvent};
pub use document::{Binding, CardElement, Document, ElementId, LaneContainer};
pub use drag::{DragDropController, DropOutcome};
pub use modal::{Modal, ModalField};
