pub mod buffer;
pub mod document;
pub mod element;
pub mod event;
pub mod fade;
pub mod hit;
pub mod layout;
pub mod menu;
pub mod render;
pub mod terminal;
pub mod text;
pub mod timer;
pub mod types;

pub use buffer::{Buffer, Cell};
pub use document::Document;
pub use element::Element;
pub use event::{translate_events, Event, Key, Modifiers, MouseButton};
pub use fade::{Easing, FadeDirection, FadeState, CLASS_CLOSING, CLASS_OPENING};
pub use hit::hit_test;
pub use layout::{layout, LayoutResult, Rect};
pub use menu::{
    Menu, MenuConfig, MenuError, TogglePhase, ATTR_DISPLAYED, CLASS_TRIGGER_ACTIVE,
    DEFAULT_BACKDROP_ID, DEFAULT_TRIGGER_ID,
};
pub use render::render;
pub use terminal::Terminal;
pub use timer::Deadline;
pub use types::*;
