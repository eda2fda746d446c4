pub mod document;
pub mod element;
pub mod event;
pub mod render;

pub use document::Document;
pub use element::{find_element, find_element_mut, Content, Element, NodePath};
pub use event::Event;
pub use render::to_html;
