pub mod class_list;
pub mod dispatch;
pub mod document;
pub mod element;
pub mod event;
pub mod html;

pub use class_list::ClassList;
pub use dispatch::{Page, ReadyState};
pub use document::Document;
pub use element::Element;
pub use event::{ClickEvent, MouseButton};
