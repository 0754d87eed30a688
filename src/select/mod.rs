//! Dropdown selection control: single or multiple, keyboard and pointer driven.

pub mod component;
pub mod controller;
pub mod event;
pub mod keyboard;
pub mod option;
pub mod scroll;
pub mod tokens;
pub mod value;

pub use component::Select;
pub use controller::SelectController;
pub use event::{EventTarget, SelectEvent, SelectKey};
pub use keyboard::{ControlId, KeyListeners, ListenerGuard};
pub use option::{MatchBy, OptionValue, SelectOption};
pub use scroll::{NoScroll, PanelViewport, ScrollIntoView};
pub use tokens::{Token, ValueDisplay, render_value};
pub use value::{ClosePolicy, OptionState, SelectMode, SelectProps, SelectValue};
