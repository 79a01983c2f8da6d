//! Ready-made widgets for the **vitrine** component showcase.
//!
//! Every widget in this crate implements [`vitrine_core::Component`], so it
//! can be embedded inside any [`vitrine_core::Model`] and composed freely
//! within [`ratatui`] layouts. Widgets resolve their colors from a
//! [`vitrine_core::theme::Theme`] through their `*Style::themed`
//! constructors; the plain `Default` styles stand on their own for quick
//! prototyping.
//!
//! # Widgets
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`avatar`] | Initials avatar for list items |
//! | [`badge`] | Compact status badge with themed variants |
//! | [`button`] | Focusable push button with a disabled state |
//! | [`list_box`] | Selectable list with custom item presentation |
//! | [`notification`] | Overlay notification with positioning and auto-close |
//! | [`tabs`] | Horizontal tab bar with overflow scrolling |
//! | [`time_picker`] | Steppable time-of-day field |
//! | [`upload`] | File upload list with a replaceable string table |

pub mod avatar;
pub mod badge;
pub mod button;
pub mod list_box;
pub mod notification;
pub mod tabs;
pub mod time_picker;
pub mod upload;
