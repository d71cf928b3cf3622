// Components module - reusable UI building blocks
//
// Shell components are rendered in every view:
// - Title bar: app name, version, theme
// - Status bar: uptime, view, pending operation, tape count
// - Toast: transient notification overlay
//
// The calculator view composes the display, keypad, tape and logs panels.
// Each component is a focused, single-responsibility module.

pub mod display;
pub mod keypad;
pub mod logs_panel;
pub mod status_bar;
pub mod tape_panel;
pub mod title_bar;
pub mod toast;

pub use toast::Toast;
