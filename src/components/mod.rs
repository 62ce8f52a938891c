//! Page features, one module each. Every feature's `install` wires itself
//! to the page independently and fails without affecting the others.

pub mod counters;
pub mod cursor;
pub mod mobile_menu;
pub mod nav_highlight;
pub mod particle_field;
pub mod scroll_reveal;
pub mod theme;
