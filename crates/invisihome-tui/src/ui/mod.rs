//! Terminal UI module using ratatui.
//!
//! This module provides the TUI rendering and input handling:
//!
//! - `render`: Main frame rendering, layout and overlays
//! - `input`: Keyboard event handling
//! - `styles`: Color schemes and text styling
//! - `landing`: The signed-out page with the login/signup form
//! - `tabs`: Signed-in pages (dashboard, about)

pub mod input;
pub mod landing;
pub mod render;
pub mod styles;
pub mod tabs;
