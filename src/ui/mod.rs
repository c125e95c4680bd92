//! Leptos components for the landing site

pub mod common;
pub mod icon;
pub mod pages;
pub mod theme;
pub mod waitlist;

pub use icon::{Icon, icons};
pub use theme::{ThemeContext, ThemeMode, provide_theme_context, use_theme_context};
pub use waitlist::{
    WaitlistButton, WaitlistContext, WaitlistModal, provide_waitlist_context,
    use_waitlist_context,
};
