//! Scroll-reactive header and mobile navigation.
//!
//! The state machines (`state`, `frame`, `menu`, `dispatch`) are plain Rust;
//! `coordinator` ties them to a [`coordinator::Page`] and `web` implements
//! that page over the live document.

pub mod coordinator;
pub mod dispatch;
pub mod frame;
pub mod menu;
pub mod state;
pub mod web;
