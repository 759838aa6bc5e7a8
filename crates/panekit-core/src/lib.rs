#![forbid(unsafe_code)]

//! Core: geometry primitives and pointer events shared by panekit crates.
//!
//! # Role in panekit
//! `panekit-core` is the boundary with the host UI runtime. The host measures
//! boxes (reported as [`geometry::Rect`]) and dispatches pointer input
//! (reported as [`event::MouseEvent`]); `panekit-layout` consumes both and
//! never talks to the host directly.

pub mod event;
pub mod geometry;
