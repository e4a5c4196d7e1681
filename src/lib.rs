//! Collects `TODO:` and `FIXME:` markers from the active document into a
//! task panel that can navigate to each marker or dismiss it.
//!
//! The pieces compose in one direction: [`ops::extract`] scans a
//! [`model::Document`], [`ops::working_set::WorkingSet`] holds what is left,
//! and [`ops::panel::Session`] renders it and handles the two inbound
//! commands. Hosts plug in through [`io::host::Host`] and
//! [`io::host::Surface`].

pub mod cli;
pub mod io;
pub mod model;
pub mod ops;
pub mod tui;
pub mod util;
