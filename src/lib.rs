// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Hover-triggered peek-a-boo animation and priority icon ordering for web
//! front-ends.
//!
//! Two independent pieces live here:
//!
//! - [`animation::BunAnimation`] - a hover-driven state machine that plays a
//!   fixed blink / peek / hold / descend choreography against a caller
//!   supplied clock and exposes [`animation::AnimationState`] snapshots to a
//!   renderer
//! - [`icons::IconOrderer`] - orders named icons with a fixed priority prefix
//!   followed by a freshly shuffled remainder
//!
//! [`options::Options`] holds the timings and priority list and round-trips
//! through TOML. With the `web` feature, the `web` module exposes the
//! sequencer to JavaScript.

pub mod animation;
pub mod error;
pub mod icons;
pub mod options;
pub mod util;
#[cfg(feature = "web")]
pub mod web;

pub use animation::{AnimationState, BunAnimation, Phase};
pub use error::BunpeekError;
pub use icons::{order_icons, Icon, IconOrderer, IconSet};
pub use options::Options;
pub use util::shuffle;
