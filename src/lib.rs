//! folio — terminal portfolio viewer
//!
//! Loads a JSON portfolio document and presents it as an interactive
//! terminal page: a hero section with a typing-effect headline, a project
//! browser with category filter and text search, a project detail modal,
//! and a (simulated) contact form.
//!
//! The typing animator is the heart of the crate and is fully decoupled
//! from the terminal:
//!
//! ```
//! use folio::animator::{FixedJitter, RecordingSurface, TypingAnimator};
//!
//! let mut animator = TypingAnimator::new(vec!["Hi".into()]).unwrap();
//! let mut surface = RecordingSurface::new();
//! let mut jitter = FixedJitter::zero();
//!
//! for _ in 0..3 {
//!     animator.step(&mut surface, &mut jitter);
//! }
//! assert_eq!(surface.renders(), &["", "H", "Hi"]);
//! ```

pub mod animator;
pub mod cli;
pub mod config;
pub mod portfolio;
pub mod theme;
pub mod tui;

pub use config::Config;
