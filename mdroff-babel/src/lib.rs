//! Markdown to roff conversion
//!
//!     This crate converts a small, pragmatic subset of Markdown into roff markup for one of four
//!     macro packages: man, mdoc, mm and mom. The output is meant for groff/nroff and for
//!     display through man(1).
//!
//!     This is a pure lib, that is, it powers the md2roff cli but is shell agnostic: no code here
//!     should suppose a shell environment, be it std print, env vars etc. Reading a file is the one
//!     exception, see Document::from_path.
//!
//! Architecture
//!
//!     Conversion is a single pass. The Markdown transducer (./markdown) scans the source one
//!     character at a time and raises semantic events (./event.rs): "paragraph ended", "list item
//!     opened", "section header". A backend (./formats/<dialect>) maps each event to lines of
//!     markup. The transducer never knows which dialect it is writing and a backend never sees
//!     Markdown.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── event.rs                # Semantic events and inline tokens
//!     ├── backend.rs              # Backend trait and the line writer
//!     ├── dialect.rs              # Dialect enum, resolves to a backend
//!     ├── document.rs             # Input documents
//!     ├── convert.rs              # Preamble + transducer driver
//!     ├── markdown
//!     │   └── transducer.rs       # The scanner
//!     ├── formats
//!     │   ├── <dialect>
//!     │   │   └── mod.rs          # Backend implementation
//!     │   └── common              # Helpers shared by backends
//!     ├── common                  # Cursor, list stack, whitespace squeezer
//!     └── lib.rs
//!
//! Testing
//!     tests
//!     ├── dialects
//!     │   └── <dialect>.rs
//!     ├── fixtures
//!     │   └── kitchensink.md
//!     ├── properties.rs
//!     └── scenarios.rs
//!
//!     Note that rust does not by default discover tests in subdirectories, so we need to include these
//!     in the mod.
//!
//! Core Algorithms
//!
//!     Two pieces carry the weight. The whitespace squeezer (./common/squeeze.rs) decides the
//!     spacing of every text line: a run of whitespace survives as one space only when it touches
//!     a letter or digit. The list stack (./common/list_stack.rs) tracks open lists, their kind,
//!     indentation and item counter; it is bounded at 32 levels and only the transducer mutates it.
//!
//! Dialects
//!
//!     The set of dialects is closed. Dialect (./dialect.rs) is an enum, and every backend matches
//!     every event exhaustively, so adding an event is a compile error until each dialect decides
//!     what to write for it.
//!
pub mod backend;
pub mod common;
pub mod convert;
pub mod dialect;
pub mod document;
pub mod error;
pub mod event;
pub mod formats;
pub mod markdown;

pub use backend::{Backend, RoffWriter};
pub use convert::{transform, Converter, RenderOptions};
pub use dialect::Dialect;
pub use document::Document;
pub use error::{ConvertError, UnknownDialect};
