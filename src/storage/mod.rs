//! Local client storage.
//!
//! The portal keeps its client-side state under a single storage
//! directory:
//!
//! ```text
//! storage/
//! ├── config.toml     # Portal configuration
//! └── session.json    # Client session state (cleared on logout)
//! ```

pub mod local;

pub use local::LocalStorage;
