//! Port definitions: traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the page.
//! They are defined here (in `app`) so that both the use-case layer and the
//! adapter layer can depend on them without creating circular dependencies.
//!
//! Everything runs on the single UI thread, so futures returned by ports are
//! not required to be `Send` and adapters may hold `Rc`/`RefCell` state.

pub mod clock;
pub mod form_host;
pub mod overlay;
pub mod page;
pub mod transport;

pub use clock::Clock;
pub use form_host::FormHost;
pub use overlay::OverlaySurface;
pub use page::Page;
pub use transport::Transport;
