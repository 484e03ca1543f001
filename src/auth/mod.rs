//! Sign-in redirect initiation.
//!
//! # Data Flow
//! ```text
//! sign_in()
//!     → busy flag set (guard)
//!     → GET <backend><oauth_url_path> → authorization URL
//!     → Navigator::navigate(url)
//!     → busy flag cleared on every exit path
//! ```

pub mod redirect;

pub use redirect::{AuthError, BusyFlag, BusyGuard, ConsoleNavigator, Navigator, SignIn};
