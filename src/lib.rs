//! registry-web - account settings frontend for the package registry
//!
//! Browser-side behaviour of the settings pages, compiled to WebAssembly:
//! the collaborator / ownership dialogs with API token creation, and the
//! Google sign-in callback.
//!
//! ## Architecture
//!
//! - **Core** (all targets): configuration, cookie parsing, the sign-in
//!   decision, token requests and the dialog controller. The controller
//!   drives view traits, so it is tested natively with fakes.
//! - **DOM** (wasm32 only): `dom` binds the controller to the live page,
//!   `webshim` reaches jQuery/Foundation and `gapi`, `wasm_api` exports the
//!   JS-callable functions.
//!
//! ## Usage
//!
//! ```bash
//! trunk build --release      # wasm32 bundle with the `registry-web` binary
//! cargo test                 # core modules, natively
//! ```

// Core modules (available on all platforms)
pub mod config;
pub mod constants;
pub mod cookie;
pub mod debug;
pub mod invitations;
pub mod signin;
pub mod timeago;
pub mod tokens;

// Logging / panic hooks per target
pub mod platform;

// Browser bridges and DOM wiring (wasm32 only)
#[cfg(target_arch = "wasm32")]
pub mod dom;
pub mod webshim;
#[cfg(target_arch = "wasm32")]
pub mod wasm_api;

// Re-export commonly used types
pub use config::Config;
pub use invitations::{Dialog, DialogView, Invitations};
pub use signin::{SignInAction, SignInHost, SignedInUser};
pub use tokens::{HttpTokenApi, Token, TokenApi, TokenApiError, TokenListView, TokenName};
