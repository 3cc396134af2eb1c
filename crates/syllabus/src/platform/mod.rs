//! Platform services the views depend on.
//!
//! Each platform provides the same surface, so components never carry
//! `cfg` blocks of their own:
//!
//! - [`PlatformFileSaver`]: hands a downloaded file to the user
//! - [`PlatformConfirmer`]: asks before destructive actions
//! - [`sleep_ms`]: timer for delayed navigation
//! - [`stored_token`] / [`forget_token`]: the bearer token the login flow left behind
//!
//! - **Web**: object URL + anchor click, `window.confirm`, `gloo-timers`, `localStorage`
//! - **Desktop**: `rfd` save/message dialogs, `tokio` timer and file write, environment

#[cfg(target_arch = "wasm32")]
mod web;
#[cfg(target_arch = "wasm32")]
pub use web::{forget_token, sleep_ms, stored_token, PlatformConfirmer, PlatformFileSaver};

#[cfg(not(target_arch = "wasm32"))]
mod desktop;
#[cfg(not(target_arch = "wasm32"))]
pub use desktop::{forget_token, sleep_ms, stored_token, PlatformConfirmer, PlatformFileSaver};
