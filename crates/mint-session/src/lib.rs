//! Wallet session lifecycle.
//!
//! The "persist last wallet, silently restore on load" pattern lives here as
//! an explicit store with a defined lifecycle - written on connect, cleared
//! on disconnect, read once at startup - rather than ambient global state.
//!
//! - [`SessionStore`]: durable storage for the last-selected provider name
//! - [`WalletSessionManager`]: connect / restore / disconnect against a
//!   [`WalletProvider`](mint_chain::WalletProvider)
//!
//! Session failures are never surfaced as errors: a failed or cancelled
//! selection just leaves the session empty.

pub mod manager;
pub mod store;

pub use manager::{WalletSession, WalletSessionManager};
pub use store::{FsSessionStore, MemorySessionStore, PersistedSession, SessionStore};
