//! Chain collaborator seams for the mint-console workspace.
//!
//! The storefront controller never talks to a node directly; it goes through
//! the traits defined here:
//!
//! - [`ChainStateReader`]: the independent read-only queries (supply, phase
//!   flags, per-phase costs)
//! - [`ChainWriter`]: the three phase-specific mint write calls
//! - [`WalletProvider`]: provider selection and network checking
//!
//! Two backends ship with the workspace: [`SimulatedChain`], a local
//! JSON-state implementation used by the CLI for rehearsal, and the mock
//! implementations in [`mock`] used by tests. A production deployment plugs
//! its RPC-backed implementations into the same traits.

pub mod mock;
pub mod reader;
pub mod sim;
pub mod wallet;
pub mod writer;

pub use reader::ChainStateReader;
pub use sim::{SimChainState, SimulatedChain};
pub use wallet::{NetworkCheck, ProviderSession, WalletProvider};
pub use writer::{ChainWriter, TxReceipt};
