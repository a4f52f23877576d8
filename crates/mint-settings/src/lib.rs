//! Admin settings and subscriber capture.
//!
//! The admin surface owns two settings keys - the download link handed to
//! subscribers and the free-text status label shown while the sale is
//! closed - plus the list of captured subscribers. Both stores follow the
//! same contract: GET returns the stored value or a documented default,
//! PUT is replace-or-insert.

pub mod store;
pub mod subscribers;

pub use store::{
    FsSettingsStore, MemorySettingsStore, SettingsStore, DEFAULT_MINTING_STATUS,
    KEY_DOWNLOAD_LINK, KEY_MINTING_STATUS,
};
pub use subscribers::{
    FsSubscriberStore, MemorySubscriberStore, SubscribeOutcome, Subscriber, SubscriberStore,
    SubscriptionGateway,
};
