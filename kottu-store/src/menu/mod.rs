//! Menu catalog state and fetch pipeline

pub mod mock;
pub mod normalize;
pub mod service;
pub mod state;

pub use normalize::{FALLBACK_IMAGE, NormalizedMenu};
pub use service::{MenuApi, MenuService};
pub use state::{MenuAction, MenuState, reduce};
