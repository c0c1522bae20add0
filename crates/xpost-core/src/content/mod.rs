mod events;
mod loader;
mod page;

pub use events::{subscribe, ContentEvent, ContentEventSink, ContentSubscription, SessionId};
pub use loader::PageLoader;
pub use page::Page;
