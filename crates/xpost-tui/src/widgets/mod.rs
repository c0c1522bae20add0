mod control_bar;
mod feed_list;
mod floating_card;
mod page_view;
mod popup;
mod status_bar;
mod toolbar;

pub use control_bar::ControlBarWidget;
pub use feed_list::FeedListWidget;
pub use floating_card::FloatingCardWidget;
pub use page_view::PageViewWidget;
pub use popup::PopupWidget;
pub use status_bar::StatusBarWidget;
pub use toolbar::toolbar_line;
