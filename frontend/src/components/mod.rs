pub mod contest_card;
pub mod contest_tabs;
pub mod platform_filter;
pub mod toast;
