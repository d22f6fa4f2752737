pub mod bookmarks;
pub mod contests;
