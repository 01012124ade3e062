pub mod left_sidebar;
pub mod live;
pub mod navbar;
pub mod right_sidebar;
