pub mod about;
pub mod backgrounds;
pub mod contact;
pub mod experience;
pub mod footer;
pub mod hero;
pub mod navbar;
pub mod projects;
pub mod skills;
pub mod theme_switcher;
pub mod ui;
