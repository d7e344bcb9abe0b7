pub mod anchor;
pub mod back_to_top;
pub mod field;
pub mod gallery;
pub mod hero;
pub mod loading;
pub mod menu;
pub mod navbar;
pub mod newsletter;
pub mod reservation;
