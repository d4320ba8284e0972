pub mod app;
pub mod auth_form;
pub mod dashboard;
pub mod game_view;
pub mod inventory_view;
pub mod shop_view;
