pub mod admin_page;
pub mod category_filter;
pub mod content_fields;
pub mod home_page;
pub mod navbar;
pub mod portfolio_page;
pub mod project_card;
pub mod project_detail;
pub mod project_form;
