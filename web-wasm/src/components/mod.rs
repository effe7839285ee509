pub mod header;
pub mod upload_form;
pub mod loading_indicator;
pub mod results_panel;
