mod validation_status_view;

pub use validation_status_view::ValidationStatusView;
