pub mod error_view;

pub use error_view::ErrorView;
