mod text_box;

pub use text_box::TextBoxView;
