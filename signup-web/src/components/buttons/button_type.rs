#[derive(Clone)]
pub enum ButtonType {
    Submit,
}

impl ButtonType {
    fn color(&self) -> (&'static str, &'static str) {
        match self {
            // keep literal bg- and hover:bg- classes
            // else tailwind will not add them to css
            ButtonType::Submit => ("bg-purple-600", "hover:bg-purple-700"),
        }
    }

    pub fn button_text(&self) -> &'static str {
        match self {
            ButtonType::Submit => "Submit",
        }
    }

    pub fn button_class(&self) -> String {
        let (color_normal, color_hover) = self.color();
        format!(
            "inline-block px-3 {} {} text-white font-bold py-2 rounded",
            color_normal, color_hover
        )
    }
}
