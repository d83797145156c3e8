use taskboard_core::InputState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalField {
    #[default]
    Title,
    Description,
}

/// The add-task form. Its only control states are open and closed.
#[derive(Debug, Clone, Default)]
pub struct Modal {
    open: bool,
    focus: ModalField,
    pub title: InputState,
    pub description: InputState,
}

impl Modal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
        self.focus = ModalField::Title;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open();
        }
    }

    pub fn focus(&self) -> ModalField {
        self.focus
    }

    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            ModalField::Title => ModalField::Description,
            ModalField::Description => ModalField::Title,
        };
    }

    pub fn focused_input_mut(&mut self) -> &mut InputState {
        match self.focus {
            ModalField::Title => &mut self.title,
            ModalField::Description => &mut self.description,
        }
    }

    pub fn set_inputs(&mut self, title: &str, description: &str) {
        self.title.set(title);
        self.description.set(description);
    }

    pub fn clear_inputs(&mut self) {
        self.title.clear();
        self.description.clear();
    }
}
