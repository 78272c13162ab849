//! Modal Presentation State
//!
//! One dialog per view. Closing only hides it; the last title and body
//! stay around until the next `open`.

/// Body of the modal, rendered by the surface
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModalBody {
    /// Paragraphs of text
    pub paragraphs: Vec<String>,
    /// Project the modal describes, if any (index into the content list)
    pub project: Option<usize>,
}

impl ModalBody {
    pub fn text(paragraphs: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            paragraphs: paragraphs.into_iter().map(Into::into).collect(),
            project: None,
        }
    }

    #[must_use]
    pub fn for_project(mut self, index: usize) -> Self {
        self.project = Some(index);
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModalState {
    is_open: bool,
    title: String,
    body: ModalBody,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, title: impl Into<String>, body: ModalBody) {
        self.title = title.into();
        self.body = body;
        self.is_open = true;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &ModalBody {
        &self.body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_close() {
        let mut modal = ModalState::new();
        assert!(!modal.is_open());

        modal.open("Mycel OS", ModalBody::text(["Real-time logistics."]).for_project(1));
        assert!(modal.is_open());
        assert_eq!(modal.title(), "Mycel OS");
        assert_eq!(modal.body().project, Some(1));

        modal.close();
        assert!(!modal.is_open());
        assert_eq!(modal.title(), "Mycel OS");
    }

    #[test]
    fn test_reopen_replaces_content() {
        let mut modal = ModalState::new();
        modal.open("a", ModalBody::text(["one"]));
        modal.open("b", ModalBody::text(["two", "three"]));
        assert_eq!(modal.title(), "b");
        assert_eq!(modal.body().paragraphs.len(), 2);
        assert_eq!(modal.body().project, None);
    }
}
