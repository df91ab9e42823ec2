//! Modal overlays drawn on top of the search screen

/// An overlay that captures input while it is on top
#[derive(Debug, Clone, PartialEq)]
pub enum Modal {
    QuitConfirm,
    Help,
}

/// Modals render bottom to top; only the top one receives keys
#[derive(Debug, Default)]
pub struct ModalStack {
    stack: Vec<Modal>,
}

impl ModalStack {
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    /// Push a modal unless it is already on top
    pub fn open(&mut self, modal: Modal) {
        if self.top() != Some(&modal) {
            self.stack.push(modal);
        }
    }

    pub fn pop(&mut self) -> Option<Modal> {
        self.stack.pop()
    }

    pub fn top(&self) -> Option<&Modal> {
        self.stack.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Modal> {
        self.stack.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_and_pop() {
        let mut stack = ModalStack::new();
        assert!(stack.is_empty());

        stack.open(Modal::Help);
        stack.open(Modal::QuitConfirm);
        assert_eq!(stack.top(), Some(&Modal::QuitConfirm));

        assert_eq!(stack.pop(), Some(Modal::QuitConfirm));
        assert_eq!(stack.pop(), Some(Modal::Help));
        assert!(stack.top().is_none());
    }

    #[test]
    fn test_open_same_modal_twice_is_deduplicated() {
        let mut stack = ModalStack::new();
        stack.open(Modal::Help);
        stack.open(Modal::Help);
        assert_eq!(stack.iter().count(), 1);
    }
}
