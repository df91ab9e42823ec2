//! UI state - presentation state separate from search data

/// Which part of the screen receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Input,
    Results,
    Detail,
}

impl Focus {
    pub fn name(&self) -> &str {
        match self {
            Focus::Input => "Search",
            Focus::Results => "Results",
            Focus::Detail => "Recipe",
        }
    }
}
