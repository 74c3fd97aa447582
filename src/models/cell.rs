/// State of one module while a matrix is under construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    /// Not yet written by any stage
    #[default]
    Unresolved,
    /// Dark module
    Dark,
    /// Light module
    Light,
}

impl Cell {
    /// Dark for `true`, light for `false`
    pub fn from_dark(dark: bool) -> Self {
        if dark { Cell::Dark } else { Cell::Light }
    }

    /// Whether any stage has written this cell
    pub fn is_resolved(&self) -> bool {
        !matches!(self, Cell::Unresolved)
    }

    /// `Some(true)` for dark, `Some(false)` for light
    pub fn is_dark(&self) -> Option<bool> {
        match self {
            Cell::Unresolved => None,
            Cell::Dark => Some(true),
            Cell::Light => Some(false),
        }
    }

    /// Swap dark and light; unresolved stays unresolved
    pub fn inverted(self) -> Self {
        match self {
            Cell::Dark => Cell::Light,
            Cell::Light => Cell::Dark,
            Cell::Unresolved => Cell::Unresolved,
        }
    }
}
