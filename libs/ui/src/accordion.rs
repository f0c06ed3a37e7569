/// FAQ list where at most one answer is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqAccordion {
    len: usize,
    open: Option<usize>,
}

impl FaqAccordion {
    pub fn new(len: usize) -> Self {
        Self { len, open: None }
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Opens `index`, closing whichever item was open. Toggling the open
    /// item closes it.
    pub fn toggle(&mut self, index: usize) {
        if index >= self.len {
            return;
        }
        self.open = if self.is_open(index) { None } else { Some(index) };
    }
}
