/*!
 * Open-tag stack.
 *
 * Marker text does not require strict nesting: `{a}{b}{/a}{/b}` is valid and
 * closes `a` first. Closing therefore removes the most recent entry with a
 * matching name, wherever it sits, rather than popping the top.
 */

/// Ordered list of currently open tag names, borrowed from the input
#[derive(Debug, Default, Clone)]
pub struct OpenTagStack<'a> {
    entries: Vec<&'a str>,
}

impl<'a> OpenTagStack<'a> {
    /// Create an empty stack
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Record a newly opened tag
    pub fn push(&mut self, name: &'a str) {
        self.entries.push(name);
    }

    /// Close the most recently opened tag called `name`
    ///
    /// Returns `false` and leaves the stack untouched when no such tag is open.
    pub fn close(&mut self, name: &str) -> bool {
        match self.entries.iter().rposition(|open| *open == name) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Open tags, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &&'a str> {
        self.entries.iter()
    }

    /// Take every remaining tag, most recently opened first
    pub fn drain_innermost_first(&mut self) -> impl Iterator<Item = &'a str> + '_ {
        self.entries.drain(..).rev()
    }
}
