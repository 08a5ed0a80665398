#![deny(warnings)]

// Buffered view over an iterator. Items consumed since the last
// extract/ignore form the current lexeme and can be backtracked over.
pub struct Scanner<I: Iterator> {
    src: I,
    buf: Vec<I::Item>,
    pos: usize,
}

impl<I> Iterator for Scanner<I> where I: Iterator, I::Item: Clone {
    type Item = I::Item;
    fn next(&mut self) -> Option<Self::Item> {
        if !self.fill(self.pos + 1) {
            return None;
        }
        self.pos += 1;
        self.curr()
    }
}

impl<I> Scanner<I> where I: Iterator, I::Item: Clone {
    pub fn new(source: I) -> Scanner<I> {
        Scanner{src: source, buf: Vec::new(), pos: 0}
    }

    // pull from the source until the buffer holds at least n items
    fn fill(&mut self, n: usize) -> bool {
        while self.buf.len() < n {
            match self.src.next() {
                Some(item) => self.buf.push(item),
                None => return false,
            }
        }
        true
    }

    pub fn buffer_pos(&self) -> usize { self.pos }

    pub fn set_buffer_pos(&mut self, pos: usize) -> bool {
        if pos > self.buf.len() {
            return false;
        }
        self.pos = pos;
        true
    }

    // last consumed item of the current lexeme
    pub fn curr(&self) -> Option<I::Item> {
        self.pos.checked_sub(1).and_then(|i| self.buf.get(i).cloned())
    }

    pub fn peek(&mut self) -> Option<I::Item> {
        if self.fill(self.pos + 1) {
            self.buf.get(self.pos).cloned()
        } else {
            None
        }
    }

    pub fn view(&self) -> &[I::Item] {
        &self.buf[..self.pos]
    }

    pub fn ignore(&mut self) {
        self.buf.drain(..self.pos);
        self.pos = 0;
    }

    pub fn extract(&mut self) -> Vec<I::Item> {
        let lexeme = self.buf.drain(..self.pos).collect();
        self.pos = 0;
        lexeme
    }
}

impl<I> Scanner<I> where I: Iterator, I::Item: Clone + PartialEq {
    pub fn accept(&mut self, what: &I::Item) -> Option<I::Item> {
        self.accept_any(std::slice::from_ref(what))
    }

    // Advance only if the next item is in the 'any' set
    pub fn accept_any(&mut self, any: &[I::Item]) -> Option<I::Item> {
        match self.peek() {
            Some(next) if any.contains(&next) => self.next(),
            _ => None,
        }
    }

    // Skip over the 'over' set, returns whether the scanner advanced
    pub fn skip_all(&mut self, over: &[I::Item]) -> bool {
        let mut advanced = false;
        while self.accept_any(over).is_some() { advanced = true; }
        advanced
    }
}
