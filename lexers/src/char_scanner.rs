#![deny(warnings)]

use crate::scanner::Scanner;

static WHITE: &[char] = &[' ', '\n', '\r', '\t'];
static DIGITS: &[char] = &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];


impl<I: Iterator<Item=char>> Scanner<I> {
    pub fn extract_string(&mut self) -> String {
        self.extract().into_iter().collect()
    }

    // discard the current lexeme and any whitespace that follows
    pub fn ignore_ws(&mut self) {
        self.skip_all(WHITE);
        self.ignore();
    }

    // scan numbers like [0-9]*(\.[0-9]*)? holding at least one digit
    pub fn scan_number(&mut self) -> Option<String> {
        let backtrack = self.buffer_pos();
        let integral = self.skip_all(DIGITS);
        let fractional = self.accept(&'.').is_some() && self.skip_all(DIGITS);
        if !integral && !fractional {
            self.set_buffer_pos(backtrack);
            return None;
        }
        Some(self.extract_string())
    }
}

///////////////////////////////////////////////////////////////////////////////
