use compact_str::CompactString;
use std::{iter::Peekable, str::Chars};

#[derive(Debug, Clone, Copy)]
pub struct SourceChar {
    pub value: char,
    pub offset: usize,
}

/// Character cursor that tracks the zero-based character offset of the next
/// unread character.
#[derive(Debug)]
pub struct Cursor<'src> {
    chars: Peekable<Chars<'src>>,
    offset: usize,
}

impl<'src> Cursor<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            chars: source.chars().peekable(),
            offset: 0,
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn peek(&mut self) -> Option<SourceChar> {
        let offset = self.offset;
        self.chars
            .peek()
            .map(|&value| SourceChar { value, offset })
    }

    pub fn bump(&mut self) -> Option<SourceChar> {
        let value = self.chars.next()?;
        let c = SourceChar {
            value,
            offset: self.offset,
        };
        self.offset += 1;
        Some(c)
    }

    pub fn skip_whitespace(&mut self) {
        while self.chars.next_if(|c| c.is_whitespace()).is_some() {
            self.offset += 1;
        }
    }

    pub fn eat_while(&mut self, predicate: impl Fn(char) -> bool) -> CompactString {
        let mut buffer = CompactString::default();
        while let Some(c) = self.chars.next_if(|&c| predicate(c)) {
            buffer.push(c);
            self.offset += 1;
        }
        buffer
    }
}

#[cfg(test)]
mod tests {
    use super::Cursor;

    #[test]
    fn offsets_count_characters_not_bytes() {
        let mut cursor = Cursor::new("é + x");
        assert_eq!(cursor.bump().map(|c| c.offset), Some(0));
        cursor.skip_whitespace();
        assert_eq!(cursor.peek().map(|c| (c.value, c.offset)), Some(('+', 2)));
    }

    #[test]
    fn eat_while_stops_at_first_rejected_character() {
        let mut cursor = Cursor::new("abc_1+2");
        let name = cursor.eat_while(|c| c.is_alphanumeric() || c == '_');
        assert_eq!(name, "abc_1");
        assert_eq!(cursor.offset(), 5);
    }
}
