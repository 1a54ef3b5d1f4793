//! Offset extension comments: `#FT: x y layer`.

/// Grammar of the comment that carries placement offsets.
///
/// The default matches `#FT: <x> <y> <layer>` where fields are separated by
/// spaces, tabs or commas and the layer may be left out. A comment that
/// starts with the tag but does not fit the grammar is ignored like any other
/// comment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OffsetSyntax {
    tag: &'static [u8],
    separators: &'static [u8],
    layer_required: bool,
}

impl Default for OffsetSyntax {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl OffsetSyntax {
    /// `#FT: x y [layer]`, separated by spaces, tabs or commas.
    pub const DEFAULT: OffsetSyntax = OffsetSyntax {
        tag: b"FT:",
        separators: b" \t,",
        layer_required: false,
    };

    /// Grammar with a custom tag and the default separators.
    pub const fn new(tag: &'static str) -> Self {
        Self {
            tag: tag.as_bytes(),
            ..Self::DEFAULT
        }
    }

    /// Bytes accepted between fields. Spaces and tabs are always accepted.
    pub const fn with_separators(mut self, separators: &'static [u8]) -> Self {
        self.separators = separators;
        self
    }

    /// Reject comments that give only x and y.
    pub const fn require_layer(mut self, required: bool) -> Self {
        self.layer_required = required;
        self
    }

    /// Bytes that must follow `#` (after optional blanks) to mark an offset comment.
    pub fn tag(&self) -> &'static [u8] {
        self.tag
    }

    /// Parse a comment body (the bytes after `#`, up to end of line).
    pub(crate) fn parse(&self, body: &[u8]) -> Option<[i32; 3]> {
        let mut rest = trim_blanks(body).strip_prefix(self.tag)?;
        let mut fields = [0i32; 3];
        let mut count = 0;
        loop {
            rest = self.skip_separators(rest);
            if rest.is_empty() {
                break;
            }
            if count == fields.len() {
                return None;
            }
            let (value, tail) = parse_signed(rest)?;
            if let Some(&b) = tail.first() {
                if !self.is_separator(b) {
                    return None;
                }
            }
            fields[count] = value;
            count += 1;
            rest = tail;
        }
        match count {
            3 => Some(fields),
            2 if !self.layer_required => Some(fields),
            _ => None,
        }
    }

    fn is_separator(&self, b: u8) -> bool {
        is_blank(b) || self.separators.contains(&b)
    }

    fn skip_separators<'a>(&self, bytes: &'a [u8]) -> &'a [u8] {
        let n = bytes.iter().take_while(|&&b| self.is_separator(b)).count();
        &bytes[n..]
    }
}

fn is_blank(b: u8) -> bool {
    b == b' ' || b == b'\t'
}

fn trim_blanks(bytes: &[u8]) -> &[u8] {
    let n = bytes.iter().take_while(|&&b| is_blank(b)).count();
    &bytes[n..]
}

/// Optional sign followed by decimal digits, within i32 range.
fn parse_signed(bytes: &[u8]) -> Option<(i32, &[u8])> {
    let (negative, digits) = match bytes {
        [b'-', tail @ ..] => (true, tail),
        [b'+', tail @ ..] => (false, tail),
        _ => (false, bytes),
    };
    let len = digits.iter().take_while(|b| b.is_ascii_digit()).count();
    if len == 0 {
        return None;
    }
    let mut magnitude: i64 = 0;
    for &d in &digits[..len] {
        magnitude = magnitude.checked_mul(10)?.checked_add(i64::from(d - b'0'))?;
        if magnitude > i64::from(i32::MAX) + 1 {
            return None;
        }
    }
    let value = if negative { -magnitude } else { magnitude };
    Some((i32::try_from(value).ok()?, &digits[len..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_grammar_accepts_spaces_and_commas() {
        let s = OffsetSyntax::DEFAULT;
        assert_eq!(s.parse(b"FT: 5 -3 2"), Some([5, -3, 2]));
        assert_eq!(s.parse(b"FT:5,-3,2"), Some([5, -3, 2]));
        assert_eq!(s.parse(b" FT:\t10, 4 , +1 "), Some([10, 4, 1]));
    }

    #[test]
    fn layer_is_optional_unless_required() {
        assert_eq!(OffsetSyntax::DEFAULT.parse(b"FT: 7 8"), Some([7, 8, 0]));
        assert_eq!(OffsetSyntax::DEFAULT.require_layer(true).parse(b"FT: 7 8"), None);
    }

    #[test]
    fn rejects_malformed_bodies() {
        let s = OffsetSyntax::DEFAULT;
        assert_eq!(s.parse(b"FT:"), None);
        assert_eq!(s.parse(b"FT: 1"), None);
        assert_eq!(s.parse(b"FT: 1 2 3 4"), None);
        assert_eq!(s.parse(b"FT: 1 x 3"), None);
        assert_eq!(s.parse(b"FT: 1 2a 3"), None);
        assert_eq!(s.parse(b"FT: - 2 3"), None);
        assert_eq!(s.parse(b"GIMP says hi"), None);
        assert_eq!(s.parse(b"FT: 2147483648 0 0"), None);
    }

    #[test]
    fn i32_extremes() {
        let s = OffsetSyntax::DEFAULT;
        assert_eq!(
            s.parse(b"FT: -2147483648 2147483647 0"),
            Some([i32::MIN, i32::MAX, 0])
        );
    }

    #[test]
    fn custom_tag_and_separators() {
        let s = OffsetSyntax::new("offset=").with_separators(b";");
        assert_eq!(s.parse(b"offset=1;2;3"), Some([1, 2, 3]));
        assert_eq!(s.parse(b"offset=1,2,3"), None);
        assert_eq!(s.parse(b"FT: 1 2 3"), None);
        assert_eq!(s.tag(), b"offset=");
        assert_eq!(OffsetSyntax::default().tag(), b"FT:");
    }
}
