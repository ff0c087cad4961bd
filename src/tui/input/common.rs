use crate::util::unicode;

// Single-line buffer editing shared by the input bar and the inline
// rename draft. Cursor is a byte offset, always on a grapheme boundary.

pub(super) fn insert_char(buf: &mut String, cursor: &mut usize, c: char) {
    buf.insert(*cursor, c);
    *cursor += c.len_utf8();
}

pub(super) fn backspace(buf: &mut String, cursor: &mut usize) {
    if let Some(prev) = unicode::prev_grapheme_boundary(buf, *cursor) {
        buf.drain(prev..*cursor);
        *cursor = prev;
    }
}

pub(super) fn backspace_word(buf: &mut String, cursor: &mut usize) {
    let start = unicode::word_boundary_left(buf, *cursor);
    buf.drain(start..*cursor);
    *cursor = start;
}

pub(super) fn move_left(buf: &str, cursor: &mut usize) {
    if let Some(prev) = unicode::prev_grapheme_boundary(buf, *cursor) {
        *cursor = prev;
    }
}

pub(super) fn move_right(buf: &str, cursor: &mut usize) {
    if let Some(next) = unicode::next_grapheme_boundary(buf, *cursor) {
        *cursor = next;
    }
}

pub(super) fn move_word_left(buf: &str, cursor: &mut usize) {
    *cursor = unicode::word_boundary_left(buf, *cursor);
}

pub(super) fn move_word_right(buf: &str, cursor: &mut usize) {
    *cursor = unicode::word_boundary_right(buf, *cursor);
}

pub(super) fn kill_to_start(buf: &mut String, cursor: &mut usize) {
    if *cursor > 0 {
        buf.drain(..*cursor);
        *cursor = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_backspace() {
        let mut buf = String::new();
        let mut cursor = 0;
        for c in "abc".chars() {
            insert_char(&mut buf, &mut cursor, c);
        }
        assert_eq!(buf, "abc");
        assert_eq!(cursor, 3);

        backspace(&mut buf, &mut cursor);
        assert_eq!(buf, "ab");
        assert_eq!(cursor, 2);
    }

    #[test]
    fn test_insert_mid_buffer() {
        let mut buf = String::from("ac");
        let mut cursor = 1;
        insert_char(&mut buf, &mut cursor, 'b');
        assert_eq!(buf, "abc");
        assert_eq!(cursor, 2);
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut buf = String::from("ab");
        let mut cursor = 0;
        backspace(&mut buf, &mut cursor);
        assert_eq!(buf, "ab");
        assert_eq!(cursor, 0);
    }

    #[test]
    fn test_backspace_multibyte() {
        let mut buf = String::from("caf\u{00E9}");
        let mut cursor = buf.len();
        backspace(&mut buf, &mut cursor);
        assert_eq!(buf, "caf");
        assert_eq!(cursor, 3);
    }

    #[test]
    fn test_backspace_word() {
        let mut buf = String::from("buy oat milk");
        let mut cursor = buf.len();
        backspace_word(&mut buf, &mut cursor);
        assert_eq!(buf, "buy oat ");
        assert_eq!(cursor, 8);
    }

    #[test]
    fn test_kill_to_start() {
        let mut buf = String::from("hello");
        let mut cursor = 3;
        kill_to_start(&mut buf, &mut cursor);
        assert_eq!(buf, "lo");
        assert_eq!(cursor, 0);
    }

    #[test]
    fn test_word_movement() {
        let buf = "buy oat milk";
        let mut cursor = buf.len();
        move_word_left(buf, &mut cursor);
        assert_eq!(cursor, 8);
        move_word_left(buf, &mut cursor);
        assert_eq!(cursor, 4);
        move_word_right(buf, &mut cursor);
        assert_eq!(cursor, 7);
    }
}
