//! Terminal text sanitization for service-supplied strings.
//!
//! The emotion label and glyph come straight off the network and are decoded without
//! validation. Before they are drawn they pass through [`sanitize_terminal_text`] so a
//! misbehaving service cannot inject escape sequences (cursor movement, OSC 52 clipboard
//! writes, OSC 8 hyperlinks) into the user's terminal.

use std::borrow::Cow;
use std::iter::Peekable;
use std::str::Chars;

const ESC: char = '\x1b';
const BEL: char = '\x07';
const C1_CSI: char = '\u{009b}';

/// Strip escape sequences and control characters, keeping `\n`, `\t` and `\r`.
///
/// Returns `Cow::Borrowed` when the input is already clean.
///
/// ```
/// use emotion_types::sanitize_terminal_text;
///
/// assert_eq!(sanitize_terminal_text("Joy"), "Joy");
/// assert_eq!(sanitize_terminal_text("Jo\x1b[2Jy"), "Joy");
/// ```
#[must_use]
pub fn sanitize_terminal_text(input: &str) -> Cow<'_, str> {
    if !input.chars().any(is_unsafe) {
        return Cow::Borrowed(input);
    }

    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            ESC => skip_escape(&mut chars),
            C1_CSI => skip_csi(&mut chars),
            '\n' | '\t' | '\r' => out.push(c),
            c if is_unsafe(c) => {}
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}

fn is_unsafe(c: char) -> bool {
    let c0 = c <= '\x1f' && !matches!(c, '\n' | '\t' | '\r');
    let c1 = ('\u{0080}'..='\u{009f}').contains(&c);
    c0 || c1 || c == '\x7f'
}

fn skip_escape(chars: &mut Peekable<Chars<'_>>) {
    match chars.peek().copied() {
        Some('[') => {
            chars.next();
            skip_csi(chars);
        }
        Some(']') => {
            chars.next();
            // OSC ends at BEL or ST.
            while let Some(c) = chars.next() {
                if c == BEL || (c == ESC && chars.next_if_eq(&'\\').is_some()) {
                    return;
                }
            }
        }
        Some('P' | '^' | '_') => {
            chars.next();
            while let Some(c) = chars.next() {
                if c == ESC && chars.next_if_eq(&'\\').is_some() {
                    return;
                }
            }
        }
        Some('(' | ')' | '*' | '+' | '#' | ' ') => {
            chars.next();
            chars.next();
        }
        Some('7' | '8' | 'c' | 'D' | 'E' | 'H' | 'M' | 'N' | 'O' | 'Z' | '=' | '>' | '<') => {
            chars.next();
        }
        _ => {}
    }
}

fn skip_csi(chars: &mut Peekable<Chars<'_>>) {
    while let Some(&c) = chars.peek() {
        if ('\x40'..='\x7e').contains(&c) {
            chars.next();
            return;
        }
        if !('\x20'..='\x3f').contains(&c) {
            return;
        }
        chars.next();
    }
}
