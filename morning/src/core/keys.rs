//! Keypress tokens and the escape-sequence decoder.
//!
//! Decoding pulls bytes from a caller-provided source one at a time and stops
//! as soon as a byte does not continue the sequence, so it never blocks waiting
//! for bytes a plain keypress would not send. The grammar covers the common
//! arrow, navigation and function key sequences without a terminfo database.

use std::str;

pub const ESC: u8 = 0x1b;
pub const CTRL_C: u8 = 0x03;
pub const CTRL_Z: u8 = 0x1a;

const INTRODUCERS: &[u8] = b"O[";
const THIRD_CONTINUES: &[u8] = b"12356";
const FOURTH_CONTINUES: &[u8] = b"01345789";

/// One logical keypress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    /// Raw escape sequence bytes, always starting with `ESC`.
    Escape(Vec<u8>),
    /// Key reported only by scan code (the `0x00`/`0xe0` prefix form).
    Special(u8),
}

/// Result of decoding the next keypress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decoded {
    Key(Key),
    Interrupt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamedKey {
    Up,
    Down,
    Right,
    Left,
    Home,
    End,
    Insert,
    Delete,
    PageUp,
    PageDown,
    F1,
    F2,
    F3,
    F4,
    F5,
}

impl Key {
    /// Name of a recognized navigation or function key sequence.
    pub fn named(&self) -> Option<NamedKey> {
        let Key::Escape(seq) = self else {
            return None;
        };
        let named = match seq.get(1..)? {
            b"[A" | b"OA" => NamedKey::Up,
            b"[B" | b"OB" => NamedKey::Down,
            b"[C" | b"OC" => NamedKey::Right,
            b"[D" | b"OD" => NamedKey::Left,
            b"[H" | b"OH" | b"[1~" => NamedKey::Home,
            b"[F" | b"OF" | b"[4~" => NamedKey::End,
            b"[2~" => NamedKey::Insert,
            b"[3~" => NamedKey::Delete,
            b"[5~" => NamedKey::PageUp,
            b"[6~" => NamedKey::PageDown,
            b"OP" | b"[11~" => NamedKey::F1,
            b"OQ" | b"[12~" => NamedKey::F2,
            b"OR" | b"[13~" => NamedKey::F3,
            b"OS" | b"[14~" => NamedKey::F4,
            b"[15~" => NamedKey::F5,
            _ => return None,
        };
        Some(named)
    }

    /// Escape sequence a terminal sends for `named`.
    pub fn for_named(named: NamedKey) -> Key {
        let tail: &[u8] = match named {
            NamedKey::Up => b"[A",
            NamedKey::Down => b"[B",
            NamedKey::Right => b"[C",
            NamedKey::Left => b"[D",
            NamedKey::Home => b"[H",
            NamedKey::End => b"[F",
            NamedKey::Insert => b"[2~",
            NamedKey::Delete => b"[3~",
            NamedKey::PageUp => b"[5~",
            NamedKey::PageDown => b"[6~",
            NamedKey::F1 => b"OP",
            NamedKey::F2 => b"OQ",
            NamedKey::F3 => b"OR",
            NamedKey::F4 => b"OS",
            NamedKey::F5 => b"[15~",
        };
        let mut seq = Vec::with_capacity(tail.len() + 1);
        seq.push(ESC);
        seq.extend_from_slice(tail);
        Key::Escape(seq)
    }
}

/// Decode one keypress from `next`.
///
/// `next` must block until a byte is available; its errors are passed through
/// unchanged, so end-of-input handling belongs to the caller.
pub fn decode_key<E, F>(mut next: F) -> Result<Decoded, E>
where
    F: FnMut() -> Result<u8, E>,
{
    let first = next()?;
    let key = match first {
        CTRL_C | CTRL_Z => return Ok(Decoded::Interrupt),
        b'\r' | b'\n' => Key::Enter,
        0x08 | 0x7f => Key::Backspace,
        ESC => decode_escape(&mut next)?,
        lead => Key::Char(decode_utf8(lead, &mut next)?),
    };
    Ok(Decoded::Key(key))
}

fn decode_escape<E, F>(next: &mut F) -> Result<Key, E>
where
    F: FnMut() -> Result<u8, E>,
{
    let mut seq = vec![ESC];
    for continues in [INTRODUCERS, THIRD_CONTINUES, FOURTH_CONTINUES] {
        let byte = next()?;
        seq.push(byte);
        if !continues.contains(&byte) {
            return Ok(Key::Escape(seq));
        }
    }
    seq.push(next()?);
    Ok(Key::Escape(seq))
}

fn decode_utf8<E, F>(lead: u8, next: &mut F) -> Result<char, E>
where
    F: FnMut() -> Result<u8, E>,
{
    let width = match lead {
        0x00..=0x7f => return Ok(char::from(lead)),
        0xc0..=0xdf => 2,
        0xe0..=0xef => 3,
        0xf0..=0xf7 => 4,
        _ => return Ok(char::REPLACEMENT_CHARACTER),
    };
    let mut buf = [lead, 0, 0, 0];
    for slot in buf.iter_mut().take(width).skip(1) {
        *slot = next()?;
    }
    Ok(str::from_utf8(&buf[..width])
        .ok()
        .and_then(|s| s.chars().next())
        .unwrap_or(char::REPLACEMENT_CHARACTER))
}
