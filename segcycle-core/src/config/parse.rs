//! Display configuration parser
//!
//! Reads a small TOML subset: `[display]`, `[cipher]` and `[position.N]`
//! tables holding quoted strings, integers and flat integer arrays, plus
//! `#` comments. Anything else is rejected.
//!
//! ```toml
//! [display]
//! text = "lbuctf"
//! step_delay_ms = 1000
//!
//! [cipher]
//! kind = "caesar"
//! shift = 13
//!
//! [position.1]
//! pins = [58, 57, 56, 55]
//! ```

use heapless::String as HString;

use crate::cipher::{Caesar, CipherKind};
use crate::glyph::LINES_PER_GLYPH;
use crate::position::{DisplayLayout, PositionError, SegmentPosition, POSITION_COUNT};

use super::types::{DisplayConfig, MAX_TEXT_LEN};

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Invalid section header
    InvalidSection,
    /// Invalid value type
    InvalidValue,
    /// Position pins rejected
    InvalidPosition(PositionError),
    /// Text longer than [`MAX_TEXT_LEN`]
    TextTooLong,
}

impl From<PositionError> for ParseError {
    fn from(e: PositionError) -> Self {
        ParseError::InvalidPosition(e)
    }
}

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Display,
    Cipher,
    /// Zero-based slot index
    Position(usize),
}

/// Values resolved once the whole file has been read
#[derive(Debug)]
struct Pending {
    cipher_kind: Option<CipherName>,
    shift: Option<u8>,
    positions: [SegmentPosition; POSITION_COUNT],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CipherName {
    Passthrough,
    Caesar,
}

/// Parse configuration text into a [`DisplayConfig`]
///
/// Sections and keys that are not present keep their defaults. Unknown
/// keys are ignored. Positions may be rewired in any order; the finished
/// layout must not wire one segment line to two positions.
pub fn parse_config(input: &str) -> Result<DisplayConfig, ParseError> {
    let mut config = DisplayConfig::default();
    let mut section = Section::Root;
    let mut pending = Pending {
        cipher_kind: None,
        shift: None,
        positions: *config.layout.positions(),
    };

    for line in input.lines() {
        let line = strip_comment(line).trim();
        if line.is_empty() {
            continue;
        }

        if let Some(header) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
            section = parse_section_header(header)?;
            continue;
        }

        let (key, value) = line.split_once('=').ok_or(ParseError::InvalidValue)?;
        let (key, value) = (key.trim(), value.trim());
        if key.is_empty() || value.is_empty() {
            return Err(ParseError::InvalidValue);
        }

        apply_value(section, key, value, &mut config, &mut pending)?;
    }

    config.layout = DisplayLayout::new(pending.positions)?;
    config.cipher = resolve_cipher(&pending, config.cipher);
    Ok(config)
}

/// Cut a line at the first `#` outside a quoted string
fn strip_comment(line: &str) -> &str {
    let mut quoted = false;
    for (i, c) in line.char_indices() {
        match c {
            '"' => quoted = !quoted,
            '#' if !quoted => return &line[..i],
            _ => {}
        }
    }
    line
}

/// Parse a section header (without brackets)
fn parse_section_header(header: &str) -> Result<Section, ParseError> {
    match header.trim() {
        "display" => Ok(Section::Display),
        "cipher" => Ok(Section::Cipher),
        other => {
            let number: usize = other
                .strip_prefix("position.")
                .and_then(|n| n.trim().parse().ok())
                .ok_or(ParseError::InvalidSection)?;
            // Positions are numbered 1-6 on the panel
            if !(1..=POSITION_COUNT).contains(&number) {
                return Err(ParseError::InvalidSection);
            }
            Ok(Section::Position(number - 1))
        }
    }
}

/// Parse a double-quoted string value
fn parse_quoted(value: &str) -> Result<&str, ParseError> {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .filter(|v| !v.contains('"'))
        .ok_or(ParseError::InvalidValue)
}

/// Parse an integer value
fn parse_int<T: core::str::FromStr>(value: &str) -> Result<T, ParseError> {
    value.parse().map_err(|_| ParseError::InvalidValue)
}

/// Parse a pin array like [58, 57, 56, 55]
fn parse_pins(value: &str) -> Result<[u8; LINES_PER_GLYPH], ParseError> {
    let inner = value
        .strip_prefix('[')
        .and_then(|v| v.strip_suffix(']'))
        .ok_or(ParseError::InvalidValue)?;

    let mut pins = [0u8; LINES_PER_GLYPH];
    let mut count = 0;

    for part in inner.split(',') {
        let part = part.trim();
        // Allow a trailing comma
        if part.is_empty() {
            continue;
        }
        let pin = pins.get_mut(count).ok_or(ParseError::InvalidValue)?;
        *pin = parse_int(part)?;
        count += 1;
    }

    if count != LINES_PER_GLYPH {
        return Err(ParseError::InvalidValue);
    }

    Ok(pins)
}

/// Parse cipher kind
fn parse_cipher_name(value: &str) -> Result<CipherName, ParseError> {
    match parse_quoted(value)? {
        "passthrough" | "none" => Ok(CipherName::Passthrough),
        "caesar" | "rot" => Ok(CipherName::Caesar),
        _ => Err(ParseError::InvalidValue),
    }
}

/// Apply a parsed value to the appropriate config field
fn apply_value(
    section: Section,
    key: &str,
    value: &str,
    config: &mut DisplayConfig,
    pending: &mut Pending,
) -> Result<(), ParseError> {
    match section {
        Section::Display => match key {
            "text" => {
                let text = parse_quoted(value)?;
                config.text = HString::try_from(text).map_err(|_| ParseError::TextTooLong)?;
            }
            "step_delay_ms" => config.step_delay_ms = parse_int(value)?,
            _ => {} // Ignore unknown keys
        },
        Section::Cipher => match key {
            "kind" => pending.cipher_kind = Some(parse_cipher_name(value)?),
            "shift" => pending.shift = Some(parse_int(value)?),
            _ => {}
        },
        Section::Position(slot) => {
            if key == "pins" {
                let position = SegmentPosition::new(parse_pins(value)?)?;
                if let Some(p) = pending.positions.get_mut(slot) {
                    *p = position;
                }
            }
        }
        Section::Root => {
            // No keys live outside a section
        }
    }

    Ok(())
}

/// Combine the cipher keys with the current setting
fn resolve_cipher(pending: &Pending, current: CipherKind) -> CipherKind {
    let current_shift = match current {
        CipherKind::Caesar(c) => Some(c.shift),
        CipherKind::Passthrough => None,
    };

    match pending.cipher_kind {
        Some(CipherName::Passthrough) => CipherKind::Passthrough,
        Some(CipherName::Caesar) => {
            CipherKind::Caesar(Caesar::new(pending.shift.or(current_shift).unwrap_or(0)))
        }
        // A shift on its own adjusts a caesar cipher
        None => match (current, pending.shift) {
            (CipherKind::Caesar(_), Some(shift)) => CipherKind::Caesar(Caesar::new(shift)),
            _ => current,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::tests::TestMemory;
    use crate::render::GlyphWriter;

    #[test]
    fn test_parse_section_header() {
        assert_eq!(parse_section_header("display"), Ok(Section::Display));
        assert_eq!(parse_section_header("cipher"), Ok(Section::Cipher));
        assert_eq!(parse_section_header("position.1"), Ok(Section::Position(0)));
        assert_eq!(parse_section_header("position.6"), Ok(Section::Position(5)));
        assert_eq!(parse_section_header("position.0"), Err(ParseError::InvalidSection));
        assert_eq!(parse_section_header("position.7"), Err(ParseError::InvalidSection));
        assert_eq!(parse_section_header("heater.x"), Err(ParseError::InvalidSection));
        assert_eq!(parse_section_header("ui"), Err(ParseError::InvalidSection));
    }

    #[test]
    fn test_parse_pins() {
        assert_eq!(parse_pins("[58, 57, 56, 55]"), Ok([58, 57, 56, 55]));
        assert_eq!(parse_pins("[1,2,3,4,]"), Ok([1, 2, 3, 4]));
        assert_eq!(parse_pins("[1, 2, 3]"), Err(ParseError::InvalidValue));
        assert_eq!(parse_pins("[1, 2, 3, 4, 5]"), Err(ParseError::InvalidValue));
        assert_eq!(parse_pins("1, 2, 3, 4"), Err(ParseError::InvalidValue));
        assert_eq!(parse_pins("[1, 2, 3, 4"), Err(ParseError::InvalidValue));
        assert_eq!(parse_pins("[1, 2, x, 4]"), Err(ParseError::InvalidValue));
    }

    #[test]
    fn test_parse_empty_config_is_default() {
        let config = parse_config("# nothing here\n\n").unwrap();
        assert_eq!(config, DisplayConfig::default());
    }

    #[test]
    fn test_parse_full_config() {
        let config_str = r#"
# Demo board
[display]
text = "HELLO1"       # shown after the cipher
step_delay_ms = 250

[cipher]
kind = "caesar"
shift = 1

[position.2]
pins = [1, 2, 3, 4]
"#;

        let config = parse_config(config_str).unwrap();
        assert_eq!(config.text.as_str(), "HELLO1");
        assert_eq!(config.step_delay_ms, 250);
        assert_eq!(config.cipher, CipherKind::Caesar(Caesar::new(1)));
        assert_eq!(config.layout.get(1), Some(&SegmentPosition::new([1, 2, 3, 4]).unwrap()));
        assert_eq!(config.layout.get(0), DisplayLayout::LAUNCHPAD.get(0));
        assert_eq!(config.message().as_slice(), &['I', 'F', 'M', 'M', 'P', '2']);
    }

    #[test]
    fn test_parse_passthrough() {
        let config = parse_config("[cipher]\nkind = \"passthrough\"\n").unwrap();
        assert_eq!(config.cipher, CipherKind::Passthrough);
    }

    #[test]
    fn test_strings_must_be_quoted() {
        assert_eq!(
            parse_config("[cipher]\nkind = passthrough\n"),
            Err(ParseError::InvalidValue)
        );
        assert_eq!(
            parse_config("[display]\ntext = HELLO\n"),
            Err(ParseError::InvalidValue)
        );
        assert_eq!(
            parse_config("[display]\ntext = \"HEL\"LO\"\n"),
            Err(ParseError::InvalidValue)
        );
    }

    #[test]
    fn test_hash_inside_string_is_kept() {
        let config = parse_config("[display]\ntext = \"A#1\" # comment\n").unwrap();
        assert_eq!(config.text.as_str(), "A#1");
    }

    #[test]
    fn test_shift_before_kind() {
        let config = parse_config("[cipher]\nshift = 5\nkind = \"caesar\"\n").unwrap();
        assert_eq!(config.cipher, CipherKind::Caesar(Caesar::new(5)));
    }

    #[test]
    fn test_shift_alone_adjusts_default() {
        let config = parse_config("[cipher]\nshift = 2\n").unwrap();
        assert_eq!(config.cipher, CipherKind::Caesar(Caesar::new(2)));
    }

    #[test]
    fn test_invalid_position_pins() {
        let result = parse_config("[position.3]\npins = [1, 2, 2, 4]\n");
        assert_eq!(
            result,
            Err(ParseError::InvalidPosition(PositionError::DuplicateLine(2)))
        );

        let result = parse_config("[position.3]\npins = [1, 2, 99, 4]\n");
        assert_eq!(
            result,
            Err(ParseError::InvalidPosition(PositionError::LineOutOfRange(99)))
        );
    }

    #[test]
    fn test_overlapping_positions_rejected() {
        // Slot 2 reuses the lines of slot 1
        let result = parse_config("[position.2]\npins = [58, 57, 56, 55]\n");
        assert_eq!(
            result,
            Err(ParseError::InvalidPosition(PositionError::LineInUse(58)))
        );

        let result = parse_config("[position.4]\npins = [0, 1, 2, 18]\n");
        assert_eq!(
            result,
            Err(ParseError::InvalidPosition(PositionError::LineInUse(18)))
        );
    }

    #[test]
    fn test_swapped_positions_render_independently() {
        let config = parse_config(
            "[position.1]\npins = [36, 37, 38, 18]\n\n[position.2]\npins = [58, 57, 56, 55]\n",
        )
        .unwrap();

        let slot0 = config.layout.get(0).unwrap();
        let slot1 = config.layout.get(1).unwrap();
        let mut mem = TestMemory::new();
        mem.show_char('A', slot0).unwrap();
        mem.show_char('1', slot1).unwrap();

        assert_eq!(mem.read_glyph(slot0).to_char(), Some('A'));
        assert_eq!(mem.read_glyph(slot1).to_char(), Some('1'));
    }

    #[test]
    fn test_text_too_long() {
        let result = parse_config("[display]\ntext = \"0123456789012345678901234567890123\"\n");
        assert_eq!(result, Err(ParseError::TextTooLong));
    }

    #[test]
    fn test_invalid_values() {
        assert_eq!(
            parse_config("[display]\nstep_delay_ms = soon\n"),
            Err(ParseError::InvalidValue)
        );
        assert_eq!(
            parse_config("[cipher]\nkind = \"enigma\"\n"),
            Err(ParseError::InvalidValue)
        );
        assert_eq!(parse_config("[display]\njunk\n"), Err(ParseError::InvalidValue));
        assert_eq!(parse_config("[keypad]\n"), Err(ParseError::InvalidSection));
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let config = parse_config("[display]\nbrightness = 3\n").unwrap();
        assert_eq!(config, DisplayConfig::default());
    }
}
