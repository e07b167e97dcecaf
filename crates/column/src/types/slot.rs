// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Basalt

/// Cut the next element token off the front of a composite literal.
///
/// Rules: leading whitespace is skipped; a token opening with `"` or `'`
/// is scanned verbatim to the matching quote (no escape sequences, a
/// missing closing quote fails); after a quoted token only whitespace may
/// precede the separator. The scan then runs to the first separator byte,
/// where `closing` counts as a separator only as the very last byte of
/// the input. The token is right-trimmed and, when quote-delimited end to
/// end, stripped of its surrounding quotes. `None` means the slot is
/// malformed; the caller reports the unconsumed text.
pub(crate) fn next_slot_from_string<'a>(
	input: &'a str,
	separators: &[u8],
	closing: u8,
) -> Option<(&'a str, &'a str)> {
	let bytes = input.as_bytes();
	let mut pos = 0;
	while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
		pos += 1;
	}
	let start = pos;

	let mut quoted = false;
	if pos < bytes.len() && (bytes[pos] == b'"' || bytes[pos] == b'\'') {
		let quote = bytes[pos];
		let closing_quote = bytes[pos + 1..].iter().position(|&b| b == quote)?;
		quoted = true;
		pos += 1 + closing_quote + 1;
	}

	let mut separator = None;
	while pos < bytes.len() {
		let b = bytes[pos];
		if separators.contains(&b) || (b == closing && pos == bytes.len() - 1) {
			separator = Some(pos);
			break;
		}
		if quoted && !b.is_ascii_whitespace() {
			return None;
		}
		pos += 1;
	}
	let separator = separator?;

	let token = input[start..separator].trim_end();
	let token = strip_quotes(token);
	Some((token, &input[separator + 1..]))
}

fn strip_quotes(token: &str) -> &str {
	let bytes = token.as_bytes();
	if bytes.len() >= 2
		&& (bytes[0] == b'"' || bytes[0] == b'\'')
		&& bytes[bytes.len() - 1] == bytes[0]
	{
		&token[1..token.len() - 1]
	} else {
		token
	}
}

#[cfg(test)]
pub mod tests {
	use super::*;

	const MAP_SEPARATORS: &[u8] = &[b':', b','];

	#[test]
	fn test_plain_token() {
		let (token, rest) = next_slot_from_string("abc: rest}", MAP_SEPARATORS, b'}').unwrap();
		assert_eq!(token, "abc");
		assert_eq!(rest, " rest}");
	}

	#[test]
	fn test_quoted_token_strips_quotes() {
		let (token, rest) = next_slot_from_string("  \"a b\" : 1}", MAP_SEPARATORS, b'}').unwrap();
		assert_eq!(token, "a b");
		assert_eq!(rest, " 1}");
	}

	#[test]
	fn test_single_quoted_token() {
		let (token, _) = next_slot_from_string("'x,y',z]", &[b','], b']').unwrap();
		assert_eq!(token, "x,y");
	}

	#[test]
	fn test_closing_byte_only_terminal() {
		// '}' mid-buffer is not a separator
		assert!(next_slot_from_string("a}b", MAP_SEPARATORS, b'}').is_none());
		let (token, rest) = next_slot_from_string("a}", MAP_SEPARATORS, b'}').unwrap();
		assert_eq!(token, "a");
		assert_eq!(rest, "");
	}

	#[test]
	fn test_unterminated_quote_fails() {
		assert!(next_slot_from_string("\"abc: 1}", MAP_SEPARATORS, b'}').is_none());
	}

	#[test]
	fn test_junk_after_quote_fails() {
		assert!(next_slot_from_string("\"a\"1}", MAP_SEPARATORS, b'}').is_none());
	}

	#[test]
	fn test_whitespace_after_quote_is_fine() {
		let (token, rest) = next_slot_from_string("\"a\"  ,tail}", MAP_SEPARATORS, b'}').unwrap();
		assert_eq!(token, "a");
		assert_eq!(rest, "tail}");
	}

	#[test]
	fn test_no_separator_fails() {
		assert!(next_slot_from_string("abc", MAP_SEPARATORS, b'}').is_none());
	}

	#[test]
	fn test_mismatched_quotes_kept() {
		// quotes are stripped only when they enclose the token end to end
		let (token, _) = next_slot_from_string("a':1}", MAP_SEPARATORS, b'}').unwrap();
		assert_eq!(token, "a'");
	}
}
