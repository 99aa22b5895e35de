pub const UNRECOGNIZED_MESSAGE: &str =
    "Unrecognized command. Try \"add task ...\" or \"remove task ...\"";

/// What a lower-cased utterance asks the task list to do.
#[derive(Debug, Clone, PartialEq)]
pub enum VoiceCommand {
    /// Add with the given text. Blank text is dropped at parse time.
    Add(String),
    /// Remove by 0-based index; may be out of range or negative.
    Remove(i64),
    /// Matched a known prefix but carried nothing usable.
    Ignored,
    Unrecognized,
}

impl VoiceCommand {
    pub fn parse(transcript: &str) -> Self {
        if transcript.starts_with("add task") {
            let text = transcript.replacen("add task", "", 1);
            let text = text.trim();
            if text.is_empty() {
                VoiceCommand::Ignored
            } else {
                VoiceCommand::Add(text.to_string())
            }
        } else if transcript.starts_with("remove task") || transcript.starts_with("delete task") {
            match transcript.split(' ').nth(2).and_then(parse_leading_int) {
                Some(n) => VoiceCommand::Remove(n - 1),
                None => VoiceCommand::Ignored,
            }
        } else {
            VoiceCommand::Unrecognized
        }
    }
}

/// Reads an optionally signed integer from the start of `token`, ignoring
/// anything after the digits ("3rd" is 3).
fn parse_leading_int(token: &str) -> Option<i64> {
    let token = token.trim_start();
    let (negative, rest) = match token.as_bytes().first() {
        Some(b'-') => (true, &token[1..]),
        Some(b'+') => (false, &token[1..]),
        _ => (false, token),
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let value: i64 = rest[..digits].parse().ok()?;
    Some(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_strips_prefix_and_trims() {
        assert_eq!(
            VoiceCommand::parse("add task buy milk"),
            VoiceCommand::Add("buy milk".to_string())
        );
        assert_eq!(
            VoiceCommand::parse("add task   water plants  "),
            VoiceCommand::Add("water plants".to_string())
        );
        assert_eq!(VoiceCommand::parse("add task   "), VoiceCommand::Ignored);
    }

    #[test]
    fn remove_and_delete_take_third_token_as_one_based() {
        assert_eq!(VoiceCommand::parse("remove task 2"), VoiceCommand::Remove(1));
        assert_eq!(VoiceCommand::parse("delete task 10"), VoiceCommand::Remove(9));
        assert_eq!(VoiceCommand::parse("remove task 3rd"), VoiceCommand::Remove(2));
        assert_eq!(VoiceCommand::parse("remove task 0"), VoiceCommand::Remove(-1));
    }

    #[test]
    fn remove_without_number_is_ignored() {
        assert_eq!(VoiceCommand::parse("remove task two"), VoiceCommand::Ignored);
        assert_eq!(VoiceCommand::parse("delete task"), VoiceCommand::Ignored);
        // split on single spaces: a double space leaves an empty third token
        assert_eq!(VoiceCommand::parse("remove task  2"), VoiceCommand::Ignored);
    }

    #[test]
    fn anything_else_is_unrecognized() {
        assert_eq!(VoiceCommand::parse("what time is it"), VoiceCommand::Unrecognized);
        assert_eq!(VoiceCommand::parse(""), VoiceCommand::Unrecognized);
    }

    #[test]
    fn leading_int_follows_parse_int_rules() {
        assert_eq!(parse_leading_int("42"), Some(42));
        assert_eq!(parse_leading_int("-7x"), Some(-7));
        assert_eq!(parse_leading_int("+5"), Some(5));
        assert_eq!(parse_leading_int("x5"), None);
        assert_eq!(parse_leading_int("-"), None);
    }
}
