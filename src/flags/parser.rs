//! The parse loop: leading flag run in, remainder out.

use crate::flags::error::ParseError;
use crate::flags::token::{classify, looks_like_flag, Token};

/// Handler verdict for one presented flag occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Flag fully consumed with the given value (possibly empty).
    Accepted,
    /// Flag is valid but requires a non-empty value that was not attached.
    /// The parser pulls the next token and invokes the handler again with
    /// it; that second call must not answer `NeedsValue`.
    NeedsValue,
    /// Flag refused; parsing stops with the mapped [`ParseError`].
    Rejected(Reject),
}

/// Why a handler refused a flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reject {
    /// Not a flag this command level knows.
    Unsupported,
    /// The flag takes no value but one was attached.
    NoValueAllowed,
    /// Handler-specific message.
    Message(String),
}

/// Consume the leading flag run of `args` and return the remainder.
///
/// Tokens are classified per [`classify`]; each derived `(flag, value)`
/// pair is presented to `handler`, which typically writes accepted values
/// into caller-owned settings. Parsing stops at the first positional token,
/// which is not consumed, so the remainder starts with it. An empty input
/// yields an empty remainder and zero handler invocations.
///
/// The handler sees a missing value as the empty string. `--flag=` also
/// arrives as the empty string, so a handler answering `NeedsValue` on an
/// empty value will pull the following token in both cases.
pub fn parse<'a, H>(handler: &mut H, args: &'a [String]) -> Result<&'a [String], ParseError>
where
    H: FnMut(&str, &str) -> Verdict,
{
    let mut consumed = 0;
    while let Some(token) = args.get(consumed) {
        let (flag, value) = match classify(token) {
            Token::Long { flag, value } | Token::Short { flag, value } => (flag, value),
            Token::Positional => break,
        };

        // An attached value that itself looks like a flag cannot be told
        // apart from a following flag token.
        if looks_like_flag(value) {
            return Err(ParseError::AmbiguousValue {
                flag: flag.to_string(),
                value: value.to_string(),
            });
        }

        match handler(flag, value) {
            Verdict::Accepted => consumed += 1,
            Verdict::Rejected(reject) => return Err(reject.into_error(flag)),
            Verdict::NeedsValue => {
                let Some(pulled) = args.get(consumed + 1) else {
                    return Err(ParseError::MissingValue {
                        flag: flag.to_string(),
                    });
                };
                if looks_like_flag(pulled) {
                    return Err(ParseError::AmbiguousValue {
                        flag: flag.to_string(),
                        value: pulled.clone(),
                    });
                }
                if pulled.is_empty() {
                    return Err(ParseError::EmptyValue {
                        flag: flag.to_string(),
                    });
                }
                match handler(flag, pulled) {
                    Verdict::Accepted => consumed += 2,
                    Verdict::NeedsValue => {
                        return Err(ParseError::DoubleValueRequest {
                            flag: flag.to_string(),
                        })
                    }
                    Verdict::Rejected(reject) => return Err(reject.into_error(flag)),
                }
            }
        }
    }
    Ok(&args[consumed..])
}

impl Reject {
    fn into_error(self, flag: &str) -> ParseError {
        match self {
            Reject::Unsupported => ParseError::UnsupportedFlag {
                flag: flag.to_string(),
            },
            Reject::NoValueAllowed => ParseError::FlagTakesNoValue {
                flag: flag.to_string(),
            },
            Reject::Message(message) => ParseError::RejectedFlag {
                flag: flag.to_string(),
                message,
            },
        }
    }
}
