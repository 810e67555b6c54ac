use std::iter::Peekable;
use std::str::Chars;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyPredicateError {
    #[error("missing entity set name in '{0}'")]
    MissingEntitySet(String),

    #[error("unterminated key predicate in '{0}'")]
    Unterminated(String),

    #[error("empty key predicate")]
    Empty,

    #[error("unterminated quoted key value")]
    UnterminatedQuote,

    #[error("unexpected character '{0}' in key predicate")]
    Unexpected(char),

    #[error("mixed named and positional key values")]
    Mixed,

    #[error("duplicate key field '{0}'")]
    DuplicateField(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyPredicate {
    /// `Set('value')`, only meaningful for single-field keys.
    Positional(String),
    /// `Set(a='x',b='y')`, in the order the client wrote them.
    Named(Vec<(String, String)>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceSegment {
    pub entity_set: String,
    pub predicate: Option<KeyPredicate>,
}

/// Splits a path segment such as `CustomersV3(dataAreaId='USMF',CustomerAccount='C1')`
/// into the entity set name and its key predicate.
pub fn parse_resource_segment(segment: &str) -> Result<ResourceSegment, KeyPredicateError> {
    let Some(open) = segment.find('(') else {
        if segment.is_empty() {
            return Err(KeyPredicateError::MissingEntitySet(segment.to_string()));
        }
        return Ok(ResourceSegment {
            entity_set: segment.to_string(),
            predicate: None,
        });
    };

    let entity_set = &segment[..open];
    if entity_set.is_empty() {
        return Err(KeyPredicateError::MissingEntitySet(segment.to_string()));
    }
    let inner = segment[open + 1..]
        .strip_suffix(')')
        .ok_or_else(|| KeyPredicateError::Unterminated(segment.to_string()))?;

    Ok(ResourceSegment {
        entity_set: entity_set.to_string(),
        predicate: Some(parse_predicate(inner)?),
    })
}

fn parse_predicate(inner: &str) -> Result<KeyPredicate, KeyPredicateError> {
    if inner.trim().is_empty() {
        return Err(KeyPredicateError::Empty);
    }

    let mut chars = inner.chars().peekable();
    let mut named: Vec<(String, String)> = Vec::new();
    let mut positional: Option<String> = None;

    loop {
        skip_whitespace(&mut chars);
        let first = read_value(&mut chars)?;
        skip_whitespace(&mut chars);

        if chars.peek() == Some(&'=') {
            chars.next();
            if positional.is_some() {
                return Err(KeyPredicateError::Mixed);
            }
            skip_whitespace(&mut chars);
            let value = read_value(&mut chars)?;
            if named.iter().any(|(name, _)| *name == first) {
                return Err(KeyPredicateError::DuplicateField(first));
            }
            named.push((first, value));
        } else {
            if !named.is_empty() || positional.is_some() {
                return Err(KeyPredicateError::Mixed);
            }
            positional = Some(first);
        }

        skip_whitespace(&mut chars);
        match chars.next() {
            None => break,
            Some(',') => continue,
            Some(other) => return Err(KeyPredicateError::Unexpected(other)),
        }
    }

    match positional {
        Some(value) => Ok(KeyPredicate::Positional(value)),
        None => Ok(KeyPredicate::Named(named)),
    }
}

fn skip_whitespace(chars: &mut Peekable<Chars<'_>>) {
    while chars.peek().is_some_and(|c| c.is_whitespace()) {
        chars.next();
    }
}

/// Reads either a quoted literal (`''` escapes a quote) or a bare token.
fn read_value(chars: &mut Peekable<Chars<'_>>) -> Result<String, KeyPredicateError> {
    if chars.peek() == Some(&'\'') {
        chars.next();
        let mut value = String::new();
        loop {
            match chars.next() {
                None => return Err(KeyPredicateError::UnterminatedQuote),
                Some('\'') if chars.peek() == Some(&'\'') => {
                    chars.next();
                    value.push('\'');
                }
                Some('\'') => return Ok(value),
                Some(c) => value.push(c),
            }
        }
    }

    let mut value = String::new();
    while let Some(&c) = chars.peek() {
        if c == ',' || c == '=' || c.is_whitespace() {
            break;
        }
        if c == '\'' || c == '(' || c == ')' {
            return Err(KeyPredicateError::Unexpected(c));
        }
        value.push(c);
        chars.next();
    }
    match chars.peek() {
        _ if !value.is_empty() => Ok(value),
        Some(&c) => Err(KeyPredicateError::Unexpected(c)),
        None => Err(KeyPredicateError::Empty),
    }
}
