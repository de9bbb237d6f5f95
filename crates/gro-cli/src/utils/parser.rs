use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid rename '{0}'. Expected 'OLD=NEW' (e.g., 'WAT=SOL').")]
    InvalidRenamePair(String),

    #[error("Component '{component}' cannot be empty in rename '{pair}'.")]
    EmptyComponent {
        component: &'static str,
        pair: String,
    },
}

/// Splits an `OLD=NEW` rename argument into its two names.
pub fn parse_rename_pair(pair: &str) -> Result<(String, String), ParseError> {
    let (old, new) = pair
        .split_once('=')
        .ok_or_else(|| ParseError::InvalidRenamePair(pair.to_string()))?;
    let (old, new) = (old.trim(), new.trim());

    if old.is_empty() {
        return Err(ParseError::EmptyComponent {
            component: "OLD",
            pair: pair.to_string(),
        });
    }
    if new.is_empty() {
        return Err(ParseError::EmptyComponent {
            component: "NEW",
            pair: pair.to_string(),
        });
    }
    Ok((old.to_string(), new.to_string()))
}

/// Splits a list of `OLD=NEW` arguments into parallel old and new name lists.
pub fn parse_rename_pairs(pairs: &[String]) -> Result<(Vec<String>, Vec<String>), ParseError> {
    let mut old_names = Vec::with_capacity(pairs.len());
    let mut new_names = Vec::with_capacity(pairs.len());
    for pair in pairs {
        let (old, new) = parse_rename_pair(pair)?;
        old_names.push(old);
        new_names.push(new);
    }
    Ok((old_names, new_names))
}
