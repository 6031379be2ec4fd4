use crate::buffer::BoundedBuffer;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{EnvUpdateError, Result};
use crate::model::{EditSettings, Scope};
use crate::store::ValueStore;
use crate::tokenizer::next_token;

/// Reads `name` and splits it into segments the same way an edit would.
pub fn run<S: ValueStore>(
    store: &S,
    name: &str,
    scope: Scope,
    settings: &EditSettings,
) -> Result<CmdResult> {
    let value = store.get(name, scope).ok_or_else(|| {
        EnvUpdateError::Api(format!("No value named {} in the {} scope", name, scope))
    })?;

    let mut source = BoundedBuffer::new(settings.long_capacity)?;
    if !source.assign(&value) {
        return Err(EnvUpdateError::Api(format!(
            "{} is longer than {} characters",
            name, settings.long_capacity
        )));
    }

    let mut segment = BoundedBuffer::new(source.len().max(1))?;
    let mut cursor = 0;
    let mut segments = Vec::new();
    while next_token(&source, settings.delimiter, &mut cursor, &mut segment) {
        segments.push(segment.to_string());
    }

    let mut result = CmdResult::default()
        .with_value(value)
        .with_segments(segments);
    if result.segments.iter().any(String::is_empty) {
        result.add_message(CmdMessage::warning(format!(
            "{} contains empty segments",
            name
        )));
    }
    Ok(result)
}
