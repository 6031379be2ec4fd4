use crate::buffer::BoundedBuffer;
use crate::editor::ListEditor;
use crate::error::{EditFailure, Result};
use crate::model::{Action, EditRequest, EditResult, EditSettings};
use crate::store::ValueStore;
use tracing::{debug, warn};

/// Reads the list, applies the edit and writes the list back.
///
/// The returned content is the edited list as it would be handed back to the
/// caller, i.e. copied into an exchange-capacity buffer. If it does not fit there
/// the content is empty, but the edit and the write still count as a success.
///
/// Nothing is written unless the edit itself succeeded. Requests with
/// [`Action::NoOp`] or an unrecognized scope touch the store not at all.
pub fn run<S: ValueStore>(
    store: &S,
    request: &EditRequest,
    settings: &EditSettings,
) -> Result<EditResult> {
    let mut result = BoundedBuffer::new(settings.exchange_capacity)?;

    if request.action == Action::NoOp {
        return Ok(EditResult::failed(result, EditFailure::UnknownAction));
    }

    let mut name = BoundedBuffer::new(settings.exchange_capacity)?;
    let mut target = BoundedBuffer::new(settings.exchange_capacity)?;
    if !name.assign(&request.name) || !target.assign(&request.segment) {
        debug!(
            capacity = settings.exchange_capacity,
            "input does not fit the exchange buffer"
        );
        return Ok(EditResult::failed(result, EditFailure::CapacityExceeded));
    }
    let name = name.to_string();

    if request.scope.is_null() {
        return Ok(EditResult::failed(result, EditFailure::StoreUnavailable));
    }

    let Some(stored) = store.get(&name, request.scope) else {
        debug!(name = %name, scope = %request.scope, "no value to edit");
        return Ok(EditResult::failed(result, EditFailure::ValueNotFound));
    };

    let mut source = BoundedBuffer::new(settings.long_capacity)?;
    if !source.assign(&stored) {
        warn!(
            name = %name,
            len = stored.chars().count(),
            capacity = settings.long_capacity,
            "stored value is too long to edit"
        );
        return Ok(EditResult::failed(result, EditFailure::CapacityExceeded));
    }

    let editor = ListEditor::new(settings.delimiter);
    let mut edited = BoundedBuffer::new(settings.long_capacity)?;
    let edit_ok = editor.edit(request.action, &source, &target, &mut edited);

    if !result.assign_buffer(&edited) {
        warn!(
            len = edited.len(),
            capacity = settings.exchange_capacity,
            "edited list does not fit the result string"
        );
    }

    if !edit_ok {
        return Ok(EditResult::failed(result, EditFailure::CapacityExceeded));
    }

    if !store.set(&name, request.scope, &edited.to_string()) {
        return Ok(EditResult::failed(result, EditFailure::WriteFailed));
    }

    debug!(
        name = %name,
        scope = %request.scope,
        action = %request.action,
        "list updated"
    );
    Ok(EditResult::succeeded(result))
}
