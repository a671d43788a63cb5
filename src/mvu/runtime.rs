use crate::error::CoreError;
use crate::mvu::round::{Deps, Msg, RoundModel, run_effect, update};

/// Runs the MVU loop for a round model: seeds with `init_msg` and drains effects.
///
/// # Errors
///
/// Returns the first error an effect reports. Errors are not carried over
/// from one run to the next.
pub async fn run_round(
    model: &mut RoundModel,
    init_msg: Msg,
    deps: Deps<'_>,
) -> Result<(), CoreError> {
    model.error = None;
    let mut effects = update(model, init_msg);
    while let Some(effect) = effects.pop() {
        let msg = run_effect(effect, model, deps).await;
        match msg {
            Msg::Failed(e) => {
                // Record failure, hand it to the caller and stop the loop.
                update(model, Msg::Failed(e.clone()));
                model.error = None;
                return Err(e);
            }
            other => {
                let next = update(model, other);
                effects.extend(next);
            }
        }
    }
    match model.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
