use gloo_dialogs::alert;
use log::{error, info};
use web_sys::HtmlSelectElement;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::ApiError;
use crate::models::{AssignmentDraft, AssignmentOption};
use crate::session::use_session;
use crate::utils::select_id;

/// Keeps a `<select>` showing `id` after the draft changes from code
/// (reset after a successful submit).
#[hook]
fn use_select_sync(select_ref: NodeRef, id: i64) {
    use_effect_with(id, move |id| {
        if let Some(sel) = select_ref.cast::<HtmlSelectElement>() {
            sel.set_value(&if *id == 0 { String::new() } else { id.to_string() });
        }
        || ()
    });
}

fn select_options(placeholder: &str, options: &[AssignmentOption]) -> Html {
    html! {
        <>
            <option key="placeholder" value="">{ placeholder }</option>
            { for options.iter().map(|o| html! {
                <option key={o.id} value={o.id.to_string()}>{ &o.label }</option>
            }) }
        </>
    }
}

/// Options of one select list. A failed load is logged and leaves the list
/// empty; the other list is unaffected.
fn load_options<T>(what: &str, loaded: Result<Vec<T>, ApiError>) -> Vec<AssignmentOption>
where
    for<'a> AssignmentOption: From<&'a T>,
{
    match loaded {
        Ok(list) => list.iter().map(AssignmentOption::from).collect(),
        Err(e) => {
            error!("{what}: {e}");
            Vec::new()
        }
    }
}

/// Selection left in the form once a submit settled: cleared on success,
/// kept for another try on failure.
fn draft_after_submit(draft: AssignmentDraft, outcome: &Result<(), ApiError>) -> AssignmentDraft {
    match outcome {
        Ok(()) => AssignmentDraft::default(),
        Err(_) => draft,
    }
}

#[function_component(ManageAssignments)]
pub fn manage_assignments() -> Html {
    let session = use_session();

    /* ---------------- states ---------------- */
    let operators = use_state(Vec::<AssignmentOption>::new);
    let vans = use_state(Vec::<AssignmentOption>::new);
    let draft = use_state(AssignmentDraft::default);
    let submitting = use_state(|| false);
    let operator_ref = use_node_ref();
    let van_ref = use_node_ref();

    /* -------------- both lists, fetched together -------------- */
    {
        let operators = operators.clone();
        let vans = vans.clone();
        let api = session.api();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let (ops, vs) = futures::join!(api.list_operators(), api.list_vans());
                operators.set(load_options("operators", ops));
                vans.set(load_options("vans", vs));
            });
            || ()
        });
    }

    use_select_sync(operator_ref.clone(), draft.operator_id);
    use_select_sync(van_ref.clone(), draft.van_id);

    /* -------------- handlers -------------- */
    let on_operator = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            draft.set(AssignmentDraft { operator_id: select_id(&e), ..*draft });
        })
    };
    let on_van = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            draft.set(AssignmentDraft { van_id: select_id(&e), ..*draft });
        })
    };

    let on_submit = {
        let api = session.api();
        let draft = draft.clone();
        let submitting = submitting.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }
            let pair = *draft;
            if !pair.is_complete() {
                alert("Select both an operator and a van");
                return;
            }
            submitting.set(true);

            let api = api.clone();
            let draft = draft.clone();
            let submitting = submitting.clone();
            spawn_local(async move {
                let outcome = api.create_assignment(&pair).await;
                match &outcome {
                    Ok(()) => {
                        info!("operator {} assigned to van {}", pair.operator_id, pair.van_id);
                        alert("Assignment created successfully");
                    }
                    Err(e) => {
                        error!("create assignment: {e}");
                        alert("Failed to create assignment");
                    }
                }
                draft.set(draft_after_submit(pair, &outcome));
                submitting.set(false);
            });
        })
    };

    /* ---------------------- render ---------------------- */
    html! {
        <div class="container">
            <h2>{ "Assign Operator to Van" }</h2>
            <form onsubmit={on_submit}>
                <div class="form-group">
                    <label>{ "Operator" }</label>
                    <select ref={operator_ref} name="operator_id" onchange={on_operator} required={true}>
                        { select_options("Select Operator", &operators) }
                    </select>
                </div>
                <div class="form-group">
                    <label>{ "Van" }</label>
                    <select ref={van_ref} name="van_id" onchange={on_van} required={true}>
                        { select_options("Select Van", &vans) }
                    </select>
                </div>
                <button type="submit" disabled={*submitting}>{ "Create Assignment" }</button>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Operator, Van};
    use serde_json::json;

    #[test]
    fn test_loaded_lists_become_options() {
        let ops: Vec<Operator> = serde_json::from_value(json!([
            { "id": 4, "firstname": "Ana", "lastname": "Reyes" },
            { "id": 5, "firstname": "Juan", "lastname": "Dela Cruz" }
        ]))
        .unwrap();
        let vans: Vec<Van> = serde_json::from_value(json!([{ "id": 8, "plate_number": "NBC 1234" }])).unwrap();

        let op_options = load_options("operators", Ok(ops));
        assert_eq!(op_options.len(), 2);
        assert_eq!(op_options[1], AssignmentOption { id: 5, label: "Juan Dela Cruz".into() });
        assert_eq!(
            load_options("vans", Ok(vans)),
            vec![AssignmentOption { id: 8, label: "NBC 1234".into() }]
        );
    }

    #[test]
    fn test_failed_load_leaves_empty_list() {
        let failed: Result<Vec<Van>, _> = Err(ApiError::Network("offline".into()));
        assert!(load_options("vans", failed).is_empty());
    }

    #[test]
    fn test_success_resets_selection() {
        let pair = AssignmentDraft { van_id: 8, operator_id: 4 };
        assert_eq!(draft_after_submit(pair, &Ok(())), AssignmentDraft { van_id: 0, operator_id: 0 });
    }

    #[test]
    fn test_failure_keeps_selection() {
        let pair = AssignmentDraft { van_id: 8, operator_id: 4 };
        let failed = Err(ApiError::Status { status: 500, text: "Internal Server Error".into() });
        assert_eq!(draft_after_submit(pair, &failed), pair);
    }
}
