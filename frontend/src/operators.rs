use std::rc::Rc;

use gloo_dialogs::{alert, confirm};
use log::{error, info};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::{write_then_reload, ApiError};
use crate::modal::{Modal, RecordModal};
use crate::models::{without_id, Operator, OperatorDetails, OPERATOR_FIELDS};
use crate::session::use_session;
use crate::utils::{input_value, read_only_field, text_field};

/* -------------------------------------------------------------------------- */
/*                                  helpers                                   */
/* -------------------------------------------------------------------------- */

/// User-facing message of a failed `POST /api/operators`.
pub fn register_failure_message(e: &ApiError) -> &'static str {
    if e.is_conflict() {
        "License number already registered"
    } else {
        "Failed to register operator"
    }
}

/// Asks for confirmation; `Some(id)` means the archive request may go out.
pub fn archive_target(operator: &Operator, confirm: impl FnOnce(&str) -> bool) -> Option<i64> {
    confirm(&operator.archive_prompt()).then_some(operator.id)
}

/* -------------------------------------------------------------------------- */
/*                                 list state                                 */
/* -------------------------------------------------------------------------- */

/// Operators shown in the table. Updates go through [`OperatorListAction`]
/// so an archive completing late filters the current list, not the one
/// captured when its button was rendered.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct OperatorList {
    pub items: Vec<Operator>,
}

pub enum OperatorListAction {
    Loaded(Vec<Operator>),
    Archived(i64),
}

impl Reducible for OperatorList {
    type Action = OperatorListAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let items = match action {
            OperatorListAction::Loaded(items) => items,
            OperatorListAction::Archived(id) => without_id(&self.items, id),
        };
        Rc::new(Self { items })
    }
}

/* -------------------------------------------------------------------------- */
/*                               main component                               */
/* -------------------------------------------------------------------------- */

#[function_component(ManageOperators)]
pub fn manage_operators() -> Html {
    let session = use_session();

    /* ---------------- states ---------------- */
    let operators = use_reducer(OperatorList::default);
    let register_open = use_state(|| false);
    let draft = use_state(OperatorDetails::default);
    let record = use_state(|| RecordModal::<Operator>::Closed);
    let submitting = use_state(|| false);

    /* -------------- initial load -------------- */
    {
        let operators = operators.clone();
        let api = session.api();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match api.list_operators().await {
                    Ok(items) => operators.dispatch(OperatorListAction::Loaded(items)),
                    Err(e) => error!("operators: {e}"),
                }
            });
            || ()
        });
    }

    /* -------------- register -------------- */
    let on_register = {
        let api = session.api();
        let operators = operators.clone();
        let register_open = register_open.clone();
        let draft = draft.clone();
        let submitting = submitting.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }
            submitting.set(true);

            let details = (*draft).clone();
            let api = api.clone();
            let operators = operators.clone();
            let register_open = register_open.clone();
            let draft = draft.clone();
            let submitting = submitting.clone();

            spawn_local(async move {
                let outcome = write_then_reload(api.create_operator(&details), || api.list_operators()).await;
                match outcome {
                    Ok(items) => {
                        info!("operator {} registered", details.license_no);
                        alert("Operator registered successfully");
                        operators.dispatch(OperatorListAction::Loaded(items));
                        draft.set(OperatorDetails::default());
                        register_open.set(false);
                    }
                    Err(e) => {
                        error!("create operator: {e}");
                        alert(register_failure_message(&e));
                    }
                }
                submitting.set(false);
            });
        })
    };

    /* -------------- update (edit mode of the view modal) -------------- */
    let on_update = {
        let api = session.api();
        let operators = operators.clone();
        let record = record.clone();
        let submitting = submitting.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(edited) = record.pending_write().cloned() else {
                return;
            };
            if *submitting {
                return;
            }
            submitting.set(true);

            let api = api.clone();
            let operators = operators.clone();
            let record = record.clone();
            let submitting = submitting.clone();

            spawn_local(async move {
                let outcome = write_then_reload(api.update_operator(&edited), || api.list_operators()).await;
                match outcome {
                    Ok(items) => {
                        info!("operator {} updated", edited.id);
                        alert("Operator updated successfully");
                        operators.dispatch(OperatorListAction::Loaded(items));
                        record.set(RecordModal::Closed);
                    }
                    Err(e) => {
                        error!("update operator {}: {e}", edited.id);
                        alert("Failed to update operator");
                    }
                }
                submitting.set(false);
            });
        })
    };

    /* -------------- archive -------------- */
    let on_archive = {
        let api = session.api();
        let operators = operators.clone();

        Callback::from(move |operator: Operator| {
            let Some(id) = archive_target(&operator, confirm) else {
                return;
            };

            let api = api.clone();
            let operators = operators.clone();
            spawn_local(async move {
                match api.archive_operator(id).await {
                    Ok(()) => {
                        info!("operator {id} archived");
                        alert("Operator archived successfully");
                        operators.dispatch(OperatorListAction::Archived(id));
                    }
                    Err(e) => {
                        error!("archive operator {id}: {e}");
                        alert("Failed to archive operator");
                    }
                }
            });
        })
    };

    let open_register = {
        let register_open = register_open.clone();
        Callback::from(move |_| register_open.set(true))
    };
    let close_register = {
        let register_open = register_open.clone();
        Callback::from(move |_| register_open.set(false))
    };
    let close_record = {
        let record = record.clone();
        Callback::from(move |_| record.set(RecordModal::Closed))
    };
    let on_edit = {
        let record = record.clone();
        Callback::from(move |_| record.set(record.edit()))
    };

    /* ---------------------- render ---------------------- */

    let register_form = html! {
        <form onsubmit={on_register}>
            { for OPERATOR_FIELDS.iter().map(|&field| {
                let setter = draft.clone();
                let oninput = Callback::from(move |e: InputEvent| {
                    if let Some(v) = input_value(&e) {
                        setter.set(setter.with(field, v));
                    }
                });
                text_field(field.label(), field.key(), draft.get(field), field.required(), "text", oninput)
            }) }
            <button type="submit" disabled={*submitting}>{ "Register Operator" }</button>
        </form>
    };

    let record_body = match &*record {
        RecordModal::Closed => Html::default(),
        RecordModal::Viewing(op) => html! {
            <div>
                { for OPERATOR_FIELDS.iter().map(|&field| read_only_field(field.label(), op.details.get(field))) }
                <button onclick={on_edit}>{ "Edit" }</button>
            </div>
        },
        RecordModal::Editing(op) => html! {
            <form onsubmit={on_update}>
                { for OPERATOR_FIELDS.iter().map(|&field| {
                    let record = record.clone();
                    let oninput = Callback::from(move |e: InputEvent| {
                        if let Some(v) = input_value(&e) {
                            record.set(record.update(|op| Operator {
                                details: op.details.with(field, v),
                                ..op.clone()
                            }));
                        }
                    });
                    text_field(field.label(), field.key(), op.details.get(field), field.required(), "text", oninput)
                }) }
                <button type="submit" disabled={*submitting}>{ "Update Operator" }</button>
            </form>
        },
    };
    let record_title = if record.is_editing() { "Edit Operator" } else { "View Operator" };

    html! {
        <div class="container">
            <button onclick={open_register}>{ "Register New Operator" }</button>

            <Modal open={*register_open} on_close={close_register} title="Register Operator">
                { register_form }
            </Modal>

            <h2>{ "Registered Operators" }</h2>
            <table>
                <thead>
                    <tr>
                        { for OPERATOR_FIELDS.iter().map(|f| html!(<th>{ f.label() }</th>)) }
                        <th>{ "Actions" }</th>
                    </tr>
                </thead>
                <tbody>
                    { for operators.items.iter().map(|op| {
                        let on_view = {
                            let record = record.clone();
                            let op = op.clone();
                            Callback::from(move |_| record.set(RecordModal::view(op.clone())))
                        };
                        let on_archive = {
                            let on_archive = on_archive.clone();
                            let op = op.clone();
                            Callback::from(move |_| on_archive.emit(op.clone()))
                        };
                        html! {
                            <tr key={op.id}>
                                { for OPERATOR_FIELDS.iter().map(|&f| html!(<td>{ op.details.get(f) }</td>)) }
                                <td>
                                    <button onclick={on_view}>{ "View" }</button>
                                    <button onclick={on_archive}>{ "Archive" }</button>
                                </td>
                            </tr>
                        }
                    }) }
                </tbody>
            </table>

            <Modal open={record.is_open()} on_close={close_record} title={record_title}>
                { record_body }
            </Modal>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn ana() -> Operator {
        let mut op = Operator { id: 11, ..Default::default() };
        op.details.firstname = "Ana".into();
        op.details.lastname = "Reyes".into();
        op
    }

    #[test]
    fn test_conflict_gets_licence_message() {
        let conflict = ApiError::Status { status: 409, text: "Conflict".into() };
        assert_eq!(register_failure_message(&conflict), "License number already registered");
    }

    #[test]
    fn test_other_failures_get_generic_message() {
        let server = ApiError::Status { status: 500, text: "Internal Server Error".into() };
        assert_eq!(register_failure_message(&server), "Failed to register operator");
        assert_eq!(register_failure_message(&ApiError::Network("offline".into())), "Failed to register operator");
    }

    #[test]
    fn test_declined_archive_sends_nothing() {
        let list = vec![ana()];
        let asked = Cell::new(None);

        let target = archive_target(&list[0], |prompt| {
            asked.set(Some(prompt.to_string()));
            false
        });

        assert_eq!(target, None);
        assert_eq!(asked.take().as_deref(), Some("Are you sure you want to archive Ana Reyes?"));
        assert_eq!(list, vec![ana()]);
    }

    #[test]
    fn test_confirmed_archive_removes_locally() {
        let mut other = ana();
        other.id = 12;
        let list = Rc::new(OperatorList { items: vec![ana(), other.clone()] });

        let id = archive_target(&list.items[0], |_| true).unwrap();
        assert_eq!(id, 11);
        assert_eq!(list.reduce(OperatorListAction::Archived(id)).items, vec![other]);
    }

    #[test]
    fn test_overlapping_archives_both_stick() {
        let ops: Vec<_> = (1..=3).map(|id| Operator { id, ..ana() }).collect();
        let list = Rc::new(OperatorList { items: ops.clone() });

        // second completion applies to the list left by the first
        let after = list
            .reduce(OperatorListAction::Archived(1))
            .reduce(OperatorListAction::Archived(2));

        assert_eq!(after.items, vec![ops[2].clone()]);
    }

    #[test]
    fn test_reload_replaces_list() {
        let list = Rc::new(OperatorList { items: vec![ana()] });
        let mut fresh = ana();
        fresh.id = 20;

        let after = list.reduce(OperatorListAction::Loaded(vec![fresh.clone()]));
        assert_eq!(after.items, vec![fresh]);
    }
}
