use gloo_dialogs::alert;
use log::{error, info};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::write_then_reload;
use crate::modal::{Modal, RecordModal};
use crate::models::{record_entries, Van, VanDraft, VanField, VanFieldKind, VAN_FIELDS};
use crate::session::use_session;
use crate::utils::{input_value, text_field};

/// Columns of the van table; the rest is only shown in the view modal.
const LIST_COLUMNS: [VanField; 6] = [
    VanField::MvFileNo,
    VanField::PlateNumber,
    VanField::EngineNo,
    VanField::ChassisNo,
    VanField::Denomination,
    VanField::PistonDisplacement,
];

fn input_mode(field: VanField) -> &'static str {
    match field.kind() {
        VanFieldKind::Text => "text",
        VanFieldKind::Integer => "numeric",
        VanFieldKind::Float => "decimal",
    }
}

/* -------------------------------------------------------------------------- */
/*                               main component                               */
/* -------------------------------------------------------------------------- */

#[function_component(ManageVans)]
pub fn manage_vans() -> Html {
    let session = use_session();

    /* ---------------- states ---------------- */
    let vans = use_state(Vec::<Van>::new);
    let register_open = use_state(|| false);
    let draft = use_state(VanDraft::default);
    let record = use_state(|| RecordModal::<Van>::Closed);
    let submitting = use_state(|| false);

    /* -------------- initial load -------------- */
    {
        let vans = vans.clone();
        let api = session.api();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match api.list_vans().await {
                    Ok(list) => vans.set(list),
                    Err(e) => error!("vans: {e}"),
                }
            });
            || ()
        });
    }

    /* -------------- register -------------- */
    let on_register = {
        let api = session.api();
        let vans = vans.clone();
        let register_open = register_open.clone();
        let draft = draft.clone();
        let submitting = submitting.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }
            submitting.set(true);

            let details = draft.to_details();
            let api = api.clone();
            let vans = vans.clone();
            let register_open = register_open.clone();
            let draft = draft.clone();
            let submitting = submitting.clone();

            spawn_local(async move {
                let outcome = write_then_reload(api.create_van(&details), || api.list_vans()).await;
                match outcome {
                    Ok(list) => {
                        info!("van {} registered", details.plate_number);
                        alert("Van registered successfully");
                        vans.set(list);
                        draft.set(VanDraft::default());
                        register_open.set(false);
                    }
                    Err(e) => {
                        error!("create van: {e}");
                        alert("Failed to register van");
                    }
                }
                submitting.set(false);
            });
        })
    };

    /* -------------- edit: sends the record as displayed -------------- */
    let on_edit = {
        let api = session.api();
        let vans = vans.clone();
        let record = record.clone();
        let submitting = submitting.clone();

        Callback::from(move |_: MouseEvent| {
            let Some(van) = record.record().cloned() else {
                return;
            };
            if *submitting {
                return;
            }
            submitting.set(true);

            let api = api.clone();
            let vans = vans.clone();
            let record = record.clone();
            let submitting = submitting.clone();

            spawn_local(async move {
                let outcome = write_then_reload(api.update_van(&van), || api.list_vans()).await;
                match outcome {
                    Ok(list) => {
                        info!("van {} updated", van.id);
                        vans.set(list);
                        record.set(RecordModal::Closed);
                    }
                    Err(e) => {
                        error!("update van {}: {e}", van.id);
                        alert("Failed to update van");
                    }
                }
                submitting.set(false);
            });
        })
    };

    /* -------------- archive (no confirmation) -------------- */
    let on_archive = {
        let api = session.api();
        let vans = vans.clone();

        Callback::from(move |id: i64| {
            let api = api.clone();
            let vans = vans.clone();
            spawn_local(async move {
                match write_then_reload(api.archive_van(id), || api.list_vans()).await {
                    Ok(list) => {
                        info!("van {id} archived");
                        vans.set(list);
                    }
                    Err(e) => {
                        error!("archive van {id}: {e}");
                        alert("Failed to archive van");
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

    /* ---------------------- render ---------------------- */

    let register_form = html! {
        <form onsubmit={on_register}>
            <div class="form-grid">
                { for VAN_FIELDS.iter().map(|&field| {
                    let setter = draft.clone();
                    let oninput = Callback::from(move |e: InputEvent| {
                        if let Some(v) = input_value(&e) {
                            setter.set(setter.with(field, v));
                        }
                    });
                    text_field(field.label(), field.key(), draft.get(field), true, input_mode(field), oninput)
                }) }
            </div>
            <button type="submit" disabled={*submitting}>{ "Register Van" }</button>
        </form>
    };

    let record_body = match record.record() {
        None => Html::default(),
        Some(van) => html! {
            <div>
                <div class="form-grid">
                    { for record_entries(van.record()).into_iter().map(|(label, value)| html! {
                        <div class="form-group" key={label.clone()}>
                            <label>{ label }</label>
                            <input type="text" value={value} readonly={true} />
                        </div>
                    }) }
                </div>
                <button onclick={on_edit} disabled={*submitting}>{ "Edit" }</button>
            </div>
        },
    };

    html! {
        <div class="container">
            <button onclick={open_register}>{ "Register New Van" }</button>

            <Modal open={*register_open} on_close={close_register} title="Van Registration">
                { register_form }
            </Modal>

            <h2>{ "Registered Vans" }</h2>
            <table>
                <thead>
                    <tr>
                        { for LIST_COLUMNS.iter().map(|f| html!(<th>{ f.label() }</th>)) }
                        <th>{ "Actions" }</th>
                    </tr>
                </thead>
                <tbody>
                    { for vans.iter().map(|van| {
                        let on_view = {
                            let record = record.clone();
                            let van = van.clone();
                            Callback::from(move |_| record.set(RecordModal::view(van.clone())))
                        };
                        let on_archive = {
                            let on_archive = on_archive.clone();
                            let id = van.id;
                            Callback::from(move |_| on_archive.emit(id))
                        };
                        html! {
                            <tr key={van.id}>
                                { for LIST_COLUMNS.iter().map(|&f| html!(<td>{ van.text(f) }</td>)) }
                                <td>
                                    <button onclick={on_view}>{ "View" }</button>
                                    <button onclick={on_archive}>{ "Archive" }</button>
                                </td>
                            </tr>
                        }
                    }) }
                </tbody>
            </table>

            <Modal open={record.is_open()} on_close={close_record} title="View Van Details">
                { record_body }
            </Modal>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn van() -> Van {
        serde_json::from_value(json!({
            "id": 3,
            "mv_file_no": "1301-00000123456",
            "plate_number": "NBC 1234",
            "engine_no": "4D56-AB1234",
            "chassis_no": "KMJWA37HABU123456",
            "denomination": "Van",
            "piston_displacement": "2476",
            "number_of_cylinders": 4,
            "year_model": 2019
        }))
        .unwrap()
    }

    #[test]
    fn test_list_columns() {
        let van = van();
        let row: Vec<_> = LIST_COLUMNS.iter().map(|&f| van.text(f)).collect();
        assert_eq!(row, ["1301-00000123456", "NBC 1234", "4D56-AB1234", "KMJWA37HABU123456", "Van", "2476"]);
    }

    #[test]
    fn test_numeric_inputs_get_numeric_keyboard() {
        assert_eq!(input_mode(VanField::PlateNumber), "text");
        assert_eq!(input_mode(VanField::YearModel), "numeric");
        assert_eq!(input_mode(VanField::NetCapacity), "decimal");
    }

    #[test]
    fn test_view_shows_exactly_the_record() {
        let entries = record_entries(van().record());

        assert_eq!(entries.len(), 9);
        assert_eq!(entries[0], ("id".to_string(), "3".to_string()));
        assert!(entries.contains(&("number of cylinders".to_string(), "4".to_string())));
        assert!(!entries.iter().any(|(label, _)| label == "gross weight"));
    }

    #[test]
    fn test_view_keeps_odd_values_verbatim() {
        let van: Van = serde_json::from_value(json!({ "id": 5, "plate_number": "ABC 123", "year_model": "N/A" })).unwrap();

        assert_eq!(
            record_entries(van.record()),
            vec![
                ("id".to_string(), "5".to_string()),
                ("plate number".to_string(), "ABC 123".to_string()),
                ("year model".to_string(), "N/A".to_string()),
            ]
        );
    }
}
