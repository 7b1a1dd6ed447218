//! Small DOM helpers shared by the forms.

use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

/// Current text of the `<input>` that fired `e`.
pub fn input_value(e: &InputEvent) -> Option<String> {
    e.target_dyn_into::<HtmlInputElement>().map(|input| input.value())
}

/// Selected id of a `<select>`; the placeholder option (empty value) is 0.
pub fn select_id(e: &Event) -> i64 {
    e.target_dyn_into::<HtmlSelectElement>()
        .map(|select| option_id(&select.value()))
        .unwrap_or(0)
}

/// Id carried by an `<option>` value, 0 for the placeholder.
pub fn option_id(value: &str) -> i64 {
    value.parse().unwrap_or(0)
}

/// Labelled text input used by the register and edit forms. `inputmode`
/// only picks the on-screen keyboard; the value stays text.
pub fn text_field(
    label: &str,
    name: &str,
    value: &str,
    required: bool,
    inputmode: &'static str,
    oninput: Callback<InputEvent>,
) -> Html {
    html! {
        <div class="form-group">
            <label for={name.to_string()}>{ label }</label>
            <input
                type="text"
                id={name.to_string()}
                name={name.to_string()}
                value={value.to_string()}
                {inputmode}
                {required}
                {oninput}
            />
        </div>
    }
}

/// Labelled read-only value, used by the view modals.
pub fn read_only_field(label: &str, value: &str) -> Html {
    html! {
        <p class="read-only-field">
            <strong>{ format!("{label}: ") }</strong>{ value }
        </p>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_id() {
        assert_eq!(option_id("17"), 17);
        assert_eq!(option_id(""), 0);
        assert_eq!(option_id("Select Van"), 0);
    }
}
