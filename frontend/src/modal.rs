use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub open: bool,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub title: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

/// Overlay shared by every manager. Visibility is owned by the caller; the
/// backdrop and the close button both report through `on_close`.
#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    if !props.open {
        return Html::default();
    }

    let on_backdrop = props.on_close.reform(|_: MouseEvent| ());
    let on_close_btn = props.on_close.reform(|_: MouseEvent| ());
    // keep clicks inside the dialog away from the backdrop
    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="modal-backdrop" onclick={on_backdrop}>
            <div class="modal-dialog" role="dialog" onclick={stop}>
                <div class="modal-header">
                    <h3>{ props.title.clone() }</h3>
                    <button type="button" class="modal-close" aria-label="Close modal" onclick={on_close_btn}>
                        { "×" }
                    </button>
                </div>
                <div class="modal-body">
                    { for props.children.iter() }
                </div>
            </div>
        </div>
    }
}

/* -------------------------------------------------------------------------- */
/*                       view / edit state of a record modal                   */
/* -------------------------------------------------------------------------- */

/// List → Viewing → Editing → List. Only `Editing` can lead to a write.
#[derive(Clone, PartialEq, Debug, Default)]
pub enum RecordModal<T> {
    #[default]
    Closed,
    Viewing(T),
    Editing(T),
}

impl<T: Clone> RecordModal<T> {
    pub fn view(record: T) -> Self {
        Self::Viewing(record)
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, Self::Editing(_))
    }

    pub fn record(&self) -> Option<&T> {
        match self {
            Self::Closed => None,
            Self::Viewing(r) | Self::Editing(r) => Some(r),
        }
    }

    /// Switches the open record to editable fields.
    pub fn edit(&self) -> Self {
        match self {
            Self::Viewing(r) | Self::Editing(r) => Self::Editing(r.clone()),
            Self::Closed => Self::Closed,
        }
    }

    /// Replaces the record being edited; ignored outside edit mode.
    pub fn update(&self, f: impl FnOnce(&T) -> T) -> Self {
        match self {
            Self::Editing(r) => Self::Editing(f(r)),
            other => other.clone(),
        }
    }

    /// The record to send on submit, only while editing.
    pub fn pending_write(&self) -> Option<&T> {
        match self {
            Self::Editing(r) => Some(r),
            _ => None,
        }
    }
}
