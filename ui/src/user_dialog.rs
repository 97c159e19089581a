use dioxus::prelude::*;

/// Add/edit form shown inside the modal.
///
/// For an edit the form is preloaded from the record; for a create it starts
/// empty. Submitting with any field empty after trimming does nothing and
/// the dialog stays open.
#[component]
pub fn UserDialog(
    /// `true` when editing an existing record; switches the title and the
    /// submit label.
    editing: bool,
    name: String,
    email: String,
    city: String,
    on_save: EventHandler<(String, String, String)>,
    on_cancel: EventHandler<()>,
) -> Element {
    let mut name = use_signal(move || name);
    let mut email = use_signal(move || email);
    let mut city = use_signal(move || city);

    let handle_submit = move |_| {
        let n = name().trim().to_string();
        let e = email().trim().to_string();
        let c = city().trim().to_string();
        if n.is_empty() || e.is_empty() || c.is_empty() {
            return;
        }
        on_save.call((n, e, c));
    };

    rsx! {
        div {
            class: "dialog-body",
            h2 {
                class: "dialog-title",
                if editing { "Edit User" } else { "Add User" }
            }

            div {
                class: "form-field",
                input {
                    r#type: "text",
                    placeholder: "Name",
                    value: name(),
                    oninput: move |evt| name.set(evt.value()),
                }
            }
            div {
                class: "form-field",
                input {
                    r#type: "text",
                    placeholder: "Email",
                    value: email(),
                    oninput: move |evt| email.set(evt.value()),
                }
            }
            div {
                class: "form-field",
                input {
                    r#type: "text",
                    placeholder: "City",
                    value: city(),
                    oninput: move |evt| city.set(evt.value()),
                }
            }

            div {
                class: "form-actions",
                button {
                    class: "secondary",
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
                button {
                    class: "primary",
                    onclick: handle_submit,
                    if editing { "Update" } else { "Add" }
                }
            }
        }
    }
}
