//! Users view: the working set table with search, status filter, name sort,
//! pagination, and the add/edit modal. All mutations stay in memory.

use api::ApiClient;
use dioxus::prelude::*;
use store::{seed, Directory, SortOrder, StatusFilter, User, UserQuery};
use ui::{ModalOverlay, UserDialog};

/// How many remote records join the seeded working set.
const REMOTE_INTAKE: usize = 5;

#[component]
pub fn Users() -> Element {
    let mut directory = use_signal(Directory::new);
    let mut query = use_signal(UserQuery::default);
    let mut load_error = use_signal(|| false);

    let mut show_dialog = use_signal(|| false);
    let mut editing = use_signal(|| Option::<u64>::None);
    // Dialog preload values; set right before the dialog opens.
    let mut draft_name = use_signal(String::new);
    let mut draft_email = use_signal(String::new);
    let mut draft_city = use_signal(String::new);

    // Seed the working set on mount: local fixtures first, then the first
    // few remote records. On fetch failure the seeds alone keep the view
    // usable; the client has already logged the error.
    let _loader = use_resource(move || async move {
        let mut users = seed::seed_users();
        match ApiClient::new().fetch_users().await {
            Ok(remote) => users.extend(remote.into_iter().take(REMOTE_INTAKE)),
            Err(_) => load_error.set(true),
        }
        directory.set(Directory::from_users(users));
    });

    // The derived window, recomputed only when the working set or the query
    // changes.
    let page = use_memo(move || query().run(directory().users()));

    let open_create = move |_| {
        editing.set(None);
        draft_name.set(String::new());
        draft_email.set(String::new());
        draft_city.set(String::new());
        show_dialog.set(true);
    };

    let open_edit = move |id: u64| {
        let dir = directory();
        if let Some(user) = dir.users().iter().find(|u| u.id == id) {
            editing.set(Some(id));
            draft_name.set(user.name.clone());
            draft_email.set(user.email.clone());
            draft_city.set(user.city.clone());
            show_dialog.set(true);
        }
    };

    let handle_delete = move |id: u64| {
        if !confirm_delete() {
            return;
        }
        directory.write().remove(id);
    };

    let handle_save = move |(name, email, city): (String, String, String)| {
        match editing() {
            Some(id) => {
                directory.write().update(id, name, email, city);
            }
            None => {
                directory.write().create(name, email, city);
            }
        }
        editing.set(None);
        show_dialog.set(false);
    };

    rsx! {
        div {
            class: "users-page",
            h1 { class: "page-title", "Users" }

            button {
                class: "primary add-user",
                onclick: open_create,
                "Add User"
            }

            if load_error() {
                div {
                    class: "load-notice",
                    span { "Failed to load users" }
                    button {
                        class: "notice-dismiss",
                        onclick: move |_| load_error.set(false),
                        "\u{00d7}"
                    }
                }
            }

            div {
                class: "controls",
                input {
                    class: "search-box",
                    r#type: "text",
                    placeholder: "Search user...",
                    value: query().search,
                    oninput: move |evt| query.write().set_search(evt.value()),
                }

                div {
                    class: "controls-selects",
                    select {
                        value: query().status.as_value(),
                        onchange: move |evt| {
                            query.write().set_status(StatusFilter::from_value(&evt.value()));
                        },
                        option { value: "all", "All Status" }
                        option { value: "active", "Active" }
                        option { value: "inactive", "Inactive" }
                    }
                    select {
                        value: query().order.as_value(),
                        onchange: move |evt| {
                            query.write().set_order(SortOrder::from_value(&evt.value()));
                        },
                        option { value: "asc", "Name A-Z" }
                        option { value: "desc", "Name Z-A" }
                    }
                }
            }

            table {
                class: "user-table",
                thead {
                    tr {
                        th { "Name" }
                        th { "Email" }
                        th { "City" }
                        th { "Status" }
                        th { "Action" }
                    }
                }
                tbody {
                    for user in page().rows {
                        UserRow {
                            key: "{user.id}",
                            user: user.clone(),
                            on_edit: open_edit,
                            on_delete: handle_delete,
                        }
                    }
                }
            }

            div {
                class: "pager",
                button {
                    disabled: !page().has_prev,
                    onclick: move |_| query.write().prev_page(),
                    "Prev"
                }
                span { class: "pager-page", "Page {page().page}" }
                button {
                    disabled: !page().has_next,
                    onclick: move |_| {
                        let total = page().filtered_total;
                        query.write().next_page(total);
                    },
                    "Next"
                }
            }

            if show_dialog() {
                ModalOverlay {
                    on_close: move |_| show_dialog.set(false),
                    UserDialog {
                        editing: editing().is_some(),
                        name: draft_name(),
                        email: draft_email(),
                        city: draft_city(),
                        on_save: handle_save,
                        on_cancel: move |_| show_dialog.set(false),
                    }
                }
            }
        }
    }
}

#[component]
fn UserRow(user: User, on_edit: EventHandler<u64>, on_delete: EventHandler<u64>) -> Element {
    let id = user.id;
    rsx! {
        tr {
            td { "{user.name}" }
            td { "{user.email}" }
            td { "{user.city}" }
            td {
                span { class: "status {user.status.as_str()}", "{user.status.as_str()}" }
            }
            td {
                class: "row-actions",
                button {
                    class: "row-action",
                    onclick: move |_| on_edit.call(id),
                    "Edit"
                }
                button {
                    class: "row-action danger",
                    onclick: move |_| on_delete.call(id),
                    "Delete"
                }
            }
        }
    }
}

/// Blocking confirmation before a delete. Browser prompt on the web target,
/// auto-accepted elsewhere so the flow stays drivable in native dev builds.
fn confirm_delete() -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .map(|w| {
                w.confirm_with_message("Are you sure you want to delete this user?")
                    .unwrap_or(false)
            })
            .unwrap_or(false)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        true
    }
}
