//! Dashboard view: four summary cards derived from the remote record count.

use api::ApiClient;
use dioxus::prelude::*;
use store::DashboardMetrics;

#[component]
pub fn Dashboard() -> Element {
    let mut metrics = use_signal(|| Option::<DashboardMetrics>::None);
    let mut loading = use_signal(|| true);
    let mut failed = use_signal(|| false);

    // Fetch the record count on mount. The failure is already logged by the
    // client; this view only decides what to show.
    let _loader = use_resource(move || async move {
        match ApiClient::new().fetch_users().await {
            Ok(users) => metrics.set(Some(DashboardMetrics::for_population(users.len()))),
            Err(_) => failed.set(true),
        }
        loading.set(false);
    });

    if loading() {
        return rsx! {
            div { class: "page-status", "Loading..." }
        };
    }
    if failed() {
        return rsx! {
            div { class: "page-status page-error", "Failed to load users" }
        };
    }

    let m = metrics().unwrap_or_default();

    rsx! {
        div {
            class: "dashboard",
            h1 { class: "page-title", "Dashboard" }

            div {
                class: "metric-grid",
                MetricCard { label: "Total Users", value: m.total_users.to_string() }
                MetricCard { label: "Active Users", value: m.active_users.to_string() }
                MetricCard { label: "New Registrations", value: m.new_registrations.to_string() }
                MetricCard { label: "Revenue", value: format!("₹{}", m.revenue) }
            }
        }
    }
}

#[component]
fn MetricCard(label: String, value: String) -> Element {
    rsx! {
        div {
            class: "metric-card",
            h2 { class: "metric-label", "{label}" }
            p { class: "metric-value", "{value}" }
        }
    }
}
