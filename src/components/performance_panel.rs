//! Performance Panel Component
//!
//! Org-wide completion stats for the admin dashboard.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn PerformancePanel() -> impl IntoView {
    let store = use_app_store();

    view! {
        <section class="performance-panel">
            <h3>"Performance"</h3>
            {move || match store.performance().get() {
                None => view! { <p class="empty">"No performance data yet"</p> }.into_any(),
                Some(perf) => view! {
                    <div class="performance-body">
                    <div class="stat-tiles">
                        <div class="stat-tile">
                            <span class="stat-value">{perf.total_tasks}</span>
                            <span class="stat-label">"Total tasks"</span>
                        </div>
                        <div class="stat-tile">
                            <span class="stat-value">{perf.completed_tasks}</span>
                            <span class="stat-label">"Completed"</span>
                        </div>
                        <div class="stat-tile">
                            <span class="stat-value">{perf.in_progress_tasks}</span>
                            <span class="stat-label">"In progress"</span>
                        </div>
                        <div class="stat-tile">
                            <span class="stat-value">{perf.pending_tasks}</span>
                            <span class="stat-label">"Pending"</span>
                        </div>
                        <div class="stat-tile">
                            <span class="stat-value">{format!("{:.1}%", perf.completion_rate_percent)}</span>
                            <span class="stat-label">"Completion rate"</span>
                        </div>
                    </div>
                    <table class="user-stats-table">
                        <thead>
                            <tr>
                                <th>"Name"</th>
                                <th>"Email"</th>
                                <th>"Total"</th>
                                <th>"Completed"</th>
                                <th>"Rate"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {perf.user_stats.iter().map(|u| view! {
                                <tr>
                                    <td>{u.full_name.clone()}</td>
                                    <td>{u.email.clone()}</td>
                                    <td>{u.total_tasks}</td>
                                    <td>{u.completed_tasks}</td>
                                    <td>{format!("{:.1}%", u.completion_rate_percent)}</td>
                                </tr>
                            }).collect_view()}
                        </tbody>
                    </table>
                    </div>
                }.into_any(),
            }}
        </section>
    }
}
