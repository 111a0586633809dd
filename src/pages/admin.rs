//! Administrator dashboard: system-wide metrics, cohort trends, and alerts.
//!
//! All figures are hardcoded demo data; the export action only logs.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use leptos::prelude::*;

use crate::components::stat_card::StatCard;

/// Severity of a critical alert.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Medium,
    High,
    Critical,
}

impl Severity {
    fn label(self) -> &'static str {
        match self {
            Severity::Medium => "Medium",
            Severity::High => "High",
            Severity::Critical => "Critical",
        }
    }

    fn badge_class(self) -> &'static str {
        match self {
            Severity::Medium => "badge badge--outline",
            Severity::High | Severity::Critical => "badge badge--danger",
        }
    }
}

struct CohortTrend {
    cohort: &'static str,
    score: u8,
    change: i32,
}

const WELLBEING_TRENDS: &[CohortTrend] = &[
    CohortTrend { cohort: "First Year", score: 68, change: -2 },
    CohortTrend { cohort: "Second Year", score: 75, change: 3 },
    CohortTrend { cohort: "Third Year", score: 78, change: 1 },
    CohortTrend { cohort: "Graduate", score: 71, change: -1 },
];

struct CriticalAlert {
    student_alias: &'static str,
    severity: Severity,
    time: &'static str,
    status: &'static str,
}

const CRITICAL_ALERTS: &[CriticalAlert] = &[
    CriticalAlert { student_alias: "Student_X42", severity: Severity::High, time: "2h ago", status: "Pending" },
    CriticalAlert { student_alias: "Student_Y78", severity: Severity::Critical, time: "4h ago", status: "Escalated" },
    CriticalAlert { student_alias: "Student_Z13", severity: Severity::Medium, time: "6h ago", status: "Resolved" },
];

/// Signed change label for trend rows (`+3`, `-2`, `0`).
fn change_label(change: i32) -> String {
    if change > 0 {
        format!("+{change}")
    } else {
        change.to_string()
    }
}

/// Decimal-grouped display for large counts (`1247` -> `"1,247"`).
fn thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i).is_multiple_of(3) {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

#[component]
pub fn AdminDashboard() -> impl IntoView {
    let on_export = move |_| log::info!("wellbeing report export requested");

    view! {
        <div class="dashboard admin-dashboard">
            <header class="dashboard__intro">
                <h1>"Admin Dashboard"</h1>
                <p>"System-wide analytics and mental health insights"</p>
            </header>

            <div class="dashboard__stats dashboard__stats--wide">
                <StatCard icon="👥" title="Total Students" value=thousands(1247) caption="registered"/>
                <StatCard icon="⚡" title="Active Users" value="389".to_owned() caption="this week" tone="success"/>
                <StatCard icon="❤️" title="Avg Wellbeing" value="73/100".to_owned() progress=73/>
                <StatCard icon="⚠" title="Critical Alerts" value="3".to_owned() caption="require attention" tone="danger"/>
                <StatCard icon="📈" title="Weekly Growth" value="+12%".to_owned() caption="engagement" tone="success"/>
                <StatCard icon="🧠" title="Response Time" value="2.1h".to_owned() caption="avg to help" tone="warning"/>
            </div>

            <div class="dashboard__grid">
                <section class="panel trends-panel">
                    <h2 class="panel__title">"📊 Wellbeing Trends by Cohort"</h2>
                    <div class="trends">
                        {WELLBEING_TRENDS
                            .iter()
                            .map(|trend| {
                                view! {
                                    <div class="trend-row">
                                        <span class="trend-row__cohort">{trend.cohort}</span>
                                        <div class="trend-row__bar">
                                            <div
                                                class="trend-row__fill"
                                                style:width=format!("{}%", trend.score)
                                            ></div>
                                        </div>
                                        <span class="trend-row__score">{format!("{}/100", trend.score)}</span>
                                        <span
                                            class="trend-row__change"
                                            class:trend-row__change--down=trend.change < 0
                                        >
                                            {change_label(trend.change)}
                                        </span>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </section>

                <aside class="panel alerts-panel">
                    <h2 class="panel__title">"⚠ Critical Alerts"</h2>
                    <div class="alerts">
                        {CRITICAL_ALERTS
                            .iter()
                            .map(|alert| {
                                view! {
                                    <div class="alert-row">
                                        <span class="alert-row__alias">{alert.student_alias}</span>
                                        <span class=alert.severity.badge_class()>{alert.severity.label()}</span>
                                        <span class="alert-row__time">{alert.time}</span>
                                        <span class="alert-row__status">{alert.status}</span>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                    <button class="btn btn--soft" on:click=on_export>
                        "⬇ Export Report"
                    </button>
                </aside>
            </div>
        </div>
    }
}
