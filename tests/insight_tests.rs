mod common;

use crewsight::core::insights::derive_insights;
use crewsight::models::insight::Severity;
use crewsight::models::kpi::{ActivityKpi, AttendanceKpi};

fn att(auto_clockout_days: u32, total_hours: f64, days_present: u32) -> AttendanceKpi {
    AttendanceKpi {
        auto_clockout_days,
        total_hours,
        days_present,
    }
}

fn act(tasks_overdue: u32, total_activities: u32) -> ActivityKpi {
    ActivityKpi {
        tasks_overdue,
        total_activities,
    }
}

#[test]
fn test_no_rules_fire_returns_empty() {
    // auto clockouts and overdue both present but below threshold,
    // hours with activities, activities below the productivity bar
    let insights = derive_insights(&att(1, 40.0, 5), &act(2, 10));
    assert!(insights.is_empty());
}

#[test]
fn test_auto_clockout_warning_fires_at_threshold() {
    let insights = derive_insights(&att(3, 40.0, 5), &act(0, 5));

    let warn = insights
        .iter()
        .find(|i| i.title == "Frequently forgets clock-out")
        .expect("warning should fire at 3 auto clock-out days");
    assert_eq!(warn.severity, Severity::Warning);
    // description carries the exact count
    assert!(warn.description.contains('3'));
}

#[test]
fn test_overdue_warning_fires_at_threshold() {
    let insights = derive_insights(&att(0, 40.0, 5), &act(4, 5));

    let warn = insights
        .iter()
        .find(|i| i.title == "High task overdue")
        .expect("warning should fire at 3+ overdue tasks");
    assert!(warn.description.contains('4'));
}

#[test]
fn test_rules_three_and_four_co_fire() {
    // hours logged, zero activities, nothing overdue, no auto clock-outs:
    // both the info and the success insight fire, in declaration order
    let insights = derive_insights(&att(0, 9.0, 1), &act(0, 0));

    let titles: Vec<&str> = insights.iter().map(|i| i.title.as_str()).collect();
    assert_eq!(
        titles,
        vec!["Hours logged without activity", "Good consistency"]
    );
    assert_eq!(insights[0].severity, Severity::Info);
    assert_eq!(insights[1].severity, Severity::Success);
}

#[test]
fn test_high_productivity_fires_above_fifteen() {
    let at_bar = derive_insights(&att(0, 40.0, 5), &act(0, 15));
    assert!(!at_bar.iter().any(|i| i.title == "High productivity"));

    let above = derive_insights(&att(0, 40.0, 5), &act(0, 16));
    let prod = above
        .iter()
        .find(|i| i.title == "High productivity")
        .expect("success should fire above 15 activities");
    assert_eq!(prod.severity, Severity::Success);
    assert!(prod.description.contains("16"));
}

#[test]
fn test_rule_firing_is_monotonic_on_overdue() {
    // going from 2 to 3 overdue must add exactly the overdue warning
    // and must not remove any previously fired insight
    let before = derive_insights(&att(3, 40.0, 5), &act(2, 20));
    let after = derive_insights(&att(3, 40.0, 5), &act(3, 20));

    assert_eq!(after.len(), before.len() + 1);
    assert!(after.iter().any(|i| i.title == "High task overdue"));
    for ins in &before {
        assert!(after.iter().any(|i| i.title == ins.title));
    }
}

#[test]
fn test_output_preserves_declaration_order_not_severity_order() {
    // rules 1, 2 and 5 fire together: two warnings then a success
    let insights = derive_insights(&att(5, 40.0, 5), &act(6, 20));

    let titles: Vec<&str> = insights.iter().map(|i| i.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Frequently forgets clock-out",
            "High task overdue",
            "High productivity"
        ]
    );
}

#[test]
fn test_severity_presentation_hints() {
    assert_eq!(Severity::Warning.label(), "warning");
    assert_eq!(Severity::Info.label(), "info");
    assert_eq!(Severity::Success.label(), "success");
    assert!(!Severity::Warning.color().is_empty());
    assert!(!Severity::Success.icon().is_empty());
}
