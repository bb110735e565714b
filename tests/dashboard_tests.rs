use chrono::NaiveDate;
use density_metrics::dashboard::{render, MarkerColor, Selection, Tab, TabView};
use density_metrics::parser::{parse_dataset, Dataset};
use density_metrics::utils::config::DashboardConfig;
use density_metrics::utils::error::SelectionError;
use pretty_assertions::assert_eq;
use serde_json::json;

const DATASET: &str = r#"{
    "contributions": [
        {"organization": "kubernetes", "repository": "kubernetes", "year_month": "2022-1",
         "contributor": "alice", "company": "acme", "location": "NY", "commits": 2},
        {"organization": "kubernetes", "repository": "kubernetes", "year_month": "2022-2",
         "contributor": "alice", "company": "acme", "location": "NY", "commits": 5},
        {"organization": "kubernetes", "repository": "kubernetes", "year_month": "2022-3",
         "contributor": "alice", "company": "acme", "location": "NY", "commits": 5},
        {"organization": "kubernetes", "repository": "kubernetes", "year_month": "2022-4",
         "contributor": "alice", "company": "acme", "location": "NY", "commits": 1},
        {"organization": "kubernetes", "repository": "kubectl", "year_month": "2022-2",
         "contributor": "bob", "commits": 4}
    ],
    "activity": [
        {"organization": "kubernetes", "repository": "kubernetes", "year_month": "2022-1",
         "star_increment": 100, "pull_request_increment": 3},
        {"organization": "kubernetes", "repository": "kubectl", "year_month": "2022-1",
         "star_increment": 50, "commit_increment": 10},
        {"organization": "kubernetes", "repository": "kubectl", "year_month": "2022-2",
         "fork_increment": 2}
    ],
    "pull_requests": [
        {"organization": "kubernetes", "repository": "kubectl", "year_month": "2022-1",
         "opened_at": "2022-01-01", "closed_at": "2022-02-10"},
        {"organization": "kubernetes", "repository": "kubectl", "year_month": "2022-5",
         "opened_at": "2022-05-12"},
        {"organization": "kubernetes", "repository": "kubernetes", "year_month": "2021-5",
         "opened_at": "2021-05-01"}
    ]
}"#;

fn dataset() -> Dataset {
    parse_dataset(DATASET).unwrap()
}

fn config() -> DashboardConfig {
    DashboardConfig::default().with_as_of(NaiveDate::from_ymd_opt(2022, 7, 1).unwrap())
}

#[test]
fn test_first_load_uses_configured_defaults() {
    let view = render(Tab::Communities, &dataset(), &config(), &Selection::new()).unwrap();

    assert_eq!(view.organization, "kubernetes");
    assert_eq!(view.drilldown.repository, "kubernetes");

    let TabView::Communities(communities) = view.view else {
        panic!("expected communities view");
    };
    let alice = &communities.breakdown.rows[0];
    assert_eq!(alice.name, "alice");
    assert_eq!(alice.counts, vec![2, 5, 5, 1]);
    assert_eq!(communities.committers.traces.len(), 2);
}

#[test]
fn test_click_drills_into_repository() {
    let selection = Selection::new().with_click(json!({"points": [{"text": "kubectl"}]}));
    let view = render(Tab::Activities, &dataset(), &config(), &selection).unwrap();

    assert_eq!(view.drilldown.repository, "kubectl");
    let TabView::Activities(activities) = view.view else {
        panic!("expected activities view");
    };
    assert_eq!(activities.breakdown.title.as_deref(), Some("kubectl"));
    assert_eq!(activities.breakdown.traces.len(), 10);
    for trace in &activities.breakdown.traces {
        assert_eq!(trace.x, vec!["2022-1", "2022-2"]);
    }
}

#[test]
fn test_density_derived_when_no_precomputed_rows() {
    let view = render(Tab::Activities, &dataset(), &config(), &Selection::new()).unwrap();
    let TabView::Activities(activities) = view.view else {
        panic!("expected activities view");
    };

    let total: f64 = activities.density.traces.iter().flat_map(|t| t.y.iter()).sum();
    assert!((total - 100.0).abs() < 1e-6, "shares sum to {}", total);
}

#[test]
fn test_unknown_organization_renders_empty_views() {
    let selection = Selection::new()
        .with_organization("foo")
        .with_click(json!({"points": [{"text": "bar"}]}));

    let view = render(Tab::Communities, &dataset(), &config(), &selection).unwrap();
    assert_eq!(view.drilldown.organization, "foo");

    let TabView::Communities(communities) = view.view else {
        panic!("expected communities view");
    };
    assert!(communities.breakdown.is_empty());
    assert!(communities.committers.is_empty());
}

#[test]
fn test_performance_scores_and_breakdown() {
    let selection = Selection::new().with_click(json!({"points": [{"label": "kubectl"}]}));
    let view = render(Tab::Performances, &dataset(), &config(), &selection).unwrap();

    let TabView::Performances(performances) = view.view else {
        panic!("expected performances view");
    };

    // closed in 40 days (0.66) plus open for 50 days (0.5); the year-old
    // kubernetes PR is past the timeout
    assert_eq!(performances.pull_requests.labels, vec!["kubectl"]);
    assert!((performances.pull_requests.values[0] - 1.16).abs() < 1e-9);
    assert!(performances.issues.is_empty());

    let trace = &performances.pull_request_breakdown.traces[0];
    assert_eq!(trace.x, vec!["2022-1", "2022-5"]);
    assert_eq!(trace.text, vec!["mild", "aging"]);
    assert_eq!(
        trace.marker_color,
        Some(MarkerColor::PerBar(vec!["gold".to_string(), "steelblue".to_string()]))
    );
}

#[test]
fn test_malformed_click_reports_missing_field() {
    let selection = Selection::new().with_click(json!({"points": []}));
    let err = render(Tab::Activities, &dataset(), &config(), &selection).unwrap_err();
    assert_eq!(err, SelectionError::MissingField("points[0]".to_string()));

    // performances reads the slice label, not the bar text
    let selection = Selection::new().with_click(json!({"points": [{"text": "kubectl"}]}));
    let err = render(Tab::Performances, &dataset(), &config(), &selection).unwrap_err();
    assert_eq!(err, SelectionError::MissingField("points[0].label".to_string()));
}

#[test]
fn test_identical_selections_give_identical_views() {
    let selection = Selection::new().with_click(json!({"points": [{"text": "kubectl"}]}));
    for tab in [Tab::Activities, Tab::Communities] {
        let first = render(tab, &dataset(), &config(), &selection).unwrap();
        let second = render(tab, &dataset(), &config(), &selection).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn test_table_window_ignores_other_organizations() {
    let dataset = parse_dataset(
        r#"{
        "contributions": [
            {"organization": "kubernetes", "repository": "kubernetes", "year_month": "2022-2",
             "contributor": "alice", "commits": 1},
            {"organization": "cncf", "repository": "helm", "year_month": "2019-5",
             "contributor": "bob", "commits": 3}
        ]
    }"#,
    )
    .unwrap();

    let view = render(Tab::Communities, &dataset, &config(), &Selection::new()).unwrap();
    let TabView::Communities(communities) = view.view else {
        panic!("expected communities view");
    };
    assert_eq!(&communities.breakdown.header[3..], &["Feb"]);
    assert_eq!(communities.breakdown.rows[0].counts, vec![1]);
}

#[test]
fn test_each_pie_drives_its_own_breakdown() {
    let dataset = parse_dataset(
        r#"{
        "pull_requests": [
            {"organization": "k", "repository": "a", "year_month": "2022-6",
             "opened_at": "2022-06-01", "closed_at": "2022-06-03"}
        ],
        "issues": [
            {"organization": "kubernetes", "repository": "kubernetes", "year_month": "2022-6",
             "opened_at": "2022-06-10"}
        ]
    }"#,
    )
    .unwrap();
    let selection = Selection::new()
        .with_organization("k")
        .with_click(json!({"points": [{"label": "a"}]}));

    let view = render(Tab::Performances, &dataset, &config(), &selection).unwrap();
    let TabView::Performances(performances) = view.view else {
        panic!("expected performances view");
    };
    assert_eq!(performances.pull_request_breakdown.title.as_deref(), Some("a"));
    assert_eq!(performances.pull_request_breakdown.traces[0].text, vec!["fast"]);
    assert_eq!(performances.issue_breakdown.title.as_deref(), Some("kubernetes"));
    assert_eq!(performances.issue_breakdown.traces[0].text, vec!["open"]);

    let selection = selection.with_issue_click(json!({"points": [{"label": "a"}]}));
    let view = render(Tab::Performances, &dataset, &config(), &selection).unwrap();
    let TabView::Performances(performances) = view.view else {
        panic!("expected performances view");
    };
    assert_eq!(performances.issue_breakdown.title.as_deref(), Some("a"));
    assert!(performances.issue_breakdown.is_empty());
}
