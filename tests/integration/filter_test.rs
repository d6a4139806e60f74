//! Filter and search behavior over a parsed portfolio document.

use folio::portfolio::{Portfolio, ProjectFilter};

use super::helpers::SAMPLE_PORTFOLIO;

fn portfolio() -> Portfolio {
    Portfolio::from_json(SAMPLE_PORTFOLIO).expect("sample parses")
}

#[test]
fn sample_document_parses_with_all_sections() {
    let p = portfolio();
    assert_eq!(p.name, "Ada Example");
    assert_eq!(p.phrases, vec!["Analyst", "Designer"]);
    assert_eq!(p.projects.len(), 3);
    assert_eq!(p.categories(), vec!["analysis", "design"]);
    assert_eq!(p.contact.location.as_deref(), Some("Jakarta"));
}

#[test]
fn category_and_query_filters_combine() {
    let p = portfolio();

    let all = ProjectFilter::default();
    assert_eq!(all.apply(&p.projects).len(), 3);

    let analysis = ProjectFilter {
        category: Some("analysis".to_string()),
        query: String::new(),
    };
    assert_eq!(analysis.apply(&p.projects), vec![0, 2]);

    let analysis_dash = ProjectFilter {
        category: Some("analysis".to_string()),
        query: "dashboard".to_string(),
    };
    assert_eq!(analysis_dash.apply(&p.projects), vec![0]);

    let mismatch = ProjectFilter {
        category: Some("design".to_string()),
        query: "dashboard".to_string(),
    };
    assert!(mismatch.apply(&p.projects).is_empty());
}

#[test]
fn query_matches_descriptions_case_insensitively() {
    let p = portfolio();
    let filter = ProjectFilter {
        category: None,
        query: "SIGNUP".to_string(),
    };
    assert_eq!(filter.apply(&p.projects), vec![1]);
}
