use super::*;
use serde_json::json;

fn posting(value: serde_json::Value) -> ExtractJobPostingResult {
    extract_job_postings(&vec![value])
        .into_iter()
        .next()
        .expect("one JobPosting")
}

#[test]
fn test_finds_job_posting_case_insensitively() {
    let jsonld = vec![
        json!({"@type": "Organization", "name": "Acme"}),
        json!({"@type": "jobposting", "title": "First"}),
        json!({"@type": ["Thing", "JobPosting"], "title": "Second"}),
    ];
    let titles: Vec<_> = extract_job_postings(&jsonld)
        .into_iter()
        .map(|p| p.title)
        .collect();
    assert_eq!(titles, vec![Some("First".into()), Some("Second".into())]);
}

#[test]
fn test_title_falls_back_to_name() {
    let p = posting(json!({"@type": "JobPosting", "name": " Designer "}));
    assert_eq!(p.title, Some("Designer".into()));
}

#[test]
fn test_hiring_organization_object_or_string() {
    let p = posting(json!({"@type": "JobPosting", "hiringOrganization": {"name": "Widgets Co"}}));
    assert_eq!(p.organization, Some("Widgets Co".into()));

    let p = posting(json!({"@type": "JobPosting", "hiringOrganization": "Bare Org"}));
    assert_eq!(p.organization, Some("Bare Org".into()));
}

#[test]
fn test_location_from_postal_address_list() {
    let p = posting(json!({
        "@type": "JobPosting",
        "jobLocation": [{
            "@type": "Place",
            "address": {
                "addressLocality": "Portland",
                "addressRegion": "",
                "addressCountry": {"@type": "Country", "name": "US"}
            }
        }]
    }));
    assert_eq!(p.location, Some("Portland, US".into()));
}

#[test]
fn test_location_falls_back_to_place_name() {
    let p = posting(json!({"@type": "JobPosting", "jobLocation": {"name": "HQ"}}));
    assert_eq!(p.location, Some("HQ".into()));

    let p = posting(json!({"@type": "JobPosting", "jobLocationType": "TELECOMMUTE"}));
    assert_eq!(p.location, None);

    let p = posting(json!({"@type": "JobPosting"}));
    assert_eq!(p.location, None);
}

#[test]
fn test_employment_type_lowercased() {
    let p = posting(json!({"@type": "JobPosting", "employmentType": "PART_TIME"}));
    assert_eq!(p.employment_type, Some("part_time".into()));

    let p = posting(json!({"@type": "JobPosting", "employmentType": ["FULL_TIME", "CONTRACTOR"]}));
    assert_eq!(p.employment_type, Some("full_time, contractor".into()));
}

#[test]
fn test_salary_formats() {
    let both = posting(json!({
        "@type": "JobPosting",
        "baseSalary": {"currency": "USD", "value": {"minValue": 120000, "maxValue": 150000}}
    }));
    assert_eq!(both.salary, Some("USD 120000–150000".into()));

    let one = posting(json!({
        "@type": "JobPosting",
        "baseSalary": {"currency": "EUR", "value": {"maxValue": "70000"}}
    }));
    assert_eq!(one.salary, Some("EUR 70000".into()));

    let no_currency = posting(json!({
        "@type": "JobPosting",
        "baseSalary": {"value": {"minValue": 50}}
    }));
    assert_eq!(no_currency.salary, Some("50".into()));
}

#[test]
fn test_salary_loose_shapes_yield_nothing() {
    let scalar = posting(json!({
        "@type": "JobPosting",
        "baseSalary": {"currency": "USD", "value": 90000}
    }));
    assert_eq!(scalar.salary, None);

    let zero = posting(json!({
        "@type": "JobPosting",
        "baseSalary": {"currency": "USD", "value": {"minValue": 0, "maxValue": 0}}
    }));
    assert_eq!(zero.salary, None);
}

#[test]
fn test_description_entity_decoded_and_stripped() {
    let p = posting(json!({
        "@type": "JobPosting",
        "description": "&lt;p&gt;We build &amp;amp; ship&lt;/p&gt;&lt;ul&gt;&lt;li&gt;Rust&lt;/li&gt;&lt;/ul&gt;"
    }));
    assert_eq!(p.description, "We build & ship\nRust");
}

#[test]
fn test_description_keeps_escaped_tags_inside_markup() {
    let p = posting(json!({
        "@type": "JobPosting",
        "description": "<p>Escape &lt;script&gt; payloads in templates.</p><p>Ship fast and own on-call.</p>"
    }));
    assert_eq!(
        p.description,
        "Escape <script> payloads in templates.\nShip fast and own on-call."
    );

    let p = posting(json!({
        "@type": "JobPosting",
        "description": "Harden &lt;script&gt; handling <b>across</b> our apps"
    }));
    assert_eq!(p.description, "Harden <script> handling\nacross\nour apps");
}

#[test]
fn test_page_meta_values_are_not_decoded_twice() {
    let metadata = vec![("og:site_name".to_string(), "R&amp;D Labs".to_string())];
    let meta = extract_page_meta(&metadata);
    assert_eq!(meta.site_name, Some("R&amp;D Labs".into()));
}

#[test]
fn test_page_meta_prefers_open_graph() {
    let metadata = vec![
        ("title".to_string(), "Careers | Acme".to_string()),
        ("og:title".to_string(), "Staff Engineer".to_string()),
        ("og:site_name".to_string(), "Acme".to_string()),
    ];
    let meta = extract_page_meta(&metadata);
    assert_eq!(meta.title, Some("Staff Engineer".into()));
    assert_eq!(meta.site_name, Some("Acme".into()));

    let meta = extract_page_meta(&vec![("title".to_string(), "Only Title".to_string())]);
    assert_eq!(meta.title, Some("Only Title".into()));
    assert_eq!(meta.site_name, None);
}

#[test]
fn test_org_from_host() {
    let url = url::Url::parse("https://careers.acme.io/jobs/1").unwrap();
    assert_eq!(org_from_host(&url), "Careers");
    let url = url::Url::parse("https://www.widgets-co.com/").unwrap();
    assert_eq!(org_from_host(&url), "Widgets Co");
    assert_eq!(org_from_slug("acme-labs"), "Acme Labs");
}
