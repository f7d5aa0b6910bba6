use canteen::{Lunch, LunchConfig};
use serde_json::Value;

async fn small_lunch() -> canteen::LunchReport {
    let config = LunchConfig::builder().seats(3).portions(30).build();
    Lunch::new(config)
        .expect("valid config")
        .serve()
        .await
        .expect("lunch to finish")
}

#[tokio::test(flavor = "multi_thread")]
async fn report_serializes_with_the_expected_shape() {
    let report = small_lunch().await;

    let value: Value = serde_json::to_value(&report).expect("serialize report");
    assert_eq!(value["seats"], 3);
    assert_eq!(value["portions"], 30);
    assert_eq!(value["total_eaten"], 30);
    assert_eq!(value["leftover"], 0);
    assert!(value["portions_by_seat"].is_array());
    assert_eq!(value["portions_by_seat"].as_array().map(Vec::len), Some(3));
    assert!(value.get("elapsed_ms").is_some());
}

#[tokio::test(flavor = "multi_thread")]
async fn rendered_table_carries_header_and_totals() {
    let report = small_lunch().await;

    let rendered = report.render();
    assert!(rendered.contains("Lunch distribution"));
    assert!(rendered.contains("Seat"));
    assert!(rendered.contains("Portions"));
    assert!(rendered.contains("Total: 30 eaten, 0 left in the pot"));
}

#[tokio::test(flavor = "multi_thread")]
async fn mean_reflects_the_finished_lunch() {
    let report = small_lunch().await;
    assert_eq!(report.mean(), 10.0);
}
