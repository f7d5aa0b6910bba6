use canteen::{Lunch, LunchConfig, LunchReport};

async fn serve(seats: usize, portions: usize) -> LunchReport {
    let config = LunchConfig::builder()
        .seats(seats)
        .portions(portions)
        .build();
    Lunch::new(config)
        .expect("valid config")
        .serve()
        .await
        .expect("lunch to finish")
}

#[tokio::test(flavor = "multi_thread")]
async fn all_portions_are_eaten_at_small_tables() {
    for (seats, portions) in [(2, 10), (3, 100), (4, 1_000)] {
        let report = serve(seats, portions).await;
        assert_eq!(report.total_eaten(), portions);
        assert_eq!(report.leftover(), 0);
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn all_portions_are_eaten_at_large_tables() {
    for (seats, portions) in [(5, 10_000), (6, 100_000), (7, 1_000_000)] {
        let report = serve(seats, portions).await;
        assert_eq!(report.total_eaten(), portions);
        assert_eq!(report.leftover(), 0);
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn per_seat_tallies_sum_to_the_total() {
    let report = serve(5, 10_000).await;
    assert_eq!(report.portions_by_seat().len(), 5);
    assert_eq!(report.portions_by_seat().iter().sum::<usize>(), report.total_eaten());
}

#[tokio::test(flavor = "multi_thread")]
async fn every_seat_eats_at_least_its_first_serving() {
    let report = serve(6, 6).await;
    assert!(report.portions_by_seat().iter().all(|&portions| portions == 1));
}

#[tokio::test(flavor = "multi_thread")]
async fn portions_are_distributed_fairly_between_seats() {
    let (seats, portions) = (7, 1_000_000);
    let report = serve(seats, portions).await;

    let allowed = (portions as f64 / seats as f64) / 8.0;
    let actual = report.std_deviation();
    assert!(
        actual <= allowed,
        "deviation {actual:.2} exceeds allowed {allowed:.2}: {:?}",
        report.portions_by_seat()
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn pauses_do_not_strand_portions_in_the_pot() {
    let config = LunchConfig::builder()
        .seats(3)
        .portions(9)
        .eat_for(std::time::Duration::from_millis(1))
        .discuss_for(std::time::Duration::from_millis(1))
        .build();

    let report = Lunch::new(config)
        .expect("valid config")
        .serve()
        .await
        .expect("lunch to finish");

    assert_eq!(report.total_eaten(), 9);
    assert_eq!(report.leftover(), 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn a_single_waiter_slot_still_drains_the_pot() {
    let config = LunchConfig::builder()
        .seats(4)
        .portions(1_000)
        .waiter_slots(1)
        .build();

    let report = Lunch::new(config)
        .expect("valid config")
        .serve()
        .await
        .expect("lunch to finish");

    assert_eq!(report.total_eaten(), 1_000);
}
