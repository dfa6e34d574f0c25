use chrono::{Duration, NaiveDate, NaiveDateTime};
use velodata_analyze::queries;
use velodata_core::{
    AgeBucket, DurationCategory, Gender, RentalRecord, Station, price_for_duration,
};

fn at_hour(hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, 1)
        .expect("valid date")
        .and_hms_opt(hour, 15, 0)
        .expect("valid time")
}

fn record(rental_id: u64, duration_minutes: i64) -> RentalRecord {
    let start_time = at_hour(9);
    RentalRecord {
        rental_id,
        user_id: rental_id as u32,
        age: 29,
        gender: Gender::Female,
        start_time,
        end_time: start_time + Duration::minutes(duration_minutes),
        start_station: Station::A,
        end_station: Station::B,
        duration_minutes,
        price: price_for_duration(duration_minutes),
    }
}

fn with_station(mut base: RentalRecord, station: Station) -> RentalRecord {
    base.start_station = station;
    base
}

fn with_hour(mut base: RentalRecord, hour: u32) -> RentalRecord {
    base.start_time = at_hour(hour);
    base.end_time = base.start_time + Duration::minutes(base.duration_minutes);
    base
}

fn with_age(mut base: RentalRecord, age: u32) -> RentalRecord {
    base.age = age;
    base
}

#[test]
fn total_revenue_sums_then_rounds_once() {
    let records = vec![record(1, 10), record(2, 40), record(3, 70)];
    assert_eq!(records[0].price, 3.5);
    assert_eq!(records[1].price, 6.5);
    assert_eq!(records[2].price, 9.5);
    assert_eq!(queries::total_revenue(&records), 19.5);
}

#[test]
fn long_rentals_filter_and_order_descending() {
    let records = vec![record(1, 10), record(2, 40), record(3, 70)];
    let rows = queries::long_rentals(&records);

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].rental_id, 3);
    assert_eq!(rows[0].duration_minutes, 70);
    assert_eq!(rows[1].rental_id, 2);
    assert_eq!(rows[1].duration_minutes, 40);
}

#[test]
fn station_departures_with_no_match_is_empty_not_an_error() {
    let records = vec![
        with_station(record(1, 20), Station::B),
        with_station(record(2, 20), Station::C),
    ];
    assert!(queries::station_departures(&records, Station::A).is_empty());
}

#[test]
fn station_departures_keep_relation_order() {
    let records = vec![
        record(1, 20),
        with_station(record(2, 20), Station::B),
        record(3, 20),
    ];
    let rows = queries::station_departures(&records, Station::A);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].rental_id, 1);
    assert_eq!(rows[1].rental_id, 3);
}

#[test]
fn rentals_per_station_counts_descending() {
    let records = vec![
        record(1, 20),
        record(2, 20),
        with_station(record(3, 20), Station::D),
    ];
    let rows = queries::rentals_per_station(&records);

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].station, Station::A);
    assert_eq!(rows[0].rentals, 2);
    assert_eq!(rows[1].station, Station::D);
    assert_eq!(rows[1].rentals, 1);
}

#[test]
fn top_station_is_first_of_ranking() {
    let records = vec![
        record(1, 20),
        record(2, 20),
        with_station(record(3, 20), Station::D),
    ];
    let top = queries::top_station(&records).expect("top station");
    assert_eq!(top.station, Station::A);
    assert_eq!(top.rentals, 2);
}

#[test]
fn avg_duration_per_station_rounds_and_orders() {
    let records = vec![
        record(1, 10),
        record(2, 21),
        with_station(record(3, 60), Station::E),
    ];
    let rows = queries::avg_duration_per_station(&records);

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].station, Station::E);
    assert_eq!(rows[0].avg_duration_minutes, 60.0);
    assert_eq!(rows[1].station, Station::A);
    assert_eq!(rows[1].avg_duration_minutes, 15.5);
}

#[test]
fn hour_extraction_projects_every_record() {
    let records = vec![with_hour(record(1, 20), 0), with_hour(record(2, 20), 23)];
    let rows = queries::hour_extraction(&records);

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].hour, 0);
    assert_eq!(rows[1].hour, 23);
}

#[test]
fn rentals_per_hour_is_ascending_by_hour() {
    let records = vec![
        with_hour(record(1, 20), 17),
        with_hour(record(2, 20), 8),
        with_hour(record(3, 20), 17),
        with_hour(record(4, 20), 3),
    ];
    let rows = queries::rentals_per_hour(&records);

    assert_eq!(rows.len(), 3);
    assert_eq!((rows[0].hour, rows[0].rentals), (3, 1));
    assert_eq!((rows[1].hour, rows[1].rentals), (8, 1));
    assert_eq!((rows[2].hour, rows[2].rentals), (17, 2));
}

#[test]
fn peak_hours_rank_by_count_and_limit() {
    let records = vec![
        with_hour(record(1, 20), 8),
        with_hour(record(2, 20), 8),
        with_hour(record(3, 20), 8),
        with_hour(record(4, 20), 17),
        with_hour(record(5, 20), 17),
        with_hour(record(6, 20), 12),
        with_hour(record(7, 20), 3),
    ];
    let rows = queries::peak_hours(&records, 3);

    assert_eq!(rows.len(), 3);
    assert_eq!((rows[0].hour, rows[0].rentals), (8, 3));
    assert_eq!((rows[1].hour, rows[1].rentals), (17, 2));
    assert_eq!(rows[2].rentals, 1);
}

#[test]
fn peak_morning_station_only_counts_the_window() {
    let records = vec![
        with_hour(with_station(record(1, 20), Station::B), 6),
        with_hour(with_station(record(2, 20), Station::B), 13),
        with_hour(record(3, 20), 7),
        with_hour(with_station(record(4, 20), Station::C), 12),
        with_hour(with_station(record(5, 20), Station::C), 9),
    ];
    let top = queries::peak_morning_station(&records).expect("top morning station");

    assert_eq!(top.station, Station::C);
    assert_eq!(top.rentals, 2);
}

#[test]
fn peak_morning_station_is_none_without_morning_rentals() {
    let records = vec![with_hour(record(1, 20), 6), with_hour(record(2, 20), 13)];
    assert!(queries::peak_morning_station(&records).is_none());
}

#[test]
fn average_age_rounds_to_two_decimals() {
    let records = vec![
        with_age(record(1, 20), 20),
        with_age(record(2, 20), 21),
        with_age(record(3, 20), 21),
    ];
    assert_eq!(queries::average_age(&records), 20.67);
}

#[test]
fn rentals_by_gender_counts_descending() {
    let mut records = vec![record(1, 20), record(2, 20), record(3, 20)];
    records[0].gender = Gender::Male;
    let rows = queries::rentals_by_gender(&records);

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].gender, Gender::Female);
    assert_eq!(rows[0].rentals, 2);
    assert_eq!(rows[1].gender, Gender::Male);
    assert_eq!(rows[1].rentals, 1);
}

#[test]
fn age_buckets_group_one_record_each() {
    let records = vec![
        with_age(record(1, 20), 25),
        with_age(record(2, 20), 35),
        with_age(record(3, 20), 55),
    ];
    let rows = queries::rentals_by_age_bucket(&records);

    assert_eq!(rows.len(), 3);
    for row in &rows {
        assert_eq!(row.rentals, 1);
    }
    let buckets: Vec<AgeBucket> = rows.iter().map(|row| row.bucket).collect();
    assert!(buckets.contains(&AgeBucket::From18To30));
    assert!(buckets.contains(&AgeBucket::From31To40));
    assert!(buckets.contains(&AgeBucket::From51));
}

#[test]
fn most_profitable_routes_rank_by_revenue_and_limit() {
    let mut records = vec![
        record(1, 100),
        record(2, 100),
        record(3, 10),
        record(4, 50),
    ];
    records[2].end_station = Station::C;
    records[3].end_station = Station::D;
    let rows = queries::most_profitable_routes(&records, 2);

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].start_station, Station::A);
    assert_eq!(rows[0].end_station, Station::B);
    assert_eq!(rows[0].trips, 2);
    assert_eq!(rows[0].revenue, 25.0);
    assert_eq!(rows[1].end_station, Station::D);
    assert_eq!(rows[1].revenue, 7.5);
}

#[test]
fn price_by_duration_category_orders_by_average_price() {
    let records = vec![record(1, 10), record(2, 25), record(3, 45), record(4, 90)];
    let rows = queries::price_by_duration_category(&records);

    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0].category, DurationCategory::Short);
    assert_eq!(rows[0].avg_price, 3.5);
    assert_eq!(rows[1].category, DurationCategory::Medium);
    assert_eq!(rows[2].category, DurationCategory::Long);
    assert_eq!(rows[3].category, DurationCategory::VeryLong);
    assert_eq!(rows[3].avg_price, 11.5);
    for row in &rows {
        assert_eq!(row.rentals, 1);
    }
}
