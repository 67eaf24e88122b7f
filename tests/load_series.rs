mod fixtures;

use fixtures::{OHLCV_PATH, deserialize_csv, load_reference_ohlcvs, render_csv, write_source};
use quantedge_feed::{Column, LoadError, Ohlcv, PriceRecord, load_series, read_series};

const SCENARIO: &str = "open,high,low,close,volume\n\
                        1,2,0.5,1.5,100\n\
                        1.5,2.5,1,2,150\n\
                        2,3,1.5,2.5,200\n";

#[test]
fn fixture_matches_serde_reference() {
    let series = load_series(OHLCV_PATH).expect("fixture loads");
    let reference: Vec<PriceRecord> = load_reference_ohlcvs().iter().map(Into::into).collect();

    assert_eq!(series.len(), 48);
    assert_eq!(series.as_slice(), reference.as_slice());
}

#[test]
fn scenario_file_loads_in_order() {
    let (_dir, path) = write_source("scenario.csv", SCENARIO);
    let series = load_series(&path).unwrap();

    assert_eq!(
        series.as_slice(),
        [
            PriceRecord::new(1.0, 2.0, 0.5, 1.5, 100.0),
            PriceRecord::new(1.5, 2.5, 1.0, 2.0, 150.0),
            PriceRecord::new(2.0, 3.0, 1.5, 2.5, 200.0),
        ]
    );
}

#[test]
fn pascal_case_header_is_accepted() {
    let (_dir, path) = write_source("pascal.csv", "Open,High,Low,Close,Volume\n1,2,3,4,5\n");
    assert_eq!(load_series(&path).unwrap().len(), 1);
}

#[test]
fn reversed_header_is_schema_error() {
    let (_dir, path) = write_source("reversed.csv", "volume,close,low,high,open\n1,2,3,4,5\n");
    let err = load_series(&path).unwrap_err();

    assert!(matches!(err, LoadError::Schema { .. }), "{err:?}");
    assert!(err.to_string().contains("open,high,low,close,volume"));
}

#[test]
fn empty_file_is_schema_error() {
    let (_dir, path) = write_source("empty.csv", "");
    assert!(matches!(
        load_series(&path).unwrap_err(),
        LoadError::Schema { found } if found.is_empty()
    ));
}

#[test]
fn bad_cell_rejects_whole_file() {
    let (_dir, path) = write_source(
        "bad.csv",
        "open,high,low,close,volume\n1,1,1,1,1\n1.0,2.0,abc,3.0,100\n2,2,2,2,2\n",
    );
    let err = load_series(&path).unwrap_err();

    match &err {
        LoadError::Parse { row, column, token } => {
            assert_eq!(*row, 2);
            assert_eq!(*column, Column::Low);
            assert_eq!(token, "abc");
        }
        other => panic!("expected parse error, got {other:?}"),
    }
    assert!(err.to_string().contains("'abc'"));
}

#[test]
fn missing_file_is_source_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_series(dir.path().join("absent.csv")).unwrap_err();
    assert!(matches!(err, LoadError::SourceUnavailable { .. }));
}

#[test]
fn values_pass_through_unvalidated() {
    let series = read_series("open,high,low,close,volume\n-1,-2,5,0,-7\n".as_bytes()).unwrap();
    let r = &series[0];

    // high below low and negative volume are kept as-is
    assert!(r.high() < r.low());
    assert!(r.volume() < 0.0);
}

#[test]
fn ingestion_is_deterministic() {
    let first = load_series(OHLCV_PATH).unwrap();
    let second = load_series(OHLCV_PATH).unwrap();

    let bits = |s: &quantedge_feed::PriceSeries| -> Vec<[u64; 5]> {
        s.iter()
            .map(|r| [r.open(), r.high(), r.low(), r.close(), r.volume()].map(f64::to_bits))
            .collect()
    };
    assert_eq!(bits(&first), bits(&second));
}

#[test]
fn rendered_series_loads_back_identically() {
    let series = load_series(OHLCV_PATH).unwrap();
    let csv = render_csv(series.as_slice());
    let reloaded = read_series(csv.as_bytes()).unwrap();

    assert_eq!(series, reloaded);
    assert_eq!(reloaded.as_slice(), deserialize_csv(&csv).as_slice());
}

#[test]
fn columns_read_in_header_order() {
    let series = read_series(SCENARIO.as_bytes()).unwrap();
    let last: Vec<f64> = Column::ALL
        .iter()
        .map(|column| column.extract(&series[2]))
        .collect();

    assert_eq!(last, [2.0, 3.0, 1.5, 2.5, 200.0]);
}
