use rowcursor::{cursor::mem::MemCursor, value::Value};

/// Sets up tracing subscriber.
#[allow(dead_code)]
pub fn setup_tracing(level: Option<&str>) {
    use tracing_subscriber::{
        fmt::{format::FmtSpan, layer},
        layer::SubscriberExt,
        util::SubscriberInitExt,
        EnvFilter,
    };

    let filter_layer = level
        .map(EnvFilter::new)
        .unwrap_or_else(|| EnvFilter::try_from_default_env().unwrap_or("warn".into()));
    let fmt_layer = layer()
        .with_test_writer()
        .with_span_events(FmtSpan::NEW | FmtSpan::CLOSE);

    // Several tests in the same binary may try to install it.
    let _ = tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init();
}

/// The `(code, population)` rows of the countries fixture.
#[allow(dead_code)]
pub const COUNTRIES: &[(&str, i32)] = &[
    ("ARE", 2441000),
    ("GBR", 59623400),
    ("FRA", 59225700),
    ("DEU", 82164700),
    ("USA", 278357000),
];

/// A cursor over the first `n` rows of [`COUNTRIES`].
#[allow(dead_code)]
pub fn countries(n: usize) -> MemCursor {
    let rows = COUNTRIES[..n]
        .iter()
        .map(|&(code, population)| vec![Value::from(code), Value::from(population)])
        .collect();
    MemCursor::new(2, rows).expect("fixture rows have two columns")
}

/// A cursor over `n` rows of `(id, label)`, with `id` in `1..=n`.
#[allow(dead_code)]
pub fn numbered(n: i64) -> MemCursor {
    let rows = (1..=n)
        .map(|id| vec![Value::BigInt(id), Value::Text(format!("{id:0>8}"))])
        .collect();
    MemCursor::new(2, rows).expect("fixture rows have two columns")
}
