use rowcursor::{
    cursor::CursorHandle,
    decode::{decoder, from_fn, Decode, RowDecoder},
    error::{CursorResult, Error},
    RowCursor,
};

mod test_utils;

#[derive(Debug, PartialEq)]
struct Country {
    code: String,
    population: i32,
}

fn country_decoder() -> impl RowDecoder<Output = Country> {
    decoder::<(String, i32)>().map(|(code, population)| Country { code, population })
}

#[test]
fn test_facade_extractors() -> CursorResult<()> {
    let mut rows = RowCursor::new(test_utils::countries(5));
    let dec = country_decoder();

    let batch = rows.fetch_chunk(&dec, 2)?;
    assert_eq!(batch.len(), 2);
    assert_eq!(
        batch[0],
        Country {
            code: "ARE".into(),
            population: 2441000
        }
    );

    let rest = rows.at_least_one(&dec)?;
    assert_eq!(rest.len(), 3);
    assert_eq!(rest.head().code, "FRA");

    assert!(rows.all(&dec)?.is_empty());
    assert_eq!(rows.at_most_one(&dec)?, None);
    assert!(matches!(rows.exactly_one(&dec), Err(Error::UnexpectedEnd)));

    let cursor = rows.into_inner();
    assert!(cursor.is_exhausted());
    assert!(!cursor.is_closed());
    Ok(())
}

#[test]
fn test_process_stops_on_callback_error() -> CursorResult<()> {
    let mut rows = RowCursor::new(test_utils::numbered(10));

    let mut seen = Vec::new();
    let outcome = rows.process(&decoder::<i64>(), |id| {
        if id == 4 {
            return Err(id);
        }
        seen.push(id);
        Ok(())
    })?;
    assert_eq!(outcome, Err(4));
    assert_eq!(seen, vec![1, 2, 3]);

    // Processing resumes right after the failed row.
    assert_eq!(rows.all(&decoder::<i64>())?.first(), Some(&5));
    Ok(())
}

#[test]
fn test_process_all_rows() -> CursorResult<()> {
    let mut rows = RowCursor::new(test_utils::countries(5));
    let mut total = 0_i64;
    rows.process(&decoder::<(String, i32)>(), |(_, population)| {
        total += i64::from(population);
        Ok::<_, ()>(())
    })?
    .unwrap();
    assert_eq!(total, 2441000 + 59623400 + 59225700 + 82164700 + 278357000);
    Ok(())
}

#[test]
fn test_custom_decoder_over_dyn_cursor() -> CursorResult<()> {
    let mut cursor = test_utils::countries(2);
    let handle: &mut dyn CursorHandle = &mut cursor;
    let mut rows = RowCursor::new(handle);

    // Reads only the second column.
    let population = from_fn(2, |cursor, offset| i32::decode_at(cursor, offset + 1));
    assert_eq!(rows.all(&population)?, vec![2441000, 59623400]);
    Ok(())
}
