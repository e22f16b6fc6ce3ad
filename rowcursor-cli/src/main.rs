use std::{
    io::{self, Write},
    str::FromStr,
};

use rowcursor::{
    cursor::{mem::MemCursor, CursorHandle},
    decode::decoder,
    error::{CursorResult, Error},
    value::Value,
    RowCursor,
};
use tracing::info;

fn main() -> CursorResult<()> {
    setup_tracing();

    let mut rows = RowCursor::new(load_countries()?);
    let dec = decoder::<(String, i32)>();

    loop {
        println!(
            "Pick a command: `one`, `optional`, `list`, `all`, `chunk`, `stream`, `reset` or `quit`."
        );
        let outcome = match &*input::<String>("cmd> ") {
            "one" => rows.exactly_one(&dec).map(|row| print_rows([row])),
            "optional" => rows.at_most_one(&dec).map(print_rows),
            "list" => rows.at_least_one(&dec).map(print_rows),
            "all" => rows.all(&dec).map(print_rows),
            "chunk" => {
                let size: isize = input("chunk size> ");
                rows.fetch_chunk(&dec, size).map(print_rows)
            }
            "stream" => {
                let size: isize = input("chunk size> ");
                let take: usize = input("rows to pull> ");
                let pulled = rows
                    .stream_with_chunk_size(&dec, size)
                    .take(take)
                    .collect::<CursorResult<Vec<_>>>();
                pulled.map(print_rows)
            }
            "reset" => {
                rows = RowCursor::new(load_countries()?);
                println!("ok");
                Ok(())
            }
            "quit" => break,
            _ => {
                println!("invalid option; try again.");
                Ok(())
            }
        };

        match outcome {
            Ok(()) => {}
            Err(error @ (Error::UnexpectedEnd | Error::UnexpectedContinuation)) => {
                println!("cardinality violation: {error}");
            }
            Err(error) => return Err(error),
        }
    }

    let mut cursor = rows.into_inner();
    info!(advances = cursor.advances(), "closing cursor");
    cursor.close()?;

    Ok(())
}

/// Builds the demo result set.
fn load_countries() -> CursorResult<MemCursor> {
    info!("loading countries result set");
    MemCursor::new(
        2,
        vec![
            vec![Value::from("ARE"), Value::Int(2441000)],
            vec![Value::from("GBR"), Value::Int(59623400)],
            vec![Value::from("FRA"), Value::Int(59225700)],
            vec![Value::from("DEU"), Value::Int(82164700)],
            vec![Value::from("USA"), Value::Int(278357000)],
        ],
    )
}

fn print_rows<R>(rows: R)
where
    R: IntoIterator<Item = (String, i32)>,
{
    println!("{}", "-".repeat(30));
    for (code, population) in rows {
        println!("{code:<6} | {population:>12}");
    }
    println!("{}", "-".repeat(30));
}

/// Sets up tracing subscriber.
fn setup_tracing() {
    use tracing_subscriber::{
        fmt::{format::FmtSpan, layer},
        layer::SubscriberExt,
        util::SubscriberInitExt,
        EnvFilter,
    };

    let filter_layer = EnvFilter::try_from_default_env().unwrap_or("warn".into());
    let fmt_layer = layer().with_span_events(FmtSpan::NEW | FmtSpan::CLOSE);

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}

/// Gets a value from the stdin.
fn input<T: FromStr>(prompt: &str) -> T {
    let mut buf = String::new();
    loop {
        print!("{prompt}");
        io::stdout().flush().unwrap();
        buf.clear();
        if io::stdin().read_line(&mut buf).unwrap() == 0 {
            println!("\nbye");
            std::process::exit(0);
        }
        match T::from_str(buf.trim()) {
            Ok(val) => break val,
            Err(_) => println!("try again."),
        }
    }
}
