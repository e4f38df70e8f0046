//! Typed value walkthrough.
//!
//! Decodes two integers from their on-disk encoding, compares and adds them,
//! then runs a vectorized equality scan over a generated column.
//!
//! Run with: cargo run --example typed_values -- --literal 13 --cardinality 1024

use clap::Parser;
use coltype::types::compare::{greater_than, greater_than_or_equal, less_than_or_equal, not_equal};
use coltype::types::{IntegerValue, TypeId, TypedValue, INTEGER_WIDTH};
use coltype::vectorized::{encode_integers, PackedBatch};
use coltype::{TypeCatalog, VectorizedEvaluator};
use tracing_subscriber::EnvFilter;

/// Walk through the typed value API: decode, compare, add, and a vectorized
/// equality scan
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Value of the first integer; the second holds twice this value
    #[arg(short, long, default_value_t = 13)]
    literal: u64,

    /// Number of rows in the scanned column (values 0..cardinality)
    #[arg(short, long, default_value_t = 1024)]
    cardinality: u64,
}

fn main() -> coltype::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let catalog = TypeCatalog::with_builtins();

    // "Storage" here is just an encoded variable in memory.
    let on_disk = IntegerValue::encode(args.literal);
    let mut an_attr = catalog.instantiate(TypeId::Integer)?;
    an_attr.unmarshall(&on_disk)?;

    let mut another_attr = an_attr.clone_type();
    another_attr.unmarshall(&IntegerValue::encode(args.literal.wrapping_mul(2)))?;

    println!("Create two variables: {an_attr} and {another_attr}");

    let (a, b) = (an_attr.as_ref(), another_attr.as_ref());
    println!(
        "= : {}; < : {}; != : {}; <= : {}; > : {}; >= : {}",
        u8::from(a.equal(b)?),
        u8::from(a.less_than(b)?),
        u8::from(not_equal(a, b)?),
        u8::from(less_than_or_equal(a, b)?),
        u8::from(greater_than(a, b)?),
        u8::from(greater_than_or_equal(a, b)?),
    );

    an_attr.add_to_left(another_attr.as_ref())?;
    println!("Sum of the two variables is: {an_attr}");

    let column = encode_integers(&(0..args.cardinality).collect::<Vec<_>>());
    let batch = PackedBatch::new(&column, INTEGER_WIDTH)?;
    let mut result = vec![false; batch.len()];
    VectorizedEvaluator::default().equal(&IntegerValue::default(), &batch, &on_disk, &mut result)?;

    let bits: String = result.iter().map(|hit| if *hit { '1' } else { '0' }).collect();
    println!("{bits}");

    Ok(())
}
