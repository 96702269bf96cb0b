use anyhow::{Context, Result};
use lc_lunar::convert;

use crate::cli::ConvertArgs;

pub fn run(args: ConvertArgs) -> Result<()> {
    let lunar = convert(args.year, args.month, args.day)
        .with_context(|| format!("cannot convert {}-{}-{}", args.year, args.month, args.day))?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&lunar)?);
    } else {
        println!("{lunar}");
    }
    Ok(())
}
