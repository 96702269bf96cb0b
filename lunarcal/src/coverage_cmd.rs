use anyhow::Result;
use lunarcal::render::CoverageView;

use crate::catalog;
use crate::cli::CoverageArgs;

pub fn run(args: CoverageArgs) -> Result<()> {
    let catalog = catalog::load(&args.events)?;
    let missing = catalog.missing_days_by_month();
    print!("{}", CoverageView::new(&missing));
    if let Some(out) = &args.write_json {
        catalog::save_json(&catalog, out)?;
        println!("\nCatalogue written to {} as JSON", out.display());
    }
    Ok(())
}
