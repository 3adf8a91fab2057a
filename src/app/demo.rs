use crate::app::report::Reporter;
use crate::core::lego_set_repository::LegoSetRepository;
use crate::utils::error::Result;
use std::io::Write;

pub const DEMO_TAG: &str = "Microscale";
pub const DEMO_PACKAGING_TYPE: &str = "Box";
pub const DEMO_YEAR: i32 = 2009;
pub const DEMO_MAX_WEIGHT: f64 = 0.1;

/// 依序示範每一個查詢
pub fn run_demo<W: Write>(repo: &LegoSetRepository, reporter: &mut Reporter<W>) -> Result<()> {
    tracing::debug!("Running demo over {} Lego sets", repo.get_all().len());

    reporter.heading(&format!("Counting Lego sets with tag \"{}\":", DEMO_TAG))?;
    reporter.count("count_with_tag", repo.count_with_tag(DEMO_TAG))?;

    reporter.heading(&format!(
        "Printing Lego sets with packaging type \"{}\":",
        DEMO_PACKAGING_TYPE
    ))?;
    reporter.names(
        "names_with_packaging_type",
        repo.names_with_packaging_type(DEMO_PACKAGING_TYPE),
    )?;

    reporter.heading(&format!("Printing Lego sets released in {}:", DEMO_YEAR))?;
    reporter.sets(
        "sets_between_years",
        repo.sets_between_years(DEMO_YEAR, DEMO_YEAR),
    )?;

    reporter.heading("Counting Lego sets that have dimensions specified:")?;
    reporter.count("count_with_dimensions", repo.count_with_dimensions())?;

    reporter.heading(&format!(
        "Printing Lego sets not heavier than {}:",
        DEMO_MAX_WEIGHT
    ))?;
    reporter.names(
        "names_with_max_weight",
        repo.names_with_max_weight(DEMO_MAX_WEIGHT),
    )?;

    reporter.heading("Name of the Lego set with the most pieces:")?;
    reporter.name("name_with_most_pieces", repo.name_with_most_pieces()?)?;

    Ok(())
}
