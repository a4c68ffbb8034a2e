use super::common::{Common, CommonArgs, subject_label};
use clap::Args;
use ohno::app_err;
use roli_dash::series::Subject;
use roli_dash::series::factor::{self, FACTOR_KEYS};
use roli_dash::{Result, reports};

/// Most subjects a single comparison chart stays readable with.
const MAX_COMPARED: usize = 5;

#[derive(Args, Debug)]
pub struct FactorsArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Countries to compare, up to five subjects in total
    #[arg(long, value_name = "NAMES", value_delimiter = ',')]
    pub countries: Vec<String>,

    /// Include the regional or global average as a compared subject
    #[arg(long)]
    pub average: bool,

    /// Region scoping the average ("global" or a canonical region name)
    #[arg(long, short = 'r', value_name = "REGION")]
    pub region: Option<String>,

    /// Edition year to compare
    #[arg(long, short = 'y', value_name = "YEAR")]
    pub year: Option<String>,
}

pub fn chart_factors(args: &FactorsArgs) -> Result<()> {
    let common = Common::new(&args.common)?;
    let region = common.region_filter(args.region.as_deref());
    let year = common.year(args.year.as_deref()).to_string();

    // With no explicit selection, compare against the average alone, the
    // same starting point the dashboard uses.
    let mut subjects = Vec::new();
    if args.average || args.countries.is_empty() {
        subjects.push(Subject::Aggregate);
    }
    subjects.extend(args.countries.iter().cloned().map(Subject::Country));

    if subjects.len() > MAX_COMPARED {
        return Err(app_err!("at most {MAX_COMPARED} subjects can be compared at once"));
    }

    let rows = factor::comparison(common.store.records(), &subjects, &region, &year, &FACTOR_KEYS);
    let columns: Vec<String> = subjects.iter().map(|s| subject_label(s, &region)).collect();

    if common.console_wanted() {
        let mut output = String::new();
        reports::console::factor_rows(
            &format!("Factor Comparison — {year}"),
            &columns,
            &rows,
            true,
            common.use_colors(),
            &mut output,
        )?;
        print!("{output}");
    }

    let mut csv_output = String::new();
    reports::csv::factor_rows(&columns, &rows, &mut csv_output)?;
    common.save_csv(&csv_output)?;

    let document = reports::json::comparison(&year, region.label(), &columns, &rows, &common.config.palette);
    common.save_json(&document)?;

    Ok(())
}
