use super::common::{Common, CommonArgs, parse_variable};
use clap::Args;
use roli_dash::dataset::{VariableKey, by_region, by_year};
use roli_dash::ranking::rank;
use roli_dash::{Result, reports, stats};

#[derive(Args, Debug)]
pub struct TopBottomArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Variable key to rank by (roli, f1..f8, sf11..sf87)
    #[arg(long, short = 'v', value_name = "KEY", default_value = "roli", value_parser = parse_variable)]
    pub variable: VariableKey,

    /// Region to rank within ("global" or a canonical region name)
    #[arg(long, short = 'r', value_name = "REGION")]
    pub region: Option<String>,

    /// Edition year to rank
    #[arg(long, short = 'y', value_name = "YEAR")]
    pub year: Option<String>,
}

pub fn chart_top_bottom(args: &TopBottomArgs) -> Result<()> {
    let common = Common::new(&args.common)?;
    let region = common.region_filter(args.region.as_deref());
    let year = common.year(args.year.as_deref()).to_string();

    let rows = by_region(by_year(common.store.records(), &year), &region);
    let ranking = rank(rows.iter().copied(), args.variable);
    let average = stats::average(rows, args.variable);

    if common.console_wanted() {
        let mut output = String::new();
        reports::console::ranking(
            args.variable.label(),
            region.label(),
            &year,
            &ranking,
            average,
            common.use_colors(),
            &mut output,
        )?;
        print!("{output}");
    }

    let mut csv_output = String::new();
    reports::csv::ranking(&ranking, &mut csv_output)?;
    common.save_csv(&csv_output)?;

    let document = reports::json::ranking(args.variable, region.label(), &year, &ranking, average, &common.config.palette);
    common.save_json(&document)?;

    Ok(())
}
