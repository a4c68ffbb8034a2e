use super::common::{Common, CommonArgs, parse_variable, subject_title};
use clap::Args;
use roli_dash::Result;
use roli_dash::dataset::VariableKey;
use roli_dash::reports;
use roli_dash::series::Subject;
use roli_dash::series::time::{self, SeriesOutcome};

#[derive(Args, Debug)]
pub struct TimeSeriesArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Variable key to chart (roli, f1..f8, sf11..sf87)
    #[arg(long, short = 'v', value_name = "KEY", default_value = "roli", value_parser = parse_variable)]
    pub variable: VariableKey,

    /// Region scoping the average ("global" or a canonical region name)
    #[arg(long, short = 'r', value_name = "REGION")]
    pub region: Option<String>,

    /// Country to chart; omit to chart the regional or global average
    #[arg(long, value_name = "NAME")]
    pub country: Option<String>,
}

pub fn chart_time_series(args: &TimeSeriesArgs) -> Result<()> {
    let common = Common::new(&args.common)?;
    let region = common.region_filter(args.region.as_deref());
    let subject = args.country.clone().map_or(Subject::Aggregate, Subject::Country);
    let title = subject_title(&subject, &region);
    let label = args.variable.label();

    match time::build(common.store.records(), &subject, args.variable, &region) {
        SeriesOutcome::NoData => {
            println!("No data for {title} — {label}.");
        }
        SeriesOutcome::TooShort(points) => {
            let year = points.first().map_or_else(String::new, |p| p.year.clone());
            println!("Only one year of data ({year}) for {title} — {label}; not enough history to plot a trend.");
        }
        SeriesOutcome::Renderable(trend) => {
            if common.console_wanted() {
                let mut output = String::new();
                reports::console::time_series(&title, label, &trend, common.use_colors(), &mut output)?;
                print!("{output}");
            }

            let mut csv_output = String::new();
            reports::csv::time_series(&trend.points, &mut csv_output)?;
            common.save_csv(&csv_output)?;

            let document = reports::json::time_series(&title, args.variable, &trend, &common.config.palette);
            common.save_json(&document)?;
        }
    }

    Ok(())
}
