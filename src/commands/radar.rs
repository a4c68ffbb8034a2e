use super::common::{Common, CommonArgs, parse_variable, subject_title};
use clap::Args;
use roli_dash::dataset::VariableKey;
use roli_dash::series::Subject;
use roli_dash::series::factor::{self, FACTOR_KEYS};
use roli_dash::{Result, reports};

#[derive(Args, Debug)]
pub struct RadarArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Country to chart; omit to chart the regional or global average
    #[arg(long, value_name = "NAME")]
    pub country: Option<String>,

    /// Region scoping the average ("global" or a canonical region name)
    #[arg(long, short = 'r', value_name = "REGION")]
    pub region: Option<String>,

    /// Variable keys to plot, one radar axis each
    #[arg(long, value_name = "KEYS", value_delimiter = ',', value_parser = parse_variable, default_values_t = FACTOR_KEYS)]
    pub factors: Vec<VariableKey>,

    /// Edition years to overlay [default: the configured year]
    #[arg(long, value_name = "YEARS", value_delimiter = ',')]
    pub years: Vec<String>,
}

pub fn chart_radar(args: &RadarArgs) -> Result<()> {
    let common = Common::new(&args.common)?;
    let region = common.region_filter(args.region.as_deref());
    let subject = args.country.clone().map_or(Subject::Aggregate, Subject::Country);
    let title = subject_title(&subject, &region);

    let years = if args.years.is_empty() {
        vec![common.config.year.clone()]
    } else {
        args.years.clone()
    };

    let rows = factor::radar(common.store.records(), &subject, &region, &args.factors, &years);
    if rows.is_empty() {
        println!("Select at least one factor to display the chart.");
        return Ok(());
    }

    if common.console_wanted() {
        let mut output = String::new();
        reports::console::factor_rows(
            &format!("Comparative Radar Chart — {title}"),
            &years,
            &rows,
            false,
            common.use_colors(),
            &mut output,
        )?;
        print!("{output}");
    }

    let mut csv_output = String::new();
    reports::csv::factor_rows(&years, &rows, &mut csv_output)?;
    common.save_csv(&csv_output)?;

    let document = reports::json::radar(&title, &years, &rows, &common.config.palette);
    common.save_json(&document)?;

    Ok(())
}
