use super::common::{Common, CommonArgs};
use clap::Args;
use roli_dash::Result;

#[derive(Args, Debug)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

pub fn summarize_dataset(args: &SummaryArgs) -> Result<()> {
    let common = Common::new(&args.common)?;
    let store = &common.store;

    let countries = store.countries();
    let regions = store.regions();
    let years = store.years();

    println!("{} records loaded", store.len());
    println!("Countries: {} | Regions: {} | Years: {}", countries.len(), regions.len(), years.len());
    println!("Years: {}", years.join(", "));
    println!("Regions: {}", regions.join(", "));

    Ok(())
}
