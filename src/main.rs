mod args;
mod config;
mod reader;
mod writer;

use ccsm::{input::InputEvent, Accounts, Result};

fn main() -> Result {
    let app_config = config::configure_app()?;

    log::debug!("Application configured with {app_config:?}. Beginning process...");

    let mut accounts = Accounts::new(app_config.policy);

    process_data(&mut accounts)?;

    log::debug!("Process complete. Beginning report...");

    report_to_std_out(&accounts)?;

    log::debug!("Application finished successfully!");

    Ok(())
}

/// Read input file and apply every operation to its account
fn process_data(accounts: &mut Accounts) -> Result {
    let input_path = args::parse_input_arg()?;
    log::debug!("Found filepath as input arg: {input_path:?}");

    let mut rdr = reader::build_csv_reader(input_path)?;

    log::debug!("Deserializing reader...");
    for record in rdr.deserialize::<InputEvent>() {
        log::debug!("Parsing record into InputEvent: {record:?}");
        let input_event = match record {
            Ok(input_event) => input_event,
            Err(e) => {
                log::warn!("{e}");
                continue;
            }
        };

        log::debug!("Parsing input_event into Operation: {input_event:?}");
        let operation = match input_event.parse_operation() {
            Ok(operation) => operation,
            Err(e) => {
                log::warn!("{e}");
                continue;
            }
        };

        log::debug!("Applying operation: {operation:?}");
        if let Err(e) = accounts.apply(&operation) {
            log::warn!("Rejected {operation:?} on account {}: {e}", operation.account_id);
        }
    }

    Ok(())
}

/// Build report from results, and write report to stdout
fn report_to_std_out(accounts: &Accounts) -> Result {
    let report = accounts.build_report();
    log::debug!("Successfully built reports for {} accounts", report.len());

    let mut wtr = writer::build_csv_writer();

    log::debug!("Serializing reports...");
    for account_report in report.iter() {
        log::debug!("Serializing report: {account_report:?}");
        wtr.serialize(account_report)?;
    }

    let output = writer::write_to_string(wtr)?;

    log::debug!("Writing to stdout: {output:?}");
    print!("{}", output);

    Ok(())
}
