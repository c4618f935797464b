use crate::app::App;
use crate::error::SnapshotCliError;
use crate::helpers::truncate_value;
use crate::printer::Printer;
use miette::IntoDiagnostic;
use serde_json::{Map, Value};
use starbase_styles::color;
use system_snapshot::SystemSnapshot;
use tracing::debug;

#[tracing::instrument(skip_all)]
pub fn show(cli: &App) -> miette::Result<()> {
    let snapshot = SystemSnapshot::capture()?;

    if snapshot.is_degraded() {
        debug!(
            facets = ?snapshot.degraded_facets(),
            "Some facets could not be captured and were replaced with a sentinel"
        );
    }

    if !cli.vars.is_empty() {
        return show_variables(cli, &snapshot);
    }

    let mut printer = Printer::new();

    if cli.json {
        printer.write_line(snapshot.to_record().to_json().into_diagnostic()?);
        printer.flush()?;

        return Ok(());
    }

    // SYSTEM

    printer.named_section("System", |p| {
        p.entry("Hostname", color::muted_light(snapshot.hostname()));
        p.entry(
            "OS",
            color::muted_light(format!("{} {}", snapshot.os_name(), snapshot.os_version())),
        );
        p.entry("Architecture", color::muted_light(snapshot.architecture()));
        p.entry(
            "Working Directory",
            color::path(snapshot.working_directory()),
        );
        p.entry(
            "Process ID",
            color::symbol(snapshot.process_id().to_string()),
        );
        p.entry(
            "Timestamp",
            color::symbol(snapshot.timestamp_ns().to_string()),
        );

        Ok(())
    })?;

    // VARIABLES

    printer.named_section("All Environment Variables", |p| {
        for (name, value) in snapshot.get_all_variables() {
            p.entry(color::property(name), truncate_value(value, cli.truncate));
        }

        Ok(())
    })?;

    printer.line();
    printer.entry(
        "Total Environment Variables",
        snapshot.variable_count().to_string(),
    );
    printer.flush()?;

    Ok(())
}

fn show_variables(cli: &App, snapshot: &SystemSnapshot) -> miette::Result<()> {
    let mut found: Vec<(&str, &str)> = vec![];

    for name in &cli.vars {
        if found.iter().any(|(existing, _)| *existing == name.as_str()) {
            continue;
        }

        let Some(value) = snapshot.get_variable(name) else {
            return Err(SnapshotCliError::UnknownVariable {
                name: name.to_owned(),
            }
            .into());
        };

        found.push((name.as_str(), value));
    }

    let mut printer = Printer::new();

    if cli.json {
        // Keeps argument order, as the map is insertion ordered
        let map = found
            .iter()
            .map(|(name, value)| (name.to_string(), Value::String(value.to_string())))
            .collect::<Map<_, _>>();

        printer.write_line(serde_json::to_string_pretty(&map).into_diagnostic()?);
    } else {
        for (name, value) in found {
            printer.entry(color::property(name), truncate_value(value, cli.truncate));
        }
    }

    printer.flush()?;

    Ok(())
}
