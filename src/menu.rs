//! Interactive menu driving a [`SensorRegistry`] over generic line I/O.
//!
//! The loop is generic over `BufRead`/`Write` so tests can run a scripted
//! session against in-memory buffers; `main` passes locked stdin/stdout.

use anyhow::Result;
use sensreg_sensors::{Sensor, SensorRegistry};
use sensreg_types::{ProcessReport, ScalarValue, SensorKind, SensorSnapshot};
use std::io::{BufRead, Write};

const MENU: &str = "\n\
    1. Create temperature sensor\n\
    2. Create pressure sensor\n\
    3. Record reading\n\
    4. Process readings\n\
    5. Show sensors\n\
    6. Quit\n\
    Option: ";

/// Run the menu loop until the user quits or input ends.
pub fn run<R: BufRead, W: Write>(
    registry: &mut SensorRegistry,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    loop {
        write!(out, "{MENU}")?;
        out.flush()?;

        let Some(line) = read_line(input)? else {
            break;
        };

        match line.parse::<u32>() {
            Ok(1) => {
                if !create_sensor(registry, SensorKind::Temperature, input, out)? {
                    break;
                }
            }
            Ok(2) => {
                if !create_sensor(registry, SensorKind::Pressure, input, out)? {
                    break;
                }
            }
            Ok(3) => {
                if !record_reading(registry, input, out)? {
                    break;
                }
            }
            Ok(4) => {
                if registry.is_empty() {
                    writeln!(out, "No sensors registered.")?;
                }
                for report in registry.process_all() {
                    writeln!(out, "{}", render_report(&report))?;
                }
            }
            Ok(5) => {
                if registry.is_empty() {
                    writeln!(out, "No sensors registered.")?;
                }
                for snapshot in registry.describe_all() {
                    writeln!(out, "{}", render_snapshot(&snapshot))?;
                }
            }
            Ok(6) => {
                registry.clear();
                writeln!(out, "Registry cleared. Goodbye.")?;
                break;
            }
            _ => writeln!(out, "Please choose an option between 1 and 6.")?,
        }
    }
    Ok(())
}

/// Render one processing report for the terminal.
pub fn render_report(report: &ProcessReport) -> String {
    match report.removed_minimum {
        Some(min) => format!(
            "[{}] {}: lowest reading {} removed, mean of {} remaining reading(s): {}",
            report.kind, report.id, min, report.remaining, report.mean
        ),
        None => format!(
            "[{}] {}: mean of {} reading(s): {}",
            report.kind, report.id, report.remaining, report.mean
        ),
    }
}

/// Render one sensor snapshot for the terminal.
pub fn render_snapshot(snapshot: &SensorSnapshot) -> String {
    let dump = if snapshot.readings.is_empty() {
        "(empty)".to_string()
    } else {
        snapshot
            .readings
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" -> ")
    };
    format!(
        "[{}] id: {} | readings: {} | {}",
        snapshot.kind, snapshot.id, snapshot.count, dump
    )
}

/// Prompt for an identifier and register a new sensor. Returns `false` on
/// end of input.
fn create_sensor<R: BufRead, W: Write>(
    registry: &mut SensorRegistry,
    kind: SensorKind,
    input: &mut R,
    out: &mut W,
) -> Result<bool> {
    write!(out, "{kind} sensor id: ")?;
    out.flush()?;
    let Some(id) = read_line(input)? else {
        return Ok(false);
    };
    if id.is_empty() {
        writeln!(out, "Identifier must not be empty.")?;
        return Ok(true);
    }
    registry.insert(Sensor::new(kind, &id));
    writeln!(out, "{kind} sensor \"{id}\" registered.")?;
    Ok(true)
}

/// Prompt for a sensor id and a typed reading, then record it. Returns
/// `false` on end of input.
fn record_reading<R: BufRead, W: Write>(
    registry: &mut SensorRegistry,
    input: &mut R,
    out: &mut W,
) -> Result<bool> {
    write!(out, "Sensor id: ")?;
    out.flush()?;
    let Some(id) = read_line(input)? else {
        return Ok(false);
    };

    let Some(sensor) = registry.find_by_id_mut(&id) else {
        writeln!(out, "Sensor \"{id}\" not found.")?;
        return Ok(true);
    };

    let prompt = match sensor.kind() {
        SensorKind::Temperature => "Reading (float): ",
        SensorKind::Pressure => "Reading (integer): ",
    };
    write!(out, "{prompt}")?;
    out.flush()?;
    let Some(raw) = read_line(input)? else {
        return Ok(false);
    };

    let value = match sensor.kind() {
        SensorKind::Temperature => match raw.parse::<f32>() {
            Ok(v) => ScalarValue::Float(v),
            Err(_) => {
                writeln!(out, "\"{raw}\" is not a valid float reading.")?;
                return Ok(true);
            }
        },
        SensorKind::Pressure => match raw.parse::<i32>() {
            Ok(v) => ScalarValue::Integer(v),
            Err(_) => {
                writeln!(out, "\"{raw}\" is not a valid integer reading.")?;
                return Ok(true);
            }
        },
    };

    // The value was parsed against the sensor's own kind, so recording
    // cannot mismatch here; surface the error anyway rather than unwrap.
    match sensor.record(value) {
        Ok(()) => writeln!(out, "Reading {value} recorded for \"{id}\".")?,
        Err(err) => writeln!(out, "{err}")?,
    }
    Ok(true)
}

/// Read one trimmed line; `None` on end of input.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(buf.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sensreg_types::SensorId;
    use std::io::Cursor;

    fn run_session(script: &str) -> (SensorRegistry, String) {
        let mut registry = SensorRegistry::new();
        let mut input = Cursor::new(script.to_string());
        let mut output = Vec::new();
        run(&mut registry, &mut input, &mut output).unwrap();
        (registry, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_create_record_process_quit() {
        let script = "1\nT1\n3\nT1\n20.0\n3\nT1\n18.0\n3\nT1\n22.0\n4\n6\n";
        let (registry, output) = run_session(script);

        assert!(output.contains("Temperature sensor \"T1\" registered."));
        assert!(output.contains("lowest reading 18 removed"));
        assert!(output.contains("mean of 2 remaining reading(s): 21"));
        assert!(output.contains("Registry cleared. Goodbye."));
        // Quit cleared the registry
        assert!(registry.is_empty());
    }

    #[test]
    fn test_unknown_sensor_reports_not_found() {
        let (_, output) = run_session("3\nghost\n6\n");
        assert!(output.contains("Sensor \"ghost\" not found."));
    }

    #[test]
    fn test_invalid_option_reprompts() {
        let (_, output) = run_session("9\nbanana\n6\n");
        let prompts = output.matches("Option: ").count();
        assert_eq!(prompts, 3);
        assert!(output.contains("Please choose an option between 1 and 6."));
    }

    #[test]
    fn test_invalid_reading_is_rejected() {
        let (registry, output) = run_session("2\nP1\n3\nP1\nnot-a-number\n6\n");
        assert!(output.contains("\"not-a-number\" is not a valid integer reading."));
        assert!(registry.is_empty()); // quit clears
    }

    #[test]
    fn test_eof_ends_loop_without_quit() {
        let (registry, _) = run_session("1\nT1\n");
        // No quit option ran, so the sensor survives until drop
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_render_report_contains_contract_fields() {
        let report = ProcessReport {
            id: SensorId::new("T1"),
            kind: SensorKind::Temperature,
            removed_minimum: Some(ScalarValue::Float(18.0)),
            mean: 21.0,
            remaining: 2,
        };
        let text = render_report(&report);
        assert!(text.contains("T1"));
        assert!(text.contains("18"));
        assert!(text.contains("21"));
        assert!(text.contains('2'));
    }

    #[test]
    fn test_render_snapshot_dumps_readings() {
        let snapshot = SensorSnapshot {
            id: SensorId::new("P1"),
            kind: SensorKind::Pressure,
            count: 2,
            readings: vec![ScalarValue::Integer(100), ScalarValue::Integer(110)],
        };
        let text = render_snapshot(&snapshot);
        assert!(text.contains("P1"));
        assert!(text.contains("100 -> 110"));
    }
}
