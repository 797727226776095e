//! CSV export of an energy system's node table.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::model::{EnergySystem, NodeMeta};

const HEADER: &str = "name,component,region,sector,carrier,node_type,latitude,longitude";

/// Exports the node table of `es` to a CSV file at the given path.
///
/// Writes a header row followed by one row per node, grouped by component
/// kind. Produces deterministic output for identical inputs.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_nodes_csv(es: &EnergySystem, path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_nodes_csv(es, buf)
}

/// Writes the node table of `es` as CSV to any writer.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_nodes_csv(es: &EnergySystem, writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    wtr.write_record(HEADER.split(','))?;

    let mut rows: Vec<(&str, &str, &NodeMeta)> = Vec::with_capacity(es.node_count());
    rows.extend(es.busses.iter().map(|b| (b.name.as_str(), "bus", &b.meta)));
    rows.extend(es.sources.iter().map(|s| (s.name.as_str(), "source", &s.meta)));
    rows.extend(es.sinks.iter().map(|s| (s.name.as_str(), "sink", &s.meta)));
    rows.extend(
        es.transformers
            .iter()
            .map(|t| (t.name.as_str(), "transformer", &t.meta)),
    );
    rows.extend(es.chps.iter().map(|c| (c.name.as_str(), "chp", &c.meta)));
    rows.extend(es.storages.iter().map(|s| (s.name.as_str(), "storage", &s.meta)));
    rows.extend(
        es.connectors
            .iter()
            .map(|c| (c.name.as_str(), "connector", &c.meta)),
    );

    for (name, component, meta) in rows {
        wtr.write_record(&[
            name.to_string(),
            component.to_string(),
            meta.region.clone(),
            meta.sector.clone(),
            meta.carrier.clone(),
            meta.node_type.clone(),
            format!("{:.4}", meta.latitude),
            format!("{:.4}", meta.longitude),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic::create_fpwe;

    #[test]
    fn row_count_matches_node_count() {
        let es = create_fpwe();
        let mut buf = Vec::new();
        write_nodes_csv(&es, &mut buf).unwrap();
        let output = String::from_utf8(buf).unwrap();
        assert_eq!(output.lines().count(), es.node_count() + 1);
    }

    #[test]
    fn header_is_stable() {
        let es = create_fpwe();
        let mut buf = Vec::new();
        write_nodes_csv(&es, &mut buf).unwrap();
        let output = String::from_utf8(buf).unwrap();
        assert_eq!(
            output.lines().next().unwrap(),
            "name,component,region,sector,carrier,node_type,latitude,longitude"
        );
    }

    #[test]
    fn deterministic_output() {
        let es = create_fpwe();
        let mut buf1 = Vec::new();
        let mut buf2 = Vec::new();
        write_nodes_csv(&es, &mut buf1).unwrap();
        write_nodes_csv(&es, &mut buf2).unwrap();
        assert_eq!(buf1, buf2);
    }
}
